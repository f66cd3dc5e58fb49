//! Unit tests for environment-sourced configuration.

use std::collections::HashMap;
use std::time::Duration;

use mensaje_web::config::AppConfig;

fn make_lookup(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
    move |key| map.get(key).map(|value| (*value).to_owned())
}

#[test]
fn defaults_suit_a_colocated_database_container() {
    let config = AppConfig::from_lookup(|_| None).expect("defaults are valid");

    assert_eq!(config.db.host, "db");
    assert_eq!(config.db.port, 3306);
    assert_eq!(config.db.user, "user");
    assert_eq!(config.db.password, "password");
    assert_eq!(config.db.database, "mydatabase");
    assert_eq!(config.http_port, 5000);
    assert_eq!(config.retry.max_attempts, 5);
    assert_eq!(config.retry.delay, Duration::from_secs(5));
}

#[test]
fn every_variable_overrides_its_default() {
    let lookup = make_lookup(&[
        ("MYSQL_HOST", "mysql.internal"),
        ("MYSQL_PORT", "3307"),
        ("MYSQL_USER", "svc"),
        ("MYSQL_PASSWORD", "hunter2"),
        ("MYSQL_DATABASE", "testdb"),
        ("HTTP_PORT", "8080"),
        ("DB_CONNECT_RETRIES", "10"),
        ("DB_CONNECT_RETRY_SECONDS", "2"),
    ]);

    let config = AppConfig::from_lookup(lookup).expect("overrides are valid");

    assert_eq!(config.db.host, "mysql.internal");
    assert_eq!(config.db.port, 3307);
    assert_eq!(config.db.user, "svc");
    assert_eq!(config.db.password, "hunter2");
    assert_eq!(config.db.database, "testdb");
    assert_eq!(config.http_port, 8080);
    assert_eq!(config.retry.max_attempts, 10);
    assert_eq!(config.retry.delay, Duration::from_secs(2));
}

#[test]
fn empty_host_is_rejected() {
    let lookup = make_lookup(&[("MYSQL_HOST", "")]);

    let err = AppConfig::from_lookup(lookup).expect_err("empty host must fail");
    assert!(
        err.to_string().contains("MYSQL_HOST"),
        "error should name the offending variable, got: {err}"
    );
}

#[test]
fn empty_password_is_rejected() {
    let lookup = make_lookup(&[("MYSQL_PASSWORD", "")]);

    let err = AppConfig::from_lookup(lookup).expect_err("empty password must fail");
    assert!(err.to_string().contains("MYSQL_PASSWORD"));
}

#[test]
fn zero_retries_is_rejected() {
    let lookup = make_lookup(&[("DB_CONNECT_RETRIES", "0")]);

    let err = AppConfig::from_lookup(lookup).expect_err("zero retries must fail");
    assert!(err.to_string().contains("DB_CONNECT_RETRIES"));
}

#[test]
fn non_numeric_port_is_rejected() {
    let lookup = make_lookup(&[("MYSQL_PORT", "lots")]);

    let err = AppConfig::from_lookup(lookup).expect_err("bad port must fail");
    assert!(
        err.to_string().contains("MYSQL_PORT"),
        "error should name the offending variable, got: {err}"
    );
}

#[test]
fn numeric_values_tolerate_surrounding_whitespace() {
    let lookup = make_lookup(&[("HTTP_PORT", " 8080 ")]);

    let config = AppConfig::from_lookup(lookup).expect("trimmed value parses");
    assert_eq!(config.http_port, 8080);
}

/// `from_env` reads the process environment.
///
/// NOTE: mutates process-global env vars; must run serially.
#[test]
#[serial_test::serial]
fn from_env_reads_process_environment() {
    std::env::set_var("MYSQL_HOST", "env.internal");
    std::env::set_var("DB_CONNECT_RETRY_SECONDS", "1");

    let config = AppConfig::from_env().expect("env config parses");
    assert_eq!(config.db.host, "env.internal");
    assert_eq!(config.retry.delay, Duration::from_secs(1));

    std::env::remove_var("MYSQL_HOST");
    std::env::remove_var("DB_CONNECT_RETRY_SECONDS");
}
