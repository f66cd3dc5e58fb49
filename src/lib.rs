#![forbid(unsafe_code)]

//! Greeting web service backed by `MySQL`.

pub mod config;
pub mod display;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod retry;
pub mod web;

pub use config::AppConfig;
pub use errors::{AppError, Result};
