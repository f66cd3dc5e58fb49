//! Server-side rendering of the greeting page.

/// Escape text for safe interpolation into an HTML text node.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the greeting page with the display message interpolated.
///
/// The message is escaped before interpolation; everything else on
/// the page is static.
#[must_use]
pub fn render(message: &str) -> String {
    let message = escape_html(message);
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Hola Mundo Docker Compose</title>
</head>
<body>
    <main>
        <h1>¡Hola Mundo!</h1>
        <p>{message}</p>
        <p>Conectado a MySQL con Docker Compose</p>
    </main>
</body>
</html>
"#
    )
}
