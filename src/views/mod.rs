//! Server-rendered HTML pages
//!
//! Pages are plain `format!` templates composed into a shared layout with an
//! inline stylesheet. No template engine and no static file serving. Every
//! piece of user-supplied text passes through [`escape`] on its way into a
//! page.

pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use axum::response::Html;

/// Shared stylesheet, inlined into every page.
const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #1a1a1a;
    color: #e0e0e0;
    line-height: 1.6;
}
header { background-color: #2a2a2a; border-bottom: 1px solid #3a3a3a; padding: 14px 20px; }
nav { display: flex; gap: 18px; align-items: center; }
nav a { color: #e0e0e0; text-decoration: none; font-weight: 600; }
nav a:hover { color: #4a9eff; }
nav .brand { color: #4a9eff; font-size: 20px; margin-right: 12px; }
.container { max-width: 960px; margin: 0 auto; padding: 24px 20px; }
h1 { color: #4a9eff; margin-bottom: 10px; }
h2 { color: #4a9eff; margin: 24px 0 10px; }
a { color: #4a9eff; }
.flash { background: #10b981; color: #fff; padding: 10px 14px; border-radius: 4px; margin-bottom: 18px; }
.badge { display: inline-block; background: #3a3a3a; color: #e0e0e0; border-radius: 10px; padding: 1px 9px; font-size: 12px; margin-left: 6px; }
.genre { display: inline-block; background: #223a55; color: #9ecbff; border-radius: 10px; padding: 2px 10px; font-size: 13px; margin: 0 6px 6px 0; }
ul.plain { list-style: none; }
ul.plain li { margin-bottom: 6px; }
.meta { color: #888; margin-bottom: 4px; }
.cards { display: flex; flex-wrap: wrap; gap: 14px; margin-top: 10px; }
.card { background: #2a2a2a; border: 1px solid #3a3a3a; border-radius: 6px; padding: 14px; width: 260px; }
.card img { width: 100%; height: 140px; object-fit: cover; border-radius: 4px; margin-bottom: 8px; }
.portrait { max-width: 320px; width: 100%; border-radius: 6px; margin: 12px 0; }
.seeking {
    background: #433019;
    border: 1px solid #8a6d3b;
    color: #f0c36d;
    padding: 10px 14px;
    border-radius: 4px;
    margin: 14px 0;
}
form { max-width: 480px; }
label { display: block; margin-top: 14px; font-weight: 600; }
input[type="text"], input[type="datetime-local"], input[type="number"] {
    width: 100%;
    padding: 8px;
    margin-top: 4px;
    background: #2a2a2a;
    border: 1px solid #3a3a3a;
    border-radius: 4px;
    color: #e0e0e0;
}
.checkbox-row { margin-top: 14px; }
.checkbox-row label { display: inline; font-weight: 600; margin: 0 0 0 6px; }
.button {
    display: inline-block;
    padding: 10px 20px;
    background: #4a9eff;
    color: #fff;
    border: none;
    border-radius: 4px;
    margin-top: 18px;
    font-weight: 600;
    font-size: 15px;
    cursor: pointer;
    text-decoration: none;
}
.button:hover { background: #3a8eef; }
.button.danger { background: #ef4444; }
.button.danger:hover { background: #df3434; }
table { width: 100%; border-collapse: collapse; margin-top: 12px; }
th, td { text-align: left; padding: 10px 8px; border-bottom: 1px solid #3a3a3a; }
th { color: #888; font-size: 13px; text-transform: uppercase; }
.error-box h1 { color: #ef4444; }
.actions { margin-top: 20px; display: flex; gap: 10px; align-items: center; }
"#;

/// Escape text for interpolation into HTML.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap a page body in the site chrome, with an optional flash banner.
///
/// `body` is trusted markup from the page modules; `title` and `flash`
/// are text and get escaped here.
pub fn layout(title: &str, flash: Option<&str>, body: &str) -> Html<String> {
    let banner = match flash {
        Some(message) => format!("<div class=\"flash\">{}</div>\n", escape(message)),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Marquee</title>
    <style>{STYLE}</style>
</head>
<body>
    <header>
        <nav>
            <a class="brand" href="/">Marquee</a>
            <a href="/venues">Venues</a>
            <a href="/artists">Artists</a>
            <a href="/shows">Shows</a>
        </nav>
    </header>
    <div class="container">
{banner}{body}
    </div>
</body>
</html>"#,
        title = escape(title),
    ))
}

/// Render the error page for a status code and user-facing message.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<section class="error-box">
    <h1>{code} {reason}</h1>
    <p>{message}</p>
    <p><a class="button" href="/">Back to the homepage</a></p>
</section>"#,
        code = status.as_u16(),
        reason = escape(reason),
        message = escape(message),
    );
    layout(reason, None, &body)
}
