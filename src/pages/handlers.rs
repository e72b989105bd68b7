// src/pages/handlers.rs
//! Public pages.

use axum::response::Html;

/// GET / - marketing home page. Public, never gated.
pub async fn home_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html>
<head><title>Taskboard</title><link rel="stylesheet" href="/static/app.css"></head>
<body>
<nav><a href="/">Taskboard</a> <a href="/login">Sign in</a> <a href="/register">Get started</a></nav>
<main>
<h1>Stay on top of your day</h1>
<p>Capture tasks, check them off, and keep everything in one place.</p>
<p><a href="/register">Create a free account</a> or <a href="/login">sign in</a> to see your tasks.</p>
</main>
</body>
</html>
"#,
    )
}
