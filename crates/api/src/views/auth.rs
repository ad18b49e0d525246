use axum::response::Html;

use super::layout;

/// GET /login, and the response to a failed login attempt.
pub fn login_page() -> Html<String> {
    layout(
        "Log in",
        "<h1>Log in</h1>\
<form method=\"post\" action=\"/login\">\
<p><label>Username <input type=\"text\" name=\"username\"></label></p>\
<p><label>Password <input type=\"password\" name=\"password\"></label></p>\
<p><button type=\"submit\">Log in</button></p>\
</form>",
    )
}
