//! Admin pages: dashboard and the add/edit article forms.

use axum::response::Html;
use quill_core::article::ArticleId;
use quill_store::models::article::{Article, ListedArticle};

use super::{article_href, escape, layout};

/// GET /admin/dashboard
pub fn dashboard_page(username: &str, articles: &[ListedArticle]) -> Html<String> {
    let mut rows = String::new();
    for entry in articles {
        rows.push_str(&format!(
            "<tr><td><a href=\"{view}\">{title}</a></td><td>{date}</td>\
<td><a href=\"{edit}\">Edit</a></td>\
<td><form method=\"post\" action=\"{delete}\"><button type=\"submit\">Delete</button></form></td></tr>",
            view = escape(&article_href("/article", &entry.id)),
            edit = escape(&article_href("/admin/edit", &entry.id)),
            delete = escape(&article_href("/admin/delete", &entry.id)),
            title = escape(&entry.article.title),
            date = escape(&entry.article.date),
        ));
    }
    if rows.is_empty() {
        rows.push_str("<tr><td colspan=\"4\">No articles yet.</td></tr>");
    }

    layout(
        "Dashboard",
        &format!(
            "<h1>Dashboard</h1>\
<p>Signed in as {user}. <a href=\"/logout\">Log out</a></p>\
<p><a href=\"/admin/add\">Add article</a></p>\
<table><thead><tr><th>Title</th><th>Date</th><th></th><th></th></tr></thead>\
<tbody>{rows}</tbody></table>",
            user = escape(username),
        ),
    )
}

/// GET /admin/add -- empty form with the date pre-filled.
pub fn add_page(default_date: &str) -> Html<String> {
    layout(
        "Add article",
        &format!(
            "<h1>Add article</h1>{form}",
            form = article_form("/admin/add", "", "", default_date, "Create"),
        ),
    )
}

/// GET /admin/edit/{id} -- form pre-filled with the stored article.
pub fn edit_page(id: &ArticleId, article: &Article) -> Html<String> {
    layout(
        "Edit article",
        &format!(
            "<h1>Edit article</h1>{form}",
            form = article_form(
                &article_href("/admin/edit", id),
                &article.title,
                &article.content,
                &article.date,
                "Save",
            ),
        ),
    )
}

fn article_form(action: &str, title: &str, content: &str, date: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\
<p><label>Title <input type=\"text\" name=\"title\" value=\"{title}\"></label></p>\
<p><label>Date <input type=\"text\" name=\"date\" value=\"{date}\"></label></p>\
<p><label>Content<br><textarea name=\"content\" rows=\"12\" cols=\"72\">{content}</textarea></label></p>\
<p><button type=\"submit\">{submit}</button> <a href=\"/admin/dashboard\">Cancel</a></p>\
</form>",
        action = escape(action),
        title = escape(title),
        date = escape(date),
        content = escape(content),
        submit = escape(submit),
    )
}
