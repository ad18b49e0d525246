//! Public pages: the article list and a single article.

use axum::response::Html;
use quill_store::models::article::{Article, ListedArticle};

use super::{article_href, escape, layout};

/// GET / -- every article, newest first.
pub fn home_page(articles: &[ListedArticle]) -> Html<String> {
    let mut list = String::new();
    for entry in articles {
        list.push_str(&format!(
            "<li><a href=\"{href}\">{title}</a> <small>{date}</small></li>",
            href = escape(&article_href("/article", &entry.id)),
            title = escape(&entry.article.title),
            date = escape(&entry.article.date),
        ));
    }
    if list.is_empty() {
        list.push_str("<li>No articles published yet.</li>");
    }

    layout(
        "Articles",
        &format!(
            "<h1>Articles</h1><ul class=\"articles\">{list}</ul>\
<p><a href=\"/admin/dashboard\">Admin</a></p>"
        ),
    )
}

/// GET /article/{id}
pub fn article_page(article: &Article) -> Html<String> {
    layout(
        &article.title,
        &format!(
            "<article><h1>{title}</h1><p><time>{date}</time></p>\
<div style=\"white-space: pre-wrap\">{content}</div></article>\
<p><a href=\"/\">Back to articles</a></p>",
            title = escape(&article.title),
            date = escape(&article.date),
            content = escape(&article.content),
        ),
    )
}
