use super::layout::{escape, page, NAV_STYLE};
use crate::models::EntitySet;

pub fn index_page() -> String {
    let body = "<h1>Transport journal</h1>\n\
        <a href='/table'>Tables</a>\n\
        <a href='/info'>Info</a>\n\
        <a href='/searchform1'>SearchForm1</a>\n\
        <a href='/searchform2'>SearchForm2</a>";
    page("Transport journal", NAV_STYLE, body)
}

/// Echo of the current request's host, path and protocol.
pub fn info_page(host: &str, path: &str, protocol: &str) -> String {
    let body = format!(
        "<h1>Info</h1>\n<p>Host: {}</p>\n<p>Path: {}</p>\n<p>Protocol: {}</p>\n<a href='/'>Home</a>",
        escape(host),
        escape(path),
        escape(protocol)
    );
    page("Info", NAV_STYLE, &body)
}

pub fn table_index_page() -> String {
    let links: String = EntitySet::ALL
        .iter()
        .map(|set| format!("<a href='/table/{set}'>{set}</a>\n"))
        .collect();
    let body = format!("<h1>Available tables</h1>\n{links}");
    page("Tables", NAV_STYLE, &body)
}
