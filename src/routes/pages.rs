use crate::render::{index_page, info_page};
use axum::{
    http::{header, HeaderMap, Uri, Version},
    response::Html,
};

/// GET / - Navigation page
pub async fn index() -> Html<String> {
    Html(index_page())
}

/// GET /info - Echo host, path and protocol of the request
pub async fn info(headers: HeaderMap, uri: Uri, version: Version) -> Html<String> {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .or_else(|| uri.host())
        .unwrap_or_default();
    let protocol = format!("{:?}", version);

    Html(info_page(host, uri.path(), &protocol))
}
