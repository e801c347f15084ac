use crate::db::TransportRepository;
use crate::error::{AppError, Result};
use crate::filters::FilterStore;
use crate::models::RouteFilter;
use crate::render::{search_form_page, search_results_page};
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use std::sync::Arc;

/// Dependencies of one mounted search form.
#[derive(Clone)]
pub struct SearchState {
    pub repo: Arc<dyn TransportRepository>,
    pub filters: Arc<dyn FilterStore>,
}

/// Mount the search form at `path`, persisting filters through `state.filters`.
pub fn router(path: &str, state: SearchState) -> Router {
    Router::new()
        .route(path, get(show_form).post(submit))
        .with_state(state)
}

/// GET - Form pre-filled with the last saved filter
pub async fn show_form(
    State(state): State<SearchState>,
    headers: HeaderMap,
) -> Result<Html<String>> {
    let filter = state.filters.load(&headers).await;
    let transport_types = state.repo.transport_types().await?;

    Ok(Html(search_form_page(
        state.filters.label(),
        &filter,
        &transport_types,
    )))
}

/// POST - Save the submitted filter and list matching routes
pub async fn submit(
    State(state): State<SearchState>,
    headers: HeaderMap,
    Form(filter): Form<RouteFilter>,
) -> Result<Response> {
    let criteria = filter.criteria();

    tracing::info!(
        medium = state.filters.label(),
        name = ?criteria.name_contains,
        transport_type = ?criteria.transport_type,
        is_express = ?criteria.is_express,
        "Route search"
    );

    // A failed search must not persist the submitted filter.
    let routes = state.repo.search_routes(&criteria).await?;
    let cookies = state.filters.save(&headers, &filter).await;

    let mut response = Html(search_results_page(state.filters.label(), &routes)).into_response();
    for cookie in cookies {
        let value = HeaderValue::from_str(&cookie.encoded().to_string())
            .map_err(|e| AppError::Internal(format!("Invalid cookie header: {}", e)))?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}
