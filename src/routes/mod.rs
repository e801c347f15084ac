pub mod pages;
pub mod search;
pub mod tables;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::filters::{CookieFilterStore, SessionFilterStore};
use crate::AppState;
use search::SearchState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cookie_search = SearchState {
        repo: state.repo.clone(),
        filters: Arc::new(CookieFilterStore),
    };
    let session_search = SearchState {
        repo: state.repo.clone(),
        filters: Arc::new(SessionFilterStore::new(state.sessions.clone())),
    };

    Router::new()
        .route("/", get(pages::index))
        .route("/info", get(pages::info))
        .route("/table", get(tables::table_index))
        .route("/table/{name}", get(tables::show_table))
        .with_state(state)
        .merge(search::router("/searchform1", cookie_search))
        .merge(search::router("/searchform2", session_search))
}
