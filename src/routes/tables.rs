use crate::error::{AppError, Result};
use crate::models::EntitySet;
use crate::render::{render_table, table_index_page};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
};
use std::sync::Arc;

/// GET /table - Links to every entity-set table
pub async fn table_index() -> Html<String> {
    Html(table_index_page())
}

/// GET /table/{name} - Cached snapshot of one entity set
pub async fn show_table(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>> {
    let set: EntitySet = name.parse().map_err(|e: String| {
        tracing::info!("{}", e);
        AppError::NotFound("Table not found".to_string())
    })?;

    let html = match set {
        EntitySet::Personnel => render_table(&*state.cache.personnel().await?),
        EntitySet::Route => render_table(&*state.cache.routes().await?),
        EntitySet::Schedule => render_table(&*state.cache.schedules().await?),
        EntitySet::Stop => render_table(&*state.cache.stops().await?),
    };

    Ok(Html(html))
}
