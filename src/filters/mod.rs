//! Persistence of the last-used route search filter between requests.
//!
//! The search handlers are written once against [`FilterStore`]; the medium
//! (client cookies or a server-side session) is chosen when routes are built.

pub mod cookies;
pub mod session;

use crate::models::RouteFilter;
use async_trait::async_trait;
use axum::http::HeaderMap;
use cookie::Cookie;

pub use cookies::CookieFilterStore;
pub use session::{SessionFilterStore, SessionStore};

#[async_trait]
pub trait FilterStore: Send + Sync {
    /// Short name of the medium, shown in page headings.
    fn label(&self) -> &'static str;

    /// Last saved filter for the client behind `headers`; empty when none.
    async fn load(&self, headers: &HeaderMap) -> RouteFilter;

    /// Persist `filter` and return the cookies to attach to the response.
    async fn save(&self, headers: &HeaderMap, filter: &RouteFilter) -> Vec<Cookie<'static>>;
}
