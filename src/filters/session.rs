use super::cookies::read_cookie;
use super::FilterStore;
use crate::constants::{
    IS_EXPRESS_KEY, ROUTE_NAME_KEY, SESSION_COOKIE_NAME, SESSION_MAX_ENTRIES, TRANSPORT_TYPE_KEY,
};
use crate::models::RouteFilter;
use async_trait::async_trait;
use axum::http::HeaderMap;
use cookie::{Cookie, SameSite};
use moka::future::Cache;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

type SessionData = Arc<HashMap<String, String>>;

/// Server-side key/value storage, one map per session id.
///
/// Sessions expire after a period without reads or writes. Concurrent writes
/// to the same session are last-writer-wins per call.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Cache<String, SessionData>,
}

impl SessionStore {
    pub fn new(idle_timeout_seconds: u64) -> Self {
        let sessions = Cache::builder()
            .time_to_idle(Duration::from_secs(idle_timeout_seconds))
            .max_capacity(SESSION_MAX_ENTRIES)
            .build();

        SessionStore { sessions }
    }

    /// Fresh, unguessable session identifier.
    pub fn new_session_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    pub async fn exists(&self, session_id: &str) -> bool {
        self.sessions.get(session_id).await.is_some()
    }

    pub async fn get(&self, session_id: &str, key: &str) -> Option<String> {
        self.sessions
            .get(session_id)
            .await
            .and_then(|data| data.get(key).cloned())
    }

    /// Merge `values` into the session, creating it if needed.
    pub async fn set_many<I>(&self, session_id: &str, values: I)
    where
        I: IntoIterator<Item = (&'static str, String)>,
    {
        let mut data = self
            .sessions
            .get(session_id)
            .await
            .map(|existing| (*existing).clone())
            .unwrap_or_default();
        for (key, value) in values {
            data.insert(key.to_string(), value);
        }
        self.sessions
            .insert(session_id.to_string(), Arc::new(data))
            .await;
    }
}

/// Keeps the filter in the server-side session of the client.
///
/// Only the session id travels in a cookie (HttpOnly); filter values stay on
/// the server and vanish when the session expires.
#[derive(Clone)]
pub struct SessionFilterStore {
    sessions: SessionStore,
}

impl SessionFilterStore {
    pub fn new(sessions: SessionStore) -> Self {
        SessionFilterStore { sessions }
    }

    fn session_cookie(session_id: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE_NAME, session_id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build()
    }
}

#[async_trait]
impl FilterStore for SessionFilterStore {
    fn label(&self) -> &'static str {
        "session"
    }

    async fn load(&self, headers: &HeaderMap) -> RouteFilter {
        let Some(session_id) = read_cookie(headers, SESSION_COOKIE_NAME) else {
            return RouteFilter::default();
        };

        RouteFilter {
            route_name: self
                .sessions
                .get(&session_id, ROUTE_NAME_KEY)
                .await
                .unwrap_or_default(),
            transport_type: self
                .sessions
                .get(&session_id, TRANSPORT_TYPE_KEY)
                .await
                .unwrap_or_default(),
            is_express: self
                .sessions
                .get(&session_id, IS_EXPRESS_KEY)
                .await
                .unwrap_or_default(),
        }
    }

    async fn save(&self, headers: &HeaderMap, filter: &RouteFilter) -> Vec<Cookie<'static>> {
        let mut cookies = Vec::new();

        let existing = match read_cookie(headers, SESSION_COOKIE_NAME) {
            Some(id) => self.sessions.exists(&id).await.then_some(id),
            None => None,
        };

        // Unknown or expired ids are never adopted.
        let session_id = match existing {
            Some(id) => id,
            None => {
                let id = SessionStore::new_session_id();
                tracing::debug!("Starting new session");
                cookies.push(Self::session_cookie(id.clone()));
                id
            }
        };

        self.sessions
            .set_many(
                &session_id,
                [
                    (ROUTE_NAME_KEY, filter.route_name.clone()),
                    (TRANSPORT_TYPE_KEY, filter.transport_type.clone()),
                    (IS_EXPRESS_KEY, filter.is_express.clone()),
                ],
            )
            .await;

        cookies
    }
}
