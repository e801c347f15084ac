use super::FilterStore;
use crate::constants::{IS_EXPRESS_KEY, ROUTE_NAME_KEY, TRANSPORT_TYPE_KEY};
use crate::models::RouteFilter;
use async_trait::async_trait;
use axum::http::{header, HeaderMap};
use cookie::Cookie;

/// Value of the request cookie `name`, percent-decoded.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(|parsed| parsed.ok())
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_string())
}

/// Keeps the filter in three plain cookies on the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieFilterStore;

impl CookieFilterStore {
    fn cookie(name: &'static str, value: &str) -> Cookie<'static> {
        Cookie::build((name, value.to_string())).path("/").build()
    }
}

#[async_trait]
impl FilterStore for CookieFilterStore {
    fn label(&self) -> &'static str {
        "cookies"
    }

    async fn load(&self, headers: &HeaderMap) -> RouteFilter {
        RouteFilter {
            route_name: read_cookie(headers, ROUTE_NAME_KEY).unwrap_or_default(),
            transport_type: read_cookie(headers, TRANSPORT_TYPE_KEY).unwrap_or_default(),
            is_express: read_cookie(headers, IS_EXPRESS_KEY).unwrap_or_default(),
        }
    }

    async fn save(&self, _headers: &HeaderMap, filter: &RouteFilter) -> Vec<Cookie<'static>> {
        vec![
            Self::cookie(ROUTE_NAME_KEY, &filter.route_name),
            Self::cookie(TRANSPORT_TYPE_KEY, &filter.transport_type),
            Self::cookie(IS_EXPRESS_KEY, &filter.is_express),
        ]
    }
}
