use crate::models::Route;
use serde::Deserialize;

/// Raw search values as typed by the user.
///
/// Field names match the form fields, cookie names and session keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RouteFilter {
    #[serde(rename = "RouteName", default)]
    pub route_name: String,
    #[serde(rename = "TransportType", default)]
    pub transport_type: String,
    #[serde(rename = "IsExpress", default)]
    pub is_express: String,
}

impl RouteFilter {
    /// Tri-state express flag: `None` unless the value reads as a boolean.
    ///
    /// Surrounding whitespace and letter case are ignored, so `" True "` is `Some(true)`.
    pub fn express_flag(&self) -> Option<bool> {
        let value = self.is_express.trim();
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    pub fn criteria(&self) -> RouteCriteria {
        RouteCriteria {
            name_contains: Some(self.route_name.clone()).filter(|s| !s.is_empty()),
            transport_type: Some(self.transport_type.clone()).filter(|s| !s.is_empty()),
            is_express: self.express_flag(),
        }
    }
}

/// Predicates applied to routes; `None` means "match all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteCriteria {
    pub name_contains: Option<String>,
    pub transport_type: Option<String>,
    pub is_express: Option<bool>,
}

impl RouteCriteria {
    pub fn matches(&self, route: &Route) -> bool {
        self.name_contains
            .as_deref()
            .map_or(true, |needle| route.name.contains(needle))
            && self
                .transport_type
                .as_deref()
                .map_or(true, |t| route.transport_type == t)
            && self.is_express.map_or(true, |e| route.is_express == e)
    }
}
