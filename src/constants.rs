//! Stable application-wide constants.
//!
//! Values here are default fallbacks for env-var-based configuration and the
//! fixed names that appear on the wire (cookie keys, form fields).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Table cache defaults ---

/// Lifetime of a cached entity-set snapshot: 4 min 56 s. Overridden by `TABLE_CACHE_TTL`.
pub const DEFAULT_TABLE_CACHE_TTL_SECONDS: u64 = 2 * 28 + 240;
/// Maximum rows loaded into one snapshot. Overridden by `TABLE_ROW_LIMIT`.
pub const DEFAULT_TABLE_ROW_LIMIT: i64 = 20;

/// Longest accepted cache TTL or session idle timeout: one year.
pub const MAX_DURATION_SECONDS: u64 = 365 * 24 * 60 * 60;

// --- Sessions ---

/// Idle time after which a server-side session is dropped: 20 minutes.
/// Overridden by `SESSION_IDLE_TIMEOUT`.
pub const DEFAULT_SESSION_IDLE_TIMEOUT_SECONDS: u64 = 20 * 60;
/// Upper bound on live sessions kept in memory.
pub const SESSION_MAX_ENTRIES: u64 = 10_000;
/// Name of the HttpOnly cookie carrying the session identifier.
pub const SESSION_COOKIE_NAME: &str = "transport_journal_session";

// --- Search filter keys (cookie names, session keys and form fields) ---

pub const ROUTE_NAME_KEY: &str = "RouteName";
pub const TRANSPORT_TYPE_KEY: &str = "TransportType";
pub const IS_EXPRESS_KEY: &str = "IsExpress";
