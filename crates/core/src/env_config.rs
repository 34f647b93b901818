//! Environment variable parsing with warn-level logging for invalid values.

use std::fmt::Display;
use std::str::FromStr;

/// Database path override.
pub const ENV_DB_PATH: &str = "PASSAGE_ARCHIVE_DB";

/// r2d2 pool size for the sheet store.
pub const ENV_DB_POOL_SIZE: &str = "PASSAGE_ARCHIVE_DB_POOL_SIZE";

/// Default listing limit for `/api/records` and `list`.
pub const ENV_LIST_LIMIT: &str = "PASSAGE_ARCHIVE_LIST_LIMIT";

/// Parse an environment variable, falling back to `default`.
///
/// An unset variable is the expected case and falls back silently. A set but
/// unparsable value logs a warning before falling back.
pub fn env_parse_with_default<T: FromStr + Display>(var: &str, default: T) -> T {
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Read a non-blank environment variable.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
