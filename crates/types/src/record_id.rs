//! Record identifiers.
//!
//! Ids are client-generated UUIDs. The backend accepts hyphenated
//! RFC 4122 UUIDs of versions 1 to 5 only.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

static RECORD_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("invalid regex for record id")
});

/// Generate a fresh random record id
pub fn new_record_id() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Check whether `value` (ignoring surrounding whitespace) is an acceptable record id
pub fn is_valid_record_id(value: &str) -> bool {
    RECORD_ID_REGEX.is_match(value.trim())
}
