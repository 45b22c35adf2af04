//! Validation of entered values against a method's field schema.

use std::sync::LazyLock;

use payinstr_types::{FieldDescriptor, FieldErrors, FieldType, FieldValues, PaymentMethod};
use regex::Regex;

use crate::schema::{fields_for, fields_for_tag};

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid regex for email"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s]{6,20}$").expect("invalid regex for phone number"));

pub const INVALID_EMAIL: &str = "Enter a valid email";
pub const INVALID_PHONE: &str = "Enter a valid phone number";

/// Validate `values` against the fields of `method`.
///
/// Returns one message per offending field; an empty map means the values
/// can be submitted. Keys the method does not declare are ignored.
pub fn validate(method: PaymentMethod, values: &FieldValues) -> FieldErrors {
    validate_fields(fields_for(method), values)
}

/// Same as [`validate`] for a raw tag. Unknown tags have no fields and
/// therefore never produce errors.
pub fn validate_tag(tag: &str, values: &FieldValues) -> FieldErrors {
    validate_fields(fields_for_tag(tag), values)
}

pub fn validate_fields(fields: &[FieldDescriptor], values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in fields {
        let value = values.get(field.key).map(String::as_str).unwrap_or("");
        if let Some(message) = check_field(field, value) {
            errors.insert(field.key.to_string(), message);
        }
    }
    errors
}

/// Check a single value. Format errors take precedence over the required
/// error; they can only fire on non-empty values anyway.
fn check_field(field: &FieldDescriptor, value: &str) -> Option<String> {
    let format_error = if value.is_empty() {
        None
    } else {
        match field.field_type {
            FieldType::Email if !EMAIL_REGEX.is_match(value) => Some(INVALID_EMAIL.to_string()),
            FieldType::Phone if !PHONE_REGEX.is_match(value) => Some(INVALID_PHONE.to_string()),
            FieldType::Text | FieldType::Email | FieldType::Phone | FieldType::Date => None,
        }
    };

    format_error.or_else(|| {
        (field.required && value.trim().is_empty()).then(|| format!("{} is required", field.label))
    })
}
