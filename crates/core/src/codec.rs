//! Encoding of `{method, values}` into the `fieldsJson` string and back.

use payinstr_types::{FieldValues, InstructionPayload, PaymentMethod};
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::error::{InstructionError, Result};

/// Result of a lenient decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub payload: InstructionPayload,

    /// True when part of the stored payload could not be read and a
    /// default was substituted
    pub recovered: bool,
}

/// Encode a payload as compact JSON, values in insertion order.
pub fn encode(payload: &InstructionPayload) -> Result<String> {
    Ok(serde_json::to_string(payload)?)
}

/// Strict decode: the string must be a JSON object with a known `method`
/// tag and an object of `values`.
pub fn try_decode(fields_json: &str) -> Result<InstructionPayload> {
    let parsed: JsonValue = serde_json::from_str(fields_json)
        .map_err(|e| InstructionError::MalformedPayload(e.to_string()))?;

    let JsonValue::Object(mut object) = parsed else {
        return Err(InstructionError::MalformedPayload(
            "payload is not a JSON object".to_string(),
        ));
    };

    let method = match object.remove("method") {
        Some(JsonValue::String(tag)) => {
            PaymentMethod::from_tag(&tag).ok_or(InstructionError::UnknownMethod(tag))?
        }
        Some(_) => {
            return Err(InstructionError::MalformedPayload(
                "method is not a string".to_string(),
            ));
        }
        None => {
            return Err(InstructionError::MalformedPayload(
                "method is missing".to_string(),
            ));
        }
    };

    let values = match object.remove("values") {
        Some(JsonValue::Object(map)) => stringify_values(map),
        Some(_) => {
            return Err(InstructionError::MalformedPayload(
                "values is not an object".to_string(),
            ));
        }
        None => FieldValues::new(),
    };

    Ok(InstructionPayload { method, values })
}

/// Best-effort decode used when loading a record for editing.
///
/// Never fails: unreadable JSON yields `fallback` with no values, an
/// unknown or missing method yields `fallback`, and a non-object `values`
/// yields no values. Whatever could be read is kept.
pub fn decode(fields_json: &str, fallback: PaymentMethod) -> Decoded {
    let object = match serde_json::from_str::<JsonValue>(fields_json) {
        Ok(JsonValue::Object(object)) => object,
        Ok(_) | Err(_) => {
            warn!(fallback = %fallback, "Unreadable payment instruction payload, using defaults");
            return Decoded {
                payload: InstructionPayload::empty(fallback),
                recovered: true,
            };
        }
    };

    let mut recovered = false;

    let method = match object.get("method") {
        Some(JsonValue::String(tag)) => PaymentMethod::from_tag(tag),
        _ => None,
    };
    let method = method.unwrap_or_else(|| {
        warn!(
            method = ?object.get("method"),
            fallback = %fallback,
            "Unknown payment method in stored payload"
        );
        recovered = true;
        fallback
    });

    let values = match object.get("values") {
        Some(JsonValue::Object(map)) => stringify_values(map.clone()),
        None => FieldValues::new(),
        Some(other) => {
            warn!(values = %other, "Stored payment instruction values are not an object");
            recovered = true;
            FieldValues::new()
        }
    };

    Decoded {
        payload: InstructionPayload { method, values },
        recovered,
    }
}

/// Convert JSON values to strings: strings are kept as-is, `null` becomes
/// empty, anything else is kept as compact JSON text.
fn stringify_values(map: serde_json::Map<String, JsonValue>) -> FieldValues {
    map.into_iter()
        .map(|(key, value)| {
            let value = match value {
                JsonValue::String(s) => s,
                JsonValue::Null => String::new(),
                other => other.to_string(),
            };
            (key, value)
        })
        .collect()
}
