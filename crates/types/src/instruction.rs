//! Payment instruction records as exchanged with the backend.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::PaymentMethod;

/// User-entered values keyed by field key, in field order
pub type FieldValues = IndexMap<String, String>;

/// Validation messages keyed by field key
pub type FieldErrors = IndexMap<String, String>;

/// Decoded content of a `fieldsJson` string.
///
/// ```json
/// {"method": "BANK_TRANSFER", "values": {"bank_name": "ACME Bank", "account_no": "123"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionPayload {
    pub method: PaymentMethod,
    pub values: FieldValues,
}

impl InstructionPayload {
    pub fn new(method: PaymentMethod, values: FieldValues) -> Self {
        Self { method, values }
    }

    /// Payload for `method` with no values
    pub fn empty(method: PaymentMethod) -> Self {
        Self {
            method,
            values: FieldValues::new(),
        }
    }
}

/// Wire shape of a payment instruction: an id and the opaque payload string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInstructionDto {
    pub id: String,

    #[serde(rename = "fieldsJson")]
    pub fields_json: String,
}

impl PaymentInstructionDto {
    pub fn new(id: impl Into<String>, fields_json: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields_json: fields_json.into(),
        }
    }
}

/// A persisted instruction.
///
/// Records are never edited in place: an update writes a new record and
/// stamps `deleted_at` on the one it supersedes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredInstruction {
    #[serde(flatten)]
    pub dto: PaymentInstructionDto,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[serde(
        rename = "deletedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl StoredInstruction {
    pub fn new(dto: PaymentInstructionDto, created_at: DateTime<Utc>) -> Self {
        Self {
            dto,
            created_at,
            deleted_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.dto.id
    }

    pub fn fields_json(&self) -> &str {
        &self.dto.fields_json
    }

    /// Returns true unless the record has been soft-deleted
    pub fn is_live(&self) -> bool {
        self.deleted_at.is_none()
    }
}
