//! State of one in-progress create or edit of a payment instruction.

use indexmap::IndexMap;
use payinstr_types::{
    FieldDescriptor, FieldErrors, FieldValues, InstructionPayload, PaymentInstructionDto,
    PaymentMethod, is_valid_record_id, new_record_id,
};
use tracing::debug;

use crate::{codec, config::InstructionConfig, error::Result, schema, validation};

pub const INVALID_RECORD_ID: &str = "Enter a valid UUID";

/// Rebuild `previous` for the fields of `method`.
///
/// Every key of `method` is present in the result, in field order, with
/// the previous value under the same key or an empty string. Keys the
/// method does not declare are dropped.
pub fn reconcile(previous: &FieldValues, method: PaymentMethod) -> FieldValues {
    rebuild(method, |key| previous.get(key))
}

fn rebuild<'a>(
    method: PaymentMethod,
    lookup: impl Fn(&str) -> Option<&'a String>,
) -> FieldValues {
    schema::keys(method)
        .map(|key| (key.to_string(), lookup(key).cloned().unwrap_or_default()))
        .collect()
}

/// Form state for one payment instruction.
///
/// The keys of [`values`](Self::values) always match the fields of the
/// selected method. The values a method had when it was left are kept
/// aside per method, so switching back to it restores them. Snapshots are
/// never submitted and never leak into a different method.
#[derive(Debug, Clone)]
pub struct InstructionForm {
    id: String,
    method: PaymentMethod,
    values: FieldValues,
    /// Record this form supersedes when editing
    current_id: Option<String>,
    /// Values each method had when it was last left
    snapshots: IndexMap<PaymentMethod, FieldValues>,
    recovered: bool,
    validate_record_id: bool,
}

impl InstructionForm {
    /// Blank form for a new instruction
    pub fn create(config: &InstructionConfig) -> Self {
        let method = config.default_method;
        Self {
            id: new_record_id(),
            method,
            values: reconcile(&FieldValues::new(), method),
            current_id: None,
            snapshots: IndexMap::new(),
            recovered: false,
            validate_record_id: config.validate_record_id,
        }
    }

    /// Form prefilled from a stored record.
    ///
    /// Submitting it writes a new record under a fresh id that supersedes
    /// `record`. Stored keys the method does not declare are dropped. An
    /// unreadable payload opens the form with the first method and empty
    /// values, see [`loaded_with_defaults`](Self::loaded_with_defaults).
    pub fn edit(record: &PaymentInstructionDto, config: &InstructionConfig) -> Self {
        let decoded = codec::decode(&record.fields_json, PaymentMethod::default());
        let InstructionPayload { method, values } = decoded.payload;

        Self {
            id: new_record_id(),
            method,
            values: reconcile(&values, method),
            current_id: Some(record.id.clone()),
            snapshots: IndexMap::new(),
            recovered: decoded.recovered,
            validate_record_id: config.validate_record_id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn method(&self) -> PaymentMethod {
        self.method
    }

    /// Id of the record being edited, if any
    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }

    pub fn is_edit(&self) -> bool {
        self.current_id.is_some()
    }

    /// True when the edited record's payload could not be fully read
    pub fn loaded_with_defaults(&self) -> bool {
        self.recovered
    }

    /// Fields of the selected method, in display order
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        schema::fields_for(self.method)
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Current value of `key`, empty when the method has no such field
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Switch to `method` and rebuild the values for its fields.
    ///
    /// Values under keys shared by both methods are carried over. Keys the
    /// previous method lacks come from `method`'s own snapshot, if it was
    /// selected before, and are empty otherwise.
    pub fn select_method(&mut self, method: PaymentMethod) {
        if method == self.method {
            return;
        }

        let snapshot = self.snapshots.get(&method);
        let next = rebuild(method, |key| {
            self.values
                .get(key)
                .or_else(|| snapshot.and_then(|s| s.get(key)))
        });
        let previous = std::mem::replace(&mut self.values, next);
        self.snapshots.insert(self.method, previous);

        debug!(from = %self.method, to = %method, "Switched payment method");
        self.method = method;
    }

    /// Set the value of a field of the selected method.
    ///
    /// Returns false, leaving the form untouched, when the method has no
    /// field `key`.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> bool {
        if schema::field(self.method, key).is_none() {
            return false;
        }
        self.values.insert(key.to_string(), value.into());
        true
    }

    /// Validation errors of the form, including the record id
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.validate_record_id && !is_valid_record_id(&self.id) {
            errors.insert("id".to_string(), INVALID_RECORD_ID.to_string());
        }
        errors.extend(validation::validate(self.method, &self.values));
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn payload(&self) -> InstructionPayload {
        InstructionPayload::new(self.method, self.values.clone())
    }

    /// Record to send to the backend
    pub fn to_dto(&self) -> Result<PaymentInstructionDto> {
        let fields_json = codec::encode(&self.payload())?;
        Ok(PaymentInstructionDto::new(self.id.trim(), fields_json))
    }
}
