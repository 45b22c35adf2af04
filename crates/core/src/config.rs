//! Settings shared by forms and services.

use payinstr_types::PaymentMethod;
use serde::{Deserialize, Serialize};

/// Configuration for payment instruction forms and services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstructionConfig {
    /// Method preselected on new forms. Unreadable stored payloads always
    /// fall back to [`PaymentMethod::default`] instead.
    pub default_method: PaymentMethod,

    /// Whether forms reject record ids that are not UUIDs
    pub validate_record_id: bool,
}

impl Default for InstructionConfig {
    fn default() -> Self {
        Self {
            default_method: PaymentMethod::default(),
            validate_record_id: true,
        }
    }
}

impl InstructionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default method
    pub fn with_default_method(mut self, method: PaymentMethod) -> Self {
        self.default_method = method;
        self
    }

    /// Accept any record id
    pub fn without_record_id_validation(mut self) -> Self {
        self.validate_record_id = false;
        self
    }
}
