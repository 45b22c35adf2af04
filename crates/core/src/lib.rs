//! Payment instruction forms for invoicing.
//!
//! This crate turns a [`PaymentMethod`] into the fields a user has to fill
//! in, validates what was entered, and shapes it into the
//! `{id, fieldsJson}` record the backend stores.
//!
//! # Overview
//!
//! - [`schema`] - ordered field descriptors per method
//! - [`validation`] - per-field error messages
//! - [`codec`] - `fieldsJson` encoding, with a lenient decoder for loading
//! - [`InstructionForm`] - one create/edit in progress, including the
//!   key reconciliation that runs when the method changes
//! - [`InstructionStore`] / [`InstructionService`] - the persistence
//!   boundary, where updates supersede records instead of editing them
//!
//! # Example
//!
//! ```
//! use payinstr_core::{
//!     InMemoryInstructionStore, InstructionConfig, InstructionService, PaymentMethod,
//! };
//!
//! let store = InMemoryInstructionStore::new();
//! let service = InstructionService::new(store, InstructionConfig::default());
//!
//! let mut form = service.new_form();
//! form.select_method(PaymentMethod::BankTransfer);
//! form.set_value("bank_name", "ACME Bank");
//! form.set_value("account_no", "12345678");
//! assert_eq!(form.errors()["account_holder"], "Account Holder Name is required");
//!
//! form.set_value("account_holder", "Jane Doe");
//! let record = service.submit(&form).unwrap();
//! assert!(record.fields_json().starts_with(r#"{"method":"BANK_TRANSFER""#));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod form;
pub mod schema;
pub mod service;
pub mod store;
pub mod validation;

pub use codec::{Decoded, decode, encode, try_decode};
pub use config::InstructionConfig;
pub use error::{InstructionError, Result, StoreError};
pub use form::{InstructionForm, reconcile};
pub use payinstr_types::{
    FieldDescriptor, FieldErrors, FieldType, FieldValues, InstructionPayload,
    PaymentInstructionDto, PaymentMethod, StoredInstruction,
};
pub use schema::{fields_for, fields_for_tag};
pub use service::{InstructionService, InstructionSummary};
pub use store::{InMemoryInstructionStore, InstructionStore};
pub use validation::{validate, validate_tag};
