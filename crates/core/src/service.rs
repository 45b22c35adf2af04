//! Submission and listing of payment instructions against a store.

use payinstr_types::{FieldValues, PaymentMethod, StoredInstruction};
use tracing::{debug, warn};

use crate::{
    codec,
    config::InstructionConfig,
    error::{InstructionError, Result, StoreError},
    form::InstructionForm,
    store::InstructionStore,
};

/// A stored instruction decoded for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionSummary {
    pub id: String,
    pub method: PaymentMethod,
    pub values: FieldValues,
    /// True when the stored payload could not be fully read
    pub recovered: bool,
}

impl InstructionSummary {
    /// Unreadable payloads decode to the first method with empty values
    fn from_record(record: &StoredInstruction) -> Self {
        let decoded = codec::decode(record.fields_json(), PaymentMethod::default());
        Self {
            id: record.id().to_string(),
            method: decoded.payload.method,
            values: decoded.payload.values,
            recovered: decoded.recovered,
        }
    }
}

/// Submits instruction forms to a store.
///
/// Forms with validation errors are rejected before the store is reached.
pub struct InstructionService<S> {
    store: S,
    config: InstructionConfig,
}

impl<S: InstructionStore> InstructionService<S> {
    pub fn new(store: S, config: InstructionConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &InstructionConfig {
        &self.config
    }

    /// Blank form using this service's configuration
    pub fn new_form(&self) -> InstructionForm {
        InstructionForm::create(&self.config)
    }

    /// Load a live record into an edit form
    pub fn edit_form(&self, id: &str) -> Result<InstructionForm> {
        let record = self
            .store
            .get(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(InstructionForm::edit(&record.dto, &self.config))
    }

    /// Create, or supersede the edited record.
    pub fn submit(&self, form: &InstructionForm) -> Result<StoredInstruction> {
        let errors = form.errors();
        if !errors.is_empty() {
            warn!(
                id = %form.id(),
                fields = ?errors.keys().collect::<Vec<_>>(),
                "Payment instruction blocked by validation"
            );
            return Err(InstructionError::Invalid(errors));
        }

        let dto = form.to_dto()?;
        let record = match form.current_id() {
            Some(current_id) => {
                debug!(id = %dto.id, current_id = %current_id, "Updating payment instruction");
                self.store.update(current_id, dto)?
            }
            None => {
                debug!(id = %dto.id, "Creating payment instruction");
                self.store.create(dto)?
            }
        };
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        debug!(id = %id, "Deleting payment instruction");
        Ok(self.store.delete(id)?)
    }

    /// Live instructions, decoded
    pub fn list(&self) -> Result<Vec<InstructionSummary>> {
        let records = self.store.list()?;
        debug!(count = records.len(), "Listed payment instructions");
        Ok(records
            .iter()
            .map(InstructionSummary::from_record)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use payinstr_types::PaymentInstructionDto;

    use super::*;
    use crate::store::InMemoryInstructionStore;

    fn service() -> InstructionService<InMemoryInstructionStore> {
        InstructionService::new(InMemoryInstructionStore::new(), InstructionConfig::default())
    }

    fn filled_paypal_form(
        service: &InstructionService<InMemoryInstructionStore>,
    ) -> InstructionForm {
        let mut form = service.new_form();
        form.select_method(PaymentMethod::Paypal);
        form.set_value("paypal_email", "jane@example.com");
        form.set_value("transaction_id", "tx1");
        form
    }

    /// Store that counts calls and accepts nothing
    #[derive(Default)]
    struct CountingStore {
        calls: Cell<usize>,
    }

    impl CountingStore {
        fn hit(&self) -> StoreError {
            self.calls.set(self.calls.get() + 1);
            StoreError::NotFound("unreachable".to_string())
        }
    }

    impl InstructionStore for CountingStore {
        fn list(&self) -> std::result::Result<Vec<StoredInstruction>, StoreError> {
            Err(self.hit())
        }
        fn get(&self, _: &str) -> std::result::Result<Option<StoredInstruction>, StoreError> {
            Err(self.hit())
        }
        fn create(
            &self,
            _: PaymentInstructionDto,
        ) -> std::result::Result<StoredInstruction, StoreError> {
            Err(self.hit())
        }
        fn update(
            &self,
            _: &str,
            _: PaymentInstructionDto,
        ) -> std::result::Result<StoredInstruction, StoreError> {
            Err(self.hit())
        }
        fn delete(&self, _: &str) -> std::result::Result<(), StoreError> {
            Err(self.hit())
        }
    }

    #[test]
    fn test_submit_create() {
        let service = service();
        let form = filled_paypal_form(&service);

        let record = service.submit(&form).unwrap();
        assert_eq!(record.id(), form.id());

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].method, PaymentMethod::Paypal);
        assert_eq!(listed[0].values["paypal_email"], "jane@example.com");
        assert!(!listed[0].recovered);
    }

    #[test]
    fn test_invalid_form_never_reaches_store() {
        let service =
            InstructionService::new(CountingStore::default(), InstructionConfig::default());
        let mut form = service.new_form();
        form.select_method(PaymentMethod::Paypal);
        form.set_value("paypal_email", "not-an-email");
        form.set_value("transaction_id", "tx1");

        let errors = match service.submit(&form) {
            Err(InstructionError::Invalid(errors)) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["paypal_email"], "Enter a valid email");
        assert_eq!(service.store().calls.get(), 0);
    }

    #[test]
    fn test_edit_supersedes_record() {
        let service = service();
        let created = service.submit(&filled_paypal_form(&service)).unwrap();

        let mut form = service.edit_form(created.id()).unwrap();
        assert_eq!(form.current_id(), Some(created.id()));
        form.set_value("notes", "refunded");

        let updated = service.submit(&form).unwrap();
        assert_ne!(updated.id(), created.id());

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, updated.id());
        assert_eq!(listed[0].values["notes"], "refunded");
        assert!(service.store().get(created.id()).unwrap().is_none());
    }

    #[test]
    fn test_edit_missing_record() {
        let service = service();
        let err = service.edit_form("nope").unwrap_err();
        assert!(matches!(err, InstructionError::Store(StoreError::NotFound(id)) if id == "nope"));
    }

    #[test]
    fn test_delete() {
        let service = service();
        let created = service.submit(&filled_paypal_form(&service)).unwrap();

        service.delete(created.id()).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(matches!(
            service.delete(created.id()),
            Err(InstructionError::Store(StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn test_list_flags_corrupt_records() {
        let service = service();
        service
            .store()
            .create(PaymentInstructionDto::new("legacy", "not json"))
            .unwrap();

        let listed = service.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(
            listed[0],
            InstructionSummary {
                id: "legacy".to_string(),
                method: PaymentMethod::Cash,
                values: FieldValues::new(),
                recovered: true,
            }
        );
    }

    #[test]
    fn test_corrupt_records_ignore_configured_method() {
        let config = InstructionConfig::new().with_default_method(PaymentMethod::BankTransfer);
        let service = InstructionService::new(InMemoryInstructionStore::new(), config);
        service
            .store()
            .create(PaymentInstructionDto::new("legacy", r#"{"method":"IOU"}"#))
            .unwrap();

        let listed = service.list().unwrap();
        assert_eq!(listed[0].method, PaymentMethod::Cash);
        assert!(listed[0].recovered);
    }

    #[test]
    fn test_store_errors_propagate() {
        let service =
            InstructionService::new(CountingStore::default(), InstructionConfig::default());
        assert!(matches!(
            service.list(),
            Err(InstructionError::Store(StoreError::NotFound(_)))
        ));
        assert_eq!(service.store().calls.get(), 1);
    }
}
