//! Persistence boundary for payment instructions.
//!
//! The backend exposes plain CRUD over `{id, fieldsJson}` records with one
//! twist: an update never edits a record in place. It writes a new record
//! under a new id and soft-deletes the one it replaces.

use chrono::Utc;
use indexmap::IndexMap;
use parking_lot::RwLock;
use payinstr_types::{PaymentInstructionDto, StoredInstruction};
use tracing::info;

use crate::error::StoreError;

/// CRUD contract of the payment instruction backend
pub trait InstructionStore {
    /// Live records, oldest first
    fn list(&self) -> Result<Vec<StoredInstruction>, StoreError>;

    /// Live record with this id
    fn get(&self, id: &str) -> Result<Option<StoredInstruction>, StoreError>;

    fn create(&self, dto: PaymentInstructionDto) -> Result<StoredInstruction, StoreError>;

    /// Replace `current_id` with `dto`, which must carry a new id
    fn update(
        &self,
        current_id: &str,
        dto: PaymentInstructionDto,
    ) -> Result<StoredInstruction, StoreError>;

    /// Soft-delete a live record
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Thread-safe in-memory instruction store.
///
/// Soft-deleted records are kept so that their ids cannot be reused.
#[derive(Debug, Default)]
pub struct InMemoryInstructionStore {
    /// Records indexed by id, in creation order
    records: RwLock<IndexMap<String, StoredInstruction>>,
}

impl InMemoryInstructionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records including soft-deleted ones
    pub fn all(&self) -> Vec<StoredInstruction> {
        self.records.read().values().cloned().collect()
    }
}

impl InstructionStore for InMemoryInstructionStore {
    fn list(&self) -> Result<Vec<StoredInstruction>, StoreError> {
        let records = self.records.read();
        Ok(records.values().filter(|r| r.is_live()).cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<StoredInstruction>, StoreError> {
        let records = self.records.read();
        Ok(records.get(id).filter(|r| r.is_live()).cloned())
    }

    fn create(&self, dto: PaymentInstructionDto) -> Result<StoredInstruction, StoreError> {
        let mut records = self.records.write();
        if records.contains_key(&dto.id) {
            return Err(StoreError::AlreadyExists(dto.id));
        }

        let record = StoredInstruction::new(dto, Utc::now());
        info!(id = %record.id(), "Created payment instruction");
        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    fn update(
        &self,
        current_id: &str,
        dto: PaymentInstructionDto,
    ) -> Result<StoredInstruction, StoreError> {
        if dto.id == current_id {
            return Err(StoreError::NotSuperseding(dto.id));
        }

        let mut records = self.records.write();
        if records.contains_key(&dto.id) {
            return Err(StoreError::AlreadyExists(dto.id));
        }

        let now = Utc::now();
        let current = records
            .get_mut(current_id)
            .filter(|r| r.is_live())
            .ok_or_else(|| StoreError::NotFound(current_id.to_string()))?;
        current.deleted_at = Some(now);

        let record = StoredInstruction::new(dto, now);
        info!(
            id = %record.id(),
            superseded = %current_id,
            "Superseded payment instruction"
        );
        records.insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.write();
        let record = records
            .get_mut(id)
            .filter(|r| r.is_live())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.deleted_at = Some(Utc::now());

        info!(id = %id, "Deleted payment instruction");
        Ok(())
    }
}
