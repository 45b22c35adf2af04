//! Shared data model for payment instructions.
//!
//! A payment instruction tells a client how to pay an invoice. It is made of
//! a [`PaymentMethod`] tag and a set of free-form values whose keys depend on
//! the method (see [`FieldDescriptor`]). The backend stores the pair as one
//! opaque JSON string inside a [`PaymentInstructionDto`].

pub mod instruction;
pub mod method;
pub mod record_id;

pub use instruction::{
    FieldErrors, FieldValues, InstructionPayload, PaymentInstructionDto, StoredInstruction,
};
pub use method::{FieldDescriptor, FieldType, PaymentMethod, UnknownMethodTag};
pub use record_id::{is_valid_record_id, new_record_id};
