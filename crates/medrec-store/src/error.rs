//! Store error types.
//!
//! Only the single-record add paths fail with a [`StoreError`]. Bulk import
//! reports its rejections as row messages instead.

use medrec_model::RecordKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same identifier is already stored.
    #[error("{} ID already exists", kind.label())]
    DuplicateId { kind: RecordKind, id: String },

    /// A visit references a patient that is not stored.
    #[error("Patient not found")]
    PatientNotFound { patient_id: String },
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
