//! In-memory hospital record store.
//!
//! Holds the four record collections, merges validated CSV rows into them
//! and answers the dashboard queries.
//!
//! # Example
//!
//! ```ignore
//! use medrec_ingest::parse_csv;
//! use medrec_store::HospitalStore;
//! use medrec_validate::validate_patients;
//!
//! let mut store = HospitalStore::new();
//! let report = store.import_patients(validate_patients(&parse_csv(&text)));
//! println!("{} merged, {} rejected", report.merged, report.rejected());
//! ```

mod collection;
mod dates;
mod directory;
mod error;
mod import;
mod queries;
mod store;

// === Error Types ===
pub use error::{Result, StoreError};

// === Storage ===
pub use collection::Collection;
pub use store::HospitalStore;

// === Doctor Logins ===
pub use directory::{CredentialRegistry, DoctorCredential, DoctorDirectory, InMemoryDirectory};

// === Import ===
pub use import::ImportReport;

// === Queries ===
pub use dates::parse_visit_date;
pub use queries::{
    AdminOverview, DoctorOverview, PatientActivity, RECENT_VISIT_LIMIT, SeverityTrend,
    VisitBreakdown,
};
