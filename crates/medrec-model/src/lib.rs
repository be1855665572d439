//! Hospital record model: patients, visits, doctors and prescriptions.

pub mod enums;
pub mod error;
pub mod formulary;
pub mod ids;
pub mod kind;
pub mod numeric;
pub mod records;

pub use enums::{Gender, Readmission, Speciality, VisitType, YesNo};
pub use error::{ModelError, Result};
pub use formulary::{Formulary, formulary_for};
pub use ids::{format_id, id_number, next_id};
pub use kind::RecordKind;
pub use numeric::{parse_float_prefix, parse_int_prefix};
pub use records::{Doctor, Patient, Prescription, Record, Visit};
