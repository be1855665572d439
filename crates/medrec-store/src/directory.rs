//! Doctor login directory.
//!
//! Adding a doctor to the store registers a login through
//! [`CredentialRegistry`]; the authenticator looks logins up through
//! [`DoctorDirectory`]. [`InMemoryDirectory`] implements both.

use std::collections::BTreeMap;

use medrec_model::{Doctor, Speciality};

/// Login details of one registered doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCredential {
    pub user_id: String,
    pub password: String,
    pub name: String,
    pub speciality: Speciality,
}

impl From<&Doctor> for DoctorCredential {
    fn from(doctor: &Doctor) -> Self {
        Self {
            user_id: doctor.user_id.clone(),
            password: doctor.password.clone(),
            name: doctor.doctor_name.clone(),
            speciality: doctor.doctor_speciality,
        }
    }
}

/// Write side: receives logins of newly added doctors.
pub trait CredentialRegistry {
    fn register(&mut self, credential: DoctorCredential);
}

/// Read side: resolves a user ID to a registered login.
pub trait DoctorDirectory {
    fn find(&self, user_id: &str) -> Option<&DoctorCredential>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    credentials: BTreeMap<String, DoctorCredential>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialRegistry for InMemoryDirectory {
    /// A later registration under the same user ID replaces the earlier one.
    fn register(&mut self, credential: DoctorCredential) {
        self.credentials
            .insert(credential.user_id.clone(), credential);
    }
}

impl DoctorDirectory for InMemoryDirectory {
    fn find(&self, user_id: &str) -> Option<&DoctorCredential> {
        self.credentials.get(user_id)
    }
}
