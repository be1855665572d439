//! The hospital record store.

use tracing::{debug, info, warn};

use medrec_model::{Doctor, Patient, Prescription, Record, RecordKind, Visit, next_id};
use medrec_validate::ValidationResult;

use crate::collection::Collection;
use crate::directory::{CredentialRegistry, DoctorCredential};
use crate::error::{Result, StoreError};
use crate::import::{ImportReport, merge_rows};

/// In-memory collections of patients, visits, doctors and prescriptions.
///
/// Records are only ever appended. Every identifier is unique within its
/// collection and every stored visit references a stored patient.
#[derive(Debug, Clone, Default)]
pub struct HospitalStore {
    patients: Collection<Patient>,
    visits: Collection<Visit>,
    doctors: Collection<Doctor>,
    prescriptions: Collection<Prescription>,
}

impl HospitalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    pub fn visits(&self) -> &Collection<Visit> {
        &self.visits
    }

    pub fn doctors(&self) -> &Collection<Doctor> {
        &self.doctors
    }

    pub fn prescriptions(&self) -> &Collection<Prescription> {
        &self.prescriptions
    }

    // ------------------------------------------------------------------
    // Identifiers
    // ------------------------------------------------------------------

    pub fn is_patient_id_unique(&self, patient_id: &str) -> bool {
        !self.patients.contains(patient_id)
    }

    pub fn is_visit_id_unique(&self, visit_id: &str) -> bool {
        !self.visits.contains(visit_id)
    }

    pub fn next_patient_id(&self) -> String {
        next_id(id_prefix(RecordKind::Patient), self.patients.ids())
    }

    pub fn next_visit_id(&self) -> String {
        next_id(id_prefix(RecordKind::Visit), self.visits.ids())
    }

    pub fn next_prescription_id(&self) -> String {
        next_id(id_prefix(RecordKind::Prescription), self.prescriptions.ids())
    }

    // ------------------------------------------------------------------
    // Single-record adds
    // ------------------------------------------------------------------

    pub fn add_patient(&mut self, patient: Patient) -> Result<()> {
        self.patients.insert(patient).map_err(duplicate)?;
        debug!("patient added");
        Ok(())
    }

    /// Adds a visit for a stored patient.
    ///
    /// The identifier is checked before the patient reference.
    pub fn add_visit(&mut self, visit: Visit) -> Result<()> {
        if self.visits.contains(&visit.visit_id) {
            return Err(duplicate(visit));
        }
        if !self.patients.contains(&visit.patient_id) {
            return Err(StoreError::PatientNotFound {
                patient_id: visit.patient_id,
            });
        }
        self.visits.insert(visit).map_err(duplicate)?;
        debug!("visit added");
        Ok(())
    }

    /// Adds a doctor and registers the doctor's login with `registry`.
    ///
    /// Nothing is registered when the user ID is taken.
    pub fn add_doctor<C>(&mut self, doctor: Doctor, registry: &mut C) -> Result<()>
    where
        C: CredentialRegistry + ?Sized,
    {
        let credential = DoctorCredential::from(&doctor);
        self.doctors.insert(doctor).map_err(duplicate)?;
        registry.register(credential);
        debug!("doctor added");
        Ok(())
    }

    pub fn add_prescription(&mut self, prescription: Prescription) -> Result<()> {
        self.prescriptions.insert(prescription).map_err(duplicate)?;
        debug!("prescription added");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bulk import
    // ------------------------------------------------------------------

    /// Merges validated patient rows. Within the file the first row with a
    /// given ID wins.
    pub fn import_patients(&mut self, result: ValidationResult<Patient>) -> ImportReport {
        let patients = &mut self.patients;
        let report = merge_rows(result, |patient| {
            patients
                .insert(patient)
                .map_err(|patient| format!("Patient ID {} already exists", patient.patient_id))
        });
        log_import(RecordKind::Patient, &report);
        report
    }

    /// Merges validated visit rows. Each visit must reference a patient
    /// stored before the import started or merged earlier in this file.
    pub fn import_visits(&mut self, result: ValidationResult<Visit>) -> ImportReport {
        let patients = &self.patients;
        let visits = &mut self.visits;
        let report = merge_rows(result, |visit| {
            if visits.contains(&visit.visit_id) {
                return Err(format!("Visit ID {} already exists", visit.visit_id));
            }
            if !patients.contains(&visit.patient_id) {
                return Err(format!("Patient ID {} not found", visit.patient_id));
            }
            visits
                .insert(visit)
                .map_err(|visit| format!("Visit ID {} already exists", visit.visit_id))
        });
        log_import(RecordKind::Visit, &report);
        report
    }

    /// Merges validated prescription rows, stamping each with `doctor_name`
    /// (the prescribing doctor's session name). Visit and patient references
    /// are not checked.
    pub fn import_prescriptions(
        &mut self,
        result: ValidationResult<Prescription>,
        doctor_name: &str,
    ) -> ImportReport {
        let prescriptions = &mut self.prescriptions;
        let report = merge_rows(result, |mut prescription| {
            prescription.doctor_name = doctor_name.to_string();
            prescriptions.insert(prescription).map_err(|prescription| {
                format!(
                    "Prescription ID {} already exists",
                    prescription.prescription_id
                )
            })
        });
        log_import(RecordKind::Prescription, &report);
        report
    }

    /// Merges a validated doctor roster, registering each added login.
    pub fn import_doctors<C>(
        &mut self,
        result: ValidationResult<Doctor>,
        registry: &mut C,
    ) -> ImportReport
    where
        C: CredentialRegistry + ?Sized,
    {
        let doctors = &mut self.doctors;
        let report = merge_rows(result, |doctor| {
            let credential = DoctorCredential::from(&doctor);
            doctors
                .insert(doctor)
                .map_err(|doctor| format!("Doctor User ID {} already exists", doctor.user_id))?;
            registry.register(credential);
            Ok(())
        });
        log_import(RecordKind::Doctor, &report);
        report
    }
}

fn id_prefix(kind: RecordKind) -> &'static str {
    kind.id_prefix().unwrap_or_default()
}

fn duplicate<R: Record>(record: R) -> StoreError {
    StoreError::DuplicateId {
        kind: R::KIND,
        id: record.id().to_string(),
    }
}

fn log_import(kind: RecordKind, report: &ImportReport) {
    info!(kind = %kind, merged = report.merged, "import finished");
    if !report.is_clean() {
        warn!(kind = %kind, rejected = report.rejected(), "rows rejected during import");
    }
}
