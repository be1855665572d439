//! Hospital record types.
//!
//! Records are plain values. Once a record has passed validation it is never
//! edited in place; stores only append.

use serde::{Deserialize, Serialize};

use crate::enums::{Gender, Readmission, Speciality, VisitType, YesNo};
use crate::kind::RecordKind;

/// Common surface of every stored record.
pub trait Record {
    /// The kind this record belongs to.
    const KIND: RecordKind;

    /// Unique identifier within the record's collection.
    fn id(&self) -> &str;

    /// Cell values in the order of [`RecordKind::export_columns`].
    fn to_row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: String,
    pub full_name: String,
    pub age: u8,
    pub gender: Gender,
    pub blood_group: String,
    pub phone_number: String,
    pub email: String,
    pub emergency_contact: String,
    pub hospital_location: String,
    pub bmi: f64,
    pub smoker_status: YesNo,
    pub alcohol_use: YesNo,
    pub chronic_conditions: Vec<String>,
    pub registration_date: String,
    pub insurance_type: String,
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn id(&self) -> &str {
        &self.patient_id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.patient_id.clone(),
            self.full_name.clone(),
            self.age.to_string(),
            self.gender.to_string(),
            self.blood_group.clone(),
            self.phone_number.clone(),
            self.email.clone(),
            self.emergency_contact.clone(),
            self.hospital_location.clone(),
            self.bmi.to_string(),
            self.smoker_status.to_string(),
            self.alcohol_use.to_string(),
            self.chronic_conditions.join(";"),
            self.registration_date.clone(),
            self.insurance_type.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub visit_id: String,
    pub patient_id: String,
    pub visit_date: String,
    pub severity_score: u8,
    pub visit_type: VisitType,
    /// Days admitted. Only meaningful for inpatient visits.
    pub length_of_stay: u64,
    pub lab_result_glucose: f64,
    pub lab_result_bp: String,
    pub previous_visit_gap_days: i64,
    pub readmitted_within_30_days: Readmission,
    pub visit_cost: f64,
    /// Denormalized copy of the attending doctor; not checked against the
    /// doctor collection.
    pub doctor_name: String,
    pub doctor_speciality: String,
}

impl Record for Visit {
    const KIND: RecordKind = RecordKind::Visit;

    fn id(&self) -> &str {
        &self.visit_id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.visit_id.clone(),
            self.patient_id.clone(),
            self.visit_date.clone(),
            self.severity_score.to_string(),
            self.visit_type.to_string(),
            self.length_of_stay.to_string(),
            self.lab_result_glucose.to_string(),
            self.lab_result_bp.clone(),
            self.previous_visit_gap_days.to_string(),
            self.readmitted_within_30_days.to_string(),
            self.visit_cost.to_string(),
            self.doctor_name.clone(),
            self.doctor_speciality.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub user_id: String,
    pub doctor_name: String,
    pub password: String,
    pub doctor_speciality: Speciality,
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> &str {
        &self.user_id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.user_id.clone(),
            self.doctor_name.clone(),
            self.password.clone(),
            self.doctor_speciality.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub prescription_id: String,
    pub visit_id: String,
    pub patient_id: String,
    pub diagnosis_id: String,
    pub diagnosis_description: String,
    pub drug_name: String,
    pub dosage: String,
    pub quantity: u64,
    pub days_supply: u64,
    pub prescribed_date: String,
    pub drug_category: String,
    pub cost: f64,
    /// Prescribing doctor. Filled from the importing session, never from a
    /// source file.
    pub doctor_name: String,
}

impl Record for Prescription {
    const KIND: RecordKind = RecordKind::Prescription;

    fn id(&self) -> &str {
        &self.prescription_id
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.prescription_id.clone(),
            self.visit_id.clone(),
            self.patient_id.clone(),
            self.diagnosis_id.clone(),
            self.diagnosis_description.clone(),
            self.drug_name.clone(),
            self.dosage.clone(),
            self.quantity.to_string(),
            self.days_supply.to_string(),
            self.prescribed_date.clone(),
            self.drug_category.clone(),
            self.cost.to_string(),
            self.doctor_name.clone(),
        ]
    }
}
