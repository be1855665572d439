#![allow(dead_code)]

use medrec_ingest::parse_csv;
use medrec_model::{Prescription, Visit};
use medrec_validate::{ValidationResult, validate_patients, validate_prescriptions, validate_visits};

pub const PATIENT_HEADER: &str = "patient_id,full_name,age,gender,blood_group,phone_number,email,emergency_contact,hospital_location,bmi,smoker_status,alcohol_use,chronic_conditions,registration_date,insurance_type";
pub const VISIT_HEADER: &str = "visit_id,patient_id,visit_date,severity_score,visit_type,length_of_stay,lab_result_glucose,lab_result_bp,previous_visit_gap_days,readmitted_within_30_days,visit_cost,doctor_name,doctor_speciality";
pub const PRESCRIPTION_HEADER: &str = "prescription_id,visit_id,patient_id,diagnosis_id,diagnosis_description,drug_name,dosage,quantity,days_supply,prescribed_date,drug_category,cost";

pub fn patient_line(id: &str, name: &str) -> String {
    format!("{id},{name},45,Male,B+,555-0100,p@example.org,555-0111,South Wing,24.5,No,No,Hypertension,2024-01-02,Private")
}

pub fn visit_line(id: &str, patient: &str, date: &str, severity: u8, doctor: &str) -> String {
    format!("{id},{patient},{date},{severity},OP,0,98,118/76,0,N/A,300,{doctor},Cardiology")
}

pub fn prescription_line(id: &str) -> String {
    format!("{id},VIS001,PAT001,D01,Hypertension,Amlodipine,5mg,30,30,2024-02-01,Cardiovascular,8.75")
}

fn text(header: &str, lines: &[String]) -> String {
    std::iter::once(header.to_string())
        .chain(lines.iter().cloned())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn patients_csv(lines: &[String]) -> ValidationResult<medrec_model::Patient> {
    validate_patients(&parse_csv(&text(PATIENT_HEADER, lines)))
}

pub fn visits_csv(lines: &[String]) -> ValidationResult<Visit> {
    validate_visits(&parse_csv(&text(VISIT_HEADER, lines)))
}

pub fn prescriptions_csv(lines: &[String]) -> ValidationResult<Prescription> {
    validate_prescriptions(&parse_csv(&text(PRESCRIPTION_HEADER, lines)))
}
