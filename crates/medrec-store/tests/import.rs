mod common;

use common::{
    patient_line, patients_csv, prescription_line, prescriptions_csv, visit_line, visits_csv,
};
use medrec_ingest::parse_csv;
use medrec_store::{DoctorDirectory, HospitalStore, InMemoryDirectory, StoreError};
use medrec_validate::validate_doctors;

#[test]
fn duplicate_ids_within_one_file_keep_the_first_row() {
    let mut store = HospitalStore::new();
    let report = store.import_patients(patients_csv(&[
        patient_line("PAT001", "Asha Verma"),
        patient_line("PAT001", "Someone Else"),
    ]));

    assert_eq!(report.merged, 1);
    assert_eq!(
        report.error_messages(),
        vec!["Row 3: Patient ID PAT001 already exists"]
    );
    let stored = store.patient("PAT001").expect("first row stored");
    assert_eq!(stored.full_name, "Asha Verma");
}

#[test]
fn ids_already_in_the_store_are_rejected() {
    let mut store = HospitalStore::new();
    store.import_patients(patients_csv(&[patient_line("PAT001", "Asha Verma")]));

    let report = store.import_patients(patients_csv(&[
        patient_line("PAT002", "Ravi Kumar"),
        patient_line("PAT001", "Asha Again"),
    ]));
    assert_eq!(report.merged, 1);
    assert_eq!(report.rejected(), 1);
    assert_eq!(store.patients().len(), 2);
    assert_eq!(store.next_patient_id(), "PAT003");
}

#[test]
fn visits_for_unknown_patients_are_rejected() {
    let mut store = HospitalStore::new();
    store.import_patients(patients_csv(&[patient_line("PAT001", "Asha Verma")]));

    let report = store.import_visits(visits_csv(&[
        visit_line("VIS001", "PAT001", "2024-03-01", 2, "Dr. Rao"),
        visit_line("VIS002", "PAT404", "2024-03-02", 2, "Dr. Rao"),
    ]));
    assert_eq!(report.merged, 1);
    assert_eq!(report.error_messages(), vec!["Row 3: Patient ID PAT404 not found"]);
    assert!(store.visits().get("VIS002").is_none());
}

#[test]
fn visit_id_check_runs_before_patient_check() {
    let mut store = HospitalStore::new();
    store.import_patients(patients_csv(&[patient_line("PAT001", "Asha Verma")]));
    store.import_visits(visits_csv(&[visit_line("VIS001", "PAT001", "2024-03-01", 1, "Dr. Rao")]));

    let report = store.import_visits(visits_csv(&[visit_line(
        "VIS001", "PAT999", "2024-03-05", 1, "Dr. Rao",
    )]));
    assert_eq!(report.error_messages(), vec!["Row 2: Visit ID VIS001 already exists"]);
}

#[test]
fn rejections_are_listed_in_row_order() {
    let mut store = HospitalStore::new();
    store.import_patients(patients_csv(&[patient_line("PAT001", "Asha Verma")]));

    let mut bad = visit_line("VIS003", "PAT001", "2024-03-03", 9, "Dr. Rao");
    bad = bad.replacen(",OP,", ",XX,", 1);
    let report = store.import_visits(visits_csv(&[
        visit_line("VIS001", "PAT777", "2024-03-01", 1, "Dr. Rao"),
        bad,
        visit_line("VIS001", "PAT001", "2024-03-04", 1, "Dr. Rao"),
        visit_line("VIS001", "PAT001", "2024-03-05", 1, "Dr. Rao"),
    ]));

    assert_eq!(report.merged, 1);
    insta::assert_snapshot!(report.error_messages().join("\n"), @r"
    Row 2: Patient ID PAT777 not found
    Row 3: Invalid severity_score (must be 0-5); Invalid visit_type (must be OP or IP)
    Row 5: Visit ID VIS001 already exists
    ");
}

#[test]
fn missing_columns_merge_nothing() {
    let mut store = HospitalStore::new();
    let result = medrec_validate::validate_visits(&parse_csv("visit_id,patient_id\nVIS001,PAT001"));
    let report = store.import_visits(result);

    assert_eq!(report.merged, 0);
    assert_eq!(report.rejected(), 1);
    assert!(report.errors[0].row.is_none());
    assert!(report.errors[0].message.starts_with("Missing columns: visit_date"));
}

#[test]
fn prescriptions_are_stamped_with_the_importing_doctor() {
    let mut store = HospitalStore::new();
    let result = prescriptions_csv(&[prescription_line("PRE001"), prescription_line("PRE002")]);
    assert!(result.records().all(|p| p.doctor_name.is_empty()));

    let report = store.import_prescriptions(result, "Dr. Rao");
    assert_eq!(report.merged, 2);
    assert_eq!(store.prescriptions_by_doctor("Dr. Rao").len(), 2);
    assert_eq!(store.next_prescription_id(), "PRE003");
}

#[test]
fn prescription_ids_stay_unique() {
    let mut store = HospitalStore::new();
    let report = store.import_prescriptions(
        prescriptions_csv(&[prescription_line("PRE001"), prescription_line("PRE001")]),
        "Dr. Rao",
    );
    assert_eq!(report.merged, 1);
    assert_eq!(
        report.error_messages(),
        vec!["Row 3: Prescription ID PRE001 already exists"]
    );
}

#[test]
fn doctor_roster_registers_logins() {
    let mut store = HospitalStore::new();
    let mut directory = InMemoryDirectory::new();
    let roster = "user_id,doctor_name,password,doctor_speciality\n\
                  dr_rao,Dr. Rao,heart123,Cardiology\n\
                  dr_rao,Dr. Rao Again,heart456,Cardiology\n\
                  dr_mehta,Dr. Mehta,kids2024,Pediatrics";
    let report = store.import_doctors(validate_doctors(&parse_csv(roster)), &mut directory);

    assert_eq!(report.merged, 2);
    assert_eq!(
        report.error_messages(),
        vec!["Row 3: Doctor User ID dr_rao already exists"]
    );
    assert_eq!(directory.len(), 2);
    assert_eq!(
        directory.find("dr_rao").map(|login| login.password.as_str()),
        Some("heart123")
    );
}

#[test]
fn single_adds_share_the_bulk_checks() {
    let mut store = HospitalStore::new();
    let patient = patients_csv(&[patient_line("PAT001", "Asha Verma")])
        .records()
        .next()
        .cloned()
        .expect("valid patient");
    store.add_patient(patient.clone()).unwrap();
    let err = store.add_patient(patient).unwrap_err();
    assert_eq!(err.to_string(), "Patient ID already exists");

    let mut visit = visits_csv(&[visit_line("VIS001", "PAT002", "2024-03-01", 1, "Dr. Rao")])
        .records()
        .next()
        .cloned()
        .expect("valid visit");
    let err = store.add_visit(visit.clone()).unwrap_err();
    assert_eq!(
        err,
        StoreError::PatientNotFound {
            patient_id: "PAT002".to_string()
        }
    );
    assert_eq!(err.to_string(), "Patient not found");

    visit.patient_id = "PAT001".to_string();
    store.add_visit(visit.clone()).unwrap();
    assert_eq!(store.add_visit(visit).unwrap_err().to_string(), "Visit ID already exists");
    assert!(!store.is_visit_id_unique("VIS001"));
    assert!(store.is_patient_id_unique("PAT002"));

    let prescription = prescriptions_csv(&[prescription_line("PRE001")])
        .records()
        .next()
        .cloned()
        .expect("valid prescription");
    store.add_prescription(prescription.clone()).unwrap();
    assert_eq!(
        store.add_prescription(prescription).unwrap_err().to_string(),
        "Prescription ID already exists"
    );
}
