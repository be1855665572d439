use medrec_model::{
    Gender, Patient, Prescription, Record, RecordKind, YesNo, id_number, next_id,
};

fn patient(id: &str) -> Patient {
    Patient {
        patient_id: id.to_string(),
        full_name: "Lata Menon".to_string(),
        age: 67,
        gender: Gender::Female,
        blood_group: "AB+".to_string(),
        phone_number: "555-0400".to_string(),
        email: "lata@example.org".to_string(),
        emergency_contact: "555-0401".to_string(),
        hospital_location: "West Wing".to_string(),
        bmi: 29.5,
        smoker_status: YesNo::No,
        alcohol_use: YesNo::Yes,
        chronic_conditions: vec!["Arthritis".to_string(), "Asthma".to_string()],
        registration_date: "2023-11-30".to_string(),
        insurance_type: "Senior".to_string(),
    }
}

#[test]
fn patient_row_lines_up_with_columns() {
    let row = patient("PAT014").to_row();
    let columns = RecordKind::Patient.export_columns();
    assert_eq!(row.len(), columns.len());

    let cell = |name: &str| {
        let idx = columns.iter().position(|c| *c == name).expect("column");
        row[idx].as_str()
    };
    assert_eq!(cell("patient_id"), "PAT014");
    assert_eq!(cell("bmi"), "29.5");
    assert_eq!(cell("alcohol_use"), "Yes");
    assert_eq!(cell("chronic_conditions"), "Arthritis;Asthma");
}

#[test]
fn prescription_row_ends_with_prescriber() {
    let prescription = Prescription {
        prescription_id: "PRE007".to_string(),
        visit_id: "VIS003".to_string(),
        patient_id: "PAT014".to_string(),
        diagnosis_id: "D07".to_string(),
        diagnosis_description: "Osteoarthritis".to_string(),
        drug_name: "Celecoxib".to_string(),
        dosage: "200mg".to_string(),
        quantity: 30,
        days_supply: 30,
        prescribed_date: "2024-03-02".to_string(),
        drug_category: "Musculoskeletal".to_string(),
        cost: 21.0,
        doctor_name: "Dr. Shah".to_string(),
    };
    let row = prescription.to_row();
    assert_eq!(row.len(), RecordKind::Prescription.export_columns().len());
    assert_eq!(row.last().map(String::as_str), Some("Dr. Shah"));
}

#[test]
fn ids_continue_from_stored_records() {
    let stored = [patient("PAT001"), patient("PAT041"), patient("legacy-7")];
    assert_eq!(id_number("PAT", "PAT041"), Some(41));
    assert_eq!(id_number("PAT", "legacy-7"), None);
    assert_eq!(next_id("PAT", stored.iter().map(Record::id)), "PAT042");
}
