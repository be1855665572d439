use medrec_ingest::parse_csv;
use medrec_model::{Gender, Readmission, Speciality, VisitType, YesNo};
use medrec_validate::{
    RowIssue, validate_doctors, validate_patients, validate_prescriptions, validate_visits,
};

const PATIENT_HEADER: &str = "patient_id,full_name,age,gender,blood_group,phone_number,email,emergency_contact,hospital_location,bmi,smoker_status,alcohol_use,chronic_conditions,registration_date,insurance_type";
const VISIT_HEADER: &str = "visit_id,patient_id,visit_date,severity_score,visit_type,length_of_stay,lab_result_glucose,lab_result_bp,previous_visit_gap_days,readmitted_within_30_days,visit_cost,doctor_name,doctor_speciality";
const PRESCRIPTION_HEADER: &str = "prescription_id,visit_id,patient_id,diagnosis_id,diagnosis_description,drug_name,dosage,quantity,days_supply,prescribed_date,drug_category,cost";

fn patient_row(id: &str, age: &str, bmi: &str) -> String {
    format!(
        "{id},\"Doe, Jane\",{age},Female,O+,555-0101,jane@example.org,555-0199,North Wing,{bmi},No,Yes,Diabetes; Asthma,2024-01-10,Private"
    )
}

fn visit_row(id: &str, severity: &str, visit_type: &str) -> String {
    format!("{id},PAT001,2024-02-01,{severity},{visit_type},3,105.5,120/80,14,No,2500,Dr. Rao,Cardiology")
}

fn csv(header: &str, rows: &[String]) -> String {
    let mut text = header.to_string();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text
}

#[test]
fn accepts_a_clean_patient_file() {
    let text = csv(PATIENT_HEADER, &[patient_row("PAT001", "54", "27.5")]);
    let result = validate_patients(&parse_csv(&text));

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.data.len(), 1);
    let validated = &result.data[0];
    assert_eq!(validated.row, 2);
    let patient = &validated.record;
    assert_eq!(patient.full_name, "Doe, Jane");
    assert_eq!(patient.age, 54);
    assert_eq!(patient.gender, Gender::Female);
    assert_eq!(patient.alcohol_use, YesNo::Yes);
    assert_eq!(patient.chronic_conditions, vec!["Diabetes", "Asthma"]);
}

#[test]
fn missing_columns_short_circuit() {
    let text = "patient_id,full_name\nPAT001,Jane\nPAT002,Ravi\n";
    let result = validate_patients(&parse_csv(text));

    assert!(!result.valid);
    assert!(result.data.is_empty());
    assert_eq!(
        result.error_messages(),
        vec![
            "Missing columns: age, gender, blood_group, phone_number, email, emergency_contact, \
             hospital_location, bmi, smoker_status, alcohol_use, chronic_conditions, \
             registration_date, insurance_type"
        ]
    );
}

#[test]
fn empty_input_reports_every_column_missing() {
    let result = validate_prescriptions(&parse_csv(""));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.starts_with("Missing columns: prescription_id, visit_id"));
    assert_eq!(result.errors[0].row, None);
}

#[test]
fn bad_row_is_isolated_from_its_siblings() {
    let text = csv(
        PATIENT_HEADER,
        &[
            patient_row("PAT001", "40", "22"),
            patient_row("PAT002", "200", "22"),
            patient_row("PAT003", "61", "31"),
        ],
    );
    let result = validate_patients(&parse_csv(&text));

    assert!(!result.valid);
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.errors, vec![RowIssue::at(3, "Invalid age")]);
    assert_eq!(result.error_messages(), vec!["Row 3: Invalid age"]);
    let ids: Vec<&str> = result.records().map(|p| p.patient_id.as_str()).collect();
    assert_eq!(ids, vec!["PAT001", "PAT003"]);
}

#[test]
fn all_row_problems_are_joined_into_one_message() {
    let row = "PAT009,Sam,abc,male,A+,1,s@x.org,2,East,9,Maybe,,None,2024-01-01,Basic".to_string();
    let result = validate_patients(&parse_csv(&csv(PATIENT_HEADER, &[row])));

    assert_eq!(
        result.error_messages(),
        vec![
            "Row 2: Invalid age; Invalid gender (must be Male, Female, or Other); Invalid BMI; \
             Invalid smoker_status (must be Yes or No); Invalid alcohol_use (must be Yes or No)"
        ]
    );
}

#[test]
fn bmi_bounds_are_inclusive() {
    let text = csv(
        PATIENT_HEADER,
        &[
            patient_row("PAT001", "30", "10"),
            patient_row("PAT002", "30", "60"),
            patient_row("PAT003", "30", "9.9"),
            patient_row("PAT004", "30", "60.1"),
        ],
    );
    let result = validate_patients(&parse_csv(&text));

    assert_eq!(result.data.len(), 2);
    assert_eq!(
        result.error_messages(),
        vec!["Row 4: Invalid BMI", "Row 5: Invalid BMI"]
    );
}

#[test]
fn age_bounds_are_inclusive() {
    let text = csv(
        PATIENT_HEADER,
        &[
            patient_row("PAT001", "0", "20"),
            patient_row("PAT002", "150", "20"),
            patient_row("PAT003", "-1", "20"),
            patient_row("PAT004", "151", "20"),
        ],
    );
    let result = validate_patients(&parse_csv(&text));
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn column_order_and_case_do_not_matter() {
    let header = "Insurance_Type,REGISTRATION_DATE,chronic_conditions,alcohol_use,smoker_status,bmi,hospital_location,emergency_contact,email,phone_number,blood_group,gender,age,full_name,patient_id";
    let row = "Public,2024-05-05,,No,Yes,33.3,West,555,a@b.c,556,B-,Other,70,Lee Min,PAT042".to_string();
    let result = validate_patients(&parse_csv(&csv(header, &[row])));

    assert!(result.valid);
    let patient = result.records().next().expect("one patient");
    assert_eq!(patient.patient_id, "PAT042");
    assert_eq!(patient.insurance_type, "Public");
    assert_eq!(patient.gender, Gender::Other);
    assert!(patient.chronic_conditions.is_empty());
}

#[test]
fn visit_type_must_be_op_or_ip() {
    let text = csv(
        VISIT_HEADER,
        &[
            visit_row("VIS001", "2", "Emergency"),
            visit_row("VIS002", "2", "OP"),
            visit_row("VIS003", "2", "IP"),
        ],
    );
    let result = validate_visits(&parse_csv(&text));

    assert_eq!(result.data.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].message.contains("visit_type"));
    assert_eq!(result.errors[0].row, Some(2));
    assert_eq!(result.data[1].record.visit_type, VisitType::Inpatient);
}

#[test]
fn visit_severity_range_and_numeric_fields() {
    let rows = vec![
        visit_row("VIS001", "6", "OP"),
        "VIS002,PAT001,2024-02-01,1,OP,-2,high,120/80,x,,-5,Dr. Rao,Cardiology".to_string(),
    ];
    let result = validate_visits(&parse_csv(&csv(VISIT_HEADER, &rows)));

    assert!(result.data.is_empty());
    assert_eq!(
        result.error_messages(),
        vec![
            "Row 2: Invalid severity_score (must be 0-5)",
            "Row 3: Invalid length_of_stay; Invalid lab_result_glucose; Invalid visit_cost",
        ]
    );
}

#[test]
fn visit_gap_and_readmission_default_instead_of_failing() {
    let row = "VIS010,PAT001,2024-02-01,0,OP,0,90,110/70,soon,,0,Dr. Rao,Cardiology".to_string();
    let result = validate_visits(&parse_csv(&csv(VISIT_HEADER, &[row])));

    assert!(result.valid);
    let visit = result.records().next().expect("one visit");
    assert_eq!(visit.previous_visit_gap_days, 0);
    assert_eq!(visit.readmitted_within_30_days, Readmission::NotApplicable);
    assert_eq!(visit.doctor_name, "Dr. Rao");
}

#[test]
fn prescription_doctor_name_is_never_read_from_the_file() {
    let header = format!("{PRESCRIPTION_HEADER},doctor_name");
    let row = "PRE001,VIS001,PAT001,D10,Type 2 diabetes,Metformin,500mg,60,30,2024-02-02,General Medicine,12.5,Dr. Somebody".to_string();
    let result = validate_prescriptions(&parse_csv(&csv(&header, &[row])));

    assert!(result.valid);
    let prescription = result.records().next().expect("one prescription");
    assert_eq!(prescription.doctor_name, "");
    assert_eq!(prescription.quantity, 60);
    assert_eq!(prescription.days_supply, 30);
    assert!((prescription.cost - 12.5).abs() < 1e-9);
}

#[test]
fn large_counts_are_not_capped() {
    let row = "VIS001,PAT001,2024-02-01,2,IP,5000000000,105.5,120/80,0,No,2500,Dr. Rao,Cardiology".to_string();
    let result = validate_visits(&parse_csv(&csv(VISIT_HEADER, &[row])));
    assert!(result.valid, "{:?}", result.error_messages());
    assert_eq!(result.data[0].record.length_of_stay, 5_000_000_000);

    let rows = vec![
        "PRE001,VIS001,PAT001,D10,Flu,Oseltamivir,75mg,4294967296,30,2024-02-02,General Medicine,3".to_string(),
        "PRE002,VIS001,PAT001,D10,Flu,Oseltamivir,75mg,30,99999999999999999999999,2024-02-02,General Medicine,3".to_string(),
    ];
    let result = validate_prescriptions(&parse_csv(&csv(PRESCRIPTION_HEADER, &rows)));
    assert!(result.valid, "{:?}", result.error_messages());
    assert_eq!(result.data[0].record.quantity, 4_294_967_296);
    assert_eq!(result.data[1].record.days_supply, i64::MAX as u64);
}

#[test]
fn prescription_counts_and_cost_must_be_non_negative() {
    let row = "PRE002,VIS001,PAT001,D10,Flu,Oseltamivir,75mg,-1,many,2024-02-02,General Medicine,-3".to_string();
    let result = validate_prescriptions(&parse_csv(&csv(PRESCRIPTION_HEADER, &[row])));

    assert_eq!(
        result.error_messages(),
        vec!["Row 2: Invalid quantity; Invalid days_supply; Invalid cost"]
    );
}

#[test]
fn doctor_roster_rules() {
    let text = "user_id,doctor_name,password,doctor_speciality\n\
                dr_rao,Dr. Rao,heart123,Cardiology\n\
                dr_x,,abc,Dermatology\n";
    let result = validate_doctors(&parse_csv(text));

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].record.doctor_speciality, Speciality::Cardiology);
    assert_eq!(
        result.error_messages(),
        vec![
            "Row 3: Missing doctor_name; Invalid password (must be at least 6 characters); \
             Invalid doctor_speciality (must be Cardiology, Neurology, Orthopedics, Pediatrics, or General)"
        ]
    );
}

#[test]
fn result_serializes_for_reporting() {
    let text = csv(PATIENT_HEADER, &[patient_row("PAT001", "x", "20")]);
    let result = validate_patients(&parse_csv(&text));
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["row"], 2);
    assert_eq!(json["errors"][0]["message"], "Invalid age");
}
