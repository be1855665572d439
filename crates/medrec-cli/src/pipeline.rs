//! The work behind `medrec check` and `medrec load`.
//!
//! Everything here returns plain data; printing is left to the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info_span, trace};

use medrec_auth::{ADMIN_PASSWORD, ADMIN_USER_ID, Authenticator, Portal, Session};
use medrec_ingest::{Grid, ReadOptions, read_csv_grid, write_records};
use medrec_model::{Doctor, Record, RecordKind, Visit};
use medrec_store::{HospitalStore, ImportReport, InMemoryDirectory, RECENT_VISIT_LIMIT};
use medrec_validate::{
    ValidationResult, validate_doctors, validate_patients, validate_prescriptions,
    validate_visits,
};

use crate::logging::redact_value;
use crate::types::{CheckResult, DoctorSummary, ImportSummary, LoadResult, RosterLine, VisitLine};

/// Accepted records shown by `check`.
pub const PREVIEW_LIMIT: usize = 5;

/// Credentials for the doctor session that imports prescriptions.
#[derive(Debug, Clone)]
pub struct DoctorLogin {
    pub user_id: String,
    pub password: String,
}

/// Inputs of one `load` run.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    pub doctors: Option<PathBuf>,
    pub patients: Option<PathBuf>,
    pub visits: Option<PathBuf>,
    pub prescriptions: Option<PathBuf>,
    pub doctor_login: Option<DoctorLogin>,
    pub export_dir: Option<PathBuf>,
    pub read_options: ReadOptions,
    /// Reference date for the "this month" count.
    pub today: NaiveDate,
}

pub fn check_file(kind: RecordKind, path: &Path, options: ReadOptions) -> Result<CheckResult> {
    let grid = read_grid(path, options)?;
    match kind {
        RecordKind::Patient => summarize_check(path, &validate_patients(&grid)),
        RecordKind::Visit => summarize_check(path, &validate_visits(&grid)),
        RecordKind::Doctor => summarize_check(path, &validate_doctors(&grid)),
        RecordKind::Prescription => summarize_check(path, &validate_prescriptions(&grid)),
    }
}

fn summarize_check<R>(path: &Path, result: &ValidationResult<R>) -> Result<CheckResult>
where
    R: Record + Serialize,
{
    let json = serde_json::to_value(result).context("serialize validation result")?;
    Ok(CheckResult {
        kind: R::KIND,
        path: path.to_path_buf(),
        valid: result.valid,
        accepted: result.data.len(),
        errors: result.error_messages(),
        preview: result.preview(PREVIEW_LIMIT).map(Record::to_row).collect(),
        json,
    })
}

/// Runs one in-memory session: doctors, patients and visits are imported as
/// the administrator, prescriptions as the logged-in doctor.
pub fn run_load(plan: &LoadPlan) -> Result<LoadResult> {
    let span = info_span!("load");
    let _guard = span.enter();

    let mut store = HospitalStore::new();
    let mut directory = InMemoryDirectory::new();
    let admin = Authenticator::new(&directory)
        .login(ADMIN_USER_ID, ADMIN_PASSWORD, Portal::Admin)
        .context("administrator login")?;
    debug!(user = %admin.user_id, "administrator session opened");

    let mut result = LoadResult::default();

    if let Some(path) = &plan.doctors {
        let grid = read_grid(path, plan.read_options)?;
        let report = store.import_doctors(validate_doctors(&grid), &mut directory);
        result.imports.push(summarize_import(RecordKind::Doctor, path, &report));
    }
    if let Some(path) = &plan.patients {
        let grid = read_grid(path, plan.read_options)?;
        let report = store.import_patients(validate_patients(&grid));
        result.imports.push(summarize_import(RecordKind::Patient, path, &report));
    }
    if let Some(path) = &plan.visits {
        let grid = read_grid(path, plan.read_options)?;
        let report = store.import_visits(validate_visits(&grid));
        result.imports.push(summarize_import(RecordKind::Visit, path, &report));
    }

    let doctor = match &plan.doctor_login {
        Some(login) => Some(doctor_session(&directory, login)?),
        None => None,
    };
    if let Some(path) = &plan.prescriptions {
        let session = doctor.as_ref().ok_or_else(|| {
            anyhow!("importing prescriptions needs a doctor login (--doctor-user, --doctor-password)")
        })?;
        let grid = read_grid(path, plan.read_options)?;
        let report = store.import_prescriptions(validate_prescriptions(&grid), &session.name);
        result
            .imports
            .push(summarize_import(RecordKind::Prescription, path, &report));
    }
    result.prescribing_doctor = doctor.map(|session| session.name);

    result.admin = store.admin_overview(plan.today);
    result.recent_visits = store
        .recent_visits(RECENT_VISIT_LIMIT)
        .into_iter()
        .map(visit_line)
        .collect();
    result.doctors = store
        .doctors()
        .iter()
        .map(|doctor| doctor_summary(&store, doctor))
        .collect();

    if let Some(dir) = &plan.export_dir {
        result.exported = export_all(&store, dir)?;
    }
    result.has_errors = result.imports.iter().any(|import| !import.errors.is_empty());
    Ok(result)
}

fn read_grid(path: &Path, options: ReadOptions) -> Result<Grid> {
    read_csv_grid(path, options).with_context(|| format!("load {}", path.display()))
}

fn doctor_session(directory: &InMemoryDirectory, login: &DoctorLogin) -> Result<Session> {
    Authenticator::new(directory)
        .login(&login.user_id, &login.password, Portal::Doctor)
        .with_context(|| format!("doctor login as {}", login.user_id))
}

fn summarize_import(kind: RecordKind, path: &Path, report: &ImportReport) -> ImportSummary {
    let errors = report.error_messages();
    for message in &errors {
        trace!(kind = %kind, rejection = redact_value(message), "row rejected");
    }
    ImportSummary {
        kind,
        path: path.to_path_buf(),
        merged: report.merged,
        errors,
    }
}

fn visit_line(visit: &Visit) -> VisitLine {
    VisitLine {
        visit_id: visit.visit_id.clone(),
        patient_id: visit.patient_id.clone(),
        visit_date: visit.visit_date.clone(),
        severity_score: visit.severity_score,
        doctor_name: visit.doctor_name.clone(),
    }
}

fn doctor_summary(store: &HospitalStore, doctor: &Doctor) -> DoctorSummary {
    let name = doctor.doctor_name.as_str();
    let roster = store
        .doctor_roster(name)
        .into_iter()
        .map(|activity| RosterLine {
            patient_id: activity.patient.patient_id.clone(),
            full_name: activity.patient.full_name.clone(),
            visits: activity.visit_count,
            last_visit: activity.last_visit.map(|visit| visit.visit_date.clone()),
            trend: activity.trend,
        })
        .collect();
    DoctorSummary {
        user_id: doctor.user_id.clone(),
        name: doctor.doctor_name.clone(),
        speciality: doctor.doctor_speciality,
        overview: store.doctor_overview(name),
        breakdown: store.visit_breakdown(name),
        roster,
    }
}

/// Writes every collection to `<dir>/<kind>s.csv`.
fn export_all(store: &HospitalStore, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let paths = [
        dir.join("doctors.csv"),
        dir.join("patients.csv"),
        dir.join("visits.csv"),
        dir.join("prescriptions.csv"),
    ];
    write_records(&paths[0], store.doctors().as_slice())?;
    write_records(&paths[1], store.patients().as_slice())?;
    write_records(&paths[2], store.visits().as_slice())?;
    write_records(&paths[3], store.prescriptions().as_slice())?;
    Ok(paths.to_vec())
}
