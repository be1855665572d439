use std::path::PathBuf;

use serde::Serialize;

use medrec_model::{RecordKind, Speciality};
use medrec_store::{AdminOverview, DoctorOverview, SeverityTrend, VisitBreakdown};

/// Outcome of `medrec check`.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub kind: RecordKind,
    pub path: PathBuf,
    pub valid: bool,
    pub accepted: usize,
    pub errors: Vec<String>,
    /// First accepted records as export rows.
    pub preview: Vec<Vec<String>>,
    /// The full validation result, for `--json`.
    pub json: serde_json::Value,
}

/// Outcome of `medrec load`.
#[derive(Debug, Clone, Default)]
pub struct LoadResult {
    pub imports: Vec<ImportSummary>,
    pub admin: AdminOverview,
    pub recent_visits: Vec<VisitLine>,
    pub doctors: Vec<DoctorSummary>,
    /// Doctor whose session stamped the imported prescriptions.
    pub prescribing_doctor: Option<String>,
    pub exported: Vec<PathBuf>,
    pub has_errors: bool,
}

#[derive(Debug, Clone)]
pub struct ImportSummary {
    pub kind: RecordKind,
    pub path: PathBuf,
    pub merged: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorSummary {
    pub user_id: String,
    pub name: String,
    pub speciality: Speciality,
    pub overview: DoctorOverview,
    pub breakdown: VisitBreakdown,
    pub roster: Vec<RosterLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterLine {
    pub patient_id: String,
    pub full_name: String,
    pub visits: usize,
    pub last_visit: Option<String>,
    pub trend: SeverityTrend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitLine {
    pub visit_id: String,
    pub patient_id: String,
    pub visit_date: String,
    pub severity_score: u8,
    pub doctor_name: String,
}
