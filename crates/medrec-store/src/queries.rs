//! Read-only views used by the admin and doctor dashboards.
//!
//! Doctors are matched by display name, the same denormalized name stored on
//! visits and prescriptions. Ordering by visit date uses
//! [`parse_visit_date`]; unparseable dates sort as the oldest, and of two
//! visits on the same day the one stored later counts as newer.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use medrec_model::{Patient, Prescription, Visit, VisitType};

use crate::dates::parse_visit_date;
use crate::store::HospitalStore;

/// How many visits the dashboards list as recent.
pub const RECENT_VISIT_LIMIT: usize = 5;

/// Direction of a patient's severity between their two latest visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTrend {
    Increased,
    Decreased,
    Neutral,
}

impl SeverityTrend {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTrend::Increased => "increased",
            SeverityTrend::Decreased => "decreased",
            SeverityTrend::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SeverityTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a doctor's patient roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientActivity<'a> {
    pub patient: &'a Patient,
    /// Visits of this patient attended by the doctor.
    pub visit_count: usize,
    pub last_visit: Option<&'a Visit>,
    pub trend: SeverityTrend,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisitBreakdown {
    pub inpatient: usize,
    pub outpatient: usize,
}

/// Headline counts on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AdminOverview {
    pub patients: usize,
    pub visits: usize,
    pub doctors: usize,
    pub visits_this_month: usize,
}

/// Headline figures on a doctor's dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DoctorOverview {
    pub patients: usize,
    pub visits: usize,
    pub prescriptions: usize,
    pub average_severity: f64,
}

impl HospitalStore {
    pub fn patient(&self, patient_id: &str) -> Option<&Patient> {
        self.patients().get(patient_id)
    }

    pub fn visits_by_patient(&self, patient_id: &str) -> Vec<&Visit> {
        self.visits()
            .iter()
            .filter(|visit| visit.patient_id == patient_id)
            .collect()
    }

    pub fn visits_by_doctor(&self, doctor_name: &str) -> Vec<&Visit> {
        self.visits()
            .iter()
            .filter(|visit| visit.doctor_name == doctor_name)
            .collect()
    }

    pub fn prescriptions_by_doctor(&self, doctor_name: &str) -> Vec<&Prescription> {
        self.prescriptions()
            .iter()
            .filter(|prescription| prescription.doctor_name == doctor_name)
            .collect()
    }

    /// Patients with at least one visit by the doctor, in store order.
    pub fn patients_by_doctor(&self, doctor_name: &str) -> Vec<&Patient> {
        let seen: BTreeSet<&str> = self
            .visits_by_doctor(doctor_name)
            .into_iter()
            .map(|visit| visit.patient_id.as_str())
            .collect();
        self.patients()
            .iter()
            .filter(|patient| seen.contains(patient.patient_id.as_str()))
            .collect()
    }

    /// Compares the severity of the patient's two latest visits with this
    /// doctor. Fewer than two visits is [`SeverityTrend::Neutral`].
    pub fn severity_trend(&self, doctor_name: &str, patient_id: &str) -> SeverityTrend {
        let mut visits: Vec<&Visit> = self
            .visits_by_doctor(doctor_name)
            .into_iter()
            .filter(|visit| visit.patient_id == patient_id)
            .collect();
        visits.sort_by(|a, b| by_date(a, b));
        match visits.as_slice() {
            [.., previous, latest] => match latest.severity_score.cmp(&previous.severity_score) {
                Ordering::Greater => SeverityTrend::Increased,
                Ordering::Less => SeverityTrend::Decreased,
                Ordering::Equal => SeverityTrend::Neutral,
            },
            _ => SeverityTrend::Neutral,
        }
    }

    /// The latest visits across the hospital, newest first.
    pub fn recent_visits(&self, limit: usize) -> Vec<&Visit> {
        newest_first(self.visits().iter().collect(), limit)
    }

    /// The doctor's latest visits, newest first.
    pub fn recent_visits_by_doctor(&self, doctor_name: &str, limit: usize) -> Vec<&Visit> {
        newest_first(self.visits_by_doctor(doctor_name), limit)
    }

    /// The doctor's patients with visit count, latest visit and trend.
    pub fn doctor_roster(&self, doctor_name: &str) -> Vec<PatientActivity<'_>> {
        let visits = self.visits_by_doctor(doctor_name);
        self.patients_by_doctor(doctor_name)
            .into_iter()
            .map(|patient| {
                let own: Vec<&Visit> = visits
                    .iter()
                    .copied()
                    .filter(|visit| visit.patient_id == patient.patient_id)
                    .collect();
                PatientActivity {
                    patient,
                    visit_count: own.len(),
                    last_visit: newest_first(own, 1).into_iter().next(),
                    trend: self.severity_trend(doctor_name, &patient.patient_id),
                }
            })
            .collect()
    }

    /// Mean severity over the doctor's visits; 0 when there are none.
    pub fn average_severity(&self, doctor_name: &str) -> f64 {
        let visits = self.visits_by_doctor(doctor_name);
        if visits.is_empty() {
            return 0.0;
        }
        let total: u32 = visits
            .iter()
            .map(|visit| u32::from(visit.severity_score))
            .sum();
        f64::from(total) / visits.len() as f64
    }

    pub fn visit_breakdown(&self, doctor_name: &str) -> VisitBreakdown {
        self.visits_by_doctor(doctor_name)
            .into_iter()
            .fold(VisitBreakdown::default(), |mut counts, visit| {
                match visit.visit_type {
                    VisitType::Inpatient => counts.inpatient += 1,
                    VisitType::Outpatient => counts.outpatient += 1,
                }
                counts
            })
    }

    /// Visits dated in the same calendar month and year as `reference`.
    pub fn visits_in_month(&self, reference: NaiveDate) -> Vec<&Visit> {
        self.visits()
            .iter()
            .filter(|visit| {
                parse_visit_date(&visit.visit_date).is_some_and(|date| {
                    date.year() == reference.year() && date.month() == reference.month()
                })
            })
            .collect()
    }

    /// Whole days between the patient's latest stored visit and `visit_date`.
    ///
    /// Floored at 0. A patient without visits, or dates that do not parse,
    /// give 0.
    pub fn previous_visit_gap_days(&self, patient_id: &str, visit_date: &str) -> i64 {
        let Some(next) = parse_visit_date(visit_date) else {
            return 0;
        };
        newest_first(self.visits_by_patient(patient_id), 1)
            .first()
            .and_then(|latest| parse_visit_date(&latest.visit_date))
            .map_or(0, |latest| (next - latest).num_days().max(0))
    }

    pub fn admin_overview(&self, today: NaiveDate) -> AdminOverview {
        AdminOverview {
            patients: self.patients().len(),
            visits: self.visits().len(),
            doctors: self.doctors().len(),
            visits_this_month: self.visits_in_month(today).len(),
        }
    }

    pub fn doctor_overview(&self, doctor_name: &str) -> DoctorOverview {
        DoctorOverview {
            patients: self.patients_by_doctor(doctor_name).len(),
            visits: self.visits_by_doctor(doctor_name).len(),
            prescriptions: self.prescriptions_by_doctor(doctor_name).len(),
            average_severity: self.average_severity(doctor_name),
        }
    }
}

fn by_date(a: &Visit, b: &Visit) -> Ordering {
    parse_visit_date(&a.visit_date).cmp(&parse_visit_date(&b.visit_date))
}

/// Newest-first order, truncated to `limit`. Same-day visits come out
/// latest-stored first, matching the ascending order's tail.
fn newest_first(mut visits: Vec<&Visit>, limit: usize) -> Vec<&Visit> {
    visits.reverse();
    visits.sort_by(|a, b| by_date(b, a));
    visits.truncate(limit);
    visits
}
