//! Closed vocabularies used by hospital records.
//!
//! Values are matched case-sensitively, exactly as they appear in source
//! files. `Male` is a gender, `male` is not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Patient gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| ModelError::InvalidValue {
                field: "gender",
                value: s.to_string(),
            })
    }
}

/// Yes/No flag used for lifestyle fields (smoker status, alcohol use).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YesNo {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(YesNo::Yes),
            "No" => Ok(YesNo::No),
            other => Err(ModelError::InvalidValue {
                field: "yes/no flag",
                value: other.to_string(),
            }),
        }
    }
}

/// Outpatient or inpatient visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitType {
    #[serde(rename = "OP")]
    Outpatient,
    #[serde(rename = "IP")]
    Inpatient,
}

impl VisitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitType::Outpatient => "OP",
            VisitType::Inpatient => "IP",
        }
    }
}

impl fmt::Display for VisitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisitType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OP" => Ok(VisitType::Outpatient),
            "IP" => Ok(VisitType::Inpatient),
            other => Err(ModelError::InvalidValue {
                field: "visit_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Readmission within 30 days of a previous discharge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Readmission {
    Yes,
    No,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Readmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Readmission::Yes => "Yes",
            Readmission::No => "No",
            Readmission::NotApplicable => "N/A",
        }
    }

    /// Reads a source cell. The field is never rejected: anything other
    /// than `Yes` or `No` (including an empty or absent cell) is `N/A`.
    pub fn from_cell(value: &str) -> Self {
        match value {
            "Yes" => Readmission::Yes,
            "No" => Readmission::No,
            _ => Readmission::NotApplicable,
        }
    }
}

impl fmt::Display for Readmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Medical speciality of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Speciality {
    Cardiology,
    Neurology,
    Orthopedics,
    Pediatrics,
    General,
}

impl Speciality {
    pub const ALL: [Speciality; 5] = [
        Speciality::Cardiology,
        Speciality::Neurology,
        Speciality::Orthopedics,
        Speciality::Pediatrics,
        Speciality::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Speciality::Cardiology => "Cardiology",
            Speciality::Neurology => "Neurology",
            Speciality::Orthopedics => "Orthopedics",
            Speciality::Pediatrics => "Pediatrics",
            Speciality::General => "General",
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speciality {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speciality::ALL
            .into_iter()
            .find(|speciality| speciality.as_str() == s)
            .ok_or_else(|| ModelError::InvalidValue {
                field: "doctor_speciality",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_is_case_sensitive() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert!("female".parse::<Gender>().is_err());
    }

    #[test]
    fn visit_type_uses_short_codes() {
        assert_eq!("IP".parse::<VisitType>(), Ok(VisitType::Inpatient));
        assert_eq!(VisitType::Outpatient.to_string(), "OP");
        assert!("Emergency".parse::<VisitType>().is_err());
    }

    #[test]
    fn readmission_defaults_to_not_applicable() {
        assert_eq!(Readmission::from_cell("Yes"), Readmission::Yes);
        assert_eq!(Readmission::from_cell(""), Readmission::NotApplicable);
        assert_eq!(Readmission::from_cell("maybe"), Readmission::NotApplicable);
        assert_eq!(Readmission::NotApplicable.as_str(), "N/A");
    }

    #[test]
    fn speciality_round_trips_through_display() {
        for speciality in Speciality::ALL {
            assert_eq!(speciality.to_string().parse::<Speciality>(), Ok(speciality));
        }
        let err = "Dermatology".parse::<Speciality>().unwrap_err();
        assert_eq!(err.to_string(), "invalid doctor_speciality value 'Dermatology'");
    }
}
