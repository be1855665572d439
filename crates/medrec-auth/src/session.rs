use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use medrec_model::Speciality;

/// Entry point a user logs in through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    Admin,
    Doctor,
}

impl Portal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Portal::Admin => "admin",
            Portal::Doctor => "doctor",
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Portal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Portal::Admin),
            "doctor" => Ok(Portal::Doctor),
            other => Err(format!("unknown portal '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
}

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: String,
    /// Display name. For doctors this is the name recorded on their visits
    /// and prescriptions.
    pub name: String,
    pub role: Role,
    pub speciality: Option<Speciality>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name to match visits and prescriptions against, for doctor sessions.
    pub fn doctor_name(&self) -> Option<&str> {
        match self.role {
            Role::Doctor => Some(&self.name),
            Role::Admin => None,
        }
    }
}
