use thiserror::Error;

/// Login failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Unknown user ID or wrong password.
    #[error("Invalid credentials. Please check your User ID and Password.")]
    InvalidCredentials,

    /// A doctor tried the administrator portal.
    #[error("Access denied. This portal is for Hospital Administrators only.")]
    AdminPortalOnly,

    /// The administrator tried the doctor portal.
    #[error("Access denied. This portal is for Doctors only.")]
    DoctorPortalOnly,
}

pub type Result<T> = std::result::Result<T, AuthError>;
