use tracing::debug;

use medrec_store::DoctorDirectory;

use crate::error::{AuthError, Result};
use crate::session::{Portal, Role, Session};

pub const ADMIN_USER_ID: &str = "admin_hospital";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_NAME: &str = "Hospital Administrator";

/// Checks logins against the built-in administrator and the doctors
/// registered in a [`DoctorDirectory`].
#[derive(Debug, Clone, Copy)]
pub struct Authenticator<'a, D: ?Sized> {
    directory: &'a D,
}

impl<'a, D> Authenticator<'a, D>
where
    D: DoctorDirectory + ?Sized,
{
    pub fn new(directory: &'a D) -> Self {
        Self { directory }
    }

    /// Logs in through `portal`.
    ///
    /// Credentials are checked first, the administrator before registered
    /// doctors; the portal is checked against the matched role afterwards.
    pub fn login(&self, user_id: &str, password: &str, portal: Portal) -> Result<Session> {
        let session = self
            .lookup(user_id, password)
            .ok_or(AuthError::InvalidCredentials)?;

        match (portal, session.role) {
            (Portal::Admin, Role::Doctor) => Err(AuthError::AdminPortalOnly),
            (Portal::Doctor, Role::Admin) => Err(AuthError::DoctorPortalOnly),
            _ => {
                debug!(portal = %portal, "login accepted");
                Ok(session)
            }
        }
    }

    fn lookup(&self, user_id: &str, password: &str) -> Option<Session> {
        if user_id == ADMIN_USER_ID && password == ADMIN_PASSWORD {
            return Some(Session {
                user_id: ADMIN_USER_ID.to_string(),
                name: ADMIN_NAME.to_string(),
                role: Role::Admin,
                speciality: None,
            });
        }
        self.directory
            .find(user_id)
            .filter(|credential| credential.password == password)
            .map(|credential| Session {
                user_id: credential.user_id.clone(),
                name: credential.name.clone(),
                role: Role::Doctor,
                speciality: Some(credential.speciality),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medrec_store::InMemoryDirectory;

    #[test]
    fn admin_logs_into_admin_portal() {
        let directory = InMemoryDirectory::new();
        let auth = Authenticator::new(&directory);
        let session = auth
            .login(ADMIN_USER_ID, ADMIN_PASSWORD, Portal::Admin)
            .unwrap();
        assert!(session.is_admin());
        assert_eq!(session.name, "Hospital Administrator");
        assert_eq!(session.doctor_name(), None);
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let directory = InMemoryDirectory::new();
        let auth = Authenticator::new(&directory);
        let err = auth.login(ADMIN_USER_ID, "admin", Portal::Admin).unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
    }

    #[test]
    fn admin_cannot_use_doctor_portal() {
        let directory = InMemoryDirectory::new();
        let auth = Authenticator::new(&directory);
        let err = auth
            .login(ADMIN_USER_ID, ADMIN_PASSWORD, Portal::Doctor)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Access denied. This portal is for Doctors only."
        );
    }
}
