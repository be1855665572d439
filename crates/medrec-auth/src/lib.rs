//! Portal login.
//!
//! One administrator account is built in. Doctor accounts come from the
//! [`medrec_store::DoctorDirectory`] the store registers doctors with, so a
//! doctor can log in as soon as they have been added.

mod authenticator;
mod error;
mod session;

pub use authenticator::{ADMIN_NAME, ADMIN_PASSWORD, ADMIN_USER_ID, Authenticator};
pub use error::{AuthError, Result};
pub use session::{Portal, Role, Session};
