//! Placeholder admin login.
//!
//! Nothing is verified: any non-empty email and password pair opens a session.
//! The session value exists so that the editing surface can only be built after
//! passing through the login step, which is how the app keeps "only admins edit"
//! as a convention.

use anyhow::{Result, bail};

/// Credentials entered on the admin login form.
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Proof that the admin login form was passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    email: String,
}

impl AdminSession {
    pub fn email(&self) -> &str {
        &self.email
    }
}

pub struct AdminGate;

impl AdminGate {
    /// Open an admin session if both fields are filled in.
    pub fn login(credentials: &AdminCredentials) -> Result<AdminSession> {
        let email = credentials.email.trim();
        if email.is_empty() {
            bail!("Admin email is required");
        }
        if credentials.password.trim().is_empty() {
            bail!("Admin password is required");
        }

        Ok(AdminSession {
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::test_constants::*;

    #[test]
    fn test_login_with_both_fields() {
        let session =
            AdminGate::login(&AdminCredentials::new(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD))
                .unwrap();
        assert_eq!(session.email(), TEST_ADMIN_EMAIL);
    }

    #[test]
    fn test_login_trims_email() {
        let session = AdminGate::login(&AdminCredentials::new(
            format!("  {TEST_ADMIN_EMAIL} "),
            TEST_ADMIN_PASSWORD,
        ))
        .unwrap();
        assert_eq!(session.email(), TEST_ADMIN_EMAIL);
    }

    #[test]
    fn test_login_requires_email() {
        let err = AdminGate::login(&AdminCredentials::new("", TEST_ADMIN_PASSWORD)).unwrap_err();
        assert_eq!(err.to_string(), "Admin email is required");
    }

    #[test]
    fn test_login_requires_password() {
        let err = AdminGate::login(&AdminCredentials::new(TEST_ADMIN_EMAIL, "   ")).unwrap_err();
        assert_eq!(err.to_string(), "Admin password is required");
    }
}
