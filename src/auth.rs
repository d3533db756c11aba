//! Login and account form validation
//!
//! There is no real authentication. Login accepts any well-formed email with
//! a password of at least six characters.

use crate::session::UserRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Email shown by the "Use Demo Account" button
pub const DEMO_EMAIL: &str = "farmer@demo.com";
/// Password shown by the "Use Demo Account" button
pub const DEMO_PASSWORD: &str = "farmer123";

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Form validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Please check your credentials and try again")]
    InvalidCredentials,

    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    WeakPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Toast title shown above the message
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingCredentials => "Missing Information",
            ValidationError::InvalidCredentials => "Login Failed",
            ValidationError::MissingFields => "Missing Information",
            ValidationError::InvalidEmail => "Invalid Email",
            ValidationError::WeakPassword => "Weak Password",
            ValidationError::PasswordMismatch => "Password Mismatch",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Login form contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_EMAIL, DEMO_PASSWORD)
    }

    /// Check run before submitting
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }

    /// Check run once the simulated round-trip completes
    pub fn check_credentials(&self) -> Result<UserRecord, ValidationError> {
        self.validate_fields()?;
        if is_valid_email(&self.email) && self.password.chars().count() >= MIN_PASSWORD_LEN {
            Ok(UserRecord::from_login(&self.email, &self.password))
        } else {
            Err(ValidationError::InvalidCredentials)
        }
    }
}

/// Create-account form contents
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Optional
    pub farm_location: String,
}

impl AccountForm {
    /// All checks run before submitting, in order
    pub fn validate(&self) -> Result<UserRecord, ValidationError> {
        if self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.trim().is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakPassword);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(UserRecord::from_account(
            &self.name,
            &self.email,
            &self.farm_location,
        ))
    }
}
