//! Session state: the selected language and the logged-in user
//!
//! The session is persisted as two independent key/value entries, see
//! [`store`]. It is owned by the [`crate::navigation::Navigator`].

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, SessionStore, LANGUAGE_KEY, USER_KEY};

use crate::i18n::Language;
use serde::{Deserialize, Serialize};

/// User record as entered on the login or create-account page
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserRecord {
    /// Record produced by a successful login
    pub fn from_login(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            ..Default::default()
        }
    }

    /// Record produced by account creation (password is not kept)
    pub fn from_account(
        name: impl Into<String>,
        email: impl Into<String>,
        farm_location: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            farm_location: Some(farm_location.into()),
            password: None,
        }
    }

    /// Name to greet the user with, if any
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
    }
}

/// In-memory session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub language: Option<Language>,
    pub user: Option<UserRecord>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Both halves present, so the dashboard is reachable
    pub fn is_complete(&self) -> bool {
        self.language.is_some() && self.user.is_some()
    }

    /// Active language, English until one is chosen
    pub fn language_or_default(&self) -> Language {
        self.language.unwrap_or_default()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.language = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_json_layout() {
        let user = UserRecord::from_account("A", "a@b.com", "Warangal");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(
            json,
            r#"{"name":"A","email":"a@b.com","farmLocation":"Warangal"}"#
        );
    }

    #[test]
    fn test_user_record_accepts_partial_json() {
        let user: UserRecord =
            serde_json::from_str(r#"{"email":"farmer@demo.com","password":"farmer123"}"#).unwrap();
        assert_eq!(user.email.as_deref(), Some("farmer@demo.com"));
        assert!(user.name.is_none());
        assert_eq!(user.display_name(), Some("farmer@demo.com"));
    }

    #[test]
    fn test_session_completeness() {
        let mut session = Session::new();
        assert!(!session.is_complete());
        session.language = Some(Language::Te);
        assert!(!session.is_complete());
        session.user = Some(UserRecord::from_login("a@b.com", "secret1"));
        assert!(session.is_complete());
        session.clear();
        assert_eq!(session, Session::default());
        assert_eq!(session.language_or_default(), Language::En);
    }
}
