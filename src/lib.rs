//! Smart Agriculture - multilingual, voice-enabled assistant for smallholder farmers
//!
//! The app walks a farmer through language selection, a simulated login and
//! a dashboard of informational pages. Every page can read its content
//! aloud, and a few accept spoken input. All content is local mock data.

pub mod auth;
pub mod backend;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod session;
pub mod ui;
pub mod voice;

// Re-export error types
pub use error::{AgriError, Result};

pub use config::AppConfig;
pub use i18n::{t, Language, TextKey};
pub use navigation::{Navigator, Page, PageKey};
pub use session::{Session, SessionStore, UserRecord};
pub use voice::VoiceAdapter;
