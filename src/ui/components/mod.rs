//! Reusable UI components

pub mod card;
pub mod page_header;
pub mod voice_button;

pub use card::{badge, Card};
pub use page_header::{HeaderResponse, PageHeader};
pub use voice_button::{VoiceButton, VoiceButtonKind};
