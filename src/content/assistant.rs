//! Canned farming assistant
//!
//! Replies are chosen by the first keyword found in the question. Keywords
//! are checked in a fixed order, so "soil and water" gets the soil answer.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Greeting shown when the assistant page opens
pub const WELCOME_MESSAGE: &str = "Hello! I'm your Smart Agriculture AI assistant. I can help you with farming advice, crop recommendations, pest control, weather guidance, and much more. What would you like to know?";

/// Reply when no keyword matches
pub const DEFAULT_RESPONSE: &str = "That's a great question! Based on modern agricultural practices, I recommend consulting with local agricultural experts and conducting soil tests for the most accurate advice. Would you like specific guidance on soil health, crop selection, or pest management?";

/// Spoken before listening for a question
pub const VOICE_PROMPT: &str = "Ask your farming question";

/// Suggested questions shown above the conversation
pub const QUICK_QUESTIONS: [&str; 5] = [
    "How to improve soil health?",
    "Best crops for my region?",
    "Pest control methods?",
    "Irrigation schedule?",
    "Market price trends?",
];

const RESPONSES: [(&str, &str); 8] = [
    (
        "soil",
        "Based on your soil health data, I recommend testing pH levels regularly and maintaining them between 6.0-7.5 for optimal crop growth. Consider adding organic matter to improve soil structure.",
    ),
    (
        "water",
        "For efficient water management, consider drip irrigation systems. Water your crops early morning or late evening to reduce evaporation. Monitor soil moisture regularly.",
    ),
    (
        "pest",
        "For pest control, use integrated pest management approaches. Neem-based pesticides are effective and organic. Regular field monitoring helps detect pest issues early.",
    ),
    (
        "crop",
        "Crop selection should be based on soil type, climate, water availability, and market demand. Consider diversifying crops to reduce risk and improve soil health.",
    ),
    (
        "fertilizer",
        "Use balanced NPK fertilizers based on soil test results. Organic fertilizers like compost and vermicompost improve long-term soil health.",
    ),
    (
        "weather",
        "Monitor weather forecasts regularly. Protect crops during extreme weather events. Adjust irrigation and fertilization schedules based on weather patterns.",
    ),
    (
        "market",
        "Track market prices regularly to make informed selling decisions. Consider value addition and direct marketing to improve profitability.",
    ),
    (
        "organic",
        "Organic farming requires 2-3 years transition period. Focus on soil health, use organic inputs, and implement biological pest control methods.",
    ),
];

/// Pick the canned reply for a question
pub fn respond(question: &str) -> &'static str {
    let lowered = question.to_lowercase();
    RESPONSES
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_RESPONSE)
}

/// Who wrote a chat message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the assistant conversation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }

    /// Time of day shown under the bubble
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
