//! Translations and language codes
//!
//! Three locales with fully parallel key sets. Lookups never fail: every
//! [`TextKey`] has an entry in every table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported interface languages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
}

impl Language {
    /// All languages in selector order
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Te];

    /// Short code as persisted ("en", "hi", "te")
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// Parse a persisted language code
    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "te" => Some(Language::Te),
            _ => None,
        }
    }

    /// Speech locale used for both recognition and synthesis
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Hi => "hi-IN",
            Language::Te => "te-IN",
        }
    }

    /// English name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Te => "Telugu",
        }
    }

    /// Name of the language written in itself
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Te => "తెలుగు",
        }
    }

    /// Phrase spoken when previewing this language in the selector
    pub fn preview_phrase(&self) -> String {
        interpolate(
            t(*self, TextKey::LanguagePreview),
            &[("language", self.native_name())],
        )
    }

    fn table(&self) -> &'static [&'static str; TextKey::COUNT] {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Te => &TE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Map a raw language code to a speech locale, defaulting to en-US
pub fn locale_for_code(code: &str) -> &'static str {
    Language::from_code(code)
        .map(|lang| lang.locale())
        .unwrap_or("en-US")
}

/// Translation keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Language selection
    ChooseLanguage,
    TapToChoose,
    LanguagePreview,

    // Navigation
    Dashboard,
    MySoil,
    BestCrops,
    MarketPrices,
    SmartGuidance,
    AskAi,
    MyFarm,

    // Authentication
    Login,
    WelcomeBack,
    EnterToken,
    CreateAccount,
    InvalidToken,

    // Dashboard
    WelcomeFarmer,
    YourLocation,
    SyncStatus,
    Online,
    Offline,

    // Soil health
    SoilHealth,
    SoilPh,
    Nitrogen,
    Phosphorus,
    Potassium,
    Moisture,
    Excellent,
    Good,
    Fair,
    Poor,
    UpdateSoilData,
    SpeakSoilPh,

    // Voice
    VoiceCommand,
    Listening,
    SpeakNow,
    VoiceNotSupported,

    // General
    Save,
    Cancel,
    Update,
    Back,
    Next,
    Settings,
}

impl TextKey {
    pub const COUNT: usize = 42;

    /// Stable string id of the key
    pub fn id(&self) -> &'static str {
        match self {
            TextKey::ChooseLanguage => "choose_language",
            TextKey::TapToChoose => "tap_to_choose",
            TextKey::LanguagePreview => "language_preview",
            TextKey::Dashboard => "dashboard",
            TextKey::MySoil => "my_soil",
            TextKey::BestCrops => "best_crops",
            TextKey::MarketPrices => "market_prices",
            TextKey::SmartGuidance => "smart_guidance",
            TextKey::AskAi => "ask_ai",
            TextKey::MyFarm => "my_farm",
            TextKey::Login => "login",
            TextKey::WelcomeBack => "welcome_back",
            TextKey::EnterToken => "enter_token",
            TextKey::CreateAccount => "create_account",
            TextKey::InvalidToken => "invalid_token",
            TextKey::WelcomeFarmer => "welcome_farmer",
            TextKey::YourLocation => "your_location",
            TextKey::SyncStatus => "sync_status",
            TextKey::Online => "online",
            TextKey::Offline => "offline",
            TextKey::SoilHealth => "soil_health",
            TextKey::SoilPh => "soil_ph",
            TextKey::Nitrogen => "nitrogen",
            TextKey::Phosphorus => "phosphorus",
            TextKey::Potassium => "potassium",
            TextKey::Moisture => "moisture",
            TextKey::Excellent => "excellent",
            TextKey::Good => "good",
            TextKey::Fair => "fair",
            TextKey::Poor => "poor",
            TextKey::UpdateSoilData => "update_soil_data",
            TextKey::SpeakSoilPh => "speak_soil_ph",
            TextKey::VoiceCommand => "voice_command",
            TextKey::Listening => "listening",
            TextKey::SpeakNow => "speak_now",
            TextKey::VoiceNotSupported => "voice_not_supported",
            TextKey::Save => "save",
            TextKey::Cancel => "cancel",
            TextKey::Update => "update",
            TextKey::Back => "back",
            TextKey::Next => "next",
            TextKey::Settings => "settings",
        }
    }
}

/// Look up a translated string
pub fn t(language: Language, key: TextKey) -> &'static str {
    language.table()[key as usize]
}

/// Replace `{{name}}` placeholders in a translated template
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{{{}}}}}", name), value);
    }
    out
}

// Tables are ordered exactly like the `TextKey` variants.

static EN: [&str; TextKey::COUNT] = [
    "Choose Your Language",
    "Tap to choose your language",
    "This is how Smart Agriculture sounds in {{language}}",
    "Dashboard",
    "My Soil",
    "Best Crops",
    "Market Prices",
    "Smart Guidance",
    "Ask AI",
    "My Farm",
    "Login",
    "Welcome Back",
    "Enter your access token",
    "Create New Account",
    "Invalid access token",
    "Welcome, Farmer!",
    "Your Location",
    "Sync Status",
    "Online",
    "Offline",
    "Soil Health",
    "Soil pH",
    "Nitrogen (N)",
    "Phosphorus (P)",
    "Potassium (K)",
    "Moisture",
    "Excellent",
    "Good",
    "Fair",
    "Poor",
    "Update Soil Data",
    "Speak your soil pH value",
    "Voice Command",
    "Listening...",
    "Speak now",
    "Voice recognition not supported",
    "Save",
    "Cancel",
    "Update",
    "Back",
    "Next",
    "Settings",
];

static HI: [&str; TextKey::COUNT] = [
    "अपनी भाषा चुनें",
    "अपनी भाषा चुनने के लिए टैप करें",
    "स्मार्ट कृषि {{language}} में इस प्रकार लगती है",
    "डैशबोर्ड",
    "मेरी मिट्टी",
    "सर्वोत्तम फसलें",
    "बाजार मूल्य",
    "स्मार्ट मार्गदर्शन",
    "AI से पूछें",
    "मेरा खेत",
    "लॉगिन",
    "वापस स्वागत है",
    "अपना एक्सेस टोकन दर्ज करें",
    "नया खाता बनाएं",
    "अमान्य एक्सेस टोकन",
    "स्वागत है, किसान जी!",
    "आपका स्थान",
    "सिंक स्थिति",
    "ऑनलाइन",
    "ऑफलाइन",
    "मिट्टी का स्वास्थ्य",
    "मिट्टी pH",
    "नाइट्रोजन (N)",
    "फॉस्फोरस (P)",
    "पोटेशियम (K)",
    "नमी",
    "उत्कृष्ट",
    "अच्छा",
    "ठीक",
    "खराब",
    "मिट्टी डेटा अपडेट करें",
    "अपनी मिट्टी का pH मान बोलें",
    "आवाज कमांड",
    "सुन रहा है...",
    "अब बोलें",
    "आवाज पहचान समर्थित नहीं है",
    "सेव करें",
    "रद्द करें",
    "अपडेट करें",
    "वापस",
    "आगे",
    "सेटिंग्स",
];

static TE: [&str; TextKey::COUNT] = [
    "మీ భాషను ఎంచుకోండి",
    "మీ భాషను ఎంచుకోవడానికి ట్యాప్ చేయండి",
    "స్మార్ట్ వ్యవసాయం {{language}} లో ఇలా ఉంటుంది",
    "డాష్‌బోర్డ్",
    "నా మట్టి",
    "ఉత్తమ పంటలు",
    "మార్కెట్ ధరలు",
    "స్మార్ట్ మార్గదర్శకత్వం",
    "AI ని అడగండి",
    "నా వ్యవసాయ క్షేత్రం",
    "లాగిన్",
    "తిరిగి స్వాగతం",
    "మీ యాక్సెస్ టోకెన్ నమోదు చేయండి",
    "కొత్త ఖాతా సృష్టించండి",
    "చెల్లని యాక్సెస్ టోకెన్",
    "స్వాగతం, రైతు గారు!",
    "మీ స్థానం",
    "సింక్ స్థితి",
    "ఆన్‌లైన్",
    "ఆఫ్‌లైన్",
    "మట్టి ఆరోగ్యం",
    "మట్టి pH",
    "నైట్రోజన్ (N)",
    "ఫాస్ఫరస్ (P)",
    "పొటాషియం (K)",
    "తేమ",
    "అద్భుతమైన",
    "మంచి",
    "సరైన",
    "చెడు",
    "మట్టి డేటా అప్‌డేట్ చేయండి",
    "మీ మట్టి pH విలువను చెప్పండి",
    "వాయిస్ కమాండ్",
    "వింటున్నాను...",
    "ఇప్పుడు మాట్లాడండి",
    "వాయిస్ గుర్తింపు మద్దతు లేదు",
    "సేవ్ చేయండి",
    "రద్దు చేయండి",
    "అప్‌డేట్ చేయండి",
    "వెనుకకు",
    "తదుపరి",
    "సెట్టింగ్‌లు",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_locale_mapping() {
        assert_eq!(Language::En.locale(), "en-US");
        assert_eq!(Language::Hi.locale(), "hi-IN");
        assert_eq!(Language::Te.locale(), "te-IN");
        assert_eq!(locale_for_code("xx"), "en-US");
        assert_eq!(locale_for_code("te"), "te-IN");
    }

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(t(Language::En, TextKey::WelcomeFarmer), "Welcome, Farmer!");
        assert_eq!(t(Language::Hi, TextKey::Back), "वापस");
        assert_eq!(t(Language::Te, TextKey::Save), "సేవ్ చేయండి");
        assert_eq!(t(Language::En, TextKey::Settings), "Settings");
    }

    #[test]
    fn test_every_entry_present() {
        for lang in Language::ALL {
            assert!(lang.table().iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn test_interpolate_language_preview() {
        let template = t(Language::En, TextKey::LanguagePreview);
        assert_eq!(
            interpolate(template, &[("language", "Telugu")]),
            "This is how Smart Agriculture sounds in Telugu"
        );
    }

    #[test]
    fn test_preview_phrase_names_language_natively() {
        assert_eq!(
            Language::En.preview_phrase(),
            "This is how Smart Agriculture sounds in English"
        );
        assert_eq!(Language::Hi.preview_phrase(), "स्मार्ट कृषि हिन्दी में इस प्रकार लगती है");
        assert_eq!(Language::Te.preview_phrase(), "స్మార్ట్ వ్యవసాయం తెలుగు లో ఇలా ఉంటుంది");
    }

    #[test]
    fn test_key_ids() {
        assert_eq!(TextKey::MySoil.id(), "my_soil");
        assert_eq!(TextKey::Settings.id(), "settings");
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Hi).unwrap();
        assert_eq!(json, "\"hi\"");
        let lang: Language = serde_json::from_str("\"te\"").unwrap();
        assert_eq!(lang, Language::Te);
    }
}
