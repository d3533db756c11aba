//! Page flow and session ownership
//!
//! Exactly one [`Page`] is active at a time. There is no history stack:
//! "back" from any content page always returns to the dashboard.

use crate::i18n::Language;
use crate::session::{Session, SessionStore, UserRecord};
use std::fmt;
use tracing::{debug, info, warn};

/// Navigation state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Language,
    Welcome,
    Login,
    CreateAccount,
    Dashboard,
    Soil,
    BestCrops,
    MarketPrices,
    SmartGuidance,
    AskAi,
    MyFarm,
}

impl Page {
    /// Pages reached from the dashboard tiles
    pub fn is_content(&self) -> bool {
        PageKey::ALL.iter().any(|key| key.page() == *self)
    }

    /// Pages shown before a user is logged in
    pub fn is_onboarding(&self) -> bool {
        matches!(
            self,
            Page::Language | Page::Welcome | Page::Login | Page::CreateAccount
        )
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Language => "language",
            Page::Welcome => "welcome",
            Page::Login => "login",
            Page::CreateAccount => "create-account",
            Page::Dashboard => "dashboard",
            Page::Soil => "soil",
            Page::BestCrops => "best-crops",
            Page::MarketPrices => "market-prices",
            Page::SmartGuidance => "smart-guidance",
            Page::AskAi => "ask-ai",
            Page::MyFarm => "my-farm",
        };
        write!(f, "{}", name)
    }
}

/// Dashboard tile keys
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    MySoil,
    BestCrops,
    MarketPrices,
    SmartGuidance,
    AskAi,
    MyFarm,
}

impl PageKey {
    /// Tiles in dashboard order
    pub const ALL: [PageKey; 6] = [
        PageKey::MySoil,
        PageKey::BestCrops,
        PageKey::MarketPrices,
        PageKey::SmartGuidance,
        PageKey::AskAi,
        PageKey::MyFarm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::MySoil => "my_soil",
            PageKey::BestCrops => "best_crops",
            PageKey::MarketPrices => "market_prices",
            PageKey::SmartGuidance => "smart_guidance",
            PageKey::AskAi => "ask_ai",
            PageKey::MyFarm => "my_farm",
        }
    }

    pub fn from_key(key: &str) -> Option<PageKey> {
        PageKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Content page this key opens
    pub fn page(&self) -> Page {
        match self {
            PageKey::MySoil => Page::Soil,
            PageKey::BestCrops => Page::BestCrops,
            PageKey::MarketPrices => Page::MarketPrices,
            PageKey::SmartGuidance => Page::SmartGuidance,
            PageKey::AskAi => Page::AskAi,
            PageKey::MyFarm => Page::MyFarm,
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Owns the active page and the session, persisting the latter
///
/// Every operation is accepted from any page. Store failures are logged and
/// never block the in-memory transition.
pub struct Navigator {
    page: Page,
    session: Session,
    store: SessionStore,
}

impl Navigator {
    /// Start from whatever the store holds
    pub fn restore(store: SessionStore) -> Self {
        let (page, session) = match store.restore() {
            Some(session) => {
                info!(
                    "Restored session (language: {})",
                    session.language_or_default()
                );
                (Page::Dashboard, session)
            }
            None => (Page::Language, Session::new()),
        };
        Self {
            page,
            session,
            store,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Active language, English before one is chosen
    pub fn language(&self) -> Language {
        self.session.language_or_default()
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.session.user.as_ref()
    }

    pub fn select_language(&mut self, language: Language) {
        self.session.language = Some(language);
        if let Err(e) = self.store.save_language(language) {
            warn!("Failed to persist language: {}", e);
        }
        self.go(Page::Welcome);
    }

    pub fn continue_from_welcome(&mut self) {
        self.go(Page::Login);
    }

    pub fn login(&mut self, user: UserRecord) {
        if let Err(e) = self.store.save_user(&user) {
            warn!("Failed to persist user: {}", e);
        }
        self.session.user = Some(user);
        self.go(Page::Dashboard);
    }

    pub fn go_to_create_account(&mut self) {
        self.go(Page::CreateAccount);
    }

    pub fn account_created(&mut self, user: UserRecord) {
        self.login(user);
    }

    pub fn back_to_login(&mut self) {
        self.go(Page::Login);
    }

    /// Open the content page for a dashboard key; unknown keys land on the dashboard
    pub fn navigate_to(&mut self, key: &str) {
        match PageKey::from_key(key) {
            Some(key) => self.go(key.page()),
            None => {
                debug!("Unknown page key {:?}", key);
                self.go(Page::Dashboard);
            }
        }
    }

    pub fn back(&mut self) {
        self.go(Page::Dashboard);
    }

    /// Forget the session entirely and return to language selection
    pub fn back_to_language(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear persisted session: {}", e);
        }
        self.session.clear();
        self.go(Page::Language);
    }

    pub fn logout(&mut self) {
        info!("Logging out");
        self.back_to_language();
    }

    pub fn back_to_welcome(&mut self) {
        self.go(Page::Welcome);
    }

    fn go(&mut self, to: Page) {
        debug!("Navigate {} -> {}", self.page, to);
        self.page = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;

    fn fresh() -> Navigator {
        Navigator::restore(SessionStore::new(MemoryStore::new()))
    }

    #[test]
    fn test_fresh_start_at_language() {
        let nav = fresh();
        assert_eq!(nav.page(), Page::Language);
        assert!(nav.user().is_none());
    }

    #[test]
    fn test_page_key_mapping() {
        for key in PageKey::ALL {
            assert_eq!(PageKey::from_key(key.as_str()), Some(key));
            assert!(key.page().is_content());
        }
        assert_eq!(PageKey::from_key("settings"), None);
        assert!(!Page::Dashboard.is_content());
        assert!(Page::Login.is_onboarding());
    }

    #[test]
    fn test_unknown_key_goes_to_dashboard() {
        let mut nav = fresh();
        nav.navigate_to("my_soil");
        assert_eq!(nav.page(), Page::Soil);
        nav.navigate_to("nope");
        assert_eq!(nav.page(), Page::Dashboard);
    }

    #[test]
    fn test_onboarding_flow() {
        let mut nav = fresh();
        nav.select_language(Language::Hi);
        assert_eq!(nav.page(), Page::Welcome);
        nav.continue_from_welcome();
        assert_eq!(nav.page(), Page::Login);
        nav.go_to_create_account();
        assert_eq!(nav.page(), Page::CreateAccount);
        nav.back_to_login();
        assert_eq!(nav.page(), Page::Login);
        nav.back_to_welcome();
        assert_eq!(nav.page(), Page::Welcome);
    }

    #[test]
    fn test_back_is_flat() {
        let mut nav = fresh();
        nav.navigate_to("ask_ai");
        nav.back();
        assert_eq!(nav.page(), Page::Dashboard);
        nav.back();
        assert_eq!(nav.page(), Page::Dashboard);
    }
}
