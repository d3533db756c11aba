//! Session flow tests: persistence, restore and navigation transitions

use smart_agri::session::{FileStore, MemoryStore, SessionStore, LANGUAGE_KEY, USER_KEY};
use smart_agri::{Language, Navigator, Page, PageKey, UserRecord};

fn navigator_on(store: &MemoryStore) -> Navigator {
    Navigator::restore(SessionStore::new(store.clone()))
}

fn demo_user() -> UserRecord {
    UserRecord::from_login("farmer@demo.com", "farmer123")
}

/// Drive a fresh navigator all the way to the dashboard
fn logged_in(store: &MemoryStore, language: Language) -> Navigator {
    let mut nav = navigator_on(store);
    nav.select_language(language);
    nav.continue_from_welcome();
    nav.login(demo_user());
    nav
}

#[test]
fn test_empty_store_starts_at_language() {
    let store = MemoryStore::new();
    let nav = navigator_on(&store);
    assert_eq!(nav.page(), Page::Language);
    assert!(nav.user().is_none());
}

#[test]
fn test_every_language_persists_and_restores() {
    for language in Language::ALL {
        let store = MemoryStore::new();
        let mut nav = navigator_on(&store);

        nav.select_language(language);
        assert_eq!(nav.page(), Page::Welcome);
        assert_eq!(nav.language(), language);

        nav.continue_from_welcome();
        nav.login(demo_user());

        let restored = navigator_on(&store);
        assert_eq!(restored.page(), Page::Dashboard, "restore for {}", language);
        assert_eq!(restored.language(), language);
        assert_eq!(
            restored.user().and_then(|u| u.email.as_deref()),
            Some("farmer@demo.com")
        );
    }
}

#[test]
fn test_language_only_is_not_restored() {
    let store = MemoryStore::new();
    let mut nav = navigator_on(&store);
    nav.select_language(Language::Te);

    let restored = navigator_on(&store);
    assert_eq!(restored.page(), Page::Language);
}

#[test]
fn test_logout_clears_both_flags_from_any_page() {
    let pages = [
        None,
        Some(PageKey::MySoil),
        Some(PageKey::BestCrops),
        Some(PageKey::MarketPrices),
        Some(PageKey::SmartGuidance),
        Some(PageKey::AskAi),
        Some(PageKey::MyFarm),
    ];

    for key in pages {
        let store = MemoryStore::new();
        let mut nav = logged_in(&store, Language::Hi);
        if let Some(key) = key {
            nav.navigate_to(key.as_str());
        }

        nav.logout();

        assert_eq!(nav.page(), Page::Language);
        assert!(nav.user().is_none());
        assert!(nav.session().language.is_none());
        let session = SessionStore::new(store.clone());
        assert!(session.raw(LANGUAGE_KEY).is_none());
        assert!(session.raw(USER_KEY).is_none());
    }
}

#[test]
fn test_back_to_language_clears_from_onboarding() {
    let store = MemoryStore::new();
    let mut nav = navigator_on(&store);
    nav.select_language(Language::En);
    nav.continue_from_welcome();
    nav.go_to_create_account();

    nav.back_to_language();

    assert_eq!(nav.page(), Page::Language);
    assert!(store.is_empty());
}

#[test]
fn test_unknown_page_key_goes_to_dashboard() {
    let store = MemoryStore::new();
    let mut nav = logged_in(&store, Language::En);
    nav.navigate_to("my_soil");
    assert_eq!(nav.page(), Page::Soil);

    nav.navigate_to("weather_radar");
    assert_eq!(nav.page(), Page::Dashboard);

    nav.navigate_to("");
    assert_eq!(nav.page(), Page::Dashboard);
}

#[test]
fn test_back_is_flat() {
    let store = MemoryStore::new();
    let mut nav = logged_in(&store, Language::En);
    nav.navigate_to("ask_ai");
    nav.back();
    assert_eq!(nav.page(), Page::Dashboard);
    nav.back();
    assert_eq!(nav.page(), Page::Dashboard);
}

#[test]
fn test_account_creation_flow() {
    let store = MemoryStore::new();
    let mut nav = navigator_on(&store);
    nav.select_language(Language::Te);
    nav.continue_from_welcome();
    nav.go_to_create_account();
    assert_eq!(nav.page(), Page::CreateAccount);

    nav.back_to_login();
    assert_eq!(nav.page(), Page::Login);
    nav.back_to_welcome();
    assert_eq!(nav.page(), Page::Welcome);
    nav.continue_from_welcome();
    nav.go_to_create_account();

    let user = UserRecord::from_account("A", "a@b.com", "");
    nav.account_created(user.clone());
    assert_eq!(nav.page(), Page::Dashboard);
    assert_eq!(nav.user(), Some(&user));

    let restored = navigator_on(&store);
    assert_eq!(restored.user(), Some(&user));
}

#[test]
fn test_file_store_restore_across_runs() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut nav = Navigator::restore(SessionStore::new(FileStore::open(dir.path())));
        nav.select_language(Language::Hi);
        nav.continue_from_welcome();
        nav.login(demo_user());
    }

    let nav = Navigator::restore(SessionStore::new(FileStore::open(dir.path())));
    assert_eq!(nav.page(), Page::Dashboard);
    assert_eq!(nav.language(), Language::Hi);

    let raw = std::fs::read_to_string(dir.path().join(FileStore::FILE_NAME)).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries[LANGUAGE_KEY], "hi");
    let user: serde_json::Value =
        serde_json::from_str(entries[USER_KEY].as_str().unwrap()).unwrap();
    assert_eq!(user["email"], "farmer@demo.com");
}

#[test]
fn test_malformed_user_is_not_restored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(FileStore::FILE_NAME),
        r#"{"smartAgriLanguage":"te","smartAgriUser":"{not json"}"#,
    )
    .unwrap();

    let nav = Navigator::restore(SessionStore::new(FileStore::open(dir.path())));
    assert_eq!(nav.page(), Page::Language);
}
