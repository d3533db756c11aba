//! UI automation tests using egui_kittest and AccessKit
//!
//! These drive the real [`AgriApp`] through the accessibility tree with
//! scripted voice backends and an instant simulated backend.

use smart_agri::backend::SimulatedBackend;
use smart_agri::config::DelayConfig;
use smart_agri::content::assistant::{respond, QUICK_QUESTIONS};
use smart_agri::content::soil::SoilField;
use smart_agri::content::LOGOUT_MESSAGE;
use smart_agri::session::MemoryStore;
use smart_agri::ui::{ActivePage, AgriApp};
use smart_agri::voice::testing::{
    RecordingSynthesizer, ScriptHandle, ScriptedRecognizer, SpeechHandle,
};
use smart_agri::voice::{RecognitionEventKind, VoiceAdapter};
use smart_agri::{Language, Navigator, Page, SessionStore, UserRecord};
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;
use std::time::Duration;

struct TestApp {
    app: AgriApp,
    store: MemoryStore,
    script: ScriptHandle,
    speech: SpeechHandle,
}

/// App over an in-memory store; `setup` drives the navigator before launch
fn test_app(setup: impl FnOnce(&mut Navigator)) -> TestApp {
    test_app_with_delays(DelayConfig::instant(), setup)
}

fn test_app_with_delays(delays: DelayConfig, setup: impl FnOnce(&mut Navigator)) -> TestApp {
    let store = MemoryStore::new();
    let mut navigator = Navigator::restore(SessionStore::new(store.clone()));
    setup(&mut navigator);

    let (recognizer, script) = ScriptedRecognizer::new();
    let (synthesizer, speech) = RecordingSynthesizer::new();
    let voice = VoiceAdapter::new(Box::new(recognizer), Box::new(synthesizer), navigator.language());
    let backend = SimulatedBackend::new(delays).unwrap();

    TestApp {
        app: AgriApp::from_parts(navigator, voice, backend),
        store,
        script,
        speech,
    }
}

fn logged_in(nav: &mut Navigator) {
    nav.select_language(Language::En);
    nav.continue_from_welcome();
    nav.login(UserRecord::from_login("farmer@demo.com", "farmer123"));
}

fn on_page(key: &'static str) -> impl FnOnce(&mut Navigator) {
    move |nav| {
        logged_in(nav);
        nav.navigate_to(key);
    }
}

/// Deliver one complete utterance to the capture the page started
fn say(harness: &mut Harness<'_, TestApp>, text: &str) {
    let script = &harness.state().script;
    script.emit(RecognitionEventKind::Started);
    script.emit_result(text, true);
    script.emit(RecognitionEventKind::Ended);
    harness.run();
}

fn harness(app: TestApp) -> Harness<'static, TestApp> {
    Harness::builder()
        .with_size(egui::Vec2::new(900.0, 1100.0))
        .build_state(|ctx, state: &mut TestApp| state.app.show(ctx), app)
}

/// Step frames until `done` holds, giving the backend time to reply
fn step_until(harness: &mut Harness<'_, TestApp>, done: impl Fn(&TestApp) -> bool) {
    for _ in 0..100 {
        harness.step();
        if done(harness.state()) {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("condition not reached");
}

#[test]
fn test_language_page_lists_all_languages() {
    let mut harness = harness(test_app(|_| {}));
    harness.run();

    assert_eq!(harness.state().app.page(), Page::Language);
    let _english = harness.get_by_label("English");
    let _hindi = harness.get_by_label("हिन्दी");
    let _telugu = harness.get_by_label("తెలుగు");
}

#[test]
fn test_selecting_language_persists_and_opens_welcome() {
    let mut harness = harness(test_app(|_| {}));
    harness.run();

    harness.get_by_label("हिन्दी").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Welcome);
    assert_eq!(state.app.navigator().language(), Language::Hi);
    assert_eq!(state.app.voice().language(), Language::Hi);
    assert!(!state.store.is_empty());
}

#[test]
fn test_language_preview_keeps_current_page() {
    let mut harness = harness(test_app(|_| {}));
    harness.run();

    harness.get_by_label("Preview Telugu").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Language);
    let audible = state.speech.audible().unwrap();
    assert_eq!(audible.text, Language::Te.preview_phrase());
    assert_eq!(audible.locale, "te-IN");
}

#[test]
fn test_welcome_next_opens_login() {
    let mut harness = harness(test_app(|nav| nav.select_language(Language::En)));
    harness.run();

    harness.get_by_label("Next →").click();
    harness.run();

    assert_eq!(harness.state().app.page(), Page::Login);
}

#[test]
fn test_demo_account_login_reaches_dashboard() {
    let mut harness = harness(test_app(|nav| {
        nav.select_language(Language::En);
        nav.continue_from_welcome();
    }));
    harness.run();

    harness.get_by_label("Use Demo Account").click();
    harness.run();
    harness.get_by_label("Login").click();

    step_until(&mut harness, |state| state.app.page() == Page::Dashboard);

    let state = harness.state();
    assert_eq!(
        state.app.navigator().user().and_then(|u| u.email.as_deref()),
        Some("farmer@demo.com")
    );
    let restored = Navigator::restore(SessionStore::new(state.store.clone()));
    assert_eq!(restored.page(), Page::Dashboard);
}

#[test]
fn test_empty_login_shows_missing_information() {
    let mut harness = harness(test_app(|nav| {
        nav.select_language(Language::En);
        nav.continue_from_welcome();
    }));
    harness.run();

    harness.get_by_label("Login").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Login);
    assert_eq!(
        state.app.toasts().visible().map(|t| t.title.as_str()),
        Some("Missing Information")
    );
    let _toast = harness.get_by_label("Notification: Missing Information");
}

#[test]
fn test_bad_credentials_stay_on_login() {
    let mut harness = harness(test_app(|nav| {
        nav.select_language(Language::En);
        nav.continue_from_welcome();
    }));
    harness.run();

    harness.get_by_label("Email input").focus();
    harness.run();
    harness.get_by_label("Email input").type_text("not-an-email");
    harness.run();
    harness.get_by_label("Password input").focus();
    harness.run();
    harness.get_by_label("Password input").type_text("abc");
    harness.run();

    harness.get_by_label("Login").click();
    step_until(&mut harness, |state| !state.app.toasts().is_empty());

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Login);
    assert_eq!(
        state.app.toasts().visible().map(|t| t.title.as_str()),
        Some("Login Failed")
    );
    assert!(state.app.navigator().user().is_none());
}

#[test]
fn test_dashboard_tile_opens_page_and_back_returns() {
    let mut harness = harness(test_app(logged_in));
    harness.run();
    assert_eq!(harness.state().app.page(), Page::Dashboard);

    harness.get_by_label("Open My Soil").click();
    harness.run();
    assert_eq!(harness.state().app.page(), Page::Soil);

    harness.get_by_label("Back").click();
    harness.run();
    assert_eq!(harness.state().app.page(), Page::Dashboard);
}

#[test]
fn test_logout_from_account_menu() {
    let mut harness = harness(test_app(logged_in));
    harness.run();

    harness.get_by_label("Account").click();
    harness.run();
    harness.get_by_label("Logout").click();
    harness.run();

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Language);
    assert!(state.store.is_empty());
    assert!(state.speech.spoken_texts().iter().any(|t| t == LOGOUT_MESSAGE));
}

#[test]
fn test_ask_ai_quick_question_gets_spoken_reply() {
    let mut harness = harness(test_app(|nav| {
        logged_in(nav);
        nav.navigate_to("ask_ai");
    }));
    harness.run();
    assert_eq!(harness.state().app.page(), Page::AskAi);

    let question = QUICK_QUESTIONS[0];
    harness.get_by_label(question).click();
    harness.run();
    harness.get_by_label("Send").click();

    let reply = respond(question);
    step_until(&mut harness, |state| {
        state.speech.audible().is_some_and(|u| u.text == reply)
    });
}

#[test]
fn test_spoken_soil_ph_fills_field() {
    let mut harness = harness(test_app(on_page("my_soil")));
    harness.run();

    harness.get_by_label("Speak Soil pH").click();
    harness.run();
    assert_eq!(harness.state().script.start_count(), 1);

    say(&mut harness, "six point eight, 6.8");

    let state = harness.state();
    let ActivePage::Soil(page) = state.app.active_page() else {
        panic!("expected soil page");
    };
    assert!((page.data().get(SoilField::Ph) - 6.8).abs() < 1e-9);
    assert_eq!(
        state.speech.audible().map(|u| u.text),
        Some("Soil pH set to 6.8".to_string())
    );
}

#[test]
fn test_recognition_error_shows_toast() {
    let mut harness = harness(test_app(on_page("my_soil")));
    harness.run();

    harness.get_by_label("Speak Soil pH").click();
    harness.run();
    harness
        .state()
        .script
        .emit(RecognitionEventKind::Started);
    harness
        .state()
        .script
        .emit(RecognitionEventKind::Error("network".to_string()));
    harness.run();

    let state = harness.state();
    assert_eq!(
        state.app.toasts().visible().map(|t| t.title.as_str()),
        Some("Voice Input Failed")
    );
    let ActivePage::Soil(page) = state.app.active_page() else {
        panic!("expected soil page");
    };
    assert!((page.data().get(SoilField::Ph) - 6.5).abs() < 1e-9);
    let _toast = harness.get_by_label("Notification: Voice Input Failed");
}

#[test]
fn test_voice_search_filters_market_prices() {
    let mut harness = harness(test_app(on_page("market_prices")));
    harness.run();
    assert!(harness.query_by_label("Read Rice price").is_some());

    harness.get_by_label("Voice search").click();
    harness.run();
    say(&mut harness, "Cotton.");

    let ActivePage::Market(page) = harness.state().app.active_page() else {
        panic!("expected market page");
    };
    assert_eq!(page.search_term(), "Cotton.");
    let _cotton = harness.get_by_label("Read Cotton price");
    assert!(harness.query_by_label("Read Rice price").is_none());
}

#[test]
fn test_voice_question_is_sent_and_answered() {
    let mut harness = harness(test_app(on_page("ask_ai")));
    harness.run();

    harness.get_by_label("Ask by voice").click();
    harness.run();
    let question = "How do I keep pests off my cotton";
    say(&mut harness, question);

    harness.get_by_label("Send").click();

    let reply = respond(question);
    step_until(&mut harness, |state| {
        state.speech.audible().is_some_and(|u| u.text == reply)
    });
    let ActivePage::AskAi(page) = harness.state().app.active_page() else {
        panic!("expected ask ai page");
    };
    assert!(page.messages().iter().any(|m| m.is_user() && m.content == question));
}

#[test]
fn test_login_reply_after_leaving_page_is_dropped() {
    let delays = DelayConfig {
        login_ms: 150,
        ..DelayConfig::instant()
    };
    let mut harness = harness(test_app_with_delays(delays, |nav| {
        nav.select_language(Language::En);
        nav.continue_from_welcome();
    }));
    harness.run();

    harness.get_by_label("Use Demo Account").click();
    harness.run();
    harness.get_by_label("Login").click();
    harness.run();
    harness.get_by_label("← Back").click();
    harness.run();
    assert_eq!(harness.state().app.page(), Page::Welcome);

    std::thread::sleep(Duration::from_millis(300));
    harness.run();

    let state = harness.state();
    assert_eq!(state.app.page(), Page::Welcome);
    assert!(state.app.navigator().user().is_none());
}
