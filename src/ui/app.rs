//! Main application struct and eframe integration
//!
//! [`AgriApp`] owns the navigator, the voice adapter and the simulated
//! backend. Each frame it drains voice and backend events, shows the active
//! page and applies whatever navigation the page asked for.

use crate::backend::SimulatedBackend;
use crate::error::AgriError;
use crate::navigation::{Navigator, Page};
use crate::ui::pages::{ActivePage, PageAction, PageContext};
use crate::ui::theme::Theme;
use crate::ui::toast::{Toast, Toasts};
use crate::voice::VoiceAdapter;
use egui::CentralPanel;
use std::time::Duration;
use tracing::{debug, info};

/// Event polling interval while something is in flight
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Main Smart Agriculture application
pub struct AgriApp {
    navigator: Navigator,
    voice: VoiceAdapter,
    backend: SimulatedBackend,
    toasts: Toasts,
    theme: Theme,
    page: ActivePage,
}

impl AgriApp {
    /// Create the application and style the egui context
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        navigator: Navigator,
        voice: VoiceAdapter,
        backend: SimulatedBackend,
    ) -> Self {
        let app = Self::from_parts(navigator, voice, backend);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    /// Assemble the application without an eframe creation context
    pub fn from_parts(navigator: Navigator, mut voice: VoiceAdapter, backend: SimulatedBackend) -> Self {
        let theme = Theme::default();
        let mut toasts = Toasts::new();
        voice.set_language(navigator.language());

        let page = {
            let mut page_ctx = PageContext {
                voice: &mut voice,
                backend: &backend,
                toasts: &mut toasts,
                theme: &theme,
                language: navigator.language(),
                user: navigator.user(),
            };
            ActivePage::enter(navigator.page(), &mut page_ctx)
        };
        info!("Starting on {}", page.page());

        Self {
            navigator,
            voice,
            backend,
            toasts,
            theme,
            page,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn voice(&self) -> &VoiceAdapter {
        &self.voice
    }

    pub fn voice_mut(&mut self) -> &mut VoiceAdapter {
        &mut self.voice
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Page currently on screen
    pub fn page(&self) -> Page {
        self.page.page()
    }

    /// State of the page on screen
    pub fn active_page(&self) -> &ActivePage {
        &self.page
    }

    /// Run one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.voice.poll();
        if let Some(error) = self.voice.take_error() {
            let message = AgriError::RecognitionError(error).user_message();
            self.toasts.push(Toast::destructive("Voice Input Failed", message));
        }

        let mut actions = Vec::new();
        let language = self.navigator.language();

        {
            let mut page_ctx = PageContext {
                voice: &mut self.voice,
                backend: &self.backend,
                toasts: &mut self.toasts,
                theme: &self.theme,
                language,
                user: self.navigator.user(),
            };

            for event in self.backend.poll() {
                if let Some(action) = self.page.on_backend_event(&event, &mut page_ctx) {
                    actions.push(action);
                }
            }

            let page = &mut self.page;
            CentralPanel::default()
                .frame(
                    egui::Frame::none()
                        .fill(self.theme.bg_primary)
                        .inner_margin(self.theme.spacing),
                )
                .show(ctx, |ui| {
                    if let Some(action) = page.show(ui, &mut page_ctx) {
                        actions.push(action);
                    }
                });
        }

        for action in actions {
            self.apply(action, ctx);
        }

        self.toasts.show(ctx, &self.theme);

        if self.page.is_busy() || self.voice.is_active() {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }

    /// Apply a page's navigation request, entering the new page if it changed
    fn apply(&mut self, action: PageAction, ctx: &egui::Context) {
        debug!("Page action: {:?}", action);
        match action {
            PageAction::SelectLanguage(language) => self.navigator.select_language(language),
            PageAction::ContinueFromWelcome => self.navigator.continue_from_welcome(),
            PageAction::BackToWelcome => self.navigator.back_to_welcome(),
            PageAction::Login(user) => self.navigator.login(user),
            PageAction::GoToCreateAccount => self.navigator.go_to_create_account(),
            PageAction::AccountCreated(user) => self.navigator.account_created(user),
            PageAction::BackToLogin => self.navigator.back_to_login(),
            PageAction::Navigate(key) => self.navigator.navigate_to(&key),
            PageAction::Back => self.navigator.back(),
            PageAction::BackToLanguage => self.navigator.back_to_language(),
            PageAction::Logout => self.navigator.logout(),
        }
        self.voice.set_language(self.navigator.language());

        let target = self.navigator.page();
        if target == self.page.page() {
            return;
        }

        self.voice.end_page_session();
        let mut page_ctx = PageContext {
            voice: &mut self.voice,
            backend: &self.backend,
            toasts: &mut self.toasts,
            theme: &self.theme,
            language: self.navigator.language(),
            user: self.navigator.user(),
        };
        self.page = ActivePage::enter(target, &mut page_ctx);
        ctx.request_repaint();
    }
}

impl eframe::App for AgriApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.voice.end_page_session();
        self.voice.cancel_speech();
        info!("Smart Agriculture shutting down");
    }
}
