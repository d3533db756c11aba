//! One view per navigation state
//!
//! A page owns its local state, recreated every time it is entered. Pages
//! never touch the navigator directly: they return a [`PageAction`] which
//! the app applies after the frame's UI has been built.

mod ask_ai;
mod create_account;
mod crops;
mod dashboard;
mod farm;
mod guidance;
mod language;
mod login;
mod market;
mod soil;
mod welcome;

pub use ask_ai::AskAiPage;
pub use create_account::CreateAccountPage;
pub use crops::CropsPage;
pub use dashboard::DashboardPage;
pub use farm::FarmPage;
pub use guidance::GuidancePage;
pub use language::LanguagePage;
pub use login::LoginPage;
pub use market::MarketPage;
pub use soil::SoilPage;
pub use welcome::WelcomePage;

use crate::backend::{BackendEvent, SimulatedBackend};
use crate::content;
use crate::i18n::Language;
use crate::navigation::Page;
use crate::session::UserRecord;
use crate::ui::theme::Theme;
use crate::ui::toast::Toasts;
use crate::voice::VoiceAdapter;

/// Navigation requested by a page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageAction {
    SelectLanguage(Language),
    ContinueFromWelcome,
    BackToWelcome,
    Login(UserRecord),
    GoToCreateAccount,
    AccountCreated(UserRecord),
    BackToLogin,
    /// Page key such as "my_soil"
    Navigate(String),
    Back,
    BackToLanguage,
    Logout,
}

/// Everything a page may use while it is shown
pub struct PageContext<'a> {
    pub voice: &'a mut VoiceAdapter,
    pub backend: &'a SimulatedBackend,
    pub toasts: &'a mut Toasts,
    pub theme: &'a Theme,
    pub language: Language,
    pub user: Option<&'a UserRecord>,
}

/// The page currently on screen together with its state
pub enum ActivePage {
    Language(LanguagePage),
    Welcome(WelcomePage),
    Login(LoginPage),
    CreateAccount(CreateAccountPage),
    Dashboard(DashboardPage),
    Soil(SoilPage),
    Crops(CropsPage),
    Market(MarketPage),
    Guidance(GuidancePage),
    AskAi(AskAiPage),
    Farm(FarmPage),
}

impl ActivePage {
    /// Build fresh state for `page` and run its entry side effects
    pub fn enter(page: Page, ctx: &mut PageContext<'_>) -> Self {
        if let Some(announcement) = content::entry_announcement(page, ctx.language) {
            ctx.voice.speak(&announcement);
        }

        match page {
            Page::Language => ActivePage::Language(LanguagePage::new()),
            Page::Welcome => ActivePage::Welcome(WelcomePage::new(ctx.backend.delays())),
            Page::Login => ActivePage::Login(LoginPage::new()),
            Page::CreateAccount => ActivePage::CreateAccount(CreateAccountPage::new()),
            Page::Dashboard => ActivePage::Dashboard(DashboardPage::new()),
            Page::Soil => ActivePage::Soil(SoilPage::new()),
            Page::BestCrops => ActivePage::Crops(CropsPage::new()),
            Page::MarketPrices => ActivePage::Market(MarketPage::new()),
            Page::SmartGuidance => ActivePage::Guidance(GuidancePage::new()),
            Page::AskAi => ActivePage::AskAi(AskAiPage::new()),
            Page::MyFarm => ActivePage::Farm(FarmPage::new()),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            ActivePage::Language(_) => Page::Language,
            ActivePage::Welcome(_) => Page::Welcome,
            ActivePage::Login(_) => Page::Login,
            ActivePage::CreateAccount(_) => Page::CreateAccount,
            ActivePage::Dashboard(_) => Page::Dashboard,
            ActivePage::Soil(_) => Page::Soil,
            ActivePage::Crops(_) => Page::BestCrops,
            ActivePage::Market(_) => Page::MarketPrices,
            ActivePage::Guidance(_) => Page::SmartGuidance,
            ActivePage::AskAi(_) => Page::AskAi,
            ActivePage::Farm(_) => Page::MyFarm,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        match self {
            ActivePage::Language(page) => page.show(ui, ctx),
            ActivePage::Welcome(page) => page.show(ui, ctx),
            ActivePage::Login(page) => page.show(ui, ctx),
            ActivePage::CreateAccount(page) => page.show(ui, ctx),
            ActivePage::Dashboard(page) => page.show(ui, ctx),
            ActivePage::Soil(page) => page.show(ui, ctx),
            ActivePage::Crops(page) => page.show(ui, ctx),
            ActivePage::Market(page) => page.show(ui, ctx),
            ActivePage::Guidance(page) => page.show(ui, ctx),
            ActivePage::AskAi(page) => page.show(ui, ctx),
            ActivePage::Farm(page) => page.show(ui, ctx),
        }
    }

    /// Deliver a simulated backend reply. Replies to requests this page did
    /// not make are ignored.
    pub fn on_backend_event(
        &mut self,
        event: &BackendEvent,
        ctx: &mut PageContext<'_>,
    ) -> Option<PageAction> {
        match self {
            ActivePage::Login(page) => page.on_backend_event(event, ctx),
            ActivePage::CreateAccount(page) => page.on_backend_event(event, ctx),
            ActivePage::AskAi(page) => {
                page.on_backend_event(event, ctx);
                None
            }
            _ => None,
        }
    }

    /// True while the page waits on something time based
    pub fn is_busy(&self) -> bool {
        match self {
            ActivePage::Welcome(page) => page.greeting_pending(),
            ActivePage::Login(page) => page.is_loading(),
            ActivePage::CreateAccount(page) => page.is_loading(),
            ActivePage::AskAi(page) => page.is_typing(),
            _ => false,
        }
    }
}

/// Centered column used by the onboarding pages
pub(crate) fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let width = ui.available_width().min(max_width);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}
