use super::{centered_column, PageAction, PageContext};
use crate::auth::{LoginForm, ValidationError};
use crate::backend::{BackendEvent, BackendReply, BackendRequest, RequestId};
use crate::i18n::{t, TextKey};
use crate::ui::components::Card;
use crate::ui::toast::Toast;
use egui::RichText;
use tracing::{debug, info};

#[derive(Default)]
pub struct LoginPage {
    form: LoginForm,
    show_password: bool,
    pending: Option<RequestId>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        if ui.button("← Back").clicked() {
            action = Some(PageAction::BackToWelcome);
        }

        centered_column(ui, 440.0, |ui| {
            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🌱").size(40.0));
                    ui.label(
                        RichText::new(t(language, TextKey::WelcomeBack))
                            .size(26.0)
                            .strong()
                            .color(theme.primary),
                    );
                });
                ui.add_space(theme.spacing);

                ui.label("Email");
                ui.add(
                    egui::TextEdit::singleline(&mut self.form.email)
                        .hint_text("Enter your email...")
                        .desired_width(f32::INFINITY),
                )
                .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Email input"));

                ui.add_space(theme.spacing_sm);
                ui.label("Password");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.password)
                            .password(!self.show_password)
                            .hint_text("Enter your password...")
                            .desired_width(ui.available_width() - 70.0),
                    )
                    .widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Password input")
                    });
                    let toggle = if self.show_password { "Hide" } else { "Show" };
                    if ui.button(toggle).clicked() {
                        self.show_password = !self.show_password;
                    }
                });
                ui.add_space(theme.spacing);

                let loading = self.is_loading();
                let label = if loading {
                    "Logging in...".to_string()
                } else {
                    t(language, TextKey::Login).to_string()
                };
                let login = ui.add_enabled(
                    !loading,
                    egui::Button::new(RichText::new(label).strong().color(theme.text_on_primary))
                        .fill(theme.primary)
                        .min_size(egui::vec2(ui.available_width(), 44.0)),
                );
                if login.clicked() {
                    self.submit(ctx);
                }

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("OR").small().color(theme.text_muted));
                });

                if ui
                    .add_sized([ui.available_width(), 40.0], egui::Button::new("Use Demo Account"))
                    .clicked()
                {
                    self.form = LoginForm::demo();
                }
                if ui
                    .add_sized(
                        [ui.available_width(), 32.0],
                        egui::Button::new(t(language, TextKey::CreateAccount)).frame(false),
                    )
                    .clicked()
                {
                    action = Some(PageAction::GoToCreateAccount);
                }
            });
        });

        action
    }

    fn submit(&mut self, ctx: &mut PageContext<'_>) {
        if let Err(err) = self.form.validate_fields() {
            report(&err, ctx);
            return;
        }
        let id = ctx.backend.submit(BackendRequest::Login(self.form.clone()));
        debug!("Login submitted ({})", id);
        self.pending = Some(id);
    }

    pub fn on_backend_event(
        &mut self,
        event: &BackendEvent,
        ctx: &mut PageContext<'_>,
    ) -> Option<PageAction> {
        if self.pending != Some(event.id) {
            return None;
        }
        self.pending = None;

        match &event.reply {
            BackendReply::Login(Ok(user)) => {
                let message = t(ctx.language, TextKey::WelcomeBack);
                info!("Login succeeded");
                ctx.toasts.push(Toast::success("Login Successful", message));
                ctx.voice.speak(message);
                Some(PageAction::Login(user.clone()))
            }
            BackendReply::Login(Err(err)) => {
                report(err, ctx);
                None
            }
            _ => None,
        }
    }
}

fn report(err: &ValidationError, ctx: &mut PageContext<'_>) {
    let message = err.to_string();
    ctx.toasts.push(Toast::destructive(err.title(), &message));
    ctx.voice.speak(&message);
}
