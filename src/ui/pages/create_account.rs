use super::{centered_column, PageAction, PageContext};
use crate::auth::AccountForm;
use crate::backend::{BackendEvent, BackendReply, BackendRequest, RequestId};
use crate::i18n::{t, TextKey};
use crate::ui::components::Card;
use crate::ui::toast::Toast;
use egui::RichText;
use tracing::{debug, info};

const ACCOUNT_CREATED: &str = "Account created successfully! Welcome to Smart Agriculture!";

#[derive(Default)]
pub struct CreateAccountPage {
    form: AccountForm,
    show_password: bool,
    show_confirm: bool,
    pending: Option<RequestId>,
}

impl CreateAccountPage {
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
            action = Some(PageAction::BackToLogin);
        }

        centered_column(ui, 440.0, |ui| {
            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🌱").size(40.0));
                    ui.label(
                        RichText::new(t(language, TextKey::CreateAccount))
                            .size(26.0)
                            .strong()
                            .color(theme.primary),
                    );
                });
                ui.add_space(theme.spacing);

                text_field(ui, "Full Name *", "Enter your full name...", &mut self.form.name, None);
                text_field(ui, "Email *", "Enter your email...", &mut self.form.email, None);
                text_field(
                    ui,
                    "Farm Location",
                    "Enter your farm location...",
                    &mut self.form.farm_location,
                    None,
                );
                text_field(
                    ui,
                    "Password *",
                    "Create a password (min 6 characters)...",
                    &mut self.form.password,
                    Some(&mut self.show_password),
                );
                text_field(
                    ui,
                    "Confirm Password *",
                    "Confirm your password...",
                    &mut self.form.confirm_password,
                    Some(&mut self.show_confirm),
                );
                ui.add_space(theme.spacing);

                let loading = self.is_loading();
                let label = if loading {
                    "Creating Account...".to_string()
                } else {
                    t(language, TextKey::CreateAccount).to_string()
                };
                let submit = ui.add_enabled(
                    !loading,
                    egui::Button::new(RichText::new(label).strong().color(theme.text_on_primary))
                        .fill(theme.primary)
                        .min_size(egui::vec2(ui.available_width(), 44.0)),
                );
                if submit.clicked() {
                    self.submit(ctx);
                }

                ui.vertical_centered(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Already have an account?").color(theme.text_muted));
                        if ui.link(t(language, TextKey::Login)).clicked() {
                            action = Some(PageAction::BackToLogin);
                        }
                    });
                });
            });
        });

        action
    }

    fn submit(&mut self, ctx: &mut PageContext<'_>) {
        match self.form.validate() {
            Ok(user) => {
                let id = ctx.backend.submit(BackendRequest::CreateAccount(user));
                debug!("Account creation submitted ({})", id);
                self.pending = Some(id);
            }
            Err(err) => {
                let message = err.to_string();
                ctx.toasts.push(Toast::destructive(err.title(), &message));
                ctx.voice.speak(&message);
            }
        }
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
            BackendReply::AccountCreated(user) => {
                info!("Account created");
                ctx.toasts.push(Toast::success("Account Created", ACCOUNT_CREATED));
                ctx.voice.speak(ACCOUNT_CREATED);
                Some(PageAction::AccountCreated(user.clone()))
            }
            _ => None,
        }
    }
}

/// Labelled single line input, masked when `reveal` is given
fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    reveal: Option<&mut bool>,
) {
    ui.label(label);
    ui.horizontal(|ui| {
        let masked = reveal.as_ref().is_some_and(|shown| !**shown);
        let width = if reveal.is_some() {
            ui.available_width() - 70.0
        } else {
            ui.available_width()
        };
        let name = format!("{} input", label.trim_end_matches(" *"));
        ui.add(
            egui::TextEdit::singleline(value)
                .password(masked)
                .hint_text(hint)
                .desired_width(width),
        )
        .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, &name));

        if let Some(shown) = reveal {
            if ui.button(if *shown { "Hide" } else { "Show" }).clicked() {
                *shown = !*shown;
            }
        }
    });
    ui.add_space(4.0);
}
