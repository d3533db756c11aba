use super::{centered_column, PageAction, PageContext};
use crate::config::DelayConfig;
use crate::i18n::{t, TextKey};
use crate::ui::components::Card;
use egui::{Color32, RichText};
use std::time::{Duration, Instant};

/// Greeting shown after the language has been chosen
pub struct WelcomePage {
    entered_at: Instant,
    greeting_delay: Duration,
    greeted: bool,
}

impl WelcomePage {
    pub fn new(delays: &DelayConfig) -> Self {
        Self {
            entered_at: Instant::now(),
            greeting_delay: delays.welcome_greeting(),
            greeted: false,
        }
    }

    pub fn greeting_pending(&self) -> bool {
        !self.greeted
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        if !self.greeted {
            let elapsed = self.entered_at.elapsed();
            if elapsed >= self.greeting_delay {
                self.greeted = true;
                ctx.voice.speak(t(language, TextKey::WelcomeFarmer));
            } else {
                ui.ctx().request_repaint_after(self.greeting_delay - elapsed);
            }
        }

        ui.add_space(theme.spacing_lg);
        centered_column(ui, 520.0, |ui| {
            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🌱 🍃 ☀ 💧").size(36.0));
                    ui.add_space(theme.spacing);
                    ui.label(
                        RichText::new(t(language, TextKey::WelcomeFarmer))
                            .size(34.0)
                            .strong()
                            .color(theme.primary),
                    );
                    ui.label(RichText::new("Smart Agriculture").size(17.0).color(theme.text_muted));
                    ui.label(
                        RichText::new(format!(
                            "{} | {} | {}",
                            t(language, TextKey::SmartGuidance),
                            t(language, TextKey::VoiceCommand),
                            t(language, TextKey::MySoil)
                        ))
                        .color(theme.text_muted),
                    );
                });
                ui.add_space(theme.spacing_lg);

                let features = [
                    (TextKey::SoilHealth, "pH, NPK Analysis", theme.primary),
                    (TextKey::BestCrops, "Smart Recommendations", theme.success),
                    (TextKey::MarketPrices, "Live Updates", theme.warning),
                    (TextKey::AskAi, "Voice Assistant", theme.accent),
                ];
                egui::Grid::new("welcome_features")
                    .num_columns(2)
                    .spacing([theme.spacing, theme.spacing])
                    .show(ui, |ui| {
                        for (i, (key, detail, color)) in features.iter().enumerate() {
                            feature_tile(ui, t(language, *key), detail, *color);
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
                ui.add_space(theme.spacing_lg);

                let next = ui.add_sized(
                    [ui.available_width(), 52.0],
                    egui::Button::new(
                        RichText::new(format!("{} →", t(language, TextKey::Next)))
                            .size(18.0)
                            .color(theme.text_on_primary),
                    )
                    .fill(theme.primary),
                );
                if next.clicked() {
                    ctx.voice.speak(t(language, TextKey::WelcomeBack));
                    action = Some(PageAction::ContinueFromWelcome);
                }

                ui.vertical_centered(|ui| {
                    if ui.link(t(language, TextKey::ChooseLanguage)).clicked() {
                        action = Some(PageAction::BackToLanguage);
                    }
                });
            });
        });

        action
    }
}

fn feature_tile(ui: &mut egui::Ui, title: &str, detail: &str, color: Color32) {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.12))
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.3)))
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.label(RichText::new(title).strong().color(color));
            ui.label(RichText::new(detail).small());
        });
}
