use super::{centered_column, PageAction, PageContext};
use crate::i18n::{t, Language, TextKey};
use crate::ui::components::{Card, VoiceButton};
use egui::RichText;
use tracing::debug;

/// First step of onboarding: pick the app language
#[derive(Default)]
pub struct LanguagePage {
    selected: Option<Language>,
}

impl LanguagePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let mut action = None;
        let theme = ctx.theme;

        ui.add_space(theme.spacing_lg);
        centered_column(ui, 440.0, |ui| {
            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(t(ctx.language, TextKey::ChooseLanguage))
                            .size(28.0)
                            .strong()
                            .color(theme.primary),
                    );
                    ui.label(
                        RichText::new(t(ctx.language, TextKey::TapToChoose))
                            .color(theme.text_muted),
                    );
                });
                ui.add_space(theme.spacing_lg);

                for language in Language::ALL {
                    ui.horizontal(|ui| {
                        let button = egui::Button::new(
                            RichText::new(format!("{}  ({})", language.native_name(), language.name()))
                                .size(18.0),
                        )
                        .min_size(egui::vec2(ui.available_width() - 56.0, 52.0))
                        .selected(self.selected == Some(language));

                        let response = ui.add(button);
                        response.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Button,
                                true,
                                language.native_name(),
                            )
                        });
                        if response.clicked() {
                            debug!("Language selected: {}", language);
                            self.selected = Some(language);
                            action = Some(PageAction::SelectLanguage(language));
                        }

                        let preview_label = format!("Preview {}", language.name());
                        if VoiceButton::speaker(theme, preview_label)
                            .enabled(ctx.voice.can_speak())
                            .show(ui)
                            .clicked()
                        {
                            ctx.voice.speak_in(&language.preview_phrase(), language);
                        }
                    });
                    ui.add_space(theme.spacing_sm);
                }

                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🌱 Smart Agriculture").small().color(theme.text_muted));
                });
            });
        });

        action
    }
}
