use super::{PageAction, PageContext};
use crate::content::soil::{parse_spoken_number, SoilData, SoilField};
use crate::i18n::{t, TextKey};
use crate::ui::components::{badge, Card, PageHeader, VoiceButton};
use crate::ui::toast::Toast;
use egui::{Align, Layout, RichText};
use tracing::debug;

/// Soil health report card with editable readings
#[derive(Default)]
pub struct SoilPage {
    data: SoilData,
    /// Field waiting for a spoken value
    active_field: Option<SoilField>,
}

impl SoilPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &SoilData {
        &self.data
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        self.apply_voice_input(ctx);

        let health = self.data.health();
        let score = self.data.score();

        let header = PageHeader::new(theme, t(language, TextKey::SoilHealth), t(language, TextKey::Back))
            .with_speaker("Read soil health")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            ctx.voice.speak(&format!(
                "{} {}",
                t(language, TextKey::SoilHealth),
                health.label(language)
            ));
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(theme.spacing);
            Card::new(theme).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Soil Health Report Card").size(18.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        badge(ui, health.label(language), theme.health_color(health));
                    });
                });
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{}/100", score))
                            .size(38.0)
                            .strong()
                            .color(theme.health_color(health)),
                    );
                });
                ui.add(egui::ProgressBar::new(score as f32 / 100.0).fill(theme.health_color(health)));
            });
            ui.add_space(theme.spacing);

            ui.columns(2, |cols| {
                for (i, field) in SoilField::ALL.iter().enumerate() {
                    let ui = &mut cols[i % 2];
                    self.field_card(ui, ctx, *field);
                    ui.add_space(theme.spacing);
                }
            });

            let save = ui.add_sized(
                [ui.available_width(), 48.0],
                egui::Button::new(
                    RichText::new(format!("💾 {}", t(language, TextKey::UpdateSoilData)))
                        .strong()
                        .color(theme.text_on_primary),
                )
                .fill(theme.primary),
            );
            save.widget_info(|| {
                egui::WidgetInfo::labeled(
                    egui::WidgetType::Button,
                    true,
                    t(language, TextKey::UpdateSoilData),
                )
            });
            if save.clicked() {
                debug!("Soil data saved: {:?}", self.data);
                ctx.toasts.push(Toast::success(
                    "Soil Data Saved",
                    "Your soil health data has been updated successfully.",
                ));
                ctx.voice.speak("Soil data saved successfully");
            }
        });

        action
    }

    fn field_card(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>, field: SoilField) {
        let language = ctx.language;
        let theme = ctx.theme;
        let label = t(language, field.label_key());
        let status = self.data.field_status(field).unwrap_or_else(|| self.data.health());

        Card::new(theme).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(label).size(16.0).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let listening = ctx.voice.is_listening() && self.active_field == Some(field);
                    let clicked = VoiceButton::mic(theme, format!("Speak {}", label))
                        .listening(listening)
                        .enabled(ctx.voice.is_supported())
                        .with_size(32.0)
                        .show(ui)
                        .clicked();
                    if clicked {
                        if listening {
                            ctx.voice.stop_listening();
                        } else {
                            self.active_field = Some(field);
                            ctx.voice.speak(t(language, TextKey::SpeakSoilPh));
                            ctx.voice.start_listening();
                        }
                    }
                });
            });

            ui.horizontal(|ui| {
                let speed = if field == SoilField::Ph { 0.1 } else { 1.0 };
                ui.add(
                    egui::DragValue::new(self.data.get_mut(field))
                        .range(field.range())
                        .speed(speed)
                        .max_decimals(1),
                )
                .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::DragValue, true, label));
                badge(ui, status.label(language), theme.health_color(status));
            });

            if field != SoilField::Ph {
                let value = self.data.get(field) as f32 / 100.0;
                ui.add(egui::ProgressBar::new(value.clamp(0.0, 1.0)).desired_height(6.0));
            }
        });
    }

    /// A finished capture fills the field it was started for
    fn apply_voice_input(&mut self, ctx: &mut PageContext<'_>) {
        let Some(field) = self.active_field else {
            return;
        };

        if let Some(transcript) = ctx.voice.take_finished_transcript() {
            if let Some(value) = parse_spoken_number(&transcript) {
                *self.data.get_mut(field) = value;
                let label = t(ctx.language, field.label_key());
                ctx.voice.speak(&format!("{} set to {}", label, value));
            } else {
                debug!("No number in transcript: {}", transcript);
            }
            self.active_field = None;
        } else if !ctx.voice.is_active() {
            self.active_field = None;
        }
    }
}
