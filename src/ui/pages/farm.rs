use super::{PageAction, PageContext};
use crate::content::farm::{self, Activity, FarmOverview, FieldCrop, GrowthStage};
use crate::i18n::{t, TextKey};
use crate::ui::components::{badge, Card, PageHeader, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Color32, Layout, RichText};

pub struct FarmPage {
    overview: FarmOverview,
    crops: Vec<FieldCrop>,
    activities: Vec<Activity>,
}

impl Default for FarmPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FarmPage {
    pub fn new() -> Self {
        Self {
            overview: farm::overview(),
            crops: farm::field_crops(),
            activities: farm::recent_activities(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;
        let mut speech: Option<String> = None;

        let header = PageHeader::new(theme, t(language, TextKey::MyFarm), t(language, TextKey::Back))
            .with_speaker("Read farm summary")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            speech = Some(self.overview.spoken_summary());
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(theme.spacing);
            self.overview_card(ui, theme);
            ui.add_space(theme.spacing);
            self.weather_card(ui, theme);
            ui.add_space(theme.spacing);

            Card::new(theme).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Crop Status").size(18.0).strong());
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if VoiceButton::speaker(theme, "Read crop status")
                            .with_size(32.0)
                            .show(ui)
                            .clicked()
                        {
                            speech = Some("Current crop status overview".to_string());
                        }
                    });
                });
                ui.add_space(theme.spacing_sm);
                for crop in &self.crops {
                    if let Some(text) = crop_row(ui, theme, crop) {
                        speech = Some(text);
                    }
                    ui.add_space(theme.spacing_sm);
                }
            });
            ui.add_space(theme.spacing);

            Card::titled(theme, "📅 Recent Activities").show(ui, |ui| {
                for activity in &self.activities {
                    egui::Frame::none()
                        .fill(theme.bg_tertiary)
                        .rounding(8.0)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(activity.description).strong());
                                    ui.label(RichText::new(activity.when).small().color(theme.text_muted));
                                });
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    badge(ui, activity.kind.label(), theme.secondary);
                                });
                            });
                        });
                    ui.add_space(4.0);
                }
            });
            ui.add_space(theme.spacing);

            ui.columns(2, |cols| {
                if cols[0]
                    .add_sized([cols[0].available_width(), 44.0], egui::Button::new("📈 Analytics"))
                    .clicked()
                {
                    speech = Some("Farm analytics and insights".to_string());
                }
                if cols[1]
                    .add_sized(
                        [cols[1].available_width(), 44.0],
                        egui::Button::new(RichText::new("📅 Add Activity").color(theme.text_on_primary))
                            .fill(theme.primary),
                    )
                    .clicked()
                {
                    speech = Some("Add new farm activity".to_string());
                }
            });
        });

        if let Some(text) = speech {
            ctx.voice.speak(&text);
        }

        action
    }

    fn overview_card(&self, ui: &mut egui::Ui, theme: &Theme) {
        let farm = &self.overview;
        egui::Frame::none()
            .fill(theme.primary)
            .rounding(theme.card_rounding)
            .inner_margin(theme.spacing_lg)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                let on_primary = theme.text_on_primary;
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(farm.name).size(24.0).strong().color(on_primary));
                        ui.label(RichText::new(format!("📍 {}", farm.location)).color(on_primary));
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        badge(ui, farm.area, theme.secondary);
                    });
                });
                ui.add_space(theme.spacing);
                ui.columns(3, |cols| {
                    stat(&mut cols[0], &farm.crop_count.to_string(), "Active Crops", on_primary);
                    stat(
                        &mut cols[1],
                        &format!("{}%", farm.soil_health),
                        "Soil Health",
                        theme.percent_color(farm.soil_health),
                    );
                    stat(&mut cols[2], farm.next_harvest, "Next Harvest", on_primary);
                });
            });
    }

    fn weather_card(&self, ui: &mut egui::Ui, theme: &Theme) {
        let weather = &self.overview.weather;
        Card::titled(theme, "🌡 Today's Weather").show(ui, |ui| {
            ui.columns(4, |cols| {
                stat(
                    &mut cols[0],
                    &format!("{}°C", weather.temperature),
                    "Temperature",
                    theme.warning,
                );
                stat(&mut cols[1], &format!("{}%", weather.humidity), "Humidity", theme.primary);
                stat(
                    &mut cols[2],
                    &format!("{} km/h", weather.wind_speed),
                    "Wind Speed",
                    theme.text_secondary,
                );
                stat(&mut cols[3], weather.condition, "Condition", theme.primary);
            });
        });
    }
}

fn stat(ui: &mut egui::Ui, value: &str, caption: &str, color: Color32) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(value).size(22.0).strong().color(color));
        ui.label(RichText::new(caption).small().color(color.gamma_multiply(0.85)));
    });
}

fn stage_color(theme: &Theme, stage: GrowthStage) -> Color32 {
    match stage {
        GrowthStage::Growing => theme.primary,
        GrowthStage::Flowering => theme.warning,
        GrowthStage::Maturity => theme.success,
    }
}

fn crop_row(ui: &mut egui::Ui, theme: &Theme, crop: &FieldCrop) -> Option<String> {
    let mut speech = None;
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, theme.bg_tertiary))
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(crop.name).strong().color(theme.primary));
                    ui.label(
                        RichText::new(format!("{} • {}", crop.local_name, crop.area))
                            .small()
                            .color(theme.text_muted),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if VoiceButton::speaker(theme, format!("Read {} status", crop.name))
                        .with_size(28.0)
                        .show(ui)
                        .clicked()
                    {
                        speech = Some(crop.spoken_details());
                    }
                    badge(ui, crop.stage.label(), stage_color(theme, crop.stage));
                });
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Health Status").small());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(format!("{}%", crop.health)).small().strong());
                });
            });
            ui.add(
                egui::ProgressBar::new(crop.health as f32 / 100.0)
                    .desired_height(6.0)
                    .fill(theme.percent_color(crop.health)),
            );
        });
    speech
}
