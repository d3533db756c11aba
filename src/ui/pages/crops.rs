use super::{PageAction, PageContext};
use crate::content::crops::{self, CropRecommendation};
use crate::i18n::{t, TextKey};
use crate::ui::components::{badge, Card, PageHeader, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText};

pub struct CropsPage {
    crops: Vec<CropRecommendation>,
}

impl Default for CropsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CropsPage {
    pub fn new() -> Self {
        Self {
            crops: crops::recommendations(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        let header = PageHeader::new(theme, t(language, TextKey::BestCrops), t(language, TextKey::Back))
            .with_speaker("Read recommendations")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            ctx.voice.speak(&format!(
                "{} recommendations based on your soil and location",
                t(language, TextKey::BestCrops)
            ));
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(theme.spacing);
            egui::Frame::none()
                .fill(theme.primary)
                .rounding(theme.card_rounding)
                .inner_margin(theme.spacing_lg)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Recommended Crops for Your Farm")
                                .size(20.0)
                                .strong()
                                .color(theme.text_on_primary),
                        );
                        ui.label(
                            RichText::new("Based on soil health, weather conditions, and market trends")
                                .color(theme.text_on_primary),
                        );
                    });
                });
            ui.add_space(theme.spacing);

            ui.columns(2, |cols| {
                for (i, crop) in self.crops.iter().enumerate() {
                    let ui = &mut cols[i % 2];
                    if let Some(text) = crop_card(ui, theme, crop) {
                        ctx.voice.speak(&text);
                    }
                    ui.add_space(theme.spacing);
                }
            });

            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(
                            "Recommendations are updated weekly based on weather and market conditions",
                        )
                        .small()
                        .color(theme.text_muted),
                    );
                });
            });
        });

        action
    }
}

/// Draw one crop; returns text to speak when a voice control was clicked
fn crop_card(ui: &mut egui::Ui, theme: &Theme, crop: &CropRecommendation) -> Option<String> {
    let mut speech = None;

    Card::new(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(crop.name).size(18.0).strong().color(theme.primary));
                ui.label(RichText::new(crop.local_name).small().color(theme.text_muted));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if VoiceButton::speaker(theme, format!("Read {}", crop.name))
                    .with_size(32.0)
                    .show(ui)
                    .clicked()
                {
                    speech = Some(crop.spoken_details());
                }
            });
        });
        ui.label(RichText::new(crop.description).small().color(theme.text_muted));
        ui.add_space(theme.spacing_sm);

        egui::Grid::new(("crop_facts", crop.name))
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("💧 Water Need");
                badge(ui, crop.water_need.to_string(), theme.level_color(crop.water_need, false));
                ui.end_row();
                ui.label("📈 Market Demand");
                badge(ui, crop.market_demand.to_string(), theme.level_color(crop.market_demand, true));
                ui.end_row();
                ui.label("⏱ Duration");
                ui.label(RichText::new(crop.duration).strong());
                ui.end_row();
                ui.label("☀ Season");
                ui.label(RichText::new(crop.season).strong());
                ui.end_row();
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Expected Yield:").small().color(theme.text_muted));
            ui.label(RichText::new(crop.expected_yield).small().strong().color(theme.primary));
        });
        ui.horizontal(|ui| {
            ui.label(RichText::new("Soil Type:").small().color(theme.text_muted));
            ui.label(RichText::new(crop.soil_type).small());
        });

        let more = ui.add_sized([ui.available_width(), 28.0], egui::Button::new("Learn More"));
        more.widget_info(|| {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Button,
                true,
                format!("Learn more about {}", crop.name),
            )
        });
        if more.clicked() {
            speech = Some(crop.spoken_more());
        }
    });

    speech
}
