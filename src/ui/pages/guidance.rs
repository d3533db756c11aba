use super::{PageAction, PageContext};
use crate::content::guidance::{self, count_by_priority, Category, GuidanceItem, Priority};
use crate::i18n::{t, TextKey};
use crate::ui::components::{badge, Card, PageHeader, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText};

pub struct GuidancePage {
    items: Vec<GuidanceItem>,
}

impl Default for GuidancePage {
    fn default() -> Self {
        Self::new()
    }
}

impl GuidancePage {
    pub fn new() -> Self {
        Self {
            items: guidance::items(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        let header = PageHeader::new(theme, t(language, TextKey::SmartGuidance), t(language, TextKey::Back))
            .with_speaker("Read guidance")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            ctx.voice.speak(&format!(
                "{} based on AI analysis of your farm data",
                t(language, TextKey::SmartGuidance)
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
                            RichText::new("AI-Powered Farm Guidance")
                                .size(20.0)
                                .strong()
                                .color(theme.text_on_primary),
                        );
                        ui.label(
                            RichText::new(
                                "Personalized recommendations based on your soil, weather, and crop data",
                            )
                            .color(theme.text_on_primary),
                        );
                    });
                    ui.add_space(theme.spacing_sm);
                    ui.horizontal(|ui| {
                        for priority in Priority::ALL {
                            let count = count_by_priority(&self.items, priority);
                            badge(
                                ui,
                                format!("{} {} Priority", count, capitalize(&priority.to_string())),
                                theme.priority_color(priority),
                            );
                        }
                    });
                });
            ui.add_space(theme.spacing);

            for item in &self.items {
                if let Some(text) = guidance_card(ui, theme, item) {
                    ctx.voice.speak(&text);
                }
                ui.add_space(theme.spacing);
            }

            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(
                            "🤖 Guidance is generated using AI analysis of your farm data, weather \
                             patterns, and agricultural best practices. Always consult with local \
                             agricultural experts for critical decisions.",
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

fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Watering => "💧",
        Category::Pest => "🐛",
        Category::Fertilizer => "🧪",
        Category::Weather => "🌦",
        Category::Harvest => "🌾",
    }
}

fn guidance_card(ui: &mut egui::Ui, theme: &Theme, item: &GuidanceItem) -> Option<String> {
    let mut speech = None;

    Card::new(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(category_icon(item.category)).size(24.0));
            ui.vertical(|ui| {
                ui.label(RichText::new(item.title).size(18.0).strong().color(theme.primary));
                ui.label(RichText::new(item.category.label()).small().color(theme.text_muted));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if VoiceButton::speaker(theme, format!("Read {}", item.title))
                    .with_size(32.0)
                    .show(ui)
                    .clicked()
                {
                    speech = Some(item.spoken_details());
                }
                badge(
                    ui,
                    item.priority.to_string().to_uppercase(),
                    theme.priority_color(item.priority),
                );
            });
        });

        ui.label(RichText::new(item.description).color(theme.text_secondary));
        egui::Frame::none()
            .fill(theme.bg_tertiary)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("⚠ Recommended Action:").strong().color(theme.primary));
                ui.label(item.action);
            });

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("⏱ Timeframe:").color(theme.text_muted));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(item.timeframe).strong().color(theme.primary));
            });
        });

        ui.columns(2, |cols| {
            let done = cols[0].add_sized(
                [cols[0].available_width(), 30.0],
                egui::Button::new("Mark as Done"),
            );
            done.widget_info(|| {
                egui::WidgetInfo::labeled(
                    egui::WidgetType::Button,
                    true,
                    format!("Mark {} as done", item.title),
                )
            });
            if done.clicked() {
                speech = Some(item.spoken_completed());
            }

            let remind = cols[1].add_sized(
                [cols[1].available_width(), 30.0],
                egui::Button::new(RichText::new("Set Reminder").color(theme.text_on_primary))
                    .fill(theme.primary),
            );
            remind.widget_info(|| {
                egui::WidgetInfo::labeled(
                    egui::WidgetType::Button,
                    true,
                    format!("Remind me about {}", item.title),
                )
            });
            if remind.clicked() {
                speech = Some(item.spoken_reminder());
            }
        });
    });

    speech
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
