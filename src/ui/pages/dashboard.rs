use super::{PageAction, PageContext};
use crate::content::{self, DASHBOARD_LOCATION, LOGOUT_MESSAGE};
use crate::i18n::{t, TextKey};
use crate::navigation::PageKey;
use crate::ui::components::{badge, Card, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText, Sense};

#[derive(Default)]
pub struct DashboardPage;

impl DashboardPage {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        egui::Frame::none()
            .fill(theme.bg_secondary)
            .inner_margin(theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(t(language, TextKey::WelcomeFarmer))
                                .size(26.0)
                                .strong()
                                .color(theme.primary),
                        );
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("📍 {}", DASHBOARD_LOCATION))
                                    .color(theme.text_muted),
                            );
                            badge(ui, t(language, TextKey::Online), theme.success);
                        });
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if VoiceButton::speaker(theme, "Read welcome")
                            .with_size(48.0)
                            .show(ui)
                            .clicked()
                        {
                            ctx.voice.speak(t(language, TextKey::WelcomeFarmer));
                        }

                        ui.menu_button("Account", |ui| {
                            let email = ctx
                                .user
                                .and_then(|user| user.email.as_deref())
                                .unwrap_or("farmer@demo.com");
                            ui.add_enabled(false, egui::Button::new(email));
                            ui.separator();
                            if ui.button("Change Language").clicked() {
                                action = Some(PageAction::BackToLanguage);
                                ui.close_menu();
                            }
                            ui.separator();
                            if ui
                                .button(RichText::new("Logout").color(theme.error))
                                .clicked()
                            {
                                ctx.voice.speak(LOGOUT_MESSAGE);
                                action = Some(PageAction::Logout);
                                ui.close_menu();
                            }
                        });

                        if ui.button("🌐").on_hover_text("Change Language").clicked() {
                            action = Some(PageAction::BackToLanguage);
                        }
                    });
                });
            });

        ui.add_space(theme.spacing_lg);

        let columns = if ui.available_width() > 720.0 { 3 } else { 2 };
        let tile_width =
            (ui.available_width() - theme.spacing * (columns as f32 - 1.0)) / columns as f32;

        egui::Grid::new("dashboard_tiles")
            .num_columns(columns)
            .spacing([theme.spacing, theme.spacing])
            .show(ui, |ui| {
                for (i, key) in PageKey::ALL.iter().enumerate() {
                    let text_key = tile_text_key(*key);
                    if tile(ui, theme, t(language, text_key), tile_icon(*key), tile_width) {
                        ctx.voice.speak(t(language, text_key));
                        action = Some(PageAction::Navigate(key.as_str().to_string()));
                    }
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });

        ui.add_space(theme.spacing_lg);
        ui.columns(3, |cols| {
            for (col, stat) in cols.iter_mut().zip(content::quick_stats()) {
                Card::new(theme).show(col, |ui| {
                    ui.label(RichText::new(stat.title).small().color(theme.text_muted));
                    ui.label(RichText::new(stat.value).size(22.0).strong().color(theme.primary));
                    ui.label(RichText::new(stat.detail).small().color(theme.text_muted));
                });
            }
        });

        action
    }
}

fn tile_text_key(key: PageKey) -> TextKey {
    match key {
        PageKey::MySoil => TextKey::MySoil,
        PageKey::BestCrops => TextKey::BestCrops,
        PageKey::MarketPrices => TextKey::MarketPrices,
        PageKey::SmartGuidance => TextKey::SmartGuidance,
        PageKey::AskAi => TextKey::AskAi,
        PageKey::MyFarm => TextKey::MyFarm,
    }
}

fn tile_icon(key: PageKey) -> &'static str {
    match key {
        PageKey::MySoil => "🧪",
        PageKey::BestCrops => "🌾",
        PageKey::MarketPrices => "📈",
        PageKey::SmartGuidance => "💡",
        PageKey::AskAi => "💬",
        PageKey::MyFarm => "🌱",
    }
}

/// Clickable dashboard card; returns true when clicked
fn tile(ui: &mut egui::Ui, theme: &Theme, title: &str, icon: &str, width: f32) -> bool {
    let response = egui::Frame::none()
        .fill(theme.bg_secondary)
        .rounding(theme.card_rounding)
        .stroke(egui::Stroke::new(1.0, theme.bg_tertiary))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| {
                egui::Frame::none()
                    .fill(theme.primary.gamma_multiply(0.15))
                    .inner_margin(egui::Margin::symmetric(0.0, 28.0))
                    .show(ui, |ui| {
                        ui.set_width(width);
                        ui.label(RichText::new(icon).size(40.0));
                    });
                ui.add_space(theme.spacing_sm);
                ui.label(RichText::new(title).size(18.0).strong().color(theme.text_primary));
                ui.add_space(theme.spacing_sm);
            });
        })
        .response
        .interact(Sense::click());

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, format!("Open {}", title))
    });
    response.clicked()
}
