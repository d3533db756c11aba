use super::{PageAction, PageContext};
use crate::content::market::{self, filter_prices, MarketPrice, NO_RESULTS, VOICE_SEARCH_PROMPT};
use crate::i18n::{t, TextKey};
use crate::ui::components::{badge, Card, PageHeader, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText};

pub struct MarketPage {
    prices: Vec<MarketPrice>,
    search: String,
    voice_searching: bool,
    synced_at: String,
}

impl Default for MarketPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketPage {
    pub fn new() -> Self {
        Self {
            prices: market::prices(),
            search: String::new(),
            voice_searching: false,
            synced_at: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        if self.voice_searching {
            if let Some(transcript) = ctx.voice.take_finished_transcript() {
                self.search = transcript;
                self.voice_searching = false;
            } else if !ctx.voice.is_active() {
                self.voice_searching = false;
            }
        }

        let header = PageHeader::new(theme, t(language, TextKey::MarketPrices), t(language, TextKey::Back))
            .with_speaker("Read market prices")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            ctx.voice.speak(&format!(
                "Current {} from local mandis and markets",
                t(language, TextKey::MarketPrices)
            ));
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(theme.spacing);
            Card::new(theme).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label("🔍");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.search)
                            .hint_text("Search for crop prices...")
                            .desired_width(ui.available_width() - 48.0),
                    )
                    .widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Search"));

                    let listening = ctx.voice.is_listening() && self.voice_searching;
                    if VoiceButton::mic(theme, "Voice search")
                        .listening(listening)
                        .enabled(ctx.voice.is_supported())
                        .show(ui)
                        .clicked()
                    {
                        if listening {
                            ctx.voice.stop_listening();
                        } else {
                            self.voice_searching = true;
                            ctx.voice.speak(VOICE_SEARCH_PROMPT);
                            ctx.voice.start_listening();
                        }
                    }
                });
                if ctx.voice.is_listening() && self.voice_searching {
                    ui.label(
                        RichText::new(format!("{} {}", t(language, TextKey::Listening), ctx.voice.transcript()))
                            .color(theme.voice_active),
                    );
                }
            });
            ui.add_space(theme.spacing);

            egui::Frame::none()
                .fill(theme.primary)
                .rounding(theme.card_rounding)
                .inner_margin(theme.spacing_lg)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new("Live Market Rates")
                                .size(20.0)
                                .strong()
                                .color(theme.text_on_primary),
                        );
                        ui.label(
                            RichText::new("Updated from Telangana State Agricultural Marketing")
                                .color(theme.text_on_primary),
                        );
                        badge(ui, format!("Last sync: {}", self.synced_at), theme.secondary);
                    });
                });
            ui.add_space(theme.spacing);

            let matches = filter_prices(&self.prices, &self.search);
            if matches.is_empty() {
                Card::new(theme).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(NO_RESULTS).color(theme.text_muted));
                    });
                });
            } else {
                ui.columns(2, |cols| {
                    for (i, price) in matches.iter().enumerate() {
                        let ui = &mut cols[i % 2];
                        if let Some(text) = price_card(ui, theme, price) {
                            ctx.voice.speak(&text);
                        }
                        ui.add_space(theme.spacing);
                    }
                });
            }

            ui.add_space(theme.spacing);
            Card::new(theme).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(
                            "📊 Prices are indicative and may vary at actual market transactions. \
                             Always verify current rates before making selling decisions.",
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

fn price_card(ui: &mut egui::Ui, theme: &Theme, price: &MarketPrice) -> Option<String> {
    let mut speech = None;

    Card::new(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(price.crop).size(18.0).strong().color(theme.primary));
                ui.label(RichText::new(price.local_name).small().color(theme.text_muted));
            });
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if VoiceButton::speaker(theme, format!("Read {} price", price.crop))
                    .with_size(32.0)
                    .show(ui)
                    .clicked()
                {
                    speech = Some(price.spoken_details());
                }
            });
        });

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("₹{}", group_thousands(price.current_price)))
                    .size(30.0)
                    .strong()
                    .color(theme.primary),
            );
            ui.label(RichText::new(price.unit).small().color(theme.text_muted));
            ui.label(
                RichText::new(price.change_label())
                    .strong()
                    .color(theme.trend_color(price.trend)),
            );
        });

        ui.separator();
        egui::Grid::new(("price_facts", price.crop))
            .num_columns(2)
            .show(ui, |ui| {
                ui.label(RichText::new("Market:").color(theme.text_muted));
                ui.label(price.market);
                ui.end_row();
                ui.label(RichText::new("Previous Price:").color(theme.text_muted));
                ui.label(format!("₹{}", group_thousands(price.previous_price)));
                ui.end_row();
                ui.label(RichText::new("Updated:").color(theme.text_muted));
                ui.label(price.last_updated);
                ui.end_row();
            });

        let trend = ui.add_sized([ui.available_width(), 28.0], egui::Button::new("Price Trend Analysis"));
        trend.widget_info(|| {
            egui::WidgetInfo::labeled(
                egui::WidgetType::Button,
                true,
                format!("{} price trend", price.crop),
            )
        });
        if trend.clicked() {
            speech = Some(format!("{} price trend and market analysis", price.crop));
        }
    });

    speech
}

/// 2150 -> "2,150"
fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
