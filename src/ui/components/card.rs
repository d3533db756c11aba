//! Card container

use crate::ui::theme::Theme;
use egui::{RichText, Stroke};

/// White rounded panel with an optional heading
pub struct Card<'a> {
    theme: &'a Theme,
    title: Option<String>,
}

impl<'a> Card<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme, title: None }
    }

    pub fn titled(theme: &'a Theme, title: impl Into<String>) -> Self {
        Self {
            theme,
            title: Some(title.into()),
        }
    }

    pub fn show<R>(self, ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .stroke(Stroke::new(1.0, self.theme.bg_tertiary))
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if let Some(title) = &self.title {
                    ui.label(
                        RichText::new(title)
                            .size(18.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.add_space(self.theme.spacing_sm);
                }
                add_contents(ui)
            })
            .inner
    }
}

/// Small colored pill
pub fn badge(ui: &mut egui::Ui, text: impl Into<String>, color: egui::Color32) -> egui::Response {
    egui::Frame::none()
        .fill(color)
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text.into()).size(12.0).color(egui::Color32::WHITE))
        })
        .inner
}
