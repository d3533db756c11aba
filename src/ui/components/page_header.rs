//! Header bar shared by the content pages

use super::VoiceButton;
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText};

/// Which header controls were clicked this frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderResponse {
    pub back_clicked: bool,
    pub speak_clicked: bool,
}

/// Back arrow, page title and a read-aloud button
pub struct PageHeader<'a> {
    theme: &'a Theme,
    title: &'a str,
    back_label: &'a str,
    speak_label: Option<&'a str>,
}

impl<'a> PageHeader<'a> {
    pub fn new(theme: &'a Theme, title: &'a str, back_label: &'a str) -> Self {
        Self {
            theme,
            title,
            back_label,
            speak_label: None,
        }
    }

    /// Add the read-aloud button on the right
    pub fn with_speaker(mut self, label: &'a str) -> Self {
        self.speak_label = Some(label);
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> HeaderResponse {
        let mut response = HeaderResponse::default();

        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .inner_margin(egui::Margin::symmetric(self.theme.spacing, self.theme.spacing_sm))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let back = ui.button(format!("← {}", self.back_label));
                    back.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, self.back_label)
                    });
                    response.back_clicked = back.clicked();

                    ui.add_space(self.theme.spacing_sm);
                    ui.label(
                        RichText::new(self.title)
                            .size(24.0)
                            .strong()
                            .color(self.theme.primary),
                    );

                    if let Some(label) = self.speak_label {
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            response.speak_clicked =
                                VoiceButton::speaker(self.theme, label).show(ui).clicked();
                        });
                    }
                });
            });

        response
    }
}
