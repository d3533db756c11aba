//! Voice button component
//!
//! Round button with a painted microphone (voice input) or speaker (read
//! aloud) icon. Pulses while the microphone is listening.

use crate::ui::theme::Theme;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceButtonKind {
    Microphone,
    Speaker,
}

/// Voice button for a single action
pub struct VoiceButton<'a> {
    theme: &'a Theme,
    kind: VoiceButtonKind,
    label: String,
    listening: bool,
    enabled: bool,
    size: f32,
}

impl<'a> VoiceButton<'a> {
    /// Microphone button that starts voice input
    pub fn mic(theme: &'a Theme, label: impl Into<String>) -> Self {
        Self::new(theme, VoiceButtonKind::Microphone, label)
    }

    /// Speaker button that reads something aloud
    pub fn speaker(theme: &'a Theme, label: impl Into<String>) -> Self {
        Self::new(theme, VoiceButtonKind::Speaker, label)
    }

    fn new(theme: &'a Theme, kind: VoiceButtonKind, label: impl Into<String>) -> Self {
        Self {
            theme,
            kind,
            label: label.into(),
            listening: false,
            enabled: true,
            size: 40.0,
        }
    }

    /// Show the listening animation
    pub fn listening(mut self, listening: bool) -> Self {
        self.listening = listening;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set custom button size
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn show(self, ui: &mut egui::Ui) -> egui::Response {
        let sense = if self.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(self.size), sense);

        let label = self.label.clone();
        let enabled = self.enabled;
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, &label));

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, &response);
        }

        response.on_hover_text(self.label)
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, response: &egui::Response) {
        let painter = ui.painter();
        let center = rect.center();
        let radius = self.size / 2.0 - 2.0;

        let bg = if !self.enabled {
            self.theme.bg_tertiary
        } else if self.listening {
            self.theme.voice_active
        } else if response.hovered() {
            self.theme.primary.gamma_multiply(1.2)
        } else {
            self.theme.primary
        };
        painter.circle_filled(center, radius, bg);

        let scale = self.size / 60.0;
        match self.kind {
            VoiceButtonKind::Microphone => draw_mic_icon(painter, center, scale, Color32::WHITE),
            VoiceButtonKind::Speaker => draw_speaker_icon(painter, center, scale, Color32::WHITE),
        }

        if self.listening {
            self.draw_pulsing_ring(ui, center, radius);
        }
    }

    fn draw_pulsing_ring(&self, ui: &egui::Ui, center: Pos2, radius: f32) {
        let t = ui.ctx().input(|i| i.time);
        let pulse = ((t * 3.0).sin() * 0.5 + 0.5) as f32;
        ui.painter().circle_stroke(
            center,
            radius + 2.0 + pulse * 6.0,
            Stroke::new(
                2.0 + pulse * 2.0,
                self.theme.voice_active.gamma_multiply((1.0 - pulse) * 0.6),
            ),
        );
        ui.ctx().request_repaint();
    }
}

fn draw_mic_icon(painter: &egui::Painter, center: Pos2, scale: f32, color: Color32) {
    let stroke = Stroke::new(2.0 * scale.max(0.7), color);

    let body = Rect::from_center_size(
        egui::pos2(center.x, center.y - 4.0 * scale),
        Vec2::new(8.0 * scale, 14.0 * scale),
    );
    painter.rect_filled(body, 4.0 * scale, color);

    let arc_center = egui::pos2(center.x, center.y);
    let arc_radius = 9.0 * scale;
    let segments = 8;
    for i in 0..segments {
        let a0 = std::f32::consts::PI * (i as f32 / segments as f32);
        let a1 = std::f32::consts::PI * ((i + 1) as f32 / segments as f32);
        painter.line_segment(
            [
                egui::pos2(arc_center.x - arc_radius * a0.cos(), arc_center.y + arc_radius * a0.sin()),
                egui::pos2(arc_center.x - arc_radius * a1.cos(), arc_center.y + arc_radius * a1.sin()),
            ],
            stroke,
        );
    }

    let stem_top = arc_center.y + arc_radius;
    let stem_bottom = stem_top + 4.0 * scale;
    painter.line_segment(
        [egui::pos2(center.x, stem_top), egui::pos2(center.x, stem_bottom)],
        stroke,
    );
    painter.line_segment(
        [
            egui::pos2(center.x - 6.0 * scale, stem_bottom),
            egui::pos2(center.x + 6.0 * scale, stem_bottom),
        ],
        stroke,
    );
}

fn draw_speaker_icon(painter: &egui::Painter, center: Pos2, scale: f32, color: Color32) {
    let stroke = Stroke::new(2.0 * scale.max(0.7), color);
    let left = center.x - 10.0 * scale;

    let cone = vec![
        egui::pos2(left, center.y - 4.0 * scale),
        egui::pos2(left + 5.0 * scale, center.y - 4.0 * scale),
        egui::pos2(left + 11.0 * scale, center.y - 10.0 * scale),
        egui::pos2(left + 11.0 * scale, center.y + 10.0 * scale),
        egui::pos2(left + 5.0 * scale, center.y + 4.0 * scale),
        egui::pos2(left, center.y + 4.0 * scale),
    ];
    painter.add(egui::Shape::convex_polygon(cone, color, Stroke::NONE));

    // Sound waves
    for (i, r) in [6.0_f32, 11.0].iter().enumerate() {
        let origin = egui::pos2(left + 11.0 * scale, center.y);
        let radius = r * scale;
        let points: Vec<Pos2> = (0..=6)
            .map(|step| {
                let angle = -0.8 + 1.6 * (step as f32 / 6.0);
                egui::pos2(origin.x + radius * angle.cos(), origin.y + radius * angle.sin())
            })
            .collect();
        let alpha = if i == 0 { 1.0 } else { 0.7 };
        painter.add(egui::Shape::line(
            points,
            Stroke::new(stroke.width, color.gamma_multiply(alpha)),
        ));
    }
}
