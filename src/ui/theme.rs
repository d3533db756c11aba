//! Theme and styling for the Smart Agri UI
//!
//! An earthy light palette with large touch targets. Status colors for soil
//! ratings, guidance priorities and price trends live here too.

use crate::content::crops::Level;
use crate::content::guidance::Priority;
use crate::content::market::Trend;
use crate::content::soil::HealthStatus;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Leaf green
    pub primary: Color32,
    /// Soil brown
    pub secondary: Color32,
    /// Harvest gold
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
    /// Text on primary-filled surfaces
    pub text_on_primary: Color32,

    /// Microphone color while listening
    pub voice_active: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::earth()
    }
}

impl Theme {
    /// Light earth-toned theme
    pub fn earth() -> Self {
        Self {
            primary: Color32::from_rgb(46, 125, 50),    // Green
            secondary: Color32::from_rgb(121, 85, 61),  // Brown
            accent: Color32::from_rgb(234, 179, 8),     // Gold
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(217, 119, 6),
            error: Color32::from_rgb(220, 38, 38),

            bg_primary: Color32::from_rgb(250, 247, 240),   // Parchment
            bg_secondary: Color32::from_rgb(255, 255, 255), // Cards
            bg_tertiary: Color32::from_rgb(236, 230, 216),

            text_primary: Color32::from_rgb(33, 37, 24),
            text_secondary: Color32::from_rgb(68, 64, 60),
            text_muted: Color32::from_rgb(120, 113, 108),
            text_on_primary: Color32::WHITE,

            voice_active: Color32::from_rgb(220, 38, 38),

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = self.bg_secondary;

        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.weak_bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.25);
        visuals.widgets.hovered.weak_bg_fill = self.primary.gamma_multiply(0.25);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.primary);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.weak_bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_on_primary);

        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        visuals.hyperlink_color = self.primary;

        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        super::fonts::configure_fonts(ctx);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);
        style.spacing.interact_size.y = 32.0;

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(26.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(16.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(13.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    pub fn health_color(&self, status: HealthStatus) -> Color32 {
        match status {
            HealthStatus::Excellent => self.success,
            HealthStatus::Good => self.primary,
            HealthStatus::Fair => self.warning,
            HealthStatus::Poor => self.error,
        }
    }

    pub fn priority_color(&self, priority: Priority) -> Color32 {
        match priority {
            Priority::High => self.error,
            Priority::Medium => self.warning,
            Priority::Low => self.success,
        }
    }

    pub fn trend_color(&self, trend: Trend) -> Color32 {
        match trend {
            Trend::Up => self.success,
            Trend::Down => self.error,
            Trend::Stable => self.text_muted,
        }
    }

    /// Water need is good when low, demand is good when high
    pub fn level_color(&self, level: Level, higher_is_better: bool) -> Color32 {
        match (level, higher_is_better) {
            (Level::Medium, _) => self.warning,
            (Level::High, true) | (Level::Low, false) => self.success,
            (Level::High, false) | (Level::Low, true) => self.error,
        }
    }

    /// Percent health bars: green from 80, amber from 60
    pub fn percent_color(&self, percent: u32) -> Color32 {
        if percent >= 80 {
            self.success
        } else if percent >= 60 {
            self.warning
        } else {
            self.error
        }
    }
}
