//! Transient notifications
//!
//! Toasts are queued and shown one at a time in the top-right corner for a
//! few seconds, fading in and out.

use super::theme::Theme;
use egui::{Align2, Color32, Id, RichText, Vec2};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Fade in/out time in seconds
const FADE_DURATION: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    /// Validation or voice failures
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Destructive, title, description)
    }
}

/// Toast queue
#[derive(Default)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    current: Option<(Toast, Instant)>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        self.queue.push_back(toast);
    }

    /// Toast on screen, or the next one waiting
    pub fn visible(&self) -> Option<&Toast> {
        self.current
            .as_ref()
            .map(|(toast, _)| toast)
            .or_else(|| self.queue.front())
    }

    /// All toasts not yet expired, in display order
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.current
            .iter()
            .map(|(toast, _)| toast)
            .chain(self.queue.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if self.current.is_none() {
            if let Some(toast) = self.queue.pop_front() {
                self.current = Some((toast, Instant::now()));
            }
        }

        let Some((toast, start_time)) = &self.current else {
            return;
        };

        let elapsed = start_time.elapsed();
        if elapsed > TOAST_DURATION {
            self.current = None;
            ctx.request_repaint();
            return;
        }

        let progress = elapsed.as_secs_f32();
        let alpha = if progress < FADE_DURATION {
            progress / FADE_DURATION
        } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
            (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
        } else {
            1.0
        };
        let alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);

        let (fill, text) = match toast.kind {
            ToastKind::Destructive => (theme.error, theme.text_on_primary),
            ToastKind::Success => (theme.primary, theme.text_on_primary),
            ToastKind::Info => (theme.bg_secondary, theme.text_primary),
        };
        let toast = toast.clone();

        egui::Area::new(Id::new("agri_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(with_alpha(fill, alpha * 0.95))
                    .stroke(egui::Stroke::new(1.0, with_alpha(theme.bg_tertiary, alpha)))
                    .rounding(theme.button_rounding)
                    .inner_margin(16.0)
                    .show(ui, |ui| {
                        ui.set_min_width(280.0);
                        ui.set_max_width(360.0);
                        let title = ui.label(
                            RichText::new(&toast.title)
                                .strong()
                                .size(15.0)
                                .color(with_alpha(text, alpha)),
                        );
                        title.widget_info(|| {
                            egui::WidgetInfo::labeled(
                                egui::WidgetType::Label,
                                true,
                                format!("Notification: {}", toast.title),
                            )
                        });
                        if !toast.description.is_empty() {
                            ui.label(
                                RichText::new(&toast.description)
                                    .size(13.0)
                                    .color(with_alpha(text, alpha * 0.9)),
                            );
                        }
                    });
            });

        ctx.request_repaint();
    }
}

fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let alpha = alpha.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), (alpha * 255.0) as u8)
}
