use super::{PageAction, PageContext};
use crate::backend::{BackendEvent, BackendReply, BackendRequest, RequestId};
use crate::content::assistant::{ChatMessage, QUICK_QUESTIONS, VOICE_PROMPT, WELCOME_MESSAGE};
use crate::i18n::{t, TextKey};
use crate::ui::components::{Card, PageHeader, VoiceButton};
use crate::ui::theme::Theme;
use egui::{Align, Layout, RichText};
use tracing::debug;

/// Chat with the canned farming assistant
pub struct AskAiPage {
    messages: Vec<ChatMessage>,
    input: String,
    pending: Option<RequestId>,
    voice_input: bool,
}

impl Default for AskAiPage {
    fn default() -> Self {
        Self::new()
    }
}

impl AskAiPage {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
            input: String::new(),
            pending: None,
            voice_input: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Waiting for the assistant's reply
    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, ctx: &mut PageContext<'_>) -> Option<PageAction> {
        let language = ctx.language;
        let theme = ctx.theme;
        let mut action = None;

        if self.voice_input {
            if let Some(transcript) = ctx.voice.take_finished_transcript() {
                self.input = transcript;
                self.voice_input = false;
            } else if !ctx.voice.is_active() {
                self.voice_input = false;
            }
        }

        let header = PageHeader::new(theme, t(language, TextKey::AskAi), t(language, TextKey::Back))
            .with_speaker("Read assistant intro")
            .show(ui);
        if header.back_clicked {
            action = Some(PageAction::Back);
        }
        if header.speak_clicked {
            ctx.voice.speak(&format!(
                "{} assistant ready to help with your farming questions",
                t(language, TextKey::AskAi)
            ));
        }

        ui.add_space(theme.spacing);
        Card::titled(theme, "Quick Questions").show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for question in QUICK_QUESTIONS {
                    if ui.small_button(question).clicked() {
                        self.input = question.to_string();
                    }
                }
            });
        });
        ui.add_space(theme.spacing);

        let typing = self.is_typing();
        egui::TopBottomPanel::bottom("ask_ai_input")
            .frame(egui::Frame::none().inner_margin(theme.spacing_sm))
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    let field = ui.add_enabled(
                        !typing,
                        egui::TextEdit::singleline(&mut self.input)
                            .hint_text("Ask me anything about farming...")
                            .desired_width(ui.available_width() - 120.0),
                    );
                    field.widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, !typing, "Question")
                    });
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    let listening = ctx.voice.is_listening() && self.voice_input;
                    if VoiceButton::mic(theme, "Ask by voice")
                        .listening(listening)
                        .enabled(ctx.voice.is_supported() && !typing)
                        .show(ui)
                        .clicked()
                    {
                        if listening {
                            ctx.voice.stop_listening();
                        } else {
                            self.voice_input = true;
                            ctx.voice.speak(VOICE_PROMPT);
                            ctx.voice.start_listening();
                        }
                    }

                    let can_send = !self.input.trim().is_empty() && !typing;
                    let send = ui.add_enabled(
                        can_send,
                        egui::Button::new(RichText::new("Send").color(theme.text_on_primary))
                            .fill(theme.primary),
                    );
                    if send.clicked() || (submitted && can_send) {
                        self.send(ctx);
                    }
                });
                if self.voice_input && ctx.voice.is_listening() {
                    ui.label(
                        RichText::new(format!("{} {}", t(language, TextKey::Listening), ctx.voice.transcript()))
                            .color(theme.voice_active),
                    );
                }
            });

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for message in &self.messages {
                    message_bubble(ui, theme, message);
                    ui.add_space(theme.spacing_sm);
                }
                if typing {
                    typing_indicator(ui, theme);
                }
            });

        action
    }

    fn send(&mut self, ctx: &mut PageContext<'_>) {
        let question = std::mem::take(&mut self.input);
        debug!("Question: {}", question);
        self.messages.push(ChatMessage::user(question.clone()));
        self.pending = Some(ctx.backend.submit(BackendRequest::Ask(question)));
    }

    pub fn on_backend_event(&mut self, event: &BackendEvent, ctx: &mut PageContext<'_>) {
        if self.pending != Some(event.id) {
            return;
        }
        self.pending = None;

        if let BackendReply::Assistant(reply) = &event.reply {
            self.messages.push(ChatMessage::assistant(reply.clone()));
            ctx.voice.speak(reply);
        }
    }
}

fn message_bubble(ui: &mut egui::Ui, theme: &Theme, message: &ChatMessage) {
    let (align, fill, text, avatar) = if message.is_user() {
        (Align::Max, theme.primary, theme.text_on_primary, "👤")
    } else {
        (Align::Min, theme.bg_tertiary, theme.text_primary, "🤖")
    };

    ui.with_layout(Layout::top_down(align), |ui| {
        ui.horizontal(|ui| {
            if !message.is_user() {
                ui.label(avatar);
            }
            egui::Frame::none()
                .fill(fill)
                .rounding(theme.button_rounding)
                .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    ui.label(RichText::new(&message.content).color(text));
                    ui.label(RichText::new(message.time_label()).small().color(text.gamma_multiply(0.7)));
                });
            if message.is_user() {
                ui.label(avatar);
            }
        });
    });
}

fn typing_indicator(ui: &mut egui::Ui, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label("🤖");
        egui::Frame::none()
            .fill(theme.bg_tertiary)
            .rounding(theme.button_rounding)
            .inner_margin(egui::Margin::symmetric(12.0, 8.0))
            .show(ui, |ui| {
                let time = ui.ctx().input(|i| i.time);
                let dots = (time * 3.0) as usize % 3 + 1;
                ui.label(RichText::new("●".repeat(dots)).color(theme.text_muted));
                ui.ctx().request_repaint();
            });
    });
}
