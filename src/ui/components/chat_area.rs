use eframe::egui;
use egui::text::{LayoutJob, TextFormat};

use crate::common::ChatMessage;
use crate::ui::markup;
use crate::ui::state::AppState;

use super::typing_indicator;

pub const USER_BUBBLE: egui::Color32 = egui::Color32::from_rgb(0x66, 0x7e, 0xea);
pub const BOT_BUBBLE: egui::Color32 = egui::Color32::from_rgb(0xf1, 0xf3, 0xf5);
const BOT_TEXT: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
const BOT_STRONG_TEXT: egui::Color32 = egui::Color32::from_rgb(0x11, 0x11, 0x11);

/// Bóng chat dùng chung cho tin nhắn và typing indicator.
pub fn bubble_frame(fill: egui::Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(10))
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &state.messages {
                message_bubble(ui, message);
                ui.add_space(6.0);
            }

            if state.typing_indicator_visible() {
                typing_indicator::render(ui);
            }

            if state.scroll_to_end {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
                state.scroll_to_end = false;
            }
        });
}

fn message_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill) = if message.is_user() {
        (egui::Layout::right_to_left(egui::Align::TOP), USER_BUBBLE)
    } else {
        (egui::Layout::left_to_right(egui::Align::TOP), BOT_BUBBLE)
    };

    ui.push_id(&message.id, |ui| {
        ui.with_layout(layout, |ui| {
            let max_width = ui.available_width() * 0.75;
            bubble_frame(fill).show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    let font_id = egui::TextStyle::Body.resolve(ui.style());
                    let job = if message.is_user() {
                        LayoutJob::simple(
                            message.text.clone(),
                            font_id,
                            egui::Color32::WHITE,
                            max_width,
                        )
                    } else {
                        markup_job(&message.text, font_id, max_width)
                    };
                    ui.label(job);

                    let time_color = if message.is_user() {
                        egui::Color32::from_white_alpha(180)
                    } else {
                        egui::Color32::GRAY
                    };
                    ui.label(
                        egui::RichText::new(&message.timestamp)
                            .small()
                            .color(time_color),
                    );
                });
            });
        });
    });
}

fn markup_job(text: &str, font_id: egui::FontId, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;

    for span in markup::parse(text) {
        let format = TextFormat {
            font_id: font_id.clone(),
            color: if span.strong { BOT_STRONG_TEXT } else { BOT_TEXT },
            italics: span.emphasis,
            underline: if span.strong {
                egui::Stroke::new(0.5, BOT_STRONG_TEXT)
            } else {
                egui::Stroke::NONE
            },
            ..Default::default()
        };
        job.append(&span.text, 0.0, format);
    }

    job
}
