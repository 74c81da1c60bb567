use eframe::egui;

use super::chat_area::{BOT_BUBBLE, bubble_frame};

pub const TYPING_INDICATOR_ID: &str = "typingIndicator";

/// Ba chấm nhấp nháy khi đang chờ bot trả lời.
pub fn render(ui: &mut egui::Ui) {
    let time = ui.input(|input| input.time);

    ui.push_id(TYPING_INDICATOR_ID, |ui| {
        ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
            bubble_frame(BOT_BUBBLE).show(ui, |ui| {
                ui.horizontal(|ui| {
                    for dot in 0..3_u8 {
                        let phase = time * 4.0 - f64::from(dot) * 0.6;
                        let alpha = 0.35 + 0.65 * (phase.sin() * 0.5 + 0.5) as f32;
                        ui.label(
                            egui::RichText::new("●")
                                .color(egui::Color32::DARK_GRAY.gamma_multiply(alpha)),
                        );
                    }
                });
            });
        });
    });

    ui.ctx().request_repaint();
}
