use eframe::egui;

use crate::common::ReplySource;
use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState, title: &str) {
    ui.horizontal(|ui| {
        ui.heading(title);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (color, status) = match state.reply_source {
                Some(ReplySource::Remote) => (egui::Color32::GREEN, "Online"),
                Some(ReplySource::Fallback) => (egui::Color32::YELLOW, "Demo mode"),
                None => (egui::Color32::GRAY, "Connecting..."),
            };
            ui.label(egui::RichText::new(status).weak());
            ui.colored_label(color, "●");
        });
    });
}
