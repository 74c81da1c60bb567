use eframe::egui;

/// Nút gợi ý câu hỏi nhanh. Returns the literal text of the clicked button.
pub fn render(ui: &mut egui::Ui, replies: &[String]) -> Option<String> {
    let mut chosen = None;
    ui.horizontal_wrapped(|ui| {
        for reply in replies {
            if ui.small_button(reply.as_str()).clicked() {
                chosen = Some(reply.clone());
            }
        }
    });
    chosen
}
