use eframe::egui;

use crate::ui::state::AppState;

/// Room kept to the right of the text box for the Send button.
const SEND_BUTTON_WIDTH: f32 = 70.0;

/// Returns true when the user asked to send (button or Enter).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input_text)
                .hint_text("Type your health question...")
                .desired_width(text_box_width(ui.available_width())),
        );
        if state.focus_input {
            response.request_focus();
            state.focus_input = false;
        }

        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = enter_pressed(state);
        }
    });

    send
}

fn text_box_width(available: f32) -> f32 {
    (available - SEND_BUTTON_WIDTH).max(0.0)
}

/// Enter drops egui focus from the text box; take it back even when the
/// input is blank and nothing gets sent.
fn enter_pressed(state: &mut AppState) -> bool {
    state.focus_input = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::controller::ChatController;
    use tokio::sync::mpsc;

    #[test]
    fn text_box_never_gets_negative_width() {
        assert_eq!(text_box_width(30.0), 0.0);
        assert_eq!(text_box_width(SEND_BUTTON_WIDTH), 0.0);
        assert_eq!(text_box_width(300.0), 230.0);
    }

    #[test]
    fn enter_on_blank_input_keeps_focus() {
        let (cmd_tx, _cmd_rx) = mpsc::channel(1);
        let mut controller = ChatController::new(AppState::new(), cmd_tx);
        controller.view_mut().focus_input = false;
        controller.view_mut().input_text = "   ".to_string();

        assert!(enter_pressed(controller.view_mut()));
        controller.send_message();

        assert!(controller.view().focus_input);
        assert!(controller.view().messages.is_empty());
    }
}
