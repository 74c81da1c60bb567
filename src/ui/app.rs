use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{NetworkCommand, NetworkEvent};
use crate::config::AppConfig;

use super::components::{chat_area, header, input_bar, quick_replies};
use super::controller::ChatController;
use super::state::AppState;

pub struct ChatApp {
    controller: ChatController<AppState>,
    event_receiver: mpsc::Receiver<NetworkEvent>,
    title: String,
    quick_replies: Vec<String>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<NetworkCommand>,
        event_receiver: mpsc::Receiver<NetworkEvent>,
        config: &AppConfig,
    ) -> Self {
        Self {
            controller: ChatController::new(AppState::new(), command_sender),
            event_receiver,
            title: config.window_title.clone(),
            quick_replies: config.quick_replies.clone(),
        }
    }

    fn handle_network_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.controller.handle_event(event);
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_network_events();

        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            header::render(ui, self.controller.view(), &self.title);
        });

        let mut quick_reply = None;
        let mut submit = false;
        egui::TopBottomPanel::bottom("chat_input").show(ctx, |ui| {
            ui.add_space(4.0);
            quick_reply = quick_replies::render(ui, &self.quick_replies);
            ui.separator();
            submit = input_bar::render(ui, self.controller.view_mut());
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            chat_area::render(ui, self.controller.view_mut());
        });

        if let Some(message) = quick_reply {
            self.controller.send_quick_message(&message);
        } else if submit {
            self.controller.send_message();
        }

        ctx.request_repaint();
    }
}
