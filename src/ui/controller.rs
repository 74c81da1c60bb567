use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::common::{ChatMessage, NetworkCommand, NetworkEvent, ReplySource, RequestId};
use crate::network::fallback::keyword_reply;

/// What the controller needs from whatever is displaying the chat.
pub trait ChatView {
    fn input_text(&self) -> &str;
    fn set_input_text(&mut self, text: &str);
    fn clear_input(&mut self);
    fn append_message(&mut self, message: ChatMessage);
    /// Shows the typing indicator. Showing it twice still leaves one.
    fn show_pending(&mut self);
    /// Hides the typing indicator if it is visible.
    fn hide_pending(&mut self);
    fn set_reply_source(&mut self, _source: ReplySource) {}
}

/// Drives the send/reply flow for one chat view.
///
/// Requests are tagged with a [`RequestId`] and queued in the worker; the
/// typing indicator stays up until every in-flight request has been
/// answered. Dropping the controller closes the command channel, which stops
/// the worker.
pub struct ChatController<V: ChatView> {
    view: V,
    command_sender: mpsc::Sender<NetworkCommand>,
    next_request_id: RequestId,
    in_flight: VecDeque<RequestId>,
}

impl<V: ChatView> ChatController<V> {
    pub fn new(view: V, command_sender: mpsc::Sender<NetworkCommand>) -> Self {
        Self {
            view,
            command_sender,
            next_request_id: 1,
            in_flight: VecDeque::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_awaiting_reply(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Sends whatever is in the input box. Blank input is ignored.
    pub fn send_message(&mut self) {
        let message = self.view.input_text().trim().to_string();
        if message.is_empty() {
            return;
        }

        self.view.append_message(ChatMessage::user(message.clone()));
        self.view.clear_input();
        self.view.show_pending();

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight.push_back(request_id);

        if let Err(err) = self.command_sender.try_send(NetworkCommand::RequestReply {
            request_id,
            text: message.clone(),
        }) {
            log::warn!("Failed to send command to network: {err}");
            self.resolve(request_id, keyword_reply(&message), ReplySource::Fallback);
        }
    }

    /// Quick-reply buttons go through the same path as typed input.
    pub fn send_quick_message(&mut self, message: &str) {
        self.view.set_input_text(message);
        self.send_message();
    }

    pub fn handle_event(&mut self, event: NetworkEvent) {
        match event {
            NetworkEvent::ReplyReady {
                request_id,
                html,
                source,
            } => self.resolve(request_id, html, source),
        }
    }

    fn resolve(&mut self, request_id: RequestId, html: String, source: ReplySource) {
        let Some(position) = self.in_flight.iter().position(|id| *id == request_id) else {
            log::warn!("Ignoring reply for unknown request {request_id}");
            return;
        };
        self.in_flight.remove(position);

        if self.in_flight.is_empty() {
            self.view.hide_pending();
        }
        self.view.set_reply_source(source);
        self.view.append_message(ChatMessage::bot(html));
    }
}
