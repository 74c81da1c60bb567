use crate::common::{ChatMessage, ReplySource};

use super::controller::ChatView;

/// Marker for the single typing indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingIndicator;

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub typing_indicator: Option<TypingIndicator>,
    /// Set on every append; the chat area scrolls to the end and clears it.
    pub scroll_to_end: bool,
    /// Focus the input box on the next frame.
    pub focus_input: bool,
    /// Nguồn của câu trả lời gần nhất, hiển thị trên header.
    pub reply_source: Option<ReplySource>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            typing_indicator: None,
            scroll_to_end: false,
            focus_input: true,
            reply_source: None,
        }
    }

    pub fn typing_indicator_visible(&self) -> bool {
        self.typing_indicator.is_some()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView for AppState {
    fn input_text(&self) -> &str {
        &self.input_text
    }

    fn set_input_text(&mut self, text: &str) {
        self.input_text = text.to_string();
    }

    fn clear_input(&mut self) {
        self.input_text.clear();
        self.focus_input = true;
    }

    fn append_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_to_end = true;
    }

    fn show_pending(&mut self) {
        if self.typing_indicator.is_none() {
            self.typing_indicator = Some(TypingIndicator);
            self.scroll_to_end = true;
        }
    }

    fn hide_pending(&mut self) {
        self.typing_indicator = None;
    }

    fn set_reply_source(&mut self, source: ReplySource) {
        self.reply_source = Some(source);
    }
}
