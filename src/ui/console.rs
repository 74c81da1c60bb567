use std::io::{self, Write};

use crate::common::{Author, ChatMessage};

use super::controller::ChatView;
use super::markup;

/// Prints the conversation to a writer instead of a window.
pub struct ConsoleView<W: Write> {
    out: W,
    input_text: String,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input_text: String::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}") {
            log::warn!("Failed to write to console: {err}");
        }
    }
}

impl<W: Write> ChatView for ConsoleView<W> {
    fn input_text(&self) -> &str {
        &self.input_text
    }

    fn set_input_text(&mut self, text: &str) {
        self.input_text = text.to_string();
    }

    fn clear_input(&mut self) {
        self.input_text.clear();
    }

    fn append_message(&mut self, message: ChatMessage) {
        let (label, body) = match message.author {
            Author::User => ("You", message.text),
            Author::Bot => ("HealthBot", markup::to_plain_text(&message.text)),
        };
        self.write_line(&format!("[{}] {label}: {body}", message.timestamp));
    }

    fn show_pending(&mut self) {
        log::debug!("Waiting for reply...");
    }

    fn hide_pending(&mut self) {}
}
