use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Định danh của một yêu cầu trả lời đang chờ.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub author: Author,
    /// Bot text may embed simple markup; user text is shown verbatim.
    pub text: String,
    pub timestamp: String,
}

impl ChatMessage {
    pub fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author,
            text: text.into(),
            timestamp: format_timestamp(&Local::now()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Author::Bot, text)
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// Formats a clock time as `HH:MM AM/PM`.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%I:%M %p").to_string()
}

/// Where a bot reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Remote,
    Fallback,
}

/// Body POSTed to the reply endpoint.
#[derive(Debug, Serialize)]
pub struct ReplyRequest<'a> {
    pub message: &'a str,
}

/// Body expected back from the reply endpoint.
#[derive(Debug, Deserialize)]
pub struct ReplyBody {
    pub response: String,
}
