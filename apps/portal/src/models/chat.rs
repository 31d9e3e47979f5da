use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry in the assistant widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    /// Suggested follow-up buttons; only the welcome message carries any.
    pub quick_replies: Vec<&'static str>,
}

impl ChatMessage {
    pub fn user(body: impl Into<String>) -> Self {
        ChatMessage {
            sender: Sender::User,
            body: body.into(),
            sent_at: Utc::now(),
            quick_replies: Vec::new(),
        }
    }

    pub fn bot(body: impl Into<String>, quick_replies: &[&'static str]) -> Self {
        ChatMessage {
            sender: Sender::Bot,
            body: body.into(),
            sent_at: Utc::now(),
            quick_replies: quick_replies.to_vec(),
        }
    }
}
