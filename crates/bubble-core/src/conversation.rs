//! Conversation history
//!
//! Ordered list of messages with the one mutation the message view needs:
//! editing a user message and re-sending from that point.

use serde::{Deserialize, Serialize};

use crate::error::{BubbleError, Result};
use crate::message::Message;

/// Result of applying an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edited text matched the existing content; nothing changed
    Unchanged,
    /// Content replaced; `dropped` later messages were discarded
    Replaced { dropped: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Load a conversation from a JSON array of messages
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Replace the content of user message `index` with `text`
    ///
    /// Submitting text that trims to the current content is a no-op. Any
    /// other edit drops every message after `index`, since the conversation
    /// continues from the edited message.
    pub fn edit(&mut self, index: usize, text: impl Into<String>) -> Result<EditOutcome> {
        let len = self.messages.len();
        let message = self
            .messages
            .get_mut(index)
            .ok_or(BubbleError::MessageNotFound { index, len })?;

        if !message.is_user() {
            return Err(BubbleError::NotEditable {
                index,
                role: message.role,
            });
        }

        let text = text.into();
        if text.trim() == message.content {
            tracing::debug!(index, "edit left message unchanged");
            return Ok(EditOutcome::Unchanged);
        }

        message.content = text;
        let dropped = len - index - 1;
        self.messages.truncate(index + 1);

        tracing::debug!(index, dropped, "edited message");
        Ok(EditOutcome::Replaced { dropped })
    }
}

impl From<Vec<Message>> for Conversation {
    fn from(messages: Vec<Message>) -> Self {
        Self { messages }
    }
}
