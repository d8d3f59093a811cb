//! Error types for conversation handling
//!
//! Segment parsing is total and never fails; these cover operations on the
//! conversation around it.

use crate::message::Role;

#[derive(Debug, thiserror::Error)]
pub enum BubbleError {
    #[error("message {index} does not exist (conversation has {len} messages)")]
    MessageNotFound { index: usize, len: usize },

    #[error("message {index} is an {role} message and cannot be edited")]
    NotEditable { index: usize, role: Role },

    #[error("invalid conversation JSON: {0}")]
    InvalidConversation(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BubbleError>;
