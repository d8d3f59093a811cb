//! Bubble core library
//!
//! Turns chat message content into ordered render segments and models the
//! conversation and per-bubble state around it. Presentation lives in the
//! `bubble` CLI crate.

pub mod bubble;
pub mod conversation;
pub mod error;
pub mod message;
pub mod segments;

pub use bubble::{Bubble, BubbleState, Reaction, SpeechCommand};
pub use conversation::{Conversation, EditOutcome};
pub use error::{BubbleError, Result};
pub use message::{Message, RenderedMessage, Role};
pub use segments::{parse, Segment, SpanStyle, Spanned};
