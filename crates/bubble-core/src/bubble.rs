//! Per-message interaction state
//!
//! Editing, reactions and read-aloud belong to the view of a message, not to
//! its parsed content. [`Bubble`] pairs a message and its rendered segments
//! with a [`BubbleState`]; the segments are never touched by state changes.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::message::{Message, RenderedMessage};

/// How long a like stays highlighted
pub const LIKE_HIGHLIGHT: Duration = Duration::from_secs(5);

/// Voice names preferred for read-aloud, in order
pub const PREFERRED_VOICES: [&str; 2] = ["Google US English", "Samantha"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reaction {
    #[default]
    None,
    Liked,
    Disliked,
}

/// What the speech backend should do after a toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechCommand {
    Speak { text: String, voice: Option<String> },
    Cancel,
}

/// Mutable UI state for one message bubble
#[derive(Debug, Clone, Default)]
pub struct BubbleState {
    /// Draft text while editing
    draft: Option<String>,
    reaction: Reaction,
    /// Pending highlight expiries, one per like, oldest first
    like_expiries: VecDeque<Instant>,
    speaking: bool,
}

impl BubbleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Enter edit mode with the current content as the draft
    ///
    /// Only user messages can be edited; returns whether edit mode started.
    pub fn begin_edit(&mut self, message: &Message) -> bool {
        if !message.is_user() {
            return false;
        }
        self.draft = Some(message.content.clone());
        true
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.draft.as_mut() {
            *draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Leave edit mode, returning the draft if it should be submitted
    pub fn save_edit(&mut self, message: &Message) -> Option<String> {
        let draft = self.draft.take()?;
        (draft.trim() != message.content).then_some(draft)
    }

    /// Every like schedules its own expiry; repeated likes do not extend
    /// a highlight that an earlier like already set to expire.
    pub fn like(&mut self, now: Instant) {
        while self.like_expiries.front().is_some_and(|&at| at <= now) {
            self.like_expiries.pop_front();
        }
        self.like_expiries.push_back(now + LIKE_HIGHLIGHT);
        self.reaction = Reaction::Liked;
    }

    /// Pending like expiries are left in place
    pub fn dislike(&mut self) {
        self.reaction = Reaction::Disliked;
    }

    /// Current reaction; a like fades at the earliest pending expiry
    pub fn reaction(&self, now: Instant) -> Reaction {
        match (self.reaction, self.like_expiries.front()) {
            (Reaction::Liked, Some(&at)) if now >= at => Reaction::None,
            (reaction, _) => reaction,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Start reading the message aloud, or stop if already reading
    pub fn toggle_speech(&mut self, message: &Message, voices: &[String]) -> SpeechCommand {
        if self.speaking {
            self.speaking = false;
            return SpeechCommand::Cancel;
        }

        self.speaking = true;
        SpeechCommand::Speak {
            text: message.content.clone(),
            voice: preferred_voice(voices).map(str::to_string),
        }
    }

    /// The speech backend finished the utterance
    pub fn speech_finished(&mut self) {
        self.speaking = false;
    }
}

/// First available voice whose name contains a preferred voice name
pub fn preferred_voice(voices: &[String]) -> Option<&str> {
    voices
        .iter()
        .find(|voice| PREFERRED_VOICES.iter().any(|name| voice.contains(name)))
        .map(String::as_str)
}

/// A message, its rendered segments, and its interaction state
#[derive(Debug)]
pub struct Bubble<'m> {
    message: &'m Message,
    rendered: RenderedMessage,
    state: BubbleState,
}

impl<'m> Bubble<'m> {
    pub fn new(message: &'m Message) -> Self {
        Self {
            message,
            rendered: message.render(),
            state: BubbleState::new(),
        }
    }

    pub fn rendered(&self) -> &RenderedMessage {
        &self.rendered
    }

    pub fn state(&self) -> &BubbleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BubbleState {
        &mut self.state
    }

    /// Text placed on the clipboard by the copy action
    pub fn copy_text(&self) -> &'m str {
        &self.message.content
    }
}
