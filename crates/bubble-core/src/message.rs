//! Chat message model

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::segments::{self, Segment};

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message as stored in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    /// Attached image URLs, shown separately from inline `![]()` images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            images: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Attach image URLs to the message
    pub fn with_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.images = Some(images.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Attachment URLs, empty when there are none
    pub fn attachments(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Parse the content into segments regardless of role
    pub fn segments(&self) -> Vec<Segment> {
        segments::parse(&self.content)
    }

    /// Everything a presentation layer needs to draw this message
    ///
    /// Assistant content is parsed. User content is shown verbatim, so markup
    /// a user typed is never interpreted.
    pub fn render(&self) -> RenderedMessage {
        let body = match self.role {
            Role::Assistant => self.segments(),
            Role::User if self.content.is_empty() => Vec::new(),
            Role::User => vec![Segment::text(self.content.as_str())],
        };

        RenderedMessage {
            role: self.role,
            attachments: self.attachments().to_vec(),
            body,
        }
    }
}

/// A message ready for drawing: attachments first, then the body segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub role: Role,
    pub attachments: Vec<String>,
    pub body: Vec<Segment>,
}

impl RenderedMessage {
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty() && self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::SpanStyle;

    #[test]
    fn test_assistant_content_is_parsed() {
        let rendered = Message::assistant("**hi**").render();
        assert_eq!(rendered.body, vec![Segment::styled(SpanStyle::Bold, "hi")]);
    }

    #[test]
    fn test_user_content_is_verbatim() {
        let rendered = Message::user("**hi** ![x](y)").render();
        assert_eq!(rendered.body, vec![Segment::text("**hi** ![x](y)")]);
    }

    #[test]
    fn test_empty_user_content_has_empty_body() {
        assert!(Message::user("").render().is_empty());
    }

    #[test]
    fn test_attachments_are_separate_from_inline_images() {
        let message = Message::assistant("see ![inline](a.png)").with_images(["b.png"]);
        let rendered = message.render();

        assert_eq!(rendered.attachments, vec!["b.png".to_string()]);
        assert_eq!(
            rendered.body,
            vec![Segment::text("see "), Segment::image("inline", "a.png")]
        );
    }

    #[test]
    fn test_deserialize_optional_images() {
        let without: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"x"}"#).unwrap();
        assert!(without.attachments().is_empty());

        let null: Message =
            serde_json::from_str(r#"{"role":"user","content":"x","images":null}"#).unwrap();
        assert!(null.attachments().is_empty());

        let with: Message =
            serde_json::from_str(r#"{"role":"user","content":"x","images":["a.png"]}"#).unwrap();
        assert_eq!(with.attachments().to_vec(), vec!["a.png".to_string()]);
    }

    #[test]
    fn test_serialize_skips_missing_images() {
        let json = serde_json::to_string(&Message::user("hey")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hey"}"#);
    }

    #[test]
    fn test_segment_json_shape() {
        let json = serde_json::to_value(Message::assistant("![a](b) `c`").segments()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"kind": "image", "alt_text": "a", "url": "b"},
                {"kind": "text_run", "value": " "},
                {"kind": "styled_span", "style": "inline_code", "value": "c"},
            ])
        );
    }
}
