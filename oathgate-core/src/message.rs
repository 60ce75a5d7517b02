//! Conversation message descriptors.
//!
//! One message is built fresh per bridge call and never reused. Text is
//! carried literally; an empty string is a legal message.

/// Message class, 1:1 with the host framework's prompt categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Collect visible user input (e.g. a one-time code).
    PromptEchoOn,
    /// Informational text. No response expected.
    TextInfo,
    /// Error text. No response expected.
    ErrorMsg,
}

/// A single outbound conversation message.
///
/// Messages are immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    style: Style,
    text: String,
}

impl Message {
    /// Build a message for one dispatch.
    pub fn new(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// Get the message class.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Get the message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
