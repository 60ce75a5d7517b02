//! Single-shot conversation dispatch.
//!
//! The bridge sends exactly one message per call, destroys any response
//! content before returning, and reports the translated host status. It
//! keeps no state across calls and never retries; all failures surface as
//! a [`Status`] to the caller, unlogged.

use crate::conv::{ConvReply, ConversationChannel};
use crate::message::{Message, Style};
use crate::response::Response;
use crate::status::Status;

/// Send one message through the channel's conversation capability.
///
/// Returns [`Status::ConversationUnavailable`] without invoking anything
/// when no capability is registered. Any response envelopes the capability
/// returns are wiped and released before this function returns, on every
/// path, including host-reported failure.
pub fn send_message<C>(channel: &mut C, style: Style, text: &str) -> Status
where
    C: ConversationChannel + ?Sized,
{
    let Some(conv) = channel.conversation() else {
        return Status::ConversationUnavailable;
    };

    let message = Message::new(style, text);
    let ConvReply {
        code,
        mut responses,
    } = conv.converse(std::slice::from_ref(&message));

    scrub(&mut responses);
    drop(responses);

    Status::from_raw(code)
}

/// Overwrite secret bytes in place before the envelopes are released.
///
/// Envelopes without a secret field are left untouched; each envelope is
/// still released exactly once when the vector drops.
fn scrub(responses: &mut [Response]) {
    for response in responses.iter_mut() {
        response.wipe();
    }
}

/// Prompt for visible user input (e.g. a one-time code).
pub fn prompt_for_input<C>(channel: &mut C, text: &str) -> Status
where
    C: ConversationChannel + ?Sized,
{
    send_message(channel, Style::PromptEchoOn, text)
}

/// Show an informational line. No response is expected.
pub fn show_info<C>(channel: &mut C, text: &str) -> Status
where
    C: ConversationChannel + ?Sized,
{
    send_message(channel, Style::TextInfo, text)
}

/// Show an error line. No response is expected.
pub fn show_error<C>(channel: &mut C, text: &str) -> Status
where
    C: ConversationChannel + ?Sized,
{
    send_message(channel, Style::ErrorMsg, text)
}
