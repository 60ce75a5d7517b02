//! Conversation capability seams.
//!
//! The host framework owns the authentication session and registers the
//! callback through which messages reach the user. Both are modeled as
//! traits so a module can be driven by a test double implementing the same
//! interface.

use crate::message::Message;
use crate::response::Response;

/// Raw outcome of one capability invocation.
///
/// The host reports a numeric status and, on some paths, response
/// envelopes. Envelopes may accompany a failing status; the bridge
/// destroys them regardless.
#[derive(Debug)]
pub struct ConvReply {
    /// Raw host status code.
    pub code: u32,
    /// Response envelopes, at most one per message.
    pub responses: Vec<Response>,
}

impl ConvReply {
    /// A reply carrying only a status code.
    pub fn status_only(code: u32) -> Self {
        Self {
            code,
            responses: Vec::new(),
        }
    }

    /// A reply carrying a status code and response envelopes.
    pub fn with_responses(code: u32, responses: Vec<Response>) -> Self {
        Self { code, responses }
    }
}

/// The host-registered conversation callback.
///
/// Invocations are synchronous and may block indefinitely awaiting human
/// input; timeout policy belongs to the host.
pub trait Conversation {
    /// Deliver messages to the user and collect any responses.
    ///
    /// The bridge always passes exactly one message.
    fn converse(&mut self, messages: &[Message]) -> ConvReply;
}

/// Opaque handle to the current authentication session.
///
/// Owned by the host framework. The bridge borrows it for the duration of
/// one call and never stores it.
pub trait ConversationChannel {
    /// Resolve the registered conversation capability.
    ///
    /// `None` means no capability is registered; this is a valid,
    /// non-crashing state the bridge reports as
    /// [`Status::ConversationUnavailable`](crate::Status).
    fn conversation(&mut self) -> Option<&mut dyn Conversation>;
}
