//! OathGate Conversation Core
//!
//! Conversation-bridging layer between an authentication module and the
//! host authentication framework's interactive prompt mechanism.
//!
//! This crate provides:
//! - Message descriptors and zeroizing response envelopes
//! - The conversation capability seam (host callback interface)
//! - Single-shot dispatch with a fixed status translation table
//!
//! # Security Invariants
//!
//! - Exactly one message is dispatched per bridge call; no batching
//! - Response secrets are wiped before their memory is released, on all
//!   exit paths, with zeroize-on-drop as a backstop
//! - Response content is never read, logged, or copied by the bridge
//! - Unknown host status codes are preserved, never collapsed
//! - `SecretInput` and `Response` do not implement `Clone`
//! - Direct use of `unsafe` is forbidden (#![forbid(unsafe_code)])
//! - No retries, no internal locking, no cross-call state

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod bridge;
pub mod conv;
pub mod message;
pub mod response;
pub mod status;

pub use bridge::{prompt_for_input, send_message, show_error, show_info};
pub use conv::{ConvReply, Conversation, ConversationChannel};
pub use message::{Message, Style};
pub use response::{Response, SecretInput};
pub use status::Status;
