//! OathGate Authentication Flows
//!
//! Module-side flows for a host authentication framework, built on the
//! `oathgate-core` conversation bridge.
//!
//! This crate provides:
//! - The `authenticate` and `set_credentials` entry-point flows
//! - RFC 6238 one-time-code verification (HMAC-SHA256)
//! - A per-user secret store with a file-backed implementation
//! - Module option parsing (`key=value` host option strings)
//!
//! # Security Invariants & Hard Failures
//!
//! - **One Attempt**: each `authenticate` call verifies exactly once; retry
//!   policy belongs to the host.
//! - **Zeroization**: loaded secrets and collected codes live in zeroizing
//!   buffers and are wiped before the flow returns, on every path.
//! - **No Duplication**: secret carriers do not implement `Clone`.
//! - **Fail Closed**: store failures and malformed input verify as failure,
//!   never as success.
//! - **No Secret Logging**: log events carry usernames and outcomes only,
//!   never secret material or collected input.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

pub mod config;
pub mod error;
pub mod flow;
pub mod store;
pub mod totp;

pub use config::ModuleConfig;
pub use error::ModuleError;
pub use flow::{authenticate, authenticate_at, set_credentials, CredentialSource};
pub use store::{FileSecretStore, SecretStore};
