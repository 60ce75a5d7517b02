//! Module-side authentication flows.
//!
//! The flows decide authentication outcomes; the conversation core only
//! transports prompts. All user interaction goes through the bridge, and
//! the collected code arrives via the host-owned [`CredentialSource`]
//! seam, never through bridge responses.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use oathgate_core::{prompt_for_input, show_error, ConversationChannel, SecretInput, Status};

use crate::config::ModuleConfig;
use crate::error::ModuleError;
use crate::store::SecretStore;
use crate::totp;

/// Prompt shown when asking for the one-time code.
pub const CODE_PROMPT: &str = "One-time code: ";

/// Error line shown after a failed verification.
const BAD_CODE_TEXT: &str = "Incorrect one-time code";

/// Host-owned source of the code collected for this attempt.
///
/// The conversation bridge destroys every response it transports, so the
/// host keeps the collected input as a session item and hands it to the
/// module through this seam.
pub trait CredentialSource {
    /// Take the collected one-time code, if the host gathered one.
    ///
    /// Ownership transfers to the caller; a second take within the same
    /// attempt returns `None`.
    fn take_one_time_code(&mut self) -> Option<SecretInput>;
}

/// Authenticate `user` with a one-time code, using the current time.
pub fn authenticate<C, S>(
    channel: &mut C,
    store: &S,
    config: &ModuleConfig,
    user: &str,
) -> Status
where
    C: ConversationChannel + CredentialSource,
    S: SecretStore + ?Sized,
{
    authenticate_at(channel, store, config, user, unix_now())
}

/// Authenticate `user` against an explicit Unix timestamp.
///
/// One verification attempt per call. The loaded secret and the collected
/// code are wiped before this function returns, on every path after they
/// exist.
pub fn authenticate_at<C, S>(
    channel: &mut C,
    store: &S,
    config: &ModuleConfig,
    user: &str,
    now: u64,
) -> Status
where
    C: ConversationChannel + CredentialSource,
    S: SecretStore + ?Sized,
{
    let secret = match store.load(user) {
        Ok(secret) => secret,
        Err(ModuleError::NotEnrolled) if config.optional => {
            debug!(user, "not enrolled, opting out");
            return Status::Ignore;
        }
        Err(ModuleError::NotEnrolled) => {
            debug!(user, "not enrolled");
            return Status::UserUnknown;
        }
        Err(err) => {
            warn!(user, error = %err, "secret lookup failed");
            return Status::AuthError;
        }
    };

    let prompted = prompt_for_input(channel, CODE_PROMPT);
    if !prompted.is_success() {
        debug!(user, status = %prompted, "prompt not delivered");
        return prompted;
    }

    let Some(mut code) = channel.take_one_time_code() else {
        debug!(user, "host collected no code");
        return Status::AuthError;
    };

    let verified = match code.as_str() {
        Ok(text) => {
            totp::verify(&secret, text.trim(), now, config.digits, config.step, config.skew)
                .unwrap_or_else(|err| {
                    warn!(user, error = %err, "verification aborted");
                    false
                })
        }
        Err(_) => false,
    };
    code.wipe();

    if verified {
        debug!(user, "one-time code accepted");
        Status::Success
    } else {
        debug!(user, "one-time code rejected");
        // Best effort; the failure status below is the outcome either way
        let _ = show_error(channel, BAD_CODE_TEXT);
        Status::AuthError
    }
}

/// Credential establishment hook.
///
/// One-time-code verification leaves no long-lived credentials behind;
/// the flow acknowledges the host and does nothing else. Kept as an
/// explicit entry point because hosts invoke it unconditionally after
/// authentication.
pub fn set_credentials<C>(_channel: &mut C, _config: &ModuleConfig, user: &str) -> Status
where
    C: ConversationChannel,
{
    debug!(user, "no credentials to establish");
    Status::Success
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
