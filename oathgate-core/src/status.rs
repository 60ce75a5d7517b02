//! Host status translation.
//!
//! The host framework reports conversation outcomes as numeric codes.
//! The raw constant set is confined to this module; translation into the
//! local taxonomy happens in exactly one place (`Status::from_raw`), and
//! internal logic never branches on raw values directly.

use std::fmt;

/// Raw status codes as defined by the host authentication framework.
///
/// These values mirror the host's C header and must not be edited
/// independently of it.
pub mod raw {
    /// Interaction completed successfully.
    pub const SUCCESS: u32 = 0;
    /// Authentication failure.
    pub const AUTH_ERR: u32 = 7;
    /// User not known to the authentication service.
    pub const USER_UNKNOWN: u32 = 10;
    /// The conversation callback declined or failed the interaction.
    pub const CONV_ERR: u32 = 19;
    /// Module opts out of this authentication attempt.
    pub const IGNORE: u32 = 25;
}

/// Local conversation status taxonomy.
///
/// Recognized host outcomes map to closed variants; anything else is kept
/// as `Unmapped` with the original value intact, so no diagnostic
/// information is lost on the way to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Interaction completed successfully.
    Success,
    /// Host reported an authentication failure.
    AuthError,
    /// Host does not know the user.
    UserUnknown,
    /// Module opted out of this authentication attempt.
    Ignore,
    /// No conversation capability is registered on the channel.
    ConversationUnavailable,
    /// The host callback declined or failed the interaction.
    CallbackFailure,
    /// Unrecognized host code, original value retained.
    Unmapped(u32),
}

impl Status {
    /// Translate a raw host code into the local taxonomy.
    pub fn from_raw(code: u32) -> Self {
        match code {
            raw::SUCCESS => Self::Success,
            raw::AUTH_ERR => Self::AuthError,
            raw::USER_UNKNOWN => Self::UserUnknown,
            raw::CONV_ERR => Self::CallbackFailure,
            raw::IGNORE => Self::Ignore,
            other => Self::Unmapped(other),
        }
    }

    /// Check for the success outcome.
    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately terse. Do not leak details.
        match self {
            Self::Success => write!(f, "success"),
            Self::AuthError => write!(f, "authentication error"),
            Self::UserUnknown => write!(f, "user unknown"),
            Self::Ignore => write!(f, "ignore"),
            Self::ConversationUnavailable => write!(f, "conversation unavailable"),
            Self::CallbackFailure => write!(f, "callback failure"),
            Self::Unmapped(code) => write!(f, "unmapped host code {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_codes_map_exactly() {
        assert_eq!(Status::from_raw(raw::SUCCESS), Status::Success);
        assert_eq!(Status::from_raw(raw::AUTH_ERR), Status::AuthError);
        assert_eq!(Status::from_raw(raw::USER_UNKNOWN), Status::UserUnknown);
        assert_eq!(Status::from_raw(raw::CONV_ERR), Status::CallbackFailure);
        assert_eq!(Status::from_raw(raw::IGNORE), Status::Ignore);
    }

    #[test]
    fn test_unknown_code_preserves_value() {
        assert_eq!(Status::from_raw(4), Status::Unmapped(4));
        assert_eq!(Status::from_raw(31), Status::Unmapped(31));
        assert_eq!(Status::from_raw(u32::MAX), Status::Unmapped(u32::MAX));
    }

    #[test]
    fn test_is_success() {
        assert!(Status::Success.is_success());
        assert!(!Status::AuthError.is_success());
        assert!(!Status::Unmapped(0xBEEF).is_success());
    }

    #[test]
    fn test_display_keeps_unmapped_value_visible() {
        assert_eq!(Status::Unmapped(42).to_string(), "unmapped host code 42");
        assert_eq!(Status::Success.to_string(), "success");
    }
}
