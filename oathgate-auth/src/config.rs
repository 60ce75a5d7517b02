//! Module configuration.
//!
//! Hosts hand modules a list of option strings. The accepted shape is
//! `key=value` plus the bare `optional` flag; unknown keys and out-of-range
//! values are errors, not silently ignored.

use std::path::PathBuf;

use crate::error::ModuleError;

/// Default directory holding per-user secret files.
pub const DEFAULT_SECRET_DIR: &str = "/etc/oathgate";

/// Accepted code lengths.
const DIGITS_MIN: u64 = 6;
const DIGITS_MAX: u64 = 8;

/// Accepted time-step bounds, in seconds.
const STEP_MIN: u64 = 15;
const STEP_MAX: u64 = 300;

/// Accepted clock-skew window, in steps either side of now.
const SKEW_MAX: u64 = 3;

/// Configuration for the authentication flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConfig {
    /// Directory holding per-user secret files.
    pub secret_dir: PathBuf,
    /// Code length in digits.
    pub digits: u32,
    /// Time step in seconds.
    pub step: u64,
    /// Accepted steps either side of the current one.
    pub skew: u32,
    /// Treat unenrolled users as "module opts out" instead of unknown.
    pub optional: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            secret_dir: PathBuf::from(DEFAULT_SECRET_DIR),
            digits: 6,
            step: 30,
            skew: 1,
            optional: false,
        }
    }
}

impl ModuleConfig {
    /// Parse host option strings into a configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOption` for unknown keys, malformed values, and
    /// values outside the accepted bounds.
    pub fn from_args<'a, I>(args: I) -> Result<Self, ModuleError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut config = Self::default();

        for arg in args {
            match arg.split_once('=') {
                Some(("secret_dir", value)) if !value.is_empty() => {
                    config.secret_dir = PathBuf::from(value);
                }
                Some(("digits", value)) => {
                    config.digits = parse_bounded(arg, value, DIGITS_MIN, DIGITS_MAX)? as u32;
                }
                Some(("step", value)) => {
                    config.step = parse_bounded(arg, value, STEP_MIN, STEP_MAX)?;
                }
                Some(("skew", value)) => {
                    config.skew = parse_bounded(arg, value, 0, SKEW_MAX)? as u32;
                }
                None if arg == "optional" => {
                    config.optional = true;
                }
                _ => return Err(ModuleError::InvalidOption(arg.to_string())),
            }
        }

        Ok(config)
    }
}

/// Parse a decimal option value and enforce its bounds.
fn parse_bounded(arg: &str, value: &str, min: u64, max: u64) -> Result<u64, ModuleError> {
    match value.parse::<u64>() {
        Ok(n) if (min..=max).contains(&n) => Ok(n),
        _ => Err(ModuleError::InvalidOption(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ModuleConfig::default();
        assert_eq!(config.secret_dir, PathBuf::from(DEFAULT_SECRET_DIR));
        assert_eq!(config.digits, 6);
        assert_eq!(config.step, 30);
        assert_eq!(config.skew, 1);
        assert!(!config.optional);
    }

    #[test]
    fn test_full_option_line() {
        let config = ModuleConfig::from_args([
            "secret_dir=/var/lib/oathgate",
            "digits=8",
            "step=60",
            "skew=2",
            "optional",
        ])
        .unwrap();

        assert_eq!(config.secret_dir, PathBuf::from("/var/lib/oathgate"));
        assert_eq!(config.digits, 8);
        assert_eq!(config.step, 60);
        assert_eq!(config.skew, 2);
        assert!(config.optional);
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = ModuleConfig::from_args(["window=3"]);
        assert_eq!(err, Err(ModuleError::InvalidOption("window=3".to_string())));
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(ModuleConfig::from_args(["digits=5"]).is_err());
        assert!(ModuleConfig::from_args(["digits=9"]).is_err());
        assert!(ModuleConfig::from_args(["step=0"]).is_err());
        assert!(ModuleConfig::from_args(["step=301"]).is_err());
        assert!(ModuleConfig::from_args(["skew=4"]).is_err());
    }

    #[test]
    fn test_malformed_values_rejected() {
        assert!(ModuleConfig::from_args(["digits=six"]).is_err());
        assert!(ModuleConfig::from_args(["secret_dir="]).is_err());
        assert!(ModuleConfig::from_args(["optional=yes"]).is_err());
    }
}
