//! Time-based one-time codes (RFC 6238 over HMAC-SHA256).
//!
//! The repository enrolls and verifies with the same code path, so the
//! SHA-1 interop default is not carried. Verification scans the whole
//! configured skew window and compares candidate codes in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::ModuleError;

type HmacSha256 = Hmac<Sha256>;

/// Compute the code for an explicit Unix timestamp.
///
/// # Errors
///
/// Returns `InvalidOption` for a zero step and `MalformedSecret` if the
/// MAC cannot be keyed.
pub fn code_at(secret: &[u8], timestamp: u64, step: u64, digits: u32) -> Result<u32, ModuleError> {
    if step == 0 {
        return Err(ModuleError::InvalidOption("step=0".to_string()));
    }
    hotp(secret, timestamp / step, digits)
}

/// Check a presented code against the window `now/step ± skew`.
///
/// Non-digit input and wrong-length input are rejected before any MAC
/// work. The window is scanned in full and candidates are compared in
/// constant time; no early exit on match.
///
/// # Errors
///
/// Returns `InvalidOption` for a zero step and `MalformedSecret` if the
/// MAC cannot be keyed.
pub fn verify(
    secret: &[u8],
    presented: &str,
    now: u64,
    digits: u32,
    step: u64,
    skew: u32,
) -> Result<bool, ModuleError> {
    if step == 0 {
        return Err(ModuleError::InvalidOption("step=0".to_string()));
    }
    if presented.len() != digits as usize || !presented.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(false);
    }

    let current = now / step;
    let mut matched = false;

    for delta in -i64::from(skew)..=i64::from(skew) {
        let Some(counter) = current.checked_add_signed(delta) else {
            continue;
        };
        let code = hotp(secret, counter, digits)?;
        let mut candidate = format!("{:0width$}", code, width = digits as usize);
        matched |= eq_constant_time(candidate.as_bytes(), presented.as_bytes());
        candidate.zeroize();
    }

    Ok(matched)
}

/// HOTP value for one counter (RFC 4226 §5.3 dynamic truncation).
fn hotp(secret: &[u8], counter: u64, digits: u32) -> Result<u32, ModuleError> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| ModuleError::MalformedSecret)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[31] & 0x0f) as usize;
    let bin = u32::from_be_bytes([
        digest[offset] & 0x7f,
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ]);

    Ok(bin % 10u32.pow(digits))
}

/// Length-guarded constant-time byte comparison.
fn eq_constant_time(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// RFC 6238 Appendix B seed for the SHA-256 mode.
    const RFC_SEED: &[u8] = b"12345678901234567890123456789012";

    fn rfc_code(timestamp: u64) -> String {
        format!("{:08}", code_at(RFC_SEED, timestamp, 30, 8).unwrap())
    }

    #[test]
    fn test_rfc6238_sha256_vectors() {
        assert_eq!(rfc_code(59), "46119246");
        assert_eq!(rfc_code(1111111109), "68084774");
        assert_eq!(rfc_code(1111111111), "67062674");
        assert_eq!(rfc_code(1234567890), "91819424");
        assert_eq!(rfc_code(2000000000), "90698825");
        assert_eq!(rfc_code(20000000000), "77737706");
    }

    #[test]
    fn test_code_is_within_digit_range() {
        for timestamp in [0, 59, 3600, 999_999_999] {
            let code = code_at(RFC_SEED, timestamp, 30, 6).unwrap();
            assert!(code < 1_000_000);
        }
    }

    #[test]
    fn test_verify_accepts_current_code() {
        let now = 1111111111;
        let code = format!("{:06}", code_at(RFC_SEED, now, 30, 6).unwrap());
        assert_eq!(verify(RFC_SEED, &code, now, 6, 30, 0), Ok(true));
    }

    #[test]
    fn test_verify_accepts_adjacent_step_within_skew() {
        let now = 30 * 1000;
        let previous = format!("{:06}", code_at(RFC_SEED, now - 30, 30, 6).unwrap());
        assert_eq!(verify(RFC_SEED, &previous, now, 6, 30, 1), Ok(true));
    }

    #[test]
    fn test_verify_rejects_code_outside_window() {
        let now = 30 * 1000;

        // Build a candidate that matches none of the codes in the window
        let window: Vec<String> = (999..=1001)
            .map(|counter| format!("{:06}", hotp(RFC_SEED, counter, 6).unwrap()))
            .collect();
        let wrong = (0..)
            .map(|n| format!("{:06}", n))
            .find(|c| !window.contains(c))
            .unwrap();

        assert_eq!(verify(RFC_SEED, &wrong, now, 6, 30, 1), Ok(false));
    }

    #[test]
    fn test_verify_rejects_malformed_input_before_mac_work() {
        let now = 59;
        assert_eq!(verify(RFC_SEED, "", now, 6, 30, 1), Ok(false));
        assert_eq!(verify(RFC_SEED, "12345", now, 6, 30, 1), Ok(false));
        assert_eq!(verify(RFC_SEED, "1234567", now, 6, 30, 1), Ok(false));
        assert_eq!(verify(RFC_SEED, "12345a", now, 6, 30, 1), Ok(false));
        assert_eq!(verify(RFC_SEED, "12 456", now, 6, 30, 1), Ok(false));
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert!(code_at(RFC_SEED, 59, 0, 6).is_err());
        assert!(verify(RFC_SEED, "123456", 59, 6, 0, 1).is_err());
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(eq_constant_time(b"123456", b"123456"));
        assert!(!eq_constant_time(b"123456", b"123457"));
        assert!(!eq_constant_time(b"123456", b"12345"));
        assert!(eq_constant_time(b"", b""));
    }
}
