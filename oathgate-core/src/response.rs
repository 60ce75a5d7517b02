//! Response envelopes and secret input buffers.
//!
//! Secrets are short-lived by construction: the bridge wipes them in place
//! before the envelope is released, and the buffer zeroizes again on drop.

use zeroize::Zeroizing;

/// Possibly-sensitive user input carried inside a response envelope.
///
/// This type does not implement `Clone` to prevent secret duplication.
#[derive(Debug)]
pub struct SecretInput(Zeroizing<Vec<u8>>);

impl SecretInput {
    /// Create from raw bytes. Takes ownership of the buffer.
    pub fn new(data: Vec<u8>) -> Self {
        Self(Zeroizing::new(data))
    }

    /// Get as a string slice.
    ///
    /// Returns an error if the input is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.0)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overwrite every byte with zero.
    ///
    /// The allocation stays alive at its current length, so the wiped state
    /// is observable; release still zeroizes on drop.
    pub fn wipe(&mut self) {
        for byte in self.0.iter_mut() {
            *byte = 0;
        }
    }
}

// Explicitly NOT implementing Clone to prevent secret duplication
// impl Clone for SecretInput { ... } // FORBIDDEN

/// One response envelope from the conversation capability.
///
/// The secret field is absent when the host collected no input. The
/// envelope itself is released exactly once, secret or not.
/// Does not implement `Clone`.
#[derive(Debug)]
pub struct Response {
    secret: Option<SecretInput>,
}

impl Response {
    /// An envelope carrying collected input.
    pub fn with_secret(secret: SecretInput) -> Self {
        Self {
            secret: Some(secret),
        }
    }

    /// An envelope with no collected input.
    pub fn empty() -> Self {
        Self { secret: None }
    }

    /// Whether input was collected.
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Borrow the secret field.
    pub fn secret(&self) -> Option<&SecretInput> {
        self.secret.as_ref()
    }

    /// Take the secret field out of the envelope.
    pub fn take_secret(&mut self) -> Option<SecretInput> {
        self.secret.take()
    }

    /// Wipe the secret field in place, if present.
    ///
    /// A missing secret field is a no-op; nothing is zeroed and nothing
    /// faults.
    pub fn wipe(&mut self) {
        if let Some(ref mut secret) = self.secret {
            secret.wipe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wipe_zeroes_every_byte_in_place() {
        let mut secret = SecretInput::new(b"123456".to_vec());
        assert_eq!(secret.len(), 6);

        secret.wipe();

        // Allocation still alive at full length, every byte zero
        assert_eq!(secret.len(), 6);
        assert!(secret.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_secret_zeroizes_on_drop() {
        let secret = SecretInput::new(b"one-time code".to_vec());
        assert_eq!(secret.as_str().ok(), Some("one-time code"));
        // Buffer is zeroized when dropped
        drop(secret);
    }

    #[test]
    fn test_envelope_without_secret_wipes_safely() {
        let mut resp = Response::empty();
        assert!(!resp.has_secret());
        resp.wipe();
        assert!(resp.secret().is_none());
    }

    #[test]
    fn test_envelope_wipe_reaches_secret() {
        let mut resp = Response::with_secret(SecretInput::new(b"654321".to_vec()));
        resp.wipe();
        let secret = resp.secret().map(SecretInput::as_bytes);
        assert_eq!(secret, Some(&[0u8; 6][..]));
    }

    #[test]
    fn test_take_secret_empties_envelope() {
        let mut resp = Response::with_secret(SecretInput::new(b"42".to_vec()));
        let taken = resp.take_secret();
        assert!(taken.is_some());
        assert!(!resp.has_secret());
        assert!(resp.take_secret().is_none());
    }

    #[test]
    fn test_invalid_utf8() {
        let secret = SecretInput::new(vec![0xFF, 0xFE]);
        assert!(secret.as_str().is_err());
    }
}
