//! Per-user secret storage.
//!
//! One hex-encoded secret file per user under a configured directory.
//! Usernames are validated before any filesystem access; the intermediate
//! hex text is zeroized after decoding.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, Zeroizing};

use crate::error::ModuleError;

/// Minimum decoded secret length in bytes (128 bits).
pub const MIN_SECRET_LEN: usize = 16;

/// Source of per-user shared secrets.
pub trait SecretStore {
    /// Load the secret for `user`.
    ///
    /// # Errors
    ///
    /// `NotEnrolled` when the user has no secret; `InvalidUser`,
    /// `Storage`, `MalformedSecret`, or `SecretTooShort` otherwise.
    fn load(&self, user: &str) -> Result<Zeroizing<Vec<u8>>, ModuleError>;
}

/// File-backed secret store.
#[derive(Debug, Clone)]
pub struct FileSecretStore {
    dir: PathBuf,
}

impl FileSecretStore {
    /// Create a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the secret file path for `user`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidUser` for names that would escape the store
    /// directory.
    pub fn path_for(&self, user: &str) -> Result<PathBuf, ModuleError> {
        validate_user(user)?;
        Ok(self.dir.join(user))
    }

    /// Write a secret for `user`, creating the store directory if needed.
    ///
    /// The file is written hex-encoded with a trailing newline and
    /// owner-only permissions on Unix. Returns the file path.
    ///
    /// # Errors
    ///
    /// Returns `SecretTooShort` before touching the filesystem, and
    /// `InvalidUser` or `Storage` otherwise.
    pub fn save(&self, user: &str, secret: &[u8]) -> Result<PathBuf, ModuleError> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ModuleError::SecretTooShort);
        }
        let path = self.path_for(user)?;

        fs::create_dir_all(&self.dir).map_err(storage_err)?;

        let mut encoded = hex::encode(secret);
        encoded.push('\n');
        let written = fs::write(&path, encoded.as_bytes());
        encoded.zeroize();
        written.map_err(storage_err)?;

        restrict_permissions(&path)?;
        Ok(path)
    }
}

impl SecretStore for FileSecretStore {
    fn load(&self, user: &str) -> Result<Zeroizing<Vec<u8>>, ModuleError> {
        let path = self.path_for(user)?;

        let mut text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ModuleError::NotEnrolled);
            }
            Err(err) => return Err(storage_err(err)),
        };

        let decoded = hex::decode(text.trim());
        text.zeroize();

        let secret = Zeroizing::new(decoded.map_err(|_| ModuleError::MalformedSecret)?);
        if secret.len() < MIN_SECRET_LEN {
            return Err(ModuleError::SecretTooShort);
        }
        Ok(secret)
    }
}

/// Reject names that would resolve outside the store directory.
fn validate_user(user: &str) -> Result<(), ModuleError> {
    if user.is_empty()
        || user == "."
        || user == ".."
        || user.contains('/')
        || user.contains('\\')
        || user.contains('\0')
    {
        return Err(ModuleError::InvalidUser);
    }
    Ok(())
}

fn storage_err(err: io::Error) -> ModuleError {
    ModuleError::Storage(err.to_string())
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), ModuleError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(storage_err)
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), ModuleError> {
    Ok(())
}
