//! Session cookie configuration and validation.
//!
//! Turns the session toggles from [`crate::settings::AppSettings`] into the
//! key and cookie flags used by the session middleware, applying stricter
//! rules to release builds.

use std::path::{Path, PathBuf};

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use zeroize::Zeroize;

/// Minimum session key length in bytes.
pub const SESSION_KEY_MIN_LEN: usize = 64;

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds fall back to an ephemeral key when none can be read.
    Debug,
    /// Release builds require a readable key unless explicitly allowed.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }
}

/// Session toggles read from configuration.
#[derive(Debug, Clone)]
pub struct SessionToggles {
    /// File holding the session key material.
    pub key_file: PathBuf,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Whether a release build may fall back to a temporary key.
    pub allow_ephemeral: bool,
}

/// Session settings ready for the middleware.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Build session settings from configuration toggles.
///
/// # Errors
///
/// Returns [`SessionConfigError::KeyTooShort`] when the key file holds fewer
/// than [`SESSION_KEY_MIN_LEN`] bytes, and [`SessionConfigError::KeyRead`]
/// when a release build cannot read the key and ephemeral keys are not
/// allowed.
pub fn session_settings(
    toggles: &SessionToggles,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    if !toggles.cookie_secure {
        warn!("session cookies are not marked Secure");
    }
    let key = session_key(&toggles.key_file, mode, toggles.allow_ephemeral)?;
    Ok(SessionSettings {
        key,
        cookie_secure: toggles.cookie_secure,
        same_site: SameSite::Lax,
    })
}

fn session_key(
    path: &Path,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    match std::fs::read(path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if length < SESSION_KEY_MIN_LEN {
                bytes.zeroize();
                return Err(SessionConfigError::KeyTooShort {
                    path: path.to_path_buf(),
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) => {
            if mode == BuildMode::Debug || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "using temporary session key (dev only)"
                );
                Ok(Key::generate())
            } else {
                Err(SessionConfigError::KeyRead {
                    path: path.to_path_buf(),
                    source: error,
                })
            }
        }
    }
}
