//! Durable storage for the login session.
//!
//! Two keys survive process restarts: the raw bearer token and the
//! JSON-encoded user profile. Both are written on login and removed on
//! logout, never one without the other.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::{fs, io};

/// Storage key holding the raw bearer token string.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key holding the JSON-encoded user profile.
pub const USER_KEY: &str = "user";

/// File-per-key store rooted at the configured session directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Opens the store, creating the directory if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<SessionStore> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(SessionStore { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf { self.dir.join(key) }

    /// Reads a raw value; a missing key is absence, not an error.
    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    pub fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.key_path(key), value)
    }

    /// Removes a key. Removing a key that was never written is fine.
    pub fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    /// JSON-encodes `value` under `key`.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> io::Result<()> {
        let json = serde_json::to_string(value).map_err(io::Error::other)?;
        self.set(key, &json)
    }

    /// Decodes the stored JSON under `key`. Unreadable or malformed content
    /// is treated the same as a missing key.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        serde_json::from_str(&self.get(key)?).ok()
    }
}
