//! Session persistence.
//!
//! Sessions can be saved to a JSON file between runs, or packed into a short
//! URL-safe token for sharing a set of parameters.

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use bulbwonder_core::get_explorer_config;
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use serde::{Deserialize, Serialize};

use crate::{PersistenceError, Session, SessionConfig};

const SHARE_TOKEN_PREFIX: &str = "v1:";

/// Session state as written to disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    /// Selected explorer configuration ID
    pub explorer_id: String,
    pub config: SessionConfig,
    /// Schema version for future migrations
    version: u32,
}

impl PersistedSession {
    const CURRENT_VERSION: u32 = 1;

    pub fn new(session: &Session) -> Self {
        Self {
            explorer_id: session.explorer().id.to_string(),
            config: *session.config(),
            version: Self::CURRENT_VERSION,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Rebuild the session, re-validating its parameters.
    pub fn into_session(self) -> Result<Session, PersistenceError> {
        let explorer = get_explorer_config(&self.explorer_id)
            .ok_or(PersistenceError::UnknownExplorer(self.explorer_id))?;
        Ok(Session::with_config(explorer, self.config)?)
    }

    fn check_version(&self) -> Result<(), PersistenceError> {
        if self.version == Self::CURRENT_VERSION {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                expected: Self::CURRENT_VERSION,
            })
        }
    }
}

/// Write the session to `path` as pretty-printed JSON.
pub fn save_session(path: &Path, state: &PersistedSession) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    log::info!("Saved session to {}", path.display());
    Ok(())
}

/// Load a session saved by [`save_session`].
///
/// Returns `Ok(None)` if the file does not exist or holds an older schema
/// version; the latter is logged and ignored.
pub fn load_session(path: &Path) -> Result<Option<PersistedSession>, PersistenceError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let state: PersistedSession = serde_json::from_str(&json)?;
    match state.check_version() {
        Ok(()) => {
            log::info!(
                "Loaded session from {}: explorer={}",
                path.display(),
                state.explorer_id
            );
            Ok(Some(state))
        }
        Err(e) => {
            log::warn!("Ignoring session file {}: {}", path.display(), e);
            Ok(None)
        }
    }
}

/// Encode a session to a compressed, URL-safe string.
pub fn encode_share_token(state: &PersistedSession) -> Result<String, PersistenceError> {
    let json = serde_json::to_string(state)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes())?;
    let compressed = encoder.finish()?;

    let encoded = URL_SAFE_NO_PAD.encode(&compressed);
    Ok(format!("{SHARE_TOKEN_PREFIX}{encoded}"))
}

/// Decode a token produced by [`encode_share_token`].
pub fn decode_share_token(token: &str) -> Result<PersistedSession, PersistenceError> {
    let data = token
        .strip_prefix(SHARE_TOKEN_PREFIX)
        .ok_or_else(|| PersistenceError::Token(format!("missing '{SHARE_TOKEN_PREFIX}' prefix")))?;

    let compressed = URL_SAFE_NO_PAD
        .decode(data)
        .map_err(|e| PersistenceError::Token(e.to_string()))?;

    let mut decoder = DeflateDecoder::new(&compressed[..]);
    let mut json = String::new();
    decoder
        .read_to_string(&mut json)
        .map_err(|e| PersistenceError::Token(e.to_string()))?;

    let state: PersistedSession = serde_json::from_str(&json)?;
    state.check_version()?;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamDelta;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("bulbwonder-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn save_then_load_restores_session() {
        let session = Session::default()
            .apply(ParamDelta::IncreaseResolution)
            .unwrap();
        let path = temp_path("save-load");

        save_session(&path, &PersistedSession::new(&session)).unwrap();
        let loaded = load_session(&path).unwrap().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded.version(), 1);
        assert_eq!(loaded.into_session().unwrap(), session);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let path = temp_path("missing");
        assert!(load_session(&path).unwrap().is_none());
    }

    #[test]
    fn old_version_file_is_ignored() {
        let path = temp_path("old-version");
        fs::write(
            &path,
            r#"{"explorer_id":"mandelbulb","config":{"power":8.0,"resolution":50,"max_iterations":20},"version":0}"#,
        )
        .unwrap();
        let loaded = load_session(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn share_token_has_prefix_and_decodes() {
        let session = Session::default().apply(ParamDelta::DecreasePower).unwrap();
        let token = encode_share_token(&PersistedSession::new(&session)).unwrap();

        assert!(token.starts_with("v1:"));
        assert!(!token.contains(['+', '/', '=']));

        let decoded = decode_share_token(&token).unwrap();
        assert_eq!(decoded.config.power, 7.5);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            decode_share_token("abc"),
            Err(PersistenceError::Token(_))
        ));
        assert!(matches!(
            decode_share_token("v1:!!!"),
            Err(PersistenceError::Token(_))
        ));
    }

    #[test]
    fn unknown_explorer_is_rejected() {
        let mut state = PersistedSession::new(&Session::default());
        state.explorer_id = "mandelbrot".to_string();
        assert!(matches!(
            state.into_session(),
            Err(PersistenceError::UnknownExplorer(id)) if id == "mandelbrot"
        ));
    }
}
