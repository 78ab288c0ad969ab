//! Persisted state encoding.
//!
//! The state is serialized to JSON and then base64-encoded, so the stored
//! value is plain printable ASCII whatever backend holds it.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::core::GameState;

/// Why an encoded state could not be read back.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded state is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode a state for storage.
pub fn encode_state(state: &GameState) -> Result<String, CodecError> {
    let json = serde_json::to_string(state)?;
    Ok(STANDARD.encode(json))
}

/// Decode a stored state.
///
/// Surrounding whitespace is ignored. The decoded cubes are not checked for
/// well-formedness.
pub fn decode_state(encoded: &str) -> Result<GameState, CodecError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
