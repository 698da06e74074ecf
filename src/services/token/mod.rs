//! Token encode/decode for shareable event links.
//!
//! The whole `EventData` snapshot serializes to JSON and wraps in URL-safe
//! base64 so it can sit in a link's path segment. The token is the only
//! store this application has; whoever produces the newest token wins.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

use crate::models::event_data::EventData;

/// Link scheme the desktop build registers for shared polls.
const LINK_PREFIX: &str = "slotpoll://event/";

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to serialize event data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("token is not valid base64: {0}")]
    Envelope(#[from] base64::DecodeError),
    #[error("token payload is not valid UTF-8: {0}")]
    Payload(#[from] std::string::FromUtf8Error),
    #[error("token payload is not a valid event: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// Encode an event snapshot into an opaque URL-safe token.
pub fn encode(data: &EventData) -> Result<String, TokenError> {
    let json = serde_json::to_string(data).map_err(TokenError::Serialize)?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decode a token back into an event snapshot.
///
/// Malformed tokens are a recoverable condition: callers fall back to the
/// creation view instead of showing partial state.
pub fn decode(token: &str) -> Result<EventData, TokenError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.trim())?;
    let json = String::from_utf8(bytes)?;
    serde_json::from_str(&json).map_err(TokenError::Deserialize)
}

/// The shareable link for a token.
pub fn event_url(token: &str) -> String {
    format!("{}{}", LINK_PREFIX, token)
}

/// Extract the token from a pasted link, tolerating a bare token.
pub fn token_from_url(link: &str) -> &str {
    link.trim()
        .strip_prefix(LINK_PREFIX)
        .unwrap_or_else(|| link.trim())
}
