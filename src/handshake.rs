//! Handshake key material, [RFC 6455 §1.3](https://datatracker.ietf.org/doc/html/rfc6455#section-1.3).
//!
//! The opening handshake proves the peer speaks WebSocket rather than plain HTTP: the
//! client sends a random `Sec-WebSocket-Key`, and the server must answer with the
//! SHA-1 of that key concatenated with a fixed GUID, Base64-encoded, in
//! `Sec-WebSocket-Accept`. Header construction itself happens outside this crate;
//! these functions produce the values that go into those headers.

use crate::{base64, sha1};

/// The GUID every WebSocket handshake concatenates to the client key (RFC 6455 §1.3).
pub const WEBSOCKET_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Derives the `Sec-WebSocket-Accept` value for a client `Sec-WebSocket-Key`.
///
/// Deterministic: identical keys always produce identical accept values, which is how
/// the client verifies the server actually processed its key.
///
/// ```rust
/// use wscore::handshake::accept_key;
///
/// // The example exchange from RFC 6455 §1.3.
/// assert_eq!(
///     accept_key("dGhlIHNhbXBsZSBub25jZQ=="),
///     "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=",
/// );
/// ```
pub fn accept_key(key: &str) -> String {
    let mut material = Vec::with_capacity(key.len() + WEBSOCKET_GUID.len());
    material.extend_from_slice(key.as_bytes());
    material.extend_from_slice(WEBSOCKET_GUID.as_bytes());
    base64::encode(&sha1::digest(&material))
}

/// Generates a fresh `Sec-WebSocket-Key`: 16 random bytes, Base64-encoded.
pub fn generate_key() -> String {
    let nonce: [u8; 16] = rand::random();
    base64::encode(&nonce)
}
