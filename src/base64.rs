//! Base64 encoding to [RFC 4648 §4](https://datatracker.ietf.org/doc/html/rfc4648#section-4)
//! (standard alphabet, `=` padding).
//!
//! Only encoding is provided: the handshake layer emits Base64 (the accept key, the
//! random client key) but never needs to decode it. The output is checked against the
//! `base64` crate in the test suite.

use crate::cursor::ByteCursor;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: char = '=';

/// Encodes `bytes` as a padded Base64 string.
///
/// Input is consumed in 3-byte groups, each emitting 4 characters; a trailing partial
/// group is zero-extended and the missing positions padded with `=`, so the output
/// length is always `4 * ceil(n / 3)`. Arbitrary byte content is accepted — this is an
/// encoder, not a validator.
///
/// ```rust
/// assert_eq!(wscore::base64::encode(b"Man"), "TWFu");
/// assert_eq!(wscore::base64::encode(b"M"), "TQ==");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);

    let mut cur = ByteCursor::new(bytes);
    loop {
        let Some((_, b0)) = cur.next() else { break };
        let b1 = cur.next().map(|(_, b)| b);
        let b2 = cur.next().map(|(_, b)| b);

        // 24-bit group, high byte first; absent bytes contribute zero bits.
        let group = (u32::from(b0) << 16)
            | (u32::from(b1.unwrap_or(0)) << 8)
            | u32::from(b2.unwrap_or(0));

        out.push(ALPHABET[(group >> 18) as usize & 0x3F] as char);
        out.push(ALPHABET[(group >> 12) as usize & 0x3F] as char);

        match (b1, b2) {
            (Some(_), Some(_)) => {
                out.push(ALPHABET[(group >> 6) as usize & 0x3F] as char);
                out.push(ALPHABET[group as usize & 0x3F] as char);
            }
            (Some(_), None) => {
                out.push(ALPHABET[(group >> 6) as usize & 0x3F] as char);
                out.push(PAD);
            }
            (None, _) => {
                out.push(PAD);
                out.push(PAD);
            }
        }
    }

    out
}
