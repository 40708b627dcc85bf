//! # wscore
//! Bit-exact wire primitives for implementing a WebSocket client or handshake layer:
//! RFC 6455 frame-header parsing and payload masking, an RFC 3174 SHA-1 digest, and an
//! RFC 4648 Base64 encoder, all built over a small byte cursor.
//!
//! These pieces carry the only part of a WebSocket stack that demands bit-level
//! correctness: a single off-by-one in a shift or in chunk padding silently corrupts a
//! handshake or a frame boundary with no other symptom. Everything above them — the
//! socket loop, HTTP upgrade headers, message routing — lives outside this crate and
//! consumes these primitives through plain byte slices.
//!
//! # What this crate is not
//! There is no connection lifecycle here, no TLS, and no buffering of partial payloads
//! across calls. The frame parser decodes headers from a byte window the caller already
//! holds; when the window is short it reports exactly how many more bytes it needs and
//! the caller re-invokes it with a larger window.
//!
//! # Handshake example
//! Deriving the `Sec-WebSocket-Accept` value for a client key, per RFC 6455 §1.3:
//!
//! ```rust
//! let accept = wscore::handshake::accept_key("dGhlIHNhbXBsZSBub25jZQ==");
//! assert_eq!(accept, "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
//! ```
//!
//! # Frame parsing example
//! ```rust
//! use wscore::frame::{parse_header, ParseOutcome};
//!
//! // FIN set, text opcode, unmasked, 5-byte payload.
//! match parse_header(&[0x81, 0x05]) {
//!     ParseOutcome::Complete { consumed, header } => {
//!         assert_eq!(consumed, 2);
//!         assert!(header.fin);
//!         assert_eq!(header.length, 5);
//!     }
//!     ParseOutcome::Incomplete(_) => unreachable!(),
//! }
//! ```

pub mod base64;
pub mod bits;
pub mod cursor;
pub mod frame;
pub mod handshake;
mod mask;
pub mod sha1;

pub use cursor::ByteCursor;
pub use frame::{parse_header, FrameHeader, OpCode, ParseOutcome};
pub use mask::apply_mask;

use thiserror::Error;

/// A result type for wire-level operations, using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting wire-level values.
///
/// The set is deliberately small: truncation during header parsing is not an error
/// (it is reported as [`ParseOutcome::Incomplete`]), and the digest, encoder, and
/// masker accept every byte sequence unconditionally. What remains is the handful of
/// bit patterns RFC 6455 reserves.
#[derive(Error, Debug)]
pub enum Error {
    /// A frame carried an opcode value RFC 6455 reserves for future extensions
    /// (0x3-0x7 and 0xB-0xF).
    #[error("Invalid opcode (byte={0})")]
    InvalidOpCode(u8),
}
