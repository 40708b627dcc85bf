//! # Frame headers
//!
//! The `frame` module decodes and encodes WebSocket frame headers as defined in
//! [RFC 6455 Section 5.2](https://datatracker.ietf.org/doc/html/rfc6455#section-5.2).
//! It deals only in headers: payload extraction, fragment reassembly, and control-frame
//! policy belong to the dispatcher sitting above this crate.
//!
//! ### Frame binary format
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-------+-+-------------+-------------------------------+
//! |F|R|R|R| opcode|M| Payload len |    Extended payload length    |
//! |I|S|S|S|  (4)  |A|     (7)     |         (16 or 64 bits)       |
//! |N|V|V|V|       |S|             |                               |
//! | |1|2|3|       |K|             |                               |
//! +-+-+-+-+-------+-+-------------+-------------------------------+
//! |        Extended payload length continued, if payload len == 127|
//! +---------------------------------------------------------------+
//! |                               |   Masking-key, if MASK set to 1|
//! +-------------------------------+-------------------------------+
//! |     Masking-key (continued)       |          Payload Data      |
//! +-----------------------------------+ - - - - - - - - - - - - - -+
//! ```
//!
//! ### Incremental parsing
//!
//! [`parse_header`] works over whatever byte window the caller currently holds. A
//! short window is not an error: the parser reports the exact number of additional
//! bytes it needs as [`ParseOutcome::Incomplete`], and the caller re-invokes it once
//! the socket has delivered them. The fields disclose themselves in wire order — the
//! two base bytes fix the extended-length width and mask presence, the extended length
//! is read next, the mask key last — so the reported shortfall is always the precise
//! deficit to the end of the header, never a generic "need more".
//!
//! On success the parser reports how many bytes the header occupied; the payload
//! starts at exactly that offset in the caller's window.

use crate::cursor::ByteCursor;
use crate::Error;

/// Largest possible header: 2 base bytes + 8 extended-length bytes + 4 mask bytes.
pub const MAX_HEADER_SIZE: usize = 14;

const FIN_BIT: u8 = 0b1000_0000;
const RSV_BITS: [u8; 3] = [0b0100_0000, 0b0010_0000, 0b0001_0000];
const MASK_BIT: u8 = 0b1000_0000;

/// WebSocket operation code (OpCode) that determines the semantic meaning of a frame.
///
/// [`FrameHeader`] carries the opcode as the raw 4-bit field so reserved values pass
/// through the parser untouched; this enum is the interpretive layer for dispatchers
/// that want to act on it. The numeric values are defined in
/// [RFC 6455, Section 11.8](https://datatracker.ietf.org/doc/html/rfc6455#section-11.8).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpCode {
    Continuation,
    Text,
    Binary,
    Close,
    Ping,
    Pong,
}

impl OpCode {
    /// Returns `true` if the `OpCode` represents a control frame (`Close`, `Ping`, or
    /// `Pong`).
    ///
    /// Control frames manage the connection state and carry special constraints:
    /// they cannot be fragmented and their payloads must not exceed 125 bytes.
    pub fn is_control(&self) -> bool {
        matches!(*self, OpCode::Close | OpCode::Ping | OpCode::Pong)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = Error;

    /// Attempts to convert a byte value into an `OpCode`.
    ///
    /// The reserved ranges 0x3-0x7 and 0xB-0xF yield [`Error::InvalidOpCode`].
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(Self::Continuation),
            0x1 => Ok(Self::Text),
            0x2 => Ok(Self::Binary),
            0x8 => Ok(Self::Close),
            0x9 => Ok(Self::Ping),
            0xA => Ok(Self::Pong),
            _ => Err(Error::InvalidOpCode(value)),
        }
    }
}

impl From<OpCode> for u8 {
    /// Converts an `OpCode` into its corresponding byte representation.
    fn from(val: OpCode) -> Self {
        match val {
            OpCode::Continuation => 0x0,
            OpCode::Text => 0x1,
            OpCode::Binary => 0x2,
            OpCode::Close => 0x8,
            OpCode::Ping => 0x9,
            OpCode::Pong => 0xA,
        }
    }
}

/// A fully decoded WebSocket frame header.
///
/// Immutable once constructed; the parser returns it by value and retains nothing.
/// `length` always holds the resolved payload length — the three wire encodings
/// (7-bit literal, 16-bit extended, 64-bit extended) collapse into it, so callers
/// never see the raw length code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Final-fragment flag.
    pub fin: bool,
    /// The three reserved extension bits, passed through unmodified.
    pub rsv: [bool; 3],
    /// Raw 4-bit opcode field. Interpret with [`OpCode::try_from`] when dispatching.
    pub opcode: u8,
    /// Resolved payload length in bytes.
    pub length: u64,
    /// Masking key, present iff the MASK bit was set. The most-significant byte is
    /// the first key octet on the wire, as [`apply_mask`](crate::apply_mask) expects.
    pub mask: Option<u32>,
}

impl FrameHeader {
    /// Serializes the header into `head`, returning the number of bytes written.
    ///
    /// The payload length is emitted in its shortest wire form: a 7-bit literal below
    /// 126, the 16-bit extended encoding below 65536, the 64-bit encoding otherwise.
    ///
    /// # Panics
    /// Panics if `head` is shorter than the encoded header; [`MAX_HEADER_SIZE`] bytes
    /// always suffice.
    pub fn write_to(&self, head: &mut [u8]) -> usize {
        head[0] = u8::from(self.fin) << 7 | self.opcode & 0x0F;
        for (bit, &set) in RSV_BITS.iter().zip(&self.rsv) {
            if set {
                head[0] |= bit;
            }
        }

        let size = if self.length < 126 {
            head[1] = self.length as u8;
            2
        } else if self.length < 65536 {
            head[1] = 126;
            head[2..4].copy_from_slice(&(self.length as u16).to_be_bytes());
            4
        } else {
            head[1] = 127;
            head[2..10].copy_from_slice(&self.length.to_be_bytes());
            10
        };

        if let Some(mask) = self.mask {
            head[1] |= MASK_BIT;
            head[size..size + 4].copy_from_slice(&mask.to_be_bytes());
            size + 4
        } else {
            size
        }
    }
}

/// Result of a [`parse_header`] call.
///
/// Truncation is the only way a header can fail to decode: RFC 6455's fixed bit
/// layout leaves no malformed state for the remaining fields to be in, so there is no
/// error variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The window ends before the header does. Carries the exact number of additional
    /// bytes (≥ 1) required before re-invoking the parser can succeed.
    Incomplete(usize),
    /// A fully decoded header.
    Complete {
        /// Number of header bytes consumed; the payload begins at this offset.
        consumed: usize,
        /// The decoded header.
        header: FrameHeader,
    },
}

/// Parses a WebSocket frame header from the front of `window`.
///
/// Performs no payload extraction and retains no state between calls: on
/// [`ParseOutcome::Incomplete`] the caller grows the window and re-invokes with the
/// same leading bytes.
pub fn parse_header(window: &[u8]) -> ParseOutcome {
    let mut cur = ByteCursor::new(window);

    // The two base bytes fix the size of everything that follows.
    let Some((_, b0)) = cur.next() else {
        return ParseOutcome::Incomplete(2);
    };
    let Some((_, b1)) = cur.next() else {
        return ParseOutcome::Incomplete(1);
    };

    let fin = b0 & FIN_BIT != 0;
    let rsv = [
        b0 & RSV_BITS[0] != 0,
        b0 & RSV_BITS[1] != 0,
        b0 & RSV_BITS[2] != 0,
    ];
    let opcode = b0 & 0x0F;
    let masked = b1 & MASK_BIT != 0;
    let length_code = b1 & 0x7F;

    let extra = match length_code {
        126 => 2,
        127 => 8,
        _ => 0,
    };
    let required = 2 + extra + if masked { 4 } else { 0 };

    let length = match length_code {
        126 => match cur.read_u16_be() {
            Some(len) => u64::from(len),
            None => return ParseOutcome::Incomplete(required - window.len()),
        },
        127 => match cur.read_u64_be() {
            Some(len) => len,
            None => return ParseOutcome::Incomplete(required - window.len()),
        },
        code => u64::from(code),
    };

    let mask = if masked {
        match cur.read_u32_be() {
            Some(key) => Some(key),
            None => return ParseOutcome::Incomplete(required - window.len()),
        }
    } else {
        None
    };

    ParseOutcome::Complete {
        consumed: cur.consumed(),
        header: FrameHeader {
            fin,
            rsv,
            opcode,
            length,
            mask,
        },
    }
}
