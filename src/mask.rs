//! WebSocket payload masking, [RFC 6455 §5.3](https://datatracker.ietf.org/doc/html/rfc6455#section-5.3).
//!
//! Client-to-server payloads are XORed with a 4-byte key that cycles from payload
//! index 0; the transform is its own inverse, so the same call masks and unmasks.
//! The key is carried as the big-endian `u32` the header parser produced, and its
//! first transmitted octet (the most-significant byte) lines up with payload index 0.

use bytes::{Bytes, BytesMut};

/// Masks (or unmasks) `payload` with `mask`, returning a freshly allocated buffer.
///
/// The caller's buffer is never mutated. Applying the transform twice with the same
/// key restores the original payload; the empty payload maps to itself.
///
/// ```rust
/// use wscore::apply_mask;
///
/// let masked = apply_mask(0x37FA213D, b"Hello");
/// let unmasked = apply_mask(0x37FA213D, &masked);
/// assert_eq!(&unmasked[..], b"Hello");
/// ```
pub fn apply_mask(mask: u32, payload: &[u8]) -> Bytes {
    let mut buf = BytesMut::from(payload);
    mask_in_place(&mut buf, mask.to_be_bytes());
    buf.freeze()
}

/// XORs `buf` with the cycling 4-byte key, 4-byte blocks at a time.
fn mask_in_place(buf: &mut [u8], key: [u8; 4]) {
    let key_u32 = u32::from_ne_bytes(key);

    let (prefix, words, suffix) = unsafe { buf.align_to_mut::<u32>() };
    mask_fallback(prefix, key);
    let head = prefix.len() & 3;
    let key_u32 = if head > 0 {
        if cfg!(target_endian = "big") {
            key_u32.rotate_left(8 * head as u32)
        } else {
            key_u32.rotate_right(8 * head as u32)
        }
    } else {
        key_u32
    };
    for word in words.iter_mut() {
        *word ^= key_u32;
    }
    mask_fallback(suffix, key_u32.to_ne_bytes());
}

/// Byte-at-a-time masking for the unaligned head and tail.
fn mask_fallback(buf: &mut [u8], key: [u8; 4]) {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte ^= key[i & 3];
    }
}
