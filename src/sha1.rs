//! SHA-1 message digest, implemented to [RFC 3174](https://datatracker.ietf.org/doc/html/rfc3174).
//!
//! The handshake layer digests the client's `Sec-WebSocket-Key` concatenated with the
//! protocol GUID to derive the `Sec-WebSocket-Accept` value, so the digest here has to
//! match the standard bit-for-bit; it is checked against the `sha1` crate in the test
//! suite. SHA-1 is long broken for collision resistance, but RFC 6455 pins it for the
//! handshake and nothing here uses it for anything security-sensitive.
//!
//! The compression rounds are built on the [`bits`](crate::bits) helpers rather than
//! open-coded expressions so the round functions can be verified in isolation.

use crate::bits;
use crate::cursor::ByteCursor;

/// Number of bytes in a SHA-1 digest.
pub const DIGEST_SIZE: usize = 20;

const CHUNK_SIZE: usize = 64;

/// Initial accumulator words, RFC 3174 §6.1.
const H0: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// The four 20-round bands of the SHA-1 compression function, each pairing a round
/// function with its additive constant (RFC 3174 §5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundBand {
    /// Rounds 0-19: `Ch(b, c, d)` with K = 0x5A827999.
    Choice,
    /// Rounds 20-39: `b ^ c ^ d` with K = 0x6ED9EBA1.
    Parity,
    /// Rounds 40-59: `Maj(b, c, d)` with K = 0x8F1BBCDC.
    Majority,
    /// Rounds 60-79: `b ^ c ^ d` again, with K = 0xCA62C1D6.
    ParityFinal,
}

impl RoundBand {
    fn of(round: usize) -> Self {
        match round {
            0..=19 => Self::Choice,
            20..=39 => Self::Parity,
            40..=59 => Self::Majority,
            60..=79 => Self::ParityFinal,
            _ => unreachable!("SHA-1 has exactly 80 rounds"),
        }
    }

    fn constant(self) -> u32 {
        match self {
            Self::Choice => 0x5A827999,
            Self::Parity => 0x6ED9EBA1,
            Self::Majority => 0x8F1BBCDC,
            Self::ParityFinal => 0xCA62C1D6,
        }
    }

    fn apply(self, b: u32, c: u32, d: u32) -> u32 {
        match self {
            Self::Choice => bits::choose(b, c, d),
            Self::Parity | Self::ParityFinal => bits::xor_all(&[b, c, d]),
            Self::Majority => bits::majority(b, c, d),
        }
    }
}

/// Computes the 20-byte SHA-1 digest of `message`.
///
/// Every byte sequence, including the empty one, is valid input.
///
/// ```rust
/// let d = wscore::sha1::digest(b"abc");
/// assert_eq!(d[0], 0xA9);
/// assert_eq!(d[19], 0x9D);
/// ```
pub fn digest(message: &[u8]) -> [u8; DIGEST_SIZE] {
    let padded = pad(message);
    debug_assert!(padded.len() % CHUNK_SIZE == 0);

    let mut h = H0;
    for chunk in padded.chunks_exact(CHUNK_SIZE) {
        compress(&mut h, chunk);
    }

    let mut out = [0u8; DIGEST_SIZE];
    for (i, word) in h.iter().enumerate() {
        out[i * 4..(i + 1) * 4].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// RFC 3174 §4 padding: a single 0x80 byte, zeros to 56 mod 64, then the original
/// message length in bits as a big-endian u64.
fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64) * 8;

    let mut padded = Vec::with_capacity((message.len() + 9).next_multiple_of(CHUNK_SIZE));
    padded.extend_from_slice(message);
    padded.push(0x80);
    while padded.len() % CHUNK_SIZE != 56 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

/// Runs the 80-round compression function over one 64-byte chunk, folding the result
/// into the running accumulators.
fn compress(h: &mut [u32; 5], chunk: &[u8]) {
    // Sixteen big-endian words, extended to the 80-word message schedule.
    let mut w = [0u32; 80];
    let mut cur = ByteCursor::new(chunk);
    for word in w.iter_mut().take(16) {
        // chunks_exact guarantees 64 bytes, so all 16 reads succeed.
        *word = cur.read_u32_be().expect("chunk is 64 bytes");
    }
    for i in 16..80 {
        let parity = bits::xor_all(&[w[i - 3], w[i - 8], w[i - 14], w[i - 16]]);
        w[i] = bits::rotate_left(parity, 1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;

    for (i, &word) in w.iter().enumerate() {
        let band = RoundBand::of(i);
        let f = band.apply(b, c, d);
        let new_a = bits::rotate_left(a, 5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(band.constant())
            .wrapping_add(word);
        e = d;
        d = c;
        c = bits::rotate_left(b, 30);
        b = a;
        a = new_a;
    }

    h[0] = h[0].wrapping_add(a);
    h[1] = h[1].wrapping_add(b);
    h[2] = h[2].wrapping_add(c);
    h[3] = h[3].wrapping_add(d);
    h[4] = h[4].wrapping_add(e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha1::Digest;

    fn hex_digest(message: &[u8]) -> String {
        hex::encode(digest(message))
    }

    /// RFC 3174 / FIPS 180 known-answer vectors.
    mod known_answers {
        use super::*;

        #[test]
        fn test_empty_message() {
            assert_eq!(hex_digest(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
        }

        #[test]
        fn test_abc() {
            assert_eq!(hex_digest(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
        }

        #[test]
        fn test_two_block_message() {
            assert_eq!(
                hex_digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
                "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
            );
        }

        #[test]
        fn test_million_a() {
            let message = vec![b'a'; 1_000_000];
            assert_eq!(
                hex_digest(&message),
                "34aa973cd4c4daa4f61eeb2bdbad27316534016f"
            );
        }
    }

    #[test]
    fn test_padding_length_is_chunk_multiple() {
        for len in 0..130 {
            let message = vec![0xABu8; len];
            let padded = pad(&message);
            assert_eq!(padded.len() % CHUNK_SIZE, 0, "message length {}", len);
            assert_eq!(padded[len], 0x80);
            let bit_len = u64::from_be_bytes(padded[padded.len() - 8..].try_into().unwrap());
            assert_eq!(bit_len, (len as u64) * 8);
        }
    }

    #[test]
    fn test_round_band_boundaries() {
        assert_eq!(RoundBand::of(0), RoundBand::Choice);
        assert_eq!(RoundBand::of(19), RoundBand::Choice);
        assert_eq!(RoundBand::of(20), RoundBand::Parity);
        assert_eq!(RoundBand::of(39), RoundBand::Parity);
        assert_eq!(RoundBand::of(40), RoundBand::Majority);
        assert_eq!(RoundBand::of(59), RoundBand::Majority);
        assert_eq!(RoundBand::of(60), RoundBand::ParityFinal);
        assert_eq!(RoundBand::of(79), RoundBand::ParityFinal);
    }

    /// Differential check against the `sha1` crate around every padding boundary.
    #[test]
    fn test_matches_reference_implementation() {
        for len in [0, 1, 3, 54, 55, 56, 57, 63, 64, 65, 119, 120, 127, 128, 200] {
            let message: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();

            let mut reference = sha1::Sha1::new();
            reference.update(&message);
            let expected: [u8; DIGEST_SIZE] = reference.finalize().into();

            assert_eq!(digest(&message), expected, "message length {}", len);
        }
    }

    #[test]
    fn test_digest_is_deterministic() {
        let message = b"GET /chat HTTP/1.1";
        assert_eq!(digest(message), digest(message));
    }
}
