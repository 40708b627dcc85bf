//! Byte-wise cursor over an immutable buffer.
//!
//! [`ByteCursor`] is the foundation every parser in this crate is driven by. It borrows
//! a byte slice for its lifetime, never copies it, and walks it one octet at a time
//! while reporting 1-based positions, so a caller can always answer "how many bytes
//! have been consumed so far" — the question the incremental frame-header parser is
//! built around.

/// A streaming cursor over a borrowed, read-only byte buffer.
///
/// Positions are 1-based: the first byte of the buffer is at position 1, and each
/// successful [`next`](Iterator::next) reports the position of the byte it just read.
/// Reading past the end yields `None` and leaves the position where it is, so an
/// exhausted cursor stays exhausted until it is re-[`seek`](ByteCursor::seek)ed.
///
/// ```rust
/// use wscore::ByteCursor;
///
/// let mut cur = ByteCursor::new(b"ab");
/// assert_eq!(cur.next(), Some((1, b'a')));
/// assert_eq!(cur.next(), Some((2, b'b')));
/// assert_eq!(cur.next(), None);
///
/// cur.seek(1);
/// assert_eq!(cur.next(), Some((1, b'a')));
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    /// 1-based position of the next byte to read.
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor positioned before the first byte of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 1 }
    }

    /// Repositions the cursor so the next read returns the byte at the 1-based
    /// `position`. Seeking past the end is allowed; the next read then yields `None`.
    pub fn seek(&mut self, position: usize) {
        self.pos = position.max(1);
    }

    /// Number of bytes already read (equivalently, the 0-based offset of the next
    /// unread byte).
    pub fn consumed(&self) -> usize {
        (self.pos - 1).min(self.buf.len())
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.consumed()
    }

    /// Reads a big-endian `u16`, or `None` if fewer than 2 bytes remain.
    ///
    /// On `None` the cursor does not move; the multi-byte readers are all-or-nothing
    /// so a short window never leaves the cursor mid-field.
    pub fn read_u16_be(&mut self) -> Option<u16> {
        let bytes = self.read_array::<2>()?;
        Some(u16::from_be_bytes(bytes))
    }

    /// Reads a big-endian `u32`, or `None` if fewer than 4 bytes remain.
    pub fn read_u32_be(&mut self) -> Option<u32> {
        let bytes = self.read_array::<4>()?;
        Some(u32::from_be_bytes(bytes))
    }

    /// Reads a big-endian `u64`, or `None` if fewer than 8 bytes remain.
    pub fn read_u64_be(&mut self) -> Option<u64> {
        let bytes = self.read_array::<8>()?;
        Some(u64::from_be_bytes(bytes))
    }

    fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        if self.remaining() < N {
            return None;
        }
        let start = self.pos - 1;
        let bytes: [u8; N] = self.buf[start..start + N].try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }
}

impl Iterator for ByteCursor<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.buf.get(self.pos - 1)?;
        let pos = self.pos;
        self.pos += 1;
        Some((pos, byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.remaining();
        (rem, Some(rem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_reports_one_based_positions() {
        let cur = ByteCursor::new(&[0xAA, 0xBB, 0xCC]);
        let read: Vec<(usize, u8)> = cur.collect();
        assert_eq!(read, vec![(1, 0xAA), (2, 0xBB), (3, 0xCC)]);
    }

    #[test]
    fn test_exhausted_cursor_does_not_advance() {
        let mut cur = ByteCursor::new(&[0x01]);
        assert_eq!(cur.next(), Some((1, 0x01)));
        assert_eq!(cur.next(), None);
        assert_eq!(cur.next(), None);
        assert_eq!(cur.consumed(), 1);
    }

    #[test]
    fn test_empty_buffer() {
        let mut cur = ByteCursor::new(&[]);
        assert_eq!(cur.next(), None);
        assert_eq!(cur.consumed(), 0);
        assert_eq!(cur.remaining(), 0);
    }

    #[test]
    fn test_seek_rewinds_before_next_read() {
        let mut cur = ByteCursor::new(b"xyz");
        cur.next();
        cur.next();
        cur.seek(2);
        assert_eq!(cur.next(), Some((2, b'y')));
    }

    #[test]
    fn test_seek_past_end_then_back() {
        let mut cur = ByteCursor::new(b"ok");
        cur.seek(100);
        assert_eq!(cur.next(), None);
        cur.seek(1);
        assert_eq!(cur.next(), Some((1, b'o')));
    }

    #[test]
    fn test_seek_clamps_to_first_position() {
        let mut cur = ByteCursor::new(b"a");
        cur.seek(0);
        assert_eq!(cur.next(), Some((1, b'a')));
    }

    #[test]
    fn test_consumed_and_remaining_track_reads() {
        let mut cur = ByteCursor::new(&[1, 2, 3, 4]);
        assert_eq!(cur.remaining(), 4);
        cur.next();
        cur.next();
        assert_eq!(cur.consumed(), 2);
        assert_eq!(cur.remaining(), 2);
    }

    #[test]
    fn test_big_endian_readers() {
        let mut cur = ByteCursor::new(&[0x01, 0x02, 0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(cur.read_u16_be(), Some(0x0102));
        assert_eq!(cur.read_u32_be(), Some(0xDEADBEEF));
        assert_eq!(cur.consumed(), 6);
    }

    #[test]
    fn test_big_endian_reader_short_window_leaves_cursor_in_place() {
        let mut cur = ByteCursor::new(&[0x01, 0x02, 0x03]);
        assert_eq!(cur.read_u64_be(), None);
        assert_eq!(cur.consumed(), 0);
        // A narrower read still succeeds from the same position.
        assert_eq!(cur.read_u16_be(), Some(0x0102));
    }

    #[test]
    fn test_read_u64_be() {
        let mut cur = ByteCursor::new(&[0, 0, 0, 0, 0, 0, 0x01, 0x00]);
        assert_eq!(cur.read_u64_be(), Some(256));
        assert_eq!(cur.remaining(), 0);
    }
}
