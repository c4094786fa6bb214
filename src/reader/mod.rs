#![doc = r#"
A bounds-checked cursor over an immutable blob.

Every multi-byte read and every tag search in this crate goes through
[`Reader`]. A read that would run past the end of the blob yields
[`ReaderErrorKind::OutOfBounds`] and leaves the cursor untouched.
"#]

mod error;
pub use error::*;

/// A read-only cursor over a borrowed byte slice.
///
/// Cloning a reader is cheap and never copies the underlying bytes.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'slc> {
    data: &'slc [u8],
    position: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader positioned at the start of `data`
    pub const fn from_byte_slice(data: &'slc [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Create a reader positioned at `position` within `data`
    pub const fn at(data: &'slc [u8], position: usize) -> Self {
        Self { data, position }
    }

    /// The full blob this reader views
    pub const fn buffer(&self) -> &'slc [u8] {
        self.data
    }

    /// Absolute offset of the cursor
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Positions past the end are allowed; subsequent reads will fail.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Total length of the blob
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the blob is empty
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes between the cursor and the end of the blob
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// True if the cursor is at or beyond the end of the blob
    pub const fn is_eof(&self) -> bool {
        self.position >= self.data.len()
    }

    /// Returns `len` bytes starting at the absolute offset `start`.
    pub fn slice_at(&self, start: usize, len: usize) -> ReadResult<&'slc [u8]> {
        let end = start
            .checked_add(len)
            .ok_or(ReaderError::oob(start))?;
        self.data.get(start..end).ok_or(ReaderError::oob(start))
    }

    /// Returns `len` bytes at the cursor and advances past them
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&'slc [u8]> {
        let slice = self.slice_at(self.position, len)?;
        self.position += len;
        Ok(slice)
    }

    /// Reads a fixed number of bytes at the cursor and advances past them
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let slice = self.slice_at(self.position, N)?;
        let mut out = [0; N];
        out.copy_from_slice(slice);
        self.position += N;
        Ok(out)
    }

    /// Reads a big-endian `u16`
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Reads a big-endian `u32`
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// True if `tag` is fully present at the absolute offset `position`.
    ///
    /// A tag that would extend past the end of the blob never matches.
    pub fn tag_at(&self, position: usize, tag: &[u8; 4]) -> bool {
        self.slice_at(position, tag.len())
            .is_ok_and(|bytes| bytes == tag)
    }

    /// True if `tag` is present at the cursor
    pub fn at_tag(&self, tag: &[u8; 4]) -> bool {
        self.tag_at(self.position, tag)
    }

    /// Consumes `tag` at the cursor, or fails with a tag mismatch.
    pub fn expect_tag(&mut self, tag: &[u8; 4]) -> ReadResult<()> {
        if !self.at_tag(tag) {
            return Err(ReaderError::tag_mismatch(self.position, *tag));
        }
        self.position += tag.len();
        Ok(())
    }

    /// Counts every occurrence of `tag` from the cursor up to (not including)
    /// the first occurrence of `stop`, or the end of the blob.
    pub fn count_tags_until(&self, tag: &[u8; 4], stop: &[u8; 4]) -> usize {
        let tail = self.data.get(self.position..).unwrap_or_default();
        let mut count = 0;
        for window in tail.windows(4) {
            if window == stop {
                break;
            }
            if window == tag {
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_fields() {
        let bytes = [0x00, 0x00, 0x01, 0x02, 0xAB, 0xCD];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u32_be().unwrap(), 0x0102);
        assert_eq!(reader.read_u16_be().unwrap(), 0xABCD);
        assert!(reader.is_eof());
    }

    #[test]
    fn out_of_bounds_leaves_cursor_untouched() {
        let bytes = [0x00, 0x01, 0x02];
        let mut reader = Reader::from_byte_slice(&bytes);
        let err = reader.read_u32_be().unwrap_err();
        assert!(err.is_out_of_bounds());
        assert_eq!(err.position(), 0);
        assert_eq!(reader.buffer_position(), 0);
    }

    #[test]
    fn slice_at_rejects_overflowing_ranges() {
        let bytes = [0u8; 8];
        let reader = Reader::from_byte_slice(&bytes);
        assert!(reader.slice_at(usize::MAX, 2).is_err());
        assert!(reader.slice_at(6, 3).is_err());
        assert_eq!(reader.slice_at(6, 2).unwrap(), &[0, 0]);
    }

    #[test]
    fn tag_at_end_of_blob_does_not_match() {
        let bytes = b"xxMTr";
        let reader = Reader::from_byte_slice(bytes);
        assert!(!reader.tag_at(2, b"MTrk"));
        assert!(!reader.tag_at(100, b"MTrk"));
    }

    #[test]
    fn expect_tag_reports_mismatch() {
        let mut reader = Reader::at(b"..MThd", 2);
        let err = reader.expect_tag(b"MTrk").unwrap_err();
        assert!(err.is_tag_mismatch());
        assert_eq!(err.position(), 2);
        reader.expect_tag(b"MThd").unwrap();
        assert_eq!(reader.buffer_position(), 6);
    }

    #[test]
    fn counts_tags_up_to_stop_tag() {
        let bytes = b"MTrk..MTrk..MThd..MTrk";
        let reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.count_tags_until(b"MTrk", b"MThd"), 2);
        let reader = Reader::at(bytes, 16);
        assert_eq!(reader.count_tags_until(b"MTrk", b"MThd"), 1);
    }
}
