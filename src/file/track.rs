use tracing::{debug, warn};

use crate::{
    file::{END_OF_TRACK, HEADER_TAG, TRACK_PREAMBLE_LEN, TRACK_TAG},
    reader::{ReadResult, Reader},
};

/// How a track's payload was repaired.
///
/// Every repair appends a synthetic [`END_OF_TRACK`] that was never in the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repair {
    /// A header chunk was found inside the payload. The payload was cut just
    /// before it, and the header is left in place for the scanner.
    Overwritten {
        /// Absolute offset of the embedded `MThd` tag
        header_at: usize,
    },
    /// No end-of-track marker and no embedded header. The whole declared
    /// payload was kept.
    Unterminated,
    /// The declared payload runs past the end of the blob. Whatever was
    /// available was kept.
    Truncated {
        /// Declared bytes that are missing from the blob
        missing: usize,
    },
}

#[doc = r#"
One carved track chunk.

The payload always ends with an end-of-track marker (either the full
`00 FF 2F 00` or the 3-byte `FF 2F 00` form), possibly a synthetic one. See
[`Track::repair`].
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    declared_len: u32,
    repair: Option<Repair>,
    data: Vec<u8>,
}

impl Track {
    /// Parses a track chunk at the reader's position.
    ///
    /// Returns the track together with the number of blob bytes it consumed,
    /// and advances the reader by that amount. The consumed length never
    /// counts the synthetic trailer of a repaired track, since those bytes
    /// do not exist in the blob.
    ///
    /// # Errors
    /// - the reader is not positioned on an `MTrk` tag
    /// - the blob ends inside the tag or length field
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<(Self, usize)> {
        let start = reader.buffer_position();
        let mut cursor = *reader;
        cursor.expect_tag(TRACK_TAG)?;
        let declared_len = cursor.read_u32_be()?;
        debug!(offset = start, declared_len, "track chunk");

        let payload_start = start + TRACK_PREAMBLE_LEN;
        let payload_end = payload_start.saturating_add(declared_len as usize);
        let available_end = payload_end.min(reader.len());
        let payload = reader.slice_at(payload_start, available_end - payload_start)?;

        let (track, consumed) = if available_end < payload_end {
            let missing = payload_end - available_end;
            warn!(
                offset = start,
                missing, "track runs past the end of the blob, appending a terminator"
            );
            Self::recover(reader, declared_len, payload, Repair::Truncated { missing })
        } else if payload.ends_with(&END_OF_TRACK) {
            debug!(offset = start, "complete end-of-track");
            (Self::intact(declared_len, payload), payload_end - start)
        } else if payload.ends_with(&END_OF_TRACK[1..]) {
            debug!(offset = start, "partial (ff 2f 00) end-of-track, unusual but fine");
            (Self::intact(declared_len, payload), payload_end - start)
        } else {
            let tail = &payload[payload.len().saturating_sub(4)..];
            warn!(
                offset = start,
                ?tail,
                "expected end-of-track, backtracking for an overwriting header"
            );
            Self::recover(reader, declared_len, payload, Repair::Unterminated)
        };

        reader.set_position(start + consumed);
        Ok((track, consumed))
    }

    /// Searches backward through `payload` for an embedded header chunk and
    /// terminates the track either there or at the end of `payload`.
    fn recover(
        reader: &Reader<'_>,
        declared_len: u32,
        payload: &[u8],
        fallback: Repair,
    ) -> (Self, usize) {
        let start = reader.buffer_position();
        let payload_start = start + TRACK_PREAMBLE_LEN;

        // A tag sitting on the very first payload byte would leave nothing to keep.
        let overwrite = (payload_start + 1..=(payload_start + payload.len()).saturating_sub(4))
            .rev()
            .find(|&position| reader.tag_at(position, HEADER_TAG));

        match overwrite {
            Some(header_at) => {
                warn!(
                    offset = start,
                    header_at, "track was saved over, terminating and splitting here"
                );
                let kept = &payload[..header_at - payload_start];
                let track = Self::repaired(declared_len, kept, Repair::Overwritten { header_at });
                (track, header_at - start)
            }
            None => {
                warn!(offset = start, "track simply damaged, appending a terminator");
                let track = Self::repaired(declared_len, payload, fallback);
                (track, TRACK_PREAMBLE_LEN + payload.len())
            }
        }
    }

    fn intact(declared_len: u32, payload: &[u8]) -> Self {
        Self {
            declared_len,
            repair: None,
            data: payload.to_vec(),
        }
    }

    fn repaired(declared_len: u32, kept: &[u8], repair: Repair) -> Self {
        let mut data = Vec::with_capacity(kept.len() + END_OF_TRACK.len());
        data.extend_from_slice(kept);
        data.extend_from_slice(&END_OF_TRACK);
        Self {
            declared_len,
            repair: Some(repair),
            data,
        }
    }

    /// Create a track from a payload that is written as-is
    pub fn from_payload(data: Vec<u8>) -> Self {
        Self {
            declared_len: u32::try_from(data.len()).unwrap_or(u32::MAX),
            repair: None,
            data,
        }
    }

    /// The length field as found in the blob
    pub const fn declared_len(&self) -> u32 {
        self.declared_len
    }

    /// True if a synthetic end-of-track was appended
    pub const fn is_repaired(&self) -> bool {
        self.repair.is_some()
    }

    /// How this track was repaired, if it was
    pub const fn repair(&self) -> Option<Repair> {
        self.repair
    }

    /// The payload as it will be written, trailer included
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The length of the payload as it will be written
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
