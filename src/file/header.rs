use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    carve::Damage,
    file::{FormatType, HEADER_CHUNK_LEN, HEADER_TAG, Track},
    reader::{ReadResult, Reader},
};

/// A field of a header chunk that did not hold the value it should have.
///
/// None of these stop a header from being carved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// The length field was not 6. The chunk is still read as 14 bytes.
    #[error("header length field says {0} bytes, expected 6")]
    HeaderLength(u32),
    /// The format type is not one of 0, 1 or 2.
    #[error("unknown format type {0}")]
    UnknownFormat(u16),
    /// Format 0 declared with a track count other than 1; coerced to format 1.
    #[error("format 0 declares {track_count} tracks, coerced to format 1")]
    FormatCoerced {
        /// The declared track count
        track_count: u16,
    },
}

#[doc = r#"
A MIDI header and the tracks carved for it.

A header is either parsed out of the blob with [`Header::read`] or synthesized
with [`Header::orphan`] for a run of tracks that has none. Tracks are appended
in the order they were found, which is the order they are written.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    format: u16,
    track_count: u16,
    division: u16,
    damaged: bool,
    generated: bool,
    tracks: Vec<Track>,
    warnings: Vec<Warning>,
    damage: Vec<Damage>,
}

impl Header {
    /// Create a clean header from raw field values
    pub const fn new(format: u16, track_count: u16, division: u16) -> Self {
        Self {
            format,
            track_count,
            division,
            damaged: false,
            generated: false,
            tracks: Vec::new(),
            warnings: Vec::new(),
            damage: Vec::new(),
        }
    }

    /// Synthesize a header for a run of tracks found without one.
    ///
    /// Generated headers always count as damaged.
    pub const fn orphan(format: u16, track_count: u16, division: u16) -> Self {
        let mut header = Self::new(format, track_count, division);
        header.damaged = true;
        header.generated = true;
        header
    }

    /// Parses a header chunk at the reader's position.
    ///
    /// On success the reader has advanced by exactly [`HEADER_CHUNK_LEN`] bytes,
    /// whatever the chunk's length field claims. Odd field values are recorded
    /// as [`Warning`]s rather than rejected.
    ///
    /// # Errors
    /// - the reader is not positioned on an `MThd` tag
    /// - the blob ends before the 14 bytes of the chunk
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let mut cursor = *reader;
        cursor.expect_tag(HEADER_TAG)?;
        let length = cursor.read_u32_be()?;
        let format = cursor.read_u16_be()?;
        let track_count = cursor.read_u16_be()?;
        let division = cursor.read_u16_be()?;

        let mut header = Self::new(format, track_count, division);

        if length == 6 {
            debug!(offset = start, "header indicates 6 bytes length");
        } else {
            warn!(offset = start, length, "header length should be 6, continuing anyway");
            header.warnings.push(Warning::HeaderLength(length));
        }

        match FormatType::from_raw(format) {
            Some(_) => info!(offset = start, format, "header declares format"),
            None => {
                warn!(offset = start, format, "unknown format type (should be 0-2), continuing anyway");
                header.warnings.push(Warning::UnknownFormat(format));
            }
        }

        info!(offset = start, track_count, "header declares tracks");

        if format == FormatType::SingleMultiChannel.raw() && track_count != 1 {
            warn!(
                offset = start,
                track_count, "format 0 should carry exactly one track, altering to format 1"
            );
            header.format = FormatType::Simultaneous.raw();
            header.warnings.push(Warning::FormatCoerced { track_count });
        }

        debug!(offset = start, division, "header timing division");

        reader.set_position(start + HEADER_CHUNK_LEN);
        Ok(header)
    }

    /// The raw format field
    pub const fn format(&self) -> u16 {
        self.format
    }

    /// The format field as a known [`FormatType`], if it is one
    pub fn format_type(&self) -> Option<FormatType> {
        FormatType::from_raw(self.format)
    }

    /// The number of tracks this header expects.
    ///
    /// Once carving stops early this is lowered to the number of tracks found.
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The timing division, verbatim
    pub const fn division(&self) -> u16 {
        self.division
    }

    /// True if carving this header hit any desync or repair
    pub const fn is_damaged(&self) -> bool {
        self.damaged
    }

    /// True if this header was synthesized for orphan tracks
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    /// The tracks carved so far, in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Consistency warnings raised while parsing the header chunk
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Everything that went wrong while carving this header's tracks
    pub fn damage(&self) -> &[Damage] {
        &self.damage
    }

    /// Appends a track after the ones already carved
    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub(crate) fn mark_damaged(&mut self, damage: Damage) {
        self.damaged = true;
        self.damage.push(damage);
    }

    /// Lowers the expected track count to what was actually carved
    pub(crate) fn settle_track_count(&mut self) {
        self.track_count = u16::try_from(self.tracks.len()).unwrap_or(u16::MAX);
    }
}
