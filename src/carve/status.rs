use core::fmt;

use crate::file::Header;

/// The classification a carved structure is written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Parsed header, every track where it was expected
    Ok,
    /// Parsed header, but tracks were lost, cut short or repaired
    Bad,
    /// Header synthesized for a run of orphan tracks
    Orph,
}

impl Status {
    /// Classifies a finished header.
    ///
    /// Generated takes priority over damaged.
    pub const fn of(header: &Header) -> Self {
        if header.is_generated() {
            Self::Orph
        } else if header.is_damaged() {
            Self::Bad
        } else {
            Self::Ok
        }
    }

    /// The tag used in output file names
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Bad => "BAD",
            Self::Orph => "ORPH",
        }
    }

    /// Output file name for a structure starting at `offset` in the blob
    ///
    /// ```rust
    /// use midi_carver::prelude::*;
    ///
    /// assert_eq!(Status::Bad.file_name(1234), "mc-00001234-BAD.mid");
    /// ```
    pub fn file_name(&self, offset: usize) -> String {
        format!("mc-{offset:08}-{}.mid", self.tag())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
