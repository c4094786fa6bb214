use core::fmt;

use crate::{
    CarveError,
    carve::{Completion, Damage, Status},
    file::Warning,
};

/// What happened to one structure found in the blob.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CarveReport {
    /// Absolute offset of the structure in the blob
    pub offset: usize,
    /// Classification the structure was written under
    pub status: Status,
    /// Output file name
    pub file_name: String,
    /// Number of tracks carved
    pub tracks: usize,
    /// Blob bytes consumed by the track sequence
    pub consumed: usize,
    /// Why track collection stopped
    pub completion: Completion,
    /// Header consistency warnings
    pub warnings: Vec<Warning>,
    /// Desync and repair history
    pub damage: Vec<Damage>,
    /// Why the file was not written, if it was not
    #[cfg_attr(feature = "serde", serde(skip))]
    pub error: Option<CarveError>,
}

impl CarveReport {
    /// True if the output file was written
    pub const fn is_written(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-status tally of a carving run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Clean files written
    pub ok: usize,
    /// Damaged files written
    pub bad: usize,
    /// Files written with a synthesized header
    pub orph: usize,
    /// Structures with no tracks, never written
    pub refused: usize,
    /// Structures whose write failed
    pub failed: usize,
}

impl Summary {
    /// Tallies a set of reports
    pub fn from_reports<'a>(reports: impl IntoIterator<Item = &'a CarveReport>) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match (&report.error, report.status) {
                (None, Status::Ok) => summary.ok += 1,
                (None, Status::Bad) => summary.bad += 1,
                (None, Status::Orph) => summary.orph += 1,
                (Some(CarveError::EmptyStructure), _) => summary.refused += 1,
                (Some(_), _) => summary.failed += 1,
            }
        }
        summary
    }

    /// Number of files written
    pub const fn written(&self) -> usize {
        self.ok + self.bad + self.orph
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written ({} OK, {} BAD, {} ORPH), {} refused, {} failed",
            self.written(),
            self.ok,
            self.bad,
            self.orph,
            self.refused,
            self.failed
        )
    }
}
