use thiserror::Error;

use crate::file::Repair;

/// A way in which a structure's track sequence deviated from what its header
/// promised.
///
/// Damage is always recovered from. It turns the structure's classification
/// into [`Status::Bad`](crate::carve::Status::Bad) but never drops it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Damage {
    /// Another header starts before all declared tracks were found.
    #[error("collision with another MIDI at {at}, expected {expected} tracks, got {found}")]
    Collision {
        /// Absolute offset of the colliding `MThd`
        at: usize,
        /// Declared track count
        expected: u16,
        /// Tracks carved before the collision
        found: usize,
    },
    /// Neither a track nor a header tag where the next track should be.
    #[error("missing MTrk tag for track {track} at {at}")]
    MissingTrackTag {
        /// Index of the track that was expected
        track: usize,
        /// Absolute offset where it was expected
        at: usize,
    },
    /// The recovery search found a track tag again.
    #[error("regained sync at {at}, {lost} bytes were lost")]
    Resynced {
        /// Absolute offset of the track tag that was found
        at: usize,
        /// Bytes skipped over
        lost: usize,
    },
    /// The recovery search ran out of room, or reached another header.
    #[error("lost sync at {at} after searching {searched} bytes")]
    LostSync {
        /// Absolute offset the search started from
        at: usize,
        /// Bytes examined
        searched: usize,
    },
    /// A track's end-of-track marker had to be synthesized.
    #[error("track {track} repaired ({repair:?})")]
    TrackRepaired {
        /// Index of the repaired track
        track: usize,
        /// What was done to it
        repair: Repair,
    },
    /// A track tag with no readable length field behind it.
    #[error("unreadable track chunk at {at}")]
    UnreadableTrack {
        /// Absolute offset of the `MTrk` tag
        at: usize,
    },
}
