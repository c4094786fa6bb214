use thiserror::Error;

/// Why a carved structure could not be written out.
///
/// Each of these skips exactly one output file; the scan itself carries on.
#[derive(Debug, Error)]
pub enum CarveError {
    /// The header ended up with no tracks, and a trackless MIDI file is never written.
    #[error("refusing to write a trackless MIDI file")]
    EmptyStructure,
    /// More tracks were carved than a header's 16-bit track count can hold.
    #[error("{0} tracks do not fit in a MIDI header")]
    TooManyTracks(usize),
    /// A track payload is too long for a 32-bit length field.
    #[error("track payload of {0} bytes does not fit in a MIDI track chunk")]
    TrackTooLong(usize),
    /// The output file could not be created or written.
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
}
