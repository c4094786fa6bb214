use tracing::{debug, error, info, warn};

use crate::{
    CarveError,
    carve::{CarveConfig, CarveReport, Damage, Sink, Status},
    file::{HEADER_TAG, Header, TRACK_TAG, Track},
    reader::Reader,
};

/// Why a header stopped collecting tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Completion {
    /// The declared number of tracks was carved
    Complete,
    /// Another header started before all tracks were found
    Collision,
    /// A track tag could not be found again
    LostSync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectingTrack,
    RecoverySearch,
    Done(Completion),
}

#[doc = r#"
Collects the tracks that belong to a header.

Starting right after a header chunk (or on the first of a run of orphan
tracks), the reconstructor reads track chunks until the header's declared
track count is reached. When a track is not where it should be, it searches
forward for the next track tag, but never past another header.
"#]
#[derive(Debug, Clone, Copy)]
pub struct Reconstructor<'slc> {
    reader: Reader<'slc>,
    config: CarveConfig,
}

impl<'slc> Reconstructor<'slc> {
    /// Create a reconstructor over `blob`
    pub const fn new(blob: &'slc [u8], config: CarveConfig) -> Self {
        Self {
            reader: Reader::from_byte_slice(blob),
            config,
        }
    }

    /// Fills `header` with the tracks found from the absolute offset `start`.
    pub fn run(mut self, mut header: Header, start: usize) -> Reconstruction {
        self.reader.set_position(start);
        let mut state = State::ExpectingTrack;

        let completion = loop {
            state = match state {
                State::ExpectingTrack => self.expect_track(&mut header),
                State::RecoverySearch => self.recovery_search(&mut header),
                State::Done(completion) => break completion,
            };
        };

        if completion != Completion::Complete {
            header.settle_track_count();
        }

        Reconstruction {
            header,
            consumed: self.reader.buffer_position() - start,
            completion,
        }
    }

    fn expect_track(&mut self, header: &mut Header) -> State {
        let at = self.reader.buffer_position();
        let found = header.tracks().len();

        if self.reader.at_tag(HEADER_TAG) {
            warn!(
                at,
                expected = header.track_count(),
                found,
                "collision with another MIDI, came up short in tracks"
            );
            header.mark_damaged(Damage::Collision {
                at,
                expected: header.track_count(),
                found,
            });
            return State::Done(Completion::Collision);
        }

        if !self.reader.at_tag(TRACK_TAG) {
            warn!(at, track = found, "missing MTrk tag, starting recovery search");
            header.mark_damaged(Damage::MissingTrackTag { track: found, at });
            return State::RecoverySearch;
        }

        debug!(at, track = found, "found MTrk");
        let track = match Track::read(&mut self.reader) {
            Ok((track, _)) => track,
            Err(e) => {
                warn!(at, %e, "unreadable track chunk, truncating here");
                header.mark_damaged(Damage::UnreadableTrack { at });
                return State::Done(Completion::LostSync);
            }
        };
        if let Some(repair) = track.repair() {
            header.mark_damaged(Damage::TrackRepaired {
                track: found,
                repair,
            });
        }
        header.push_track(track);

        if header.tracks().len() >= usize::from(header.track_count()) {
            State::Done(Completion::Complete)
        } else {
            State::ExpectingTrack
        }
    }

    fn recovery_search(&mut self, header: &mut Header) -> State {
        let at = self.reader.buffer_position();
        let bound = self
            .reader
            .remaining()
            .min(self.config.max_search_distance());

        for distance in 1..bound {
            let position = at + distance;
            if self.reader.tag_at(position, HEADER_TAG) {
                break;
            }
            if self.reader.tag_at(position, TRACK_TAG) {
                warn!(at = position, lost = distance, "found an MTrk tag, regained sync");
                header.mark_damaged(Damage::Resynced {
                    at: position,
                    lost: distance,
                });
                self.reader.set_position(position);
                return State::ExpectingTrack;
            }
        }

        warn!(
            at,
            "recovery search exceeded the blob or max distance, or entered another header; truncating"
        );
        header.mark_damaged(Damage::LostSync {
            at,
            searched: bound.saturating_sub(1),
        });
        State::Done(Completion::LostSync)
    }
}

/// A header whose track sequence is finished, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    header: Header,
    consumed: usize,
    completion: Completion,
}

impl Reconstruction {
    /// The finished header
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// Blob bytes consumed from where track collection started
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Why track collection stopped
    pub const fn completion(&self) -> Completion {
        self.completion
    }

    /// The classification this structure will be written under
    pub const fn status(&self) -> Status {
        Status::of(&self.header)
    }

    /// Writes the structure to `sink`, naming it after `offset`, the absolute
    /// start of the structure in the blob.
    ///
    /// The header is released once written. A failed write is reported and
    /// logged, never propagated.
    pub fn emit<S: Sink>(self, offset: usize, sink: &mut S) -> CarveReport {
        let status = self.status();
        let file_name = status.file_name(offset);
        info!(offset, %status, tracks = self.header.tracks().len(), "classified");

        let result = self
            .header
            .to_bytes()
            .and_then(|bytes| sink.write_file(&file_name, &bytes).map_err(CarveError::from));

        match &result {
            Ok(()) => info!(file = %file_name, "wrote MIDI to disk"),
            Err(CarveError::EmptyStructure) => error!(file = %file_name, "refusing to write trackless MIDI file"),
            Err(e) => error!(file = %file_name, %e, "could not write MIDI"),
        }

        CarveReport {
            offset,
            status,
            file_name,
            tracks: self.header.tracks().len(),
            consumed: self.consumed,
            completion: self.completion,
            warnings: self.header.warnings().to_vec(),
            damage: self.header.damage().to_vec(),
            error: result.err(),
        }
    }
}
