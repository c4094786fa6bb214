use std::io::Write;

use crate::{
    CarveError,
    file::{HEADER_CHUNK_LEN, HEADER_TAG, Header, TRACK_PREAMBLE_LEN, TRACK_TAG, Track},
};

impl Header {
    /// Encodes this header and its tracks as a standalone MIDI file.
    ///
    /// The written track count is the number of tracks actually carved, not
    /// the declared one.
    ///
    /// # Errors
    /// [`CarveError::EmptyStructure`] if there are no tracks, or a size error
    /// if a count or length does not fit its field.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CarveError> {
        let len = HEADER_CHUNK_LEN
            + self
                .tracks()
                .iter()
                .map(|track| TRACK_PREAMBLE_LEN + track.len())
                .sum::<usize>();
        let mut bytes = Vec::with_capacity(len);
        self.write_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Writes this header and its tracks as a standalone MIDI file.
    ///
    /// Nothing is written when this returns a size or empty-structure error.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CarveError> {
        if self.tracks().is_empty() {
            return Err(CarveError::EmptyStructure);
        }
        let track_count = u16::try_from(self.tracks().len())
            .map_err(|_| CarveError::TooManyTracks(self.tracks().len()))?;
        let lengths = self
            .tracks()
            .iter()
            .map(|track| {
                u32::try_from(track.len()).map_err(|_| CarveError::TrackTooLong(track.len()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        writer.write_all(HEADER_TAG)?;
        writer.write_all(&6u32.to_be_bytes())?;
        writer.write_all(&self.format().to_be_bytes())?;
        writer.write_all(&track_count.to_be_bytes())?;
        writer.write_all(&self.division().to_be_bytes())?;

        for (track, len) in self.tracks().iter().zip(lengths) {
            write_track(track, len, writer)?;
        }
        Ok(())
    }
}

fn write_track<W: Write>(track: &Track, len: u32, writer: &mut W) -> Result<(), CarveError> {
    writer.write_all(TRACK_TAG)?;
    writer.write_all(&len.to_be_bytes())?;
    writer.write_all(track.data())?;
    Ok(())
}
