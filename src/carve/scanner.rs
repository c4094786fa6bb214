use tracing::{info, warn};

use crate::{
    carve::{CarveConfig, CarveReport, Reconstructor, Sink},
    file::{HEADER_CHUNK_LEN, HEADER_TAG, Header, TRACK_TAG},
    reader::Reader,
};

#[doc = r#"
Walks a blob once, front to back, carving every MIDI structure it meets.

A header tag starts a structure with that header. A track tag met outside of
any structure starts an orphan run, which gets a synthesized header. Bytes
consumed by a structure are never looked at again.

```rust
use midi_carver::prelude::*;

let mut blob = vec![0xAA; 5];
blob.extend_from_slice(b"MThd\0\0\0\x06\0\0\0\x01\0\x60");
blob.extend_from_slice(b"MTrk\0\0\0\x04\0\xFF\x2F\0");

let mut sink = MemorySink::new();
let reports = Scanner::default().scan(&blob, &mut sink);

assert_eq!(reports.len(), 1);
assert_eq!(reports[0].status, Status::Ok);
assert_eq!(sink.get("mc-00000005-OK.mid"), Some(&blob[5..]));
```
"#]
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    config: CarveConfig,
}

impl Scanner {
    /// Create a scanner with the given tunables
    pub const fn new(config: CarveConfig) -> Self {
        Self { config }
    }

    /// The scanner's tunables
    pub const fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// Carves every structure in `blob` into `sink`.
    ///
    /// Returns one report per structure, in blob order. Failed writes are
    /// reported, not returned as errors.
    pub fn scan<S: Sink>(&self, blob: &[u8], sink: &mut S) -> Vec<CarveReport> {
        let reader = Reader::from_byte_slice(blob);
        let mut reports = Vec::new();
        let mut offset = 0;

        while offset < blob.len() {
            if reader.tag_at(offset, TRACK_TAG) {
                let report = self.carve_orphans(blob, offset, sink);
                offset += report.consumed.max(1);
                reports.push(report);
            } else if reader.tag_at(offset, HEADER_TAG) {
                info!(offset, "found a MIDI header");
                let mut cursor = Reader::at(blob, offset);
                match Header::read(&mut cursor) {
                    Ok(header) => {
                        let report = Reconstructor::new(blob, self.config)
                            .run(header, offset + HEADER_CHUNK_LEN)
                            .emit(offset, sink);
                        offset += HEADER_CHUNK_LEN + report.consumed;
                        reports.push(report);
                    }
                    Err(e) => {
                        warn!(offset, %e, "header chunk cut off by the end of the blob");
                        offset += 1;
                    }
                }
            } else {
                offset += 1;
            }
        }

        reports
    }

    fn carve_orphans<S: Sink>(&self, blob: &[u8], offset: usize, sink: &mut S) -> CarveReport {
        info!(offset, "found an orphan MIDI track, source is maybe fragmented");
        let count = Reader::at(blob, offset).count_tags_until(TRACK_TAG, HEADER_TAG);
        info!(offset, count, "counted MTrk tags up to the next header");

        let header = Header::orphan(
            self.config.orphan_format(),
            u16::try_from(count).unwrap_or(u16::MAX),
            self.config.orphan_division(),
        );
        Reconstructor::new(blob, self.config)
            .run(header, offset)
            .emit(offset, sink)
    }
}
