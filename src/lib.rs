#![doc = r#"
Carve MIDI files out of arbitrary binary blobs.

`midi_carver` scans disk images, memory dumps and other blobs for MIDI header
(`MThd`) and track (`MTrk`) chunks and rebuilds standalone `.mid` files from
whatever it finds. Damaged structures are repaired on a best-effort basis:

- runs of tracks without a header get a synthesized one
- a header whose tracks stop short is rewritten with the tracks that were found
- a track missing its end-of-track marker gets a synthetic one
- a track that was overwritten by a later file is cut where that file begins

Every structure is written as `mc-<offset>-<status>.mid`, with the status one
of `OK`, `BAD` or `ORPH`.

# Example

```rust
use midi_carver::prelude::*;

let blob = std::fs::read("disk.img").unwrap_or_default();
let mut sink = MemorySink::new();
let reports = Scanner::new(CarveConfig::default()).scan(&blob, &mut sink);
println!("{}", Summary::from_reports(&reports));
```
"#]
#![warn(missing_docs)]

pub mod carve;
pub mod file;
pub mod reader;

mod error;
pub use error::*;

/// Common imports
pub mod prelude {
    pub use crate::{
        CarveError,
        carve::{
            CarveConfig, CarveReport, Completion, Damage, DirectorySink, DiscardSink, MemorySink,
            Reconstruction, Reconstructor, Scanner, Sink, Status, Summary,
        },
        file::{FormatType, Header, Repair, Track, Warning},
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    };
}
