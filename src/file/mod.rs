#![doc = r#"
Chunk-level view of a MIDI file

# Overview

MIDI files are organized into chunks, each identified by a 4-character ASCII type identifier
followed by a 32-bit big-endian length field and then the chunk data. The carver only
understands the two chunk types the Standard MIDI File specification defines.

## [`Header`]

The header chunk (identified by "MThd") leads a MIDI file and carries:

- the [`FormatType`], which identifies how tracks should be played
- the number of tracks the file declares
- the timing division, which is copied verbatim and never repaired

The header chunk always has a fixed length of 6 bytes. A carved header is always
treated as 14 bytes long, whatever its length field says.

## [`Track`]

Track chunks (identified by "MTrk") contain the event stream of one track. The carver
never interprets events; it only looks for the [`END_OF_TRACK`] marker that must close
the payload.

# Example Structure

```text
[Header Chunk: "MThd" 00 00 00 06 <format> <ntrks> <division>]
[Track Chunk 1: "MTrk" <len> ... 00 FF 2F 00]
...
[Track Chunk N: "MTrk" <len> ... 00 FF 2F 00]
```
"#]

mod format;
pub use format::*;

mod header;
pub use header::*;

mod track;
pub use track::*;

mod writer;

/// Tag of a header chunk
pub const HEADER_TAG: &[u8; 4] = b"MThd";

/// Tag of a track chunk
pub const TRACK_TAG: &[u8; 4] = b"MTrk";

/// The canonical end-of-track event: a zero delta-time followed by `FF 2F 00`.
pub const END_OF_TRACK: [u8; 4] = [0x00, 0xFF, 0x2F, 0x00];

/// Length of a header chunk as carved: tag, length field and a 6 byte payload.
pub const HEADER_CHUNK_LEN: usize = 14;

/// Length of a track chunk's tag plus its length field
pub const TRACK_PREAMBLE_LEN: usize = 8;
