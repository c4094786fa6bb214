#![doc = r#"
Carving: finding MIDI structures in a blob and rebuilding them as files.

# Pipeline

```text
Scanner ──► Header::read / Header::orphan ──► Reconstructor ──► Track::read (loop)
                                                    │
                                                    ▼
                                      Reconstruction::emit ──► Sink
```

The [`Scanner`] makes a single forward pass. For every structure it hands a
[`Header`](crate::file::Header) to a [`Reconstructor`], which collects tracks
until the header is satisfied, another header collides with it, or sync is
lost. The finished [`Reconstruction`] is classified with a [`Status`] and
written to a [`Sink`] under a name derived from its offset.
"#]

mod config;
pub use config::*;

mod damage;
pub use damage::*;

mod reconstruct;
pub use reconstruct::*;

mod report;
pub use report::*;

mod scanner;
pub use scanner::*;

mod sink;
pub use sink::*;

mod status;
pub use status::*;
