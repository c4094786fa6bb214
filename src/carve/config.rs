/// How far the recovery search may look ahead for a lost track tag, by default.
pub const DEFAULT_MAX_SEARCH_DISTANCE: usize = 32768;

/// Format type given to headers synthesized for orphan tracks, by default.
pub const DEFAULT_ORPHAN_FORMAT: u16 = 1;

/// Timing division given to headers synthesized for orphan tracks, by default.
pub const DEFAULT_ORPHAN_DIVISION: u16 = 120;

#[doc = r#"
Tunables for a carving run.

```rust
use midi_carver::prelude::*;

let config = CarveConfig::default().with_max_search_distance(4096);
assert_eq!(config.max_search_distance(), 4096);
assert_eq!(config.orphan_division(), 120);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarveConfig {
    max_search_distance: usize,
    orphan_format: u16,
    orphan_division: u16,
}

impl Default for CarveConfig {
    fn default() -> Self {
        Self {
            max_search_distance: DEFAULT_MAX_SEARCH_DISTANCE,
            orphan_format: DEFAULT_ORPHAN_FORMAT,
            orphan_division: DEFAULT_ORPHAN_DIVISION,
        }
    }
}

impl CarveConfig {
    /// Bounds the forward recovery search after a missing track tag.
    ///
    /// The effective bound is the smaller of this and the bytes left in the blob.
    pub const fn with_max_search_distance(mut self, distance: usize) -> Self {
        self.max_search_distance = distance;
        self
    }

    /// Sets the format type of synthesized headers
    pub const fn with_orphan_format(mut self, format: u16) -> Self {
        self.orphan_format = format;
        self
    }

    /// Sets the timing division of synthesized headers
    pub const fn with_orphan_division(mut self, division: u16) -> Self {
        self.orphan_division = division;
        self
    }

    /// The recovery search bound
    pub const fn max_search_distance(&self) -> usize {
        self.max_search_distance
    }

    /// The format type of synthesized headers
    pub const fn orphan_format(&self) -> u16 {
        self.orphan_format
    }

    /// The timing division of synthesized headers
    pub const fn orphan_division(&self) -> u16 {
        self.orphan_division
    }
}
