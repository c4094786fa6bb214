use num_enum::{IntoPrimitive, TryFromPrimitive};

#[doc = r#"
The three format types a header chunk can declare.

Values above 2 do turn up in carved data. They are kept as raw `u16`s on the
[`Header`](crate::file::Header) and only mapped to a [`FormatType`] when known.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: a single multi-channel track
    SingleMultiChannel = 0,
    /// Format 1: one or more simultaneous tracks
    Simultaneous = 1,
    /// Format 2: one or more sequentially independent patterns
    SequentiallyIndependent = 2,
}

impl FormatType {
    /// Maps a raw format field, returning `None` for unknown extensions
    pub fn from_raw(raw: u16) -> Option<Self> {
        Self::try_from(raw).ok()
    }

    /// Returns the raw header field value
    pub fn raw(self) -> u16 {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_formats() {
        assert_eq!(FormatType::from_raw(0), Some(FormatType::SingleMultiChannel));
        assert_eq!(FormatType::from_raw(1), Some(FormatType::Simultaneous));
        assert_eq!(
            FormatType::from_raw(2),
            Some(FormatType::SequentiallyIndependent)
        );
        assert_eq!(FormatType::from_raw(3), None);
        assert_eq!(FormatType::Simultaneous.raw(), 1);
    }
}
