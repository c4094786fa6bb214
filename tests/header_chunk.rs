mod common;

use common::*;
use midi_carver::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn reads_well_formed_header() {
    let bytes = header(1, 2, 96);
    let mut reader = Reader::from_byte_slice(&bytes);
    let header = Header::read(&mut reader).unwrap();

    assert_eq!(header.format(), 1);
    assert_eq!(header.format_type(), Some(FormatType::Simultaneous));
    assert_eq!(header.track_count(), 2);
    assert_eq!(header.division(), 96);
    assert!(header.warnings().is_empty());
    assert!(!header.is_damaged());
    assert!(!header.is_generated());
    assert!(header.tracks().is_empty());
    assert_eq!(reader.buffer_position(), 14);
}

#[test]
fn odd_length_field_never_changes_consumed_bytes() {
    let mut bytes = junk(3);
    bytes.extend(header_with_len(0x0000_1000, 1, 1, 480));
    let mut reader = Reader::at(&bytes, 3);
    let header = Header::read(&mut reader).unwrap();

    assert_eq!(header.warnings(), &[Warning::HeaderLength(0x1000)]);
    assert_eq!(header.division(), 480);
    assert_eq!(reader.buffer_position(), 3 + 14);
}

#[test]
fn format_zero_with_many_tracks_is_coerced() {
    let bytes = header(0, 2, 96);
    let header = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap();

    assert_eq!(header.format(), 1);
    assert_eq!(header.warnings(), &[Warning::FormatCoerced { track_count: 2 }]);
    assert!(!header.is_damaged());
}

#[test]
fn format_zero_with_one_track_is_kept() {
    let bytes = header(0, 1, 96);
    let header = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap();

    assert_eq!(header.format_type(), Some(FormatType::SingleMultiChannel));
    assert!(header.warnings().is_empty());
}

#[test]
fn unknown_format_is_accepted_with_a_warning() {
    let bytes = header(7, 3, 96);
    let header = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap();

    assert_eq!(header.format(), 7);
    assert_eq!(header.format_type(), None);
    assert_eq!(header.warnings(), &[Warning::UnknownFormat(7)]);
}

#[test]
fn division_is_copied_verbatim() {
    // SMPTE style division, high bit set
    let bytes = header(1, 1, 0xE728);
    let header = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
    assert_eq!(header.division(), 0xE728);
}

#[test]
fn truncated_header_is_out_of_bounds() {
    let bytes = header(1, 2, 96);
    let mut reader = Reader::from_byte_slice(&bytes[..10]);
    let err = Header::read(&mut reader).unwrap_err();

    assert!(err.is_out_of_bounds());
    assert_eq!(reader.buffer_position(), 0);
}

#[test]
fn wrong_tag_is_a_mismatch() {
    let bytes = track(&EVENTS);
    let err = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();

    assert!(err.is_tag_mismatch());
    assert_eq!(
        err.error_kind(),
        &ReaderErrorKind::TagMismatch { expected: *b"MThd" }
    );
}

#[test]
fn orphan_headers_are_generated_and_damaged() {
    let header = Header::orphan(1, 4, 120);

    assert!(header.is_generated());
    assert!(header.is_damaged());
    assert_eq!(header.track_count(), 4);
    assert_eq!(header.division(), 120);
    assert_eq!(Status::of(&header), Status::Orph);
}
