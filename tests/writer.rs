mod common;

use common::*;
use midi_carver::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn trackless_header_is_refused() {
    let header = Header::new(1, 2, 96);
    let mut out = Vec::new();

    assert!(matches!(
        header.write_to(&mut out),
        Err(CarveError::EmptyStructure)
    ));
    assert!(out.is_empty());
    assert!(matches!(header.to_bytes(), Err(CarveError::EmptyStructure)));
}

#[test]
fn writes_canonical_midi() {
    let mut header = Header::new(1, 2, 96);
    header.push_track(Track::from_payload(EVENTS.to_vec()));
    header.push_track(Track::from_payload(OTHER_EVENTS.to_vec()));

    assert_eq!(header.to_bytes().unwrap(), midi(1, 96, &[&EVENTS, &OTHER_EVENTS]));
}

#[test]
fn track_count_is_taken_from_the_tracks() {
    let mut header = Header::new(1, 9, 480);
    header.push_track(Track::from_payload(EVENTS.to_vec()));

    let bytes = header.to_bytes().unwrap();
    assert_eq!(&bytes[10..12], &[0x00, 0x01]);
    assert_eq!(&bytes[12..14], &480u16.to_be_bytes());
}

#[test]
fn header_length_is_always_six() {
    let bytes = header_with_len(0x20, 1, 1, 96);
    let mut parsed = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap();
    parsed.push_track(Track::from_payload(EVENTS.to_vec()));

    let written = parsed.to_bytes().unwrap();
    assert_eq!(&written[4..8], &[0x00, 0x00, 0x00, 0x06]);
}

#[test]
fn large_track_lengths_are_big_endian() {
    // 2^24 + 5: the most significant byte must come out as 1
    let len = 16_777_221;
    let mut header = Header::new(0, 1, 96);
    header.push_track(Track::from_payload(vec![0; len]));

    let bytes = header.to_bytes().unwrap();
    assert_eq!(&bytes[14..18], b"MTrk");
    assert_eq!(&bytes[18..22], &[0x01, 0x00, 0x00, 0x05]);
    assert_eq!(bytes.len(), 14 + 8 + len);
}

#[test]
fn tracks_are_written_in_order() {
    let mut header = Header::new(2, 3, 96);
    for payload in [&OTHER_EVENTS[..], &EVENTS[..], &OTHER_EVENTS[..]] {
        header.push_track(Track::from_payload(payload.to_vec()));
    }
    let bytes = header.to_bytes().unwrap();

    let first = 14 + 8;
    let second = first + OTHER_EVENTS.len() + 8;
    let third = second + EVENTS.len() + 8;
    assert_eq!(&bytes[first..first + OTHER_EVENTS.len()], &OTHER_EVENTS);
    assert_eq!(&bytes[second..second + EVENTS.len()], &EVENTS);
    assert_eq!(&bytes[third..], &OTHER_EVENTS);
}
