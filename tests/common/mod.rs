#![allow(dead_code)]

/// A short event stream closed by a complete end-of-track marker
pub const EVENTS: [u8; 12] = [
    0x00, 0x90, 0x3C, 0x40, // note on
    0x60, 0x80, 0x3C, 0x00, // note off
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

/// A different event stream, so tracks can be told apart
pub const OTHER_EVENTS: [u8; 16] = [
    0x00, 0xC0, 0x05, // program change
    0x00, 0x91, 0x40, 0x50, // note on
    0x30, 0x81, 0x40, 0x00, // note off
    0x10, 0x00, 0xFF, 0x2F, 0x00, // end of track
];

pub fn header_with_len(len: u32, format: u16, tracks: u16, division: u16) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MThd");
    bytes.extend_from_slice(&len.to_be_bytes());
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&tracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    bytes
}

pub fn header(format: u16, tracks: u16, division: u16) -> Vec<u8> {
    header_with_len(6, format, tracks, division)
}

/// A track chunk whose length field is `declared`, whatever the payload
pub fn track_declared(declared: u32, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"MTrk");
    bytes.extend_from_slice(&declared.to_be_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

pub fn track(payload: &[u8]) -> Vec<u8> {
    track_declared(payload.len() as u32, payload)
}

/// A well-formed MIDI file
pub fn midi(format: u16, division: u16, payloads: &[&[u8]]) -> Vec<u8> {
    let mut bytes = header(format, payloads.len() as u16, division);
    for payload in payloads {
        bytes.extend(track(payload));
    }
    bytes
}

pub fn junk(len: usize) -> Vec<u8> {
    vec![0xAA; len]
}
