//! Base-40 callsign codec: up to 6 ASCII characters packed into a 32-bit
//! word (`40^6 < 2^32`).

use crate::constants::{CALLSIGN_ALPHABET, CALLSIGN_LEN};

fn alphabet_index(ch: u8) -> u32 {
    CALLSIGN_ALPHABET
        .iter()
        .position(|&c| c == ch)
        .unwrap_or(0) as u32
}

fn to_upper(ch: u8) -> u8 {
    if ch.is_ascii_lowercase() {
        ch - 32
    } else {
        ch
    }
}

/// Encodes up to 6 ASCII characters of `call` into a base-40 word.
///
/// The input is uppercased and right-padded with spaces to exactly 6
/// characters before encoding; characters past the 6th are ignored.
pub fn encode_callsign(call: &str) -> u32 {
    let mut buf = [b' '; CALLSIGN_LEN];
    for (i, &ch) in call.as_bytes().iter().take(CALLSIGN_LEN).enumerate() {
        buf[i] = to_upper(ch);
    }

    let mut v: u32 = 0;
    for &ch in &buf {
        v = v * 40 + alphabet_index(ch);
    }
    v
}

/// Decodes a base-40 word back into its 6-character, space-padded,
/// uppercase representation.
pub fn decode_callsign(mut val: u32) -> [u8; CALLSIGN_LEN] {
    let mut out = [0u8; CALLSIGN_LEN];
    for i in (0..CALLSIGN_LEN).rev() {
        out[i] = CALLSIGN_ALPHABET[(val % 40) as usize];
        val /= 40;
    }
    out
}

/// Renders a decoded callsign as a `String` (trailing spaces kept, matching
/// the wire representation).
pub fn callsign_to_string(bytes: &[u8; CALLSIGN_LEN]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_lorett_matches_spec_scenario() {
        // Scenario 2: L=21 O=24 R=27 E=14 T=29 T=29.
        assert_eq!(encode_callsign("LORETT"), 3_953_176_321);
    }

    #[test]
    fn round_trip_short_callsign() {
        let encoded = encode_callsign("N0CALL");
        let decoded = decode_callsign(encoded);
        assert_eq!(&decoded, b"N0CALL");
    }

    #[test]
    fn round_trip_pads_with_spaces() {
        let encoded = encode_callsign("de");
        let decoded = decode_callsign(encoded);
        assert_eq!(&decoded, b"DE    ");
    }

    #[test]
    fn round_trip_all_alphabet_chars() {
        for &ch in CALLSIGN_ALPHABET.iter() {
            let s = String::from_utf8(vec![ch; CALLSIGN_LEN]).unwrap();
            let encoded = encode_callsign(&s);
            let decoded = decode_callsign(encoded);
            assert_eq!(decoded, [ch; CALLSIGN_LEN]);
        }
    }
}
