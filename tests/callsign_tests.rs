use loret_fec_link::{callsign_to_string, decode_callsign, encode_callsign};

#[test]
fn lorett_matches_spec_worked_example() {
    assert_eq!(encode_callsign("LORETT"), 3_953_176_321);
}

#[test]
fn round_trips_lowercase_and_short_input() {
    let encoded = encode_callsign("w1aw");
    let decoded = decode_callsign(encoded);
    assert_eq!(callsign_to_string(&decoded), "W1AW  ");
}

#[test]
fn unknown_characters_decode_to_zero_index() {
    // decode-side never sees an arbitrary character directly; this checks
    // the encode-side fallback for a char outside the 40-char alphabet maps
    // to index 0 ('0') rather than panicking.
    let encoded = encode_callsign("@@@@@@");
    let decoded = decode_callsign(encoded);
    assert_eq!(&decoded, b"000000");
}

#[test]
fn truncates_input_past_six_characters() {
    let encoded = encode_callsign("TOOLONGCALL");
    assert_eq!(encoded, encode_callsign("TOOLON"));
}
