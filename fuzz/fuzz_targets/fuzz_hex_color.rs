#![no_main]

use folio_style::{adjust_brightness, generate, is_hex_draft, is_valid_hex, parse_hex, to_dark_variant};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 {
        return;
    }

    let valid = is_valid_hex(text);
    assert_eq!(valid, parse_hex(text).is_ok());
    if valid {
        assert!(is_hex_draft(text), "complete values are also drafts");
    }

    for delta in [-30, -1, 0, 1, 30] {
        let out = adjust_brightness(text, delta);
        if valid {
            assert!(is_valid_hex(&out));
        } else {
            assert_eq!(out, text, "malformed input must pass through");
        }
    }

    let dark = to_dark_variant(text);
    if valid {
        let before = parse_hex(text).map(|c| c.channel_sum()).unwrap_or(0);
        let after = parse_hex(&dark).map(|c| c.channel_sum()).unwrap_or(u16::MAX);
        assert!(after <= before);

        let preset = generate(text);
        assert!(preset.is_well_formed());
        let json = serde_json::to_string(&preset).expect("preset serializes");
        let back: folio_style::PalettePreset = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, preset);
    } else {
        assert_eq!(dark, text);
    }
});
