//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use wal_palette::Palette;

use walcolors::services::format_palette;

/// Assert the printed form is a JSON array of 16 lowercase hex codes
pub fn assert_printable(palette: &Palette) {
    let line = format_palette(palette).expect("Palette should serialize");
    assert!(!line.contains('\n'), "Output must be a single line: {line}");

    let codes: Vec<String> = serde_json::from_str(&line).expect("Output should be a JSON array");
    assert_eq!(codes.len(), 16);
    for code in &codes {
        assert_hex_code(code);
    }
}

/// Assert `code` looks like `#rrggbb` in lowercase
pub fn assert_hex_code(code: &str) {
    assert_eq!(code.len(), 7, "Bad length: {code}");
    assert!(code.starts_with('#'), "Missing '#': {code}");
    assert!(
        code[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Not lowercase hex: {code}"
    );
}
