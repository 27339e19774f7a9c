//! Shape checks for event date and time fields.
//!
//! Only the layout is checked. `2024-13-99` and `25:99` are accepted; the
//! fields are compared as plain strings everywhere else, so a well-shaped
//! value is all ordering needs.

/// Returns true if `s` looks like `YYYY-MM-DD`.
pub fn validate_date(s: &str) -> bool {
    matches_shape(s, b"dddd-dd-dd")
}

/// Returns true if `s` looks like `HH:MM`.
pub fn validate_time(s: &str) -> bool {
    matches_shape(s, b"dd:dd")
}

/// `d` in the pattern stands for any ASCII digit; every other byte must match literally.
fn matches_shape(s: &str, pattern: &[u8]) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == pattern.len()
        && bytes.iter().zip(pattern).all(|(b, p)| match p {
            b'd' => b.is_ascii_digit(),
            _ => b == p,
        })
}
