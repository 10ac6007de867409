//! Phone number display formatting.

/// Maximum number of digits kept from the input.
pub const MAX_PHONE_DIGITS: usize = 10;

/// Format raw phone input into `(NNN) NNN-NNNN`.
///
/// Non-digits are dropped and only the first ten digits are kept, so feeding
/// the output back in yields the same string. Shorter inputs are formatted
/// partially:
///
/// | digits | output          |
/// |--------|-----------------|
/// | 0–2    | `55`            |
/// | 3      | `(555)`         |
/// | 4–5    | `(555) 12`      |
/// | 6      | `(555) 123`     |
/// | 7–10   | `(555) 123-4567`|
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    // All chars are ASCII digits, so byte slicing is safe.
    match digits.len() {
        0..=2 => digits,
        3 => format!("({})", digits),
        4..=5 => format!("({}) {}", &digits[..3], &digits[3..]),
        6 => format!("({}) {}", &digits[..3], &digits[3..6]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_untouched() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("5"), "5");
        assert_eq!(format_phone("55"), "55");
    }

    #[test]
    fn test_partial_formatting() {
        assert_eq!(format_phone("555"), "(555)");
        assert_eq!(format_phone("5551"), "(555) 1");
        assert_eq!(format_phone("55512"), "(555) 12");
        assert_eq!(format_phone("555123"), "(555) 123");
        assert_eq!(format_phone("5551234"), "(555) 123-4");
    }

    #[test]
    fn test_full_formatting() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
    }

    #[test]
    fn test_extra_digits_ignored() {
        assert_eq!(format_phone("55512345678"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123-45679"), "(555) 123-4567");
    }

    #[test]
    fn test_idempotent() {
        for raw in ["5", "555", "55512", "555123", "5551234", "5551234567", "abc555xyz1234567890"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_non_digits_dropped() {
        assert_eq!(format_phone("abc"), "");
        assert_eq!(format_phone("+1 (555)"), "(155) 5");
    }
}
