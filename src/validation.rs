//! Validation for clock time input strings.
//
// This module provides the HH:MM format check that guards the converter.

use once_cell::sync::Lazy;
use regex::Regex;

// Anchored 24-hour pattern, leading zeros required ("01:05" valid, "1:5" not)
static TIME_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap());

/// Validate that a time string has the 24-hour HH:MM format
pub fn validate_time_format(time: &str) -> bool {
    TIME_FORMAT.is_match(time)
}

/// Split a time string into hour and minute values
///
/// # Arguments
///
/// * `time` - The time string to split (e.g., "14:40")
///
/// # Returns
///
/// * `Option<(u32, u32)>` - The hour and minute, or `None` if the format check fails
pub fn parse_time(time: &str) -> Option<(u32, u32)> {
    let caps = TIME_FORMAT.captures(time)?;
    let hours = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let minutes = caps.get(2)?.as_str().parse::<u32>().ok()?;
    Some((hours, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_time_format() {
        let test_cases = vec![
            ("00:00", true),
            ("01:05", true),
            ("09:59", true),
            ("12:30", true),
            ("19:07", true),
            ("23:59", true),
            ("24:00", false),
            ("23:60", false),
            ("1:5", false),
            ("9:30", false),
            ("ab:cd", false),
            ("12:3", false),
            ("", false),
            ("12:30 ", false),
            ("12-30", false),
        ];

        for (input, expected) in test_cases {
            assert_eq!(validate_time_format(input), expected, "Failed for input: {}", input);
        }
    }

    #[test]
    fn test_validate_is_pure() {
        // Same input twice must give the same answer
        assert_eq!(validate_time_format("07:45"), validate_time_format("07:45"));
        assert_eq!(validate_time_format("25:00"), validate_time_format("25:00"));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("14:40"), Some((14, 40)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("garbage"), None);
    }
}
