use clockspeak::{convert, validate_time_format, ConvertError};

#[test]
fn test_format_check() {
    let test_cases = vec![
        ("00:00", true),
        ("23:59", true),
        ("09:05", true),
        ("24:00", false),
        ("9:5", false),
        ("9:30", false),
        ("09:5", false),
        ("ab:cd", false),
        ("", false),
        ("12:34:56", false),
        (" 12:34", false),
        ("12 34", false),
        ("-1:30", false),
    ];

    for (input, expected) in test_cases {
        assert_eq!(validate_time_format(input), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_invalid_inputs_report_the_format_error() {
    let invalid = vec!["24:00", "9:5", "ab:cd", ""];

    for input in invalid {
        let err = convert(input).unwrap_err();
        assert_eq!(err, ConvertError::InvalidTimeFormat, "Failed for input: {}", input);
        assert_eq!(err.to_string(), "Time format must be 00:00-23:59!");
    }
}

#[test]
fn test_valid_inputs_convert() {
    for input in ["00:00", "01:05", "12:30", "23:59"] {
        assert!(convert(input).is_ok(), "Failed for input: {}", input);
    }
}
