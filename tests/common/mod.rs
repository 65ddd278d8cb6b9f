// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use iso8601_duration::{parse_duration, Duration, ParseDurationError};

pub fn check_fields(input: &str, expected: Duration) {
    let parsed = match parse_duration(input) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse duration from value '{input}': {e}"),
    };

    assert_eq!(parsed, expected, "Input value: {input}");
}

pub fn check_bad_format(input: &str) {
    assert_eq!(
        parse_duration(input),
        Err(ParseDurationError::BadFormat),
        "Input value: {input:?}"
    );
}
