// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! The two patterns a duration is matched against.
//!
//! The shape pattern only checks the skeleton:
//!
//! ```text
//! [ "P" [ date-run ] ] [ "T"+ time-run+ ]
//!
//! date-run = { digit | "Y" | "M" } , digit , { digit } , ( "Y" | "M" | "D" ) ;
//! time-run = { digit | "H" | "M" } , digit , ( "H" | "M" | "S" ) ;
//! ```
//!
//! The field pattern fixes the unit order and captures one named group per
//! unit. Hours are limited to 0-23, minutes and seconds to 0-59. Years, months
//! and days take any number of digits.
//!
//! Both use `[0-9]` instead of `\d`, which would also match non-ASCII digits.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DURATION_SHAPE: Regex =
        Regex::new(r"^(?:P(?:[0-9YM]*[0-9]+[YMD])?)?(?:T+(?:[0-9HM]*[0-9][HMS])+)?$")
            .expect("failed to parse 'DURATION_SHAPE'");
    pub(crate) static ref DURATION_FIELDS: Regex = Regex::new(
        r"(?x)
        ^
        (?:P
            (?:(?P<year>[0-9]+)Y)?
            (?:(?P<month>[0-9]+)M)?
            (?:(?P<day>[0-9]+)D)?
        )?
        (?:T+
            (?:(?P<hour>[01]?[0-9]|2[0-3])H)?
            (?:(?P<minute>[0-5]?[0-9])M)?
            (?:(?P<second>[0-5]?[0-9])S)?
        )?
        $"
    )
    .expect("failed to parse 'DURATION_FIELDS'");
}

/// Cheap structural gate run before field extraction.
///
/// A string without a single digit names no unit and is rejected here, so
/// `""`, `"P"`, `"T"` and `"PT"` never reach the field pattern.
pub(crate) fn has_duration_shape(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit()) && DURATION_SHAPE.is_match(s)
}
