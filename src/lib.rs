// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
//! A Rust crate for parsing ISO 8601 duration strings such as `P1Y2M10DT2H30M`
//! into their component fields.
//!
//! The parsed [`Duration`] keeps every unit as written. It is never turned into
//! a fixed span of seconds, since months and years have no fixed length.
//!
//! Supported forms:
//!
//! * date units, e.g. "P1Y", "P1Y2M10D"
//! * time units, e.g. "PT2H30M", "PT45S"
//! * both, e.g. "P1Y2M10DT2H30M"
//!
mod duration;
mod error;
mod parse_duration;
mod patterns;

pub use duration::{Duration, Unit};
pub use error::ParseDurationError;

/// Parses an ISO 8601 duration string and returns its component fields.
///
/// The input is matched twice: first against a loose skeleton of the
/// duration syntax, then against a strict pattern that fixes the unit order
/// (years, months, days, then hours, minutes, seconds) and captures each
/// unit's digits.
///
/// # Arguments
///
/// * `s` - A string slice holding the duration.
///
/// # Examples
///
/// ```
/// use iso8601_duration::{parse_duration, Duration};
///
/// let duration = parse_duration("P1Y2M10DT2H30M").unwrap();
/// assert_eq!(
///     duration,
///     Duration {
///         years: 1,
///         months: 2,
///         days: 10,
///         hours: 2,
///         minutes: 30,
///         ..Default::default()
///     }
/// );
/// ```
///
/// # Returns
///
/// * `Ok(Duration)` - If the input string is a valid ISO 8601 duration
/// * `Err(ParseDurationError)` - If it is not
///
/// # Errors
///
/// * `ParseDurationError::BadFormat` if the string fails either match. A
///   string without any digits (`""`, `"P"`, `"PT"`) is rejected as well.
/// * `ParseDurationError::NumericOverflow` if a unit's value does not fit in
///   a `u16`.
/// * `ParseDurationError::UnknownField` if the pattern yields a group that
///   maps to no field.
pub fn parse_duration<S: AsRef<str>>(s: S) -> Result<Duration, ParseDurationError> {
    parse_duration::parse_duration(s.as_ref())
}
