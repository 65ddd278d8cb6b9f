// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
use regex::Regex;

use crate::duration::{Duration, Unit};
use crate::patterns::{has_duration_shape, DURATION_FIELDS};
use crate::ParseDurationError;

pub(crate) fn parse_duration(s: &str) -> Result<Duration, ParseDurationError> {
    if !has_duration_shape(s) {
        return Err(ParseDurationError::BadFormat);
    }
    extract_fields(&DURATION_FIELDS, s)
}

/// Matches `s` against `pattern` and fills one field per named group.
///
/// Groups that did not take part in the match, or matched an empty string,
/// leave their field at zero.
fn extract_fields(pattern: &Regex, s: &str) -> Result<Duration, ParseDurationError> {
    let captures = pattern.captures(s).ok_or(ParseDurationError::BadFormat)?;

    let mut duration = Duration::default();
    for name in pattern.capture_names().flatten() {
        let digits = match captures.name(name) {
            Some(m) if !m.as_str().is_empty() => m.as_str(),
            _ => continue,
        };

        let unit = Unit::from_group_name(name)
            .ok_or_else(|| ParseDurationError::UnknownField(name.to_owned()))?;
        let value = digits
            .parse::<u16>()
            .map_err(|source| ParseDurationError::NumericOverflow { unit, source })?;

        duration.set(unit, value);
    }

    Ok(duration)
}
