// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
use std::num::ParseIntError;

use thiserror::Error;

use crate::duration::Unit;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDurationError {
    /// The input is not shaped like an ISO 8601 duration, or its units are
    /// out of order or out of range for the time portion.
    #[error("not iso8601 format")]
    BadFormat,

    /// A matched digit run does not fit the field width.
    #[error("{unit} value out of range: {source}")]
    NumericOverflow {
        unit: Unit,
        #[source]
        source: ParseIntError,
    },

    /// The pattern produced a capture group that maps to no field.
    #[error("unknown field {0}")]
    UnknownField(String),
}
