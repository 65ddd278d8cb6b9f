// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::ParseDurationError;

/// The component fields of an ISO 8601 duration.
///
/// Fields that do not appear in the parsed string are zero. The value is
/// never normalized: `P13M` stays thirteen months rather than a year and a
/// month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    pub years: u16,
    pub months: u16,
    pub weeks: u16,
    pub days: u16,
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
}

/// One field of a [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

const GROUP_NAMES: &[(&str, Unit)] = &[
    ("year", Unit::Years),
    ("month", Unit::Months),
    ("week", Unit::Weeks),
    ("day", Unit::Days),
    ("hour", Unit::Hours),
    ("minute", Unit::Minutes),
    ("second", Unit::Seconds),
];

impl Unit {
    /// Looks up the unit a capture group name stands for.
    pub(crate) fn from_group_name(name: &str) -> Option<Self> {
        GROUP_NAMES
            .iter()
            .find_map(|&(k, unit)| if k == name { Some(unit) } else { None })
    }

    /// Name of the capture group that carries this unit.
    pub fn group_name(self) -> &'static str {
        match self {
            Unit::Years => "year",
            Unit::Months => "month",
            Unit::Weeks => "week",
            Unit::Days => "day",
            Unit::Hours => "hour",
            Unit::Minutes => "minute",
            Unit::Seconds => "second",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.group_name())
    }
}

impl Duration {
    pub fn get(&self, unit: Unit) -> u16 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub(crate) fn set(&mut self, unit: Unit, value: u16) {
        let field = match unit {
            Unit::Years => &mut self.years,
            Unit::Months => &mut self.months,
            Unit::Weeks => &mut self.weeks,
            Unit::Days => &mut self.days,
            Unit::Hours => &mut self.hours,
            Unit::Minutes => &mut self.minutes,
            Unit::Seconds => &mut self.seconds,
        };
        *field = value;
    }

    /// Returns `true` if any of hours, minutes or seconds is non-zero.
    pub fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0
    }

    /// Returns `true` if any of years, months, weeks or days is non-zero.
    pub fn has_date_part(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    pub fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }
}

impl FromStr for Duration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_duration(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{Duration, Unit, GROUP_NAMES};

    #[test]
    fn test_group_names() {
        for &(name, unit) in GROUP_NAMES {
            assert_eq!(Unit::from_group_name(name), Some(unit));
            assert_eq!(unit.group_name(), name);
            assert_eq!(unit.to_string(), name);
        }

        assert_eq!(Unit::from_group_name("fortnight"), None);
        // group names are matched exactly
        assert_eq!(Unit::from_group_name("Year"), None);
        assert_eq!(Unit::from_group_name("years"), None);
        assert_eq!(Unit::from_group_name(""), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut duration = Duration::default();
        for (value, &(_, unit)) in (1..).zip(GROUP_NAMES) {
            duration.set(unit, value);
        }

        assert_eq!(
            duration,
            Duration {
                years: 1,
                months: 2,
                weeks: 3,
                days: 4,
                hours: 5,
                minutes: 6,
                seconds: 7,
            }
        );
        assert_eq!(duration.get(Unit::Weeks), 3);
        assert_eq!(duration.get(Unit::Seconds), 7);
    }

    #[test]
    fn test_parts() {
        assert!(Duration::default().is_zero());
        assert!(!Duration::default().has_date_part());
        assert!(!Duration::default().has_time_part());

        let date_only = Duration {
            weeks: 2,
            ..Default::default()
        };
        assert!(date_only.has_date_part());
        assert!(!date_only.has_time_part());
        assert!(!date_only.is_zero());

        let time_only = Duration {
            seconds: 30,
            ..Default::default()
        };
        assert!(!time_only.has_date_part());
        assert!(time_only.has_time_part());
        assert!(!time_only.is_zero());
    }

    #[test]
    fn test_from_str() {
        let duration: Duration = "P3D".parse().unwrap();
        assert_eq!(duration.days, 3);
        assert!("P3X".parse::<Duration>().is_err());
    }
}
