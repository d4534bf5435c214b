//! # Rendering of prayer times
//!
//! A fractional hour is rendered once, at the very end of the pipeline, in one
//! of three formats:
//!
//! | Format  | `13.5`    | `NaN`   |
//! |---------|-----------|---------|
//! | `24h`   | `13:30`   | `-----` |
//! | `12h`   | `1:30pm`  | `-----` |
//! | `Float` | `13.5`    | `-----` |
//!
//! Clock formats add half a minute before truncating, which rounds to the
//! nearest minute instead of always down.
use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{
    constants::{Hour, INVALID_TIME, TIME_SUFFIXES},
    degree_math::fixhour,
    praytimes_errors::PrayTimesError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeFormat {
    /// Zero-padded `HH:MM`
    #[default]
    H24,
    /// `H:MM` followed by an am/pm suffix
    H12,
    /// Raw fractional hour, no normalization
    Float,
}

impl FromStr for TimeFormat {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeFormat::H24),
            "12h" => Ok(TimeFormat::H12),
            "Float" => Ok(TimeFormat::Float),
            _ => Err(PrayTimesError::UnknownTimeFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = PrayTimesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeFormat::H24 => "24h",
            TimeFormat::H12 => "12h",
            TimeFormat::Float => "Float",
        };
        write!(f, "{name}")
    }
}

/// A rendered prayer time.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedTime {
    Clock(String),
    Float(Hour),
    /// The time does not exist at this place and date
    Invalid,
}

impl FormattedTime {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FormattedTime::Invalid)
    }

    /// Hour value of a [`FormattedTime::Float`], `None` otherwise.
    pub fn as_hours(&self) -> Option<Hour> {
        match self {
            FormattedTime::Float(h) => Some(*h),
            _ => None,
        }
    }
}

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedTime::Clock(s) => write!(f, "{s}"),
            FormattedTime::Float(h) => write!(f, "{h}"),
            FormattedTime::Invalid => write!(f, "{INVALID_TIME}"),
        }
    }
}

/// Render a fractional hour with the default `am`/`pm` suffixes.
pub fn format_time(time: Hour, format: TimeFormat) -> FormattedTime {
    format_time_with_suffixes(time, format, TIME_SUFFIXES)
}

/// Render a fractional hour.
///
/// Arguments
/// ---------
/// * `time`: hour of day, may lie outside `[0, 24)` or be `NaN`
/// * `format`: the output format
/// * `suffixes`: strings appended by the 12-hour format before and after noon
///
/// Return
/// ------
/// * [`FormattedTime::Invalid`] for `NaN` or an infinite hour, whatever the format
pub fn format_time_with_suffixes(
    time: Hour,
    format: TimeFormat,
    suffixes: [&str; 2],
) -> FormattedTime {
    if !time.is_finite() {
        return FormattedTime::Invalid;
    }
    if format == TimeFormat::Float {
        return FormattedTime::Float(time);
    }

    let time = fixhour(time + 0.5 / 60.0);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor();
    let (hours, minutes) = (hours as u32, minutes as u32);

    let text = match format {
        TimeFormat::H12 => {
            let suffix = if hours < 12 { suffixes[0] } else { suffixes[1] };
            format!("{}:{minutes:02}{suffix}", (hours + 11) % 12 + 1)
        }
        _ => format!("{hours:02}:{minutes:02}"),
    };
    FormattedTime::Clock(text)
}
