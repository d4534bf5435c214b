//! # Calculation parameters
//!
//! Typed forms of the values a calculation method or a user adjustment can carry:
//!
//! - [`AngleSpec`] – a depression angle in degrees, or a fixed offset in minutes
//!   (`"90 min"`), resolved once when the configuration is built
//! - [`AsrJuristic`] – shadow-length convention for the asr time
//! - [`MidnightMethod`] – which morning event closes the night
//! - [`HighLatMethod`] – fallback rule for angles the sun does not reach
//!
//! Every type parses from the textual notation of the method tables. Two parsing
//! policies exist for angle specifications: the strict [`FromStr`] implementation
//! reports malformed input, while [`AngleSpec::parse_lossy`] reads the leading
//! numeric token and defaults to `0`.
use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use crate::{
    constants::{Degree, Minute},
    praytimes_errors::PrayTimesError,
};

/// Leading numeric token of a specification, e.g. `"90"` in `"90 min"`.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.+\-]*").expect("valid leading number regex"));

/// Split a specification into its leading numeric token and the remainder.
fn split_leading_number(spec: &str) -> (&str, &str) {
    let end = LEADING_NUMBER.find(spec).map_or(0, |m| m.end());
    spec.split_at(end)
}

/// Raw configuration value: TOML numbers and strings are both accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Number(f64),
    Text(String),
}

/// Angle or minute-offset parameter of a prayer time.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawSpec")]
pub enum AngleSpec {
    /// Sun depression angle below the horizon
    Degrees(Degree),
    /// Fixed offset from the reference event
    Minutes(Minute),
}

impl AngleSpec {
    /// Numeric payload, whatever the unit.
    pub fn value(&self) -> f64 {
        match self {
            AngleSpec::Degrees(v) | AngleSpec::Minutes(v) => *v,
        }
    }

    pub fn is_minutes(&self) -> bool {
        matches!(self, AngleSpec::Minutes(_))
    }

    /// Depression angle, or `None` for a minute offset.
    pub fn degrees(&self) -> Option<Degree> {
        match self {
            AngleSpec::Degrees(v) => Some(*v),
            AngleSpec::Minutes(_) => None,
        }
    }

    /// Parse a specification without failing.
    ///
    /// The leading run of `[0-9.+-]` characters is read as the value and a
    /// missing or malformed number becomes `0`. The spec is a minute offset as
    /// soon as it contains `min`.
    ///
    /// Arguments
    /// ---------
    /// * `spec`: textual specification, e.g. `"18"`, `"90 min"`
    ///
    /// Return
    /// ------
    /// * the resolved [`AngleSpec`]
    pub fn parse_lossy(spec: &str) -> Self {
        let (number, _) = split_leading_number(spec);
        let value = number.parse::<f64>().unwrap_or_else(|_| {
            log::warn!("Malformed numeric parameter {spec:?}, using 0");
            0.0
        });
        if spec.contains("min") {
            AngleSpec::Minutes(value)
        } else {
            AngleSpec::Degrees(value)
        }
    }
}

impl FromStr for AngleSpec {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, unit) = split_leading_number(s.trim());
        let value: f64 = number
            .parse()
            .map_err(|_| PrayTimesError::InvalidAngleSpec(s.to_string()))?;
        match unit.trim() {
            "" | "deg" | "°" => Ok(AngleSpec::Degrees(value)),
            "min" => Ok(AngleSpec::Minutes(value)),
            _ => Err(PrayTimesError::InvalidAngleSpec(s.to_string())),
        }
    }
}

impl TryFrom<RawSpec> for AngleSpec {
    type Error = PrayTimesError;

    fn try_from(raw: RawSpec) -> Result<Self, Self::Error> {
        match raw {
            RawSpec::Number(v) => Ok(AngleSpec::Degrees(v)),
            RawSpec::Text(s) => s.parse(),
        }
    }
}

impl From<Degree> for AngleSpec {
    fn from(value: Degree) -> Self {
        AngleSpec::Degrees(value)
    }
}

impl fmt::Display for AngleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleSpec::Degrees(v) => write!(f, "{v}"),
            AngleSpec::Minutes(v) => write!(f, "{v} min"),
        }
    }
}

/// Juristic convention for the asr time.
///
/// Asr begins when the shadow of an object equals its noon shadow plus
/// `shadow_factor` times its height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "RawSpec")]
pub enum AsrJuristic {
    /// Shafi'i, Maliki, Ja'fari and Hanbali (factor 1)
    #[default]
    Standard,
    /// Hanafi (factor 2)
    Hanafi,
    Factor(f64),
}

impl AsrJuristic {
    pub fn shadow_factor(&self) -> f64 {
        match self {
            AsrJuristic::Standard => 1.0,
            AsrJuristic::Hanafi => 2.0,
            AsrJuristic::Factor(f) => *f,
        }
    }
}

impl FromStr for AsrJuristic {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Standard" => Ok(AsrJuristic::Standard),
            "Hanafi" => Ok(AsrJuristic::Hanafi),
            other => other
                .parse()
                .map(AsrJuristic::Factor)
                .map_err(|_| PrayTimesError::UnknownAsrMethod(s.to_string())),
        }
    }
}

impl TryFrom<RawSpec> for AsrJuristic {
    type Error = PrayTimesError;

    fn try_from(raw: RawSpec) -> Result<Self, Self::Error> {
        match raw {
            RawSpec::Number(v) => Ok(AsrJuristic::Factor(v)),
            RawSpec::Text(s) => s.parse(),
        }
    }
}

impl fmt::Display for AsrJuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsrJuristic::Standard => write!(f, "Standard"),
            AsrJuristic::Hanafi => write!(f, "Hanafi"),
            AsrJuristic::Factor(v) => write!(f, "{v}"),
        }
    }
}

/// Definition of the night used for midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum MidnightMethod {
    /// Mid sunset to sunrise
    #[default]
    Standard,
    /// Mid sunset to fajr
    Jafari,
}

impl FromStr for MidnightMethod {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(MidnightMethod::Standard),
            "Jafari" => Ok(MidnightMethod::Jafari),
            _ => Err(PrayTimesError::UnknownMidnightMethod(s.to_string())),
        }
    }
}

impl fmt::Display for MidnightMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidnightMethod::Standard => write!(f, "Standard"),
            MidnightMethod::Jafari => write!(f, "Jafari"),
        }
    }
}

/// Adjustment rule for higher latitudes.
///
/// Each variant defines the largest fraction of the night (sunset to sunrise)
/// that may separate fajr from sunrise and isha from sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HighLatMethod {
    /// Half of the night
    #[default]
    NightMiddle,
    /// One seventh of the night
    OneSeventh,
    /// `angle / 60` of the night
    AngleBased,
    /// No adjustment, unreachable angles stay invalid
    None,
}

impl HighLatMethod {
    /// Fraction of the night allowed for a twilight event of depression `angle`.
    pub fn portion(&self, angle: Degree) -> Option<f64> {
        match self {
            HighLatMethod::NightMiddle => Some(0.5),
            HighLatMethod::OneSeventh => Some(1.0 / 7.0),
            HighLatMethod::AngleBased => Some(angle / 60.0),
            HighLatMethod::None => None,
        }
    }
}

impl FromStr for HighLatMethod {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NightMiddle" => Ok(HighLatMethod::NightMiddle),
            "OneSeventh" => Ok(HighLatMethod::OneSeventh),
            "AngleBased" => Ok(HighLatMethod::AngleBased),
            "None" => Ok(HighLatMethod::None),
            _ => Err(PrayTimesError::UnknownHighLatMethod(s.to_string())),
        }
    }
}

impl fmt::Display for HighLatMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HighLatMethod::NightMiddle => "NightMiddle",
            HighLatMethod::OneSeventh => "OneSeventh",
            HighLatMethod::AngleBased => "AngleBased",
            HighLatMethod::None => "None",
        };
        write!(f, "{name}")
    }
}
