use thiserror::Error;

/// Configuration-level failures.
///
/// The astronomical computation itself never fails: an angle the sun does not
/// reach yields `NaN`, rendered as [`INVALID_TIME`](crate::constants::INVALID_TIME).
#[derive(Error, Debug)]
pub enum PrayTimesError {
    #[error("Unknown calculation method: {0}")]
    UnknownMethod(String),

    #[error("Invalid angle specification: {0}")]
    InvalidAngleSpec(String),

    #[error("Unknown asr juristic method: {0}")]
    UnknownAsrMethod(String),

    #[error("Unknown high latitude method: {0}")]
    UnknownHighLatMethod(String),

    #[error("Unknown midnight method: {0}")]
    UnknownMidnightMethod(String),

    #[error("Unknown time format: {0}")]
    UnknownTimeFormat(String),

    #[error("Unknown prayer time name: {0}")]
    UnknownPrayer(String),

    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Unable to read configuration file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Unable to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PartialEq for PrayTimesError {
    fn eq(&self, other: &Self) -> bool {
        use PrayTimesError::*;
        match (self, other) {
            (UnknownMethod(a), UnknownMethod(b)) => a == b,
            (InvalidAngleSpec(a), InvalidAngleSpec(b)) => a == b,
            (UnknownAsrMethod(a), UnknownAsrMethod(b)) => a == b,
            (UnknownHighLatMethod(a), UnknownHighLatMethod(b)) => a == b,
            (UnknownMidnightMethod(a), UnknownMidnightMethod(b)) => a == b,
            (UnknownTimeFormat(a), UnknownTimeFormat(b)) => a == b,
            (UnknownPrayer(a), UnknownPrayer(b)) => a == b,
            (UnknownSetting(a), UnknownSetting(b)) => a == b,

            // not comparable: equal when same variant
            (ConfigIo(_), ConfigIo(_)) => true,
            (ConfigParse(a), ConfigParse(b)) => a.to_string() == b.to_string(),

            _ => false,
        }
    }
}
