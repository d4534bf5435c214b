//! # Calculation settings and configuration
//!
//! This module defines the configuration a computation runs against:
//!
//! - [`Settings`] – the active method parameters plus the global options
//!   (`imsak`, `dhuhr`, `asr`, `high_lats`)
//! - [`Adjustment`] – a partial set of settings, merged key by key
//! - [`TimeOffsets`] – per-event minute offsets applied after all astronomy
//! - [`PrayerConfig`] – the immutable snapshot handed to
//!   [`compute_times`](crate::praytimes::compute_times), loadable from TOML
//!
//! ## Configuration file
//!
//! ```toml
//! method = "Makkah"
//! format = "12h"
//!
//! [adjust]
//! asr = "Hanafi"
//! high_lats = "AngleBased"
//! imsak = "10 min"
//!
//! [tune]
//! asr = 5
//! isha = 12
//! ```
//!
//! Every key is optional. Settings start from the method parameters, then the
//! `[adjust]` table is merged in, then `[tune]` offsets.
use std::{collections::BTreeMap, fs, path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    constants::{Minute, DEFAULT_ITERATIONS, TIME_SUFFIXES},
    events::{EventTimes, Prayer},
    format::TimeFormat,
    methods::{Method, MethodParams},
    params::{AngleSpec, AsrJuristic, HighLatMethod, MidnightMethod},
    praytimes_errors::PrayTimesError,
};

/// Complete set of calculation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Angle, or minutes before fajr
    pub imsak: AngleSpec,
    pub fajr: AngleSpec,
    /// Minutes added to solar noon
    pub dhuhr: Minute,
    pub asr: AsrJuristic,
    /// Angle, or minutes subtracted from sunset
    pub maghrib: AngleSpec,
    /// Angle, or minutes subtracted from maghrib
    pub isha: AngleSpec,
    pub midnight: MidnightMethod,
    pub high_lats: HighLatMethod,
}

impl Settings {
    /// Global defaults combined with the parameters of `method`.
    pub fn for_method(method: Method) -> Self {
        let mut settings = Settings {
            imsak: AngleSpec::Minutes(20.0),
            fajr: AngleSpec::Degrees(0.0),
            dhuhr: 15.0,
            asr: AsrJuristic::Standard,
            maghrib: AngleSpec::Minutes(0.0),
            isha: AngleSpec::Degrees(0.0),
            midnight: MidnightMethod::Standard,
            high_lats: HighLatMethod::NightMiddle,
        };
        settings.apply_method(&method.params());
        settings
    }

    /// Overwrite the method-owned keys, keeping the global options.
    pub fn apply_method(&mut self, params: &MethodParams) {
        self.fajr = params.fajr;
        self.isha = params.isha;
        self.maghrib = params.maghrib;
        self.midnight = params.midnight;
    }

    /// Key-wise merge: only the keys present in `adjustment` change.
    pub fn merge(&mut self, adjustment: &Adjustment) {
        if let Some(imsak) = adjustment.imsak {
            self.imsak = imsak;
        }
        if let Some(fajr) = adjustment.fajr {
            self.fajr = fajr;
        }
        if let Some(dhuhr) = adjustment.dhuhr {
            self.dhuhr = dhuhr.value();
        }
        if let Some(asr) = adjustment.asr {
            self.asr = asr;
        }
        if let Some(maghrib) = adjustment.maghrib {
            self.maghrib = maghrib;
        }
        if let Some(isha) = adjustment.isha {
            self.isha = isha;
        }
        if let Some(midnight) = adjustment.midnight {
            self.midnight = midnight;
        }
        if let Some(high_lats) = adjustment.high_lats {
            self.high_lats = high_lats;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::for_method(Method::default())
    }
}

/// Partial settings. `None` keeps the current value.
///
/// ```rust
/// use praytimes::params::{AsrJuristic, HighLatMethod};
/// use praytimes::settings::Adjustment;
///
/// let adjustment = Adjustment {
///     asr: Some(AsrJuristic::Hanafi),
///     high_lats: Some(HighLatMethod::OneSeventh),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Adjustment {
    pub imsak: Option<AngleSpec>,
    pub fajr: Option<AngleSpec>,
    pub dhuhr: Option<AngleSpec>,
    pub asr: Option<AsrJuristic>,
    pub maghrib: Option<AngleSpec>,
    pub isha: Option<AngleSpec>,
    pub midnight: Option<MidnightMethod>,
    pub high_lats: Option<HighLatMethod>,
}

impl Adjustment {
    /// Build an adjustment from `(key, value)` pairs in the textual notation
    /// of the method tables, e.g. `("isha", "90 min")`, `("asr", "Hanafi")`.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, PrayTimesError> {
        let mut adjustment = Adjustment::default();
        for (key, value) in pairs {
            match key {
                "imsak" => adjustment.imsak = Some(value.parse()?),
                "fajr" => adjustment.fajr = Some(value.parse()?),
                "dhuhr" => adjustment.dhuhr = Some(value.parse()?),
                "asr" => adjustment.asr = Some(value.parse()?),
                "maghrib" => adjustment.maghrib = Some(value.parse()?),
                "isha" => adjustment.isha = Some(value.parse()?),
                "midnight" => adjustment.midnight = Some(value.parse()?),
                "highLats" | "high_lats" => adjustment.high_lats = Some(value.parse()?),
                other => return Err(PrayTimesError::UnknownSetting(other.to_string())),
            }
        }
        Ok(adjustment)
    }
}

/// Minute offsets added to each event after all astronomical computation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeOffsets(EventTimes<Minute>);

impl TimeOffsets {
    pub fn get(&self, prayer: Prayer) -> Minute {
        self.0[prayer]
    }

    pub fn set(&mut self, prayer: Prayer, minutes: Minute) {
        self.0[prayer] = minutes;
    }

    /// Key-wise merge, events absent from `offsets` keep their offset.
    pub fn merge(&mut self, offsets: impl IntoIterator<Item = (Prayer, Minute)>) {
        for (prayer, minutes) in offsets {
            self.set(prayer, minutes);
        }
    }

    pub fn as_event_times(&self) -> &EventTimes<Minute> {
        &self.0
    }
}

/// Immutable snapshot of everything a computation depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerConfig {
    pub method: Method,
    pub settings: Settings,
    pub offsets: TimeOffsets,
    pub format: TimeFormat,
    pub suffixes: [String; 2],
    /// Number of refinement passes of the solver
    pub iterations: usize,
}

impl PrayerConfig {
    pub fn new(method: Method) -> Self {
        PrayerConfig {
            method,
            settings: Settings::for_method(method),
            offsets: TimeOffsets::default(),
            format: TimeFormat::default(),
            suffixes: TIME_SUFFIXES.map(String::from),
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Parse a configuration from TOML text.
    ///
    /// Arguments
    /// ---------
    /// * `content`: TOML document, see the module documentation for the keys
    ///
    /// Return
    /// ------
    /// * the configuration, or a [`PrayTimesError`] for invalid TOML or unknown values
    pub fn from_toml_str(content: &str) -> Result<Self, PrayTimesError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.into_config())
    }

    /// Load a configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PrayTimesError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

impl Default for PrayerConfig {
    fn default() -> Self {
        PrayerConfig::new(Method::default())
    }
}

impl FromStr for PrayerConfig {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrayerConfig::from_toml_str(s)
    }
}

/// On-disk layout of a [`PrayerConfig`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    method: Method,
    #[serde(default)]
    format: TimeFormat,
    suffixes: Option<[String; 2]>,
    iterations: Option<usize>,
    #[serde(default)]
    adjust: Adjustment,
    #[serde(default)]
    tune: BTreeMap<Prayer, Minute>,
}

impl ConfigFile {
    fn into_config(self) -> PrayerConfig {
        let mut config = PrayerConfig::new(self.method);
        config.settings.merge(&self.adjust);
        config.offsets.merge(self.tune);
        config.format = self.format;
        if let Some(suffixes) = self.suffixes {
            config.suffixes = suffixes;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        config
    }
}
