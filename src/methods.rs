//! # Calculation methods
//!
//! Registry of the conventions published by the major Islamic authorities.
//! Each entry is fully resolved: the defaults every method shares
//! (`maghrib = 0 min`, `midnight = Standard`) are already merged in, and an
//! explicit value of the method always wins over them.
//!
//! | Id      | Fajr  | Isha   | Maghrib | Midnight |
//! |---------|-------|--------|---------|----------|
//! | MWL     | 18°   | 17°    | 0 min   | Standard |
//! | ISNA    | 15°   | 15°    | 0 min   | Standard |
//! | Egypt   | 19.5° | 17.5°  | 0 min   | Standard |
//! | Makkah  | 18.5° | 90 min | 0 min   | Standard |
//! | Karachi | 18°   | 18°    | 0 min   | Standard |
//! | Tehran  | 17.7° | 14°    | 4.5°    | Jafari   |
//! | Jafari  | 16°   | 14°    | 4°      | Jafari   |
//! | TN      | 18°   | 18°    | 0 min   | Standard |
use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::{
    params::{AngleSpec, MidnightMethod},
    praytimes_errors::PrayTimesError,
};

/// Angle parameters defining a calculation method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodParams {
    pub fajr: AngleSpec,
    pub isha: AngleSpec,
    pub maghrib: AngleSpec,
    pub midnight: MidnightMethod,
}

const DEFAULT_MAGHRIB: AngleSpec = AngleSpec::Minutes(0.0);
const DEFAULT_MIDNIGHT: MidnightMethod = MidnightMethod::Standard;

const fn standard_params(fajr: f64, isha: AngleSpec) -> MethodParams {
    MethodParams {
        fajr: AngleSpec::Degrees(fajr),
        isha,
        maghrib: DEFAULT_MAGHRIB,
        midnight: DEFAULT_MIDNIGHT,
    }
}

/// Named calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Method {
    /// Muslim World League
    #[default]
    MWL,
    /// Islamic Society of North America
    ISNA,
    /// Egyptian General Authority of Survey
    Egypt,
    /// Umm Al-Qura University, Makkah
    Makkah,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum
    Jafari,
    /// Tamil Nadu
    TN,
}

impl Method {
    pub const ALL: [Method; 8] = [
        Method::MWL,
        Method::ISNA,
        Method::Egypt,
        Method::Makkah,
        Method::Karachi,
        Method::Tehran,
        Method::Jafari,
        Method::TN,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn id(&self) -> &'static str {
        match self {
            Method::MWL => "MWL",
            Method::ISNA => "ISNA",
            Method::Egypt => "Egypt",
            Method::Makkah => "Makkah",
            Method::Karachi => "Karachi",
            Method::Tehran => "Tehran",
            Method::Jafari => "Jafari",
            Method::TN => "TN",
        }
    }

    /// Display name of the issuing authority.
    pub fn name(&self) -> &'static str {
        match self {
            Method::MWL => "Muslim World League",
            Method::ISNA => "Islamic Society of North America (ISNA)",
            Method::Egypt => "Egyptian General Authority of Survey",
            Method::Makkah => "Umm Al-Qura University, Makkah",
            Method::Karachi => "University of Islamic Sciences, Karachi",
            Method::Tehran => "Institute of Geophysics, University of Tehran",
            Method::Jafari => "Shia Ithna-Ashari, Leva Institute, Qum",
            Method::TN => "Tamil Nadu",
        }
    }

    /// Fully resolved parameters of the method.
    pub const fn params(&self) -> MethodParams {
        match self {
            Method::MWL => standard_params(18.0, AngleSpec::Degrees(17.0)),
            Method::ISNA => standard_params(15.0, AngleSpec::Degrees(15.0)),
            Method::Egypt => standard_params(19.5, AngleSpec::Degrees(17.5)),
            // fajr was 19 degrees before 1430 hijri
            Method::Makkah => standard_params(18.5, AngleSpec::Minutes(90.0)),
            Method::Karachi => standard_params(18.0, AngleSpec::Degrees(18.0)),
            // isha is not explicitly specified in this method
            Method::Tehran => MethodParams {
                fajr: AngleSpec::Degrees(17.7),
                isha: AngleSpec::Degrees(14.0),
                maghrib: AngleSpec::Degrees(4.5),
                midnight: MidnightMethod::Jafari,
            },
            Method::Jafari => MethodParams {
                fajr: AngleSpec::Degrees(16.0),
                isha: AngleSpec::Degrees(14.0),
                maghrib: AngleSpec::Degrees(4.0),
                midnight: MidnightMethod::Jafari,
            },
            Method::TN => standard_params(18.0, AngleSpec::Degrees(18.0)),
        }
    }

    /// Resolve a method by identifier, falling back to [`Method::MWL`].
    pub fn from_name_or_default(name: &str) -> Method {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown calculation method {name:?}, falling back to MWL");
            Method::default()
        })
    }
}

impl FromStr for Method {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| PrayTimesError::UnknownMethod(s.to_string()))
    }
}

impl TryFrom<String> for Method {
    type Error = PrayTimesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod methods_test {
    use super::*;

    #[test]
    fn test_method_table() {
        let mwl = Method::MWL.params();
        assert_eq!(mwl.fajr, AngleSpec::Degrees(18.0));
        assert_eq!(mwl.isha, AngleSpec::Degrees(17.0));
        assert_eq!(mwl.maghrib, AngleSpec::Minutes(0.0));
        assert_eq!(mwl.midnight, MidnightMethod::Standard);

        let makkah = Method::Makkah.params();
        assert_eq!(makkah.isha, AngleSpec::Minutes(90.0));

        let tehran = Method::Tehran.params();
        assert_eq!(tehran.maghrib, AngleSpec::Degrees(4.5));
        assert_eq!(tehran.midnight, MidnightMethod::Jafari);
    }

    #[test]
    fn test_every_method_has_defaults_merged() {
        for method in Method::ALL {
            let params = method.params();
            match method {
                Method::Tehran | Method::Jafari => {
                    assert_eq!(params.midnight, MidnightMethod::Jafari);
                    assert!(!params.maghrib.is_minutes());
                }
                _ => {
                    assert_eq!(params.midnight, MidnightMethod::Standard);
                    assert_eq!(params.maghrib, AngleSpec::Minutes(0.0));
                }
            }
        }
    }

    #[test]
    fn test_method_from_str() {
        for method in Method::ALL {
            assert_eq!(method.id().parse(), Ok(method));
        }
        assert_eq!(
            "Mars".parse::<Method>(),
            Err(PrayTimesError::UnknownMethod("Mars".into()))
        );
        assert_eq!(Method::from_name_or_default("Mars"), Method::MWL);
        assert_eq!(Method::from_name_or_default("Egypt"), Method::Egypt);
        assert_eq!(Method::TN.name(), "Tamil Nadu");
    }
}
