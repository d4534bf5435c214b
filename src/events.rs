//! # Prayer time events
//!
//! [`Prayer`] names the nine events of a day and [`EventTimes`] is the fixed,
//! always complete mapping from event to value. The same container carries
//! fractional hours inside the solver and rendered values at the output.
use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use itertools::Itertools;
use serde::Deserialize;

use crate::praytimes_errors::PrayTimesError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl Prayer {
    /// Events in chronological order of a typical day, midnight last.
    pub const ALL: [Prayer; 9] = [
        Prayer::Imsak,
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Midnight,
    ];

    /// Lowercase key, e.g. `"fajr"`.
    pub fn key(&self) -> &'static str {
        match self {
            Prayer::Imsak => "imsak",
            Prayer::Fajr => "fajr",
            Prayer::Sunrise => "sunrise",
            Prayer::Dhuhr => "dhuhr",
            Prayer::Asr => "asr",
            Prayer::Sunset => "sunset",
            Prayer::Maghrib => "maghrib",
            Prayer::Isha => "isha",
            Prayer::Midnight => "midnight",
        }
    }

    /// Capitalized label for display, e.g. `"Fajr"`.
    pub fn label(&self) -> &'static str {
        match self {
            Prayer::Imsak => "Imsak",
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Sunset => "Sunset",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
            Prayer::Midnight => "Midnight",
        }
    }

    fn position(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Prayer {
    type Err = PrayTimesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prayer::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| PrayTimesError::UnknownPrayer(s.to_string()))
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One value per [`Prayer`], indexable by event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventTimes<T> {
    values: [T; 9],
}

impl<T> EventTimes<T> {
    pub fn from_fn(mut f: impl FnMut(Prayer) -> T) -> Self {
        EventTimes {
            values: Prayer::ALL.map(&mut f),
        }
    }

    pub fn get(&self, prayer: Prayer) -> &T {
        &self.values[prayer.position()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, &T)> {
        Prayer::ALL.into_iter().zip(self.values.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Prayer, &mut T)> {
        Prayer::ALL.into_iter().zip(self.values.iter_mut())
    }

    pub fn map<U>(self, mut f: impl FnMut(Prayer, T) -> U) -> EventTimes<U> {
        let mut position = 0;
        EventTimes {
            values: self.values.map(|v| {
                let prayer = Prayer::ALL[position];
                position += 1;
                f(prayer, v)
            }),
        }
    }
}

impl<T> Index<Prayer> for EventTimes<T> {
    type Output = T;

    fn index(&self, prayer: Prayer) -> &T {
        &self.values[prayer.position()]
    }
}

impl<T> IndexMut<Prayer> for EventTimes<T> {
    fn index_mut(&mut self, prayer: Prayer) -> &mut T {
        &mut self.values[prayer.position()]
    }
}

impl<T: fmt::Display> fmt::Display for EventTimes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self
            .iter()
            .map(|(prayer, value)| format!("{}: {value}", prayer.label()))
            .join(", ");
        write!(f, "{line}")
    }
}

#[cfg(test)]
mod events_test {
    use super::*;

    #[test]
    fn test_prayer_keys_round_trip() {
        for prayer in Prayer::ALL {
            assert_eq!(prayer.key().parse(), Ok(prayer));
        }
        assert_eq!(
            "tahajjud".parse::<Prayer>(),
            Err(PrayTimesError::UnknownPrayer("tahajjud".into()))
        );
    }

    #[test]
    fn test_event_times_index_and_map() {
        let mut times = EventTimes::from_fn(|p| p as usize as f64);
        assert_eq!(times[Prayer::Dhuhr], 3.0);
        times[Prayer::Isha] += 0.5;
        assert_eq!(*times.get(Prayer::Isha), 7.5);

        let doubled = times.map(|_, v| v * 2.0);
        assert_eq!(doubled[Prayer::Midnight], 16.0);
        assert_eq!(doubled.iter().count(), 9);
    }

    #[test]
    fn test_event_times_display() {
        let times = EventTimes::from_fn(|p| p.key().len());
        assert_eq!(
            times.to_string(),
            "Imsak: 5, Fajr: 4, Sunrise: 7, Dhuhr: 5, Asr: 3, Sunset: 6, Maghrib: 7, Isha: 4, Midnight: 8"
        );
    }
}
