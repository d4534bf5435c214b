//! # Presentation post-processing
//!
//! Timetables published by mosques often add a safety margin of a few minutes
//! to some events. This policy is not astronomy: it is plugged in after
//! tuning, just before rendering, through the [`PostProcess`] trait.
//!
//! ```rust
//! use praytimes::events::Prayer;
//! use praytimes::methods::Method;
//! use praytimes::post_process::MinuteShifts;
//! use praytimes::praytimes::PrayTimes;
//!
//! let pt = PrayTimes::new(Method::MWL);
//! let shifts = MinuteShifts::new().shift(Prayer::Asr, 5.0).shift(Prayer::Isha, 12.0);
//! let times = pt.get_times_with((2024, 6, 21), (11.495351, 79.759439), 5.5, false, &shifts);
//! assert_eq!(times[Prayer::Isha].to_string(), "20:03");
//! ```
use crate::{
    constants::{Hour, Minute},
    events::{EventTimes, Prayer},
};

/// Transformation applied to tuned hours before rendering.
pub trait PostProcess {
    fn apply(&self, times: &mut EventTimes<Hour>);
}

impl<F> PostProcess for F
where
    F: Fn(&mut EventTimes<Hour>),
{
    fn apply(&self, times: &mut EventTimes<Hour>) {
        self(times)
    }
}

/// Fixed minute shifts per event. Shifts of the same event accumulate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinuteShifts {
    shifts: Vec<(Prayer, Minute)>,
}

impl MinuteShifts {
    pub fn new() -> Self {
        MinuteShifts::default()
    }

    pub fn shift(mut self, prayer: Prayer, minutes: Minute) -> Self {
        self.shifts.push((prayer, minutes));
        self
    }

    /// Tamil Nadu timetable columns for the standard asr: asr +5, iftar
    /// (maghrib) +9 and isha +12. Dhuhr and sunset keep their computed value;
    /// the noon line is a separate view, see [`MinuteShifts::noon_line`].
    pub fn tamil_nadu_display() -> Self {
        MinuteShifts::new()
            .shift(Prayer::Asr, 5.0)
            .shift(Prayer::Maghrib, 9.0)
            .shift(Prayer::Isha, 12.0)
    }

    /// Same columns for times computed with the Hanafi asr, which only gets +2.
    pub fn tamil_nadu_hanafi_display() -> Self {
        MinuteShifts::new()
            .shift(Prayer::Asr, 2.0)
            .shift(Prayer::Maghrib, 9.0)
            .shift(Prayer::Isha, 12.0)
    }

    /// Noon line of the Tamil Nadu timetables: dhuhr shown 15 minutes earlier.
    /// Applied on its own so that plain dhuhr stays available next to it.
    pub fn noon_line() -> Self {
        MinuteShifts::new().shift(Prayer::Dhuhr, -15.0)
    }
}

impl PostProcess for MinuteShifts {
    fn apply(&self, times: &mut EventTimes<Hour>) {
        for &(prayer, minutes) in &self.shifts {
            times[prayer] += minutes / 60.0;
        }
    }
}
