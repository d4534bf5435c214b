//! # Prayer time solver
//!
//! Computes the hour of each event for one day and one place, given the
//! calculation [`Settings`].
//!
//! ## Algorithm
//!
//! 1. Start from fixed hour-of-day guesses
//!    ([`INITIAL_GUESSES`](crate::constants::INITIAL_GUESSES)).
//! 2. Run a fixed number of refinement passes. Each pass evaluates the sun
//!    position at the time of day of the current guess of every event, which
//!    captures the drift of declination and equation of time across the day.
//! 3. Shift every event from local mean time to the requested timezone.
//! 4. Apply the high latitude rule ([`crate::high_lats`]).
//! 5. Resolve minute-based parameters by subtraction from their anchor:
//!    imsak from fajr, maghrib from sunset, isha from maghrib.
//! 6. Add the dhuhr minute offset and derive midnight.
//!
//! Times are fractional hours and may lie outside `[0, 24)`. An angle the sun
//! never reaches yields `NaN`.
use crate::{
    constants::{Degree, Hour, DEGREES_PER_HOUR, INITIAL_GUESSES},
    coordinates::Coordinates,
    degree_math::{darccos, darccot, dcos, dsin, dtan, fixhour, time_diff},
    events::{EventTimes, Prayer},
    high_lats::adjust_high_lats,
    params::{AngleSpec, MidnightMethod},
    settings::Settings,
    sun_position::sun_position,
    time::CalendarDate,
};

/// Side of solar noon on which an event falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Counter-clockwise: morning events
    BeforeNoon,
    /// Clockwise: afternoon and evening events
    AfterNoon,
}

/// Prayer time solver bound to one date, place and timezone.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    settings: &'a Settings,
    coords: Coordinates,
    /// Julian day of the date, shifted to local mean midnight
    jdate: f64,
    /// Timezone in hours, daylight saving included
    timezone: Hour,
}

impl<'a> Solver<'a> {
    /// Bind the solver to a date and a place.
    ///
    /// Arguments
    /// ---------
    /// * `settings`: calculation parameters
    /// * `date`: the Gregorian calendar date
    /// * `coords`: the observer position
    /// * `timezone`: offset of local civil time from UT, in hours
    /// * `dst`: whether daylight saving time is in effect (adds one hour)
    pub fn new(
        settings: &'a Settings,
        date: CalendarDate,
        coords: Coordinates,
        timezone: Hour,
        dst: bool,
    ) -> Self {
        let timezone = timezone + if dst { 1.0 } else { 0.0 };
        let jdate = date.julian_day() - coords.longitude / (DEGREES_PER_HOUR * 24.0);
        Solver {
            settings,
            coords,
            jdate,
            timezone,
        }
    }

    /// Local mean time of solar noon.
    ///
    /// Arguments
    /// ---------
    /// * `time`: day fraction at which the equation of time is evaluated
    fn mid_day(&self, time: f64) -> Hour {
        let eqt = sun_position(self.jdate + time).equation_of_time;
        fixhour(12.0 - eqt)
    }

    /// Time at which the sun is `angle` degrees below the horizon.
    ///
    /// Arguments
    /// ---------
    /// * `angle`: depression angle, negative above the horizon
    /// * `time`: day fraction at which the sun position is evaluated
    /// * `direction`: morning or evening crossing
    ///
    /// Return
    /// ------
    /// * the hour of the crossing, `NaN` when the sun never reaches `angle`
    fn sun_angle_time(&self, angle: Degree, time: f64, direction: Direction) -> Hour {
        let decl = sun_position(self.jdate + time).declination;
        let noon = self.mid_day(time);
        let lat = self.coords.latitude;
        let t = darccos((-dsin(angle) - dsin(decl) * dsin(lat)) / (dcos(decl) * dcos(lat)))
            / DEGREES_PER_HOUR;
        match direction {
            Direction::BeforeNoon => noon - t,
            Direction::AfterNoon => noon + t,
        }
    }

    /// Time at which the shadow of an object reaches `factor` times its height
    /// plus its noon shadow.
    fn asr_time(&self, factor: f64, time: f64) -> Hour {
        let decl = sun_position(self.jdate + time).declination;
        let angle = -darccot(factor + dtan((self.coords.latitude - decl).abs()));
        self.sun_angle_time(angle, time, Direction::AfterNoon)
    }

    /// Angle-based event, or the unchanged guess for a minute offset resolved later.
    fn angle_event(&self, spec: AngleSpec, guess: Hour, direction: Direction) -> Hour {
        match spec.degrees() {
            Some(angle) => self.sun_angle_time(angle, guess / 24.0, direction),
            None => guess,
        }
    }

    /// One refinement pass over every solved event.
    fn compute_prayer_times(&self, guesses: &EventTimes<Hour>) -> EventTimes<Hour> {
        let settings = self.settings;
        let rise_set = self.coords.rise_set_angle();

        EventTimes::from_fn(|prayer| {
            let guess = guesses[prayer];
            let day_portion = guess / 24.0;
            match prayer {
                Prayer::Imsak => self.angle_event(settings.imsak, guess, Direction::BeforeNoon),
                Prayer::Fajr => self.angle_event(settings.fajr, guess, Direction::BeforeNoon),
                Prayer::Sunrise => self.sun_angle_time(rise_set, day_portion, Direction::BeforeNoon),
                Prayer::Dhuhr => self.mid_day(day_portion),
                Prayer::Asr => self.asr_time(settings.asr.shadow_factor(), day_portion),
                Prayer::Sunset => self.sun_angle_time(rise_set, day_portion, Direction::AfterNoon),
                Prayer::Maghrib => self.angle_event(settings.maghrib, guess, Direction::AfterNoon),
                Prayer::Isha => self.angle_event(settings.isha, guess, Direction::AfterNoon),
                Prayer::Midnight => guess,
            }
        })
    }

    /// Shift to the timezone, then apply high latitude and minute-based rules.
    fn adjust_times(&self, times: &mut EventTimes<Hour>) {
        let settings = self.settings;
        let tz_adjust = self.timezone - self.coords.mean_time_offset();
        for (_, time) in times.iter_mut() {
            *time += tz_adjust;
        }

        adjust_high_lats(times, settings);

        if let AngleSpec::Minutes(minutes) = settings.imsak {
            times[Prayer::Imsak] = times[Prayer::Fajr] - minutes / 60.0;
        }
        if let AngleSpec::Minutes(minutes) = settings.maghrib {
            times[Prayer::Maghrib] = times[Prayer::Sunset] - minutes / 60.0;
        }
        if let AngleSpec::Minutes(minutes) = settings.isha {
            times[Prayer::Isha] = times[Prayer::Maghrib] - minutes / 60.0;
        }
        times[Prayer::Dhuhr] += settings.dhuhr / 60.0;
    }

    /// Compute every event, midnight included, before user tuning.
    ///
    /// Arguments
    /// ---------
    /// * `iterations`: number of refinement passes; `0` keeps the initial guesses
    ///
    /// Return
    /// ------
    /// * fractional hours in the solver timezone, `NaN` for unreachable angles
    pub fn compute_times(&self, iterations: usize) -> EventTimes<Hour> {
        let mut times = EventTimes::from_fn(|prayer| INITIAL_GUESSES[prayer as usize]);
        for pass in 0..iterations {
            times = self.compute_prayer_times(&times);
            log::trace!("pass {pass}: {times:?}");
        }

        self.adjust_times(&mut times);

        let morning = match self.settings.midnight {
            MidnightMethod::Standard => Prayer::Sunrise,
            MidnightMethod::Jafari => Prayer::Fajr,
        };
        let sunset = times[Prayer::Sunset];
        times[Prayer::Midnight] = sunset + time_diff(sunset, times[morning]) / 2.0;

        times
    }
}

#[cfg(test)]
mod solver_test {
    use super::*;
    use crate::methods::Method;
    use approx::assert_abs_diff_eq;

    fn tamil_nadu() -> Coordinates {
        Coordinates::new(11.495351, 79.759439)
    }

    #[test]
    fn test_compute_times_reference_values() {
        let settings = Settings::for_method(Method::MWL);
        let solver = Solver::new(&settings, (2024, 6, 21).into(), tamil_nadu(), 5.5, false);
        let times = solver.compute_times(1);

        assert_abs_diff_eq!(times[Prayer::Imsak], 4.173960234016133, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Fajr], 4.507293567349466, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Sunrise], 5.813897033378382, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Dhuhr], 12.46402225717252, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Asr], 15.660385756730193, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Sunset], 18.614123208209246, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Maghrib], 18.614123208209246, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Isha], 19.842531417535188, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Midnight], 24.214010120793816, epsilon = 1e-9);
    }

    #[test]
    fn test_sunrise_and_sunset_straddle_noon() {
        let settings = Settings::for_method(Method::MWL);
        let solver = Solver::new(&settings, (2024, 3, 1).into(), tamil_nadu(), 5.5, false);
        let times = solver.compute_times(1);
        let noon = times[Prayer::Dhuhr] - settings.dhuhr / 60.0;
        let morning = noon - times[Prayer::Sunrise];
        let evening = times[Prayer::Sunset] - noon;
        // only the diurnal drift of the sun separates both half days
        assert_abs_diff_eq!(morning, evening, epsilon = 2.0 / 60.0);
    }

    #[test]
    fn test_unreachable_angle_is_nan() {
        let mut settings = Settings::for_method(Method::MWL);
        settings.high_lats = crate::params::HighLatMethod::None;
        let solver = Solver::new(&settings, (2024, 6, 21).into(), Coordinates::new(65.0, 25.0), 2.0, true);
        let times = solver.compute_times(1);
        assert!(times[Prayer::Fajr].is_nan());
        assert!(times[Prayer::Isha].is_nan());
        assert!(times[Prayer::Imsak].is_nan());
        assert!(times[Prayer::Sunrise].is_finite());
        assert!(times[Prayer::Dhuhr].is_finite());
    }

    #[test]
    fn test_dst_adds_one_hour() {
        let settings = Settings::for_method(Method::ISNA);
        let coords = Coordinates::new(43.0, -80.0);
        let winter = Solver::new(&settings, (2024, 7, 1).into(), coords, -5.0, false).compute_times(1);
        let summer = Solver::new(&settings, (2024, 7, 1).into(), coords, -5.0, true).compute_times(1);
        for prayer in Prayer::ALL {
            assert_abs_diff_eq!(summer[prayer] - winter[prayer], 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_minute_based_events() {
        let settings = Settings::for_method(Method::Makkah);
        let solver = Solver::new(&settings, (2024, 1, 15).into(), Coordinates::new(21.4225, 39.8262), 3.0, false);
        let times = solver.compute_times(1);
        assert_abs_diff_eq!(times[Prayer::Imsak], times[Prayer::Fajr] - 20.0 / 60.0, epsilon = 1e-12);
        assert_eq!(times[Prayer::Maghrib], times[Prayer::Sunset]);
        assert_abs_diff_eq!(times[Prayer::Isha], times[Prayer::Maghrib] - 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_maghrib_minutes_before_sunset() {
        let mut settings = Settings::for_method(Method::MWL);
        settings.maghrib = AngleSpec::Minutes(5.0);
        let solver = Solver::new(&settings, (2024, 6, 21).into(), tamil_nadu(), 5.5, false);
        let times = solver.compute_times(1);
        assert_abs_diff_eq!(times[Prayer::Maghrib], 18.614123208209246 - 5.0 / 60.0, epsilon = 1e-9);
        // isha stays angle-based
        assert_abs_diff_eq!(times[Prayer::Isha], 19.842531417535188, epsilon = 1e-9);
    }

    #[test]
    fn test_more_iterations_converge() {
        let settings = Settings::for_method(Method::MWL);
        let solver = Solver::new(&settings, (2024, 6, 21).into(), tamil_nadu(), 5.5, false);
        let two = solver.compute_times(2);
        let three = solver.compute_times(3);
        for prayer in Prayer::ALL {
            assert_abs_diff_eq!(two[prayer], three[prayer], epsilon = 1e-4);
        }
    }
}
