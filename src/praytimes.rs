//! # PrayTimes: calculator façade
//!
//! This module defines [`PrayTimes`], the entry point of the crate. It owns a
//! [`PrayerConfig`] and wires together:
//!
//! 1. **Configuration**: method selection, key-wise [`Adjustment`]s and
//!    per-event minute offsets ([`tune`](PrayTimes::tune)).
//! 2. **Solver**: the astronomical computation ([`Solver`]) for one date and place.
//! 3. **Rendering**: optional post-processing, then formatting
//!    ([`format_time_with_suffixes`]).
//!
//! Mutators take `&mut self` and getters take `&self`: a computation always
//! runs against a consistent configuration snapshot. The free functions
//! [`compute_times`] and [`compute_raw_times`] expose the same pipeline over a
//! borrowed [`PrayerConfig`].
//!
//! ## Typical usage
//!
//! ```rust
//! use praytimes::events::Prayer;
//! use praytimes::methods::Method;
//! use praytimes::params::AsrJuristic;
//! use praytimes::praytimes::PrayTimes;
//! use praytimes::settings::Adjustment;
//!
//! let mut pt = PrayTimes::new(Method::MWL);
//! pt.adjust(&Adjustment {
//!     asr: Some(AsrJuristic::Hanafi),
//!     ..Default::default()
//! });
//!
//! let times = pt.get_times((2024, 6, 21), (11.495351, 79.759439), 5.5, false);
//! assert_eq!(times[Prayer::Fajr].to_string(), "04:30");
//! assert_eq!(times[Prayer::Asr].to_string(), "16:46");
//! ```
//!
//! ## Errors
//!
//! The computation itself never fails: an event with no astronomical solution
//! renders as [`INVALID_TIME`](crate::constants::INVALID_TIME). Only
//! configuration entry points taking text return a
//! [`PrayTimesError`].
use crate::{
    constants::{Hour, Minute},
    coordinates::Coordinates,
    events::{EventTimes, Prayer},
    format::{format_time_with_suffixes, FormattedTime, TimeFormat},
    methods::{Method, MethodParams},
    post_process::PostProcess,
    praytimes_errors::PrayTimesError,
    settings::{Adjustment, PrayerConfig, Settings, TimeOffsets},
    solver::Solver,
    time::CalendarDate,
};

/// Prayer times calculator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrayTimes {
    config: PrayerConfig,
}

impl PrayTimes {
    /// Calculator seeded with the parameters of `method` and the global defaults.
    pub fn new(method: Method) -> Self {
        PrayTimes {
            config: PrayerConfig::new(method),
        }
    }

    /// Calculator for a method identifier; unknown identifiers fall back to MWL.
    pub fn from_method_name(name: &str) -> Self {
        PrayTimes::new(Method::from_name_or_default(name))
    }

    pub fn from_config(config: PrayerConfig) -> Self {
        PrayTimes { config }
    }

    /// Switch method. The global options (`imsak`, `dhuhr`, `asr`, `high_lats`)
    /// and the tuning offsets are kept.
    pub fn set_method(&mut self, method: Method) {
        self.config.method = method;
        self.config.settings.apply_method(&method.params());
    }

    /// Switch method by identifier.
    ///
    /// Return
    /// ------
    /// * [`PrayTimesError::UnknownMethod`] if `name` is not a known method,
    ///   in which case the configuration is left untouched
    pub fn set_method_name(&mut self, name: &str) -> Result<(), PrayTimesError> {
        self.set_method(name.parse()?);
        Ok(())
    }

    /// Merge `adjustment` into the current settings, key by key.
    pub fn adjust(&mut self, adjustment: &Adjustment) {
        self.config.settings.merge(adjustment);
    }

    /// Merge minute offsets into the current tuning, event by event.
    pub fn tune(&mut self, offsets: impl IntoIterator<Item = (Prayer, Minute)>) {
        self.config.offsets.merge(offsets);
    }

    pub fn set_format(&mut self, format: TimeFormat) {
        self.config.format = format;
    }

    /// Suffixes used by the 12-hour format, before and after noon.
    pub fn set_suffixes(&mut self, am: &str, pm: &str) {
        self.config.suffixes = [am.to_string(), pm.to_string()];
    }

    pub fn set_iterations(&mut self, iterations: usize) {
        self.config.iterations = iterations;
    }

    pub fn get_method(&self) -> Method {
        self.config.method
    }

    pub fn get_settings(&self) -> &Settings {
        &self.config.settings
    }

    pub fn get_offsets(&self) -> &TimeOffsets {
        &self.config.offsets
    }

    /// The table of every known method with its parameters.
    pub fn get_defaults() -> [(Method, MethodParams); 8] {
        Method::ALL.map(|method| (method, method.params()))
    }

    pub fn config(&self) -> &PrayerConfig {
        &self.config
    }

    /// Rendered times of every event.
    ///
    /// Arguments
    /// ---------
    /// * `date`: the Gregorian date, e.g. `(2024, 6, 21)` or a [`CalendarDate`]
    /// * `coords`: `(latitude, longitude)`, `(latitude, longitude, elevation)` or [`Coordinates`]
    /// * `timezone`: offset of local civil time from UT, in hours
    /// * `dst`: whether daylight saving time is in effect
    ///
    /// Return
    /// ------
    /// * one [`FormattedTime`] per event, in the configured format
    pub fn get_times(
        &self,
        date: impl Into<CalendarDate>,
        coords: impl Into<Coordinates>,
        timezone: Hour,
        dst: bool,
    ) -> EventTimes<FormattedTime> {
        compute_times(&self.config, date.into(), coords.into(), timezone, dst)
    }

    /// Tuned fractional hours, before any formatting.
    pub fn get_raw_times(
        &self,
        date: impl Into<CalendarDate>,
        coords: impl Into<Coordinates>,
        timezone: Hour,
        dst: bool,
    ) -> EventTimes<Hour> {
        compute_raw_times(&self.config, date.into(), coords.into(), timezone, dst)
    }

    /// Like [`get_times`](PrayTimes::get_times), with `post` applied to the
    /// tuned hours before rendering.
    pub fn get_times_with(
        &self,
        date: impl Into<CalendarDate>,
        coords: impl Into<Coordinates>,
        timezone: Hour,
        dst: bool,
        post: &dyn PostProcess,
    ) -> EventTimes<FormattedTime> {
        let mut times = self.get_raw_times(date, coords, timezone, dst);
        post.apply(&mut times);
        render(&self.config, times)
    }

    /// Render one hour value with the configured suffixes.
    pub fn get_formatted_time(&self, time: Hour, format: TimeFormat) -> FormattedTime {
        let [am, pm] = &self.config.suffixes;
        format_time_with_suffixes(time, format, [am.as_str(), pm.as_str()])
    }
}

/// Solve and tune every event of one day.
///
/// Return
/// ------
/// * fractional hours in the requested timezone, tuning offsets included,
///   `NaN` for events with no solution
pub fn compute_raw_times(
    config: &PrayerConfig,
    date: CalendarDate,
    coords: Coordinates,
    timezone: Hour,
    dst: bool,
) -> EventTimes<Hour> {
    log::debug!(
        "computing {date} at ({}, {}) with {} (tz {timezone}, dst {dst})",
        coords.latitude,
        coords.longitude,
        config.method.id()
    );

    let solver = Solver::new(&config.settings, date, coords, timezone, dst);
    let mut times = solver.compute_times(config.iterations);
    for (prayer, time) in times.iter_mut() {
        *time += config.offsets.get(prayer) / 60.0;
    }
    times
}

/// Solve, tune and render every event of one day.
///
/// ```rust
/// use praytimes::events::Prayer;
/// use praytimes::praytimes::compute_times;
/// use praytimes::settings::PrayerConfig;
///
/// let config: PrayerConfig = "method = \"Makkah\"".parse().unwrap();
/// let times = compute_times(&config, (2024, 1, 15).into(), (21.4225, 39.8262).into(), 3.0, false);
/// assert_eq!(times[Prayer::Isha].to_string(), "16:29");
/// ```
pub fn compute_times(
    config: &PrayerConfig,
    date: CalendarDate,
    coords: Coordinates,
    timezone: Hour,
    dst: bool,
) -> EventTimes<FormattedTime> {
    render(config, compute_raw_times(config, date, coords, timezone, dst))
}

fn render(config: &PrayerConfig, times: EventTimes<Hour>) -> EventTimes<FormattedTime> {
    let [am, pm] = &config.suffixes;
    let suffixes = [am.as_str(), pm.as_str()];
    times.map(|_, time| format_time_with_suffixes(time, config.format, suffixes))
}

#[cfg(test)]
mod praytimes_test {
    use super::*;
    use crate::params::{AngleSpec, AsrJuristic, HighLatMethod};
    use crate::post_process::MinuteShifts;
    use approx::assert_abs_diff_eq;

    const TN_COORDS: (f64, f64) = (11.495351, 79.759439);
    const SOLSTICE: (i32, u8, u8) = (2024, 6, 21);

    fn rendered(times: &EventTimes<FormattedTime>) -> Vec<String> {
        times.iter().map(|(_, t)| t.to_string()).collect()
    }

    #[test]
    fn test_get_times_mwl() {
        let pt = PrayTimes::default();
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(
            rendered(&times),
            ["04:10", "04:30", "05:49", "12:28", "15:40", "18:37", "18:37", "19:51", "00:13"]
        );
    }

    #[test]
    fn test_get_times_12h_and_suffixes() {
        let mut pt = PrayTimes::new(Method::MWL);
        pt.set_format(TimeFormat::H12);
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(
            rendered(&times),
            ["4:10am", "4:30am", "5:49am", "12:28pm", "3:40pm", "6:37pm", "6:37pm", "7:51pm", "12:13am"]
        );

        pt.set_suffixes(" AM", " PM");
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(times[Prayer::Fajr].to_string(), "4:30 AM");
        assert_eq!(times[Prayer::Isha].to_string(), "7:51 PM");
    }

    #[test]
    fn test_get_raw_times() {
        let pt = PrayTimes::default();
        let times = pt.get_raw_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_abs_diff_eq!(times[Prayer::Fajr], 4.507293567349466, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Dhuhr], 12.46402225717252, epsilon = 1e-9);
        assert_abs_diff_eq!(times[Prayer::Midnight], 24.214010120793816, epsilon = 1e-9);
    }

    #[test]
    fn test_float_format_is_raw() {
        let mut pt = PrayTimes::default();
        pt.set_format(TimeFormat::Float);
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        let dhuhr = times[Prayer::Dhuhr].as_hours().unwrap();
        assert_abs_diff_eq!(dhuhr, 12.46402225717252, epsilon = 1e-9);
    }

    #[test]
    fn test_adjust_then_set_method_keeps_globals() {
        let mut pt = PrayTimes::new(Method::MWL);
        pt.adjust(&Adjustment {
            asr: Some(AsrJuristic::Hanafi),
            high_lats: Some(HighLatMethod::OneSeventh),
            ..Default::default()
        });
        pt.set_method(Method::Makkah);

        assert_eq!(pt.get_method(), Method::Makkah);
        assert_eq!(pt.get_settings().asr, AsrJuristic::Hanafi);
        assert_eq!(pt.get_settings().high_lats, HighLatMethod::OneSeventh);
        assert_eq!(pt.get_settings().isha, AngleSpec::Minutes(90.0));
        assert_eq!(pt.get_settings().fajr, AngleSpec::Degrees(18.5));
    }

    #[test]
    fn test_adjust_hanafi() {
        let mut pt = PrayTimes::new(Method::MWL);
        pt.adjust(&Adjustment::from_pairs([("asr", "Hanafi")]).unwrap());
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(times[Prayer::Asr].to_string(), "16:46");
        assert_eq!(times[Prayer::Dhuhr].to_string(), "12:28");
    }

    #[test]
    fn test_set_method_name() {
        let mut pt = PrayTimes::default();
        assert!(pt.set_method_name("TN").is_ok());
        assert_eq!(pt.get_method(), Method::TN);
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(times[Prayer::Isha].to_string(), "19:55");

        assert_eq!(
            pt.set_method_name("Umm"),
            Err(PrayTimesError::UnknownMethod("Umm".into()))
        );
        assert_eq!(pt.get_method(), Method::TN);
    }

    #[test]
    fn test_unknown_method_name_falls_back() {
        let pt = PrayTimes::from_method_name("Nowhere");
        assert_eq!(pt, PrayTimes::new(Method::MWL));
    }

    #[test]
    fn test_tune_merges_and_shifts() {
        let mut pt = PrayTimes::default();
        pt.tune([(Prayer::Asr, 5.0), (Prayer::Isha, 12.0)]);
        pt.tune([(Prayer::Isha, -1.0)]);

        assert_eq!(pt.get_offsets().get(Prayer::Asr), 5.0);
        assert_eq!(pt.get_offsets().get(Prayer::Isha), -1.0);

        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert_eq!(times[Prayer::Asr].to_string(), "15:45");
        assert_eq!(times[Prayer::Isha].to_string(), "19:50");
        assert_eq!(times[Prayer::Fajr].to_string(), "04:30");
    }

    #[test]
    fn test_get_times_with_post_process() {
        let pt = PrayTimes::default();
        let shifts = MinuteShifts::tamil_nadu_display();
        let times = pt.get_times_with(SOLSTICE, TN_COORDS, 5.5, false, &shifts);
        assert_eq!(times[Prayer::Asr].to_string(), "15:45");
        assert_eq!(times[Prayer::Sunset].to_string(), "18:37");
        assert_eq!(times[Prayer::Maghrib].to_string(), "18:46");
        assert_eq!(times[Prayer::Isha].to_string(), "20:03");
        assert_eq!(times[Prayer::Dhuhr].to_string(), "12:28");

        let noon = pt.get_times_with(SOLSTICE, TN_COORDS, 5.5, false, &MinuteShifts::noon_line());
        assert_eq!(noon[Prayer::Dhuhr].to_string(), "12:13");
        assert_eq!(noon[Prayer::Asr].to_string(), "15:40");

        let mut hanafi = PrayTimes::default();
        hanafi.adjust(&Adjustment {
            asr: Some(AsrJuristic::Hanafi),
            ..Default::default()
        });
        let shifts = MinuteShifts::tamil_nadu_hanafi_display();
        let times = hanafi.get_times_with(SOLSTICE, TN_COORDS, 5.5, false, &shifts);
        assert_eq!(times[Prayer::Asr].to_string(), "16:48");
    }

    #[test]
    fn test_infinite_tuning_renders_invalid() {
        let mut pt = PrayTimes::default();
        pt.tune([(Prayer::Isha, f64::INFINITY)]);
        let times = pt.get_times(SOLSTICE, TN_COORDS, 5.5, false);
        assert!(times[Prayer::Isha].is_invalid());
        assert_eq!(times[Prayer::Fajr].to_string(), "04:30");
    }

    #[test]
    fn test_get_defaults() {
        let defaults = PrayTimes::get_defaults();
        assert_eq!(defaults[0].0, Method::MWL);
        assert_eq!(defaults[3].1.isha, AngleSpec::Minutes(90.0));
        assert!(defaults.iter().all(|(m, p)| m.params() == *p));
    }

    #[test]
    fn test_get_formatted_time() {
        let pt = PrayTimes::default();
        assert_eq!(pt.get_formatted_time(13.5, TimeFormat::H12).to_string(), "1:30pm");
        assert!(pt.get_formatted_time(f64::NAN, TimeFormat::H24).is_invalid());
    }

    #[test]
    fn test_compute_times_matches_facade() {
        let mut pt = PrayTimes::new(Method::Tehran);
        pt.set_iterations(2);
        let via_facade = pt.get_times((2024, 3, 20), (35.6892, 51.3890, 1200.0), 3.5, false);
        let via_fn = compute_times(
            pt.config(),
            CalendarDate::new(2024, 3, 20),
            Coordinates::new(35.6892, 51.3890).with_elevation(1200.0),
            3.5,
            false,
        );
        assert_eq!(via_facade, via_fn);
    }
}
