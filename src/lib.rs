//! # praytimes
//!
//! Islamic prayer times from date, position and timezone, computed with a
//! low-precision solar model.
//!
//! The crate is organized bottom-up:
//!
//! - [`degree_math`], [`time`] and [`sun_position`]: trigonometry in degrees,
//!   julian days and the solar declination / equation of time
//! - [`params`], [`methods`] and [`settings`]: calculation conventions and the
//!   immutable [`PrayerConfig`](settings::PrayerConfig)
//! - [`solver`] and [`high_lats`]: the per-day computation
//! - [`format`] and [`post_process`]: rendering of the results
//! - [`praytimes`]: the [`PrayTimes`](praytimes::PrayTimes) façade
//!
//! ```rust
//! use praytimes::events::Prayer;
//! use praytimes::praytimes::PrayTimes;
//!
//! let pt = PrayTimes::from_method_name("ISNA");
//! let times = pt.get_times((2011, 2, 9), (43.0, -80.0), -5.0, false);
//! assert_eq!(times[Prayer::Dhuhr].to_string(), "12:49");
//! ```
pub mod constants;
pub mod coordinates;
pub mod degree_math;
pub mod events;
pub mod format;
pub mod high_lats;
pub mod methods;
pub mod params;
pub mod post_process;
pub mod praytimes;
pub mod praytimes_errors;
pub mod settings;
pub mod solver;
pub mod sun_position;
pub mod time;
