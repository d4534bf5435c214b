#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use praytimes::{
    constants::Hour,
    events::{EventTimes, Prayer},
    format::FormattedTime,
};

pub const TAMIL_NADU: (f64, f64) = (11.495351, 79.759439);
pub const TEHRAN: (f64, f64, f64) = (35.6892, 51.3890, 1200.0);
pub const MAKKAH: (f64, f64) = (21.4225, 39.8262);

/// Compare the rendering of every event with `expected`, in `Prayer::ALL` order.
pub fn assert_rendered(actual: &EventTimes<FormattedTime>, expected: [&str; 9]) {
    for (prayer, expected) in Prayer::ALL.into_iter().zip(expected) {
        assert_eq!(
            actual[prayer].to_string(),
            expected,
            "mismatch for {prayer}"
        );
    }
}

/// Like [`assert_rendered`], for the events before midnight only.
pub fn assert_rendered_until_isha(actual: &EventTimes<FormattedTime>, expected: [&str; 8]) {
    for (prayer, expected) in Prayer::ALL.into_iter().zip(expected) {
        assert_eq!(
            actual[prayer].to_string(),
            expected,
            "mismatch for {prayer}"
        );
    }
}

pub fn assert_hours_close(actual: Hour, expected: Hour, minutes: f64) {
    assert_abs_diff_eq!(actual, expected, epsilon = minutes / 60.0);
}
