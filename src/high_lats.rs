//! # High latitude correction
//!
//! Beyond about 48° of latitude the sun may stay less than 18° below the
//! horizon for weeks around the summer solstice: fajr and isha then have no
//! astronomical solution. The rule selected by
//! [`HighLatMethod`](crate::params::HighLatMethod) bounds each twilight event to a
//! portion of the night (sunset to next sunrise):
//!
//! - `NightMiddle`: half the night
//! - `OneSeventh`: one seventh of the night
//! - `AngleBased`: `angle / 60` of the night
//!
//! An event that is `NaN`, or farther from its anchor than the allowed portion,
//! is moved to `anchor ± portion`. Anchors are sunrise for imsak and fajr,
//! sunset for maghrib and isha. Events given in minutes are resolved after this
//! step and are left alone. When sunrise or sunset themselves do not exist the
//! night is undefined and the events stay `NaN`.
use crate::{
    constants::{Degree, Hour},
    degree_math::time_diff,
    events::{EventTimes, Prayer},
    params::HighLatMethod,
    settings::Settings,
    solver::Direction,
};

/// Apply the high latitude rule of `settings` to the twilight events.
pub fn adjust_high_lats(times: &mut EventTimes<Hour>, settings: &Settings) {
    if settings.high_lats == HighLatMethod::None {
        return;
    }

    let night = time_diff(times[Prayer::Sunset], times[Prayer::Sunrise]);
    let events = [
        (Prayer::Imsak, settings.imsak, Prayer::Sunrise, Direction::BeforeNoon),
        (Prayer::Fajr, settings.fajr, Prayer::Sunrise, Direction::BeforeNoon),
        (Prayer::Isha, settings.isha, Prayer::Sunset, Direction::AfterNoon),
        (Prayer::Maghrib, settings.maghrib, Prayer::Sunset, Direction::AfterNoon),
    ];

    for (prayer, spec, anchor, direction) in events {
        let Some(angle) = spec.degrees() else {
            continue;
        };
        let time = times[prayer];
        let adjusted = adjust_hl_time(
            time,
            times[anchor],
            angle,
            night,
            direction,
            settings.high_lats,
        );
        if adjusted.is_finite() && adjusted != time {
            log::debug!("{prayer} moved to {adjusted:.4}h by the {} rule", settings.high_lats);
        }
        times[prayer] = adjusted;
    }
}

/// Bound one event to its portion of the night.
///
/// Arguments
/// ---------
/// * `time`: the angle-based time, possibly `NaN`
/// * `base`: the anchor event (sunrise or sunset)
/// * `angle`: the configured depression angle of the event
/// * `night`: duration from sunset to sunrise, in hours
/// * `direction`: [`Direction::BeforeNoon`] when the event precedes its anchor
/// * `method`: the high latitude rule
///
/// Return
/// ------
/// * `time` when it lies within the portion, `base ± portion` otherwise
pub fn adjust_hl_time(
    time: Hour,
    base: Hour,
    angle: Degree,
    night: Hour,
    direction: Direction,
    method: HighLatMethod,
) -> Hour {
    let Some(portion) = night_portion(method, angle, night) else {
        return time;
    };
    let diff = match direction {
        Direction::BeforeNoon => time_diff(time, base),
        Direction::AfterNoon => time_diff(base, time),
    };
    if time.is_nan() || diff > portion {
        match direction {
            Direction::BeforeNoon => base - portion,
            Direction::AfterNoon => base + portion,
        }
    } else {
        time
    }
}

/// Largest duration allowed between an event and its anchor.
pub fn night_portion(method: HighLatMethod, angle: Degree, night: Hour) -> Option<Hour> {
    method.portion(angle).map(|portion| portion * night)
}
