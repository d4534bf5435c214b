use hifitime::Epoch;

use crate::constants::JulianDay;

/// A proleptic Gregorian calendar date.
///
/// No range validation is done: out-of-range fields flow through the Julian
/// day formula and produce mathematically continued values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        CalendarDate { year, month, day }
    }

    /// Julian day number at 00:00 UT of this date.
    pub fn julian_day(&self) -> JulianDay {
        julian(self.year, self.month, self.day)
    }
}

impl From<(i32, u8, u8)> for CalendarDate {
    fn from((year, month, day): (i32, u8, u8)) -> Self {
        CalendarDate::new(year, month, day)
    }
}

/// Take the UTC calendar date of an epoch, dropping the time of day.
impl From<Epoch> for CalendarDate {
    fn from(epoch: Epoch) -> Self {
        let (year, month, day, _, _, _, _) = epoch.to_gregorian_utc();
        CalendarDate::new(year, month, day)
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Transformation from a Gregorian calendar date to julian day
///
/// January and February count as months 13 and 14 of the previous year, then
/// the Gregorian century correction is applied. The result refers to 00:00 UT,
/// hence the `.5` fraction.
///
/// Argument
/// --------
/// * `year`: the year, astronomical numbering (year 0 exists)
/// * `month`: the month, 1 to 12
/// * `day`: the day of the month
///
/// Return
/// ------
/// * the julian day number
///
/// Reference
/// ---------
/// * Astronomical Algorithms, Jean Meeus, chapter 7
pub fn julian(year: i32, month: u8, day: u8) -> JulianDay {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}
