use crate::constants::{Degree, Meter, DEGREES_PER_HOUR, ELEVATION_DIP, RISE_SET_ANGLE};

/// Geographic position of the observer.
///
/// Units:
/// * `latitude`: degrees, north positive
/// * `longitude`: degrees, east positive
/// * `elevation`: meters above the surrounding terrain
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub latitude: Degree,
    pub longitude: Degree,
    pub elevation: Meter,
}

impl Coordinates {
    pub fn new(latitude: Degree, longitude: Degree) -> Self {
        Coordinates {
            latitude,
            longitude,
            elevation: 0.0,
        }
    }

    pub fn with_elevation(self, elevation: Meter) -> Self {
        Coordinates { elevation, ..self }
    }

    /// Depression of the sun at sunrise and sunset, refraction and horizon dip included.
    ///
    /// The dip term is an approximation; negative elevations count as sea level.
    pub fn rise_set_angle(&self) -> Degree {
        RISE_SET_ANGLE + ELEVATION_DIP * self.elevation.max(0.0).sqrt()
    }

    /// Offset of local mean time from UT, in hours.
    pub fn mean_time_offset(&self) -> f64 {
        self.longitude / DEGREES_PER_HOUR
    }
}

impl From<(Degree, Degree)> for Coordinates {
    fn from((latitude, longitude): (Degree, Degree)) -> Self {
        Coordinates::new(latitude, longitude)
    }
}

impl From<(Degree, Degree, Meter)> for Coordinates {
    fn from((latitude, longitude, elevation): (Degree, Degree, Meter)) -> Self {
        Coordinates::new(latitude, longitude).with_elevation(elevation)
    }
}
