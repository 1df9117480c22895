use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

/// Longitude at the antimeridian, in degrees.
pub const MAX_LON: f64 = 180.0;
/// Latitude of the north pole, in degrees.
pub const MAX_LAT: f64 = 90.0;
/// Width of one copy of the world along the longitude axis, in degrees.
pub const WORLD_WIDTH: f64 = 360.0;

/// A point on the map given by longitude and latitude in degrees.
///
/// Longitude is not wrapped or clamped: maps that repeat the world horizontally produce values far outside
/// `[-180, 180]`, and those are kept as they are. Latitude is not validated either.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Position {
    lon: f64,
    lat: f64,
}

impl Position {
    /// Creates a new position.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns a copy of the position moved along the longitude axis by `delta` degrees.
    pub fn shift_lon(&self, delta: f64) -> Self {
        Self {
            lon: self.lon + delta,
            lat: self.lat,
        }
    }

    /// Whether the longitude lies within `[-180, 180]`, bounds included.
    pub fn is_lon_in_range(&self) -> bool {
        (-MAX_LON..=MAX_LON).contains(&self.lon)
    }

    /// Returns coordinates as a `[lon, lat]` array.
    pub fn coords(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

impl From<[f64; 2]> for Position {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl AbsDiffEq for Position {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lon.abs_diff_eq(&other.lon, epsilon) && self.lat.abs_diff_eq(&other.lat, epsilon)
    }
}

/// Creates a new [`Position`] from longitude and latitude values (in degrees).
///
/// ```
/// use veda_types::lonlat;
///
/// let position = lonlat!(190.0, 45.0);
/// assert_eq!(position.lon(), 190.0);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        $crate::Position::new($lon, $lat)
    };
}
