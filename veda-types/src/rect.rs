use serde::{Deserialize, Serialize};

use crate::position::{Position, MAX_LAT, MAX_LON};

/// Axis-aligned rectangle in longitude/latitude degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Western edge.
    pub lon_min: f64,
    /// Southern edge.
    pub lat_min: f64,
    /// Eastern edge.
    pub lon_max: f64,
    /// Northern edge.
    pub lat_max: f64,
}

impl Rect {
    /// Creates a new rectangle.
    pub const fn new(lon_min: f64, lat_min: f64, lon_max: f64, lat_max: f64) -> Self {
        Self {
            lon_min,
            lat_min,
            lon_max,
            lat_max,
        }
    }

    /// The whole world in its canonical range: `[-180, 180] x [-90, 90]`.
    pub const fn world() -> Self {
        Self::new(-MAX_LON, -MAX_LAT, MAX_LON, MAX_LAT)
    }

    /// Extent along the longitude axis.
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Bounding rectangle of the given positions, or `None` if the iterator is empty.
    pub fn from_points<'a>(mut points: impl Iterator<Item = &'a Position>) -> Option<Self> {
        let first = points.next()?;
        let init = Self::new(first.lon(), first.lat(), first.lon(), first.lat());

        Some(points.fold(init, |rect, p| Self {
            lon_min: rect.lon_min.min(p.lon()),
            lat_min: rect.lat_min.min(p.lat()),
            lon_max: rect.lon_max.max(p.lon()),
            lat_max: rect.lat_max.max(p.lat()),
        }))
    }

    /// Whether the position is inside the rectangle or on its border.
    pub fn contains(&self, point: &Position) -> bool {
        self.lon_min <= point.lon()
            && self.lon_max >= point.lon()
            && self.lat_min <= point.lat()
            && self.lat_max >= point.lat()
    }

    /// Corners of the rectangle as a closed counter-clockwise sequence, starting and ending at the south-west
    /// corner.
    pub fn into_closed_points(self) -> [Position; 5] {
        [
            Position::new(self.lon_min, self.lat_min),
            Position::new(self.lon_max, self.lat_min),
            Position::new(self.lon_max, self.lat_max),
            Position::new(self.lon_min, self.lat_max),
            Position::new(self.lon_min, self.lat_min),
        ]
    }
}
