//! Ring is a closed sequence of positions bounding a polygon or a hole in it.
//!
//! Unlike contours in some geometry libraries, a [`Ring`] stores the closing position explicitly: the first and the
//! last positions are the same, exactly as GeoJSON linear rings do. Rings built from an open sequence are closed on
//! construction, so the invariant holds for every ring of the crate.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::rect::Rect;

/// Closed sequence of positions. See module level documentation for details.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Ring {
    points: Vec<Position>,
}

impl Ring {
    /// Creates a new ring, appending the first position to the end if the sequence is not closed yet.
    pub fn new(mut points: Vec<Position>) -> Self {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if first != last {
                points.push(*first);
            }
        }

        Self { points }
    }

    /// Positions of the ring, including the closing one.
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    /// Iterates over the positions of the ring, including the closing one.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.points.iter()
    }

    /// Number of positions, including the closing one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the ring has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding rectangle of the ring, `None` for an empty ring.
    pub fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(self.iter_points())
    }

    /// Smallest longitude of the ring.
    pub fn min_lon(&self) -> Option<f64> {
        self.bounding_rect().map(|rect| rect.lon_min)
    }

    /// Largest longitude of the ring.
    pub fn max_lon(&self) -> Option<f64> {
        self.bounding_rect().map(|rect| rect.lon_max)
    }

    /// Returns a new ring with every position replaced by the result of `f`.
    pub fn map_points(&self, f: impl FnMut(&Position) -> Position) -> Self {
        Self {
            points: self.points.iter().map(f).collect(),
        }
    }

    /// Returns a new ring with every position moved along the longitude axis by `delta` degrees.
    pub fn shift_lon(&self, delta: f64) -> Self {
        self.map_points(|p| p.shift_lon(delta))
    }

    /// Whether every position of the ring has longitude in `[-180, 180]`.
    pub fn is_lon_in_range(&self) -> bool {
        self.points.iter().all(Position::is_lon_in_range)
    }

    /// Consumes the ring returning its positions.
    pub fn into_points(self) -> Vec<Position> {
        self.points
    }
}

impl From<Vec<Position>> for Ring {
    fn from(value: Vec<Position>) -> Self {
        Self::new(value)
    }
}

impl From<Rect> for Ring {
    fn from(value: Rect) -> Self {
        Self {
            points: Vec::from(value.into_closed_points()),
        }
    }
}
