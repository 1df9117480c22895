use geo_types::{Coord, LineString};

use crate::position::Position;
use crate::ring::Ring;

impl From<&Ring> for LineString<f64> {
    fn from(value: &Ring) -> Self {
        value
            .iter_points()
            .map(|p| Coord {
                x: p.lon(),
                y: p.lat(),
            })
            .collect()
    }
}

impl From<&LineString<f64>> for Ring {
    fn from(value: &LineString<f64>) -> Self {
        Ring::new(value.coords().map(|c| Position::new(c.x, c.y)).collect())
    }
}
