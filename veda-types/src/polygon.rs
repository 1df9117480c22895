use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::rect::Rect;
use crate::ring::Ring;

/// Polygon geometry. Polygon consists of one outer ring, and zero or more inner rings.
///
/// Inner rings represent *holes* in the polygon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Polygon {
    /// Outer ring.
    pub outer_ring: Ring,
    /// Inner rings.
    pub inner_rings: Vec<Ring>,
}

impl Polygon {
    /// Creates a new polygon.
    pub fn new(outer_ring: Ring, inner_rings: Vec<Ring>) -> Self {
        Self {
            outer_ring,
            inner_rings,
        }
    }

    /// Iterates over all rings of the polygon starting with the outer one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ Ring> {
        std::iter::once(&self.outer_ring).chain(self.inner_rings.iter())
    }

    /// Iterates over positions of all rings.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.iter_rings().flat_map(Ring::iter_points)
    }

    /// Applies `f` to every ring, outer and inner alike, returning a new polygon.
    pub fn map_rings(&self, mut f: impl FnMut(&Ring) -> Ring) -> Self {
        Self {
            outer_ring: f(&self.outer_ring),
            inner_rings: self.inner_rings.iter().map(f).collect(),
        }
    }

    /// Bounding rectangle of the polygon.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.outer_ring.bounding_rect()
    }

    /// Whether any position of the polygon has longitude less than `-180`.
    pub fn exceeds_west(&self) -> bool {
        self.iter_points().any(|p| p.lon() < -crate::MAX_LON)
    }

    /// Whether any position of the polygon has longitude greater than `180`.
    pub fn exceeds_east(&self) -> bool {
        self.iter_points().any(|p| p.lon() > crate::MAX_LON)
    }
}

impl From<Ring> for Polygon {
    fn from(value: Ring) -> Self {
        Self {
            outer_ring: value,
            inner_rings: vec![],
        }
    }
}

impl From<Vec<Position>> for Polygon {
    fn from(value: Vec<Position>) -> Self {
        Ring::new(value).into()
    }
}

impl From<Rect> for Polygon {
    fn from(value: Rect) -> Self {
        Ring::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;

    fn with_hole() -> Polygon {
        Polygon::new(
            Rect::new(170.0, 0.0, 200.0, 30.0).into(),
            vec![Rect::new(175.0, 10.0, 178.0, 20.0).into()],
        )
    }

    #[test]
    fn iter_rings() {
        let polygon = with_hole();
        assert_eq!(polygon.iter_rings().count(), 2);
        assert_eq!(polygon.iter_points().count(), 10);
    }

    #[test]
    fn direction_tests() {
        let polygon = with_hole();
        assert!(polygon.exceeds_east());
        assert!(!polygon.exceeds_west());

        let west = Polygon::from(vec![
            lonlat!(-190.0, 0.0),
            lonlat!(-180.0, 0.0),
            lonlat!(-180.0, 5.0),
        ]);
        assert!(west.exceeds_west());
        assert!(!west.exceeds_east());
    }

    #[test]
    fn map_rings_touches_holes() {
        let shifted = with_hole().map_rings(|ring| ring.shift_lon(-360.0));
        assert_eq!(shifted.inner_rings[0].min_lon(), Some(-185.0));
        assert_eq!(shifted.outer_ring.max_lon(), Some(-160.0));
    }
}
