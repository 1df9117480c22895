use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;
use crate::position::Position;
use crate::rect::Rect;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPolygon {
    /// Inner polygons.
    pub parts: Vec<Polygon>,
}

impl MultiPolygon {
    /// Creates a new multipolygon.
    pub fn new(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }

    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon] {
        &self.parts
    }

    /// Iterates over polygons.
    pub fn polygons(&self) -> impl Iterator<Item = &'_ Polygon> {
        self.parts.iter()
    }

    /// Iterates over positions of all rings of all polygons.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ Position> {
        self.parts.iter().flat_map(Polygon::iter_points)
    }

    /// Whether there are no polygons.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Bounding rectangle of all polygons.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.parts
            .iter()
            .filter_map(Polygon::bounding_rect)
            .reduce(|acc, rect| acc.merge(rect))
    }

    /// Whether every position has longitude in `[-180, 180]`.
    pub fn is_lon_in_range(&self) -> bool {
        self.iter_points().all(Position::is_lon_in_range)
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(parts: Vec<Polygon>) -> Self {
        Self { parts }
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(value: Polygon) -> Self {
        Self { parts: vec![value] }
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<T: IntoIterator<Item = Polygon>>(iter: T) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MultiPolygon {
    type Item = Polygon;
    type IntoIter = std::vec::IntoIter<Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}
