//! Partition of a geometry against the canonical world extent.

use geo::{Area, BooleanOps};
use veda_types::{MultiPolygon, Polygon, Position, Rect, MAX_LAT, MAX_LON};

use crate::extent::canonical_extent;
use crate::shift::Direction;

/// Polygons with area below this value (in square degrees) are treated as clipping noise and dropped.
///
/// The threshold is absolute: an input smaller than this (e.g. `1e-6` by `1e-5` degrees) is dropped as a whole.
pub const SLIVER_AREA: f64 = 1e-10;

/// Result of cutting a geometry by the canonical extent.
///
/// Every part is `None` rather than an empty multipolygon when there is nothing in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutPolygon {
    /// Part of the geometry inside `[-180, 180] x [-90, 90]`.
    pub valid: Option<MultiPolygon>,
    /// Outside polygons with at least one position west of `-180`.
    pub west: Option<MultiPolygon>,
    /// Outside polygons with at least one position east of `180`.
    pub east: Option<MultiPolygon>,
}

impl CutPolygon {
    /// Whether all three parts are empty.
    pub fn is_empty(&self) -> bool {
        self.valid.is_none() && self.west.is_none() && self.east.is_none()
    }

    /// Whether nothing sticks out of the canonical range on either side.
    pub fn is_in_range(&self) -> bool {
        self.west.is_none() && self.east.is_none()
    }
}

/// Splits the geometry into the part inside the canonical extent and the parts sticking out of it on the west
/// and on the east.
///
/// Overlapping polygons of the input are merged before clipping. Everything above or below the poles is cut off
/// before the outside part is split by side, including pieces attached to a part crossing the antimeridian.
pub fn cut_polygon(geometry: &MultiPolygon) -> CutPolygon {
    let input = dissolve(geo::MultiPolygon::<f64>::from(geometry));
    if input.unsigned_area() <= SLIVER_AREA {
        return CutPolygon::default();
    }

    let extent = canonical_extent();
    let valid = to_multi_polygon(input.intersection(extent)).map(|mp| clamp_to_extent(&mp));
    let outside = to_multi_polygon(
        input
            .difference(extent)
            .intersection(&latitude_band(geometry)),
    );

    CutPolygon {
        valid,
        west: outside_polygons(outside.as_ref(), Direction::West),
        east: outside_polygons(outside.as_ref(), Direction::East),
    }
}

/// Converts a clipping result into a multipolygon, dropping slivers. Returns `None` if nothing is left.
pub fn to_multi_polygon(clipped: geo::MultiPolygon<f64>) -> Option<MultiPolygon> {
    let parts: MultiPolygon = clipped
        .0
        .iter()
        .filter(|polygon| polygon.unsigned_area() > SLIVER_AREA)
        .map(Polygon::from)
        .collect();

    (!parts.is_empty()).then_some(parts)
}

/// Selects the polygons of `outside` that stick out on the `direction` side.
pub fn outside_polygons(
    outside: Option<&MultiPolygon>,
    direction: Direction,
) -> Option<MultiPolygon> {
    let parts: MultiPolygon = outside?
        .polygons()
        .filter(|polygon| direction.is_exceeded_by(polygon))
        .cloned()
        .collect();

    (!parts.is_empty()).then_some(parts)
}

// Covers the whole longitude span of the geometry between the poles.
fn latitude_band(geometry: &MultiPolygon) -> geo::MultiPolygon<f64> {
    let (lon_min, lon_max) = geometry
        .bounding_rect()
        .map_or((-MAX_LON, MAX_LON), |rect| (rect.lon_min, rect.lon_max));
    let band = Rect::new(lon_min - 1.0, -MAX_LAT, lon_max + 1.0, MAX_LAT);

    geo::MultiPolygon::new(vec![geo::Polygon::<f64>::from(&Polygon::from(band))])
}

fn dissolve(geometry: geo::MultiPolygon<f64>) -> geo::MultiPolygon<f64> {
    if geometry.0.len() < 2 {
        return geometry;
    }

    geometry
        .0
        .into_iter()
        .map(|polygon| geo::MultiPolygon::new(vec![polygon]))
        .reduce(|acc, part| acc.union(&part))
        .unwrap_or_else(|| geo::MultiPolygon::new(vec![]))
}

// Intersection points on the extent border can come out a few ulps beyond it.
fn clamp_to_extent(geometry: &MultiPolygon) -> MultiPolygon {
    geometry
        .polygons()
        .map(|polygon| {
            polygon.map_rings(|ring| {
                ring.map_points(|p| {
                    Position::new(
                        p.lon().clamp(-MAX_LON, MAX_LON),
                        p.lat().clamp(-MAX_LAT, MAX_LAT),
                    )
                })
            })
        })
        .collect()
}
