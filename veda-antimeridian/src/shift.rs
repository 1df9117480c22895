use veda_types::{Polygon, Ring, MAX_LON, WORLD_WIDTH};

/// Side of the canonical range a geometry sticks out of.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Longitudes less than `-180`.
    West,
    /// Longitudes greater than `180`.
    East,
}

impl Direction {
    /// Whether the polygon has at least one position beyond the bound on this side.
    ///
    /// A single position is enough: polygons are not weighted by area or centroid. A polygon sticking out of both
    /// sides is reported for both.
    pub fn is_exceeded_by(&self, polygon: &Polygon) -> bool {
        match self {
            Direction::West => polygon.exceeds_west(),
            Direction::East => polygon.exceeds_east(),
        }
    }
}

/// Number of world copies a ring sticking out on the `direction` side must be moved by.
///
/// For the east side the smallest longitude of the ring decides: `ceil(|(min_lon - 180) / 360|)`. For the west side
/// it is the largest one: `ceil(|(max_lon + 180) / 360|)`. The result is never less than `1`.
pub fn shift_multiple(ring: &Ring, direction: Direction) -> f64 {
    let excess = match direction {
        Direction::East => ring.min_lon().map(|lon| lon - MAX_LON),
        Direction::West => ring.max_lon().map(|lon| lon + MAX_LON),
    };

    (excess.unwrap_or(0.0) / WORLD_WIDTH).abs().ceil().max(1.0)
}

/// Longitude offset in degrees that moves a ring sticking out on the `direction` side back towards the canonical
/// range.
pub fn shift_delta(ring: &Ring, direction: Direction) -> f64 {
    let delta = shift_multiple(ring, direction) * WORLD_WIDTH;
    match direction {
        Direction::East => -delta,
        Direction::West => delta,
    }
}

/// Moves the ring by whole world widths so that its extreme position on the `direction` side lands at or inside
/// the bound it was violating.
///
/// Other positions can still be out of range after that, if the ring is wider than the range itself.
pub fn shift_ring(ring: &Ring, direction: Direction) -> Ring {
    let delta = shift_delta(ring, direction);
    log::trace!("Shifting ring of {} positions by {delta}", ring.len());
    ring.shift_lon(delta)
}

/// Moves all rings of the polygon by the offset of its outer ring.
///
/// Holes lie inside the outer ring, so they are moved together with it and stay inside.
pub fn shift_polygon(polygon: &Polygon, direction: Direction) -> Polygon {
    let delta = shift_delta(&polygon.outer_ring, direction);
    log::trace!(
        "Shifting polygon with {} holes by {delta}",
        polygon.inner_rings.len()
    );
    polygon.map_rings(|ring| ring.shift_lon(delta))
}
