use std::sync::OnceLock;

use veda_types::{Polygon, Rect};

static WORLD: OnceLock<geo::MultiPolygon<f64>> = OnceLock::new();

/// The world in its canonical range, `[-180, 180] x [-90, 90]`, used as the clipping mask.
pub fn canonical_extent() -> &'static geo::MultiPolygon<f64> {
    WORLD.get_or_init(|| {
        geo::MultiPolygon::new(vec![geo::Polygon::<f64>::from(&Polygon::from(
            Rect::world(),
        ))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn covers_the_world() {
        let extent = canonical_extent();
        assert_eq!(extent.0.len(), 1);
        assert_eq!(extent.unsigned_area(), 360.0 * 180.0);
        assert!(std::ptr::eq(extent, canonical_extent()));
    }
}
