use geo::Area;
use veda_types::{AreaGeometry, Feature, MultiPolygon, Rect};

use crate::cut::{cut_polygon, CutPolygon, SLIVER_AREA};
use crate::error::AntimeridianError;
use crate::options::FixOptions;
use crate::shift::{shift_polygon, Direction};

/// Brings the geometry of the feature into the `[-180, 180]` longitude range, splitting it along the antimeridian
/// where it crosses it. Uses default [`FixOptions`].
///
/// See [`fix_antimeridian_with`] for details.
pub fn fix_antimeridian(
    feature: &Feature<AreaGeometry>,
) -> Result<Feature<MultiPolygon>, AntimeridianError> {
    fix_antimeridian_with(feature, &FixOptions::default())
}

/// Brings the geometry of the feature into the `[-180, 180]` longitude range, splitting it along the antimeridian
/// where it crosses it.
///
/// The output geometry is always a multipolygon covering the same area as the input, with parts lying in different
/// copies of the world moved into the canonical one. Properties and identifier of the feature are copied as they
/// are.
///
/// A geometry that already lies within the world extent is returned with its coordinates untouched. Otherwise the
/// geometry is cut by the extent, parts sticking out of it are moved by whole world widths back towards it, and the
/// result is cut again, until nothing sticks out.
///
/// # Errors
///
/// * [`AntimeridianError::EmptyResult`] if the geometry has no area. Parts smaller than [`SLIVER_AREA`] square
///   degrees count as clipping noise, so a geometry below that size fails the same way. Parts beyond the poles are
///   dropped, and a geometry lying only there fails too.
/// * [`AntimeridianError::PassLimitExceeded`] if the geometry is still out of range after
///   [`FixOptions::max_passes`] passes.
pub fn fix_antimeridian_with(
    feature: &Feature<AreaGeometry>,
    options: &FixOptions,
) -> Result<Feature<MultiPolygon>, AntimeridianError> {
    let geometry = feature.geometry.to_multi_polygon();
    if is_within_world(&geometry) {
        log::debug!("Geometry is within the world extent, no correction needed");
        return Ok(feature.with_geometry(geometry));
    }

    let mut current = geometry;
    for pass in 1..=options.max_passes() {
        let cut = cut_polygon(&current);
        log::debug!(
            "Antimeridian pass {pass}: {} valid, {} west, {} east polygons",
            part_count(&cut.valid),
            part_count(&cut.west),
            part_count(&cut.east),
        );

        if cut.is_empty() {
            return Err(AntimeridianError::EmptyResult);
        }

        let done = cut.is_in_range();
        current = recombine(cut);
        if done {
            return Ok(feature.with_geometry(current));
        }
    }

    log::warn!(
        "Geometry is still out of range after {} passes",
        options.max_passes()
    );
    Err(AntimeridianError::PassLimitExceeded {
        passes: options.max_passes(),
    })
}

fn is_within_world(geometry: &MultiPolygon) -> bool {
    let world = Rect::world();
    geometry.iter_points().all(|p| world.contains(p))
        && geo::MultiPolygon::<f64>::from(geometry).unsigned_area() > SLIVER_AREA
}

/// Concatenates the valid part with the shifted east and west parts. No union is done here: overlaps are merged
/// when the result is cut on the next pass.
fn recombine(cut: CutPolygon) -> MultiPolygon {
    let CutPolygon { valid, west, east } = cut;
    let east = east
        .into_iter()
        .flatten()
        .map(|polygon| shift_polygon(&polygon, Direction::East));
    let west = west
        .into_iter()
        .flatten()
        .map(|polygon| shift_polygon(&polygon, Direction::West));

    valid.into_iter().flatten().chain(east).chain(west).collect()
}

fn part_count(part: &Option<MultiPolygon>) -> usize {
    part.as_ref().map_or(0, |mp| mp.parts().len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;
    use veda_types::{lonlat, FeatureId, Polygon, Properties};

    fn feature(rect: Rect) -> Feature<AreaGeometry> {
        Feature::new(AreaGeometry::Polygon(rect.into()))
    }

    fn area(geometry: &MultiPolygon) -> f64 {
        geo::MultiPolygon::<f64>::from(geometry).unsigned_area()
    }

    #[test]
    fn in_range_geometry_is_untouched() {
        let polygon = Polygon::from(vec![
            lonlat!(10.0, 0.0),
            lonlat!(20.0, 0.0),
            lonlat!(15.0, 10.0),
        ]);
        let fixed = fix_antimeridian(&Feature::new(AreaGeometry::Polygon(polygon.clone())))
            .expect("fix failed");
        assert_eq!(fixed.geometry, MultiPolygon::from(polygon));
    }

    #[test]
    fn one_world_east() {
        let fixed = fix_antimeridian(&feature(Rect::new(190.0, 0.0, 200.0, 10.0))).expect("fix failed");
        assert_eq!(fixed.geometry.parts().len(), 1);

        let bounds = fixed.geometry.bounding_rect().expect("empty result");
        assert_abs_diff_eq!(bounds.lon_min, -170.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.lon_max, -160.0, epsilon = 1e-9);
        assert!(fixed.geometry.is_lon_in_range());
    }

    #[test]
    fn crossing_polygon_is_split_in_two() {
        let fixed = fix_antimeridian(&feature(Rect::new(500.0, 0.0, 580.0, 10.0))).expect("fix failed");
        assert_eq!(fixed.geometry.parts().len(), 2);
        assert!(fixed.geometry.is_lon_in_range());
        assert_abs_diff_eq!(area(&fixed.geometry), 800.0, epsilon = 1e-6);
    }

    #[test]
    fn properties_are_kept() {
        let mut properties = Properties::new();
        properties.insert("name".into(), serde_json::Value::from("dateline"));
        let input = feature(Rect::new(170.0, 0.0, 190.0, 10.0))
            .with_properties(properties.clone())
            .with_id(FeatureId::String("aoi".into()));

        let fixed = fix_antimeridian(&input).expect("fix failed");
        assert_eq!(fixed.properties, Some(properties));
        assert_eq!(fixed.id, Some(FeatureId::String("aoi".into())));
    }

    #[test]
    fn zero_area_fails() {
        let line = Polygon::from(vec![
            lonlat!(190.0, 0.0),
            lonlat!(200.0, 0.0),
            lonlat!(210.0, 0.0),
        ]);
        assert_matches!(
            fix_antimeridian(&Feature::new(AreaGeometry::Polygon(line))),
            Err(AntimeridianError::EmptyResult)
        );

        let in_range_line = Polygon::from(vec![lonlat!(0.0, 0.0), lonlat!(10.0, 0.0)]);
        assert_matches!(
            fix_antimeridian(&Feature::new(AreaGeometry::Polygon(in_range_line))),
            Err(AntimeridianError::EmptyResult)
        );
    }

    #[test]
    fn tiny_geometry_fails() {
        assert_matches!(
            fix_antimeridian(&feature(Rect::new(190.0, 0.0, 190.000_001, 0.000_01))),
            Err(AntimeridianError::EmptyResult)
        );
    }

    #[test]
    fn crossing_past_the_pole() {
        let fixed = fix_antimeridian(&feature(Rect::new(170.0, 80.0, 190.0, 100.0))).expect("fix failed");
        assert!(fixed.geometry.is_lon_in_range());
        assert_abs_diff_eq!(area(&fixed.geometry), 200.0, epsilon = 1e-6);

        let bounds = fixed.geometry.bounding_rect().expect("empty result");
        assert_abs_diff_eq!(bounds.lat_min, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.lat_max, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.lon_min, -180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.lon_max, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn pass_limit() {
        let options = FixOptions::default().with_max_passes(1);
        assert_matches!(
            fix_antimeridian_with(&feature(Rect::new(500.0, 0.0, 580.0, 10.0)), &options),
            Err(AntimeridianError::PassLimitExceeded { passes: 1 })
        );
    }
}
