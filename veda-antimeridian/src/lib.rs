//! Antimeridian correction for areas of interest drawn on a horizontally repeating map.
//!
//! When a map lets the user pan past the antimeridian, the world is drawn several times side by side and a polygon
//! drawn on one of the copies gets longitudes outside of `[-180, 180]`. [`fix_antimeridian`] maps such a polygon back
//! into the canonical range. Parts crossing the antimeridian are split, so the result is always a multipolygon:
//!
//! ```
//! use veda_antimeridian::fix_antimeridian;
//! use veda_types::{AreaGeometry, Feature, Polygon, Rect};
//!
//! let drawn = Feature::new(AreaGeometry::Polygon(Polygon::from(Rect::new(170.0, 0.0, 190.0, 10.0))));
//! let fixed = fix_antimeridian(&drawn).unwrap();
//!
//! assert_eq!(fixed.geometry.parts().len(), 2);
//! assert!(fixed.geometry.is_lon_in_range());
//! ```

mod cut;
mod error;
mod extent;
mod fix;
mod options;
mod shift;

pub use cut::{cut_polygon, outside_polygons, to_multi_polygon, CutPolygon, SLIVER_AREA};
pub use error::AntimeridianError;
pub use extent::canonical_extent;
pub use fix::{fix_antimeridian, fix_antimeridian_with};
pub use options::FixOptions;
pub use shift::{shift_delta, shift_multiple, shift_polygon, shift_ring, Direction};

/// Same as [`fix_antimeridian`] but takes and returns GeoJSON features.
///
/// # Errors
///
/// Besides the errors of [`fix_antimeridian`], returns [`AntimeridianError::InvalidGeometry`] if the feature has
/// no geometry or it is not a polygon or a multipolygon.
#[cfg(feature = "geojson")]
pub fn fix_geojson(feature: geojson::Feature) -> Result<geojson::Feature, AntimeridianError> {
    let feature = veda_types::Feature::<veda_types::AreaGeometry>::try_from(feature)?;
    Ok(fix_antimeridian(&feature)?.into())
}
