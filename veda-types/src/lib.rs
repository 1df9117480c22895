//! Geometry types for areas of interest drawn on a horizontally repeating map.
//!
//! Positions keep their longitude unwrapped, so a polygon drawn after panning the map a few worlds to the east can
//! have coordinates like `540` or `900`. The types here only describe such geometries; bringing them back into the
//! standard `[-180, 180]` range is done by the `veda-antimeridian` crate.
//!
//! With the `geojson` feature, [`Feature`] converts from and into `geojson::Feature`. With the `geo-types` feature,
//! polygons and multipolygons convert from and into their `geo_types` counterparts.

pub mod error;
pub use error::VedaTypesError;

mod position;
pub use position::*;

mod rect;
pub use rect::Rect;

pub mod ring;
pub use ring::Ring;

mod polygon;
pub use polygon::Polygon;

mod multi_polygon;
pub use multi_polygon::MultiPolygon;

pub mod feature;
pub use feature::{AreaGeometry, Feature, FeatureId, Properties};

#[cfg(feature = "geojson")]
mod geojson;

#[cfg(feature = "geo-types")]
mod geo_types;
