use geo_types::LineString;

use crate::polygon::Polygon;
use crate::ring::Ring;

impl From<&Polygon> for geo_types::Polygon<f64> {
    fn from(value: &Polygon) -> Self {
        geo_types::Polygon::new(
            LineString::<f64>::from(&value.outer_ring),
            value.inner_rings.iter().map(LineString::<f64>::from).collect(),
        )
    }
}

impl From<&geo_types::Polygon<f64>> for Polygon {
    fn from(value: &geo_types::Polygon<f64>) -> Self {
        Polygon::new(
            Ring::from(value.exterior()),
            value.interiors().iter().map(Ring::from).collect(),
        )
    }
}
