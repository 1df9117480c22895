use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        value.polygons().map(geo_types::Polygon::<f64>::from).collect()
    }
}

impl From<&geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: &geo_types::MultiPolygon<f64>) -> Self {
        value.0.iter().map(Polygon::from).collect()
    }
}
