//! Conversions between the crate types and `geojson` features.

use geojson::{PolygonType, Value};

use crate::error::VedaTypesError;
use crate::feature::{AreaGeometry, Feature, FeatureId};
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::ring::Ring;

mod position;

impl TryFrom<geojson::Feature> for Feature<AreaGeometry> {
    type Error = VedaTypesError;

    fn try_from(value: geojson::Feature) -> Result<Self, Self::Error> {
        let Some(geometry) = value.geometry else {
            return Err(VedaTypesError::Conversion(
                "feature has no geometry".into(),
            ));
        };

        Ok(Feature {
            geometry: AreaGeometry::try_from(geometry.value)?,
            properties: value.properties,
            id: value.id.map(FeatureId::from),
        })
    }
}

impl TryFrom<Value> for AreaGeometry {
    type Error = VedaTypesError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Polygon(polygon) => Ok(Self::Polygon(convert_polygon(&polygon)?)),
            Value::MultiPolygon(mp) => Ok(Self::MultiPolygon(convert_multi_polygon(&mp)?)),
            other => Err(VedaTypesError::Conversion(format!(
                "expected Polygon or MultiPolygon, got {}",
                geometry_name(&other)
            ))),
        }
    }
}

impl From<Feature<MultiPolygon>> for geojson::Feature {
    fn from(value: Feature<MultiPolygon>) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(Value::from(&value.geometry))),
            id: value.id.map(geojson::feature::Id::from),
            properties: value.properties,
            foreign_members: None,
        }
    }
}

impl From<&MultiPolygon> for Value {
    fn from(value: &MultiPolygon) -> Self {
        Value::MultiPolygon(value.polygons().map(export_polygon).collect())
    }
}

impl From<&Polygon> for Value {
    fn from(value: &Polygon) -> Self {
        Value::Polygon(export_polygon(value))
    }
}

impl From<geojson::feature::Id> for FeatureId {
    fn from(value: geojson::feature::Id) -> Self {
        match value {
            geojson::feature::Id::String(s) => Self::String(s),
            geojson::feature::Id::Number(n) => Self::Number(n),
        }
    }
}

impl From<FeatureId> for geojson::feature::Id {
    fn from(value: FeatureId) -> Self {
        match value {
            FeatureId::String(s) => Self::String(s),
            FeatureId::Number(n) => Self::Number(n),
        }
    }
}

fn geometry_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn convert_ring(ring: &[geojson::Position]) -> Result<Ring, VedaTypesError> {
    Ok(Ring::new(
        ring.iter()
            .map(|p| position::convert_position(p))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, VedaTypesError> {
    let Some((outer, inner)) = polygon.split_first() else {
        return Err(VedaTypesError::Conversion(
            "polygon has no exterior ring".into(),
        ));
    };

    Ok(Polygon::new(
        convert_ring(outer)?,
        inner
            .iter()
            .map(|ring| convert_ring(ring))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_multi_polygon(mp: &[PolygonType]) -> Result<MultiPolygon, VedaTypesError> {
    mp.iter().map(convert_polygon).collect()
}

fn export_polygon(polygon: &Polygon) -> PolygonType {
    polygon
        .iter_rings()
        .map(|ring| ring.iter_points().map(position::export_position).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lonlat;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn feature_from_json(value: serde_json::Value) -> geojson::Feature {
        serde_json::from_value(value).expect("invalid geojson")
    }

    #[test]
    fn polygon_feature() {
        let feature = feature_from_json(json!({
            "type": "Feature",
            "id": 7,
            "properties": { "name": "aoi" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[190, 0], [200, 0], [200, 10], [190, 10]]]
            }
        }));

        let feature = Feature::<AreaGeometry>::try_from(feature).expect("conversion failed");
        let AreaGeometry::Polygon(polygon) = &feature.geometry else {
            panic!("expected polygon");
        };
        assert_eq!(polygon.outer_ring.len(), 5);
        assert_eq!(polygon.outer_ring.points()[4], lonlat!(190.0, 0.0));
        assert_eq!(feature.id, Some(FeatureId::Number(7.into())));
        assert_eq!(
            feature.properties.as_ref().and_then(|p| p.get("name")),
            Some(&json!("aoi"))
        );
    }

    #[test]
    fn rejects_other_geometries() {
        let feature = feature_from_json(json!({
            "type": "Feature",
            "properties": null,
            "geometry": { "type": "Point", "coordinates": [0, 0] }
        }));
        assert_matches!(
            Feature::<AreaGeometry>::try_from(feature),
            Err(VedaTypesError::Conversion(_))
        );

        let feature = feature_from_json(json!({
            "type": "Feature",
            "properties": null,
            "geometry": null
        }));
        assert_matches!(
            Feature::<AreaGeometry>::try_from(feature),
            Err(VedaTypesError::Conversion(_))
        );
    }

    #[test]
    fn rejects_short_positions() {
        let value = Value::Polygon(vec![vec![vec![0.0], vec![1.0, 0.0], vec![1.0, 1.0]]]);
        assert_matches!(
            AreaGeometry::try_from(value),
            Err(VedaTypesError::Conversion(_))
        );
        assert_matches!(
            AreaGeometry::try_from(Value::Polygon(vec![])),
            Err(VedaTypesError::Conversion(_))
        );
    }

    #[test]
    fn export_multi_polygon() {
        let mp = MultiPolygon::from(Polygon::from(vec![
            lonlat!(-170.0, 0.0),
            lonlat!(-160.0, 0.0),
            lonlat!(-160.0, 10.0),
        ]));
        let mut properties = crate::Properties::new();
        properties.insert("id".into(), json!("x"));
        let feature = geojson::Feature::from(Feature::new(mp).with_properties(properties.clone()));

        assert_eq!(feature.properties, Some(properties));
        let Some(geojson::Geometry {
            value: Value::MultiPolygon(coords),
            ..
        }) = feature.geometry
        else {
            panic!("expected multipolygon");
        };
        assert_eq!(coords.len(), 1);
        assert_eq!(coords[0][0].len(), 4);
        assert_eq!(coords[0][0][1], vec![-160.0, 0.0]);
    }
}
