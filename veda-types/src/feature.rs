//! Features wrap a geometry together with its properties.

use serde::{Deserialize, Serialize};

use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;

/// Free-form properties of a feature. They are carried along with the geometry and never inspected.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Identifier of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String identifier.
    String(String),
    /// Numeric identifier.
    Number(serde_json::Number),
}

/// A geometry together with opaque properties and an optional identifier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Feature<G> {
    /// Geometry of the feature.
    pub geometry: G,
    /// Properties, if any.
    pub properties: Option<Properties>,
    /// Identifier, if any.
    pub id: Option<FeatureId>,
}

impl<G> Feature<G> {
    /// Creates a feature without properties or identifier.
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            properties: None,
            id: None,
        }
    }

    /// Sets the properties of the feature.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Sets the identifier of the feature.
    pub fn with_id(mut self, id: FeatureId) -> Self {
        self.id = Some(id);
        self
    }

    /// Creates a new feature with the given geometry, copying properties and identifier from `self`.
    pub fn with_geometry<T>(&self, geometry: T) -> Feature<T> {
        Feature {
            geometry,
            properties: self.properties.clone(),
            id: self.id.clone(),
        }
    }
}

/// Geometry of an area: either a single polygon or several of them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum AreaGeometry {
    /// Single polygon.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
}

impl AreaGeometry {
    /// Returns the geometry as a multipolygon. A single polygon becomes the only part of it.
    pub fn to_multi_polygon(&self) -> MultiPolygon {
        match self {
            Self::Polygon(polygon) => polygon.clone().into(),
            Self::MultiPolygon(mp) => mp.clone(),
        }
    }

    /// Same as [`AreaGeometry::to_multi_polygon`] but consumes the geometry.
    pub fn into_multi_polygon(self) -> MultiPolygon {
        match self {
            Self::Polygon(polygon) => polygon.into(),
            Self::MultiPolygon(mp) => mp,
        }
    }
}

impl From<Polygon> for AreaGeometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for AreaGeometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}
