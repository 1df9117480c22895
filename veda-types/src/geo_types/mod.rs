//! Conversions between the crate types and `geo_types` geometries.

mod multi_polygon;
mod polygon;
mod ring;
