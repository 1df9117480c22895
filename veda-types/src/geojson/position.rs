use crate::error::VedaTypesError;
use crate::position::Position;

pub(super) fn convert_position(value: &geojson::Position) -> Result<Position, VedaTypesError> {
    match value.as_slice() {
        [lon, lat, ..] => Ok(Position::new(*lon, *lat)),
        _ => Err(VedaTypesError::Conversion(format!(
            "position must have at least 2 coordinates, got {}",
            value.len()
        ))),
    }
}

pub(super) fn export_position(value: &Position) -> geojson::Position {
    vec![value.lon(), value.lat()]
}
