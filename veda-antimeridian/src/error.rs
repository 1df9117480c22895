//! Error types used by the crate.

use thiserror::Error;
use veda_types::VedaTypesError;

/// Antimeridian correction error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AntimeridianError {
    /// Clipping against the world extent left nothing: the input has zero area.
    #[error("empty result: the geometry has no area inside or outside of the world extent")]
    EmptyResult,
    /// The geometry was still out of range after the configured number of passes.
    #[error("geometry did not converge into [-180, 180] within {passes} passes")]
    PassLimitExceeded {
        /// Number of passes made.
        passes: usize,
    },
    /// Input could not be converted into an area geometry.
    #[error("invalid geometry")]
    InvalidGeometry(#[from] VedaTypesError),
}
