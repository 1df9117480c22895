//! Reads a GeoJSON feature with a polygon or multipolygon geometry, brings it into the `[-180, 180]` longitude
//! range and prints the result.
//!
//! ```sh
//! cargo run --example fix_geojson -- veda-antimeridian/tests/data/crossing_540.geojson
//! ```

use anyhow::{bail, Context};
use geojson::GeoJson;
use veda_antimeridian::fix_geojson;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: fix_geojson <feature.geojson>");
    };

    let json = std::fs::read_to_string(&path).with_context(|| format!("failed to read {path}"))?;
    let feature = match json.parse::<GeoJson>()? {
        GeoJson::Feature(feature) => feature,
        _ => bail!("{path} does not contain a single feature"),
    };

    let fixed = fix_geojson(feature).with_context(|| format!("failed to fix {path}"))?;
    log::info!("Fixed feature from {path}");
    println!("{}", serde_json::to_string_pretty(&fixed)?);

    Ok(())
}
