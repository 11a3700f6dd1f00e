//! This example removes small islands from a GeoJSON file and prints the result.
//!
//! Run it with the path to a `.geojson` file and the minimum island area. Minimum vertex count is optional.
//!
//! ```shell
//! RUST_LOG=debug cargo run --example filter_geojson -- ./islet/examples/data/islands.geojson 2e10 5
//! ```

use anyhow::{anyhow, Context, Result};
use islet::adapter::{filter_spatial, AdapterOptions, SpatialInput, SpatialOutput};
use islet::IslandFilter;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [file_name, min_area, rest @ ..] = args.as_slice() else {
        return Err(anyhow!(
            "This example must be run with at least two arguments - name of the .geojson file and minimum island area"
        ));
    };

    let mut builder = IslandFilter::builder()
        .with_min_area(min_area.parse().context("minimum area must be a number")?)
        .with_drop_empty(true);
    if let Some(min_vertices) = rest.first() {
        builder = builder.with_min_vertices(
            min_vertices
                .parse()
                .context("minimum vertex count must be a non-negative integer")?,
        );
    }
    let filter = builder.build()?;

    let json = std::fs::read_to_string(file_name)
        .with_context(|| format!("failed to read {file_name}"))?;
    let options = AdapterOptions {
        skip_invalid: true,
        ..Default::default()
    };

    match filter_spatial(SpatialInput::RawText(json), &filter, &options)? {
        SpatialOutput::RawText(output) => println!("{output}"),
        other => return Err(anyhow!("unexpected output: {other:?}")),
    }

    Ok(())
}
