//! Decode a map and write its JSON projection and asset catalog
//!
//! Run with: cargo run --bin fomap -- maps/artemple.map --data-dir data

use std::path::PathBuf;

use clap::Parser;
use fomap::{export_map, DecodeOptions, ExportOptions, MapDecoder, ProtoLookup};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fomap")]
#[command(about = "Fallout 2 map decoder - exports tiles, objects and referenced art")]
struct Args {
    /// Map file to decode
    map: PathBuf,

    /// Extracted game data directory holding art/ and proto/
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Deepest inventory nesting accepted, capped at fomap::codec::MAX_DEPTH_LIMIT
    #[arg(long, default_value_t = fomap::codec::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[arg(long)]
    no_tiles: bool,

    #[arg(long)]
    no_objects: bool,

    #[arg(long)]
    no_images: bool,

    /// Also write the full decoded map as <map>.raw.json
    #[arg(long)]
    raw: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = std::fs::read(&args.map)?;
    let lookup = ProtoLookup::open(&args.data_dir)?;
    let options = DecodeOptions { max_inventory_depth: args.max_depth };
    let map = MapDecoder::new(&lookup).with_options(options).decode(&data)?;

    info!("{} tiles", map.tiles.len());
    info!("{} objects", map.total_objects);
    info!("{} objects on level 1", map.total_objects_level);

    if args.raw {
        std::fs::write(args.map.with_extension("raw.json"), serde_json::to_vec_pretty(&map)?)?;
    }

    let export_options = ExportOptions { tiles: !args.no_tiles, objects: !args.no_objects };
    let export = export_map(&map, &lookup, export_options)?;
    std::fs::write(args.map.with_extension("json"), serde_json::to_vec(&export)?)?;

    let images = export.images();
    if !args.no_images {
        std::fs::write(args.map.with_extension("images.json"), serde_json::to_vec(&images)?)?;
        let text: String = images.iter().map(|image| format!("{image}\n")).collect();
        std::fs::write(args.map.with_extension("images.txt"), text)?;
    }

    for image in &images {
        println!("{image}");
    }

    Ok(())
}
