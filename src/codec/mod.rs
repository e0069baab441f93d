pub mod reader;
#[cfg(test)]
pub mod writer;
pub mod types;
pub mod header;
pub mod variables;
pub mod tiles;
pub mod scripts;
pub mod critter;
pub mod extra;
pub mod object;
pub mod map_file;

pub use reader::BinaryReader;
#[cfg(test)]
pub use writer::BinaryWriter;
pub use types::*;
pub use header::{ElevationFlags, MapHeader, MAP_VERSION};
pub use tiles::{Tile, TILE_COUNT};
pub use critter::{critter_art_path, CritterFrm};
pub use extra::{CritterInfo, ExtraInfo, ItemInfo, SceneryInfo, SceneryKind};
pub use object::{DecodeContext, InventoryEntry, ObjectRecord, Objects, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
pub use map_file::{DecodeOptions, MapDecoder, MapFile};
