//! Fallout 2 map decoder
//!
//! Decodes `.map` files into an owned object graph: header, script
//! variables, the tile grid and the tree of placed objects with their
//! inventories. Art and proto lookups go through a [`ProtoLookup`] rooted
//! at the game's extracted data directory.

pub mod codec;
pub mod error;
pub mod export;
pub mod lookup;

pub use error::{CritterRule, Error, ErrorKind, Result};
pub use codec::{
    MapFile, MapDecoder, DecodeOptions, MapHeader, ElevationFlags,
    ObjectRecord, InventoryEntry, ExtraInfo, ItemInfo, CritterInfo, SceneryInfo, SceneryKind,
    ObjectType, StubKind, Tile,
};
pub use export::{export_map, AssetCatalog, ExportOptions, MapExport};
pub use lookup::{AssetList, ProtoLookup};
