//! Projection of a decoded map into the JSON layout used by map viewers,
//! plus the catalog of art assets the map references.

use indexmap::IndexMap;
use serde::Serialize;

use crate::codec::tiles::GRID_WIDTH;
use crate::codec::MapFile;
use crate::error::Result;
use crate::lookup::{AssetList, ProtoLookup};

/// Width of the hex grid objects are positioned on
pub const HEX_GRID_WIDTH: i32 = 200;

#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
    pub tiles: bool,
    pub objects: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { tiles: true, objects: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HexPosition {
    pub x: i32,
    pub y: i32,
}

impl HexPosition {
    pub fn from_index(position: i32) -> Self {
        Self {
            x: position.rem_euclid(HEX_GRID_WIDTH),
            y: position.div_euclid(HEX_GRID_WIDTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedObject {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: HexPosition,
    /// One-based elevation
    pub elevation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MapExport {
    /// Floor tile names, row by row, each row mirrored on X
    pub tiles: Vec<Vec<String>>,
    pub objects: Vec<ExportedObject>,
    /// Kept out of the map JSON; written to its own files
    #[serde(skip)]
    pub catalog: AssetCatalog,
}

impl MapExport {
    pub fn images(&self) -> Vec<String> {
        self.catalog.images()
    }
}

/// Distinct art paths in first-use order with use counts
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    pub tiles: IndexMap<String, usize>,
    pub objects: IndexMap<String, usize>,
}

impl AssetCatalog {
    /// Full asset paths: tiles first, then object art
    pub fn images(&self) -> Vec<String> {
        self.tiles
            .keys()
            .map(|tile| format!("art/tiles/{tile}"))
            .chain(self.objects.keys().cloned())
            .collect()
    }
}

pub fn export_map(map: &MapFile, lookup: &ProtoLookup, options: ExportOptions) -> Result<MapExport> {
    let mut export = MapExport::default();

    if options.tiles {
        for row in map.tiles.chunks(GRID_WIDTH) {
            let mut names = Vec::with_capacity(row.len());
            for tile in row {
                let name = lookup.stem(AssetList::Tiles, tile.floor as usize)?.to_string();
                *export.catalog.tiles.entry(name.clone()).or_default() += 1;
                names.push(name);
            }
            names.reverse();
            export.tiles.push(names);
        }
    }

    if options.objects {
        for object in &map.objects {
            let art = object.extra.art_path().map(str::to_string);
            if let Some(art) = &art {
                *export.catalog.objects.entry(art.clone()).or_default() += 1;
            }
            export.objects.push(ExportedObject {
                kind: object.extra.type_name(),
                position: HexPosition::from_index(object.position),
                elevation: (i64::from(object.elevation) + 1).to_string(),
                art,
            });
        }
    }

    Ok(export)
}
