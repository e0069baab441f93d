//! Whole-map decoding
//!
//! Sections in file order: header, global vars, local vars, the 100x100
//! tile grid of the single supported elevation, the script table (checked
//! and skipped), the object counts and finally the object records.

use serde::Serialize;
use tracing::{debug, warn};

use super::header::{MapHeader, MAP_VERSION};
use super::object::{ObjectRecord, Objects, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use super::scripts::validate_scripts;
use super::tiles::{read_tiles, Tile};
use super::variables::read_var_sections;
use super::BinaryReader;
use crate::error::{Error, Result};
use crate::lookup::ProtoLookup;

/// Elevation levels this decoder can read
pub const SUPPORTED_LEVELS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Deepest inventory nesting accepted before failing
    pub max_inventory_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { max_inventory_depth: DEFAULT_MAX_DEPTH }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFile {
    #[serde(flatten)]
    pub header: MapHeader,
    pub global_vars: Vec<i32>,
    pub local_vars: Vec<i32>,
    pub tiles: Vec<Tile>,
    pub total_objects: i32,
    pub total_objects_level: i32,
    pub objects: Vec<ObjectRecord>,
}

impl MapFile {
    /// Decode with default options
    pub fn parse(data: &[u8], lookup: &ProtoLookup) -> Result<Self> {
        MapDecoder::new(lookup).decode(data)
    }

    /// Every object on the map, inventories included, depth first
    pub fn iter_objects(&self) -> Objects<'_> {
        Objects::new(&self.objects)
    }
}

/// One decode session over a lookup
pub struct MapDecoder<'a> {
    lookup: &'a ProtoLookup,
    options: DecodeOptions,
}

impl<'a> MapDecoder<'a> {
    pub fn new(lookup: &'a ProtoLookup) -> Self {
        Self { lookup, options: DecodeOptions::default() }
    }

    /// Depth limits above [`MAX_DEPTH_LIMIT`] are clamped to it
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        if options.max_inventory_depth > MAX_DEPTH_LIMIT {
            warn!(
                requested = options.max_inventory_depth,
                limit = MAX_DEPTH_LIMIT,
                "inventory depth limit clamped"
            );
        }
        self.options = DecodeOptions {
            max_inventory_depth: options.max_inventory_depth.min(MAX_DEPTH_LIMIT),
        };
        self
    }

    pub fn decode(&self, data: &[u8]) -> Result<MapFile> {
        let mut reader = BinaryReader::new(data);

        let header = MapHeader::read(&mut reader)?;
        if header.version != MAP_VERSION {
            return Err(Error::VersionMismatch { expected: MAP_VERSION, actual: header.version });
        }
        if header.num_levels != SUPPORTED_LEVELS {
            return Err(Error::UnsupportedLevelCount {
                levels: header.num_levels,
                flags: header.elevation_flags.bits(),
            });
        }
        debug!(name = %header.name, map_id = header.map_id, "map header");

        let (global_vars, local_vars) =
            read_var_sections(&mut reader, header.num_global_vars, header.num_local_vars)?;

        debug!(offset = reader.position(), "tiles");
        let tiles = read_tiles(&mut reader)?;

        debug!(offset = reader.position(), "scripts");
        let total_scripts = validate_scripts(&mut reader)?;
        debug!(total_scripts, "script table ok");

        let total_objects = reader.read_i32_be()?;
        let total_objects_level = reader.read_i32_be()?;
        let count = usize::try_from(total_objects_level).map_err(|_| Error::NegativeCount {
            field: "level object",
            value: total_objects_level,
        })?;
        debug!(total_objects, total_objects_level, offset = reader.position(), "objects");

        let mut objects = Vec::with_capacity(count.min(reader.remaining() / 4));
        for index in 0..count {
            let object = ObjectRecord::read(&mut reader, self.lookup, self.options.max_inventory_depth)
                .map_err(|source| Error::Object { index, source: Box::new(source) })?;
            objects.push(object);
        }

        if !reader.is_empty() {
            debug!(trailing = reader.remaining(), "unread bytes after objects");
        }

        Ok(MapFile {
            header,
            global_vars,
            local_vars,
            tiles,
            total_objects,
            total_objects_level,
            objects,
        })
    }
}
