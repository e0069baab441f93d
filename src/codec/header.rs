//! Fixed map header
//!
//! Layout (big-endian):
//!   u32      version
//!   [u8;16]  name, NUL padded
//!   i32 x 10 playerPos, elevation, playerOrientation, numLocalVars, scriptId,
//!            elevationFlags, unknown1, numGlobalVars, mapId, time
//!   [u32;44] reserved

use bitflags::bitflags;
use serde::{Serialize, Serializer};

use super::BinaryReader;
use crate::error::Result;

/// Version every supported map carries
pub const MAP_VERSION: u32 = 20;
pub const NAME_WIDTH: usize = 16;
const RESERVED_WORDS: usize = 44;

bitflags! {
    /// Header bits marking elevations absent from the file
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ElevationFlags: u32 {
        const NO_ELEVATION_1 = 1 << 2;
        const NO_ELEVATION_2 = 1 << 3;
    }
}

impl ElevationFlags {
    /// Number of elevation levels stored in the map
    pub fn num_levels(self) -> u32 {
        if self.contains(Self::NO_ELEVATION_2) {
            if self.contains(Self::NO_ELEVATION_1) {
                return 1;
            }
            return 2;
        }
        3
    }
}

/// Written as the raw header word, unknown bits included
impl Serialize for ElevationFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapHeader {
    pub version: u32,
    pub name: String,
    pub player_pos: i32,
    pub elevation: i32,
    pub player_orientation: i32,
    pub num_local_vars: i32,
    pub script_id: i32,
    pub elevation_flags: ElevationFlags,
    pub num_levels: u32,
    pub unknown1: i32,
    pub num_global_vars: i32,
    pub map_id: i32,
    pub time: i32,
}

impl MapHeader {
    /// Decode the header without judging version or level count
    pub fn read(reader: &mut BinaryReader) -> Result<Self> {
        let version = reader.read_u32_be()?;
        let name = reader.read_fixed_string(NAME_WIDTH)?;
        let player_pos = reader.read_i32_be()?;
        let elevation = reader.read_i32_be()?;
        let player_orientation = reader.read_i32_be()?;
        let num_local_vars = reader.read_i32_be()?;
        let script_id = reader.read_i32_be()?;
        let elevation_flags = ElevationFlags::from_bits_retain(reader.read_u32_be()?);
        let unknown1 = reader.read_i32_be()?;
        let num_global_vars = reader.read_i32_be()?;
        let map_id = reader.read_i32_be()?;
        let time = reader.read_i32_be()?;
        reader.skip_words(RESERVED_WORDS)?;

        Ok(Self {
            version,
            name,
            player_pos,
            elevation,
            player_orientation,
            num_local_vars,
            script_id,
            elevation_flags,
            num_levels: elevation_flags.num_levels(),
            unknown1,
            num_global_vars,
            map_id,
            time,
        })
    }
}
