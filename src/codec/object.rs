//! Object records and their nested inventories
//!
//! Record layout (big-endian words):
//!   separator, position, 4 unknown, frameNum, orientation, frmPid,
//!   flags, elevation, protoPid, 4 unknown, mapPid, scriptId,
//!   numInventory, 3 unknown
//! followed by the type-specific extra payload and `numInventory`
//! inventory entries, each one unknown word and a full nested record.

use serde::Serialize;
use tracing::trace;

use super::extra::{read_extra, ExtraInfo};
use super::types::ObjectType;
use super::BinaryReader;
use crate::error::{Error, Result};
use crate::lookup::ProtoLookup;

/// Default limit on inventory nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard ceiling on the configurable nesting limit, keeping recursion within the stack
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Fields of the enclosing record that extra payloads depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeContext {
    pub frm_pid: u32,
    pub proto_pid: u32,
    pub elevation: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    pub position: i32,
    pub frame_num: u32,
    pub orientation: u32,
    #[serde(rename = "frmPID")]
    pub frm_pid: u32,
    pub elevation: u32,
    #[serde(rename = "protoPID")]
    pub proto_pid: u32,
    #[serde(rename = "mapPID")]
    pub map_pid: u32,
    #[serde(rename = "scriptID")]
    pub script_id: i32,
    pub num_inventory: u32,
    pub extra: ExtraInfo,
    pub inventory: Vec<InventoryEntry>,
}

/// One slot of a container's inventory. The container owns the object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub object: ObjectRecord,
}

impl ObjectRecord {
    /// Decode one record and its inventory tree
    pub fn read(reader: &mut BinaryReader, lookup: &ProtoLookup, max_depth: usize) -> Result<Self> {
        Self::read_nested(reader, lookup, max_depth, 0)
    }

    fn read_nested(
        reader: &mut BinaryReader,
        lookup: &ProtoLookup,
        max_depth: usize,
        depth: usize,
    ) -> Result<Self> {
        if depth > max_depth {
            return Err(Error::InventoryTooDeep { limit: max_depth });
        }

        reader.skip_words(1)?; // separator
        let position = reader.read_i32_be()?;
        reader.skip_words(4)?;
        let frame_num = reader.read_u32_be()?;
        let orientation = reader.read_u32_be()?;
        let frm_pid = reader.read_u32_be()?;
        reader.skip_words(1)?; // flags
        let elevation = reader.read_u32_be()?;
        let proto_pid = reader.read_u32_be()?;
        reader.skip_words(2)?;
        reader.skip_words(2)?;
        let map_pid = reader.read_u32_be()?;
        let script_id = reader.read_i32_be()?;
        let num_inventory = reader.read_u32_be()?;
        reader.skip_words(3)?;

        let tag = ObjectType::tag_of(proto_pid);
        let objtype = ObjectType::from_u8(tag).ok_or(Error::UnknownObjectType { proto_pid, objtype: tag })?;
        trace!(?objtype, proto_pid, frm_pid, position, depth, "object");

        let ctx = DecodeContext { frm_pid, proto_pid, elevation };
        let extra = read_extra(reader, objtype, &ctx, lookup)?;

        // Capacity is bounded by what the buffer could hold
        let mut inventory = Vec::with_capacity((num_inventory as usize).min(reader.remaining() / 4));
        for slot in 0..num_inventory as usize {
            let entry = reader
                .skip_words(1)
                .and_then(|()| Self::read_nested(reader, lookup, max_depth, depth + 1))
                .map_err(|source| Error::Inventory { slot, source: Box::new(source) })?;
            inventory.push(InventoryEntry { object: entry });
        }

        Ok(Self {
            position,
            frame_num,
            orientation,
            frm_pid,
            elevation,
            proto_pid,
            map_pid,
            script_id,
            num_inventory,
            extra,
            inventory,
        })
    }

    pub fn objtype(&self) -> ObjectType {
        match &self.extra {
            ExtraInfo::Item(_) => ObjectType::Item,
            ExtraInfo::Wall { .. } => ObjectType::Wall,
            ExtraInfo::Critter(_) => ObjectType::Critter,
            ExtraInfo::Misc { .. } => ObjectType::Misc,
            ExtraInfo::Scenery(_) => ObjectType::Scenery,
        }
    }

    /// This object and everything inside it, depth first
    pub fn walk(&self) -> Objects<'_> {
        Objects { stack: vec![self] }
    }
}

/// Pre-order iterator over an object tree
pub struct Objects<'a> {
    stack: Vec<&'a ObjectRecord>,
}

impl<'a> Objects<'a> {
    pub(crate) fn new(roots: &'a [ObjectRecord]) -> Self {
        Self { stack: roots.iter().rev().collect() }
    }
}

impl<'a> Iterator for Objects<'a> {
    type Item = &'a ObjectRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let object = self.stack.pop()?;
        self.stack.extend(object.inventory.iter().rev().map(|entry| &entry.object));
        Some(object)
    }
}
