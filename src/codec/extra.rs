//! Type-specific trailing payload of an object record

use serde::Serialize;

use super::critter::critter_art_path;
use super::object::DecodeContext;
use super::types::{ItemType, ObjectType, ProtoKind, SceneryType, StubKind};
use super::BinaryReader;
use crate::error::{Error, Result};
use crate::lookup::{strip_ext, AssetList, ProtoLookup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "subtype", rename_all = "lowercase")]
pub enum ItemInfo {
    /// Ammo art is looked up in the walls list, as existing tools do
    #[serde(rename_all = "camelCase")]
    Ammo { ammo_count: u32, art_path: String },
    Weapon,
    Container,
    Armor,
    Drug,
    Misc,
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CritterInfo {
    pub art_path: String,
    #[serde(rename = "AInum")]
    pub ai_num: i32,
    #[serde(rename = "groupID")]
    pub group_id: u32,
    pub hp: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneryKind {
    Portal,
    Elevator,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneryInfo {
    pub art_path: String,
    pub subtype: SceneryKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtraInfo {
    Item(ItemInfo),
    #[serde(rename_all = "camelCase")]
    Wall { art_path: String },
    Critter(CritterInfo),
    #[serde(rename_all = "camelCase")]
    Misc { art_path: String },
    Scenery(SceneryInfo),
}

impl ExtraInfo {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Item(_) => "item",
            Self::Wall { .. } => "wall",
            Self::Critter(_) => "critter",
            Self::Misc { .. } => "misc",
            Self::Scenery(_) => "scenery",
        }
    }

    pub fn art_path(&self) -> Option<&str> {
        match self {
            Self::Item(ItemInfo::Ammo { art_path, .. })
            | Self::Wall { art_path }
            | Self::Misc { art_path }
            | Self::Critter(CritterInfo { art_path, .. })
            | Self::Scenery(SceneryInfo { art_path, .. }) => Some(art_path.as_str()),
            Self::Item(_) => None,
        }
    }
}

fn art_path(lookup: &ProtoLookup, dir: &str, list: AssetList, frm_pid: u32) -> Result<String> {
    let stem = lookup.stem(list, (frm_pid & 0xffff) as usize)?;
    Ok(format!("{dir}{stem}"))
}

/// Decode the payload selected by `objtype`. Stub kinds fail before any read.
pub fn read_extra(
    reader: &mut BinaryReader,
    objtype: ObjectType,
    ctx: &DecodeContext,
    lookup: &ProtoLookup,
) -> Result<ExtraInfo> {
    match objtype {
        ObjectType::Item => read_item(reader, ctx, lookup).map(ExtraInfo::Item),
        ObjectType::Wall => Ok(ExtraInfo::Wall {
            art_path: art_path(lookup, "art/walls/", AssetList::Walls, ctx.frm_pid)?,
        }),
        ObjectType::Critter => read_critter(reader, ctx, lookup).map(ExtraInfo::Critter),
        ObjectType::Misc => {
            let art_path = art_path(lookup, "art/misc/", AssetList::Misc, ctx.frm_pid)?;
            // Misc protos 1 and 12 have no trailing words
            if !matches!(ctx.proto_pid & 0xffff, 1 | 12) {
                reader.skip_words(4)?;
            }
            Ok(ExtraInfo::Misc { art_path })
        }
        ObjectType::Scenery => read_scenery(reader, ctx, lookup).map(ExtraInfo::Scenery),
        ObjectType::Tile => Err(Error::UnsupportedStub { kind: StubKind::Tile }),
        ObjectType::Interface => Err(Error::UnsupportedStub { kind: StubKind::Interface }),
        ObjectType::Inventory => Err(Error::UnsupportedStub { kind: StubKind::Inventory }),
        ObjectType::Head => Err(Error::UnsupportedStub { kind: StubKind::Head }),
        ObjectType::Background => Err(Error::UnsupportedStub { kind: StubKind::Background }),
    }
}

fn read_item(reader: &mut BinaryReader, ctx: &DecodeContext, lookup: &ProtoLookup) -> Result<ItemInfo> {
    let subtype = lookup.subtype_of(ProtoKind::Item, ctx.proto_pid)?;
    let item_type = ItemType::from_u32(subtype).ok_or(Error::UnknownSubtype {
        kind: ProtoKind::Item,
        proto_pid: ctx.proto_pid,
        subtype,
    })?;

    Ok(match item_type {
        ItemType::Ammo => {
            let ammo_count = reader.read_u32_be()?;
            let art_path = art_path(lookup, "art/items/", AssetList::Walls, ctx.frm_pid)?;
            ItemInfo::Ammo { ammo_count, art_path }
        }
        ItemType::Weapon => {
            reader.skip_words(2)?;
            ItemInfo::Weapon
        }
        ItemType::Container => ItemInfo::Container,
        ItemType::Armor => ItemInfo::Armor,
        ItemType::Drug => ItemInfo::Drug,
        ItemType::Misc => {
            reader.skip_words(1)?;
            ItemInfo::Misc
        }
        ItemType::Key => {
            reader.skip_words(1)?;
            ItemInfo::Key
        }
    })
}

fn read_critter(reader: &mut BinaryReader, ctx: &DecodeContext, lookup: &ProtoLookup) -> Result<CritterInfo> {
    let art_path = strip_ext(&critter_art_path(ctx.frm_pid, lookup)?).to_string();
    reader.skip_words(4)?;
    let ai_num = reader.read_i32_be()?;
    let group_id = reader.read_u32_be()?;
    reader.skip_words(1)?;
    let hp = reader.read_u32_be()?;
    reader.skip_words(2)?;
    Ok(CritterInfo { art_path, ai_num, group_id, hp })
}

fn read_scenery(reader: &mut BinaryReader, ctx: &DecodeContext, lookup: &ProtoLookup) -> Result<SceneryInfo> {
    let art_path = art_path(lookup, "art/scenery/", AssetList::Scenery, ctx.frm_pid)?;
    let subtype = lookup.subtype_of(ProtoKind::Scenery, ctx.proto_pid)?;
    let scenery_type = SceneryType::from_u32(subtype).ok_or(Error::UnknownSubtype {
        kind: ProtoKind::Scenery,
        proto_pid: ctx.proto_pid,
        subtype,
    })?;

    let subtype = match scenery_type {
        SceneryType::Portal => {
            reader.skip_words(1)?;
            SceneryKind::Portal
        }
        SceneryType::Elevator => {
            reader.skip_words(2)?;
            SceneryKind::Elevator
        }
        SceneryType::Generic => SceneryKind::Generic,
        SceneryType::Stairs => return Err(Error::UnsupportedStub { kind: StubKind::Stairs }),
        SceneryType::LadderUp => return Err(Error::UnsupportedStub { kind: StubKind::LadderUp }),
        SceneryType::LadderDown => return Err(Error::UnsupportedStub { kind: StubKind::LadderDown }),
    };
    Ok(SceneryInfo { art_path, subtype })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryWriter;
    use crate::error::ErrorKind;

    fn lookup() -> ProtoLookup {
        ProtoLookup::new("data")
            .with_list(AssetList::Walls, ["wall0.frm", "wall1.frm", "shell.frm"])
            .with_list(AssetList::Misc, ["exitgrid.frm", "misc1.frm"])
            .with_list(AssetList::Scenery, ["tree.frm", "door.frm"])
            .with_list(AssetList::Critters, ["hmjmps,11,1"])
            .with_subtype(ProtoKind::Item, 0x0000_0010, 4)
            .with_subtype(ProtoKind::Item, 0x0000_0011, 3)
            .with_subtype(ProtoKind::Item, 0x0000_0012, 6)
            .with_subtype(ProtoKind::Item, 0x0000_0013, 1)
            .with_subtype(ProtoKind::Item, 0x0000_0014, 9)
            .with_subtype(ProtoKind::Item, 0x0000_0015, 5)
            .with_subtype(ProtoKind::Item, 0x0000_0016, 0)
            .with_subtype(ProtoKind::Item, 0x0000_0017, 2)
            .with_subtype(ProtoKind::Scenery, 0x0200_0001, 0)
            .with_subtype(ProtoKind::Scenery, 0x0200_0002, 2)
            .with_subtype(ProtoKind::Scenery, 0x0200_0003, 5)
            .with_subtype(ProtoKind::Scenery, 0x0200_0004, 1)
            .with_subtype(ProtoKind::Scenery, 0x0200_0005, 3)
            .with_subtype(ProtoKind::Scenery, 0x0200_0006, 4)
    }

    fn ctx(frm_pid: u32, proto_pid: u32) -> DecodeContext {
        DecodeContext { frm_pid, proto_pid, elevation: 0 }
    }

    fn decode(data: &[u8], objtype: ObjectType, ctx: DecodeContext) -> (Result<ExtraInfo>, usize) {
        let mut reader = BinaryReader::new(data);
        let result = read_extra(&mut reader, objtype, &ctx, &lookup());
        (result, reader.position())
    }

    #[test]
    fn test_ammo_uses_wall_list() {
        let mut writer = BinaryWriter::new();
        writer.write_u32_be(24);
        let data = writer.into_vec();

        let (extra, read) = decode(&data, ObjectType::Item, ctx(0x0400_0002, 0x10));
        assert_eq!(
            extra.unwrap(),
            ExtraInfo::Item(ItemInfo::Ammo { ammo_count: 24, art_path: "art/items/shell".into() })
        );
        assert_eq!(read, 4);
    }

    #[test]
    fn test_item_skip_widths() {
        let data = [0u8; 16];
        let (extra, read) = decode(&data, ObjectType::Item, ctx(0, 0x11));
        assert_eq!((extra.unwrap(), read), (ExtraInfo::Item(ItemInfo::Weapon), 8));

        let (extra, read) = decode(&data, ObjectType::Item, ctx(0, 0x12));
        assert_eq!((extra.unwrap(), read), (ExtraInfo::Item(ItemInfo::Key), 4));

        let (extra, read) = decode(&data, ObjectType::Item, ctx(0, 0x15));
        assert_eq!((extra.unwrap(), read), (ExtraInfo::Item(ItemInfo::Misc), 4));

        for (pid, info) in [(0x13, ItemInfo::Container), (0x16, ItemInfo::Armor), (0x17, ItemInfo::Drug)] {
            let (extra, read) = decode(&data, ObjectType::Item, ctx(0, pid));
            assert_eq!((extra.unwrap(), read), (ExtraInfo::Item(info), 0));
        }
    }

    #[test]
    fn test_unknown_item_subtype() {
        let (extra, _) = decode(&[], ObjectType::Item, ctx(0, 0x14));
        let err = extra.unwrap_err();
        assert!(matches!(err, Error::UnknownSubtype { subtype: 9, .. }));
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_wall_reads_nothing() {
        let (extra, read) = decode(&[], ObjectType::Wall, ctx(0x0300_0001, 0x0300_0001));
        assert_eq!(extra.unwrap().art_path(), Some("art/walls/wall1"));
        assert_eq!(read, 0);
    }

    #[test]
    fn test_critter_fields() {
        let mut writer = BinaryWriter::new();
        writer.write_zero_words(4);
        writer.write_i32_be(-1);
        writer.write_u32_be(3);
        writer.write_zero_words(1);
        writer.write_u32_be(55);
        writer.write_zero_words(2);
        let data = writer.into_vec();

        let (extra, read) = decode(&data, ObjectType::Critter, ctx(0x0100_0000, 0x0100_0001));
        assert_eq!(
            extra.unwrap(),
            ExtraInfo::Critter(CritterInfo {
                art_path: "art/critters/hmjmpsaa".into(),
                ai_num: -1,
                group_id: 3,
                hp: 55,
            })
        );
        assert_eq!(read, data.len());
    }

    #[test]
    fn test_misc_exit_grids_skip_nothing() {
        let data = [0u8; 16];
        for pid in [0x0500_0001, 0x0500_000c] {
            let (extra, read) = decode(&data, ObjectType::Misc, ctx(0x0500_0000, pid));
            assert_eq!(extra.unwrap().art_path(), Some("art/misc/exitgrid"));
            assert_eq!(read, 0);
        }
        let (_, read) = decode(&data, ObjectType::Misc, ctx(0x0500_0001, 0x0500_0002));
        assert_eq!(read, 16);
    }

    #[test]
    fn test_scenery_subtypes() {
        let data = [0u8; 8];
        let (extra, read) = decode(&data, ObjectType::Scenery, ctx(0x0200_0001, 0x0200_0001));
        assert_eq!(
            extra.unwrap(),
            ExtraInfo::Scenery(SceneryInfo { art_path: "art/scenery/door".into(), subtype: SceneryKind::Portal })
        );
        assert_eq!(read, 4);

        let (_, read) = decode(&data, ObjectType::Scenery, ctx(0, 0x0200_0002));
        assert_eq!(read, 8);
        let (_, read) = decode(&data, ObjectType::Scenery, ctx(0, 0x0200_0003));
        assert_eq!(read, 0);

        for (pid, kind) in [
            (0x0200_0004, StubKind::Stairs),
            (0x0200_0005, StubKind::LadderUp),
            (0x0200_0006, StubKind::LadderDown),
        ] {
            let (extra, read) = decode(&data, ObjectType::Scenery, ctx(0, pid));
            match extra {
                Err(Error::UnsupportedStub { kind: k }) => assert_eq!(k, kind),
                other => panic!("expected stub error, got {other:?}"),
            }
            assert_eq!(read, 0);
        }
    }

    #[test]
    fn test_stub_kinds_read_nothing() {
        let data = [0u8; 64];
        for (objtype, kind) in [
            (ObjectType::Tile, StubKind::Tile),
            (ObjectType::Interface, StubKind::Interface),
            (ObjectType::Inventory, StubKind::Inventory),
            (ObjectType::Head, StubKind::Head),
            (ObjectType::Background, StubKind::Background),
        ] {
            let (extra, read) = decode(&data, objtype, ctx(0, (objtype as u32) << 24));
            match extra {
                Err(Error::UnsupportedStub { kind: k }) => assert_eq!(k, kind),
                other => panic!("expected stub error, got {other:?}"),
            }
            assert_eq!(read, 0);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let extra = ExtraInfo::Item(ItemInfo::Ammo { ammo_count: 5, art_path: "art/items/shell".into() });
        let json = serde_json::to_value(&extra).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "item", "subtype": "ammo", "ammoCount": 5, "artPath": "art/items/shell"})
        );
    }
}
