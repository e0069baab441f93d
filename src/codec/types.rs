use serde::Serialize;

/// Object type, the high byte of a proto pid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ObjectType {
    Item = 0,
    Critter = 1,
    Scenery = 2,
    Wall = 3,
    Tile = 4,
    Misc = 5,
    Interface = 6,
    Inventory = 7,
    Head = 8,
    Background = 9,
}

impl ObjectType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Item),
            1 => Some(Self::Critter),
            2 => Some(Self::Scenery),
            3 => Some(Self::Wall),
            4 => Some(Self::Tile),
            5 => Some(Self::Misc),
            6 => Some(Self::Interface),
            7 => Some(Self::Inventory),
            8 => Some(Self::Head),
            9 => Some(Self::Background),
            _ => None,
        }
    }

    /// Type tag carried in bits 24..32 of a packed pid
    pub fn tag_of(pid: u32) -> u8 {
        (pid >> 24) as u8
    }
}

/// Item subtype read from `proto/items/*.pro`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ItemType {
    Armor = 0,
    Container = 1,
    Drug = 2,
    Weapon = 3,
    Ammo = 4,
    Misc = 5,
    Key = 6,
}

impl ItemType {
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Armor),
            1 => Some(Self::Container),
            2 => Some(Self::Drug),
            3 => Some(Self::Weapon),
            4 => Some(Self::Ammo),
            5 => Some(Self::Misc),
            6 => Some(Self::Key),
            _ => None,
        }
    }
}

/// Scenery subtype read from `proto/scenery/*.pro`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum SceneryType {
    Portal = 0,
    Stairs = 1,
    Elevator = 2,
    LadderUp = 3,
    LadderDown = 4,
    Generic = 5,
}

impl SceneryType {
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Portal),
            1 => Some(Self::Stairs),
            2 => Some(Self::Elevator),
            3 => Some(Self::LadderUp),
            4 => Some(Self::LadderDown),
            5 => Some(Self::Generic),
            _ => None,
        }
    }
}

/// Object layouts that are known to exist but are not decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StubKind {
    Tile,
    Interface,
    Inventory,
    Head,
    Background,
    Stairs,
    LadderUp,
    LadderDown,
}

impl StubKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Tile => "tile",
            Self::Interface => "interface",
            Self::Inventory => "inventory",
            Self::Head => "head",
            Self::Background => "background",
            Self::Stairs => "stairs",
            Self::LadderUp => "ladderup",
            Self::LadderDown => "ladderdown",
        }
    }
}

impl std::fmt::Display for StubKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which proto directory a subtype lookup goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtoKind {
    Item,
    Scenery,
}

impl ProtoKind {
    pub fn dir(self) -> &'static str {
        match self {
            Self::Item => "proto/items",
            Self::Scenery => "proto/scenery",
        }
    }
}

impl std::fmt::Display for ProtoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Item => "item",
            Self::Scenery => "scenery",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_tag() {
        assert_eq!(ObjectType::tag_of(0x0100_002a), 1);
        assert_eq!(ObjectType::from_u8(ObjectType::tag_of(0x0500_000c)), Some(ObjectType::Misc));
        assert_eq!(ObjectType::from_u8(10), None);
    }

    #[test]
    fn test_subtype_ranges() {
        assert_eq!(ItemType::from_u32(4), Some(ItemType::Ammo));
        assert_eq!(ItemType::from_u32(7), None);
        assert_eq!(SceneryType::from_u32(5), Some(SceneryType::Generic));
        assert_eq!(SceneryType::from_u32(6), None);
    }
}
