//! Asset list and proto file lookups
//!
//! A [`ProtoLookup`] lives for one decode session. Asset lists are loaded
//! once up front; proto subtypes are read on demand from the small `.pro`
//! files (a big-endian u32 at offset 0x20) and memoized per proto pid.

use std::cell::RefCell;
use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use byteorder::{BigEndian, ReadBytesExt};
use tracing::trace;

use crate::codec::types::ProtoKind;
use crate::error::{Error, Result};

const SUBTYPE_OFFSET: u64 = 0x20;

/// Newline-delimited name lists under the data root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetList {
    ItemProtos,
    SceneryProtos,
    Walls,
    Critters,
    Misc,
    Scenery,
    Tiles,
}

impl AssetList {
    pub const ALL: [AssetList; 7] = [
        Self::ItemProtos,
        Self::SceneryProtos,
        Self::Walls,
        Self::Critters,
        Self::Misc,
        Self::Scenery,
        Self::Tiles,
    ];

    /// Path relative to the data root
    pub fn path(self) -> &'static str {
        match self {
            Self::ItemProtos => "proto/items/items.lst",
            Self::SceneryProtos => "proto/scenery/scenery.lst",
            Self::Walls => "art/walls/walls.lst",
            Self::Critters => "art/critters/critters.lst",
            Self::Misc => "art/misc/misc.lst",
            Self::Scenery => "art/scenery/scenery.lst",
            Self::Tiles => "art/tiles/tiles.lst",
        }
    }

    fn proto_kind(kind: ProtoKind) -> Self {
        match kind {
            ProtoKind::Item => Self::ItemProtos,
            ProtoKind::Scenery => Self::SceneryProtos,
        }
    }
}

impl std::fmt::Display for AssetList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Drop a trailing extension: `"wall.frm"` -> `"wall"`. Dots in directory
/// names and leading dots are left alone.
pub fn strip_ext(path: &str) -> &str {
    let name_start = path.rfind('/').map_or(0, |i| i + 1);
    match path[name_start..].rfind('.') {
        Some(0) | None => path,
        Some(dot) => &path[..name_start + dot],
    }
}

/// Parse list text into entries with trailing whitespace removed
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

pub fn load_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read(path).map_err(|source| Error::AssetFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_list(&String::from_utf8_lossy(&text)))
}

/// Read-only lookups shared by every object decode in a session
#[derive(Debug)]
pub struct ProtoLookup {
    root: PathBuf,
    lists: AHashMap<AssetList, Vec<String>>,
    subtypes: RefCell<AHashMap<(ProtoKind, u32), u32>>,
}

impl ProtoLookup {
    /// Load every asset list under `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let mut lookup = Self::new(root.clone());
        for list in AssetList::ALL {
            let entries = load_list(&root.join(list.path()))?;
            trace!(%list, entries = entries.len(), "loaded asset list");
            lookup.lists.insert(list, entries);
        }
        Ok(lookup)
    }

    /// Empty lookup rooted at `root`; lists are supplied with [`Self::with_list`]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            lists: AHashMap::new(),
            subtypes: RefCell::new(AHashMap::new()),
        }
    }

    pub fn with_list<S: Into<String>>(mut self, list: AssetList, entries: impl IntoIterator<Item = S>) -> Self {
        self.lists.insert(list, entries.into_iter().map(Into::into).collect());
        self
    }

    /// Pre-seed a subtype so no proto file is read for `proto_pid`
    pub fn with_subtype(self, kind: ProtoKind, proto_pid: u32, subtype: u32) -> Self {
        self.subtypes.borrow_mut().insert((kind, proto_pid), subtype);
        self
    }

    pub fn entry(&self, list: AssetList, index: usize) -> Result<&str> {
        self.lists
            .get(&list)
            .and_then(|entries| entries.get(index))
            .map(String::as_str)
            .ok_or(Error::MissingEntry { list, index })
    }

    /// List entry with its extension removed
    pub fn stem(&self, list: AssetList, index: usize) -> Result<&str> {
        self.entry(list, index).map(strip_ext)
    }

    /// Critter list entries are `name,flags...`; only the name is used
    pub fn critter_name(&self, index: usize) -> Result<&str> {
        let entry = self.entry(AssetList::Critters, index)?;
        Ok(entry.split(',').next().unwrap_or(entry))
    }

    /// Subtype stored in the proto file for `proto_pid`
    pub fn subtype_of(&self, kind: ProtoKind, proto_pid: u32) -> Result<u32> {
        if let Some(&subtype) = self.subtypes.borrow().get(&(kind, proto_pid)) {
            trace!(%kind, proto_pid, subtype, "subtype cache hit");
            return Ok(subtype);
        }

        let index = ((proto_pid & 0xffff) as usize)
            .checked_sub(1)
            .ok_or(Error::InvalidProtoIndex { kind, proto_pid })?;
        let file = self.entry(AssetList::proto_kind(kind), index)?;
        let path = self.root.join(kind.dir()).join(file);
        let subtype = read_subtype(&path)?;
        trace!(%kind, proto_pid, subtype, path = %path.display(), "subtype read");

        self.subtypes.borrow_mut().insert((kind, proto_pid), subtype);
        Ok(subtype)
    }
}

fn read_subtype(path: &Path) -> Result<u32> {
    let wrap = |source: std::io::Error| Error::ProtoFile { path: path.to_path_buf(), source };
    let mut file = File::open(path).map_err(wrap)?;
    file.seek(SeekFrom::Start(SUBTYPE_OFFSET)).map_err(wrap)?;
    file.read_u32::<BigEndian>().map_err(wrap)
}
