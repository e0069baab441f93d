use std::path::PathBuf;

use crate::codec::types::{ProtoKind, StubKind};
use crate::lookup::AssetList;

/// Unimplemented branch of the critter frmPid encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CritterRule {
    Reindex,
    Id1Overflow,
    Range26To2F,
    AtLeast30,
    AtLeast14,
    Id12,
    Id0D,
}

impl CritterRule {
    pub fn name(self) -> &'static str {
        match self {
            Self::Reindex => "reindex",
            Self::Id1Overflow => "id1 >= 0x0b",
            Self::Range26To2F => "id2 in 0x26..=0x2f",
            Self::AtLeast30 => "id2 >= 0x30",
            Self::AtLeast14 => "id2 >= 0x14",
            Self::Id12 => "id2 == 0x12",
            Self::Id0D => "id2 == 0x0d",
        }
    }
}

impl std::fmt::Display for CritterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    Integrity,
    Unsupported,
    Lookup,
    Truncated,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("map version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u32, actual: u32 },

    #[error("unsupported elevation level count {levels} (flags {flags:#x})")]
    UnsupportedLevelCount { levels: u32, flags: u32 },

    #[error("negative {field} count: {value}")]
    NegativeCount { field: &'static str, value: i32 },

    #[error("unknown object type {objtype} in proto pid {proto_pid:#010x}")]
    UnknownObjectType { proto_pid: u32, objtype: u8 },

    #[error("unknown {kind} subtype {subtype} for proto pid {proto_pid:#010x}")]
    UnknownSubtype { kind: ProtoKind, proto_pid: u32, subtype: u32 },

    #[error("script check failed: slot {slot} record {record}, matched {matched} < check {check}")]
    ScriptCheckFailed { slot: usize, record: usize, check: i32, matched: i32 },

    #[error("unsupported object kind: {kind}")]
    UnsupportedStub { kind: StubKind },

    #[error("unsupported critter frm pid {frm_pid:#010x}: {rule}")]
    UnsupportedCritterEncoding { frm_pid: u32, rule: CritterRule },

    #[error("inventory nesting exceeds {limit} levels")]
    InventoryTooDeep { limit: usize },

    #[error("failed to read asset list {path}: {source}")]
    AssetFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{list} has no entry {index}")]
    MissingEntry { list: AssetList, index: usize },

    #[error("failed to read proto file {path}: {source}")]
    ProtoFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("proto pid {proto_pid:#010x} has no {kind} proto index")]
    InvalidProtoIndex { kind: ProtoKind, proto_pid: u32 },

    #[error("unexpected end of data at offset {offset}: need {need} bytes, have {have}")]
    UnexpectedEof { need: usize, have: usize, offset: usize },

    #[error("object {index}: {source}")]
    Object {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("inventory slot {slot}: {source}")]
    Inventory {
        slot: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VersionMismatch { .. }
            | Self::UnsupportedLevelCount { .. }
            | Self::NegativeCount { .. }
            | Self::UnknownObjectType { .. }
            | Self::UnknownSubtype { .. } => ErrorKind::Format,
            Self::ScriptCheckFailed { .. } => ErrorKind::Integrity,
            Self::UnsupportedStub { .. }
            | Self::UnsupportedCritterEncoding { .. }
            | Self::InventoryTooDeep { .. } => ErrorKind::Unsupported,
            Self::AssetFile { .. }
            | Self::MissingEntry { .. }
            | Self::ProtoFile { .. }
            | Self::InvalidProtoIndex { .. } => ErrorKind::Lookup,
            Self::UnexpectedEof { .. } => ErrorKind::Truncated,
            Self::Object { source, .. } | Self::Inventory { source, .. } => source.kind(),
        }
    }

    /// Innermost error, skipping object/inventory context wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Self::Object { source, .. } | Self::Inventory { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
