//! Critter art path reconstruction
//!
//! A critter frmPid packs:
//!   bits 0..12   index into critters.lst
//!   bits 12..16  weapon code (id1)
//!   bits 16..24  animation code (id2)
//!   bits 28..31  rotation (id3), 0 meaning the combined `.frm`
//!
//! Several animation code ranges need a reindex table or suffix tables that
//! are not implemented; those are reported, never guessed.

use tracing::trace;

use crate::error::{CritterRule, Error, Result};
use crate::lookup::ProtoLookup;

pub const CRITTER_ART_DIR: &str = "art/critters/";

const REINDEXED: [u32; 8] = [0x1b, 0x1d, 0x1e, 0x37, 0x39, 0x3a, 0x21, 0x40];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CritterFrm {
    pub index: usize,
    pub id1: u32,
    pub id2: u32,
    pub id3: u32,
}

impl CritterFrm {
    pub fn unpack(frm_pid: u32) -> Self {
        Self {
            index: (frm_pid & 0xfff) as usize,
            id1: (frm_pid >> 12) & 0xf,
            id2: (frm_pid >> 16) & 0xff,
            id3: (frm_pid >> 28) & 0x7,
        }
    }

    /// First unimplemented rule this encoding falls under, if any
    pub fn unsupported_rule(&self) -> Option<CritterRule> {
        let id2 = self.id2;
        if REINDEXED.contains(&id2) {
            Some(CritterRule::Reindex)
        } else if self.id1 >= 0x0b {
            Some(CritterRule::Id1Overflow)
        } else if (0x26..=0x2f).contains(&id2) {
            Some(CritterRule::Range26To2F)
        } else if id2 >= 0x30 {
            Some(CritterRule::AtLeast30)
        } else if id2 >= 0x14 && id2 != 0x24 && id2 != 0x25 {
            Some(CritterRule::AtLeast14)
        } else if id2 == 0x12 {
            Some(CritterRule::Id12)
        } else if id2 == 0x0d {
            Some(CritterRule::Id0D)
        } else {
            None
        }
    }

    /// Two-letter animation suffix plus the `.frm`/`.frN` extension
    fn suffix(&self) -> String {
        let mut suffix = String::with_capacity(6);
        match self.id2 {
            0x24 => suffix.push_str("ch"),
            0x25 => suffix.push_str("cj"),
            id2 => {
                if id2 <= 1 && self.id1 > 0 {
                    trace!(id1 = self.id1, "weapon code prefix");
                    suffix.push(offset_char(b'c', self.id1));
                } else {
                    suffix.push('a');
                }
                suffix.push(offset_char(b'a', id2));
            }
        }
        suffix.push_str(".fr");
        if self.id3 == 0 {
            suffix.push('m');
        } else {
            suffix.push_str(&(self.id3 - 1).to_string());
        }
        suffix
    }
}

/// `base + n` as a char; callers only pass n below 0x14
fn offset_char(base: u8, n: u32) -> char {
    char::from(base + n as u8)
}

/// Full critter art path, extension included, e.g. `art/critters/hmjmpsaa.frm`
pub fn critter_art_path(frm_pid: u32, lookup: &ProtoLookup) -> Result<String> {
    let frm = CritterFrm::unpack(frm_pid);
    if let Some(rule) = frm.unsupported_rule() {
        return Err(Error::UnsupportedCritterEncoding { frm_pid, rule });
    }

    let name = crate::lookup::strip_ext(lookup.critter_name(frm.index)?);
    Ok(format!("{CRITTER_ART_DIR}{name}{}", frm.suffix()))
}
