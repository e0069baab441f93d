//! Script table integrity check
//!
//! The table has one section per script type slot. Each section is a count
//! followed by the records padded up to a multiple of 16. Every record is a
//! packed pid plus a body of 15 words (17 for critter pids, 16 for scenery).
//! After each batch of 16 records come a check value and one unknown word;
//! the check must not exceed the number of records so far whose pid type
//! equals the slot. The match count runs across batches of a slot.

use tracing::debug;

use super::types::ObjectType;
use super::BinaryReader;
use crate::error::{Error, Result};

pub const SCRIPT_SLOTS: usize = 5;
const BATCH: usize = 16;
const BODY_WORDS: usize = 15;

fn body_words(tag: u8) -> usize {
    match ObjectType::from_u8(tag) {
        Some(ObjectType::Critter) => BODY_WORDS + 2,
        Some(ObjectType::Scenery) => BODY_WORDS + 1,
        _ => BODY_WORDS,
    }
}

/// Round up to the next whole batch of 16
fn padded_count(count: usize) -> usize {
    count.div_ceil(BATCH) * BATCH
}

/// Walk and verify the script table. Returns the sum of the slot counts.
pub fn validate_scripts(reader: &mut BinaryReader) -> Result<i64> {
    let mut total: i64 = 0;

    for slot in 0..SCRIPT_SLOTS {
        let count = reader.read_i32_be()?;
        debug!(slot, count, offset = reader.position(), "script slot");
        total += i64::from(count);

        let Ok(count) = usize::try_from(count) else {
            continue;
        };

        let mut matched: i32 = 0;
        for record in 0..padded_count(count) {
            let pid = reader.read_u32_be()?;
            let tag = ObjectType::tag_of(pid);
            if usize::from(tag) == slot {
                matched += 1;
            }
            reader.skip_words(body_words(tag))?;

            if record % BATCH == BATCH - 1 {
                let check = reader.read_i32_be()?;
                reader.skip_words(1)?;
                if matched < check {
                    return Err(Error::ScriptCheckFailed { slot, record, check, matched });
                }
            }
        }
    }

    Ok(total)
}
