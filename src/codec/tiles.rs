use serde::Serialize;

use super::BinaryReader;
use crate::error::Result;

/// Tiles per elevation, a fixed 100x100 grid
pub const TILE_COUNT: usize = 10_000;
pub const GRID_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tile {
    pub roof: u16,
    pub floor: u16,
}

/// Read the single-elevation tile grid. Map size fields are not consulted.
pub fn read_tiles(reader: &mut BinaryReader) -> Result<Vec<Tile>> {
    let mut tiles = Vec::with_capacity(TILE_COUNT);
    for _ in 0..TILE_COUNT {
        tiles.push(Tile {
            roof: reader.read_u16_be()?,
            floor: reader.read_u16_be()?,
        });
    }
    Ok(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryWriter;
    use crate::error::ErrorKind;

    #[test]
    fn test_read_full_grid() {
        let mut writer = BinaryWriter::new();
        for i in 0..TILE_COUNT as u16 {
            writer.write_u16_be(i);
            writer.write_u16_be(i.wrapping_mul(3));
        }
        writer.write_u32_be(0xAABBCCDD);
        let data = writer.into_vec();
        let mut reader = BinaryReader::new(&data);

        let tiles = read_tiles(&mut reader).unwrap();
        assert_eq!(tiles.len(), TILE_COUNT);
        assert_eq!(tiles[9999], Tile { roof: 9999, floor: 9999u16.wrapping_mul(3) });
        // Trailing data is left for the next section
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn test_short_grid_is_truncation() {
        let data = vec![0u8; TILE_COUNT * 4 - 2];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(read_tiles(&mut reader).unwrap_err().kind(), ErrorKind::Truncated);
    }
}
