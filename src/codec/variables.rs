use super::BinaryReader;
use crate::error::{Error, Result};

/// Read `count` signed words; `field` names the header count for errors.
pub fn read_vars(reader: &mut BinaryReader, field: &'static str, count: i32) -> Result<Vec<i32>> {
    let count = usize::try_from(count).map_err(|_| Error::NegativeCount { field, value: count })?;
    let mut vars = Vec::with_capacity(count.min(reader.remaining() / 4));
    for _ in 0..count {
        vars.push(reader.read_i32_be()?);
    }
    Ok(vars)
}

/// Global then local variable arrays
pub fn read_var_sections(
    reader: &mut BinaryReader,
    num_global_vars: i32,
    num_local_vars: i32,
) -> Result<(Vec<i32>, Vec<i32>)> {
    let globals = read_vars(reader, "global variable", num_global_vars)?;
    let locals = read_vars(reader, "local variable", num_local_vars)?;
    Ok((globals, locals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryWriter;
    use crate::error::ErrorKind;

    #[test]
    fn test_globals_precede_locals() {
        let mut writer = BinaryWriter::new();
        for v in [1, -2, 3, 40, 50] {
            writer.write_i32_be(v);
        }
        let data = writer.into_vec();
        let mut reader = BinaryReader::new(&data);

        let (globals, locals) = read_var_sections(&mut reader, 3, 2).unwrap();
        assert_eq!(globals, vec![1, -2, 3]);
        assert_eq!(locals, vec![40, 50]);
    }

    #[test]
    fn test_exhausted_buffer() {
        let data = [0u8; 8];
        let mut reader = BinaryReader::new(&data);
        let err = read_vars(&mut reader, "global variable", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Truncated);
    }

    #[test]
    fn test_negative_count() {
        let mut reader = BinaryReader::new(&[]);
        let err = read_vars(&mut reader, "local variable", -1).unwrap_err();
        assert!(matches!(err, Error::NegativeCount { value: -1, .. }));
    }
}
