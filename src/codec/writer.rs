//! Big-endian byte builder for synthesizing map fixtures in tests

/// Binary writer mirroring [`super::BinaryReader`]
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u16_be(&mut self, v: u16) {
        self.data.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_u32_be(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_i32_be(&mut self, v: i32) {
        self.write_u32_be(v as u32);
    }

    /// Write `n` zeroed 32-bit words
    pub fn write_zero_words(&mut self, n: usize) {
        self.data.resize(self.data.len() + n * 4, 0);
    }

    pub fn write_fixed_string(&mut self, s: &str, width: usize) {
        let mut bytes = s.as_bytes().to_vec();
        bytes.resize(width, 0);
        self.write_bytes(&bytes);
    }
}

impl Default for BinaryWriter {
    fn default() -> Self {
        Self::new()
    }
}
