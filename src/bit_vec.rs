use std::fmt;

/// Packed sequence of bits, most significant bit of each byte first.
///
/// Serves both as a single code word and as an encoded stream.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bit_count
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8;
        let bit_offset = self.bit_count % 8;

        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    /// Append every bit of `other`.
    pub fn push_bits(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (7 - index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.bits[i / 8] & (1 << (7 - i % 8)) != 0)
    }

    /// True when `prefix` is a (not necessarily proper) prefix of `self`.
    pub fn starts_with(&self, prefix: &BitVec) -> bool {
        prefix.len() <= self.len() && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }
}

impl From<(usize, Vec<u8>)> for BitVec {
    fn from((bit_count, mut bits): (usize, Vec<u8>)) -> Self {
        bits.resize(bit_count.div_ceil(8), 0);
        // clear padding so equality only depends on the first bit_count bits
        if bit_count % 8 != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xFFu8 << (8 - bit_count % 8);
            }
        }
        BitVec { bits, bit_count }
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bit_vec = BitVec::new();
        for bit in iter {
            bit_vec.push_bit(bit);
        }
        bit_vec
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
