use crate::Width;

/// Reflected CRC-32 (IEEE 802.3) polynomial.
pub const CRC32_POLYNOMIAL: u64 = 0xEDB8_8320;

/// Reflected CRC-32C (Castagnoli) polynomial.
pub const CRC32C_POLYNOMIAL: u64 = 0x82F6_3B78;

/// CRC polynomial selected by the instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CrcPolynomial {
    /// CRC-32.
    Crc32,
    /// CRC-32C.
    Crc32c,
}

impl CrcPolynomial {
    /// Reflected polynomial constant.
    #[must_use]
    pub const fn reflected(self) -> u64 {
        match self {
            Self::Crc32 => CRC32_POLYNOMIAL,
            Self::Crc32c => CRC32C_POLYNOMIAL,
        }
    }
}

/// Number of input bits folded by one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum CrcChunk {
    /// 8 bits.
    Byte,
    /// 16 bits.
    Halfword,
    /// 32 bits.
    Word,
    /// 64 bits.
    Doubleword,
}

impl CrcChunk {
    /// Chunk size in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Halfword => 16,
            Self::Word => 32,
            Self::Doubleword => 64,
        }
    }
}

/// Bit-serial reflected CRC update.
///
/// The whole register seeds the accumulator: for a register holding
/// `state ^ data`, bits above the chunk are the rest of the running state and
/// come out shifted into the result.
#[must_use]
pub const fn crc32(rs1: u64, chunk: CrcChunk, polynomial: CrcPolynomial, width: Width) -> u64 {
    let poly = polynomial.reflected();
    let mut x = width.truncate(rs1);
    let mut i = 0;

    while i < chunk.bits() {
        x = (x >> 1) ^ (poly & (x & 1).wrapping_neg());
        i += 1;
    }

    x
}

/// CRC-32 over the low byte.
#[must_use]
pub const fn crc32_b(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Byte, CrcPolynomial::Crc32, width)
}

/// CRC-32 over the low halfword.
#[must_use]
pub const fn crc32_h(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Halfword, CrcPolynomial::Crc32, width)
}

/// CRC-32 over the low word.
#[must_use]
pub const fn crc32_w(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Word, CrcPolynomial::Crc32, width)
}

/// CRC-32 over the doubleword.
#[must_use]
pub const fn crc32_d(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Doubleword, CrcPolynomial::Crc32, width)
}

/// CRC-32C over the low byte.
#[must_use]
pub const fn crc32c_b(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Byte, CrcPolynomial::Crc32c, width)
}

/// CRC-32C over the low halfword.
#[must_use]
pub const fn crc32c_h(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Halfword, CrcPolynomial::Crc32c, width)
}

/// CRC-32C over the low word.
#[must_use]
pub const fn crc32c_w(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Word, CrcPolynomial::Crc32c, width)
}

/// CRC-32C over the doubleword.
#[must_use]
pub const fn crc32c_d(rs1: u64, width: Width) -> u64 {
    crc32(rs1, CrcChunk::Doubleword, CrcPolynomial::Crc32c, width)
}

#[cfg(test)]
mod tests {
    use super::{crc32_b, crc32_d, crc32_w, crc32c_b, crc32c_d, crc32c_w};
    use crate::Width;

    #[test]
    fn zero_input_stays_zero() {
        assert_eq!(crc32_w(0, Width::W32), 0);
        assert_eq!(crc32c_w(0, Width::W64), 0);
    }

    #[test]
    fn single_byte_matches_standard_table_entry() {
        assert_eq!(crc32_b(1, Width::W64), 0x7707_3096);
        assert_eq!(crc32_b(0x80, Width::W64), 0xEDB8_8320);
        assert_eq!(crc32c_b(0x80, Width::W64), 0x82F6_3B78);
    }

    #[test]
    fn all_ones_word_matches_known_residues() {
        assert_eq!(crc32_w(0xFFFF_FFFF, Width::W32), 0xDEBB_20E3);
        assert_eq!(crc32c_w(0xFFFF_FFFF, Width::W32), 0xB798_B438);
    }

    #[test]
    fn all_ones_doubleword() {
        assert_eq!(crc32_d(u64::MAX, Width::W64), 0x4466_0075);
        assert_eq!(crc32c_d(u64::MAX, Width::W64), 0xC44F_F94D);
    }

    #[test]
    fn upper_state_bits_are_carried_into_the_result() {
        assert_eq!(crc32_b(0x1234_5601, Width::W32), 0x0012_3456 ^ 0x7707_3096);
    }
}
