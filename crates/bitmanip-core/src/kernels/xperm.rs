use crate::Width;

/// Group granularity of a crossbar permutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum XpermGroup {
    /// 4-bit groups.
    Nibble,
    /// 8-bit groups.
    Byte,
    /// 16-bit groups.
    Halfword,
    /// 32-bit groups.
    Word,
}

impl XpermGroup {
    /// Base-two logarithm of the group size in bits.
    #[must_use]
    pub const fn size_log2(self) -> u32 {
        match self {
            Self::Nibble => 2,
            Self::Byte => 3,
            Self::Halfword => 4,
            Self::Word => 5,
        }
    }
}

/// Crossbar permutation: each group of `rs2` indexes a group of `rs1`, and
/// indices past the operand width select zero.
#[must_use]
pub const fn xperm(rs1: u64, rs2: u64, group: XpermGroup, width: Width) -> u64 {
    let bits = width.bits();
    let sz_log2 = group.size_log2();
    let sz = 1u32 << sz_log2;
    let mask = (1u64 << sz) - 1;
    let rs1 = width.truncate(rs1);
    let rs2 = width.truncate(rs2);
    let mut r = 0;
    let mut i = 0;

    while i < bits {
        let pos = ((rs2 >> i) & mask) << sz_log2;
        if pos < bits as u64 {
            r |= ((rs1 >> pos) & mask) << i;
        }
        i += sz;
    }

    r
}

/// Nibble crossbar permutation.
#[must_use]
pub const fn xperm_n(rs1: u64, rs2: u64, width: Width) -> u64 {
    xperm(rs1, rs2, XpermGroup::Nibble, width)
}

/// Byte crossbar permutation.
#[must_use]
pub const fn xperm_b(rs1: u64, rs2: u64, width: Width) -> u64 {
    xperm(rs1, rs2, XpermGroup::Byte, width)
}

/// Halfword crossbar permutation.
#[must_use]
pub const fn xperm_h(rs1: u64, rs2: u64, width: Width) -> u64 {
    xperm(rs1, rs2, XpermGroup::Halfword, width)
}

/// Word crossbar permutation.
#[must_use]
pub const fn xperm_w(rs1: u64, rs2: u64, width: Width) -> u64 {
    xperm(rs1, rs2, XpermGroup::Word, width)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{xperm_b, xperm_h, xperm_n, xperm_w};
    use crate::Width;

    #[test]
    fn identity_nibble_table_returns_indices() {
        assert_eq!(
            xperm_n(0xFEDC_BA98_7654_3210, 0x0123_4567_89AB_CDEF, Width::W64),
            0x0123_4567_89AB_CDEF
        );
        assert_eq!(xperm_n(0x7654_3210, 0x0123_4567, Width::W32), 0x0123_4567);
    }

    #[rstest]
    #[case(0x0001_0203, 0x1122_3344)]
    #[case(0x0000_0000, 0x1111_1111)]
    #[case(0x00FF_0004, 0x1100_1100)]
    fn byte_gather_zeroes_out_of_range_indices(#[case] rs2: u64, #[case] expected: u64) {
        assert_eq!(xperm_b(0x4433_2211, rs2, Width::W32), expected);
    }

    #[test]
    fn halfword_and_word_swaps() {
        assert_eq!(
            xperm_h(0x4444_3333_2222_1111, 0x0000_0001_0002_0003, Width::W64),
            0x1111_2222_3333_4444
        );
        assert_eq!(
            xperm_w(0x2222_2222_1111_1111, 0x0000_0000_0000_0001, Width::W64),
            0x1111_1111_2222_2222
        );
    }
}
