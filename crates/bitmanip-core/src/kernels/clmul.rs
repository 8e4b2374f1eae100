use crate::Width;

/// Which slice of the double-width carry-less product a multiply returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ClmulHalf {
    /// Product bits `[0, width)`.
    Low,
    /// Product bits `[width, 2 * width - 1)`.
    High,
    /// Product bits `[width - 1, 2 * width - 1)`; the bit-reversed product of
    /// the bit-reversed operands.
    Reversed,
}

impl ClmulHalf {
    const fn first_bit(self) -> u32 {
        match self {
            Self::High => 1,
            Self::Low | Self::Reversed => 0,
        }
    }

    /// Partial product contributed by bit `i` of the multiplier.
    const fn partial(self, rs1: u64, i: u32, bits: u32) -> u64 {
        match self {
            Self::Low => rs1 << i,
            Self::High => rs1 >> (bits - i),
            Self::Reversed => rs1 >> (bits - i - 1),
        }
    }
}

/// Multiplies `rs1` by `rs2` as polynomials over GF(2) and returns the
/// requested slice of the product without materializing it.
#[must_use]
pub const fn carryless_multiply(rs1: u64, rs2: u64, width: Width, half: ClmulHalf) -> u64 {
    let bits = width.bits();
    let rs1 = width.truncate(rs1);
    let rs2 = width.truncate(rs2);
    let mut x = 0;
    let mut i = half.first_bit();

    while i < bits {
        if (rs2 >> i) & 1 != 0 {
            x ^= half.partial(rs1, i, bits);
        }
        i += 1;
    }

    width.truncate(x)
}

/// Low half of the carry-less product.
#[must_use]
pub const fn clmul(rs1: u64, rs2: u64, width: Width) -> u64 {
    carryless_multiply(rs1, rs2, width, ClmulHalf::Low)
}

/// High half of the carry-less product.
#[must_use]
pub const fn clmulh(rs1: u64, rs2: u64, width: Width) -> u64 {
    carryless_multiply(rs1, rs2, width, ClmulHalf::High)
}

/// Reversed carry-less product.
#[must_use]
pub const fn clmulr(rs1: u64, rs2: u64, width: Width) -> u64 {
    carryless_multiply(rs1, rs2, width, ClmulHalf::Reversed)
}
