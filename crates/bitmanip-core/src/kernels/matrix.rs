use super::shuffle::shfl;
use crate::Width;

/// Control value that makes one full shuffle a third of an 8x8 transpose.
const TRANSPOSE_SHUFFLE: u64 = 31;

#[derive(Clone, Copy)]
enum Reduce {
    Parity,
    Any,
}

/// Transposes `rs1` read as an 8x8 bit matrix, row `i` in byte `i`.
#[must_use]
pub const fn bmatflip(rs1: u64) -> u64 {
    let mut x = rs1;
    x = shfl(x, TRANSPOSE_SHUFFLE, Width::W64);
    x = shfl(x, TRANSPOSE_SHUFFLE, Width::W64);
    shfl(x, TRANSPOSE_SHUFFLE, Width::W64)
}

const fn boolean_product(rs1: u64, rs2: u64, reduce: Reduce) -> u64 {
    let columns = bmatflip(rs2);
    let mut x = 0;
    let mut i = 0u32;

    while i < 64 {
        let row = (rs1 >> ((i / 8) * 8)) & 0xFF;
        let column = (columns >> ((i % 8) * 8)) & 0xFF;
        let hit = match reduce {
            Reduce::Parity => (row & column).count_ones() & 1 == 1,
            Reduce::Any => row & column != 0,
        };
        if hit {
            x |= 1u64 << i;
        }
        i += 1;
    }

    x
}

/// 8x8 boolean matrix product with XOR accumulation.
#[must_use]
pub const fn bmatxor(rs1: u64, rs2: u64) -> u64 {
    boolean_product(rs1, rs2, Reduce::Parity)
}

/// 8x8 boolean matrix product with OR accumulation.
#[must_use]
pub const fn bmator(rs1: u64, rs2: u64) -> u64 {
    boolean_product(rs1, rs2, Reduce::Any)
}

#[cfg(test)]
mod tests {
    use super::{bmatflip, bmator, bmatxor};

    const IDENTITY: u64 = 0x8040_2010_0804_0201;

    #[test]
    fn transpose_moves_first_row_into_first_column() {
        assert_eq!(bmatflip(0xFF), 0x0101_0101_0101_0101);
        assert_eq!(bmatflip(IDENTITY), IDENTITY);
        assert_eq!(bmatflip(0x0123_4567_89AB_CDEF), 0x0F33_5500_0F33_55FF);
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let a = 0x0123_4567_89AB_CDEF;
        assert_eq!(bmatxor(a, IDENTITY), a);
        assert_eq!(bmatxor(IDENTITY, a), a);
        assert_eq!(bmator(a, IDENTITY), a);
        assert_eq!(bmator(IDENTITY, a), a);
    }

    #[test]
    fn parity_and_or_variants_differ_on_even_overlap() {
        let m = 0x0303;
        assert_eq!(bmatxor(m, m), 0);
        assert_eq!(bmator(m, m), 0x0303);
    }
}
