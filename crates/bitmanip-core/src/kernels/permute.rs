use crate::tables::ADJACENT_MASKS;
use crate::Width;

#[derive(Clone, Copy)]
enum Merge {
    Swap,
    Or,
}

const fn swap_adjacent(x: u64, mask: u64, shift: u32) -> u64 {
    ((x & mask) << shift) | ((x & !mask) >> shift)
}

/// Runs the butterfly network over `rs1`, enabling stage `s` when bit
/// `log2(s)` of `rs2` is set. Stages stop below the operand width, which masks
/// the control value to `width - 1`.
const fn butterfly(rs1: u64, rs2: u64, width: Width, merge: Merge) -> u64 {
    let bits = width.bits();
    let mut x = width.truncate(rs1);
    let mut stage = 0;
    let mut shift = 1u32;

    while shift < bits {
        if rs2 & shift as u64 != 0 {
            let swapped = swap_adjacent(x, ADJACENT_MASKS[stage], shift);
            x = match merge {
                Merge::Swap => swapped,
                Merge::Or => x | swapped,
            };
        }
        stage += 1;
        shift <<= 1;
    }

    width.truncate(x)
}

/// Generalized bit-reverse: bit `i` of the result is bit
/// `i ^ (rs2 & (width - 1))` of `rs1`.
#[must_use]
pub const fn grev(rs1: u64, rs2: u64, width: Width) -> u64 {
    butterfly(rs1, rs2, width, Merge::Swap)
}

/// Generalized OR-combine: ORs `rs1` with its partial reversals, accumulating
/// across every enabled stage.
#[must_use]
pub const fn gorc(rs1: u64, rs2: u64, width: Width) -> u64 {
    butterfly(rs1, rs2, width, Merge::Or)
}
