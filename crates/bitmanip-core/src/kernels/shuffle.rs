use crate::tables::{SHUFFLE_CONTROL_MASK_32, SHUFFLE_CONTROL_MASK_64, SHUFFLE_STAGES};
use crate::Width;

const fn control_mask(width: Width) -> u64 {
    match width {
        Width::W64 => SHUFFLE_CONTROL_MASK_64,
        Width::W32 => SHUFFLE_CONTROL_MASK_32,
    }
}

/// Perfect shuffle: interleaves the halves of each block selected by the
/// control bits of `rs2`, widest block first.
#[must_use]
pub const fn shfl(rs1: u64, rs2: u64, width: Width) -> u64 {
    let control = rs2 & control_mask(width);
    let mut x = width.truncate(rs1);
    let mut i = 0;

    while i < SHUFFLE_STAGES.len() {
        if SHUFFLE_STAGES[i].enabled(control) {
            x = SHUFFLE_STAGES[i].apply(x);
        }
        i += 1;
    }

    width.truncate(x)
}

/// Inverse perfect shuffle: the stages of [`shfl`] applied narrowest first.
#[must_use]
pub const fn unshfl(rs1: u64, rs2: u64, width: Width) -> u64 {
    let control = rs2 & control_mask(width);
    let mut x = width.truncate(rs1);
    let mut i = SHUFFLE_STAGES.len();

    while i > 0 {
        i -= 1;
        if SHUFFLE_STAGES[i].enabled(control) {
            x = SHUFFLE_STAGES[i].apply(x);
        }
    }

    width.truncate(x)
}
