use crate::Width;

/// Gathers the bits of `rs1` selected by the mask `rs2` and packs them,
/// in order, at the low end of the result.
#[must_use]
pub const fn bcompress(rs1: u64, rs2: u64, width: Width) -> u64 {
    let bits = width.bits();
    let mut r = 0;
    let mut i = 0u32;
    let mut j = 0u32;

    while i < bits {
        if (rs2 >> i) & 1 != 0 {
            if (rs1 >> i) & 1 != 0 {
                r |= 1u64 << j;
            }
            j += 1;
        }
        i += 1;
    }

    r
}

/// Scatters the low bits of `rs1`, in order, into the positions set in the
/// mask `rs2`. Inverse of [`bcompress`] on the masked bits.
#[must_use]
pub const fn bdecompress(rs1: u64, rs2: u64, width: Width) -> u64 {
    let bits = width.bits();
    let mut r = 0;
    let mut i = 0u32;
    let mut j = 0u32;

    while i < bits {
        if (rs2 >> i) & 1 != 0 {
            if (rs1 >> j) & 1 != 0 {
                r |= 1u64 << i;
            }
            j += 1;
        }
        i += 1;
    }

    r
}
