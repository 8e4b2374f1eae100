use crate::Width;

/// Funnel shift left: shifts the double-width concatenation `rs1:rs3` left by
/// `rs2 mod 2 * width` and returns the upper `width` bits.
#[must_use]
pub const fn fsl(rs1: u64, rs2: u64, rs3: u64, width: Width) -> u64 {
    match width {
        Width::W64 => {
            let mut shamt = (rs2 & 127) as u32;
            let (mut a, mut b) = (rs1, rs3);
            if shamt >= 64 {
                shamt -= 64;
                a = rs3;
                b = rs1;
            }
            if shamt == 0 {
                a
            } else {
                (a << shamt) | (b >> (64 - shamt))
            }
        }
        Width::W32 => {
            let mut shamt = (rs2 & 63) as u32;
            let (mut a, mut b) = (rs1, rs3);
            if shamt >= 32 {
                shamt -= 32;
                a = rs3;
                b = rs1;
            }
            // The incoming operand is masked explicitly; its upper word must
            // never leak into the shifted-in bits.
            if shamt == 0 {
                a & 0xFFFF_FFFF
            } else {
                ((a << shamt) | ((b & 0xFFFF_FFFF) >> (32 - shamt))) & 0xFFFF_FFFF
            }
        }
    }
}

/// Funnel shift right, expressed as a left funnel shift by the negated amount.
#[must_use]
pub const fn fsr(rs1: u64, rs2: u64, rs3: u64, width: Width) -> u64 {
    fsl(rs1, rs2.wrapping_neg(), rs3, width)
}
