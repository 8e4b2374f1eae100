use crate::Width;

/// Bit-field place.
///
/// The upper half of `rs2` is a control word: bits `[0, log2(width))` hold
/// the field offset, and the bits from 8 up hold the field length modulo
/// `width / 2`, where 0 stands for `width / 2`. A control word whose bits
/// 30..31 read `0b10` carries its fields 16 bits higher. The field data is
/// the low bits of `rs2`, placed at the offset into `rs1`.
#[must_use]
pub const fn bfp(rs1: u64, rs2: u64, width: Width) -> u64 {
    let bits = width.bits();
    let half = bits / 2;
    let rs1 = width.truncate(rs1);
    let rs2 = width.truncate(rs2);

    let mut control = rs2 >> half;
    if (control >> 30) == 2 {
        control >>= 16;
    }

    let len = match (control >> 8) & (half as u64 - 1) {
        0 => half,
        // Bounded by `half - 1`.
        n => n as u32,
    };
    let offset = (control & (bits as u64 - 1)) as u32;

    let mask = width.truncate(((1u64 << len) - 1) << offset);
    let data = rs2 << offset;

    (data & mask) | (rs1 & !mask)
}

/// Builds the control half of a [`bfp`] `rs2` operand for a field of `len`
/// bits at `offset`, already shifted into the upper half. The field data is
/// ORed into the low half by the caller.
#[must_use]
pub const fn pack_field_control(offset: u32, len: u32, width: Width) -> u64 {
    let bits = width.bits();
    let half = bits / 2;
    let len = if len == half { 0 } else { len & (half - 1) };
    let offset = offset & (bits - 1);

    width.truncate((((len as u64) << 8) | offset as u64) << half)
}
