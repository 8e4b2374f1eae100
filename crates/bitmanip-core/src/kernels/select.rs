/// Conditional move: `rs1` when `rs2` is nonzero, otherwise `rs3`.
#[must_use]
pub const fn cmov(rs1: u64, rs2: u64, rs3: u64) -> u64 {
    if rs2 != 0 {
        rs1
    } else {
        rs3
    }
}

#[cfg(test)]
mod tests {
    use super::cmov;

    #[test]
    fn any_nonzero_condition_selects_first_operand() {
        assert_eq!(cmov(1, 1, 2), 1);
        assert_eq!(cmov(1, u64::MAX, 2), 1);
        assert_eq!(cmov(1, 1 << 63, 2), 1);
        assert_eq!(cmov(1, 0, 2), 2);
    }
}
