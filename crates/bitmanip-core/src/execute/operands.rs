use crate::{DispatchFault, Mnemonic};

/// Source register values handed over by the emulator.
///
/// Operands an instruction does not read are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Operands {
    /// First source register.
    pub rs1: u64,
    /// Second source register or control immediate.
    pub rs2: u64,
    /// Third source register.
    pub rs3: u64,
}

impl Operands {
    /// Operands for a single-source instruction.
    #[must_use]
    pub const fn unary(rs1: u64) -> Self {
        Self {
            rs1,
            rs2: 0,
            rs3: 0,
        }
    }

    /// Operands for a two-source instruction.
    #[must_use]
    pub const fn binary(rs1: u64, rs2: u64) -> Self {
        Self { rs1, rs2, rs3: 0 }
    }

    /// Operands for a three-source instruction.
    #[must_use]
    pub const fn ternary(rs1: u64, rs2: u64, rs3: u64) -> Self {
        Self { rs1, rs2, rs3 }
    }

    /// Builds operands from exactly as many values as `mnemonic` reads.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchFault::OperandCount`] when `values` has the wrong
    /// length.
    pub fn from_slice(mnemonic: Mnemonic, values: &[u64]) -> Result<Self, DispatchFault> {
        match (mnemonic.arity(), values) {
            (1, &[rs1]) => Ok(Self::unary(rs1)),
            (2, &[rs1, rs2]) => Ok(Self::binary(rs1, rs2)),
            (3, &[rs1, rs2, rs3]) => Ok(Self::ternary(rs1, rs2, rs3)),
            (expected, _) => Err(DispatchFault::OperandCount {
                mnemonic,
                expected,
                actual: values.len(),
            }),
        }
    }
}
