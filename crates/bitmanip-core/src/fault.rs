use thiserror::Error;

use crate::Mnemonic;

/// Reasons the dispatch stage refuses to run a kernel.
///
/// Kernels themselves cannot fail; these are the typed signals an emulator
/// maps onto its illegal-instruction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DispatchFault {
    /// Instruction is only defined for a 64-bit native register width.
    #[error("`{mnemonic}` is only defined on 64-bit cores")]
    RequiresRv64 {
        /// Rejected instruction.
        mnemonic: Mnemonic,
    },
    /// Caller supplied the wrong number of source operands.
    #[error("`{mnemonic}` takes {expected} operands, {actual} supplied")]
    OperandCount {
        /// Rejected instruction.
        mnemonic: Mnemonic,
        /// Operand count the instruction reads.
        expected: usize,
        /// Operand count supplied.
        actual: usize,
    },
}

impl DispatchFault {
    /// Stable byte code for diagnostics.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::RequiresRv64 { .. } => 0x01,
            Self::OperandCount { .. } => 0x02,
        }
    }

    /// Instruction the fault was raised for.
    #[must_use]
    pub const fn mnemonic(self) -> Mnemonic {
        match self {
            Self::RequiresRv64 { mnemonic } | Self::OperandCount { mnemonic, .. } => mnemonic,
        }
    }
}

/// A name matched neither an instruction nor a pseudo-instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unknown bit-manipulation mnemonic `{name}`")]
pub struct UnknownMnemonic {
    /// Name as supplied by the caller.
    pub name: String,
}

/// Failure of a by-name execution request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ExecuteError {
    /// The name did not resolve.
    #[error(transparent)]
    Unknown(#[from] UnknownMnemonic),
    /// The instruction resolved but dispatch rejected it.
    #[error(transparent)]
    Dispatch(#[from] DispatchFault),
}
