//! Bit-manipulation instruction kernels for an RV emulator execute stage.
//!
//! The emulator decodes an instruction, reads its source registers, and hands
//! the values to [`execute`] (or a [`BitmanipUnit`]) together with the
//! mnemonic. The returned value is written to the destination register. The
//! kernels in [`kernels`] are pure and total; the only failures come from
//! dispatch, for instructions the configured core width does not define.

/// Operand width model.
pub mod width;
pub use width::Width;

/// Read-only butterfly and shuffle mask tables.
pub mod tables;
pub use tables::{
    ShuffleStage, ADJACENT_MASKS, SHUFFLE_CONTROL_MASK_32, SHUFFLE_CONTROL_MASK_64,
    SHUFFLE_STAGES,
};

/// Pure per-family instruction kernels.
pub mod kernels;

/// Mnemonic catalog and assembler name table.
pub mod catalog;
pub use catalog::{Mnemonic, MNEMONIC_TABLE};

/// Pseudo-instruction expansion.
pub mod pseudo;
pub use pseudo::{expand_pseudo, PseudoExpansion, PSEUDO_NAMES};

/// Dispatch fault taxonomy and lookup errors.
pub mod fault;
pub use fault::{DispatchFault, ExecuteError, UnknownMnemonic};

/// Instruction dispatch stage.
pub mod execute;
pub use execute::{effective_width, execute, execute_slice, Operands};

/// Host-facing execution unit, configuration and trace hooks.
pub mod api;
pub use api::{BitmanipUnit, TraceEvent, TraceSink, UnitConfig};

#[cfg(test)]
use proptest as _;
