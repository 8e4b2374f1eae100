//! Pseudo-instructions that alias a kernel with a fixed control immediate.

use crate::{Mnemonic, Width};

/// A pseudo-instruction resolved to its underlying instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PseudoExpansion {
    /// Instruction that implements the pseudo-instruction.
    pub mnemonic: Mnemonic,
    /// Control immediate passed as `rs2`.
    pub immediate: u64,
}

/// Recognized pseudo-instruction names.
pub const PSEUDO_NAMES: &[&str] = &["rev", "rev8", "rev.b", "orc.b", "zip", "unzip"];

/// Expands a pseudo-instruction for a core of the given native width.
#[must_use]
pub fn expand_pseudo(name: &str, native_width: Width) -> Option<PseudoExpansion> {
    let bits = u64::from(native_width.bits());
    let (mnemonic, immediate) = match name.trim().to_ascii_lowercase().as_str() {
        "rev" => (Mnemonic::Grev, bits - 1),
        "rev8" => (Mnemonic::Grev, bits - 8),
        "rev.b" | "rev_b" => (Mnemonic::Grev, 7),
        "orc.b" | "orc_b" => (Mnemonic::Gorc, 7),
        "zip" => (Mnemonic::Shfl, bits / 2 - 1),
        "unzip" => (Mnemonic::Unshfl, bits / 2 - 1),
        _ => return None,
    };

    Some(PseudoExpansion {
        mnemonic,
        immediate,
    })
}
