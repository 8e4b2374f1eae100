/// Operand width a kernel computes at.
///
/// `W64` is the native register width of an RV64 core; `W32` is both the
/// native width of an RV32 core and the forced width of the `*w` narrow
/// instruction forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum Width {
    /// 32-bit operands.
    W32,
    /// 64-bit operands.
    #[default]
    W64,
}

impl Width {
    /// Number of bits in an operand of this width.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Base-two logarithm of [`Self::bits`].
    #[must_use]
    pub const fn log2(self) -> u32 {
        match self {
            Self::W32 => 5,
            Self::W64 => 6,
        }
    }

    /// Mask selecting the operand bits of this width.
    #[must_use]
    pub const fn mask(self) -> u64 {
        match self {
            Self::W32 => 0xFFFF_FFFF,
            Self::W64 => u64::MAX,
        }
    }

    /// Drops every bit above this width.
    #[must_use]
    pub const fn truncate(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Maps a register width in bits to a supported width.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}
