use std::fmt;
use std::str::FromStr;

use crate::fault::UnknownMnemonic;

/// Bit-manipulation instructions served by the kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[allow(missing_docs)]
pub enum Mnemonic {
    Grev,
    Grevw,
    Gorc,
    Gorcw,
    Clmul,
    Clmulh,
    Clmulr,
    Fsl,
    Fsr,
    Fslw,
    Fsrw,
    Shfl,
    Unshfl,
    Shflw,
    Unshflw,
    XpermN,
    XpermB,
    XpermH,
    XpermW,
    Bfp,
    Bfpw,
    Bcompress,
    Bcompressw,
    Bdecompress,
    Bdecompressw,
    Crc32B,
    Crc32H,
    Crc32W,
    Crc32D,
    Crc32cB,
    Crc32cH,
    Crc32cW,
    Crc32cD,
    Bmatflip,
    Bmatxor,
    Bmator,
    Cmov,
}

/// Single source-of-truth assembler name table.
///
/// The first entry for a mnemonic is its canonical name. Immediate forms
/// follow and resolve to the same kernel, with the immediate supplied as `rs2`.
pub const MNEMONIC_TABLE: &[(&str, Mnemonic)] = &[
    ("grev", Mnemonic::Grev),
    ("grevw", Mnemonic::Grevw),
    ("gorc", Mnemonic::Gorc),
    ("gorcw", Mnemonic::Gorcw),
    ("clmul", Mnemonic::Clmul),
    ("clmulh", Mnemonic::Clmulh),
    ("clmulr", Mnemonic::Clmulr),
    ("fsl", Mnemonic::Fsl),
    ("fsr", Mnemonic::Fsr),
    ("fslw", Mnemonic::Fslw),
    ("fsrw", Mnemonic::Fsrw),
    ("shfl", Mnemonic::Shfl),
    ("unshfl", Mnemonic::Unshfl),
    ("shflw", Mnemonic::Shflw),
    ("unshflw", Mnemonic::Unshflw),
    ("xperm.n", Mnemonic::XpermN),
    ("xperm.b", Mnemonic::XpermB),
    ("xperm.h", Mnemonic::XpermH),
    ("xperm.w", Mnemonic::XpermW),
    ("bfp", Mnemonic::Bfp),
    ("bfpw", Mnemonic::Bfpw),
    ("bcompress", Mnemonic::Bcompress),
    ("bcompressw", Mnemonic::Bcompressw),
    ("bdecompress", Mnemonic::Bdecompress),
    ("bdecompressw", Mnemonic::Bdecompressw),
    ("crc32.b", Mnemonic::Crc32B),
    ("crc32.h", Mnemonic::Crc32H),
    ("crc32.w", Mnemonic::Crc32W),
    ("crc32.d", Mnemonic::Crc32D),
    ("crc32c.b", Mnemonic::Crc32cB),
    ("crc32c.h", Mnemonic::Crc32cH),
    ("crc32c.w", Mnemonic::Crc32cW),
    ("crc32c.d", Mnemonic::Crc32cD),
    ("bmatflip", Mnemonic::Bmatflip),
    ("bmatxor", Mnemonic::Bmatxor),
    ("bmator", Mnemonic::Bmator),
    ("cmov", Mnemonic::Cmov),
    ("grevi", Mnemonic::Grev),
    ("greviw", Mnemonic::Grevw),
    ("gorci", Mnemonic::Gorc),
    ("gorciw", Mnemonic::Gorcw),
    ("shfli", Mnemonic::Shfl),
    ("unshfli", Mnemonic::Unshfl),
    ("fsri", Mnemonic::Fsr),
    ("fsriw", Mnemonic::Fsrw),
];

impl Mnemonic {
    /// Every mnemonic, in table order.
    pub const ALL: [Self; 37] = [
        Self::Grev,
        Self::Grevw,
        Self::Gorc,
        Self::Gorcw,
        Self::Clmul,
        Self::Clmulh,
        Self::Clmulr,
        Self::Fsl,
        Self::Fsr,
        Self::Fslw,
        Self::Fsrw,
        Self::Shfl,
        Self::Unshfl,
        Self::Shflw,
        Self::Unshflw,
        Self::XpermN,
        Self::XpermB,
        Self::XpermH,
        Self::XpermW,
        Self::Bfp,
        Self::Bfpw,
        Self::Bcompress,
        Self::Bcompressw,
        Self::Bdecompress,
        Self::Bdecompressw,
        Self::Crc32B,
        Self::Crc32H,
        Self::Crc32W,
        Self::Crc32D,
        Self::Crc32cB,
        Self::Crc32cH,
        Self::Crc32cW,
        Self::Crc32cD,
        Self::Bmatflip,
        Self::Bmatxor,
        Self::Bmator,
        Self::Cmov,
    ];

    /// Canonical assembler name.
    #[must_use]
    pub fn name(self) -> &'static str {
        MNEMONIC_TABLE
            .iter()
            .find_map(|(name, mnemonic)| (*mnemonic == self).then_some(*name))
            .unwrap_or_default()
    }

    /// Looks up a mnemonic by assembler name.
    ///
    /// `_` is accepted in place of `.`, so `crc32_b` resolves like `crc32.b`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', ".");
        MNEMONIC_TABLE
            .iter()
            .find_map(|(entry, mnemonic)| (*entry == normalized).then_some(*mnemonic))
    }

    /// Number of source register operands.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Crc32B
            | Self::Crc32H
            | Self::Crc32W
            | Self::Crc32D
            | Self::Crc32cB
            | Self::Crc32cH
            | Self::Crc32cW
            | Self::Crc32cD
            | Self::Bmatflip => 1,
            Self::Fsl | Self::Fsr | Self::Fslw | Self::Fsrw | Self::Cmov => 3,
            _ => 2,
        }
    }

    /// Returns true for the `*w` forms that compute at 32 bits on a 64-bit core.
    #[must_use]
    pub const fn is_narrow(self) -> bool {
        matches!(
            self,
            Self::Grevw
                | Self::Gorcw
                | Self::Fslw
                | Self::Fsrw
                | Self::Shflw
                | Self::Unshflw
                | Self::Bfpw
                | Self::Bcompressw
                | Self::Bdecompressw
        )
    }

    /// Returns true when the instruction only exists on 64-bit cores.
    #[must_use]
    pub const fn requires_rv64(self) -> bool {
        self.is_narrow()
            || matches!(
                self,
                Self::XpermW
                    | Self::Crc32D
                    | Self::Crc32cD
                    | Self::Bmatflip
                    | Self::Bmatxor
                    | Self::Bmator
            )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mnemonic {
    type Err = UnknownMnemonic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownMnemonic {
            name: s.to_owned(),
        })
    }
}
