//! Read-only constant tables shared by the permutation kernels.

/// Butterfly masks for the `grev`/`gorc` stages, indexed by `log2(stage size)`.
///
/// Each mask selects the lower block of every adjacent block pair at that
/// stage; the complement selects the upper block.
pub const ADJACENT_MASKS: [u64; 6] = [
    0x5555_5555_5555_5555,
    0x3333_3333_3333_3333,
    0x0F0F_0F0F_0F0F_0F0F,
    0x00FF_00FF_00FF_00FF,
    0x0000_FFFF_0000_FFFF,
    0x0000_0000_FFFF_FFFF,
];

/// One stage of the perfect-shuffle network.
///
/// A stage swaps the two inner blocks of every group of four `shift`-sized
/// blocks and leaves the outer two in place. Applying a stage twice is the
/// identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShuffleStage {
    /// Block size moved by this stage; also the control bit that enables it.
    pub shift: u32,
    /// Bits that stay in place.
    pub keep: u64,
    /// Bits that move down by `shift`.
    pub from_high: u64,
    /// Bits that move up by `shift`.
    pub from_low: u64,
}

impl ShuffleStage {
    /// Returns `true` when this stage's bit is set in `control`.
    #[must_use]
    pub const fn enabled(&self, control: u64) -> bool {
        control & self.shift as u64 != 0
    }

    /// Applies the stage to `x`.
    #[must_use]
    pub const fn apply(&self, x: u64) -> u64 {
        (x & self.keep) | ((x & self.from_high) >> self.shift) | ((x & self.from_low) << self.shift)
    }
}

/// Shuffle stages ordered from the widest block to single bits.
///
/// `shfl` walks this table front to back and `unshfl` back to front.
pub const SHUFFLE_STAGES: [ShuffleStage; 5] = [
    ShuffleStage {
        shift: 16,
        keep: 0xFFFF_0000_0000_FFFF,
        from_high: 0x0000_FFFF_0000_0000,
        from_low: 0x0000_0000_FFFF_0000,
    },
    ShuffleStage {
        shift: 8,
        keep: 0xFF00_00FF_FF00_00FF,
        from_high: 0x00FF_0000_00FF_0000,
        from_low: 0x0000_FF00_0000_FF00,
    },
    ShuffleStage {
        shift: 4,
        keep: 0xF00F_F00F_F00F_F00F,
        from_high: 0x0F00_0F00_0F00_0F00,
        from_low: 0x00F0_00F0_00F0_00F0,
    },
    ShuffleStage {
        shift: 2,
        keep: 0xC3C3_C3C3_C3C3_C3C3,
        from_high: 0x3030_3030_3030_3030,
        from_low: 0x0C0C_0C0C_0C0C_0C0C,
    },
    ShuffleStage {
        shift: 1,
        keep: 0x9999_9999_9999_9999,
        from_high: 0x4444_4444_4444_4444,
        from_low: 0x2222_2222_2222_2222,
    },
];

/// Control bits examined by the native 64-bit shuffle (`width/2 - 1`).
pub const SHUFFLE_CONTROL_MASK_64: u64 = 0x1F;

/// Control bits examined by the 32-bit and `*w` shuffles.
pub const SHUFFLE_CONTROL_MASK_32: u64 = 0x0F;
