//! Dispatch stage: maps a decoded mnemonic and its operands onto a kernel.
//!
//! The stage resolves the operand width an instruction computes at: `*w`
//! forms always compute at 32 bits, everything else at the core's native
//! width. Instructions that only exist on 64-bit cores are rejected on a
//! 32-bit core before any kernel runs.

mod operands;

pub use operands::Operands;

use crate::kernels;
use crate::{DispatchFault, Mnemonic, Width};

/// Width an instruction computes at on a core of `native_width`.
#[must_use]
pub const fn effective_width(mnemonic: Mnemonic, native_width: Width) -> Width {
    if mnemonic.is_narrow() {
        Width::W32
    } else {
        native_width
    }
}

/// Executes one instruction.
///
/// The result is truncated to the effective width; narrow results come back
/// zero-extended and any sign extension is left to the caller.
///
/// # Errors
///
/// Returns [`DispatchFault::RequiresRv64`] for a 64-bit-only instruction on a
/// 32-bit core.
pub const fn execute(
    mnemonic: Mnemonic,
    native_width: Width,
    operands: &Operands,
) -> Result<u64, DispatchFault> {
    if mnemonic.requires_rv64() && matches!(native_width, Width::W32) {
        return Err(DispatchFault::RequiresRv64 { mnemonic });
    }

    let width = effective_width(mnemonic, native_width);
    let Operands { rs1, rs2, rs3 } = *operands;

    let result = match mnemonic {
        Mnemonic::Grev | Mnemonic::Grevw => kernels::grev(rs1, rs2, width),
        Mnemonic::Gorc | Mnemonic::Gorcw => kernels::gorc(rs1, rs2, width),
        Mnemonic::Clmul => kernels::clmul(rs1, rs2, width),
        Mnemonic::Clmulh => kernels::clmulh(rs1, rs2, width),
        Mnemonic::Clmulr => kernels::clmulr(rs1, rs2, width),
        Mnemonic::Fsl | Mnemonic::Fslw => kernels::fsl(rs1, rs2, rs3, width),
        Mnemonic::Fsr | Mnemonic::Fsrw => kernels::fsr(rs1, rs2, rs3, width),
        Mnemonic::Shfl | Mnemonic::Shflw => kernels::shfl(rs1, rs2, width),
        Mnemonic::Unshfl | Mnemonic::Unshflw => kernels::unshfl(rs1, rs2, width),
        Mnemonic::XpermN => kernels::xperm_n(rs1, rs2, width),
        Mnemonic::XpermB => kernels::xperm_b(rs1, rs2, width),
        Mnemonic::XpermH => kernels::xperm_h(rs1, rs2, width),
        Mnemonic::XpermW => kernels::xperm_w(rs1, rs2, width),
        Mnemonic::Bfp | Mnemonic::Bfpw => kernels::bfp(rs1, rs2, width),
        Mnemonic::Bcompress | Mnemonic::Bcompressw => kernels::bcompress(rs1, rs2, width),
        Mnemonic::Bdecompress | Mnemonic::Bdecompressw => kernels::bdecompress(rs1, rs2, width),
        Mnemonic::Crc32B => kernels::crc32_b(rs1, width),
        Mnemonic::Crc32H => kernels::crc32_h(rs1, width),
        Mnemonic::Crc32W => kernels::crc32_w(rs1, width),
        Mnemonic::Crc32D => kernels::crc32_d(rs1, width),
        Mnemonic::Crc32cB => kernels::crc32c_b(rs1, width),
        Mnemonic::Crc32cH => kernels::crc32c_h(rs1, width),
        Mnemonic::Crc32cW => kernels::crc32c_w(rs1, width),
        Mnemonic::Crc32cD => kernels::crc32c_d(rs1, width),
        Mnemonic::Bmatflip => kernels::bmatflip(rs1),
        Mnemonic::Bmatxor => kernels::bmatxor(rs1, rs2),
        Mnemonic::Bmator => kernels::bmator(rs1, rs2),
        Mnemonic::Cmov => kernels::cmov(rs1, rs2, rs3),
    };

    Ok(width.truncate(result))
}

/// Executes one instruction from a slice of exactly `mnemonic.arity()` values.
///
/// # Errors
///
/// Returns [`DispatchFault::OperandCount`] on an arity mismatch, otherwise
/// the errors of [`execute`].
pub fn execute_slice(
    mnemonic: Mnemonic,
    native_width: Width,
    values: &[u64],
) -> Result<u64, DispatchFault> {
    let operands = Operands::from_slice(mnemonic, values)?;
    execute(mnemonic, native_width, &operands)
}

#[cfg(test)]
mod tests {
    use super::{effective_width, execute, execute_slice, Operands};
    use crate::{DispatchFault, Mnemonic, Width};

    #[test]
    fn narrow_forms_compute_at_32_bits() {
        assert_eq!(effective_width(Mnemonic::Grevw, Width::W64), Width::W32);
        assert_eq!(effective_width(Mnemonic::Grev, Width::W64), Width::W64);
        assert_eq!(effective_width(Mnemonic::Grev, Width::W32), Width::W32);
    }

    #[test]
    fn narrow_reverse_only_touches_the_low_word() {
        let ops = Operands::binary(0xFFFF_FFFF_0000_0001, 31);
        assert_eq!(execute(Mnemonic::Grevw, Width::W64, &ops), Ok(0x8000_0000));
        assert_eq!(
            execute(Mnemonic::Grev, Width::W64, &ops),
            Ok(0xFFFF_FFFF_8000_0000)
        );
    }

    #[test]
    fn rv64_only_instructions_fault_on_rv32() {
        for mnemonic in Mnemonic::ALL {
            let result = execute(mnemonic, Width::W32, &Operands::default());
            if mnemonic.requires_rv64() {
                assert_eq!(result, Err(DispatchFault::RequiresRv64 { mnemonic }));
            } else {
                assert_eq!(result, Ok(0), "{mnemonic}");
            }
        }
    }

    #[test]
    fn cmov_result_is_truncated_on_rv32() {
        let ops = Operands::ternary(0x1_0000_0002, 1, 0);
        assert_eq!(execute(Mnemonic::Cmov, Width::W32, &ops), Ok(2));
        assert_eq!(execute(Mnemonic::Cmov, Width::W64, &ops), Ok(0x1_0000_0002));
    }

    #[test]
    fn slice_dispatch_checks_arity_first() {
        assert_eq!(
            execute_slice(Mnemonic::Bmatflip, Width::W32, &[1, 2]),
            Err(DispatchFault::OperandCount {
                mnemonic: Mnemonic::Bmatflip,
                expected: 1,
                actual: 2,
            })
        );
        assert_eq!(
            execute_slice(Mnemonic::Bmatflip, Width::W64, &[0xFF]),
            Ok(0x0101_0101_0101_0101)
        );
    }
}
