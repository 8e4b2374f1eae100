//! Fixed reference vectors for every kernel family, checked through dispatch.

#![allow(clippy::pedantic, clippy::nursery, clippy::unreadable_literal)]

use bitmanip_core::kernels::{crc32_b, crc32_d, crc32_h, crc32_w, crc32c_b, crc32c_w};
use bitmanip_core::{execute, Mnemonic, Operands, Width};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

const CHECK_INPUT: &[u8] = b"123456789";

#[rstest]
#[case(Mnemonic::Grev, Width::W64, Operands::binary(0x1, 63), 0x8000_0000_0000_0000)]
#[case(Mnemonic::Grevw, Width::W64, Operands::binary(0x1234_5678, 24), 0x7856_3412)]
#[case(Mnemonic::Gorc, Width::W64, Operands::binary(0x1, 63), u64::MAX)]
#[case(Mnemonic::Gorcw, Width::W64, Operands::binary(0x10, 7), 0xFF)]
#[case(Mnemonic::Clmul, Width::W32, Operands::binary(0x8765_4321, 0x1234_5678), 0x2B42_1178)]
#[case(Mnemonic::Clmulh, Width::W32, Operands::binary(0x8765_4321, 0x1234_5678), 0x0962_335C)]
#[case(Mnemonic::Clmulr, Width::W64, Operands::binary(1 << 63, 1 << 63), 1 << 63)]
#[case(Mnemonic::Fsl, Width::W64, Operands::ternary(0x1, 4, 0xF000_0000_0000_0000), 0x1F)]
#[case(Mnemonic::Fsr, Width::W64, Operands::ternary(0x10, 4, 0xF), 0xF000_0000_0000_0001)]
#[case(Mnemonic::Fslw, Width::W64, Operands::ternary(0x1, 4, 0xFFFF_FFFF_0000_0000), 0x10)]
#[case(Mnemonic::Fsrw, Width::W64, Operands::ternary(0x10, 4, 0xF), 0xF000_0001)]
#[case(Mnemonic::Shfl, Width::W64, Operands::binary(0xFFFF_FFFF_0000_0000, 31), 0xAAAA_AAAA_AAAA_AAAA)]
#[case(Mnemonic::Unshflw, Width::W64, Operands::binary(0x5555_5555, 15), 0x0000_FFFF)]
#[case(Mnemonic::XpermN, Width::W32, Operands::binary(0x7654_3210, 0x0123_4567), 0x0123_4567)]
#[case(Mnemonic::XpermB, Width::W32, Operands::binary(0x4433_2211, 0x00FF_0004), 0x1100_1100)]
#[case(Mnemonic::XpermW, Width::W64, Operands::binary(0x2222_2222_1111_1111, 1), 0x1111_1111_2222_2222)]
#[case(Mnemonic::Bfp, Width::W32, Operands::binary(0xFFFF_FFFF, 0x0804_00A5), 0xFFFF_FA5F)]
#[case(Mnemonic::Bfpw, Width::W64, Operands::binary(0xFFFF_FFFF, 0x0804_00A5), 0xFFFF_FA5F)]
#[case(Mnemonic::Bcompress, Width::W64, Operands::binary(0b1011, 0b1010), 0b11)]
#[case(Mnemonic::Bdecompressw, Width::W64, Operands::binary(0x1256, 0xFF00_FF00), 0x1200_5600)]
#[case(Mnemonic::Crc32W, Width::W32, Operands::unary(0xFFFF_FFFF), 0xDEBB_20E3)]
#[case(Mnemonic::Crc32cW, Width::W32, Operands::unary(0xFFFF_FFFF), 0xB798_B438)]
#[case(Mnemonic::Crc32D, Width::W64, Operands::unary(u64::MAX), 0x4466_0075)]
#[case(Mnemonic::Crc32cD, Width::W64, Operands::unary(u64::MAX), 0xC44F_F94D)]
#[case(Mnemonic::Bmatflip, Width::W64, Operands::unary(0x0123_4567_89AB_CDEF), 0x0F33_5500_0F33_55FF)]
#[case(Mnemonic::Bmatxor, Width::W64, Operands::binary(0x0303, 0x0303), 0)]
#[case(Mnemonic::Bmator, Width::W64, Operands::binary(0x0303, 0x0303), 0x0303)]
#[case(Mnemonic::Cmov, Width::W64, Operands::ternary(7, u64::MAX, 9), 7)]
#[case(Mnemonic::Cmov, Width::W64, Operands::ternary(7, 0, 9), 9)]
fn dispatch_reference_values(
    #[case] mnemonic: Mnemonic,
    #[case] native_width: Width,
    #[case] operands: Operands,
    #[case] expected: u64,
) {
    assert_eq!(execute(mnemonic, native_width, &operands), Ok(expected));
}

fn finish(state: u64) -> u64 {
    state ^ 0xFFFF_FFFF
}

#[rstest]
#[case(crc32_b as fn(u64, Width) -> u64, 0xCBF4_3926)]
#[case(crc32c_b as fn(u64, Width) -> u64, 0xE306_9283)]
fn bytewise_crc_matches_check_values(#[case] update: fn(u64, Width) -> u64, #[case] check: u64) {
    let state = CHECK_INPUT
        .iter()
        .fold(0xFFFF_FFFF, |state, &byte| update(state ^ u64::from(byte), Width::W32));
    assert_eq!(finish(state), check);
}

#[test]
fn wider_chunks_fold_like_repeated_bytes() {
    let (head, tail) = CHECK_INPUT.split_at(8);
    let last = u64::from(tail[0]);

    let word_lo = u64::from(u32::from_le_bytes([head[0], head[1], head[2], head[3]]));
    let word_hi = u64::from(u32::from_le_bytes([head[4], head[5], head[6], head[7]]));
    let mut state = crc32_w(0xFFFF_FFFF ^ word_lo, Width::W32);
    state = crc32_w(state ^ word_hi, Width::W32);
    state = crc32_b(state ^ last, Width::W32);
    assert_eq!(finish(state), 0xCBF4_3926);

    let mut state = 0xFFFF_FFFF;
    for pair in head.chunks_exact(2) {
        state = crc32_h(state ^ u64::from(u16::from_le_bytes([pair[0], pair[1]])), Width::W32);
    }
    state = crc32_b(state ^ last, Width::W32);
    assert_eq!(finish(state), 0xCBF4_3926);

    let dword = u64::from_le_bytes([
        head[0], head[1], head[2], head[3], head[4], head[5], head[6], head[7],
    ]);
    let state = crc32_d(0xFFFF_FFFF ^ dword, Width::W64);
    let state = crc32_b(state ^ last, Width::W64);
    assert_eq!(finish(state), 0xCBF4_3926);
}

#[test]
fn castagnoli_word_chunks_match_check_value() {
    let (head, tail) = CHECK_INPUT.split_at(8);
    let mut state = 0xFFFF_FFFF;
    for word in head.chunks_exact(4) {
        let word = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        state = crc32c_w(state ^ u64::from(word), Width::W32);
    }
    state = crc32c_b(state ^ u64::from(tail[0]), Width::W32);
    assert_eq!(finish(state), 0xE306_9283);
}
