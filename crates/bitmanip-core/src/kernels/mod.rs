//! Pure instruction kernels.
//!
//! Every function here is total and accepts any `u64` operand. Functions that
//! take a [`Width`](crate::Width) truncate their inputs to it on entry and
//! return no bits above it.

#![allow(clippy::cast_possible_truncation)]

mod clmul;
mod compress;
mod crc;
mod field;
mod funnel;
mod matrix;
mod permute;
mod select;
mod shuffle;
mod xperm;

pub use clmul::{carryless_multiply, clmul, clmulh, clmulr, ClmulHalf};
pub use compress::{bcompress, bdecompress};
pub use crc::{
    crc32, crc32_b, crc32_d, crc32_h, crc32_w, crc32c_b, crc32c_d, crc32c_h, crc32c_w, CrcChunk,
    CrcPolynomial, CRC32C_POLYNOMIAL, CRC32_POLYNOMIAL,
};
pub use field::{bfp, pack_field_control};
pub use funnel::{fsl, fsr};
pub use matrix::{bmatflip, bmator, bmatxor};
pub use permute::{gorc, grev};
pub use select::cmov;
pub use shuffle::{shfl, unshfl};
pub use xperm::{xperm, xperm_b, xperm_h, xperm_n, xperm_w, XpermGroup};
