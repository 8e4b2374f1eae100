#![no_main]

use bitmanip_core::kernels::{bcompress, bdecompress, bmatflip, grev, shfl, unshfl};
use bitmanip_core::{execute, DispatchFault, Mnemonic, Operands, Width};
use libfuzzer_sys::fuzz_target;

const NARROW_PAIRS: [(Mnemonic, Mnemonic); 9] = [
    (Mnemonic::Grevw, Mnemonic::Grev),
    (Mnemonic::Gorcw, Mnemonic::Gorc),
    (Mnemonic::Fslw, Mnemonic::Fsl),
    (Mnemonic::Fsrw, Mnemonic::Fsr),
    (Mnemonic::Shflw, Mnemonic::Shfl),
    (Mnemonic::Unshflw, Mnemonic::Unshfl),
    (Mnemonic::Bfpw, Mnemonic::Bfp),
    (Mnemonic::Bcompressw, Mnemonic::Bcompress),
    (Mnemonic::Bdecompressw, Mnemonic::Bdecompress),
];

fn word(data: &[u8], at: usize) -> u64 {
    let mut bytes = [0u8; 8];
    for (slot, byte) in bytes.iter_mut().zip(data.iter().skip(at)) {
        *slot = *byte;
    }
    u64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 24 {
        return;
    }

    let (rs1, rs2, rs3) = (word(data, 0), word(data, 8), word(data, 16));

    assert_eq!(grev(grev(rs1, rs2, Width::W64), rs2, Width::W64), rs1);
    assert_eq!(unshfl(shfl(rs1, rs2, Width::W64), rs2, Width::W64), rs1);
    assert_eq!(
        bdecompress(bcompress(rs1, rs2, Width::W64), rs2, Width::W64),
        rs1 & rs2
    );
    assert_eq!(bmatflip(bmatflip(rs1)), rs1);

    let operands = Operands::ternary(rs1, rs2, rs3);
    for mnemonic in Mnemonic::ALL {
        assert!(execute(mnemonic, Width::W64, &operands).is_ok(), "{mnemonic}");

        match execute(mnemonic, Width::W32, &operands) {
            Ok(value) => {
                assert!(!mnemonic.requires_rv64(), "{mnemonic}");
                assert_eq!(value >> 32, 0, "{mnemonic}");
            }
            Err(fault) => assert_eq!(fault, DispatchFault::RequiresRv64 { mnemonic }),
        }
    }

    for (narrow, native) in NARROW_PAIRS {
        assert_eq!(
            execute(narrow, Width::W64, &operands),
            execute(native, Width::W32, &operands),
            "{narrow}"
        );
    }
});
