/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_flag::BIG_ENDIAN;

#[test]
fn test_oracle_matches_target_endian() {
    assert_eq!(BIG_ENDIAN, cfg!(target_endian = "big"));
}

#[test]
fn test_oracle_matches_runtime_probe() {
    // Write a known multi-byte pattern and inspect which end comes first
    // in memory.
    let bytes = 0x0102_0304u32.to_ne_bytes();
    assert_eq!(BIG_ENDIAN, bytes[0] == 0x01);
    assert_eq!(!BIG_ENDIAN, bytes[0] == 0x04);
}

#[test]
fn test_low_byte_position() {
    // The least significant byte of 1u32 sits at offset 0 on
    // little-endian platforms and at offset 3 on big-endian platforms.
    let bytes = 1u32.to_ne_bytes();
    if BIG_ENDIAN {
        assert_eq!(bytes, [0, 0, 0, 1]);
    } else {
        assert_eq!(bytes, [1, 0, 0, 0]);
    }
}
