/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Endianness Detection
//!
//! Exposes a process-wide constant describing the platform byte order,
//! used to map a byte's position within a 4-byte word to its bit-shift
//! offset.
//!
//! # Author
//!
//! Haixing Hu

/// Probe pattern whose in-memory byte layout reveals the platform byte
/// order.
const PROBE: u32 = 0x0102_0304;

/// Whether the platform stores the most significant byte of a multi-byte
/// integer at the lowest address.
///
/// Evaluated at compile time by inspecting the native byte layout of a
/// known 32-bit pattern, so it is fixed before any flag operation can
/// run and never changes afterwards.
///
/// On little-endian platforms the byte at offset `k` of a 4-byte word
/// occupies bits `8 * k` of the word's integer value; on big-endian
/// platforms it occupies bits `8 * (3 - k)`, because byte 0 is the most
/// significant byte.
///
/// # Example
///
/// ```rust
/// use prism3_flag::BIG_ENDIAN;
///
/// assert_eq!(BIG_ENDIAN, cfg!(target_endian = "big"));
/// ```
pub const BIG_ENDIAN: bool = PROBE.to_ne_bytes()[0] == 0x01;

// The packed representation requires a boolean to occupy exactly one
// byte and 32-bit atomics to be naturally aligned 4-byte words. Both
// hold on every platform Rust targets; a platform where they do not
// must fail the build rather than corrupt adjacent memory at runtime.
const _: () = assert!(std::mem::size_of::<bool>() == 1);
const _: () = assert!(std::mem::size_of::<std::sync::atomic::AtomicU32>() == 4);
const _: () = assert!(std::mem::align_of::<std::sync::atomic::AtomicU32>() == 4);
