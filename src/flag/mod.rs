/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Boolean Flags
//!
//! Provides atomically readable and writable boolean flags backed by
//! 32-bit machine words.
//!
//! # Features
//!
//! - Packed flags: atomic byte-granular store and load within a shared
//!   4-byte word
//! - Dedicated-word flag: a boolean owning its full 4-byte word, with
//!   wait-free operations
//! - Endianness detection for the byte-to-bit-shift mapping
//!
//! # Author
//!
//! Haixing Hu

mod atomic_bool32;
mod endian;
mod packed_bool;

pub use atomic_bool32::AtomicBool32;
pub use endian::BIG_ENDIAN;
pub use packed_bool::{
    load_packed_bool,
    store_packed_bool,
};
