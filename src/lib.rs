/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-flag
//!
//! Atomic boolean flags that are safe to place next to other variables in
//! memory.
//!
//! A plain one-byte boolean that shares its 4-byte machine word with other
//! variables cannot be updated atomically on platforms whose atomic
//! facilities operate on whole words. This crate provides two flag flavors
//! that close that gap:
//!
//! - **Packed flags** ([`store_packed_bool`] / [`load_packed_bool`]):
//!   operate on the raw address of a one-byte boolean that lives inside a
//!   naturally aligned 4-byte word, updating only that byte through an
//!   atomic compare-and-swap loop on the containing word. Up to four
//!   independent flags can share one word.
//! - **Dedicated-word flag** ([`AtomicBool32`]): a boolean that owns its
//!   entire 4-byte word, giving wait-free store, load, and
//!   compare-and-set with no shift or mask arithmetic.
//!
//! ## Design Goals
//!
//! - **Safety**: the dedicated-word flag is safe by construction; the
//!   packed flavor confines all layout assumptions to a documented
//!   `# Safety` contract
//! - **Ease of Use**: hides memory ordering complexity behind
//!   sequentially consistent defaults
//! - **Performance**: zero-cost abstraction, wait-free wherever the
//!   storage layout permits
//!
//! ## Choosing a flavor
//!
//! Prefer [`AtomicBool32`] (or the standard library's `AtomicBool`) when
//! you control the variable's storage. Reach for the packed functions only
//! when the memory layout is fixed by external constraints, such as a
//! byte-packed table or a struct shared across a foreign interface, and
//! only word-sized atomic access is available.
//!
//! ## Example
//!
//! ```rust
//! use prism3_flag::AtomicBool32;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let ready = Arc::new(AtomicBool32::new(false));
//! let ready_clone = ready.clone();
//!
//! let handle = thread::spawn(move || {
//!     ready_clone.store(true);
//! });
//!
//! handle.join().unwrap();
//! assert!(ready.load());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod flag;

// Re-export the flag types and operations
pub use flag::{
    load_packed_bool,
    store_packed_bool,
    AtomicBool32,
    BIG_ENDIAN,
};
