/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Packed Boolean Flags
//!
//! Provides atomic store and load of a one-byte boolean that shares its
//! naturally aligned 4-byte word with up to three other byte-sized
//! variables.
//!
//! Every operation re-derives the containing word's address and the
//! byte's bit-shift offset from the incoming pointer, performs a single
//! 32-bit atomic access on the word, and touches only the 8 bits backing
//! the addressed byte. A concurrent observer never sees a torn word and
//! the sibling bytes are never disturbed, provided they are themselves
//! only accessed through an equivalent word-sized atomic protocol.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

use crate::flag::endian::BIG_ENDIAN;

/// Mask selecting the byte-offset bits of an address within its 4-byte
/// word.
const OFFSET_MASK: usize = 3;

/// Mask covering the 8 value bits of one flag byte.
const BYTE_MASK: u32 = 0xFF;

/// Computes the bit-shift of the byte at `offset` within the integer
/// value of its containing 4-byte word.
///
/// Byte 0 holds the least significant bits on little-endian platforms
/// and the most significant bits on big-endian platforms.
#[inline]
fn bit_shift(offset: usize) -> u32 {
    if BIG_ENDIAN {
        8 * (3 - offset as u32)
    } else {
        8 * offset as u32
    }
}

/// Atomically stores `value` into the boolean byte at `addr`.
///
/// The byte is edited through a compare-and-swap loop on the naturally
/// aligned 4-byte word containing it: the word is loaded, the 8 bits
/// backing the byte are cleared and replaced with the encoding of
/// `value`, and the result is swapped in only if no other thread updated
/// the word in between. On interference from a sibling-byte writer the
/// loop retries from a fresh load. The loop is lock-free: each failed
/// attempt means some other thread's update succeeded.
///
/// # Memory Ordering
///
/// Uses `SeqCst` ordering. A store that has returned is visible to every
/// subsequent load of the same byte on any thread, and all operations on
/// the word participate in a single total order. No ordering is
/// guaranteed relative to non-atomic accesses of the word performed
/// outside this module.
///
/// # Parameters
///
/// * `addr` - The address of the boolean's one-byte storage.
/// * `value` - The value to store.
///
/// # Safety
///
/// - `addr` must point to initialized memory that is valid for reads and
///   writes for the duration of the call, and the allocation containing
///   it must span the entire naturally aligned 4-byte word the byte
///   belongs to (the word starting at `addr` rounded down to a multiple
///   of 4).
/// - Every concurrent access to any byte of that word must go through
///   the operations of this module or an equivalent atomic protocol on
///   the whole word. A plain non-atomic read or write of any byte in the
///   word races with the compare-and-swap loop and may observe or
///   produce a torn value.
///
/// Violating either condition is undefined behavior. These conditions
/// cannot be validated at runtime; the contract is precondition-based.
///
/// # Example
///
/// ```rust
/// use prism3_flag::{load_packed_bool, store_packed_bool};
///
/// #[repr(C, align(4))]
/// struct Flags {
///     bytes: [bool; 4],
/// }
///
/// let mut flags = Flags { bytes: [false; 4] };
/// let addr = &mut flags.bytes[1] as *mut bool;
///
/// unsafe {
///     store_packed_bool(addr, true);
///     assert!(load_packed_bool(addr));
/// }
/// ```
pub unsafe fn store_packed_bool(addr: *mut bool, value: bool) {
    let addr = addr as usize;
    let shift = bit_shift(addr & OFFSET_MASK);
    let mask = BYTE_MASK << shift;
    let bit = (value as u32) << shift;
    // The word reference is re-derived from the incoming pointer on
    // every call and never outlives it.
    let word = unsafe { &*((addr & !OFFSET_MASK) as *const AtomicU32) };
    let mut current = word.load(Ordering::SeqCst);
    loop {
        let new = (current & !mask) | bit;
        match word.compare_exchange_weak(current, new, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return,
            Err(actual) => current = actual,
        }
    }
}

/// Atomically loads the boolean byte at `addr`.
///
/// Loads the naturally aligned 4-byte word containing the byte once,
/// then extracts the byte's 8 bits. The byte reads as `true` iff any of
/// its bits is set. No retry is needed since nothing is modified.
///
/// # Memory Ordering
///
/// Uses `SeqCst` ordering, matching [`store_packed_bool`]: the load
/// observes the most recent store to the byte in the word's total
/// operation order.
///
/// # Parameters
///
/// * `addr` - The address of the boolean's one-byte storage.
///
/// # Returns
///
/// The current value of the boolean byte.
///
/// # Safety
///
/// Same contract as [`store_packed_bool`]: the allocation must span the
/// byte's entire aligned 4-byte word, and all concurrent access to that
/// word must be atomic at word granularity.
///
/// # Example
///
/// ```rust
/// use prism3_flag::load_packed_bool;
///
/// #[repr(C, align(4))]
/// struct Flags {
///     bytes: [bool; 4],
/// }
///
/// let flags = Flags { bytes: [false, true, false, false] };
///
/// unsafe {
///     assert!(!load_packed_bool(&flags.bytes[0]));
///     assert!(load_packed_bool(&flags.bytes[1]));
/// }
/// ```
pub unsafe fn load_packed_bool(addr: *const bool) -> bool {
    let addr = addr as usize;
    let shift = bit_shift(addr & OFFSET_MASK);
    let word = unsafe { &*((addr & !OFFSET_MASK) as *const AtomicU32) };
    ((word.load(Ordering::SeqCst) >> shift) & BYTE_MASK) != 0
}
