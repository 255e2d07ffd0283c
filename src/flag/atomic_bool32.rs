/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Dedicated-Word Atomic Boolean
//!
//! Provides an atomic boolean that owns its entire 4-byte word, avoiding
//! the shift and mask arithmetic the packed flavor needs.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering;

/// Atomic boolean stored in a dedicated 32-bit word.
///
/// The word exclusively belongs to this flag and only ever holds the
/// encodings `0` (false) and `1` (true), so every operation is a single
/// hardware instruction on the full word: no bit-packing, no
/// compare-and-swap retry loop, wait-free under any contention.
///
/// Use this type when a boolean must be shared with other threads but
/// sits in memory adjacent to other variables, and dedicating a full
/// word to it is acceptable. When the surrounding layout cannot be
/// changed, see [`store_packed_bool`](crate::store_packed_bool) instead.
///
/// # Memory Ordering Strategy
///
/// All operations use `SeqCst` ordering:
///
/// - A `store` that has returned is visible to every subsequent `load`
///   by any thread.
/// - All operations on the flag participate in one total order, so
///   threads never disagree about the order of two updates.
///
/// Flags of this kind typically gate startup, shutdown, or one-time
/// initialization, where the cost of sequential consistency is dwarfed
/// by the cost of reasoning about anything weaker.
///
/// # Example
///
/// ```rust
/// use prism3_flag::AtomicBool32;
/// use std::sync::Arc;
/// use std::thread;
///
/// let flag = Arc::new(AtomicBool32::new(false));
/// let flag_clone = flag.clone();
///
/// let handle = thread::spawn(move || {
///     flag_clone.store(true);
/// });
///
/// handle.join().unwrap();
/// assert!(flag.load());
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicBool32 {
    inner: AtomicU32,
}

impl AtomicBool32 {
    /// Creates a new flag.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// assert!(!flag.load());
    /// ```
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self {
            inner: AtomicU32::new(value as u32),
        }
    }

    /// Gets the current value.
    ///
    /// A single atomic load of the word; the flag is `true` iff the word
    /// is nonzero.
    ///
    /// # Returns
    ///
    /// The current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(true);
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn load(&self) -> bool {
        self.inner.load(Ordering::SeqCst) != 0
    }

    /// Sets a new value.
    ///
    /// A single atomic store of `1` or `0`; no compare-and-swap loop is
    /// involved, so the operation is wait-free.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// flag.store(true);
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn store(&self, value: bool) {
        self.inner.store(value as u32, Ordering::SeqCst);
    }

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// let old = flag.swap(true);
    /// assert!(!old);
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn swap(&self, value: bool) -> bool {
        self.inner.swap(value as u32, Ordering::SeqCst) != 0
    }

    /// Compares and sets the value atomically.
    ///
    /// If the current value equals `current`, sets it to `new` and
    /// returns `Ok(())`. Otherwise, leaves the flag untouched and returns
    /// `Err(actual)` where `actual` is the current value.
    ///
    /// This is a single hardware compare-and-swap with no internal retry:
    /// a failed attempt is reported to the caller, who decides whether to
    /// loop.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// assert!(flag.compare_set(false, true).is_ok());
    /// assert!(flag.load());
    ///
    /// // Fails because the current value is true, not false
    /// assert!(flag.compare_set(false, false).is_err());
    /// ```
    #[inline]
    pub fn compare_set(&self, current: bool, new: bool) -> Result<(), bool> {
        self.inner
            .compare_exchange(
                current as u32,
                new as u32,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(|actual| actual != 0)
    }

    /// Weak version of compare-and-set.
    ///
    /// May spuriously fail even when the comparison succeeds. Should be
    /// used in a loop.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or `Err(actual)` on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// let mut current = flag.load();
    /// loop {
    ///     match flag.compare_set_weak(current, true) {
    ///         Ok(_) => break,
    ///         Err(actual) => current = actual,
    ///     }
    /// }
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn compare_set_weak(&self, current: bool, new: bool) -> Result<(), bool> {
        self.inner
            .compare_exchange_weak(
                current as u32,
                new as u32,
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .map(|_| ())
            .map_err(|actual| actual != 0)
    }

    /// Compares and exchanges the value atomically, returning the
    /// previous value.
    ///
    /// If the current value equals `current`, sets it to `new` and
    /// returns the old value. Otherwise, returns the actual current
    /// value. The operation succeeded iff the returned value equals
    /// `current`.
    ///
    /// # Parameters
    ///
    /// * `current` - The expected current value.
    /// * `new` - The new value to set if current matches.
    ///
    /// # Returns
    ///
    /// The value before the operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// let prev = flag.compare_and_exchange(false, true);
    /// assert!(!prev);
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn compare_and_exchange(&self, current: bool, new: bool) -> bool {
        match self.inner.compare_exchange(
            current as u32,
            new as u32,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(prev) => prev != 0,
            Err(actual) => actual != 0,
        }
    }

    /// Atomically sets the value to `true`, returning the old value.
    ///
    /// # Returns
    ///
    /// The old value before setting to `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// assert!(!flag.fetch_set());
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn fetch_set(&self) -> bool {
        self.swap(true)
    }

    /// Atomically sets the value to `false`, returning the old value.
    ///
    /// # Returns
    ///
    /// The old value before setting to `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(true);
    /// assert!(flag.fetch_clear());
    /// assert!(!flag.load());
    /// ```
    #[inline]
    pub fn fetch_clear(&self) -> bool {
        self.swap(false)
    }

    /// Atomically negates the value, returning the old value.
    ///
    /// Implemented as an atomic XOR with `1`, which maps the word's two
    /// legal encodings onto each other.
    ///
    /// # Returns
    ///
    /// The old value before negation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// assert!(!flag.fetch_not());
    /// assert!(flag.load());
    /// assert!(flag.fetch_not());
    /// assert!(!flag.load());
    /// ```
    #[inline]
    pub fn fetch_not(&self) -> bool {
        self.inner.fetch_xor(1, Ordering::SeqCst) != 0
    }

    /// Conditionally sets the value if it is currently `false`.
    ///
    /// # Parameters
    ///
    /// * `new` - The new value to set if current is `false`.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was `false` and has been set to `new`,
    /// `Err(true)` if the value was already `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(false);
    /// assert!(flag.set_if_false(true).is_ok());
    /// assert!(flag.load());
    ///
    /// // Second attempt fails
    /// assert!(flag.set_if_false(true).is_err());
    /// ```
    #[inline]
    pub fn set_if_false(&self, new: bool) -> Result<(), bool> {
        self.compare_set(false, new)
    }

    /// Conditionally sets the value if it is currently `true`.
    ///
    /// # Parameters
    ///
    /// * `new` - The new value to set if current is `true`.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was `true` and has been set to `new`,
    /// `Err(false)` if the value was already `false`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_flag::AtomicBool32;
    ///
    /// let flag = AtomicBool32::new(true);
    /// assert!(flag.set_if_true(false).is_ok());
    /// assert!(!flag.load());
    ///
    /// // Second attempt fails
    /// assert!(flag.set_if_true(false).is_err());
    /// ```
    #[inline]
    pub fn set_if_true(&self, new: bool) -> Result<(), bool> {
        self.compare_set(true, new)
    }
}

unsafe impl Send for AtomicBool32 {}
unsafe impl Sync for AtomicBool32 {}

impl Default for AtomicBool32 {
    /// Creates a flag initialized to `false`, matching the all-zero
    /// encoding of freshly zeroed storage.
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicBool32 {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicBool32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBool32")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for AtomicBool32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
