/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_flag::{
    load_packed_bool,
    store_packed_bool,
    AtomicBool32,
};
use std::sync::atomic::{
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

use super::common::FlagWord;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// All four bytes of one word hammered simultaneously, with a barrier so
// the threads actually overlap.
#[test]
fn test_concurrent_packed_stores_all_offsets() {
    let word = Arc::new(FlagWord::new());
    let barrier = Arc::new(Barrier::new(4));
    let mut handles = vec![];

    for offset in 0..4 {
        let word = word.clone();
        let barrier = barrier.clone();
        let handle = thread::spawn(move || {
            barrier.wait();
            let addr = word.byte_ptr(offset);
            for n in 0..ITERATIONS_PER_THREAD {
                unsafe { store_packed_bool(addr, n % 2 == 0) };
            }
            // Deterministic final value per byte
            unsafe { store_packed_bool(addr, offset % 2 == 0) };
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    for offset in 0..4 {
        assert_eq!(
            unsafe { load_packed_bool(word.byte_ptr(offset)) },
            offset % 2 == 0
        );
    }
}

// Concurrent CAS retry loops on a dedicated-word flag: every toggle must
// land exactly once.
#[test]
fn test_concurrent_cas_toggle() {
    let flag = Arc::new(AtomicBool32::new(false));
    let toggles = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let flag = flag.clone();
        let toggles = toggles.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                let mut current = flag.load();
                loop {
                    match flag.compare_set_weak(current, !current) {
                        Ok(_) => break,
                        Err(actual) => current = actual,
                    }
                }
                toggles.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        toggles.load(Ordering::Relaxed),
        NUM_THREADS * ITERATIONS_PER_THREAD
    );
    // Even total toggle count returns the flag to its initial value.
    assert!(!flag.load());
}

// A dedicated-word flag publishing completion of packed-byte work: the
// store to the packed byte must be visible once the flag reads true.
#[test]
fn test_packed_store_published_by_dedicated_flag() {
    let word = Arc::new(FlagWord::new());
    let done = Arc::new(AtomicBool32::new(false));

    let word_clone = word.clone();
    let done_clone = done.clone();
    let producer = thread::spawn(move || {
        unsafe { store_packed_bool(word_clone.byte_ptr(2), true) };
        done_clone.store(true);
    });

    let word_clone = word.clone();
    let done_clone = done.clone();
    let consumer = thread::spawn(move || {
        while !done_clone.load() {
            thread::yield_now();
        }
        assert!(unsafe { load_packed_bool(word_clone.byte_ptr(2)) });
    });

    producer.join().unwrap();
    consumer.join().unwrap();
}

// Exactly one winner among concurrent set-once attempts, repeated to
// cover many interleavings.
#[test]
fn test_concurrent_set_once_repeated() {
    for _ in 0..100 {
        let flag = Arc::new(AtomicBool32::new(false));
        let winners = Arc::new(StdAtomicUsize::new(0));
        let barrier = Arc::new(Barrier::new(4));
        let mut handles = vec![];

        for _ in 0..4 {
            let flag = flag.clone();
            let winners = winners.clone();
            let barrier = barrier.clone();
            handles.push(thread::spawn(move || {
                barrier.wait();
                if flag.compare_set(false, true).is_ok() {
                    winners.fetch_add(1, Ordering::Relaxed);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(winners.load(Ordering::Relaxed), 1);
        assert!(flag.load());
    }
}
