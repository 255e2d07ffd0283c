/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Boolean Flags Example
//!
//! Demonstrates the dedicated-word flag and the packed-byte flag
//! operations.

use prism3_flag::{
    load_packed_bool,
    store_packed_bool,
    AtomicBool32,
};
use std::cell::UnsafeCell;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[repr(C, align(4))]
struct FlagWord {
    flags: UnsafeCell<[bool; 4]>,
}

unsafe impl Sync for FlagWord {}

fn main() {
    println!("=== Boolean Flags Example ===\n");

    // Example 1: Dedicated-word flag basics
    println!("1. Dedicated-Word Flag:");
    let flag = AtomicBool32::new(false);
    println!("   Initial value: {}", flag.load());

    flag.store(true);
    println!("   After store(true): {}", flag.load());

    flag.fetch_not();
    println!("   After negate: {}", flag.load());

    // Example 2: One-time initialization
    println!("\n2. One-time Initialization:");
    let initialized = Arc::new(AtomicBool32::new(false));
    let mut handles = vec![];

    for i in 0..5 {
        let initialized = initialized.clone();
        let handle = thread::spawn(move || {
            if initialized.set_if_false(true).is_ok() {
                println!("   Thread {} performed initialization", i);
                thread::sleep(Duration::from_millis(100));
            } else {
                println!("   Thread {} skipped (already initialized)", i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!("   Final state: initialized = {}", initialized.load());

    // Example 3: Producer-Consumer signaling
    println!("\n3. Producer-Consumer Signaling:");
    let ready = Arc::new(AtomicBool32::new(false));
    let data = Arc::new(AtomicBool32::new(false));

    let ready_clone = ready.clone();
    let data_clone = data.clone();

    // Producer thread
    let producer = thread::spawn(move || {
        println!("   Producer: preparing data...");
        thread::sleep(Duration::from_millis(100));
        data_clone.store(true);
        ready_clone.store(true);
        println!("   Producer: data ready!");
    });

    // Consumer thread
    let consumer = thread::spawn(move || {
        println!("   Consumer: waiting for data...");
        while !ready.load() {
            thread::yield_now();
        }
        println!("   Consumer: received data = {}", data.load());
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    // Example 4: Four packed flags sharing one word
    println!("\n4. Packed Flags, One Word, Four Threads:");
    let word = Arc::new(FlagWord {
        flags: UnsafeCell::new([false; 4]),
    });
    let mut handles = vec![];

    for offset in 0..4 {
        let word = word.clone();
        let handle = thread::spawn(move || {
            let addr = unsafe { (word.flags.get() as *mut bool).add(offset) };
            for _ in 0..1000 {
                unsafe { store_packed_bool(addr, true) };
                unsafe { store_packed_bool(addr, false) };
            }
            unsafe { store_packed_bool(addr, offset % 2 == 0) };
            println!("   Thread {} finished its byte", offset);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    print!("   Final flags:");
    for offset in 0..4 {
        let addr = unsafe { (word.flags.get() as *const bool).add(offset) };
        print!(" {}", unsafe { load_packed_bool(addr) });
    }
    println!();

    println!("\n=== Example completed ===");
}
