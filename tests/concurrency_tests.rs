//! The operations share no state, so they can run on many threads at once
//! against the same input.

use optr::{copy, to, value, value_or};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const ITERATIONS: usize = 1_000;

#[test]
fn test_concurrent_reads_of_shared_pointer() {
    let shared = Some(to(String::from("shared")));

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ITERATIONS {
                    assert_eq!(value(&shared), "shared");
                    assert_eq!(value_or(&shared, String::new()), "shared");
                }
            });
        }
    });
}

#[test]
fn test_concurrent_copies_are_exclusive() {
    let shared = Arc::new(vec![1u32, 2, 3]);

    let copies: Vec<Box<Vec<u32>>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let shared = &shared;
                s.spawn(move || {
                    let mut mine = copy(shared).expect("Arc is always present");
                    mine.push(u32::try_from(i).unwrap());
                    mine
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(*shared, vec![1, 2, 3]);
    for (i, mine) in copies.iter().enumerate() {
        assert_eq!(mine.len(), 4);
        assert_eq!(mine[3], u32::try_from(i).unwrap());
    }
}

#[test]
fn test_results_move_across_threads() {
    let boxed = copy(Some(&42u64));
    let handle = thread::spawn(move || value(boxed));
    assert_eq!(handle.join().unwrap(), 42);
}
