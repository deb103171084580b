//! Shared search state threaded through every recursive `solve` call:
//! cancellation, worker throttling, and the search counter.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Condvar, Mutex};

/// A write-once, broadcast "stop searching" signal. Any number of readers
/// may poll it non-blockingly; it never unlatches once set.
#[derive(Debug, Default)]
pub struct CancellationLatch {
    flag: AtomicBool,
}

impl CancellationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    pub fn set(&self) {
        self.flag.store(true, Ordering::Release);
    }
}

/// A counting semaphore bounding live worker threads. Hand-rolled: no crate
/// in this crate's dependency stack supplies one.
#[derive(Debug)]
struct Semaphore {
    available: Mutex<usize>,
    released: Condvar,
}

impl Semaphore {
    fn new(capacity: usize) -> Self {
        Self {
            available: Mutex::new(capacity),
            released: Condvar::new(),
        }
    }

    fn acquire(&self) {
        let mut available = self.available.lock().expect("semaphore mutex poisoned");
        while *available == 0 {
            available = self
                .released
                .wait(available)
                .expect("semaphore mutex poisoned");
        }
        *available -= 1;
    }

    fn release(&self) {
        let mut available = self.available.lock().expect("semaphore mutex poisoned");
        *available += 1;
        self.released.notify_one();
    }
}

/// Created once per top-level `solve` call and threaded down by reference.
/// Workers spawned at the fan-out depth share the same context.
pub struct ParallelContext {
    /// Recursion depth at which candidates are dispatched to worker threads
    /// instead of recursed into in place. Zero means fully sequential.
    pub parallel_depth: usize,
    pub thread_limit: usize,
    pub cancelled: CancellationLatch,
    semaphore: Semaphore,
    searched: AtomicU64,
    success_claimed: Mutex<bool>,
}

impl ParallelContext {
    pub fn new(parallel_depth: usize, thread_limit: usize) -> Self {
        let thread_limit = thread_limit.max(1);
        Self {
            parallel_depth,
            thread_limit,
            cancelled: CancellationLatch::new(),
            semaphore: Semaphore::new(thread_limit),
            searched: AtomicU64::new(0),
            success_claimed: Mutex::new(false),
        }
    }

    pub fn sequential() -> Self {
        Self::new(0, 1)
    }

    /// Clamps a requested `parallel_depth` to `len(sequence) - 1`, the
    /// deepest depth at which there is still a recursive call left to fan
    /// out. A clamp to 0 degrades to sequential search.
    pub fn clamp_depth(parallel_depth: usize, sequence_len: usize) -> usize {
        if sequence_len == 0 {
            return 0;
        }
        parallel_depth.min(sequence_len - 1)
    }

    pub fn record_visit(&self) {
        self.searched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn boards_searched(&self) -> u64 {
        self.searched.load(Ordering::Relaxed)
    }

    pub fn acquire_worker_slot(&self) {
        self.semaphore.acquire();
    }

    pub fn release_worker_slot(&self) {
        self.semaphore.release();
    }

    /// Returns `true` for exactly one caller across the whole search: the
    /// first to observe success claims the render-and-cancel responsibility.
    pub fn claim_success(&self) -> bool {
        let mut claimed = self
            .success_claimed
            .lock()
            .expect("success guard poisoned");
        if *claimed {
            false
        } else {
            *claimed = true;
            true
        }
    }
}

/// The result of a complete `solve` call: whether the target was reached,
/// and how many board configurations were visited along the way.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub found: bool,
    pub boards_searched: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_latch_is_monotonic() {
        let latch = CancellationLatch::new();
        assert!(!latch.is_set());
        latch.set();
        assert!(latch.is_set());
    }

    #[test]
    fn success_is_claimed_exactly_once() {
        let ctx = ParallelContext::sequential();
        assert!(ctx.claim_success());
        assert!(!ctx.claim_success());
    }

    #[test]
    fn clamp_depth_never_exceeds_the_last_recursive_call() {
        assert_eq!(ParallelContext::clamp_depth(5, 3), 2);
        assert_eq!(ParallelContext::clamp_depth(0, 3), 0);
        assert_eq!(ParallelContext::clamp_depth(2, 0), 0);
    }
}
