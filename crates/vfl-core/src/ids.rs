//! Symbol id allocation.
//!
//! Every fragment built against the same [`IdAllocator`] draws its symbol ids
//! from one counter, so fragments built independently never collide when they
//! are merged. The allocator is owned by the caller: a fresh allocator (or a
//! [`reset`](IdAllocator::reset)) gives reproducible symbol names.

use std::cell::Cell;

/// Monotonic id counter shared by all fragments of one layout session.
///
/// Uses a [`Cell`], so it can be shared by reference while fragments are
/// composed. It is `!Sync`; layout construction is single-threaded.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: Cell<u32>,
}

impl IdAllocator {
    /// Create an allocator starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next id and advance the counter.
    pub fn allocate(&self) -> u32 {
        self.allocate_block(1)
    }

    /// Reserve `count` consecutive ids and return the first one.
    ///
    /// A block of zero ids returns the next id without consuming it.
    ///
    /// Running past `u32::MAX` ids panics in debug builds. Release builds
    /// saturate, so every later id repeats `u32::MAX`.
    pub fn allocate_block(&self, count: u32) -> u32 {
        let first = self.next.get();
        let next = first.checked_add(count);
        debug_assert!(next.is_some(), "symbol ids exhausted");
        self.next.set(next.unwrap_or(u32::MAX));
        first
    }

    /// The id the next allocation will return.
    pub fn peek(&self) -> u32 {
        self.next.get()
    }

    /// Rewind the counter to 0.
    pub fn reset(&self) {
        tracing::trace!(previous = self.next.get(), "resetting symbol ids");
        self.next.set(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_is_monotonic() {
        let ids = IdAllocator::new();
        assert_eq!(ids.allocate(), 0);
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_allocate_block() {
        let ids = IdAllocator::new();
        ids.allocate();
        assert_eq!(ids.allocate_block(3), 1);
        assert_eq!(ids.allocate(), 4);
        assert_eq!(ids.allocate_block(0), 5);
        assert_eq!(ids.allocate(), 5);
    }

    #[test]
    fn test_allocate_up_to_the_last_id() {
        let ids = IdAllocator::new();
        assert_eq!(ids.allocate_block(u32::MAX - 1), 0);
        assert_eq!(ids.allocate(), u32::MAX - 1);
        assert_eq!(ids.peek(), u32::MAX);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "symbol ids exhausted")]
    fn test_exhausted_ids_panic_in_debug() {
        let ids = IdAllocator::new();
        ids.allocate_block(u32::MAX);
        ids.allocate();
    }

    #[test]
    fn test_reset_restarts_at_zero() {
        let ids = IdAllocator::new();
        for _ in 0..10 {
            ids.allocate();
        }
        ids.reset();
        assert_eq!(ids.allocate(), 0);
    }
}
