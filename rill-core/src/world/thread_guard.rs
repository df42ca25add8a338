//! Single-writer contract for world mutation.

use std::marker::PhantomData;
use std::thread::{self, ThreadId};

/// Marks the thread that owns a world's update loop.
///
/// The guard is neither `Send` nor `Sync`, so anything holding it stays on the
/// thread that created it. Entry points additionally assert the calling thread
/// in debug builds.
#[derive(Debug)]
pub struct WorldThread {
    owner: ThreadId,
    _not_send: PhantomData<*const ()>,
}

impl WorldThread {
    /// Binds a guard to the calling thread.
    #[must_use]
    pub fn current() -> Self {
        Self {
            owner: thread::current().id(),
            _not_send: PhantomData,
        }
    }

    /// Returns true if called from the owning thread.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Debug-asserts that the caller runs on the owning thread.
    #[inline]
    #[track_caller]
    pub fn assert_current(&self) {
        debug_assert!(
            self.is_current(),
            "world mutated off its update thread (owner {:?}, caller {:?})",
            self.owner,
            thread::current().id()
        );
    }
}
