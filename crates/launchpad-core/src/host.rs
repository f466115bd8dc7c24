//! Identity allocation supplied by the host environment

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::ObjectId;

/// Produces a fresh, never reused identity for each created object
pub trait IdAllocator: Send + Sync {
    fn fresh_id(&self) -> ObjectId;
}

/// Monotonic counter starting at 1
#[derive(Debug)]
pub struct SequentialIdAllocator {
    next: AtomicU64,
}

impl SequentialIdAllocator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn fresh_id(&self) -> ObjectId {
        ObjectId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
