//! Block queue module - upcoming blocks in FIFO order.
//!
//! The queue backs the "next blocks" preview and the spawn path. Blocks are
//! appended at the back as they are generated and removed from the front
//! when spawned; the preview reads the front without removing anything.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::block::Block;

/// Upper bound for `preview` copies. The queue's steady-state length is the
/// configured preview count (default 3) plus at most one in-flight refill.
pub const PREVIEW_MAX: usize = 8;

/// `dequeue()` was called on an empty queue.
///
/// The spawn path refills the queue before reading, so this never reaches
/// the player; it marks a broken refill discipline.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("dequeue() called on an empty block queue")]
pub struct EmptyQueueError;

/// FIFO of pending blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockQueue {
    blocks: VecDeque<Block>,
}

impl BlockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the back. O(1).
    pub fn enqueue(&mut self, block: Block) {
        self.blocks.push_back(block);
    }

    /// Remove and return the front block. O(1).
    pub fn dequeue(&mut self) -> Result<Block, EmptyQueueError> {
        self.blocks.pop_front().ok_or(EmptyQueueError)
    }

    pub fn peek_front(&self) -> Option<&Block> {
        self.blocks.front()
    }

    /// Copy out the first `n` blocks in FIFO order without removing any.
    pub fn preview(&self, n: usize) -> ArrayVec<Block, PREVIEW_MAX> {
        self.blocks.iter().take(n.min(PREVIEW_MAX)).copied().collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}
