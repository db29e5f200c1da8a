// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::config::{DefaultConfig, ScratchConfig};

/// Growable stack of bytes used to assemble decoded string content.
///
/// Bytes are staged with [`push`](Self::push)/[`put`](Self::put) and taken
/// back with [`pop`](Self::pop). A failed partial write is undone with
/// [`truncate`](Self::truncate) back to the `top` recorded before it began.
///
/// The backing storage is allocated lazily with `C::INITIAL_CAPACITY` bytes
/// and grows by 1.5x whenever a push would reach the current capacity.
/// Dropping the buffer releases it.
#[derive(Debug)]
pub struct ScratchBuffer<C: ScratchConfig = DefaultConfig> {
    /// Physical storage; its length is the allocated size
    stack: Vec<u8>,
    /// Number of bytes currently in use
    top: usize,
    _config: PhantomData<C>,
}

impl<C: ScratchConfig> ScratchBuffer<C> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            top: 0,
            _config: PhantomData,
        }
    }

    /// Bytes currently in use.
    pub fn top(&self) -> usize {
        self.top
    }

    /// Bytes currently allocated.
    pub fn size(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Reserves `n` bytes on top of the stack and returns them for writing.
    pub fn push(&mut self, n: usize) -> &mut [u8] {
        let start = self.top;
        let end = start.saturating_add(n);
        if end >= self.size() {
            self.grow(end);
        }
        self.top = end;
        self.stack.get_mut(start..end).unwrap_or_default()
    }

    /// Pushes a single byte.
    pub fn put(&mut self, byte: u8) {
        if let Some(slot) = self.push(1).first_mut() {
            *slot = byte;
        }
    }

    /// Pushes a run of bytes.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let region = self.push(bytes.len());
        for (dst, &src) in region.iter_mut().zip(bytes.iter()) {
            *dst = src;
        }
    }

    /// Removes the top `n` bytes and returns them.
    ///
    /// The returned slice stays valid until the next push.
    pub fn pop(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.top, "pop of {n} bytes with top {}", self.top);
        let n = n.min(self.top);
        let end = self.top;
        self.top -= n;
        self.stack.get(self.top..end).unwrap_or_default()
    }

    /// Rolls `top` back to `head`, discarding everything staged after it.
    pub fn truncate(&mut self, head: usize) {
        debug_assert!(head <= self.top, "rollback to {head} above top {}", self.top);
        self.top = head.min(self.top);
    }

    /// Grows the storage so that `required` is strictly below its size.
    fn grow(&mut self, required: usize) {
        let mut size = if self.stack.is_empty() {
            C::INITIAL_CAPACITY
        } else {
            self.stack.len()
        };
        while required >= size {
            let next = size.saturating_add(size >> 1);
            if next == size {
                break;
            }
            size = next;
        }
        log::trace!("ScratchBuffer: growing {} -> {} bytes", self.stack.len(), size);
        self.stack.resize(size, 0);
    }
}

impl<C: ScratchConfig> Default for ScratchBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}
