use std::iter;
use std::mem;

use tracing::trace;

use super::CyclicQueue;
use crate::error::{QueueError, Result};
use crate::utils::*;

impl<T> CyclicQueue<T> {
    /// Allocates an empty store of `capacity` slots.
    pub(super) fn alloc(capacity: usize) -> CyclicQueue<T> {
        debug_assert!(capacity > 0);
        CyclicQueue {
            ring: empty_slots(capacity),
            head: 0,
            len: 0,
        }
    }

    /// Adopts a store whose every slot is occupied. An empty store is
    /// replaced by a single free slot.
    pub(super) fn from_full(ring: Box<[Option<T>]>) -> CyclicQueue<T> {
        if ring.is_empty() {
            return CyclicQueue::alloc(1);
        }
        debug_assert!(ring.iter().all(Option::is_some));
        let len = ring.len();
        CyclicQueue { ring, head: 0, len }
    }

    #[inline]
    pub(super) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    /// Physical index of the newest element.
    #[inline]
    pub(super) fn tail(&self) -> usize {
        last_index(self.head, self.len, self.capacity())
    }

    #[inline]
    pub(super) fn buffer_write(&mut self, slot: usize, element: T) {
        debug_assert!(self.ring[slot].is_none(), "overwriting live slot {}", slot);
        self.ring[slot] = Some(element);
    }

    #[inline]
    pub(super) fn buffer_take(&mut self, slot: usize) -> Result<T> {
        self.ring[slot].take().ok_or(QueueError::EmptyQueue)
    }

    /// Removes the newest element.
    pub(super) fn dequeue_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail();
        let element = self.buffer_take(tail).ok()?;
        self.len -= 1;
        Some(element)
    }

    /// Splits the occupied window into the run from `head` to the physical
    /// end of the store and the run that wrapped around to its start.
    pub(super) fn as_mut_slices(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let head = self.head;
        let len = self.len;
        let capacity = self.capacity();

        if head + len <= capacity {
            let (_, buf) = self.ring.split_at_mut(head);
            let (front, rest) = buf.split_at_mut(len);
            (front, &mut rest[..0])
        } else {
            let (left, right) = self.ring.split_at_mut(head);
            let wrapped = head + len - capacity;
            let (back, _) = left.split_at_mut(wrapped);
            (right, back)
        }
    }

    /// Doubles the backing store, moving the occupied window to its front.
    pub(super) fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        trace!(len = self.len, old_capacity, new_capacity, "growing cyclic queue");

        // T = tail; H = head
        //
        //    T H          H     T
        // [C D A B]  ->  [A B C D _ _ _ _]
        //
        let mut old = mem::replace(&mut self.ring, empty_slots(new_capacity));
        let head = self.head;
        let window = (head..old_capacity).chain(0..head).take(self.len);
        for (dst, src) in window.enumerate() {
            self.ring[dst] = old[src].take();
        }
        self.head = 0;
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}
