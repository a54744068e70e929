//! The growable circular-buffer queue.

use std::slice;

use tracing::debug;

use crate::error::{QueueError, Result};
use crate::utils::*;

mod internal;
mod iterator_impls;
mod trait_impls;

/// Capacity used by [`CyclicQueue::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// `CyclicQueue` is a growable FIFO ring buffer.
///
/// Elements live in a contiguous backing store whose occupied region may wrap
/// around the physical end of the store. `head` indexes the oldest element and
/// the element count is tracked explicitly, so a completely full store is never
/// mistaken for an empty one.
///
/// When an `enqueue` finds the store full, the store is doubled: the occupied
/// window is moved, in order, to the front of a fresh store and the new element
/// is written right after it. The queue never shrinks.
///
/// # Examples
///
/// ```
/// use cyclic_queue::CyclicQueue;
///
/// let mut queue = CyclicQueue::with_capacity(2).unwrap();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// queue.enqueue(3);
/// assert_eq!(queue.capacity(), 4);
///
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.peek(), Ok(&2));
/// ```
pub struct CyclicQueue<T> {
    ring: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

/// `CyclicQueue` iterator.
///
/// The traversal window (head position and length) is captured when the
/// iterator is created; the shared borrow it holds keeps the queue from being
/// mutated until the iterator is dropped.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [Option<T>],
    head: usize,
    len: usize,
}

/// `CyclicQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, Option<T>>,
    back: slice::IterMut<'a, Option<T>>,
}

/// A by-value `CyclicQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: CyclicQueue<T>,
}

impl<T> CyclicQueue<T> {
    /// Creates an empty `CyclicQueue` with room for [`DEFAULT_CAPACITY`]
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let queue: CyclicQueue<u8> = CyclicQueue::new();
    /// assert_eq!(queue.capacity(), 8);
    /// ```
    #[inline]
    pub fn new() -> CyclicQueue<T> {
        CyclicQueue::alloc(DEFAULT_CAPACITY)
    }

    /// Creates an empty `CyclicQueue` with room for `capacity` elements.
    ///
    /// Fails with [`QueueError::InvalidCapacity`] when `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{CyclicQueue, QueueError};
    ///
    /// let queue: CyclicQueue<u8> = CyclicQueue::with_capacity(3).unwrap();
    /// assert_eq!(queue.capacity(), 3);
    ///
    /// let err = CyclicQueue::<u8>::with_capacity(0).err();
    /// assert_eq!(err, Some(QueueError::InvalidCapacity(0)));
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<CyclicQueue<T>> {
        if capacity == 0 {
            debug!(capacity, "rejected cyclic queue capacity");
            return Err(QueueError::InvalidCapacity(capacity));
        }
        Ok(CyclicQueue::alloc(capacity))
    }

    /// Creates a full `CyclicQueue` holding deep copies of `elements`, in
    /// order.
    ///
    /// The backing store is sized exactly to the input, so the next `enqueue`
    /// grows it. An empty input yields an empty queue with capacity 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let source = vec![String::from("a"), String::from("b")];
    /// let queue = CyclicQueue::from_slice(&source);
    /// assert!(queue.is_full());
    /// assert_eq!(queue.peek().unwrap(), "a");
    /// ```
    pub fn from_slice(elements: &[T]) -> CyclicQueue<T>
        where T: Clone
    {
        CyclicQueue::from_full(elements.iter().cloned().map(Some).collect())
    }

    /// Appends an element at the back of the queue, doubling the backing store
    /// first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue = CyclicQueue::with_capacity(1).unwrap();
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.capacity(), 2);
    /// ```
    pub fn enqueue(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        let slot = self.wrap_add(self.tail(), 1);
        self.buffer_write(slot, element);
        self.len += 1;
    }

    /// Removes the oldest element and returns it.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{CyclicQueue, QueueError};
    ///
    /// let mut queue: CyclicQueue<_> = vec![1, 2].into();
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    /// ```
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let head = self.head;
        let element = self.buffer_take(head)?;
        self.head = self.wrap_add(head, 1);
        self.len -= 1;
        Ok(element)
    }

    /// Returns the oldest element without removing it.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let queue: CyclicQueue<_> = vec![7, 8].into();
    /// assert_eq!(queue.peek(), Ok(&7));
    /// assert_eq!(queue.peek(), Ok(&7));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn peek(&self) -> Result<&T> {
        self.get(0).ok_or(QueueError::EmptyQueue)
    }

    /// Returns a mutable reference to the oldest element.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.get_mut(0).ok_or(QueueError::EmptyQueue)
    }

    /// Retrieves an element by its position in the queue.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue = CyclicQueue::with_capacity(3).unwrap();
    /// queue.enqueue(3);
    /// queue.enqueue(4);
    /// queue.enqueue(5);
    /// assert_eq!(queue.get(1), Some(&4));
    /// assert_eq!(queue.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            self.ring[idx].as_ref()
        } else {
            None
        }
    }

    /// Retrieves an element mutably by its position in the queue.
    ///
    /// Element at index 0 is the front of the queue.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            self.ring[idx].as_mut()
        } else {
            None
        }
    }

    /// Number of elements the backing store holds before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.len()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue = CyclicQueue::new();
    /// assert!(queue.is_empty());
    /// queue.enqueue(1);
    /// assert!(!queue.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the next `enqueue` will grow the backing store.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue = CyclicQueue::with_capacity(2).unwrap();
    /// queue.enqueue(1);
    /// assert!(!queue.is_full());
    /// queue.enqueue(2);
    /// assert!(queue.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Removes every element. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in self.ring.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue = CyclicQueue::with_capacity(3).unwrap();
    /// queue.enqueue(5);
    /// queue.enqueue(3);
    /// queue.dequeue().unwrap();
    /// queue.enqueue(4);
    /// queue.enqueue(6);
    /// let c: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(c, [&3, &4, &6]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: &self.ring,
            head: self.head,
            len: self.len,
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue: CyclicQueue<_> = vec![5, 3, 4].into();
    /// for num in queue.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), [&3, &1, &2]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Returns an owning iterator over a copy of the current contents.
    ///
    /// The copy is independent of the queue, so the queue can be mutated
    /// while the snapshot is consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::CyclicQueue;
    ///
    /// let mut queue: CyclicQueue<_> = vec![1, 2].into();
    /// let snapshot = queue.snapshot();
    /// queue.enqueue(3);
    /// assert_eq!(snapshot.collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn snapshot(&self) -> IntoIter<T>
        where T: Clone
    {
        self.clone().into_iter()
    }
}
