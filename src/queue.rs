//! The contract shared by every queue in this crate.

use crate::error::Result;

/// A first-in-first-out container.
///
/// Implemented by [`CyclicQueue`](crate::CyclicQueue) and
/// [`NodeQueue`](crate::NodeQueue), so code that only needs FIFO
/// semantics can be written once against either backing structure.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{CyclicQueue, FifoQueue, NodeQueue};
///
/// fn drain_all<Q: FifoQueue<u32>>(queue: &mut Q) -> Vec<u32> {
///     let mut out = Vec::new();
///     while let Ok(x) = queue.dequeue() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut cyclic: CyclicQueue<u32> = (1..4).collect();
/// let mut node: NodeQueue<u32> = (1..4).collect();
/// assert_eq!(drain_all(&mut cyclic), drain_all(&mut node));
/// ```
pub trait FifoQueue<T> {
    /// Appends an element at the back of the queue.
    fn enqueue(&mut self, element: T);

    /// Removes the element at the front of the queue and returns it.
    ///
    /// Fails with [`QueueError::EmptyQueue`](crate::QueueError::EmptyQueue)
    /// when there is nothing to remove.
    fn dequeue(&mut self) -> Result<T>;

    /// Returns the element at the front of the queue without removing it.
    ///
    /// Fails with [`QueueError::EmptyQueue`](crate::QueueError::EmptyQueue)
    /// when the queue is empty.
    fn peek(&self) -> Result<&T>;

    /// Number of elements currently queued.
    fn len(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);

    /// Returns `true` when the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
