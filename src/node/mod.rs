//! The linked-node queue.

use std::collections::linked_list;
use std::collections::LinkedList;

use crate::error::{QueueError, Result};

mod iterator_impls;
mod trait_impls;

/// `NodeQueue` is a FIFO queue backed by a doubly-linked chain of nodes.
///
/// Every `enqueue` allocates one node at the back of the chain and every
/// `dequeue` releases the node at the front, both in `O(1)`. There is no
/// capacity to manage.
///
/// # Examples
///
/// ```
/// use cyclic_queue::NodeQueue;
///
/// let mut queue: NodeQueue<_> = vec![1, 2, 3].into_iter().collect();
/// assert_eq!(queue.dequeue(), Ok(1));
/// queue.enqueue(9);
/// assert_eq!(queue.iter().collect::<Vec<_>>(), [&2, &3, &9]);
/// ```
pub struct NodeQueue<T> {
    chain: LinkedList<T>,
}

/// `NodeQueue` iterator borrowing the live chain.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: linked_list::Iter<'a, T>,
}

/// `NodeQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    inner: linked_list::IterMut<'a, T>,
}

/// A by-value `NodeQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: linked_list::IntoIter<T>,
}

impl<T> NodeQueue<T> {
    /// Creates an empty `NodeQueue`.
    #[inline]
    pub fn new() -> NodeQueue<T> {
        NodeQueue {
            chain: LinkedList::new(),
        }
    }

    /// Appends an element at the back of the queue.
    #[inline]
    pub fn enqueue(&mut self, element: T) {
        self.chain.push_back(element);
    }

    /// Removes the oldest element and returns it.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::{NodeQueue, QueueError};
    ///
    /// let mut queue = NodeQueue::new();
    /// queue.enqueue("a");
    /// assert_eq!(queue.dequeue(), Ok("a"));
    /// assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    /// ```
    #[inline]
    pub fn dequeue(&mut self) -> Result<T> {
        self.chain.pop_front().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the oldest element without removing it.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.chain.front().ok_or(QueueError::EmptyQueue)
    }

    /// Returns a mutable reference to the oldest element.
    ///
    /// Fails with [`QueueError::EmptyQueue`] when the queue is empty.
    #[inline]
    pub fn peek_mut(&mut self) -> Result<&mut T> {
        self.chain.front_mut().ok_or(QueueError::EmptyQueue)
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Removes every element, releasing all nodes.
    #[inline]
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Returns a front-to-back iterator over the live chain.
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            inner: self.chain.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        IterMut {
            inner: self.chain.iter_mut(),
        }
    }

    /// Returns an owning iterator over a copy of the chain taken now.
    ///
    /// Later changes to the queue are never observed by the snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::NodeQueue;
    ///
    /// let mut queue: NodeQueue<_> = (1..4).collect();
    /// let snapshot = queue.snapshot();
    /// queue.dequeue().unwrap();
    /// queue.enqueue(4);
    /// assert_eq!(snapshot.collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn snapshot(&self) -> IntoIter<T>
        where T: Clone
    {
        IntoIter {
            inner: self.chain.clone().into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_errors() {
        let mut tester: NodeQueue<i32> = NodeQueue::new();
        assert_eq!(tester.peek(), Err(QueueError::EmptyQueue));
        assert_eq!(tester.dequeue(), Err(QueueError::EmptyQueue));
        assert_eq!(tester.peek_mut(), Err(QueueError::EmptyQueue));
        assert!(tester.is_empty());
    }

    #[test]
    fn linked_scenario() {
        let mut tester: NodeQueue<_> = vec![1, 2, 3].into();
        assert_eq!(tester.dequeue(), Ok(1));
        assert_eq!(tester.iter().collect::<Vec<_>>(), [&2, &3]);
        tester.enqueue(9);
        assert_eq!(tester.iter().collect::<Vec<_>>(), [&2, &3, &9]);
        assert_eq!(tester.len(), 3);
    }

    #[test]
    fn enqueue_after_initial_elements() {
        let mut tester: NodeQueue<_> = vec![1, 2, 3].into();
        tester.enqueue(13);
        assert_eq!(tester, vec![1, 2, 3, 13]);
    }

    #[test]
    fn peek_front() {
        let mut tester: NodeQueue<_> = vec![1, 15, 23, 543].into();
        assert_eq!(tester.peek(), Ok(&1));
        *tester.peek_mut().unwrap() = 2;
        assert_eq!(tester.peek(), Ok(&2));
        assert_eq!(tester.len(), 4);
    }

    #[test]
    fn heterogeneous_elements() {
        #[derive(Debug, Clone, PartialEq)]
        enum Value {
            List(Vec<Value>),
            Text(String),
            Int(i64),
        }

        let mut tester: NodeQueue<_> =
            vec![Value::List(vec![]), Value::Text("Good day!".into()), Value::Int(13)].into();
        assert_eq!(tester.dequeue(), Ok(Value::List(vec![])));
        assert_eq!(tester, vec![Value::Text("Good day!".into()), Value::Int(13)]);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut tester: NodeQueue<_> = (1..4).collect();
        let snapshot = tester.snapshot();
        tester.clear();
        tester.enqueue(7);
        assert_eq!(snapshot.collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(tester, vec![7]);
    }

    #[test]
    fn snapshot_is_restartable() {
        let mut tester: NodeQueue<_> = (1..3).collect();
        let first: Vec<_> = tester.snapshot().collect();
        tester.enqueue(3);
        let second: Vec<_> = tester.snapshot().collect();
        assert_eq!(first, [1, 2]);
        assert_eq!(second, [1, 2, 3]);
    }
}
