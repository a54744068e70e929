use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Index, IndexMut};

use super::*;
use crate::queue::FifoQueue;

impl<T: Clone> Clone for CyclicQueue<T> {
    fn clone(&self) -> CyclicQueue<T> {
        CyclicQueue {
            ring: self.ring.clone(),
            head: self.head,
            len: self.len,
        }
    }
}

impl<T> Default for CyclicQueue<T> {
    #[inline]
    fn default() -> CyclicQueue<T> {
        CyclicQueue::new()
    }
}

impl<T> FifoQueue<T> for CyclicQueue<T> {
    #[inline]
    fn enqueue(&mut self, element: T) {
        CyclicQueue::enqueue(self, element)
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T> {
        CyclicQueue::dequeue(self)
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        CyclicQueue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        CyclicQueue::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        CyclicQueue::clear(self)
    }
}

/// Two queues are equal when they hold equal elements in the same order,
/// regardless of capacity or where the window sits in the backing store.
impl<T: PartialEq> PartialEq for CyclicQueue<T> {
    fn eq(&self, other: &CyclicQueue<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<'a, T: PartialEq> PartialEq<&'a [T]> for CyclicQueue<T> {
    fn eq(&self, other: &&'a [T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[cfg(test)]
impl<T: PartialEq> PartialEq<Vec<T>> for CyclicQueue<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == &other[..]
    }
}

impl<T: Eq> Eq for CyclicQueue<T> {}

impl<T: PartialOrd> PartialOrd for CyclicQueue<T> {
    fn partial_cmp(&self, other: &CyclicQueue<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for CyclicQueue<T> {
    #[inline]
    fn cmp(&self, other: &CyclicQueue<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for CyclicQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for CyclicQueue<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

impl<T> IndexMut<usize> for CyclicQueue<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("index out of bounds: the len is {} but the index is {}", len, index),
        }
    }
}

/// Takes ownership of the vector's elements; the queue starts full.
impl<T> From<Vec<T>> for CyclicQueue<T> {
    fn from(elements: Vec<T>) -> CyclicQueue<T> {
        CyclicQueue::from_full(elements.into_iter().map(Some).collect())
    }
}

impl<T> iter::FromIterator<T> for CyclicQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> CyclicQueue<T> {
        CyclicQueue::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> IntoIterator for CyclicQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a CyclicQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut CyclicQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `CyclicQueue` with an iterator, growing as often as needed.
impl<T> Extend<T> for CyclicQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CyclicQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
