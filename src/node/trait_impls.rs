use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;

use super::*;
use crate::queue::FifoQueue;

impl<T: Clone> Clone for NodeQueue<T> {
    fn clone(&self) -> NodeQueue<T> {
        NodeQueue {
            chain: self.chain.clone(),
        }
    }
}

impl<T> Default for NodeQueue<T> {
    #[inline]
    fn default() -> NodeQueue<T> {
        NodeQueue::new()
    }
}

impl<T> FifoQueue<T> for NodeQueue<T> {
    #[inline]
    fn enqueue(&mut self, element: T) {
        NodeQueue::enqueue(self, element)
    }

    #[inline]
    fn dequeue(&mut self) -> Result<T> {
        NodeQueue::dequeue(self)
    }

    #[inline]
    fn peek(&self) -> Result<&T> {
        NodeQueue::peek(self)
    }

    #[inline]
    fn len(&self) -> usize {
        NodeQueue::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        NodeQueue::clear(self)
    }
}

impl<T: PartialEq> PartialEq for NodeQueue<T> {
    fn eq(&self, other: &NodeQueue<T>) -> bool {
        self.chain == other.chain
    }
}

#[cfg(test)]
impl<T: PartialEq> PartialEq<Vec<T>> for NodeQueue<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for NodeQueue<T> {}

impl<T: PartialOrd> PartialOrd for NodeQueue<T> {
    fn partial_cmp(&self, other: &NodeQueue<T>) -> Option<Ordering> {
        self.chain.partial_cmp(&other.chain)
    }
}

impl<T: Ord> Ord for NodeQueue<T> {
    #[inline]
    fn cmp(&self, other: &NodeQueue<T>) -> Ordering {
        self.chain.cmp(&other.chain)
    }
}

impl<T: Hash> Hash for NodeQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain.hash(state);
    }
}

impl<T> From<Vec<T>> for NodeQueue<T> {
    fn from(elements: Vec<T>) -> NodeQueue<T> {
        elements.into_iter().collect()
    }
}

impl<T> iter::FromIterator<T> for NodeQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> NodeQueue<T> {
        NodeQueue {
            chain: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for NodeQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.chain.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a NodeQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut NodeQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> Extend<T> for NodeQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.chain.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
