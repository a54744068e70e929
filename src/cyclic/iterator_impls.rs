use std::iter::FusedIterator;

use super::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter {
            ring: self.ring,
            head: self.head,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let ring = self.ring;
        let slot = &ring[self.head];
        debug_assert!(slot.is_some());
        self.head = wrap_add(self.head, 1, ring.len());
        self.len -= 1;
        slot.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let ring = self.ring;
        let tail = last_index(self.head, self.len, ring.len());
        self.len -= 1;
        ring[tail].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let back = &mut self.back;
        self.front
            .next()
            .or_else(|| back.next())
            .and_then(Option::as_mut)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let front = &mut self.front;
        self.back
            .next_back()
            .or_else(|| front.next_back())
            .and_then(Option::as_mut)
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.dequeue_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped() -> CyclicQueue<i32> {
        // [4 5 | 1 2 3]
        let mut queue = CyclicQueue::with_capacity(5).unwrap();
        queue.extend(vec![0, 0, 1, 2, 3]);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(4);
        queue.enqueue(5);
        queue
    }

    #[test]
    fn iter_walks_wrapped_window() {
        let queue = wrapped();
        assert_eq!(queue.iter().collect::<Vec<_>>(), [&1, &2, &3, &4, &5]);
        assert_eq!(queue.iter().rev().collect::<Vec<_>>(), [&5, &4, &3, &2, &1]);
    }

    #[test]
    fn iter_is_restartable() {
        let queue = wrapped();
        let first: Vec<_> = queue.iter().collect();
        let second: Vec<_> = queue.iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let queue = wrapped();
        let mut it = queue.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_on_empty() {
        let queue: CyclicQueue<i32> = CyclicQueue::new();
        assert_eq!(queue.iter().next(), None);
        assert_eq!(queue.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn iter_clone_keeps_position() {
        let queue = wrapped();
        let mut it = queue.iter();
        it.next();
        let copy = it.clone();
        assert_eq!(it.collect::<Vec<_>>(), copy.collect::<Vec<_>>());
    }

    #[test]
    fn iter_mut_walks_wrapped_window() {
        let mut queue = wrapped();
        assert_eq!(queue.iter_mut().len(), 5);
        for x in queue.iter_mut() {
            *x *= 10;
        }
        assert_eq!(queue, vec![10, 20, 30, 40, 50]);

        let mut it = queue.iter_mut();
        assert_eq!(it.next_back(), Some(&mut 50));
        assert_eq!(it.next(), Some(&mut 10));
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn into_iter_both_ends() {
        let mut it = wrapped().into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.len(), 3);
        assert_eq!(it.collect::<Vec<_>>(), [2, 3, 4]);
    }
}
