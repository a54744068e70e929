#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Physical index of the newest element of a window of `len` elements
/// starting at `head`. An empty window reports the slot just before `head`.
#[inline]
pub fn last_index(head: usize, len: usize, capacity: usize) -> usize {
    debug_assert!(len <= capacity);
    if len == 0 {
        wrap_sub(head, 1, capacity)
    } else {
        wrap_add(head, len - 1, capacity)
    }
}
