//! Both queues serialize as a plain sequence in FIFO order.
//!
//! Deserializing a `CyclicQueue` yields a full queue sized to the sequence,
//! the same shape [`CyclicQueue::from_slice`] produces.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{CyclicQueue, NodeQueue};

impl<T: Serialize> Serialize for CyclicQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CyclicQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(CyclicQueue::from)
    }
}

impl<T: Serialize> Serialize for NodeQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NodeQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(NodeQueue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_queue_serializes_front_to_back() {
        let mut queue = CyclicQueue::with_capacity(2).unwrap();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.dequeue().unwrap();
        queue.enqueue(3);

        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, "[2,3]");

        let back: CyclicQueue<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, queue);
        assert!(back.is_full());
    }

    #[test]
    fn node_queue_serializes_front_to_back() {
        let queue: NodeQueue<_> = vec!["a".to_string(), "b".to_string()].into();
        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, r#"["a","b"]"#);

        let back: NodeQueue<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, queue);
    }

    #[test]
    fn empty_sequence() {
        let back: CyclicQueue<u8> = serde_json::from_str("[]").unwrap();
        assert!(back.is_empty());
        assert_eq!(back.capacity(), 1);
    }
}
