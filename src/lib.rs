//! FIFO queues in two flavours: a growable circular buffer and a linked chain
//! of nodes.
//!
//! [`CyclicQueue`] keeps its elements in one contiguous backing store and lets
//! the occupied window wrap around the end of it. Enqueue and dequeue are
//! `O(1)`; an enqueue into a full store doubles it first (`O(n)`, amortized
//! `O(1)`). The store never shrinks.
//!
//! [`NodeQueue`] allocates one node per element. It never relocates anything,
//! at the price of an allocation per enqueue.
//!
//! Both implement [`FifoQueue`], `IntoIterator`, `FromIterator` and `Extend`.
//!
//! Neither type synchronizes internally. Mutation requires `&mut self`, so
//! sharing a queue between threads needs an external lock.
//!
//! # Feature Flags
//! The **cyclic-queue** crate has the following cargo feature flags:
//!
//! - `serde`
//!   - Optional
//!   - Implement `Serialize` and `Deserialize` for both queues, as a plain
//!     sequence in FIFO order.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cyclic-queue = "0.1"
//! ```
//!
//! # Capacity
//!
//! A `CyclicQueue` holds exactly `capacity()` elements before it grows. A
//! queue built from a collection is created full, sized to that collection.
//!
//! # Examples
//! ```
//! use cyclic_queue::{CyclicQueue, QueueError};
//!
//! let mut queue = CyclicQueue::with_capacity(2).unwrap();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//! assert_eq!(queue.capacity(), 4);
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Ok(3));
//! assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
//! ```
//!
//! # Iterator
//! ```
//! use cyclic_queue::NodeQueue;
//!
//! let mut queue: NodeQueue<_> = (1..4).collect();
//! let snapshot = queue.snapshot();
//! queue.enqueue(4);
//!
//! assert_eq!(snapshot.collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(queue.iter().count(), 4);
//! ```

#![deny(missing_docs)]

mod utils;
mod queue;
pub mod error;
pub mod cyclic;
pub mod node;
#[cfg(feature = "serde")]
mod serde_impls;

pub use cyclic::{CyclicQueue, DEFAULT_CAPACITY};
pub use error::{QueueError, Result};
pub use node::NodeQueue;
pub use queue::FifoQueue;
