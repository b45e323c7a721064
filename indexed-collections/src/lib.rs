//! Classic in-memory collections, centred on an indexed priority queue.
//!
//! A plain binary heap answers "what comes next?" in O(log n) but has to scan
//! the whole array to find or remove an arbitrary value. This crate's
//! [`IndexedPriorityQueue`] pairs the heap array with a position index that
//! maps each value to the slots holding it:
//!
//! ```text
//! HeapArray      [ -2 ,  0 ,  40 ,  23 ,  5 ]     complete binary tree
//! PositionIndex  { -2: {0}, 0: {1}, 40: {2}, 23: {3}, 5: {4} }
//! ```
//!
//! Every swap made while sinking or swimming updates both sides in one step,
//! so `contains` is O(1) and `remove(&value)` is O(log n), duplicates included.
//!
//! # Quick Start
//!
//! ```
//! use indexed_collections::IndexedPriorityQueue;
//!
//! let mut pq: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new();
//! pq.extend([23, 5, 40, -2, 0]);
//!
//! assert!(pq.contains(&40));
//! assert_eq!(pq.remove(&40), Ok(40));
//!
//! assert_eq!(pq.into_sorted_vec(), Ok(vec![-2, 0, 5, 23]));
//! ```
//!
//! # Data Structures
//!
//! | Structure | Use Case | Key Operations |
//! |-----------|----------|----------------|
//! | [`IndexedPriorityQueue`] | Schedulers, Dijkstra, A* | O(log n) push/poll/remove, O(1) contains |
//! | [`DoublyLinkedList`] | Deques, backing store | O(1) prepend/append/remove at ends |
//! | [`Stack`] | Undo, bracket matching | O(1) push/pop |
//! | [`Queue`] | FIFO buffers, BFS | O(1) enqueue/dequeue |
//! | [`DynamicArray`] | Indexed storage | O(1) get/set/add |
//!
//! # Ordering
//!
//! The priority relation is a type parameter: [`MinOrder`] (default) serves the
//! smallest value first, [`MaxOrder`] the largest.
//!
//! # Errors
//!
//! Every fallible operation returns [`Error`]. Caller mistakes (`Empty`,
//! `OutOfRange`, `NotFound`) are rejected before any mutation. `Inconsistent`
//! reports a divergence between the heap and its index and indicates a bug.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: `trace` for per-removal
//! rebalancing, `debug` for bulk operations, `error` when a divergence is
//! detected. No logger is installed by this crate.

#![warn(missing_docs)]

pub mod array;
pub mod brackets;
pub mod error;
pub mod heap;
pub mod key;
pub mod list;
pub mod order;
mod positions;
pub mod pq;
pub mod queue;
pub mod stack;

pub use array::DynamicArray;
pub use error::Error;
pub use heap::HeapArray;
pub use key::Key;
pub use list::DoublyLinkedList;
pub use order::{MaxOrder, MinOrder, Order};
pub use pq::IndexedPriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
