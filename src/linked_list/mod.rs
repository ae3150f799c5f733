//! A singly linked chain of heap nodes that borrow their payloads.
//!
//! The chain owns its nodes but never the data they point at: every node holds a
//! `&'a T` handed in by the caller, so the payload must outlive the node that
//! references it. There is no list object; the head node is the list, and the
//! caller keeps it in a [`chain::Chain`] handle (`None` is the empty list).
//!
//! # Examples
//!
//! ```
//! use mola_sll::linked_list::chain::{self, Chain, ChainError, Node};
//!
//! let (a, b, c) = ("a", "b", "c");
//!
//! let mut head: Chain<'_, str> = Some(Node::new(Some(a)).unwrap());
//! chain::insert_back(head.as_deref_mut(), Some(b)).unwrap();
//! chain::insert_back(head.as_deref_mut(), Some(c)).unwrap();
//! assert_eq!(chain::size(head.as_deref()), 3);
//!
//! chain::remove_by_value(&mut head, Some(b"b".as_slice()), 1).unwrap();
//! let values: Vec<_> = head
//!     .as_deref()
//!     .unwrap()
//!     .payloads()
//!     .flatten()
//!     .collect();
//! assert_eq!(values, vec!["a", "c"]);
//!
//! chain::remove_front(&mut head).unwrap();
//! assert_eq!(head.as_deref().and_then(Node::payload), Some("c"));
//!
//! assert_eq!(chain::at(head.as_deref(), 1).map(Node::payload), None);
//! assert_eq!(chain::remove_at(&mut head, 4), Err(ChainError::IndexOutOfRange(4)));
//!
//! chain::destroy(&mut head).unwrap();
//! assert!(head.is_none());
//! ```
pub mod chain;
