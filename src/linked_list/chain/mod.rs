//! # Node Chain
//!
//! Owned, forward-only chain of [`Node`]s.
//!
//! ## Core Components
//!
//! - [`node::Node`]: a payload borrow plus the owning link to the successor.
//! - [`traits::Link`]: the owning successor slot, shared by a node and by the head handle.
//! - [`ops`]: the free functions that create, walk, splice and destroy chains.
//! - [`iter::Iter`]: forward traversal over the nodes of a chain.
//!
//! ## Ownership
//!
//! - Node storage belongs to the chain; dropping a node frees its whole suffix.
//! - Payloads are borrowed and never freed, copied or constructed by the chain.
//! - A node is owned by exactly one link: either its predecessor's `next` or the
//!   caller's [`Chain`] handle.
//!
//! Operations that can replace the head take the handle as `&mut Chain`. The rest
//! take `Option<&Node>` or `Option<&mut Node>`, where `None` is reported as
//! [`ChainError::NullArgument`].

pub mod error;
pub mod iter;
pub mod node;
pub mod ops;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::{ChainError, Result};
pub use iter::{Iter, Payloads};
pub use node::{Chain, Node};
#[allow(deprecated)]
pub use ops::{
    at, at_mut, clear, destroy, for_each, from_payloads, insert_after, insert_at, insert_back,
    insert_front, last, last_mut, new, push_back, push_back_node, remove_at, remove_back,
    remove_by_value, remove_front, set, size,
};
pub use traits::Link;
