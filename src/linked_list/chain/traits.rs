use alloc::boxed::Box;

use super::node::{Chain, Node};

/// An owning successor slot.
///
/// Both a [`Node`] (through its `next` field) and the caller's [`Chain`] handle own
/// the node that follows them. Treating the handle as a link lets head and
/// mid-chain splices share one code path.
pub trait Link<'a, T: ?Sized + 'a> {
    /// The slot holding the node that follows this link.
    fn link_mut(&mut self) -> &mut Chain<'a, T>;

    /// Splices a detached `node` directly behind this link.
    ///
    /// The previous follower becomes the successor of `node`, so `node` must not
    /// carry a suffix of its own. Returns the node in its new position.
    fn splice(&mut self, mut node: Box<Node<'a, T>>) -> &mut Node<'a, T> {
        debug_assert!(node.is_tail(), "Spliced node must be detached");
        let slot = self.link_mut();
        node.next = slot.take();
        &mut **slot.insert(node)
    }

    /// Detaches the node directly behind this link.
    ///
    /// The detached node's successor takes its place, so exactly one node leaves
    /// the chain. The returned node is a tail and frees only itself when dropped.
    fn unlink(&mut self) -> Option<Box<Node<'a, T>>> {
        let slot = self.link_mut();
        let mut detached = slot.take()?;
        *slot = detached.next.take();
        Some(detached)
    }
}

impl<'a, T: ?Sized + 'a> Link<'a, T> for Node<'a, T> {
    #[inline]
    fn link_mut(&mut self) -> &mut Chain<'a, T> {
        &mut self.next
    }
}

impl<'a, T: ?Sized + 'a> Link<'a, T> for Chain<'a, T> {
    #[inline]
    fn link_mut(&mut self) -> &mut Chain<'a, T> {
        self
    }
}
