use core::iter::FusedIterator;

use super::node::Node;

/// An iterator over the nodes of a chain, front to back.
pub struct Iter<'n, 'a, T: ?Sized> {
    current: Option<&'n Node<'a, T>>,
}

impl<'n, 'a, T: ?Sized> Iter<'n, 'a, T> {
    /// Creates an iterator starting at `head`.
    pub fn new(head: &'n Node<'a, T>) -> Self {
        Self {
            current: Some(head),
        }
    }
}

impl<'n, 'a, T: ?Sized> Iterator for Iter<'n, 'a, T> {
    type Item = &'n Node<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = current.next();
        })
    }
}

impl<T: ?Sized> FusedIterator for Iter<'_, '_, T> {}

impl<'n, 'a, T: ?Sized> IntoIterator for &'n Node<'a, T> {
    type Item = &'n Node<'a, T>;
    type IntoIter = Iter<'n, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// An iterator over the payload slots of a chain.
///
/// Yields `None` for a head emptied by [`clear`](super::ops::clear).
pub struct Payloads<'n, 'a, T: ?Sized> {
    nodes: Iter<'n, 'a, T>,
}

impl<'n, 'a, T: ?Sized> Payloads<'n, 'a, T> {
    pub fn new(head: &'n Node<'a, T>) -> Self {
        Self {
            nodes: Iter::new(head),
        }
    }
}

impl<'a, T: ?Sized> Iterator for Payloads<'_, 'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(Node::payload)
    }
}

impl<T: ?Sized> FusedIterator for Payloads<'_, '_, T> {}
