use alloc::alloc::{self as heap, Layout};
use alloc::boxed::Box;
use core::fmt;
use core::ptr::NonNull;

use super::error::{ChainError, Result};
use super::iter::{Iter, Payloads};

/// The caller's handle on a chain: the owned head node, or `None` for an empty list.
pub type Chain<'a, T> = Option<Box<Node<'a, T>>>;

/// A node in a singly linked chain.
///
/// The node owns its successor but only borrows its payload. `payload` is `None`
/// only after [`clear`](super::ops::clear) emptied the head in place.
pub struct Node<'a, T: ?Sized> {
    pub(crate) payload: Option<&'a T>,
    pub(crate) next: Chain<'a, T>,
}

impl<'a, T: ?Sized> Node<'a, T> {
    /// Allocates a detached node holding `payload`.
    ///
    /// Fails with [`ChainError::NullArgument`] when `payload` is `None` and with
    /// [`ChainError::AllocationFailure`] when the allocator refuses the request.
    pub fn new(payload: Option<&'a T>) -> Result<Box<Self>> {
        let payload = payload.ok_or(ChainError::NullArgument)?;
        try_box(Node {
            payload: Some(payload),
            next: None,
        })
    }

    /// The payload this node points at.
    #[inline]
    pub fn payload(&self) -> Option<&'a T> {
        self.payload
    }

    #[inline]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }

    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Self> {
        self.next.as_deref_mut()
    }

    /// Is this the last node of its chain?
    #[inline]
    pub fn is_tail(&self) -> bool {
        self.next.is_none()
    }

    /// Iterates over this node and every node behind it.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter::new(self)
    }

    /// Iterates over the payload slots from this node onwards.
    pub fn payloads(&self) -> Payloads<'_, 'a, T> {
        Payloads::new(self)
    }
}

impl<'a, T: ?Sized> Drop for Node<'a, T> {
    fn drop(&mut self) {
        free_chain(self.next.take());
        #[cfg(test)]
        freed::record();
    }
}

impl<'a, T> fmt::Debug for Node<'a, T>
where
    T: ?Sized + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.payloads()).finish()
    }
}

/// Frees every node of `chain` front to back and returns how many were freed.
///
/// Each node is cut from its successor before it is dropped, so the depth of the
/// drop never grows with the length of the chain.
pub(crate) fn free_chain<T: ?Sized>(mut chain: Chain<'_, T>) -> usize {
    let mut freed = 0;
    while let Some(mut node) = chain {
        chain = node.next.take();
        freed += 1;
    }
    freed
}

/// Moves `value` into a fresh heap allocation, reporting allocator failure
/// instead of aborting.
fn try_box<T>(value: T) -> Result<Box<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size.
    let ptr = unsafe { heap::alloc(layout) }.cast::<T>();
    let ptr = NonNull::new(ptr).ok_or(ChainError::AllocationFailure)?;
    unsafe {
        // SAFETY: `ptr` was allocated by the global allocator with the layout of
        // `T`, which is exactly what `Box<T>` expects to own and free.
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}
