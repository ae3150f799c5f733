//! Free functions over chains.
//!
//! Functions that may replace the head take the caller's [`Chain`] handle. The
//! others take the head (or a node) as an `Option`, and report `None` as
//! [`ChainError::NullArgument`]. Each function that builds a node allocates it
//! before touching any link, so a failure leaves the chain as it was.

use alloc::boxed::Box;
use log::{debug, trace};

use super::error::{ChainError, Result};
use super::node::{Chain, Node, free_chain};
use super::traits::Link;

/// Allocates a detached node holding `payload`. See [`Node::new`].
pub fn new<'a, T: ?Sized>(payload: Option<&'a T>) -> Result<Box<Node<'a, T>>> {
    Node::new(payload)
}

/// Builds a chain holding `payloads` in iteration order.
///
/// An empty iterator yields an empty handle.
pub fn from_payloads<'a, T, I>(payloads: I) -> Result<Chain<'a, T>>
where
    T: ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut head: Chain<'a, T> = None;
    let mut slot = &mut head;
    for payload in payloads {
        let node = Node::new(Some(payload))?;
        slot = &mut slot.insert(node).next;
    }
    Ok(head)
}

/// Returns the tail of the chain starting at `head`, or `None` for an absent head.
pub fn last<'n, 'a, T: ?Sized>(head: Option<&'n Node<'a, T>>) -> Option<&'n Node<'a, T>> {
    let mut node = head?;
    while let Some(next) = node.next() {
        node = next;
    }
    Some(node)
}

/// Mutable variant of [`last`].
pub fn last_mut<'n, 'a, T: ?Sized>(
    head: Option<&'n mut Node<'a, T>>,
) -> Option<&'n mut Node<'a, T>> {
    let mut node = head?;
    while node.next.is_some() {
        node = node.next.as_deref_mut()?;
    }
    Some(node)
}

/// Returns the node `index` links behind `head`.
///
/// Walking off the end is not an error: any index at or past the length, and any
/// index on an absent head, yields `None`.
pub fn at<'n, 'a, T: ?Sized>(
    head: Option<&'n Node<'a, T>>,
    index: usize,
) -> Option<&'n Node<'a, T>> {
    head?.iter().nth(index)
}

/// Mutable variant of [`at`].
pub fn at_mut<'n, 'a, T: ?Sized>(
    head: Option<&'n mut Node<'a, T>>,
    index: usize,
) -> Option<&'n mut Node<'a, T>> {
    let mut node = head;
    for _ in 0..index {
        node = node?.next.as_deref_mut();
    }
    node
}

/// Counts the nodes reachable from `head`; 0 for an absent head.
pub fn size<T: ?Sized>(head: Option<&Node<'_, T>>) -> usize {
    head.map_or(0, |head| head.iter().count())
}

/// Appends a node holding `payload` after the tail of the chain at `head`.
///
/// An empty list has no tail to append to: an absent `head` fails with
/// [`ChainError::NullArgument`] and the caller builds the head with [`Node::new`]
/// or [`insert_front`] instead.
pub fn insert_back<'n, 'a, T: ?Sized>(
    head: Option<&'n mut Node<'a, T>>,
    payload: Option<&'a T>,
) -> Result<&'n mut Node<'a, T>> {
    let head = head.ok_or(ChainError::NullArgument)?;
    let node = Node::new(payload)?;
    let tail = last_mut(Some(head)).ok_or(ChainError::NullArgument)?;
    trace!("chain: insert at tail");
    Ok(tail.splice(node))
}

/// Alias of [`insert_back`].
#[inline]
pub fn push_back<'n, 'a, T: ?Sized>(
    head: Option<&'n mut Node<'a, T>>,
    payload: Option<&'a T>,
) -> Result<&'n mut Node<'a, T>> {
    insert_back(head, payload)
}

/// Attaches an already built `node`, together with any suffix it owns, after the
/// tail of the chain at `head`.
#[deprecated(note = "build nodes in place with `push_back`")]
pub fn push_back_node<'a, T: ?Sized>(
    head: Option<&mut Node<'a, T>>,
    node: Chain<'a, T>,
) -> Result<()> {
    let (Some(head), Some(node)) = (head, node) else {
        return Err(ChainError::NullArgument);
    };
    let tail = last_mut(Some(head)).ok_or(ChainError::NullArgument)?;
    tail.next = Some(node);
    trace!("chain: attached node at tail");
    Ok(())
}

/// Makes a node holding `payload` the new head, and the old head its successor.
pub fn insert_front<'a, T: ?Sized>(head: &mut Chain<'a, T>, payload: Option<&'a T>) -> Result<()> {
    let node = Node::new(payload)?;
    head.splice(node);
    trace!("chain: insert at head");
    Ok(())
}

/// Inserts a node holding `payload` immediately after `node`.
///
/// This splices into the middle of a chain at a known node; it never touches the
/// head handle. Returns the new node.
pub fn insert_after<'n, 'a, T: ?Sized>(
    node: Option<&'n mut Node<'a, T>>,
    payload: Option<&'a T>,
) -> Result<&'n mut Node<'a, T>> {
    let node = node.ok_or(ChainError::NullArgument)?;
    let new_node = Node::new(payload)?;
    trace!("chain: insert after node");
    Ok(node.splice(new_node))
}

/// Inserts a node holding `payload` so that it ends up at `index`.
///
/// Index 0 is [`insert_front`]. An index past the end of the chain is clamped: the
/// node is appended at the tail instead of failing, and on an empty handle it
/// becomes the head.
pub fn insert_at<'h, 'a, T: ?Sized>(
    head: &'h mut Chain<'a, T>,
    payload: Option<&'a T>,
    index: usize,
) -> Result<&'h mut Node<'a, T>> {
    if index == 0 {
        insert_front(head, payload)?;
        return head.as_deref_mut().ok_or(ChainError::NullArgument);
    }

    let node = Node::new(payload)?;
    let mut slot = head;
    let mut steps = index;
    while steps > 0 {
        match slot {
            Some(prev) => {
                slot = &mut prev.next;
                steps -= 1;
            }
            None => break,
        }
    }

    if steps > 0 {
        trace!("chain: insert index {index} clamped to tail");
    } else {
        trace!("chain: insert at index {index}");
    }
    Ok(slot.splice(node))
}

/// Removes the first node whose payload starts with the first `length` bytes of
/// `key`.
///
/// The comparison is a fixed-length byte comparison, not `PartialEq`: a payload
/// shorter than `length`, or a head emptied by [`clear`], never matches. A match on
/// the head rebinds `head` to its successor. A `length` of 0 matches the first node
/// that carries a payload.
pub fn remove_by_value<'a, T>(
    head: &mut Chain<'a, T>,
    key: Option<&[u8]>,
    length: usize,
) -> Result<()>
where
    T: ?Sized + AsRef<[u8]>,
{
    let key = key.ok_or(ChainError::NullArgument)?;
    let first = head.as_deref().ok_or(ChainError::NullArgument)?;
    let key = key.get(..length).ok_or(ChainError::NotFound)?;

    let position = first
        .payloads()
        .position(|payload| {
            payload.is_some_and(|payload| AsRef::<[u8]>::as_ref(payload).get(..length) == Some(key))
        })
        .ok_or(ChainError::NotFound)?;

    trace!("chain: payload matched at index {position}");
    remove_at(head, position)
}

/// Removes the head and rebinds `head` to its successor.
///
/// Only the old head is freed. An empty handle fails with
/// [`ChainError::NullArgument`].
pub fn remove_front<T: ?Sized>(head: &mut Chain<'_, T>) -> Result<()> {
    head.unlink().ok_or(ChainError::NullArgument)?;
    trace!("chain: removed head");
    Ok(())
}

/// Removes the tail.
///
/// On a single-node chain the tail is the head, so this behaves like
/// [`remove_front`] and leaves `head` empty.
pub fn remove_back<T: ?Sized>(head: &mut Chain<'_, T>) -> Result<()> {
    let len = size(head.as_deref());
    if len == 0 {
        return Err(ChainError::NullArgument);
    }
    remove_at(head, len - 1)
}

/// Removes the node at `index`, splicing its successor into its place.
///
/// Index 0 is [`remove_front`]. Unlike [`insert_at`] this is strict: an index that
/// does not address a node fails with [`ChainError::IndexOutOfRange`].
pub fn remove_at<T: ?Sized>(head: &mut Chain<'_, T>, index: usize) -> Result<()> {
    if index == 0 {
        return remove_front(head);
    }

    let mut slot = head;
    for _ in 0..index {
        match slot {
            Some(prev) => slot = &mut prev.next,
            None => return Err(ChainError::IndexOutOfRange(index)),
        }
    }

    slot.unlink().ok_or(ChainError::IndexOutOfRange(index))?;
    trace!("chain: removed index {index}");
    Ok(())
}

/// Points `node` at a different payload. The links are left alone and the old
/// payload is simply forgotten.
pub fn set<'a, T: ?Sized>(node: Option<&mut Node<'a, T>>, payload: Option<&'a T>) -> Result<()> {
    let (Some(node), Some(payload)) = (node, payload) else {
        return Err(ChainError::NullArgument);
    };
    node.payload = Some(payload);
    Ok(())
}

/// Frees every node behind `head` and empties the head's payload, leaving a
/// single node with no payload in place.
pub fn clear<T: ?Sized>(head: Option<&mut Node<'_, T>>) -> Result<()> {
    let head = head.ok_or(ChainError::NullArgument)?;
    let freed = free_chain(head.next.take());
    head.payload = None;
    debug!("chain: cleared {freed} nodes behind head");
    Ok(())
}

/// Frees the whole chain, head included, and leaves `head` empty.
pub fn destroy<T: ?Sized>(head: &mut Chain<'_, T>) -> Result<()> {
    let chain = head.take().ok_or(ChainError::NullArgument)?;
    let freed = free_chain(Some(chain));
    debug!("chain: destroyed {freed} nodes");
    Ok(())
}

/// Calls `visit` with each payload slot, front to back.
///
/// Meant for inspection and debugging output; the chain is only borrowed shared.
pub fn for_each<'a, T, F>(head: Option<&Node<'a, T>>, visit: Option<F>) -> Result<()>
where
    T: ?Sized,
    F: FnMut(Option<&'a T>),
{
    let (Some(head), Some(visit)) = (head, visit) else {
        return Err(ChainError::NullArgument);
    };
    head.payloads().for_each(visit);
    Ok(())
}
