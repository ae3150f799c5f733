extern crate std;

use std::vec::Vec;

use super::node::Node;

mod alloc_failure;
mod link;

/// Payloads of the chain at `head`, skipping an emptied head.
fn values<'a, T: ?Sized>(head: Option<&Node<'a, T>>) -> Vec<&'a T> {
    head.map(|head| head.payloads().flatten().collect())
        .unwrap_or_default()
}
