extern crate std;

use std::vec;

use crate::linked_list::chain::{Chain, Link, Node, from_payloads, node::freed};

use super::values;

#[test]
fn test_splice_behind_handle_and_node() {
    let items = [2, 4];
    let (one, three) = (1, 3);
    let mut head = from_payloads(items.iter()).unwrap();

    head.splice(Node::new(Some(&one)).unwrap());
    let first = head.as_deref_mut().unwrap().next_mut().unwrap();
    let spliced = first.splice(Node::new(Some(&three)).unwrap());
    assert_eq!(spliced.next().and_then(Node::payload), Some(&4));

    assert_eq!(values(head.as_deref()), vec![&1, &2, &3, &4]);
}

#[test]
fn test_unlink_detaches_exactly_one_node() {
    let items = [1, 2, 3];
    let mut head = from_payloads(items.iter()).unwrap();

    let before = freed::count();
    let detached = head.as_deref_mut().unwrap().unlink().unwrap();
    assert!(detached.is_tail());
    assert_eq!(detached.payload(), Some(&2));
    drop(detached);
    assert_eq!(freed::count() - before, 1);
    assert_eq!(values(head.as_deref()), vec![&1, &3]);

    let detached = head.unlink().unwrap();
    assert_eq!(detached.payload(), Some(&1));
    assert_eq!(values(head.as_deref()), vec![&3]);

    head.unlink();
    let mut empty: Chain<'_, i32> = head;
    assert!(empty.unlink().is_none());
}
