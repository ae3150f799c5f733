extern crate std;

use std::alloc::{GlobalAlloc, Layout, System};
use std::vec;

use core::cell::Cell;
use core::ptr;

use crate::linked_list::chain::{
    Chain, ChainError, Node, at_mut, from_payloads, insert_after, insert_at, insert_back,
    insert_front, node::freed,
};

use super::values;

std::thread_local! {
    static REFUSE: Cell<bool> = const { Cell::new(false) };
}

/// The system allocator, except that it hands out null on a thread that asked
/// for allocations to be refused.
struct RefusingAlloc;

unsafe impl GlobalAlloc for RefusingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if REFUSE.try_with(Cell::get).unwrap_or(false) {
            return ptr::null_mut();
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static ALLOCATOR: RefusingAlloc = RefusingAlloc;

/// Turns allocation refusal back off when dropped, even if the test panics.
struct Refusing;

impl Refusing {
    fn start() -> Self {
        REFUSE.with(|refuse| refuse.set(true));
        Refusing
    }
}

impl Drop for Refusing {
    fn drop(&mut self) {
        REFUSE.with(|refuse| refuse.set(false));
    }
}

/// Runs `op` while every allocation on this thread fails.
fn refusing<R>(op: impl FnOnce() -> R) -> R {
    let _guard = Refusing::start();
    op()
}

#[test]
fn test_new_reports_allocation_failure() {
    let a = 1;
    let result = refusing(|| Node::new(Some(&a)).err());
    assert_eq!(result, Some(ChainError::AllocationFailure));
}

#[test]
fn test_failed_insert_front_keeps_chain() {
    let items = [1, 2, 3];
    let zero = 0;
    let mut head = from_payloads(items.iter()).unwrap();

    let before = freed::count();
    let result = refusing(|| insert_front(&mut head, Some(&zero)));
    assert_eq!(result, Err(ChainError::AllocationFailure));
    assert_eq!(freed::count(), before);
    assert_eq!(values(head.as_deref()), vec![&1, &2, &3]);

    let mut empty: Chain<'_, i32> = None;
    let result = refusing(|| insert_front(&mut empty, Some(&zero)));
    assert_eq!(result, Err(ChainError::AllocationFailure));
    assert!(empty.is_none());
}

#[test]
fn test_failed_insert_at_keeps_chain() {
    let items = [1, 2, 3];
    let extra = 9;
    let mut head = from_payloads(items.iter()).unwrap();

    let before = freed::count();
    for index in [0, 2, 3, 10] {
        let result = refusing(|| insert_at(&mut head, Some(&extra), index).err());
        assert_eq!(result, Some(ChainError::AllocationFailure));
    }
    assert_eq!(freed::count(), before);
    assert_eq!(values(head.as_deref()), vec![&1, &2, &3]);
}

#[test]
fn test_failed_insert_after_keeps_chain() {
    let items = [1, 2, 3];
    let extra = 9;
    let mut head = from_payloads(items.iter()).unwrap();

    let before = freed::count();
    let result = refusing(|| insert_after(at_mut(head.as_deref_mut(), 1), Some(&extra)).err());
    assert_eq!(result, Some(ChainError::AllocationFailure));
    assert_eq!(freed::count(), before);
    assert_eq!(values(head.as_deref()), vec![&1, &2, &3]);
}

#[test]
fn test_failed_insert_back_keeps_chain() {
    let items = [1, 2, 3];
    let extra = 9;
    let mut head = from_payloads(items.iter()).unwrap();

    let before = freed::count();
    let result = refusing(|| insert_back(head.as_deref_mut(), Some(&extra)).err());
    assert_eq!(result, Some(ChainError::AllocationFailure));
    assert_eq!(freed::count(), before);
    assert_eq!(values(head.as_deref()), vec![&1, &2, &3]);

    // the chain still grows once the allocator recovers
    insert_back(head.as_deref_mut(), Some(&extra)).unwrap();
    assert_eq!(values(head.as_deref()), vec![&1, &2, &3, &9]);
}
