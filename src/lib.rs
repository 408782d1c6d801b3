#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_debug_implementations)]

extern crate alloc;

pub mod linked_lists;

pub use linked_lists::SinglyLinkedList;
