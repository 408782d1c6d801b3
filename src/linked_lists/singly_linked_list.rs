use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    iter::{Extend, FromIterator},
    mem,
};

mod iters;
pub use iters::{Drain, IntoIter, Iter, IterMut};

/// Written between two elements when a list is rendered.
pub const DELIMITER: &str = " -> ";
/// Written after the last element, or alone for an empty list.
pub const TERMINATOR: &str = "NULL";

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// A singly linked list that grows at the head.
///
/// Every [`insert`](Self::insert) puts the new value in front of the previous
/// head, so traversal yields the values in reverse insertion order:
///
/// ```
/// use linked_lists::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert(1);
/// list.insert(2);
/// list.insert(3);
///
/// assert_eq!(list.to_string(), "3 -> 2 -> 1 -> NULL");
/// assert!(list.search(&2));
/// assert!(!list.search(&5));
/// ```
///
/// The list owns its first node and each node owns its successor. It does no
/// locking of its own; share it across threads behind a `Mutex`.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts an element at the beginning of the list
    pub fn insert(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(SinglyLinkedListNode { value, next }));
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let SinglyLinkedListNode { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Returns `true` if an element equal to `value` is in the list.
    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    pub fn contains<Q: PartialEq<T> + ?Sized>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_mut().map(|node| &mut node.value)
    }

    pub fn find<F: FnMut(&T) -> bool>(&self, mut predicate: F) -> Option<&T> {
        self.iter().find(|value| predicate(*value))
    }

    pub fn find_mut<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> Option<&mut T> {
        self.iter_mut().find(|value| predicate(&**value))
    }

    /// Unlinks the first element equal to `item` and returns it.
    ///
    /// The remaining elements keep their relative order.
    pub fn remove_first<Q: PartialEq<T> + ?Sized>(&mut self, item: &Q) -> Option<T> {
        let mut link = &mut self.head;
        while link.as_ref().is_some_and(|node| !item.eq(&node.value)) {
            link = &mut link.as_mut()?.next;
        }

        let SinglyLinkedListNode { value, next } = *link.take()?;
        *link = next;
        self.len -= 1;
        Some(value)
    }

    /// Reverses the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        let mut reversed: Link<T> = None;
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = mem::replace(&mut node.next, reversed);
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Drops every element.
    ///
    /// Nodes are released one at a time so that long lists don't recurse
    /// through `Box`'s destructor.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            node: self.head.as_deref_mut(),
            remaining: self.len,
        }
    }

    /// Removes elements from the front as the iterator is advanced.
    ///
    /// Elements that were not yielded stay in the list once the `Drain` is
    /// dropped. If the `Drain` is leaked the list is left empty.
    pub fn drain(&mut self) -> Drain<'_, T> {
        let rest = self.head.take();
        let len = mem::take(&mut self.len);
        Drain {
            list: self,
            rest,
            len,
        }
    }
}

#[cfg(feature = "std")]
impl<T: Display> SinglyLinkedList<T> {
    /// Writes the list to standard output, followed by a newline.
    pub fn print(&self) {
        std::println!("{self}");
    }

    pub fn print_to<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{self}")
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in self.iter() {
            let node = SinglyLinkedListNode {
                value: value.clone(),
                next: None,
            };
            tail = &mut tail.insert(Box::new(node)).next;
        }
        list.len = self.len;
        list
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ length: {}, items: {{", self.len)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            write!(f, "{elem}{DELIMITER}")?;
        }
        f.write_str(TERMINATOR)
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter.into_iter() {
            self.insert(i);
        }
    }
}
