use std::fmt::{self, Debug, Display};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T: Ord> {
    value: T,
    next: Link<T>,
}

/*
 * Singly linked list that keeps its elements in non-decreasing order.
 * Each node owns its successor, the list owns the first node.
 *
 * Mutators take `&mut self`: sharing a list between threads needs
 * external synchronization.
 */
pub struct SortedLinkedList<T: Ord> {
    first: Link<T>,
}

impl<T: Ord> SortedLinkedList<T> {
    pub fn new() -> Self {
        SortedLinkedList { first: None }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /*
     * No cached length : walks the whole chain.
     */
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    pub fn first(&self) -> Option<&T> {
        self.first.as_ref().map(|node| &node.value)
    }

    /*
     * Insert <value> after every element comparing <= to it,
     * so equal elements keep their insertion order.
     */
    pub fn insert(&mut self, value: T) {
        let mut cursor = &mut self.first;
        while cursor.as_ref().is_some_and(|node| value >= node.value) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { value, next }));
    }

    /*
     * Remove the first element equal to <value>.
     * Returns false if there is none.
     */
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_by(|candidate| candidate == value)
    }

    /*
     * Remove the first element (in sorted order) matching <predicate>.
     * Callers holding references can use this to remove by identity.
     */
    pub fn remove_by<F>(&mut self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = &mut self.first;
        while cursor.as_ref().is_some_and(|node| !predicate(&node.value)) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        match cursor.take() {
            Some(node) => {
                // Splice the successor into the freed slot
                *cursor = node.next;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first.as_deref(),
        }
    }
}

impl<T: Ord> Default for SortedLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/*
 * Tear the chain down node by node, dropping a long list
 * recursively would overflow the stack.
 */
impl<T: Ord> Drop for SortedLinkedList<T> {
    fn drop(&mut self) {
        let mut curr_opt = self.first.take();
        while let Some(mut curr) = curr_opt {
            curr_opt = curr.next.take();
        }
    }
}

pub struct Iter<'a, T: Ord> {
    next: Option<&'a Node<T>>,
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for SortedLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SortedLinkedList::new();
        list.extend(iter);
        list
    }
}

/*
 * Every element followed by ", ", including the last one
 */
impl<T: Ord + Display> Display for SortedLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "{}, ", value)?;
        }
        Ok(())
    }
}

impl<T: Ord + Debug> Debug for SortedLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
