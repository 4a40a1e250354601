pub mod linkedlist;
pub mod names;
pub mod sortedvec;
pub mod timing;

pub use linkedlist::SortedLinkedList;
pub use sortedvec::SortedVec;
