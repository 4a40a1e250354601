use std::ops::Deref;

/*
 * Baseline container : a plain vector re-sorted after every push.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedVec<T: Ord> {
    v: Vec<T>,
}

impl<T: Ord> Default for SortedVec<T> {
    fn default() -> Self {
        Self {
            v: Default::default(),
        }
    }
}

impl<T: Ord> Deref for SortedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.v
    }
}

impl<T: Ord> SortedVec<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, t: T) {
        self.v.push(t);
        self.v.sort();
    }

    /*
     * Remove the first element equal to <t>, shifting the tail down.
     */
    pub fn remove_item(&mut self, t: &T) -> bool {
        match self.v.iter().position(|x| x == t) {
            Some(index) => {
                self.v.remove(index);
                true
            }
            None => false,
        }
    }
}
