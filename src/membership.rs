//! The "other collection" seen by bulk operations such as
//! [`List::remove_all`](crate::List::remove_all),
//! [`List::retain_all`](crate::List::retain_all) and
//! [`List::contains_all`](crate::List::contains_all).

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::List;

/// A collection that can answer whether it holds a given value.
///
/// # Examples
///
/// ```
/// use ring_list::{List, Membership};
/// use std::collections::HashSet;
///
/// let odd: HashSet<i32> = [1, 3, 5].into_iter().collect();
/// assert!(odd.includes(&3));
///
/// let mut list = List::from([1, 2, 3, 4, 5]);
/// list.remove_all(Some(&odd)).unwrap();
/// assert_eq!(list.to_vec(), vec![2, 4]);
/// ```
pub trait Membership<T> {
    /// Returns `true` if a value equal to `value` is present.
    fn includes(&self, value: &T) -> bool;

    /// Number of values held.
    fn count(&self) -> usize;
}

impl<T: PartialEq> Membership<T> for [T] {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq, const N: usize> Membership<T> for [T; N] {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        N
    }
}

impl<T: PartialEq> Membership<T> for Vec<T> {
    fn includes(&self, value: &T) -> bool {
        self.as_slice().includes(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Membership<T> for VecDeque<T> {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash, S: BuildHasher> Membership<T> for HashSet<T, S> {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> Membership<T> for BTreeSet<T> {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T: PartialEq> Membership<T> for List<T> {
    fn includes(&self, value: &T) -> bool {
        self.contains(value)
    }
    fn count(&self) -> usize {
        self.len()
    }
}
