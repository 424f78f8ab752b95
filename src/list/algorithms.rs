use crate::list::{List, NodeId, GHOST};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

mod bulk;
mod snapshot;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

/// Cloning builds a fresh arena holding copies of the elements, in order.
/// The clone starts over at revision 0.
impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list: Self = self.iter().cloned().collect();
        list.revision = 0;
        list
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// The first node, in forward order, whose element equals `x`, together
    /// with its index.
    fn find_node(&self, x: &T) -> Option<(usize, NodeId)>
    where
        T: PartialEq<T>,
    {
        let mut node = self.front_node();
        let mut index = 0;
        while node != GHOST {
            if self.node_element(node) == x {
                return Some((index, node));
            }
            node = self.next_of(node);
            index += 1;
        }
        None
    }

    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// Absent values are modelled with `Option`, so `None` matches `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([Some(0), None, Some(2)]);
    ///
    /// assert_eq!(list.contains(&Some(0)), true);
    /// assert_eq!(list.contains(&None), true);
    /// assert_eq!(list.contains(&Some(10)), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`, or `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 1]);
    /// assert_eq!(list.index_of(&1), Some(0));
    /// assert_eq!(list.index_of(&3), None);
    /// ```
    pub fn index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.find_node(x).map(|(index, _)| index)
    }

    /// Returns the index of the last element equal to `x`, or `None`.
    ///
    /// This is a single forward pass that remembers the latest match.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 1]);
    /// assert_eq!(list.last_index_of(&1), Some(2));
    /// assert_eq!(list.last_index_of(&2), Some(1));
    /// assert_eq!(list.last_index_of(&3), None);
    /// ```
    pub fn last_index_of(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter()
            .enumerate()
            .fold(None, |last, (index, e)| if e == x { Some(index) } else { last })
    }

    /// Removes the first element equal to `x`. Returns `true` if one was
    /// found.
    ///
    /// The revision is bumped only if an element was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 1]);
    /// assert!(list.remove_item(&1));
    /// assert!(!list.remove_item(&3));
    /// assert_eq!(list.to_vec(), vec![2, 1]);
    /// ```
    pub fn remove_item(&mut self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        match self.find_node(x) {
            Some((_, node)) => {
                self.detach_node(node);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq_ignores_history() {
        let a = List::from([1, 2, 3]);
        let mut b = List::from([0, 1, 2, 3, 4]);
        b.pop_front();
        b.pop_back();
        assert_ne!(a.revision(), b.revision());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        b.set(0, 5).unwrap();
        assert_ne!(a, b);
        assert_ne!(List::from([1, 2]), List::from([1, 2, 3]));
    }

    #[test]
    fn list_ord() {
        assert!(List::from([1, 2]) < List::from([1, 3]));
        assert!(List::from([1, 2]) < List::from([1, 2, 0]));
        assert!(List::<i32>::new() < List::from([0]));
    }

    #[test]
    fn list_clone_is_independent() {
        let mut original = List::from_iter(0..5);
        let mut cloned = original.clone();
        assert_eq!(original, cloned);
        assert_eq!(cloned.revision(), 0);

        cloned.push_back(5);
        cloned.set(0, 10).unwrap();
        original.remove(1).unwrap();
        assert_eq!(original.to_vec(), vec![0, 2, 3, 4]);
        assert_eq!(cloned.to_vec(), vec![10, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn list_search() {
        let mut list = List::new();
        list.push_back(0);
        assert_eq!(list.index_of(&0), Some(0));
        list.push_back(1);
        assert_eq!(list.index_of(&0), Some(0));
        assert_eq!(list.index_of(&1), Some(1));
        list.extend(2..30);
        assert_eq!(list.len(), 30);
        for i in 0..30 {
            assert_eq!(list.index_of(&i), Some(i as usize));
            assert_eq!(list.last_index_of(&i), Some(i as usize));
        }
        assert_eq!(list.index_of(&1000), None);
        assert!(list.contains(&29));
        assert!(!list.contains(&30));
    }

    #[test]
    fn list_search_absent_values() {
        let mut list = List::from([None, Some(1), None, Some(2)]);
        assert_eq!(list.index_of(&None), Some(0));
        assert_eq!(list.last_index_of(&None), Some(2));
        assert!(list.remove_item(&None));
        assert_eq!(list.to_vec(), vec![Some(1), None, Some(2)]);
        assert!(list.remove_item(&None));
        assert!(!list.contains(&None));
        assert!(!list.remove_item(&None));
    }
}
