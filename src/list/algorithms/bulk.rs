use crate::error::{ListError, Result};
use crate::list::{List, GHOST};
use crate::Membership;

impl<T> List<T> {
    /// Unlink every element for which `filter` returns `true`, in one
    /// forward pass. Returns the number of elements removed.
    fn unlink_where<F>(&mut self, mut filter: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut node = self.front_node();
        while node != GHOST {
            let next = self.next_of(node);
            if filter(self.node_element(node)) {
                drop(self.detach_node(node));
                removed += 1;
            }
            node = next;
        }
        removed
    }

    fn compare_remove<C>(&mut self, other: Option<&C>, remove_members: bool) -> Result<bool>
    where
        C: Membership<T> + ?Sized,
    {
        let other = other.ok_or(ListError::NullCollection)?;
        let removed = self.unlink_where(|elt| other.includes(elt) == remove_members);
        tracing::debug!(
            removed,
            remove_members,
            others = other.count(),
            len = self.len,
            "bulk removal"
        );
        Ok(removed > 0)
    }

    /// Appends every element of `source` to the back of the list, in order.
    /// Returns `true` if the list grew.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullCollection`] if `source` is `None`; the list
    /// is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let mut list = List::from([1, 2]);
    /// assert_eq!(list.add_all(Some([3, 4])), Ok(true));
    /// assert_eq!(list.add_all(Some(Vec::new())), Ok(false));
    /// assert_eq!(list.add_all(None::<Vec<i32>>), Err(ListError::NullCollection));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn add_all<I>(&mut self, source: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullCollection)?;
        let before = self.len;
        for elt in source {
            self.attach_node(GHOST, elt);
        }
        tracing::debug!(added = self.len - before, len = self.len, "bulk append");
        Ok(self.len > before)
    }

    /// Inserts every element of `source` at `index`, keeping their order.
    /// The element previously at `index` ends up after all of them.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullCollection`] if `source` is `None` and
    /// [`ListError::IndexOutOfRange`] if `index > len`. Both are checked
    /// before anything is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 5]);
    /// assert_eq!(list.add_all_at(1, Some(2..5)), Ok(true));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(list.add_all_at(6, Some([0])).is_err());
    /// ```
    pub fn add_all_at<I>(&mut self, index: usize, source: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullCollection)?;
        self.check_position(index)?;
        let target = self.walk_forward(index);
        let before = self.len;
        for elt in source {
            self.attach_node(target, elt);
        }
        tracing::debug!(index, added = self.len - before, len = self.len, "bulk insert");
        Ok(self.len > before)
    }

    /// Removes every element that `other` includes. Returns `true` if
    /// anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullCollection`] if `other` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 2]);
    /// assert_eq!(list.remove_all(Some(&[2])), Ok(true));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert_eq!(list.remove_all(Some(&[7])), Ok(false));
    /// ```
    pub fn remove_all<C>(&mut self, other: Option<&C>) -> Result<bool>
    where
        C: Membership<T> + ?Sized,
    {
        self.compare_remove(other, true)
    }

    /// Removes every element that `other` does not include. Returns `true`
    /// if anything was removed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullCollection`] if `other` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 2]);
    /// assert_eq!(list.retain_all(Some(&vec![2, 3])), Ok(true));
    /// assert_eq!(list.to_vec(), vec![2, 3, 2]);
    /// ```
    pub fn retain_all<C>(&mut self, other: Option<&C>) -> Result<bool>
    where
        C: Membership<T> + ?Sized,
    {
        self.compare_remove(other, false)
    }

    /// Returns `true` if every element of the list is included in `other`,
    /// or if `other` is empty.
    ///
    /// The list is checked against `other`, not the other way round: this is
    /// the list being a subset of `other`. An empty `other` is accepted even
    /// when the list is not empty.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullCollection`] if `other` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.contains_all(Some(&[1, 2, 3, 4])), Ok(true));
    /// assert_eq!(list.contains_all(Some(&[1])), Ok(false));
    /// assert_eq!(list.contains_all(Some(&Vec::<i32>::new())), Ok(true));
    /// ```
    pub fn contains_all<C>(&self, other: Option<&C>) -> Result<bool>
    where
        C: Membership<T> + ?Sized,
    {
        let other = other.ok_or(ListError::NullCollection)?;
        Ok(other.count() == 0 || self.iter().all(|elt| other.includes(elt)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{List, ListError};
    use std::collections::{BTreeSet, HashSet};

    #[test]
    fn add_all_missing_collection() {
        let mut list = List::from(["x"]);
        let revision = list.revision();
        assert_eq!(
            list.add_all(None::<Vec<&str>>),
            Err(ListError::NullCollection)
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.revision(), revision);
    }

    #[test]
    fn add_all_at_positions() {
        let mut list = List::from_iter(0..3);
        assert_eq!(list.add_all_at(0, Some([-2, -1])), Ok(true));
        assert_eq!(list.add_all_at(5, Some([3, 4])), Ok(true));
        assert_eq!(list.add_all_at(2, Some(Vec::new())), Ok(false));
        assert_eq!(list.to_vec(), (-2..5).collect::<Vec<_>>());

        let revision = list.revision();
        assert_eq!(
            list.add_all_at(8, Some([9])),
            Err(ListError::IndexOutOfRange { index: 8, len: 7 })
        );
        assert_eq!(
            list.add_all_at(0, None::<[i32; 1]>),
            Err(ListError::NullCollection)
        );
        assert_eq!(list.revision(), revision);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn add_all_at_into_empty() {
        let mut list = List::new();
        assert_eq!(list.add_all_at(0, Some("abc".chars())), Ok(true));
        assert_eq!(list.to_vec(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn retain_all_range() {
        let mut list = List::from_iter(0..100);
        let keep: BTreeSet<i32> = (30..50).collect();
        assert_eq!(list.retain_all(Some(&keep)), Ok(true));
        assert_eq!(list.to_vec(), (30..50).collect::<Vec<_>>());
        assert_eq!(list.retain_all(Some(&keep)), Ok(false));
        assert_eq!(list.len(), 20);
    }

    #[test]
    fn remove_all_sources() {
        let mut list = List::from_iter(0..10);
        let evens: HashSet<i32> = (0..10).step_by(2).collect();
        assert_eq!(list.remove_all(Some(&evens)), Ok(true));
        assert_eq!(list.to_vec(), vec![1, 3, 5, 7, 9]);

        let other = List::from([1, 9]);
        assert_eq!(list.remove_all(Some(&other)), Ok(true));
        assert_eq!(list.remove_all(Some(&[3, 5, 7][..])), Ok(true));
        assert!(list.is_empty());
        assert_eq!(list.remove_all(Some(&[0])), Ok(false));
        assert_eq!(
            list.remove_all(None::<&Vec<i32>>),
            Err(ListError::NullCollection)
        );
        assert_eq!(
            list.retain_all(None::<&Vec<i32>>),
            Err(ListError::NullCollection)
        );
    }

    #[test]
    fn remove_all_with_absent_values() {
        let mut list = List::from([Some(1), None, Some(2), None]);
        assert_eq!(list.remove_all(Some(&[None])), Ok(true));
        assert_eq!(list.to_vec(), vec![Some(1), Some(2)]);
    }

    #[test]
    fn bulk_removal_reuses_slots() {
        let mut list = List::from_iter(0..8);
        list.retain_all(Some(&[0, 7])).unwrap();
        list.extend(10..16);
        assert_eq!(list.nodes.len(), 9);
        assert_eq!(list.to_vec(), vec![0, 7, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn contains_all_checks_the_list_against_other() {
        let list = List::from([1, 2, 3]);
        assert_eq!(list.contains_all(Some(&[1, 2, 3, 4])), Ok(true));
        assert_eq!(list.contains_all(Some(&[3, 2, 1][..])), Ok(true));
        assert_eq!(list.contains_all(Some(&[1])), Ok(false));
        assert_eq!(list.contains_all(Some(&[2, 2])), Ok(false));
        assert_eq!(list.contains_all(Some(&list)), Ok(true));

        let empty: Vec<i32> = Vec::new();
        assert_eq!(list.contains_all(Some(&empty)), Ok(true));
        assert_eq!(List::<i32>::new().contains_all(Some(&[5])), Ok(true));
        assert_eq!(
            list.contains_all(None::<&[i32]>),
            Err(ListError::NullCollection)
        );
    }
}
