use crate::error::{ListError, Result};
use crate::list::List;

impl<T> List<T> {
    /// Copies the elements into a new `Vec`, front to back.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from(['a', 'b']);
    /// assert_eq!(list.to_vec(), vec!['a', 'b']);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the elements into `buf`, front to back, starting at slot 0.
    ///
    /// `buf` is grown with `None` when it holds fewer than `len` slots. When
    /// it holds more, the slot right after the last element is set to `None`
    /// to mark the end, and the slots after that are left alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2]);
    ///
    /// let mut short = Vec::new();
    /// list.copy_into(&mut short);
    /// assert_eq!(short, vec![Some(1), Some(2)]);
    ///
    /// let mut long = vec![Some(7); 4];
    /// list.copy_into(&mut long);
    /// assert_eq!(long, vec![Some(1), Some(2), None, Some(7)]);
    /// ```
    pub fn copy_into(&self, buf: &mut Vec<Option<T>>)
    where
        T: Clone,
    {
        if buf.len() < self.len {
            buf.resize_with(self.len, || None);
        }
        for (slot, elt) in buf.iter_mut().zip(self) {
            *slot = Some(elt.clone());
        }
        if let Some(end) = buf.get_mut(self.len) {
            *end = None;
        }
    }

    /// Copies the elements in `from..to` into a new, independent `List`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if either bound is greater than
    /// `len`, and [`ListError::InvalidRange`] if `to < from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let list = List::from_iter(0..5);
    /// assert_eq!(list.slice(1, 3).unwrap().to_vec(), vec![1, 2]);
    /// assert!(list.slice(2, 2).unwrap().is_empty());
    /// assert_eq!(list.slice(3, 1).unwrap_err(), ListError::InvalidRange { from: 3, to: 1 });
    /// ```
    pub fn slice(&self, from: usize, to: usize) -> Result<List<T>>
    where
        T: Clone,
    {
        self.check_position(from)?;
        self.check_position(to)?;
        if to < from {
            return Err(ListError::InvalidRange { from, to });
        }
        Ok(self.iter().skip(from).take(to - from).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::{List, ListError};

    #[test]
    fn copy_into_exact_fit() {
        let list = List::from(["a", "b", "c"]);
        let mut buf = vec![None; 3];
        list.copy_into(&mut buf);
        assert_eq!(buf, vec![Some("a"), Some("b"), Some("c")]);
    }

    #[test]
    fn copy_into_from_empty_list() {
        let list: List<u8> = List::new();
        let mut buf = vec![Some(1), Some(2)];
        list.copy_into(&mut buf);
        assert_eq!(buf, vec![None, Some(2)]);

        let mut empty = Vec::new();
        list.copy_into(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn copy_into_keeps_absent_values() {
        let list = List::from([None, Some(1)]);
        let mut buf = Vec::new();
        list.copy_into(&mut buf);
        assert_eq!(buf, vec![Some(None), Some(Some(1))]);
    }

    #[test]
    fn slice_bounds() {
        let list = List::from_iter(0..5);
        assert_eq!(list.slice(0, 5).unwrap(), list);
        assert!(list.slice(5, 5).unwrap().is_empty());
        assert_eq!(
            list.slice(0, 6).unwrap_err(),
            ListError::IndexOutOfRange { index: 6, len: 5 }
        );
        assert_eq!(
            list.slice(6, 6).unwrap_err(),
            ListError::IndexOutOfRange { index: 6, len: 5 }
        );
        assert_eq!(
            list.slice(4, 2).unwrap_err(),
            ListError::InvalidRange { from: 4, to: 2 }
        );
    }

    #[test]
    fn slice_round_trip() {
        let list = List::from_iter(0..10);
        for split in 0..=10 {
            let mut joined = list.slice(0, split).unwrap();
            joined.extend(list.slice(split, 10).unwrap());
            assert_eq!(joined, list);
        }
    }

    #[test]
    fn slice_is_independent() {
        let mut list = List::from_iter(0..4);
        let mut part = list.slice(1, 3).unwrap();
        part.push_back(9);
        list.set(1, 100).unwrap();
        assert_eq!(part.to_vec(), vec![1, 2, 9]);
        assert_eq!(list.to_vec(), vec![0, 100, 2, 3]);
        assert_eq!(part.revision(), 3);
    }
}
