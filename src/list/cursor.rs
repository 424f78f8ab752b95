use crate::error::{ListError, Result};
use crate::list::{List, NodeId, GHOST};
use std::fmt;
use std::fmt::Formatter;

/// A detached cursor over a `List`.
///
/// A `Cursor` does not borrow the list it walks. Instead, every operation
/// takes the list as an argument. This lets several cursors and direct list
/// calls interleave freely, at the price of checking on every use that the
/// list was not structurally changed behind the cursor's back.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the ghost node of the list. The
/// cursor sits *between* elements: [`next`] yields the element after it and
/// [`previous`] yields the element before it.
///
/// # Revisions
///
/// The cursor caches the list's [`revision`] when it is created. Any
/// operation on a list whose revision differs fails with
/// [`ListError::StaleCursor`] before doing anything else. The cursor's own
/// [`insert`] and [`remove`] bump the list's revision and the cached one
/// together, so they never invalidate the cursor that performed them.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The ghost node of the
/// list is denoted by `#`).
/// ```
/// use ring_list::{List, ListError};
///
/// // Create a list: [ A B C D #]
/// let mut list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.next(&list), Ok(&'A'));
///
/// // Remove what was just yielded: [|B C D #] (index = 0)
/// assert_eq!(cursor.remove(&mut list), Ok('A'));
/// assert_eq!(cursor.next_index(), 0);
///
/// // Another cursor changes the list, the first one notices.
/// let mut other = list.cursor_end();
/// other.insert(&mut list, 'E').unwrap();
/// assert!(matches!(cursor.next(&list), Err(ListError::StaleCursor { .. })));
/// ```
///
/// [`next`]: Cursor::next
/// [`previous`]: Cursor::previous
/// [`insert`]: Cursor::insert
/// [`remove`]: Cursor::remove
/// [`revision`]: List::revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// the list revision this cursor last observed
    expected: u64,
    /// the node yielded by the next forward step
    current: NodeId,
    last_returned: Option<NodeId>,
    index: usize,
}

// Private methods
impl Cursor {
    pub(crate) fn new<T>(list: &List<T>, current: NodeId, index: usize) -> Self {
        Self {
            expected: list.revision,
            current,
            last_returned: None,
            index,
        }
    }

    fn stale<T>(&self, list: &List<T>) -> ListError {
        tracing::debug!(
            expected = self.expected,
            actual = list.revision,
            index = self.index,
            "stale cursor"
        );
        ListError::StaleCursor {
            expected: self.expected,
            actual: list.revision,
        }
    }

    /// Fail unless `list` is still the list this cursor last saw.
    ///
    /// Besides the revision, the node ids held by the cursor are vetted, so
    /// that a cursor handed a list it was not created from reports itself
    /// stale instead of reading an unrelated slot.
    fn check<T>(&self, list: &List<T>) -> Result<()> {
        let last_linked = self.last_returned.is_none_or(|node| list.is_linked(node));
        if self.expected != list.revision
            || !list.is_linked(self.current)
            || !last_linked
            || self.index > list.len()
        {
            return Err(self.stale(list));
        }
        Ok(())
    }

    /// Step forward `steps` times, then forget the last yielded node.
    pub(crate) fn seek_forward<T>(&mut self, list: &List<T>, steps: usize) -> Result<()> {
        for _ in 0..steps {
            self.next(list)?;
        }
        self.last_returned = None;
        Ok(())
    }
}

impl Cursor {
    /// Returns `true` if a forward step would yield an element.
    pub fn has_next<T>(&self, list: &List<T>) -> bool {
        self.index != list.len()
    }

    /// Returns `true` if a backward step would yield an element.
    pub fn has_previous(&self) -> bool {
        self.index != 0
    }

    /// The index of the element a forward step would yield (`len` at the end).
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn next_index(&self) -> usize {
        self.index
    }

    /// The index of the element a backward step would yield, or `None` at the
    /// start of the list.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn previous_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }

    /// Step forward over one element and return it.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::StaleCursor`] if the list changed behind the cursor;
    /// - [`ListError::EndOfSequence`] if the cursor is at the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let list = List::from([1, 2]);
    /// let mut cursor = list.cursor_start();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.next(&list), Err(ListError::EndOfSequence));
    /// ```
    pub fn next<'a, T>(&mut self, list: &'a List<T>) -> Result<&'a T> {
        self.check(list)?;
        if !self.has_next(list) {
            return Err(ListError::EndOfSequence);
        }
        let node = self.current;
        let element = list.live_element(node).ok_or_else(|| self.stale(list))?;
        self.current = list.next_of(node);
        self.last_returned = Some(node);
        self.index += 1;
        Ok(element)
    }

    /// Step backward over one element and return it.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::StaleCursor`] if the list changed behind the cursor;
    /// - [`ListError::EndOfSequence`] if the cursor is at the start.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let list = List::from([1, 2]);
    /// let mut cursor = list.cursor_end();
    /// assert_eq!(cursor.previous(&list), Ok(&2));
    /// assert_eq!(cursor.previous(&list), Ok(&1));
    /// assert_eq!(cursor.previous(&list), Err(ListError::EndOfSequence));
    /// ```
    pub fn previous<'a, T>(&mut self, list: &'a List<T>) -> Result<&'a T> {
        self.check(list)?;
        if !self.has_previous() {
            return Err(ListError::EndOfSequence);
        }
        let node = list.prev_of(self.current);
        let element = list.live_element(node).ok_or_else(|| self.stale(list))?;
        self.current = node;
        self.last_returned = Some(node);
        self.index -= 1;
        Ok(element)
    }

    /// Remove the element most recently yielded by [`next`] or [`previous`]
    /// and return it.
    ///
    /// The list's revision is bumped, and the cursor follows along, so it
    /// stays usable. Other cursors become stale.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// - [`ListError::StaleCursor`] if the list changed behind the cursor;
    /// - [`ListError::IllegalCursorState`] if nothing was yielded since the
    ///   cursor was created or last mutated the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let mut list = List::from_iter(0..5);
    /// let mut cursor = list.cursor(2).unwrap();
    ///
    /// assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalCursorState));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.remove(&mut list), Ok(2));
    /// assert_eq!(cursor.next_index(), 2);
    /// assert_eq!(cursor.previous(&list), Ok(&1));
    /// assert_eq!(cursor.remove(&mut list), Ok(1));
    /// assert_eq!(cursor.next(&list), Ok(&3));
    ///
    /// assert_eq!(list.to_vec(), vec![0, 3, 4]);
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    pub fn remove<T>(&mut self, list: &mut List<T>) -> Result<T> {
        self.check(list)?;
        let node = self.last_returned.ok_or(ListError::IllegalCursorState)?;
        if node == GHOST {
            return Err(self.stale(list));
        }
        if node == self.current {
            // stepped back onto `node`, so the cursor moves on to its successor
            self.current = list.next_of(node);
        } else {
            self.index -= 1;
        }
        let element = list.detach_node(node);
        self.last_returned = None;
        self.expected = list.revision;
        Ok(element)
    }

    /// Replace the element most recently yielded by [`next`] or [`previous`]
    /// and return the old one.
    ///
    /// Replacing is not a structural change: no revision is bumped.
    ///
    /// # Errors
    ///
    /// - [`ListError::StaleCursor`] if the list changed behind the cursor;
    /// - [`ListError::IllegalCursorState`] if nothing was yielded since the
    ///   cursor was created or last mutated the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start();
    /// cursor.next(&list).unwrap();
    /// assert_eq!(cursor.set(&mut list, 10), Ok(1));
    /// assert!(cursor.set(&mut list, 20).is_err());
    /// assert_eq!(list.to_vec(), vec![10, 2, 3]);
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    pub fn set<T>(&mut self, list: &mut List<T>, elt: T) -> Result<T> {
        self.check(list)?;
        let node = self.last_returned.ok_or(ListError::IllegalCursorState)?;
        if node == GHOST {
            return Err(self.stale(list));
        }
        let old = std::mem::replace(list.node_element_mut(node), elt);
        self.last_returned = None;
        Ok(old)
    }

    /// Insert an element right before the cursor position.
    ///
    /// A following [`next`] does not see the new element, a following
    /// [`previous`] does. The list's revision is bumped, and the cursor
    /// follows along.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::StaleCursor`] if the list changed behind the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let mut cursor = list.cursor_start();
    /// for i in 1..=4 {
    ///     cursor.insert(&mut list, i).unwrap();
    /// }
    /// assert_eq!(cursor.next_index(), 4);
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    ///
    /// [`next`]: Cursor::next
    /// [`previous`]: Cursor::previous
    pub fn insert<T>(&mut self, list: &mut List<T>, elt: T) -> Result<()> {
        self.check(list)?;
        list.attach_node(self.current, elt);
        self.last_returned = None;
        self.index += 1;
        self.expected = list.revision;
        Ok(())
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` bundles a [`Cursor`] with an exclusive borrow of its list,
/// so the list argument is implied. As nothing else can touch the list while
/// the `CursorMut` lives, it never goes stale.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// # Examples
///
/// ```
/// use ring_list::List;
///
/// let mut list = List::from_iter(0..6);
/// let mut cursor = list.cursor_start_mut();
///
/// // Drop the odd numbers, double the others.
/// while cursor.has_next() {
///     let x = *cursor.next().unwrap();
///     if x % 2 == 1 {
///         cursor.remove().unwrap();
///     } else {
///         cursor.set(x * 2).unwrap();
///     }
/// }
/// assert_eq!(cursor.view().to_vec(), vec![0, 4, 8]);
/// ```
///
/// ```compile_fail
/// use ring_list::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.next());
/// ```
pub struct CursorMut<'a, T: 'a> {
    pub(crate) list: &'a mut List<T>,
    cursor: Cursor,
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, cursor: Cursor) -> Self {
        Self { list, cursor }
    }

    /// See [`Cursor::has_next`].
    pub fn has_next(&self) -> bool {
        self.cursor.has_next(self.list)
    }

    /// See [`Cursor::has_previous`].
    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    /// See [`Cursor::next_index`].
    pub fn next_index(&self) -> usize {
        self.cursor.next_index()
    }

    /// See [`Cursor::previous_index`].
    pub fn previous_index(&self) -> Option<usize> {
        self.cursor.previous_index()
    }

    /// See [`Cursor::next`].
    pub fn next(&mut self) -> Result<&T> {
        self.cursor.next(self.list)
    }

    /// See [`Cursor::previous`].
    pub fn previous(&mut self) -> Result<&T> {
        self.cursor.previous(self.list)
    }

    /// See [`Cursor::remove`].
    pub fn remove(&mut self) -> Result<T> {
        self.cursor.remove(self.list)
    }

    /// See [`Cursor::set`].
    pub fn set(&mut self, elt: T) -> Result<T> {
        self.cursor.set(self.list, elt)
    }

    /// See [`Cursor::insert`].
    pub fn insert(&mut self, elt: T) -> Result<()> {
        self.cursor.insert(self.list, elt)
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Release the list and keep the position as a detached cursor.
    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("index", &self.cursor.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::List;

    fn is_stale<T>(result: Result<T, ListError>) -> bool {
        matches!(result, Err(ListError::StaleCursor { .. }))
    }

    #[test]
    fn cursor_forward() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor_start();
        for i in 0..10 {
            assert!(cursor.has_next(&list));
            assert_eq!(cursor.next_index(), i as usize);
            assert_eq!(cursor.next(&list), Ok(&i));
        }
        assert!(!cursor.has_next(&list));
        assert_eq!(cursor.next(&list), Err(ListError::EndOfSequence));
        assert_eq!(cursor.next_index(), 10);
    }

    #[test]
    fn cursor_backward_from_end() {
        let list = List::from_iter(0..40);
        let mut cursor = list.cursor(40).unwrap();
        assert!(!cursor.has_next(&list));
        for expected in (0..40).rev() {
            assert!(cursor.has_previous());
            assert_eq!(cursor.previous(&list), Ok(&expected));
            assert_eq!(cursor.next_index(), expected as usize);
            assert_eq!(
                cursor.previous_index(),
                (expected as usize).checked_sub(1)
            );
        }
        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.previous(&list), Err(ListError::EndOfSequence));
    }

    #[test]
    fn cursor_back_and_forth() {
        let list = List::from(['a', 'b', 'c']);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.next(&list), Ok(&'a'));
        assert_eq!(cursor.next(&list), Ok(&'b'));
        assert_eq!(cursor.previous(&list), Ok(&'b'));
        assert_eq!(cursor.previous(&list), Ok(&'a'));
        assert_eq!(cursor.next(&list), Ok(&'a'));
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(&list), Ok(&'b'));
    }

    #[test]
    fn cursor_insert_into_empty() {
        let mut list = List::new();
        let mut cursor = list.cursor_start();
        for i in 1..=4 {
            cursor.insert(&mut list, i).unwrap();
        }
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.len(), 4);
        assert!(!cursor.has_next(&list));
        // inserted elements are behind the cursor
        assert_eq!(cursor.previous(&list), Ok(&4));
    }

    #[test]
    fn cursor_insert_before_current() {
        let mut list = List::from([1, 3]);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();
        cursor.insert(&mut list, 2).unwrap();
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.next(&list), Ok(&3));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        // insertion clears the last yielded element
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();
        cursor.insert(&mut list, 0).unwrap();
        assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalCursorState));
        assert_eq!(cursor.set(&mut list, 9), Err(ListError::IllegalCursorState));
    }

    #[test]
    fn cursor_remove_only_element() {
        let mut list = List::from([1]);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();
        assert_eq!(cursor.remove(&mut list), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(!cursor.has_next(&list));
        assert!(!cursor.has_previous());
        assert_eq!(cursor.remove(&mut list), Err(ListError::IllegalCursorState));
    }

    #[test]
    fn cursor_remove_while_walking_backward() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_end();
        while cursor.has_previous() {
            let x = *cursor.previous(&list).unwrap();
            if x % 2 == 0 {
                assert_eq!(cursor.remove(&mut list), Ok(x));
            }
        }
        assert_eq!(list.to_vec(), vec![1, 3, 5]);
        assert_eq!(cursor.next(&list), Ok(&1));
    }

    #[test]
    fn cursor_set_keeps_other_cursors() {
        let mut list = List::from_iter(0..4);
        let mut walker = list.cursor_start();
        let mut editor = list.cursor(2).unwrap();
        editor.next(&list).unwrap();
        assert_eq!(editor.set(&mut list, 20), Ok(2));
        list.set(0, 10).unwrap();
        assert_eq!(walker.next(&list), Ok(&10));
        assert_eq!(walker.next(&list), Ok(&1));
        assert_eq!(walker.next(&list), Ok(&20));
    }

    #[test]
    fn cursor_detects_list_mutation() {
        let mut list = List::from_iter(0..4);
        let mut cursor = list.cursor_start();
        cursor.next(&list).unwrap();

        list.push_back(4);
        assert!(is_stale(cursor.next(&list)));
        assert!(is_stale(cursor.previous(&list)));
        assert!(is_stale(cursor.remove(&mut list)));
        assert!(is_stale(cursor.set(&mut list, 0)));
        assert!(is_stale(cursor.insert(&mut list, 0)));
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4]);

        let mutations: [fn(&mut List<i32>); 5] = [
            |l| l.push_back(9),
            |l| l.insert(1, 9).unwrap(),
            |l| {
                l.remove(1).unwrap();
            },
            |l| assert!(l.remove_item(&0)),
            |l| l.clear(),
        ];
        for mutate in mutations {
            let mut list = List::from_iter(0..4);
            let mut cursor = list.cursor_start();
            mutate(&mut list);
            assert_eq!(
                cursor.next(&list).unwrap_err(),
                ListError::StaleCursor {
                    expected: 4,
                    actual: 5
                }
            );
        }
    }

    #[test]
    fn cursor_staleness_checked_first() {
        let mut list = List::<i32>::new();
        let mut cursor = list.cursor_start();
        list.clear();
        // at the end with nothing yielded, but staleness wins
        assert!(is_stale(cursor.next(&list)));
        assert!(is_stale(cursor.remove(&mut list)));
    }

    #[test]
    fn cursor_own_mutation_invalidates_others() {
        let mut list = List::from_iter(0..4);
        let mut first = list.cursor_start();
        let mut second = list.cursor_start();

        first.next(&list).unwrap();
        first.remove(&mut list).unwrap();
        first.insert(&mut list, 7).unwrap();
        assert_eq!(first.next(&list), Ok(&1));
        assert!(is_stale(second.next(&list)));
        assert_eq!(list.to_vec(), vec![7, 1, 2, 3]);
    }

    #[test]
    fn cursor_on_foreign_list() {
        let list = List::from_iter(0..10);
        let mut cursor = list.cursor(8).unwrap();

        // same revision, but the slot the cursor points at is vacant
        let mut other = List::from_iter(0..9);
        other.pop_back();
        assert_eq!(other.revision(), list.revision());
        assert!(is_stale(cursor.next(&other)));

        // same revision, but the cursor lies beyond the end
        let mut cursor = list.cursor_end();
        let mut other = List::from_iter(0..5);
        other.clear();
        (0..4).for_each(|i| other.push_back(i));
        assert_eq!(other.revision(), list.revision());
        assert!(is_stale(cursor.previous(&other)));
    }

    #[test]
    fn cursor_with_vacant_last_yield() {
        let list = List::from_iter(0..3);
        let mut cursor = list.cursor_start();
        assert_eq!(cursor.next(&list), Ok(&0));

        // same revision, the cursor position is linked, but the slot it
        // last yielded is vacant
        let mut other = List::from_iter(0..2);
        other.pop_front();
        assert_eq!(other.revision(), list.revision());
        assert!(is_stale(cursor.remove(&mut other)));
        assert!(is_stale(cursor.set(&mut other, 9)));
        assert_eq!(other.to_vec(), vec![1]);
    }

    #[test]
    fn cursor_mut_protocol() {
        let mut list = List::from_iter(0..6);
        let mut cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.next(), Ok(&2));
        assert_eq!(cursor.remove(), Ok(2));
        cursor.insert(20).unwrap();
        assert_eq!(cursor.previous(), Ok(&20));
        assert_eq!(cursor.set(21), Ok(20));
        assert!(cursor.has_next());
        assert!(cursor.has_previous());
        let detached = cursor.into_cursor();
        assert_eq!(detached.next_index(), 2);
        assert_eq!(list.to_vec(), vec![0, 1, 21, 3, 4, 5]);
    }
}
