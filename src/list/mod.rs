use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

use crate::error::{ListError, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

/// Position of a node in the arena of a [`List`].
pub(crate) type NodeId = usize;

/// Slot of the ghost node. It is allocated together with the list and is
/// never freed.
pub(crate) const GHOST: NodeId = 0;

/// The `List` is a doubly-linked list anchored by a ghost node.
///
/// Nodes live in an arena owned by the list and are linked by their slot
/// numbers. The ghost node sits in slot `0` and closes the chain into a ring:
/// its `next` is the first element and its `prev` is the last one (or the
/// ghost itself when the list is empty).
///
/// Splicing a node in or out takes *O*(1) time once the position is known.
/// Positional access walks the ring and takes *O*(*n*) time.
///
/// Every structural change (insertion, removal, [`clear`]) bumps the list's
/// [`revision`]. Detached [`Cursor`]s remember the revision they last saw and
/// refuse to work on a list that has been changed behind their back.
///
/// # Naming Conventions
///
/// - `front`/`back`: the first and last element nodes;
/// - `start..end`: a half-open range of nodes, where `end` is probably the
///   ghost node.
///
/// [`clear`]: List::clear
/// [`revision`]: List::revision
pub struct List<T> {
    pub(crate) nodes: Vec<Node<T>>,
    /// vacant slots, reused by the next insertions
    free: Vec<NodeId>,
    /// the length of the list
    pub(crate) len: usize,
    pub(crate) revision: u64,
}

pub(crate) struct Node<T> {
    pub(crate) next: NodeId,
    pub(crate) prev: NodeId,
    /// `None` for the ghost node and for vacant slots.
    pub(crate) element: Option<T>,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> NodeId {
        self.nodes[GHOST].next
    }
    pub(crate) fn back_node(&self) -> NodeId {
        self.nodes[GHOST].prev
    }
    pub(crate) fn next_of(&self, node: NodeId) -> NodeId {
        self.nodes[node].next
    }
    pub(crate) fn prev_of(&self, node: NodeId) -> NodeId {
        self.nodes[node].prev
    }

    /// Returns `true` if `node` is the ghost or a node currently linked into
    /// the list. Ids held by cursors are vetted with this before use.
    pub(crate) fn is_linked(&self, node: NodeId) -> bool {
        node == GHOST || self.live_element(node).is_some()
    }

    /// The element of `node`, or `None` for the ghost node, a vacant slot or
    /// a slot beyond the arena.
    pub(crate) fn live_element(&self, node: NodeId) -> Option<&T> {
        self.nodes.get(node)?.element.as_ref()
    }

    pub(crate) fn live_element_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(node)?.element.as_mut()
    }

    /// The element of a node found by walking the ring.
    ///
    /// Walks never stop on the ghost node when the index was checked, so the
    /// element is always present.
    pub(crate) fn node_element(&self, node: NodeId) -> &T {
        match self.live_element(node) {
            Some(element) => element,
            None => unreachable!("node {} holds no element", node),
        }
    }

    pub(crate) fn node_element_mut(&mut self, node: NodeId) -> &mut T {
        match self.live_element_mut(node) {
            Some(element) => element,
            None => unreachable!("node {} holds no element", node),
        }
    }

    fn connect(&mut self, prev: NodeId, next: NodeId) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    fn alloc(&mut self, element: T) -> NodeId {
        let node = Node {
            next: GHOST,
            prev: GHOST,
            element: Some(element),
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Attach a new node holding `element` right before `next`, and return
    /// its id.
    ///
    /// `next` must be linked into the list (possibly the ghost node).
    pub(crate) fn attach_node(&mut self, next: NodeId, element: T) -> NodeId {
        let prev = self.prev_of(next);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.alloc(element);
        self.connect(prev, node);
        self.connect(node, next);
        self.len += 1;
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, node);
            self.assert_adjacent(node, next);
        }
        self.bump("attach");
        node
    }

    /// Detach the element node `node` from the list, and return its element.
    ///
    /// The slot is recycled by later insertions.
    pub(crate) fn detach_node(&mut self, node: NodeId) -> T {
        debug_assert_ne!(node, GHOST, "Cannot detach the ghost node");
        self.connect(self.prev_of(node), self.next_of(node));
        self.len -= 1;
        let element = self.nodes[node].element.take();
        self.nodes[node].next = node;
        self.nodes[node].prev = node;
        self.free.push(node);
        self.bump("detach");
        match element {
            Some(element) => element,
            None => unreachable!("detached node {} held no element", node),
        }
    }

    /// Record a structural change.
    fn bump(&mut self, op: &'static str) {
        self.revision = self.revision.wrapping_add(1);
        tracing::trace!(op = op, len = self.len, revision = self.revision, "list changed");
        self.check_invariants();
    }

    /// The node `steps` positions after the front node. `steps == len` lands
    /// on the ghost node.
    pub(crate) fn walk_forward(&self, steps: usize) -> NodeId {
        (0..steps).fold(self.front_node(), |node, _| self.next_of(node))
    }

    /// The node at `index < len`, walking from whichever end is closer.
    fn walk_nearest(&self, index: usize) -> NodeId {
        if index < self.len / 2 {
            self.walk_forward(index)
        } else {
            (index + 1..self.len).fold(self.back_node(), |node, _| self.prev_of(node))
        }
    }

    /// Check an index that must name an element: `index < len`.
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            return Ok(());
        }
        Err(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Check an index that names a gap between elements: `index <= len`.
    pub(crate) fn check_position(&self, index: usize) -> Result<()> {
        if index <= self.len {
            return Ok(());
        }
        Err(ListError::IndexOutOfRange {
            index,
            len: self.len,
        })
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use ring_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        let ghost = Node {
            next: GHOST,
            prev: GHOST,
            element: None,
        };
        Self {
            nodes: vec![ghost],
            free: Vec::new(),
            len: 0,
            revision: 0,
        }
    }

    /// Create a list holding the elements of `source` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NullSource`] if `source` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let list = List::from_source(Some(vec![1, 2, 3])).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    ///
    /// let missing: Option<Vec<i32>> = None;
    /// assert_eq!(List::from_source(missing).unwrap_err(), ListError::NullSource);
    /// ```
    pub fn from_source<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(ListError::NullSource)?;
        Ok(source.into_iter().collect())
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the revision of the list.
    ///
    /// The revision starts at 0 and grows by one on every structural change.
    /// Replacing an element in place is not a structural change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list.revision(), 2);
    ///
    /// list.set(0, 5).unwrap();
    /// assert_eq!(list.revision(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.revision(), 3);
    /// ```
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all elements from the `List`.
    ///
    /// The revision is bumped exactly once, even if the list was already
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, dropping the elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free.clear();
        self.nodes[GHOST].next = GHOST;
        self.nodes[GHOST].prev = GHOST;
        self.len = 0;
        self.bump("clear");
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.live_element(self.front_node())
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let front = self.front_node();
        self.live_element_mut(front)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.back(), None);
    ///
    /// list.push_back(1);
    /// assert_eq!(list.back(), Some(&1));
    /// ```
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.live_element(self.back_node())
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let back = self.back_node();
        self.live_element_mut(back)
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        let front = self.front_node();
        self.attach_node(front, elt);
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.front_node()))
    }

    /// Appends an element to the back of a list, splicing it in right
    /// before the ghost node.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn push_back(&mut self, elt: T) {
        self.attach_node(GHOST, elt);
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.detach_node(self.back_node()))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The walk starts from the front when `index < len / 2`, and from the
    /// back otherwise, so at most `len / 2` links are followed.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from_iter(0..10);
    /// assert_eq!(list.get(2), Ok(&2));
    /// assert_eq!(list.get(8), Ok(&8));
    /// assert!(list.get(10).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.node_element(self.walk_nearest(index)))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Like [`List::get`], the walk starts from the closer end. Mutating
    /// an element in place is not a structural change.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let node = self.walk_nearest(index);
        Ok(self.node_element_mut(node))
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// The position is always found by walking from the front. The revision
    /// is left untouched, so existing cursors stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// assert_eq!(list.set(1, 4), Ok(1));
    /// assert_eq!(list.to_vec(), vec![0, 4, 2]);
    /// ```
    pub fn set(&mut self, index: usize, elt: T) -> Result<T> {
        self.check_index(index)?;
        let node = self.walk_forward(index);
        Ok(std::mem::replace(self.node_element_mut(node), elt))
    }

    /// Adds an element at the given index in the list. `index == len`
    /// appends it.
    ///
    /// The position is always found by walking from the front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert(2, 4).unwrap();
    /// list.insert(4, 5).unwrap();
    /// assert!(list.insert(6, 6).is_err());
    ///
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 3, 5]);
    /// ```
    pub fn insert(&mut self, index: usize, elt: T) -> Result<()> {
        self.check_position(index)?;
        let next = self.walk_forward(index);
        self.attach_node(next, elt);
        Ok(())
    }

    /// Removes the element at the given index and returns it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(list.remove(2), Ok(3));
    /// assert_eq!(list.to_vec(), vec![1, 2, 4, 5]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let node = self.walk_forward(index);
        Ok(self.detach_node(node))
    }

    /// Provides a detached cursor at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// ```
    pub fn cursor_start(&self) -> Cursor {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a detached cursor at the ghost node, after the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_end();
    /// assert!(!cursor.has_next(&list));
    /// assert_eq!(cursor.previous(&list), Ok(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor {
        Cursor::new(self, GHOST, self.len)
    }

    /// Provides a detached cursor whose next element is the one at `index`.
    ///
    /// The cursor is stepped forward from the front, so this takes
    /// *O*(`index`) time. By convention, the cursor is at the ghost node if
    /// `index == len`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor(1).unwrap();
    /// assert_eq!(cursor.next_index(), 1);
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, index: usize) -> Result<Cursor> {
        self.check_position(index)?;
        let mut cursor = self.cursor_start();
        cursor.seek_forward(self, index)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    /// let mut cursor = list.cursor_start_mut();
    /// cursor.insert(1).unwrap();
    /// cursor.insert(2).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2]);
    /// ```
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let cursor = self.cursor_start();
        CursorMut::new(self, cursor)
    }

    /// Provides a cursor with editing operations whose next element is the
    /// one at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index > len`.
    pub fn cursor_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        let cursor = self.cursor(index)?;
        Ok(CursorMut::new(self, cursor))
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    ///
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    ///
    /// assert_eq!(list.to_vec(), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

// Queue-style access.
impl<T> List<T> {
    /// Appends an element to the back of the list. Always returns `true`.
    pub fn offer(&mut self, elt: T) -> bool {
        self.push_back(elt);
        true
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn poll(&mut self) -> Option<T> {
        self.pop_front()
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn peek(&self) -> Option<&T> {
        self.front()
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EndOfSequence`] if the list is empty.
    pub fn element(&self) -> Result<&T> {
        self.front().ok_or(ListError::EndOfSequence)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EndOfSequence`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ring_list::{List, ListError};
    ///
    /// let mut list = List::from(["a"]);
    /// assert_eq!(list.remove_first(), Ok("a"));
    /// assert_eq!(list.remove_first(), Err(ListError::EndOfSequence));
    /// ```
    pub fn remove_first(&mut self) -> Result<T> {
        self.pop_front().ok_or(ListError::EndOfSequence)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
///
/// Panics if `index >= len`, like slice indexing does.
impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

/// # Panics
///
/// Panics if `index >= len`, like slice indexing does.
impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(debug_assertions)]
impl<T> List<T> {
    fn assert_adjacent(&self, prev: NodeId, next: NodeId) {
        assert_eq!(self.next_of(prev), next);
        assert_eq!(self.prev_of(next), prev);
    }
}

impl<T> List<T> {
    /// Walk the whole ring both ways and assert that it closes on the ghost
    /// node after exactly `len` steps.
    #[cfg(any(test, feature = "check-invariants"))]
    fn check_invariants(&self) {
        let mut node = self.front_node();
        let mut steps = 0;
        while node != GHOST {
            assert!(self.live_element(node).is_some(), "vacant node {} is linked", node);
            assert_eq!(self.prev_of(self.next_of(node)), node);
            assert!(steps < self.len, "ring is longer than {}", self.len);
            node = self.next_of(node);
            steps += 1;
        }
        assert_eq!(steps, self.len);

        let mut node = self.back_node();
        let mut steps = 0;
        while node != GHOST {
            assert!(steps < self.len, "ring is longer than {}", self.len);
            node = self.prev_of(node);
            steps += 1;
        }
        assert_eq!(steps, self.len);
        assert_eq!(self.nodes.len(), self.len + self.free.len() + 1);
    }

    #[cfg(not(any(test, feature = "check-invariants")))]
    #[inline(always)]
    fn check_invariants(&self) {}
}
