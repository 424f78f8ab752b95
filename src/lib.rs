//! This crate provides a doubly-linked list anchored by a ghost node, with
//! cursors that notice when the list was changed behind their back.
//!
//! The [`List`] allows inserting and removing elements next to a known
//! position in constant time. In compromise, accessing or mutating elements
//! by index takes *O*(*n*) time, walking from whichever end is closer.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use ring_list::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//!
//! cursor.insert(0).unwrap(); // insert 0 at the beginning of the list
//! assert_eq!(cursor.next(), Ok(&1));
//! assert_eq!(cursor.view(), &List::from([0, 1, 2, 3, 4]));
//!
//! cursor.next().unwrap(); // step over 2, and remove it.
//! assert_eq!(cursor.remove(), Ok(2));
//! assert_eq!(list.to_vec(), vec![0, 1, 3, 4]);
//! ```
//!
//! # Memory Layout
//!
//! All nodes live in one arena, and link to each other by slot number:
//! ```text
//!                        nodes: Vec<Node<T>>
//!      slot 0             slot 1            slot 2            slot 3
//! ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//! │ next: 1      │  │ next: 3      │  │ (vacant)     │  │ next: 0      │
//! │ prev: 3      │  │ prev: 0      │  │ next: 2      │  │ prev: 1      │
//! │ element: --  │  │ element: a   │  │ prev: 2      │  │ element: b   │
//! └──────────────┘  └──────────────┘  └──────────────┘  └──────────────┘
//!      ghost            front                              back
//!
//!                        free: [2]
//! ```
//! The `List` contains:
//! - the arena `nodes`, whose slot 0 always holds the ghost node;
//! - a stack `free` of vacant slots, reused by later insertions;
//! - a length field `len`;
//! - a `revision` counter, bumped by every structural change.
//!
//! The ghost node carries *NO* element. Its `next` is the first element and
//! its `prev` the last one, so in an empty list both point back to the ghost
//! itself. Walking `next` from the ghost visits every element once and
//! returns to the ghost after exactly `len` steps.
//!
//! In convention, in a list with length *n*, the elements are indexed by 0,
//! 1, ..., *n* - 1, and the ghost node stands for position *n*.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators and iterate the list like an array (fused and
//! non-cyclic). [`IterMut`] provides mutability of the elements (but not the
//! linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use ring_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused and non-cyclic
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] sits in a gap between two elements. In a list with length
//! *n* there are *n* + 1 gaps, indexed by 0, 1, ..., *n*. Stepping with
//! `next` or `previous` yields the element crossed, and that element is the
//! one a following `remove` or `set` acts on.
//!
//! A `Cursor` does not borrow the list; each call takes the list as an
//! argument. The cursor remembers the list's revision, so when anything else
//! changes the structure of the list, the cursor reports
//! [`ListError::StaleCursor`] instead of walking freed nodes. Mutations made
//! through the cursor itself keep it valid.
//!
//! [`CursorMut`] bundles a cursor with an exclusive borrow of the list, for
//! when nothing else needs to touch it meanwhile.
//!
//! ## Examples
//!
//! ```
//! use ring_list::{List, ListError};
//!
//! let mut list = List::from(["a", "b", "c"]);
//! let mut cursor = list.cursor_end();
//!
//! assert_eq!(cursor.previous(&list), Ok(&"c"));
//! assert_eq!(cursor.previous(&list), Ok(&"b"));
//! assert_eq!(cursor.remove(&mut list), Ok("b")); // becomes ["a", "c"]
//! assert_eq!(cursor.next_index(), 1);
//!
//! list.push_front("z"); // a change the cursor did not make
//! assert!(matches!(
//!     cursor.previous(&list),
//!     Err(ListError::StaleCursor { .. })
//! ));
//! ```
//!
//! # Absent values
//!
//! Elements may be absent by making the element type an `Option`. Searches
//! such as [`List::index_of`] then match `None` against `None`. Operations
//! whose input collection may be missing altogether take an `Option` of it
//! and fail with [`ListError::NullSource`] or [`ListError::NullCollection`].
//!
//! # Features
//!
//! - `check-invariants`: walk the whole ring after every structural change
//!   and panic if it is malformed. The crate's own unit tests always do this.
//! - `serde`: serialize a `List` as a plain sequence of its elements. Only
//!   the elements are written; the arena layout and the revision are not,
//!   and a deserialized list starts at revision 0.
//!
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut

#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub use error::{ListError, Result};
pub use membership::Membership;

pub mod list;

mod error;
mod membership;
