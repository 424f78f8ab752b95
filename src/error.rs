use thiserror::Error;

/// Errors reported by [`List`](crate::List) and its cursors.
///
/// Every fallible operation validates its arguments before touching the
/// list, so an `Err` always means the list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index lies outside the bounds accepted by the operation.
    ///
    /// Reads and removals accept `0..len`, insertions and cursor positions
    /// accept `0..=len`.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range whose end comes before its start.
    #[error("range end {to} is before range start {from}")]
    InvalidRange { from: usize, to: usize },

    /// A cursor stepped past either end of the list.
    #[error("cursor stepped past the end of the list")]
    EndOfSequence,

    /// A cursor was asked to remove or replace an element before it
    /// yielded one, or after its last yield was already consumed.
    #[error("cursor has no element to operate on; call `next` or `previous` first")]
    IllegalCursorState,

    /// The list was structurally changed by someone other than this cursor.
    #[error("cursor expected list revision {expected}, found {actual}")]
    StaleCursor { expected: u64, actual: u64 },

    /// A list was to be built from a source that was not supplied.
    #[error("no source sequence was supplied")]
    NullSource,

    /// A bulk operation was called without its collection argument.
    #[error("no collection was supplied")]
    NullCollection,
}

pub type Result<T, E = ListError> = std::result::Result<T, E>;
