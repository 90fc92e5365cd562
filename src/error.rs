// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors returned by [`SeqList`](crate::SeqList) operations.

use derive_more::{Display, Error};

/// Error returned when a list operation is rejected.
///
/// A rejected call never mutates the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ListError {
    /// An index-based access (get, insert, delete, set) used an invalid index.
    #[display("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Delete was attempted on an empty list.
    #[display("list is empty")]
    Empty,

    /// A linear search scanned the whole list without a match.
    #[display("value not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = ListError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for list of length 3");
        assert_eq!(ListError::Empty.to_string(), "list is empty");
        assert_eq!(ListError::NotFound.to_string(), "value not found");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ListError::NotFound);
        assert!(err.source().is_none());
    }
}
