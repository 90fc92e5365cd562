// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Construction-time settings for a [`SeqList`](crate::SeqList).

/// How `get` validates its index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoundsCheck {
    /// Accept `index < len`.
    #[default]
    Strict,
    /// Reject every index, reproducing the historical `get` whose guard
    /// (`index > len || index <= len`) is true for all indices.
    Legacy,
}

/// Settings fixed when a list is created.
///
/// ```
/// use seqlist::{BoundsCheck, ListConfig};
///
/// let config = ListConfig::new().bounds(BoundsCheck::Legacy).capacity(16);
/// assert_eq!(config.bounds, BoundsCheck::Legacy);
/// assert_eq!(config.capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListConfig {
    /// Index policy for `get`.
    pub bounds: BoundsCheck,
    /// Capacity reserved on construction and on `init`.
    pub capacity: usize,
}

impl ListConfig {
    pub fn new() -> ListConfig {
        return ListConfig::default();
    }

    pub fn bounds(mut self, bounds: BoundsCheck) -> ListConfig {
        self.bounds = bounds;
        return self;
    }

    pub fn capacity(mut self, capacity: usize) -> ListConfig {
        self.capacity = capacity;
        return self;
    }
}
