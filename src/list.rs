// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Sequential list: a zero-indexed ordered container over a contiguous buffer.
//!
//! Insert and delete shift the tail of the buffer by one slot, so both are
//! O(n) in the distance to the end. Length and emptiness are O(1).
//!
//! The list has no internal synchronization. Callers sharing one across
//! threads must serialize access themselves.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::buffer::Buffer;
use crate::config::{BoundsCheck, ListConfig};
use crate::error::ListError;

/// A growable, array-backed sequential list.
///
/// `B` selects the backing storage; see [`Buffer`].
#[derive(Clone)]
pub struct SeqList<T, B = Vec<T>> {
    elements: B,
    config: ListConfig,
    _marker: PhantomData<T>,
}

impl<T, B: Buffer<T>> SeqList<T, B> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        return self.elements.len();
    }

    /// True iff the list holds no elements.
    pub fn is_empty(&self) -> bool {
        return self.elements.is_empty();
    }

    pub fn config(&self) -> &ListConfig {
        return &self.config;
    }

    pub fn as_slice(&self) -> &[T] {
        return self.elements.as_slice();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        return self.elements.as_slice().iter();
    }

    /// Get the element at `index`.
    ///
    /// Under [`BoundsCheck::Strict`] this succeeds for `index < len`. Under
    /// [`BoundsCheck::Legacy`] it always fails.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        let slot = match self.config.bounds {
            BoundsCheck::Strict => self.elements.as_slice().get(index),
            // The legacy guard `index > len || index <= len` holds for every index.
            BoundsCheck::Legacy => None,
        };
        return slot.ok_or_else(|| self.out_of_range("get", index));
    }

    /// Index of the leftmost element equal to `value`.
    pub fn locate(&self, value: &T) -> Result<usize, ListError>
    where
        T: PartialEq,
    {
        return self
            .elements
            .as_slice()
            .iter()
            .position(|x| x == value)
            .ok_or(ListError::NotFound);
    }

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        let len = self.len();
        match self.elements.as_mut_slice().get_mut(index) {
            Some(slot) => {
                trace!(index, "set element");
                return Ok(std::mem::replace(slot, value));
            }
            None => {
                debug!(op = "set", index, len, "index out of range");
                return Err(ListError::OutOfRange { index, len });
            }
        }
    }

    fn out_of_range(&self, op: &'static str, index: usize) -> ListError {
        let len = self.len();
        debug!(op, index, len, "index out of range");
        return ListError::OutOfRange { index, len };
    }
}

impl<T: Default, B: Buffer<T>> SeqList<T, B> {
    /// Create an empty list with the default configuration.
    pub fn new() -> Self {
        return Self::with_config(ListConfig::default());
    }

    /// Create an empty list with the given configuration.
    pub fn with_config(config: ListConfig) -> Self {
        return SeqList {
            elements: B::with_capacity(config.capacity),
            config,
            _marker: PhantomData,
        };
    }

    /// Reset to a fresh empty buffer, releasing the old one.
    pub fn init(&mut self) {
        self.elements = B::with_capacity(self.config.capacity);
        trace!(capacity = self.config.capacity, "initialized list");
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.elements.clear();
        trace!(dropped, "cleared list");
    }

    /// Insert `value` at `index`, shifting `index..` one slot to the right.
    ///
    /// Valid for `index <= len`; `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len();
        if index > len {
            return Err(self.out_of_range("insert", index));
        }

        if len == 0 && index == 0 {
            self.elements.push(value);
        } else {
            // Grow by one default slot, rotate it down to `index`, then fill it.
            self.elements.push(T::default());
            let slice = self.elements.as_mut_slice();
            slice[index..].rotate_right(1);
            slice[index] = value;
        }

        trace!(index, len = len + 1, "inserted element");
        return Ok(());
    }

    /// Remove and return the element at `index`, shifting `index + 1..` left.
    ///
    /// The vacated final slot is reset to `T::default()` before the length
    /// shrinks by one.
    pub fn delete(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len();
        if len == 0 {
            debug!(op = "delete", index, "list is empty");
            return Err(ListError::Empty);
        }
        if index >= len {
            return Err(self.out_of_range("delete", index));
        }

        let slice = self.elements.as_mut_slice();
        let value = std::mem::take(&mut slice[index]);
        slice[index..].rotate_left(1);
        self.elements.pop();

        trace!(index, len = len - 1, "deleted element");
        return Ok(value);
    }
}

impl<T: Default, B: Buffer<T>> Default for SeqList<T, B> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: fmt::Debug, B: Buffer<T>> fmt::Debug for SeqList<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("SeqList")
            .field("elements", &self.elements.as_slice())
            .field("config", &self.config)
            .finish();
    }
}

impl<T: fmt::Display, B: Buffer<T>> fmt::Display for SeqList<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        return write!(f, "]");
    }
}

impl<T: PartialEq, B: Buffer<T>, C: Buffer<T>> PartialEq<SeqList<T, C>> for SeqList<T, B> {
    fn eq(&self, other: &SeqList<T, C>) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq, B: Buffer<T>> Eq for SeqList<T, B> {}

impl<'a, T, B: Buffer<T>> IntoIterator for &'a SeqList<T, B> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T: Default, B: Buffer<T>> Extend<T> for SeqList<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.elements.reserve(iter.size_hint().0);
        for value in iter {
            self.elements.push(value);
        }
    }
}

impl<T: Default, B: Buffer<T>> FromIterator<T> for SeqList<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        return list;
    }
}
