// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Contiguous growable storage behind a [`SeqList`](crate::SeqList).
//!
//! The list only needs a slice view plus push/pop at the tail; shifting is
//! done on the slice. `Vec` is the default backing. `SmallVec` keeps short
//! lists inline and spills to the heap once they outgrow the inline array.

use smallvec::{Array, SmallVec};

/// A contiguous buffer that grows and shrinks at its tail.
pub trait Buffer<T> {
    fn new() -> Self;
    fn with_capacity(capacity: usize) -> Self;
    fn len(&self) -> usize;
    fn as_slice(&self) -> &[T];
    fn as_mut_slice(&mut self) -> &mut [T];
    fn push(&mut self, value: T);
    fn pop(&mut self) -> Option<T>;
    fn clear(&mut self);
    fn reserve(&mut self, additional: usize);

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl<T> Buffer<T> for Vec<T> {
    fn new() -> Self { Vec::new() }
    fn with_capacity(capacity: usize) -> Self { Vec::with_capacity(capacity) }
    fn len(&self) -> usize { Vec::len(self) }
    fn as_slice(&self) -> &[T] { Vec::as_slice(self) }
    fn as_mut_slice(&mut self) -> &mut [T] { Vec::as_mut_slice(self) }
    fn push(&mut self, value: T) { Vec::push(self, value) }
    fn pop(&mut self) -> Option<T> { Vec::pop(self) }
    fn clear(&mut self) { Vec::clear(self) }
    fn reserve(&mut self, additional: usize) { Vec::reserve(self, additional) }
}

impl<A: Array> Buffer<A::Item> for SmallVec<A> {
    fn new() -> Self { SmallVec::new() }
    fn with_capacity(capacity: usize) -> Self { SmallVec::with_capacity(capacity) }
    fn len(&self) -> usize { SmallVec::len(self) }
    fn as_slice(&self) -> &[A::Item] { SmallVec::as_slice(self) }
    fn as_mut_slice(&mut self) -> &mut [A::Item] { SmallVec::as_mut_slice(self) }
    fn push(&mut self, value: A::Item) { SmallVec::push(self, value) }
    fn pop(&mut self) -> Option<A::Item> { SmallVec::pop(self) }
    fn clear(&mut self) { SmallVec::clear(self) }
    fn reserve(&mut self, additional: usize) { SmallVec::reserve(self, additional) }
}
