//! ValueVector — the owning row/argument container.

use std::ops::Index;

use serde::Serialize;
use smallvec::SmallVec;

use super::Value;

/// Elements kept inline before the vector spills to the heap.
const INLINE: usize = 4;

/// Owning, growable sequence of [`Value`]s.
///
/// Pushing moves the value in, so an owned string's buffer now belongs to
/// the vector. Dropping the vector drops every element exactly once, then
/// the backing storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValueVector<'a> {
    items: SmallVec<[Value<'a>; INLINE]>,
}

impl<'a> ValueVector<'a> {
    pub fn new() -> Self {
        Self { items: SmallVec::new() }
    }

    /// Vector with room for at least `cap` values.
    pub fn with_capacity(cap: usize) -> Self {
        Self { items: SmallVec::with_capacity(cap) }
    }

    /// Append one value, doubling capacity when full.
    pub fn push(&mut self, value: Value<'a>) {
        if self.items.len() == self.items.capacity() {
            let cap = self.items.capacity();
            self.items.reserve_exact(cap.max(1));
            tracing::trace!(from = cap, to = self.items.capacity(), "value vector grown");
        }
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<Value<'a>> {
        self.items.pop()
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
    pub fn capacity(&self) -> usize { self.items.capacity() }

    pub fn get(&self, index: usize) -> Option<&Value<'a>> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[Value<'a>] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value<'a>> {
        self.items.iter()
    }

    /// Drop every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a> Index<usize> for ValueVector<'a> {
    type Output = Value<'a>;

    fn index(&self, index: usize) -> &Value<'a> {
        &self.items[index]
    }
}

impl<'a> Extend<Value<'a>> for ValueVector<'a> {
    fn extend<I: IntoIterator<Item = Value<'a>>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a> FromIterator<Value<'a>> for ValueVector<'a> {
    fn from_iter<I: IntoIterator<Item = Value<'a>>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<'a> IntoIterator for ValueVector<'a> {
    type Item = Value<'a>;
    type IntoIter = smallvec::IntoIter<[Value<'a>; INLINE]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'v, 'a> IntoIterator for &'v ValueVector<'a> {
    type Item = &'v Value<'a>;
    type IntoIter = std::slice::Iter<'v, Value<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
