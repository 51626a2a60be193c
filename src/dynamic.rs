//! Growable sequence exposing the classic dynamic-array vocabulary.
//!
//! Storage, growth and allocation are delegated to [`Vec`]; this type only adds bounds-checked
//! positional modifiers that report [`OutOfRange`] instead of panicking.

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::ops::IndexMut;
use core::ops::Range;
use core::slice;

use crate::OutOfRange;
use crate::display::write_spaced;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynSeq<T> {
    items: Vec<T>,
}

impl<T> DynSeq<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// `len` copies of `value`.
    pub fn with_value(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: alloc::vec![value; len],
        }
    }

    /// Replaces the contents with `len` copies of `value`.
    pub fn assign(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.items.clear();
        self.items.resize(len, value);
    }

    /// Replaces the contents with the items yielded by `iter`.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.clear();
        self.items.extend(iter);
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // ---- capacity --------------------------------------------------------

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Upper bound on the number of elements an allocation could ever hold.
    #[inline]
    pub const fn max_len(&self) -> usize {
        let size = core::mem::size_of::<T>();
        isize::MAX.unsigned_abs() / if size == 0 { 1 } else { size }
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Grows with sentinel values or truncates to `len`.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.items.resize_with(len, T::default);
    }

    pub fn resize_with_value(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.items.resize(len, value);
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
    }

    // ---- element access --------------------------------------------------

    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.items.len();
        self.items.get(index).ok_or(OutOfRange::new(index, len))
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.items.len();
        self.items.get_mut(index).ok_or(OutOfRange::new(index, len))
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.items.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    // ---- modifiers -------------------------------------------------------

    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let len = self.items.len();
        if index > len {
            return Err(OutOfRange::new(index, len));
        }
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    pub fn erase(&mut self, index: usize) -> Result<T, OutOfRange> {
        let len = self.items.len();
        if index >= len {
            return Err(OutOfRange::new(index, len));
        }
        Ok(self.items.remove(index))
    }

    /// Removes the elements in `range`. Nothing is removed if the range is inverted or extends past the end.
    pub fn erase_range(&mut self, range: Range<usize>) -> Result<(), OutOfRange> {
        let len = self.items.len();
        if range.end > len {
            return Err(OutOfRange::new(range.end, len));
        }
        if range.start > range.end {
            return Err(OutOfRange::new(range.start, len));
        }
        self.items.drain(range);
        Ok(())
    }

    /// Removes every element equal to `value` and returns how many were dropped.
    pub fn remove_all_equal(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        before - self.items.len()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.items, &mut other.items);
    }
}

impl<T> Default for DynSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const K: usize> From<[T; K]> for DynSeq<T> {
    fn from(items: [T; K]) -> Self {
        Self { items: Vec::from(items) }
    }
}

impl<T> From<DynSeq<T>> for Vec<T> {
    fn from(seq: DynSeq<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for DynSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for DynSeq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> AsRef<[T]> for DynSeq<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for DynSeq<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for DynSeq<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> IntoIterator for DynSeq<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a DynSeq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynSeq<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for DynSeq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(&self.items, f)
    }
}
