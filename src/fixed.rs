//! Fixed-capacity sequence with simulated deletion and insertion.
//!
//! A [`FixedSeq`] always holds exactly `N` slots. Since its length can never change, "deleting" shifts the
//! following slots left and writes the sentinel value (`T::default()`) into the vacated last slot, and
//! "inserting" is plain assignment into a slot the caller considers unused. The container does not track
//! which slots are live; that bookkeeping belongs to the caller.

use core::array;
use core::fmt;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;

use crate::OutOfRange;
use crate::display::write_spaced;

/// An owned, contiguous block of exactly `N` slots.
///
/// `len()` and `capacity()` are both `N` for the whole lifetime of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedSeq<T, const N: usize> {
    slots: [T; N],
}

#[track_caller]
const fn assert_in_bounds<const I: usize, const N: usize>() {
    if I >= N {
        const_panic::concat_panic!("index ", I, " out of range for FixedSeq of length ", N)
    }
}

#[track_caller]
const fn assert_non_empty<const N: usize>() {
    if N == 0 {
        const_panic::concat_panic!("FixedSeq of length ", N, " has no first or last slot")
    }
}

impl<T: Default, const N: usize> FixedSeq<T, N> {
    /// Creates a sequence with every slot holding the sentinel value.
    pub fn new() -> Self {
        Self {
            slots: array::from_fn(|_| T::default()),
        }
    }

    /// List-initializes the leading slots from `values` and pads the rest with the sentinel value.
    ///
    /// Fails when `values` does not fit; the reported index is the last position that would have been written.
    pub fn from_partial(values: &[T]) -> Result<Self, OutOfRange>
    where
        T: Clone,
    {
        if values.len() > N {
            return Err(OutOfRange::new(values.len() - 1, N));
        }
        Ok(Self {
            slots: array::from_fn(|i| values.get(i).cloned().unwrap_or_default()),
        })
    }

    /// Simulated deletion of the slot at `index`.
    ///
    /// Every slot after `index` moves one position left and the last slot is overwritten with the sentinel
    /// value. The reported length stays `N`.
    pub fn delete_at(&mut self, index: usize) -> Result<(), OutOfRange> {
        if index >= N {
            return Err(OutOfRange::new(index, N));
        }
        self.slots[index..].rotate_left(1);
        self.slots[N - 1] = T::default();
        Ok(())
    }

    /// Stable partition that drops every slot equal to `value`.
    ///
    /// Remaining slots keep their relative order at the front and the tail is overwritten with the sentinel
    /// value. Returns the index where the kept data ends. The sequence itself does not remember it.
    pub fn remove_all_equal(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let mut boundary = 0;
        for read in 0..N {
            if self.slots[read] != *value {
                self.slots.swap(boundary, read);
                boundary += 1;
            }
        }
        self.slots[boundary..].fill_with(T::default);
        boundary
    }
}

impl<T, const N: usize> FixedSeq<T, N> {
    /// List-initializes every slot.
    #[inline]
    pub const fn from_array(slots: [T; N]) -> Self {
        Self { slots }
    }

    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.slots
    }

    /// Bounds-checked access.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.slots.get(index).ok_or(OutOfRange::new(index, N))
    }

    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.slots.get_mut(index).ok_or(OutOfRange::new(index, N))
    }

    /// Access by an index fixed at build time.
    ///
    /// An index that is not below `N` is rejected while compiling, never at run time:
    ///
    /// ```compile_fail
    /// let seq = seq_rs::FixedSeq::from_array([1, 2, 3]);
    /// let _ = seq.get_const::<3>(); // error: index 3 out of range for FixedSeq of length 3
    /// ```
    #[inline]
    pub const fn get_const<const I: usize>(&self) -> &T {
        const { assert_in_bounds::<I, N>() };
        &self.slots[I]
    }

    #[inline]
    pub const fn get_const_mut<const I: usize>(&mut self) -> &mut T {
        const { assert_in_bounds::<I, N>() };
        &mut self.slots[I]
    }

    /// Slot `0`. A zero-length sequence fails to build:
    ///
    /// ```compile_fail
    /// let seq = seq_rs::FixedSeq::<u8, 0>::new();
    /// let _ = seq.first();
    /// ```
    #[inline]
    pub const fn first(&self) -> &T {
        const { assert_non_empty::<N>() };
        &self.slots[0]
    }

    /// Slot `N - 1`. A zero-length sequence fails to build:
    ///
    /// ```compile_fail
    /// let seq = seq_rs::FixedSeq::<u8, 0>::new();
    /// let _ = seq.last();
    /// ```
    #[inline]
    pub const fn last(&self) -> &T {
        const { assert_non_empty::<N>() };
        &self.slots[N - 1]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn max_len(&self) -> usize {
        N
    }

    /// Only a zero-length sequence is empty; sentinel slots still count.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Overwrites every slot with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.slots.fill(value);
    }

    /// Exchanges all slots with `other`.
    #[inline]
    pub fn swap_with(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Simulated insertion: overwrites slot `index` whether it held the sentinel or a live value.
    #[inline]
    pub fn assign_at(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        *self.at_mut(index)? = value;
        Ok(())
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.slots.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.slots.iter_mut()
    }
}

impl<T: Default, const N: usize> Default for FixedSeq<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedSeq<T, N> {
    fn from(slots: [T; N]) -> Self {
        Self::from_array(slots)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedSeq<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.slots
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedSeq<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

// Unchecked access: an index outside `0..N` panics.
impl<T, const N: usize> Index<usize> for FixedSeq<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedSeq<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T, const N: usize> IntoIterator for FixedSeq<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedSeq<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedSeq<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedSeq<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_spaced(&self.slots, f)
    }
}

#[cfg(test)]
mod tests {
    use proptest::array::uniform8;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_is_all_sentinel() {
        let seq = FixedSeq::<i32, 4>::new();
        assert_eq!(seq.into_array(), [0; 4]);
    }

    #[test]
    fn partial_init_pads_with_sentinel() {
        let mut seq = FixedSeq::<i32, 5>::from_partial(&[100, 200, 300]).unwrap();
        assert_eq!(seq.as_slice(), &[100, 200, 300, 0, 0]);

        seq.assign_at(3, 400).unwrap();
        assert_eq!(seq.as_slice(), &[100, 200, 300, 400, 0]);

        seq.assign_at(1, 250).unwrap();
        assert_eq!(seq.as_slice(), &[100, 250, 300, 400, 0]);
    }

    #[test]
    fn partial_init_rejects_overflow() {
        let err = FixedSeq::<u8, 2>::from_partial(&[1, 2, 3]).unwrap_err();
        assert_eq!(err, OutOfRange::new(2, 2));
    }

    #[test]
    fn const_index_matches_checked() {
        let seq = FixedSeq::from_array([1, 2, 3, 4, 5]);
        assert_eq!(seq.get_const::<0>(), seq.at(0).unwrap());
        assert_eq!(seq.get_const::<2>(), &3);
        assert_eq!(seq.get_const::<4>(), &5);
    }

    #[test]
    fn const_index_mut_writes_slot() {
        let mut seq = FixedSeq::from_array([1, 2, 3]);
        *seq.get_const_mut::<1>() = 20;
        assert_eq!(seq[1], 20);
    }

    #[test]
    fn first_and_last() {
        let seq = FixedSeq::from_array([1, 2, 3, 4, 5]);
        assert_eq!(*seq.first(), 1);
        assert_eq!(*seq.last(), 5);

        let single = FixedSeq::from_array(['x']);
        assert_eq!(single.first(), single.last());
    }

    #[test]
    fn zero_length_is_empty() {
        let seq = FixedSeq::<u32, 0>::new();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.at(0), Err(OutOfRange::new(0, 0)));
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn delete_at_shifts_and_marks_tail() {
        let mut seq = FixedSeq::from_array([100, 200, 300, 400, 500]);
        seq.delete_at(2).unwrap();
        assert_eq!(seq.as_slice(), &[100, 200, 400, 500, 0]);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn delete_at_last_slot() {
        let mut seq = FixedSeq::from_array([1, 2, 3]);
        seq.delete_at(2).unwrap();
        assert_eq!(seq.as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn delete_at_out_of_range_leaves_state() {
        let mut seq = FixedSeq::from_array([1, 2, 3]);
        assert_eq!(seq.delete_at(3), Err(OutOfRange::new(3, 3)));
        assert_eq!(seq.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn remove_all_equal_keeps_order() {
        let mut seq = FixedSeq::from_array([1, 2, 3, 4, 3, 6, 7]);
        let boundary = seq.remove_all_equal(&3);
        assert_eq!(seq.as_slice(), &[1, 2, 4, 6, 7, 0, 0]);
        assert_eq!(boundary, 5);
        assert_eq!(seq.capacity(), 7);
    }

    #[test]
    fn remove_all_equal_without_match_is_noop() {
        let mut seq = FixedSeq::from_array([5, 6, 7]);
        assert_eq!(seq.remove_all_equal(&9), 3);
        assert_eq!(seq.as_slice(), &[5, 6, 7]);
    }

    #[test]
    fn display_space_separated() {
        let seq = FixedSeq::from_array([1, 2, 3, 4, 5]);
        assert_eq!(seq.to_string(), "1 2 3 4 5");
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = FixedSeq::from_array([10; 5]);
        let mut b = FixedSeq::from_array([5, 4, 3, 2, 1]);
        a.swap_with(&mut b);
        assert_eq!(a.as_slice(), &[5, 4, 3, 2, 1]);
        assert_eq!(b.as_slice(), &[10; 5]);
    }

    #[test]
    fn reverse_iteration() {
        let seq = FixedSeq::from_array([1, 2, 3]);
        let reversed: Vec<_> = seq.iter().rev().copied().collect();
        assert_eq!(reversed, [3, 2, 1]);
    }

    proptest! {
        #[test]
        fn checked_matches_unchecked(values in uniform8(any::<i32>()), index in 0usize..8) {
            let seq = FixedSeq::from_array(values);
            prop_assert_eq!(seq.at(index), Ok(&seq[index]));
        }

        #[test]
        fn checked_rejects_out_of_range(values in uniform8(any::<i32>()), index in 8usize..usize::MAX) {
            let seq = FixedSeq::from_array(values);
            prop_assert_eq!(seq.at(index), Err(OutOfRange::new(index, 8)));
        }

        #[test]
        fn fill_overwrites_every_slot(values in uniform8(any::<i32>()), value: i32) {
            let mut seq = FixedSeq::from_array(values);
            seq.fill(value);
            prop_assert!(seq.iter().all(|slot| *slot == value));
            prop_assert_eq!(seq.len(), 8);
        }

        #[test]
        fn swap_is_own_inverse(a in uniform8(any::<i32>()), b in uniform8(any::<i32>())) {
            let mut left = FixedSeq::from_array(a);
            let mut right = FixedSeq::from_array(b);
            left.swap_with(&mut right);
            prop_assert_eq!(left.len(), 8);
            prop_assert_eq!(right.capacity(), 8);
            left.swap_with(&mut right);
            prop_assert_eq!(left.into_array(), a);
            prop_assert_eq!(right.into_array(), b);
        }

        #[test]
        fn delete_at_matches_remove_plus_sentinel(values in uniform8(any::<i32>()), index in 0usize..8) {
            let mut expected = values.to_vec();
            expected.remove(index);
            expected.push(0);

            let mut seq = FixedSeq::from_array(values);
            seq.delete_at(index).unwrap();
            prop_assert_eq!(seq.as_slice(), expected.as_slice());
            prop_assert_eq!(seq.capacity(), 8);
        }

        #[test]
        fn remove_all_equal_is_stable_partition(values in uniform8(0i32..4), target in 0i32..4) {
            let mut expected: Vec<i32> = values.iter().copied().filter(|v| *v != target).collect();
            let kept = expected.len();
            expected.resize(8, 0);

            let mut seq = FixedSeq::from_array(values);
            prop_assert_eq!(seq.remove_all_equal(&target), kept);
            prop_assert_eq!(seq.as_slice(), expected.as_slice());
            prop_assert_eq!(seq.len(), 8);
        }

        #[test]
        fn assign_at_is_idempotent(values in uniform8(any::<i32>()), index in 0usize..8, value: i32) {
            let mut once = FixedSeq::from_array(values);
            once.assign_at(index, value).unwrap();
            let mut twice = once;
            twice.assign_at(index, value).unwrap();
            prop_assert_eq!(once, twice);
            prop_assert_eq!(once[index], value);
            prop_assert_eq!(twice.len(), 8);
            prop_assert_eq!(twice.capacity(), 8);
        }
    }
}
