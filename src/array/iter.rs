//! Forward cursor over an array.

use super::QuaternionArray;
use crate::Quaternion;

use std::iter::FusedIterator;

/// Iterator over the elements of a [`QuaternionArray`], in index order.
///
/// The cursor re-reads the live length on every step, so it never
/// indexes past the end; the borrow it holds keeps the array from being
/// mutated while iteration is in progress.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    array: &'a QuaternionArray,
    index: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(array: &'a QuaternionArray) -> Self {
        Self { array, index: 0 }
    }
}

impl Iterator for Iter<'_> {
    type Item = Quaternion;

    fn next(&mut self) -> Option<Quaternion> {
        if self.index < self.array.len() {
            let q = self.array.data[self.index];
            self.index += 1;
            Some(q)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a QuaternionArray {
    type Item = Quaternion;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        Iter::new(self)
    }
}
