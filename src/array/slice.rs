//! Extended `start:stop:step` slice selection.

use crate::error::{QuatError, Result};

/// A `start:stop:step` selector over an array, with the usual extended
/// slicing rules: omitted bounds default to the ends, negative bounds
/// count from the back, out-of-range bounds clamp, and the step may be
/// negative but never zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// Selector with explicit bounds and step.
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// Selects every element in order (`::1`).
    pub const fn all() -> Self {
        Self::new(None, None, 1)
    }

    /// Selects `start..stop` with step 1.
    pub const fn range(start: isize, stop: isize) -> Self {
        Self::new(Some(start), Some(stop), 1)
    }

    /// Selects every `step`-th element over the whole array.
    pub const fn step_by(step: isize) -> Self {
        Self::new(None, None, step)
    }

    /// Normalises against `len`, producing concrete start/step and the
    /// number of selected positions. Fails only on a zero step.
    pub(crate) fn resolve(&self, len: usize) -> Result<ResolvedSlice> {
        if self.step == 0 {
            return Err(QuatError::value("slice step cannot be zero"));
        }
        let len = len as isize;
        let step = self.step;

        let clamp = |bound: Option<isize>, default: isize| -> isize {
            match bound {
                None => default,
                Some(mut b) => {
                    if b < 0 {
                        b += len;
                        if b < 0 {
                            b = if step < 0 { -1 } else { 0 };
                        }
                    } else if b >= len {
                        b = if step < 0 { len - 1 } else { len };
                    }
                    b
                }
            }
        };

        let (start, stop) = if step > 0 {
            (clamp(self.start, 0), clamp(self.stop, len))
        } else {
            (clamp(self.start, len - 1), clamp(self.stop, -1))
        };

        let count = if step > 0 {
            if start < stop {
                ((stop - start - 1) / step + 1) as usize
            } else {
                0
            }
        } else if start > stop {
            ((start - stop - 1) / -step + 1) as usize
        } else {
            0
        };

        Ok(ResolvedSlice { start, step, count })
    }
}

/// A slice normalised against a concrete length.
pub(crate) struct ResolvedSlice {
    pub start: isize,
    pub step: isize,
    pub count: usize,
}

impl ResolvedSlice {
    /// The selected positions, in selection order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |i| (self.start + i as isize * self.step) as usize)
    }
}

/// Normalises a possibly-negative element index against `len`.
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize> {
    let len_i = len as isize;
    let i = if index < 0 { index + len_i } else { index };
    if i < 0 || i >= len_i {
        Err(QuatError::index(index, len))
    } else {
        Ok(i as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(s: Slice, len: usize) -> Vec<usize> {
        s.resolve(len).unwrap().indices().collect()
    }

    #[test]
    fn forward_slices_match_extended_slicing() {
        assert_eq!(
            collect(Slice::step_by(2), 23),
            (0..23).step_by(2).collect::<Vec<_>>()
        );
        assert_eq!(collect(Slice::new(Some(3), Some(-8), 4), 23), vec![3, 7, 11]);
        assert_eq!(collect(Slice::range(5, 9), 23), vec![5, 6, 7, 8]);
    }

    #[test]
    fn negative_steps_walk_backwards() {
        assert_eq!(
            collect(Slice::step_by(-3), 23),
            vec![22, 19, 16, 13, 10, 7, 4, 1]
        );
        assert_eq!(collect(Slice::new(Some(4), None, -1), 23), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn bounds_clamp_instead_of_failing() {
        assert_eq!(collect(Slice::range(-100, 100), 3), vec![0, 1, 2]);
        assert_eq!(collect(Slice::range(2, 1), 3), Vec::<usize>::new());
        assert_eq!(collect(Slice::all(), 0), Vec::<usize>::new());
    }

    #[test]
    fn zero_step_is_rejected() {
        assert!(Slice::step_by(0).resolve(5).is_err());
    }

    #[test]
    fn element_index_normalisation() {
        assert_eq!(resolve_index(0, 4).unwrap(), 0);
        assert_eq!(resolve_index(-1, 4).unwrap(), 3);
        assert_eq!(resolve_index(-4, 4).unwrap(), 0);
        assert!(resolve_index(4, 4).is_err());
        assert!(resolve_index(-5, 4).is_err());
        assert!(resolve_index(0, 0).is_err());
    }
}
