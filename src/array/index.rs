/// Index expressions accepted by [`ListAdvancedIndexing`](super::ListAdvancedIndexing).
///
/// Every expression is converted into an unified representation, [`Positions`],
/// by [`Index::resolve`], which is the only place bounds are checked.
///
/// Index representations | Unified repr
/// isize          -----> | Positions::One
/// Slice / ranges -----> | Positions::Many
/// Vec<isize>     -----> | Positions::Many
/// Vec<bool>      -----> | Positions::Many
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use itertools::Itertools;

use crate::error::{DocError, Result};

/// A python style slice, each bound may be negative to count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Slice { start, stop, step }
    }

    /// Selects everything, `[::]`
    pub fn full() -> Self {
        Slice::default()
    }

    pub fn step_by(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// The positions selected by this slice in a sequence of length `len`,
    /// out of range bounds are clamped instead of failing.
    pub fn indices(&self, len: usize) -> Result<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(DocError::value("slice step cannot be zero"));
        }
        let n = len as isize;
        let (lower, upper) = if step < 0 { (-1, n - 1) } else { (0, n) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + n).max(lower),
            Some(b) => b.min(upper),
        };
        let start = clamp(self.start, if step < 0 { upper } else { lower });
        let stop = clamp(self.stop, if step < 0 { lower } else { upper });

        let mut out = vec![];
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            out.push(i as usize);
            i = match i.checked_add(step) {
                Some(next) => next,
                None => break,
            };
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    Int(isize),
    Slice(Slice),
    /// Gathered in the given order, duplicates allowed
    List(Vec<isize>),
    /// Must be as long as the container
    Mask(Vec<bool>),
}

/// Bounds checked, non negative positions into a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positions {
    One(usize),
    Many(Vec<usize>),
}

impl Positions {
    pub fn as_slice(&self) -> &[usize] {
        match self {
            Positions::One(i) => std::slice::from_ref(i),
            Positions::Many(v) => v,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

/// Wraps negative indices around and checks bounds.
pub(crate) fn normalize(index: isize, len: usize) -> Result<usize> {
    let n = len as isize;
    let i = if index < 0 { index + n } else { index };
    if i < 0 || i >= n {
        return Err(DocError::Index { index, len });
    }
    Ok(i as usize)
}

impl Index {
    pub fn resolve(&self, len: usize) -> Result<Positions> {
        match self {
            Index::Int(i) => normalize(*i, len).map(Positions::One),
            Index::Slice(s) => s.indices(len).map(Positions::Many),
            Index::List(ids) => ids
                .iter()
                .map(|&i| normalize(i, len))
                .collect::<Result<Vec<_>>>()
                .map(Positions::Many),
            Index::Mask(mask) => {
                if mask.len() != len {
                    return Err(DocError::value(format!(
                        "boolean mask of length {} does not match container of length {}",
                        mask.len(),
                        len
                    )));
                }
                Ok(Positions::Many(mask.iter().positions(|&keep| keep).collect()))
            }
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Index::Int(_))
    }
}

impl From<isize> for Index {
    fn from(i: isize) -> Self {
        Index::Int(i)
    }
}

impl From<Slice> for Index {
    fn from(s: Slice) -> Self {
        Index::Slice(s)
    }
}

impl From<Range<isize>> for Index {
    fn from(r: Range<isize>) -> Self {
        Index::Slice(Slice::new(Some(r.start), Some(r.end), None))
    }
}

impl From<RangeFrom<isize>> for Index {
    fn from(r: RangeFrom<isize>) -> Self {
        Index::Slice(Slice::new(Some(r.start), None, None))
    }
}

impl From<RangeTo<isize>> for Index {
    fn from(r: RangeTo<isize>) -> Self {
        Index::Slice(Slice::new(None, Some(r.end), None))
    }
}

impl From<RangeFull> for Index {
    fn from(_: RangeFull) -> Self {
        Index::Slice(Slice::full())
    }
}

impl From<Vec<isize>> for Index {
    fn from(ids: Vec<isize>) -> Self {
        Index::List(ids)
    }
}

impl From<Vec<bool>> for Index {
    fn from(mask: Vec<bool>) -> Self {
        Index::Mask(mask)
    }
}
