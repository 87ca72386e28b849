use std::fmt;
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::SliceError;
use crate::selection::Selection;

/// `start:stop:step` bounds with every part optional.
///
/// - Unset `step` means `1`; a zero step is rejected when resolved.
/// - Unset `start`/`stop` default to the ends of the sequence, swapped when
///   the step is negative.
/// - Bounds may be negative (counted from the end) or past either end; they
///   are clamped, never rejected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    pub const fn full() -> Self {
        Self::new(None, None, None)
    }

    pub const fn step_by(step: isize) -> Self {
        Self::new(None, None, Some(step))
    }

    pub fn effective_step(&self) -> Result<isize, SliceError> {
        match self.step {
            None => Ok(1),
            Some(0) => Err(SliceError::ZeroStep),
            // Keeps `-step` representable.
            Some(isize::MIN) => Ok(-isize::MAX),
            Some(step) => Ok(step),
        }
    }

    pub fn is_contiguous(&self) -> bool {
        matches!(self.effective_step(), Ok(1))
    }

    pub fn resolve(&self, len: usize) -> Result<Selection, SliceError> {
        let step = self.effective_step()?;
        let len = isize::try_from(len).unwrap_or(isize::MAX);
        let backward = step < 0;

        let start = match self.start {
            Some(bound) => clamp_bound(bound, len, backward),
            None if backward => len - 1,
            None => 0,
        };
        let stop = match self.stop {
            Some(bound) => clamp_bound(bound, len, backward),
            None if backward => -1,
            None => len,
        };

        let count = if backward {
            if stop < start {
                (start - stop - 1) / (-step) + 1
            } else {
                0
            }
        } else if start < stop {
            (stop - start - 1) / step + 1
        } else {
            0
        };

        Ok(Selection::new(start, stop, step, count as usize))
    }
}

#[inline]
fn clamp_bound(bound: isize, len: isize, backward: bool) -> isize {
    if bound < 0 {
        let shifted = bound + len;
        if shifted >= 0 {
            shifted
        } else if backward {
            -1
        } else {
            0
        }
    } else if bound >= len {
        if backward { len - 1 } else { len }
    } else {
        bound
    }
}

impl fmt::Display for SliceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{start}")?;
        }
        f.write_str(":")?;
        if let Some(stop) = self.stop {
            write!(f, "{stop}")?;
        }
        if let Some(step) = self.step {
            write!(f, ":{step}")?;
        }
        Ok(())
    }
}

impl From<Range<isize>> for SliceSpec {
    fn from(range: Range<isize>) -> Self {
        Self::new(Some(range.start), Some(range.end), None)
    }
}

impl From<RangeFrom<isize>> for SliceSpec {
    fn from(range: RangeFrom<isize>) -> Self {
        Self::new(Some(range.start), None, None)
    }
}

impl From<RangeTo<isize>> for SliceSpec {
    fn from(range: RangeTo<isize>) -> Self {
        Self::new(None, Some(range.end), None)
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}
