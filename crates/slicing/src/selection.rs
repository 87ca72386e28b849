use std::iter::FusedIterator;
use std::ops::Range;

/// A [`SliceSpec`](crate::SliceSpec) resolved against a concrete length.
///
/// `start`/`stop` are the clamped bounds (`stop` is `-1` for a backward walk
/// that runs off the front). Every index produced by [`Selection::indices`]
/// lies in `[0, len)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Selection {
    start: isize,
    stop: isize,
    step: isize,
    len: usize,
}

impl Selection {
    pub(crate) fn new(start: isize, stop: isize, step: isize, len: usize) -> Self {
        debug_assert!(step != 0);
        Self {
            start,
            stop,
            step,
            len,
        }
    }

    pub fn start(&self) -> isize {
        self.start
    }

    pub fn stop(&self) -> isize {
        self.stop
    }

    pub fn step(&self) -> isize {
        self.step
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn indices(&self) -> Indices {
        Indices {
            start: self.start,
            step: self.step,
            front: 0,
            back: self.len,
        }
    }

    /// The contiguous range a splice replaces, or `None` unless the step is 1.
    ///
    /// An inverted range (`stop < start`) collapses to an empty range at
    /// `start`, which is where a splice inserts.
    pub fn span(&self) -> Option<Range<usize>> {
        if self.step != 1 {
            return None;
        }
        let start = self.start as usize;
        let stop = self.stop.max(self.start) as usize;
        Some(start..stop)
    }
}

impl IntoIterator for Selection {
    type Item = usize;
    type IntoIter = Indices;

    fn into_iter(self) -> Indices {
        self.indices()
    }
}

#[derive(Clone, Debug)]
pub struct Indices {
    start: isize,
    step: isize,
    front: usize,
    back: usize,
}

impl Indices {
    #[inline(always)]
    fn at(&self, k: usize) -> usize {
        (self.start + self.step * k as isize) as usize
    }
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let index = self.at(self.front);
        self.front += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for Indices {}

impl FusedIterator for Indices {}
