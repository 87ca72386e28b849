mod error;
mod selection;
mod slice_spec;
mod slicer;

#[cfg(test)]
mod descriptor;

pub use error::{ErrorKind, SliceError};
pub use selection::{Indices, Selection};
pub use slice_spec::SliceSpec;
pub use slicer::{delete, read, write};

/// Extended-slice reads over any slice.
///
/// - Bounds are clamped, never rejected.
/// - A zero step fails with [`ErrorKind::InvalidArgument`].
pub trait ExtendedSlice<T> {
    fn read_slice<S: Into<SliceSpec>>(&self, spec: S) -> Result<Vec<T>, SliceError>;
}

/// In-place extended-slice assignment and deletion.
///
/// - `write_slice` with step 1 splices and may resize; any other step needs
///   exactly one value per selected index.
/// - `delete_slice` returns the number of removed elements.
pub trait ExtendedSliceMut<T> {
    fn write_slice<S, I>(&mut self, spec: S, values: I) -> Result<(), SliceError>
    where
        S: Into<SliceSpec>,
        I: IntoIterator<Item = T>;

    fn delete_slice<S: Into<SliceSpec>>(&mut self, spec: S) -> Result<usize, SliceError>;
}

impl<T: Clone> ExtendedSlice<T> for [T] {
    fn read_slice<S: Into<SliceSpec>>(&self, spec: S) -> Result<Vec<T>, SliceError> {
        read(self, spec.into())
    }
}

impl<T: Clone> ExtendedSlice<T> for Vec<T> {
    fn read_slice<S: Into<SliceSpec>>(&self, spec: S) -> Result<Vec<T>, SliceError> {
        read(self, spec.into())
    }
}

impl<T> ExtendedSliceMut<T> for Vec<T> {
    fn write_slice<S, I>(&mut self, spec: S, values: I) -> Result<(), SliceError>
    where
        S: Into<SliceSpec>,
        I: IntoIterator<Item = T>,
    {
        write(self, spec.into(), values)
    }

    fn delete_slice<S: Into<SliceSpec>>(&mut self, spec: S) -> Result<usize, SliceError> {
        delete(self, spec.into())
    }
}
