use crate::error::SliceError;
use crate::slice_spec::SliceSpec;

/// Copies the selected elements, in selection order.
pub fn read<T: Clone>(seq: &[T], spec: SliceSpec) -> Result<Vec<T>, SliceError> {
    let selection = spec.resolve(seq.len())?;
    Ok(selection.indices().map(|i| seq[i].clone()).collect())
}

/// Assigns `values` to the selected positions.
///
/// - Step 1: the selected run is spliced out and `values` inserted in its
///   place, so the length may change.
/// - Any other step: `values` must have exactly one element per selected
///   index. On mismatch `seq` is left untouched.
pub fn write<T, I>(seq: &mut Vec<T>, spec: SliceSpec, values: I) -> Result<(), SliceError>
where
    I: IntoIterator<Item = T>,
{
    let selection = spec.resolve(seq.len())?;
    if let Some(span) = selection.span() {
        seq.splice(span, values);
        return Ok(());
    }

    let values = values.into_iter().collect::<Vec<_>>();
    if values.len() != selection.len() {
        return Err(SliceError::LengthMismatch {
            expected: selection.len(),
            actual: values.len(),
        });
    }
    for (index, value) in selection.indices().zip(values) {
        seq[index] = value;
    }
    Ok(())
}

/// Removes the selected elements and returns how many were removed.
pub fn delete<T>(seq: &mut Vec<T>, spec: SliceSpec) -> Result<usize, SliceError> {
    let selection = spec.resolve(seq.len())?;
    if let Some(span) = selection.span() {
        let removed = span.len();
        seq.drain(span);
        return Ok(removed);
    }
    if selection.is_empty() {
        return Ok(0);
    }

    let mut doomed = vec![false; seq.len()];
    for index in selection.indices() {
        doomed[index] = true;
    }
    let mut pos = 0_usize;
    seq.retain(|_| {
        let keep = !doomed[pos];
        pos += 1;
        keep
    });
    Ok(selection.len())
}
