//! Layout-ordered dims to major-to-minor dims.

use crate::api::error::{DebugInfoError, DebugInfoResult};
use crate::api::types::{ArrayShape, Dims};
use smallvec::{smallvec, SmallVec};

/// Flatten `shape` into dimension sizes ordered from major-most to minor-most.
///
/// Rank-1 shapes skip the layout entirely since runtimes often leave it unset
/// for them. For higher ranks the layout must be a permutation of `0..rank`.
pub(crate) fn major_to_minor(shape: &ArrayShape) -> DebugInfoResult<Dims> {
    let dims = shape.dims();
    match dims.len() {
        0 => return Ok(Dims::new()),
        1 => return Ok(Dims::from_slice(dims)),
        _ => {}
    }

    let layout = shape.layout().ok_or_else(|| {
        DebugInfoError::InvalidArgument(format!("Shape {} has no layout", shape))
    })?;
    let minor_to_major = layout.minor_to_major();
    if minor_to_major.len() != dims.len() {
        return Err(DebugInfoError::InvalidArgument(format!(
            "Layout rank {} does not match shape rank {}. Shape: {}",
            minor_to_major.len(),
            dims.len(),
            shape
        )));
    }

    let mut seen: SmallVec<[bool; 4]> = smallvec![false; dims.len()];
    let mut dev_dims = Dims::with_capacity(dims.len());
    for &dim_index in minor_to_major.iter().rev() {
        if dim_index >= dims.len() || seen[dim_index] {
            return Err(DebugInfoError::InvalidArgument(format!(
                "Layout is not a permutation of the shape's dimensions. Shape: {}",
                shape
            )));
        }
        seen[dim_index] = true;
        dev_dims.push(dims[dim_index]);
    }
    Ok(dev_dims)
}
