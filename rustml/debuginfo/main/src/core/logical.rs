//! Logical shape lookup through the tensor handle interface.

use crate::api::error::DebugInfoResult;
use crate::api::types::Dims;
use crate::spi::contract::TensorHandle;

/// Read the declared shape of `handle`, outermost dimension first.
///
/// Fails with the handle's own error on the first rejected lookup.
pub(crate) fn logical_shape(handle: &dyn TensorHandle) -> DebugInfoResult<Dims> {
    let rank = handle.num_dims()?;
    let mut shape = Dims::with_capacity(rank);
    for i in 0..rank {
        shape.push(handle.dim(i)?);
    }
    Ok(shape)
}
