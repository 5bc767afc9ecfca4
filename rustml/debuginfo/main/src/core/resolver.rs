//! Picks the shape source for a tensor handle and runs it through
//! normalization and reordering.

use crate::api::error::DebugInfoResult;
use crate::api::types::{DeviceShape, Dims};
use crate::core::debug_info::TensorDebugInfo;
use crate::core::logical::logical_shape;
use crate::core::reorder::major_to_minor;
use crate::core::tuple::normalize;
use crate::spi::contract::{PaddedShapeProvider, TensorHandle};

/// Compute the on-device dimensions of `handle`.
///
/// Devices exposing a padded-shape provider report the physical shape of the
/// materialized buffer; every other device is assumed to store the logical
/// shape as-is.
pub fn compute_debug_info(handle: &dyn TensorHandle) -> DebugInfoResult<TensorDebugInfo> {
    let device = handle.device();
    let dev_dims = match device.padded_shape_provider() {
        Some(provider) => {
            log::debug!("debug info: using padded shape of device {}", device.name());
            padded_dims(handle, provider)?
        }
        None => logical_shape(handle)?,
    };
    Ok(TensorDebugInfo::new(dev_dims))
}

fn padded_dims(
    handle: &dyn TensorHandle,
    provider: &dyn PaddedShapeProvider,
) -> DebugInfoResult<Dims> {
    let buffer = handle.materialized()?;
    let padded = provider.padded_shape(&buffer)?;
    log_padded_shape(handle, &padded);

    let array = normalize(padded)?;
    major_to_minor(&array)
}

fn log_padded_shape(handle: &dyn TensorHandle, padded: &DeviceShape) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    // Only feeds the log line; a failed lookup just skips it.
    match logical_shape(handle) {
        Ok(logical) => log::trace!(
            "Fully padded shape of [{}] is {}",
            join_dims(&logical),
            padded
        ),
        Err(e) => log::trace!("Skipping padded shape log, logical shape unavailable: {}", e),
    }
}

fn join_dims(dims: &[i64]) -> String {
    dims.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
