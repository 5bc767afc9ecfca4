//! Split-width tuple normalization.
//!
//! Devices without native 64-bit support report wide tensors as a tuple of
//! two equal-shaped 32-bit components. For debug display we collapse the pair
//! back into one array shape. This is an approximation: the element type of
//! the returned shape is the component type, and the original bit width is
//! not reconstructed.

use crate::api::error::{DebugInfoError, DebugInfoResult};
use crate::api::types::{ArrayShape, DeviceShape};

/// Reduce `shape` to a single array shape, rejecting unsupported tuples.
pub(crate) fn normalize(shape: DeviceShape) -> DebugInfoResult<ArrayShape> {
    match shape {
        DeviceShape::Array(array) => Ok(array),
        DeviceShape::Tuple(elements) => collapse_pair(elements),
    }
}

fn collapse_pair(elements: Vec<DeviceShape>) -> DebugInfoResult<ArrayShape> {
    let [first, second]: [DeviceShape; 2] = match elements.try_into() {
        Ok(pair) => pair,
        Err(elements) => {
            return Err(invalid(
                "Device tensors should only contain tuples of size 2",
                elements,
            ))
        }
    };

    match (first, second) {
        (DeviceShape::Array(first), DeviceShape::Array(second)) => {
            if first != second {
                return Err(invalid(
                    "Subshapes of device tensors should be the same",
                    vec![first.into(), second.into()],
                ));
            }
            Ok(first)
        }
        (first, second) => Err(invalid(
            "Device tensors should not contain nested tuples",
            vec![first, second],
        )),
    }
}

fn invalid(reason: &str, elements: Vec<DeviceShape>) -> DebugInfoError {
    DebugInfoError::InvalidArgument(format!(
        "{}. Shape: {}",
        reason,
        DeviceShape::Tuple(elements)
    ))
}
