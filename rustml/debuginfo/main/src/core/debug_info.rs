//! On-device dimension snapshot handed back to callers.

use crate::api::error::DebugInfoResult;
use crate::api::types::Dims;
use crate::spi::contract::TensorHandle;

/// Dimensions of a tensor as stored on its device, major-most first.
///
/// Built fresh by every query and owned by the caller. Later changes to the
/// tensor handle are not reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TensorDebugInfo {
    dev_dims: Dims,
}

impl TensorDebugInfo {
    pub fn new(dev_dims: impl Into<Dims>) -> Self {
        Self {
            dev_dims: dev_dims.into(),
        }
    }

    /// Resolve the on-device shape of `handle`.
    pub fn compute(handle: &dyn TensorHandle) -> DebugInfoResult<Self> {
        crate::core::resolver::compute_debug_info(handle)
    }

    /// Number of on-device dimensions.
    pub fn num_dims(&self) -> usize {
        self.dev_dims.len()
    }

    /// Size of on-device dimension `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.num_dims()`.
    pub fn dim(&self, index: usize) -> i64 {
        self.dev_dims[index]
    }

    pub fn dims(&self) -> &[i64] {
        &self.dev_dims
    }
}

/// Release a debug info container. Passing `None` is a no-op.
pub fn release_debug_info(debug_info: Option<TensorDebugInfo>) {
    drop(debug_info);
}
