use crate::api::error::DebugInfoResult;
use crate::api::types::BufferDescriptor;
use crate::spi::contract::Device;

/// Read-only view of a runtime tensor handle.
///
/// Handles are owned by the hosting runtime; lookups may fail while the
/// tensor is still being produced.
pub trait TensorHandle {
    /// Number of logical dimensions.
    fn num_dims(&self) -> DebugInfoResult<usize>;
    /// Logical size of dimension `index`.
    fn dim(&self, index: usize) -> DebugInfoResult<i64>;
    /// Device backing the tensor.
    fn device(&self) -> &dyn Device;
    /// Descriptor of the materialized buffer.
    fn materialized(&self) -> DebugInfoResult<BufferDescriptor>;
}
