use crate::api::error::DebugInfoResult;
use crate::api::types::{BufferDescriptor, DeviceShape};

/// Device a tensor handle lives on.
pub trait Device {
    /// Human-readable device name (e.g. "host", "accelerator:0").
    fn name(&self) -> &str;

    /// Padded-shape capability. Devices whose physical layout matches the
    /// logical shape keep the default.
    fn padded_shape_provider(&self) -> Option<&dyn PaddedShapeProvider> {
        None
    }
}

/// Computes the shape a buffer actually occupies on a device.
pub trait PaddedShapeProvider {
    fn padded_shape(&self, buffer: &BufferDescriptor) -> DebugInfoResult<DeviceShape>;
}
