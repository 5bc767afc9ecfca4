//! Facade re-exports for rustml-debuginfo

pub use crate::api::types::*;
pub use crate::api::error::*;
pub use crate::spi::contract::{Device, PaddedShapeProvider, TensorHandle};
pub use crate::core::debug_info::{TensorDebugInfo, release_debug_info};
pub use crate::core::resolver::compute_debug_info;
pub use crate::core::device::HostDevice;
#[cfg(feature = "accelerator")]
pub use crate::core::accelerator::{AcceleratorDevice, TiledLayoutProvider};
#[cfg(feature = "accelerator")]
pub use crate::core::config::AcceleratorConfig;
