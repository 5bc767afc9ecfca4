mod device;
mod handle;

pub use device::{Device, PaddedShapeProvider};
pub use handle::TensorHandle;
