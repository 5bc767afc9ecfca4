#![allow(dead_code)]

use rustml_debuginfo::{
    BufferDescriptor, DType, DebugInfoError, DebugInfoResult, Device, DeviceShape,
    PaddedShapeProvider, TensorHandle,
};
use std::cell::Cell;

/// Install a trace-level test logger so padded-shape diagnostics run.
pub fn init_trace_logging() {
    let _ = env_logger::Builder::new()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}

/// Provider returning a fixed shape, or a fixed error.
pub struct FixedProvider {
    result: Result<DeviceShape, String>,
}

impl FixedProvider {
    pub fn shape(shape: DeviceShape) -> Self {
        Self { result: Ok(shape) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
        }
    }
}

impl PaddedShapeProvider for FixedProvider {
    fn padded_shape(&self, _buffer: &BufferDescriptor) -> DebugInfoResult<DeviceShape> {
        match &self.result {
            Ok(shape) => Ok(shape.clone()),
            Err(message) => Err(DebugInfoError::DeviceShape(message.clone())),
        }
    }
}

/// Device advertising a `FixedProvider`.
pub struct PaddedDevice {
    provider: FixedProvider,
}

impl PaddedDevice {
    pub fn new(provider: FixedProvider) -> Self {
        Self { provider }
    }
}

impl Device for PaddedDevice {
    fn name(&self) -> &str {
        "padded:0"
    }

    fn padded_shape_provider(&self) -> Option<&dyn PaddedShapeProvider> {
        Some(&self.provider)
    }
}

/// In-memory tensor handle with switchable lookup failures.
pub struct FakeHandle<D: Device> {
    pub dims: Vec<i64>,
    pub dtype: DType,
    pub device: D,
    pub fail_rank: bool,
    pub fail_dim: Option<usize>,
    pub materialized: bool,
    pub rank_lookups: Cell<usize>,
}

impl<D: Device> FakeHandle<D> {
    pub fn new(dims: Vec<i64>, device: D) -> Self {
        Self {
            dims,
            dtype: DType::F32,
            device,
            fail_rank: false,
            fail_dim: None,
            materialized: true,
            rank_lookups: Cell::new(0),
        }
    }

    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }
}

impl<D: Device> TensorHandle for FakeHandle<D> {
    fn num_dims(&self) -> DebugInfoResult<usize> {
        self.rank_lookups.set(self.rank_lookups.get() + 1);
        if self.fail_rank {
            return Err(DebugInfoError::NotReady("tensor handle not yet resolved".into()));
        }
        Ok(self.dims.len())
    }

    fn dim(&self, index: usize) -> DebugInfoResult<i64> {
        if self.fail_dim == Some(index) {
            return Err(DebugInfoError::Lookup(format!("dimension {} unavailable", index)));
        }
        self.dims
            .get(index)
            .copied()
            .ok_or_else(|| DebugInfoError::Lookup(format!("dimension {} out of range", index)))
    }

    fn device(&self) -> &dyn Device {
        &self.device
    }

    fn materialized(&self) -> DebugInfoResult<BufferDescriptor> {
        if !self.materialized {
            return Err(DebugInfoError::NotReady("buffer not yet materialized".into()));
        }
        Ok(BufferDescriptor::new(self.dtype, self.dims.clone()))
    }
}
