//! Reference tiled accelerator backend.
//!
//! Models a 32-bit accelerator that stores buffers in fixed-size tiles: the
//! two minor-most physical dimensions are rounded up to the tile sizes and
//! 64-bit element types are split into two 32-bit halves.

use crate::api::error::{DebugInfoError, DebugInfoResult};
use crate::api::types::{ArrayShape, BufferDescriptor, DType, DeviceShape, Dims, Layout};
use crate::core::config::AcceleratorConfig;
use crate::spi::contract::{Device, PaddedShapeProvider};

/// Padded-shape provider for the tiled accelerator.
#[derive(Debug, Clone)]
pub struct TiledLayoutProvider {
    config: AcceleratorConfig,
}

impl TiledLayoutProvider {
    pub fn new(config: AcceleratorConfig) -> DebugInfoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AcceleratorConfig {
        &self.config
    }

    fn layout_for(&self, rank: usize) -> Layout {
        match &self.config.minor_to_major {
            Some(order) if order.len() == rank => Layout::new(order.as_slice()),
            _ => Layout::row_major(rank),
        }
    }
}

impl PaddedShapeProvider for TiledLayoutProvider {
    fn padded_shape(&self, buffer: &BufferDescriptor) -> DebugInfoResult<DeviceShape> {
        if let Some(&d) = buffer.dims.iter().find(|&&d| d < 0) {
            return Err(DebugInfoError::DeviceShape(format!(
                "negative dimension {} in buffer of shape {:?}",
                d,
                buffer.dims.as_slice()
            )));
        }

        let rank = buffer.dims.len();
        let layout = self.layout_for(rank);
        let order = layout.minor_to_major();

        let mut dims: Dims = buffer.dims.clone();
        let tiles = [self.config.minor_tile, self.config.second_minor_tile];
        for (&dim_index, &tile) in order.iter().zip(tiles.iter()) {
            let size = dims[dim_index];
            dims[dim_index] = round_up(size, tile).ok_or_else(|| {
                DebugInfoError::DeviceShape(format!(
                    "dimension {} of size {} overflows when padded to {}",
                    dim_index, size, tile
                ))
            })?;
        }

        // Rank-1 buffers carry no layout on this device.
        let layout = if rank > 1 { Some(layout) } else { None };

        if self.config.split_wide_types && buffer.dtype.is_wide() {
            let half: DeviceShape = ArrayShape::new(DType::U32, dims, layout).into();
            return Ok(DeviceShape::Tuple(vec![half.clone(), half]));
        }
        Ok(ArrayShape::new(buffer.dtype, dims, layout).into())
    }
}

fn round_up(value: i64, tile: i64) -> Option<i64> {
    let tiles = value.checked_add(tile - 1)? / tile;
    tiles.checked_mul(tile)
}

/// Tiled accelerator device.
#[derive(Debug, Clone)]
pub struct AcceleratorDevice {
    name: String,
    provider: TiledLayoutProvider,
}

impl AcceleratorDevice {
    pub fn new(ordinal: usize, config: AcceleratorConfig) -> DebugInfoResult<Self> {
        Ok(Self {
            name: format!("accelerator:{}", ordinal),
            provider: TiledLayoutProvider::new(config)?,
        })
    }

    pub fn provider(&self) -> &TiledLayoutProvider {
        &self.provider
    }
}

impl Device for AcceleratorDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn padded_shape_provider(&self) -> Option<&dyn PaddedShapeProvider> {
        Some(&self.provider)
    }
}
