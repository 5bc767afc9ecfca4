//! Core types for on-device shape descriptions

use smallvec::SmallVec;
use std::fmt;

/// Dimension sizes, stack-allocated for ≤4 dims.
pub type Dims = SmallVec<[i64; 4]>;

/// Data type for tensor elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DType {
    #[default]
    F32,
    F16,
    BF16,
    F64,
    I8,
    U8,
    I32,
    U32,
    I64,
    U64,
}

impl DType {
    /// Per-element byte size.
    pub fn size(&self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::F16 | DType::BF16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }

    /// 64-bit types, which 32-bit accelerators store as two halves.
    pub fn is_wide(&self) -> bool {
        self.size() == 8
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "f32",
            DType::F16 => "f16",
            DType::BF16 => "bf16",
            DType::F64 => "f64",
            DType::I8 => "s8",
            DType::U8 => "u8",
            DType::I32 => "s32",
            DType::U32 => "u32",
            DType::I64 => "s64",
            DType::U64 => "u64",
        };
        write!(f, "{}", name)
    }
}

/// Physical dimension order, listed from minor-most (fastest varying) to
/// major-most.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    minor_to_major: SmallVec<[usize; 4]>,
}

impl Layout {
    pub fn new(minor_to_major: impl Into<SmallVec<[usize; 4]>>) -> Self {
        Self {
            minor_to_major: minor_to_major.into(),
        }
    }

    /// Row-major layout: the last logical dimension is minor-most.
    pub fn row_major(rank: usize) -> Self {
        Self {
            minor_to_major: (0..rank).rev().collect(),
        }
    }

    pub fn minor_to_major(&self) -> &[usize] {
        &self.minor_to_major
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, idx) in self.minor_to_major.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "}}")
    }
}

/// A dense array shape as laid out on a device.
///
/// The layout is optional: runtimes commonly leave it unset for rank-1
/// shapes, where the order is trivially the only dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayShape {
    dtype: DType,
    dims: Dims,
    layout: Option<Layout>,
}

impl ArrayShape {
    pub fn new(dtype: DType, dims: impl Into<Dims>, layout: Option<Layout>) -> Self {
        Self {
            dtype,
            dims: dims.into(),
            layout,
        }
    }

    /// Shape with a row-major layout for its rank.
    pub fn row_major(dtype: DType, dims: impl Into<Dims>) -> Self {
        let dims = dims.into();
        let layout = Some(Layout::row_major(dims.len()));
        Self { dtype, dims, layout }
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", self.dtype)?;
        for (i, dim) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")?;
        if let Some(layout) = &self.layout {
            write!(f, "{}", layout)?;
        }
        Ok(())
    }
}

/// Shape reported by a device for a tensor buffer.
///
/// A `Tuple` appears when the device cannot hold the element type natively
/// and stores it as two equal-shaped components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceShape {
    Array(ArrayShape),
    Tuple(Vec<DeviceShape>),
}

impl DeviceShape {
    pub fn is_tuple(&self) -> bool {
        matches!(self, DeviceShape::Tuple(_))
    }
}

impl From<ArrayShape> for DeviceShape {
    fn from(shape: ArrayShape) -> Self {
        DeviceShape::Array(shape)
    }
}

impl fmt::Display for DeviceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceShape::Array(shape) => write!(f, "{}", shape),
            DeviceShape::Tuple(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Descriptor of a materialized tensor buffer: element type and logical dims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDescriptor {
    pub dtype: DType,
    pub dims: Dims,
}

impl BufferDescriptor {
    pub fn new(dtype: DType, dims: impl Into<Dims>) -> Self {
        Self {
            dtype,
            dims: dims.into(),
        }
    }
}
