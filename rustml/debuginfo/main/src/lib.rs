//! # RustML Debug Info
//!
//! On-device shape inspection for tensor handles.
//!
//! A tensor's logical shape is not always the shape it occupies on the device.
//! Tiled accelerators pad the minor dimensions, pick their own dimension order,
//! and may split 64-bit element types into two 32-bit halves. This crate asks
//! the handle's device for that physical shape and flattens it into a
//! major-to-minor dimension list meant for debugging output.
//!
//! ## Features
//!
//! - Logical shape fallback for ordinary devices
//! - Padded-shape capability query on devices (no type downcasts)
//! - Split-width tuple validation and collapse
//! - Minor-to-major layout reordering
//! - Reference tiled accelerator backend (`accelerator` feature)
//!
//! ## Example
//!
//! ```rust,ignore
//! use rustml_debuginfo::compute_debug_info;
//!
//! let info = compute_debug_info(&handle)?;
//! for i in 0..info.num_dims() {
//!     println!("dim {} = {}", i, info.dim(i));
//! }
//! ```

pub mod api;
mod core;
mod saf;
pub mod spi;

pub use saf::*;
