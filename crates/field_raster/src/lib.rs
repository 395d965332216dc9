#![forbid(unsafe_code)]
//! field_raster: Render 2D scalar fields into 16-bit grayscale raster images.
//!
//! Modules:
//! - grid: rectangular domains and evenly spaced sampling grids
//! - field: the [`field::ScalarField`] contract and grid evaluation
//! - quantize: range normalization and 16-bit quantization
//! - encode: image encoding and file output (PNG, TIFF)
//! - render: the end-to-end pipeline and its configuration
//!
//! For examples and docs, see README and docs.rs.
pub mod encode;
pub mod error;
pub mod field;
pub mod grid;
pub mod quantize;
pub mod raster;
pub mod render;

/// Convenient re-exports for common types. Import with `use field_raster::prelude::*;`.
pub mod prelude {
    pub use crate::encode::{write_gray16, Gray16Image};
    pub use crate::error::{Error, Result};
    pub use crate::field::{evaluate, ScalarField};
    pub use crate::grid::{Domain, SampleGrid};
    pub use crate::quantize::{normalize, quantize, Gray16, MAX_LEVEL};
    pub use crate::raster::Raster;
    pub use crate::render::{render, render_to_file, RenderConfig};
}
