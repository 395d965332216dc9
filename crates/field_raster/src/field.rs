//! Scalar fields and their evaluation over sampling grids.
//!
//! This module defines the [`ScalarField`] contract: a pure mapping from a
//! domain position to a scalar value. Closures over [`DVec2`] implement it
//! directly, so callers can pass `|p| (2.0 * p.x).sin()` without any
//! wrapper type.
use glam::DVec2;
use tracing::debug;

use crate::grid::SampleGrid;
use crate::raster::Raster;

/// Trait for scalar fields sampled at a position in domain coordinates.
///
/// Implementations must not mutate external state when sampled; the pipeline
/// may sample in any order. Values may be discontinuous or singular at
/// isolated points, but non-finite samples are rejected before normalization,
/// so fields with singularities should guard them (for example with a small
/// epsilon offset).
pub trait ScalarField: Send + Sync {
    fn sample(&self, p: DVec2) -> f64;
}

impl<F> ScalarField for F
where
    F: Fn(DVec2) -> f64 + Send + Sync,
{
    fn sample(&self, p: DVec2) -> f64 {
        self(p)
    }
}

/// Samples `field` at every position of `grid` into a row-major raster.
///
/// Row 0 corresponds to the domain's minimum y. Panics raised by the field
/// implementation propagate to the caller.
pub fn evaluate<F>(grid: &SampleGrid, field: &F) -> Raster
where
    F: ScalarField + ?Sized,
{
    let xs = grid.x_coords();
    let ys = grid.y_coords();
    debug!("Sampling field on a {}x{} grid.", grid.width(), grid.height());

    let mut data = Vec::with_capacity(xs.len() * ys.len());
    for &y in &ys {
        for &x in &xs {
            data.push(field.sample(DVec2::new(x, y)));
        }
    }

    Raster {
        width: grid.width(),
        height: grid.height(),
        data,
    }
}
