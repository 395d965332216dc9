//! Sampling grids over rectangular domains.
//!
//! This module defines [`Domain`] and [`SampleGrid`]: an evenly spaced pixel
//! grid spanning a rectangular region of the plane. The grid fixes where each
//! pixel samples the field; row 0 lies at the domain's minimum y.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::Raster;

/// Half extent of the default sampling domain on both axes.
pub const DEFAULT_HALF_EXTENT: f64 = 5.0;

/// Rectangular region of the plane that a grid samples.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    /// Lower-left corner.
    pub min: DVec2,
    /// Upper-right corner.
    pub max: DVec2,
}

impl Domain {
    /// Creates a domain from its corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Creates a domain spanning `[-half_extent, half_extent]` on both axes.
    pub fn symmetric(half_extent: f64) -> Self {
        Self {
            min: DVec2::splat(-half_extent),
            max: DVec2::splat(half_extent),
        }
    }

    /// Size of the domain in world units.
    pub fn extent(&self) -> DVec2 {
        self.max - self.min
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::symmetric(DEFAULT_HALF_EXTENT)
    }
}

/// Evenly spaced sampling grid over a [`Domain`].
///
/// An axis with `n > 1` samples runs from the domain's lower bound to its
/// upper bound inclusive, with spacing `extent / (n - 1)`. A single-sample
/// axis collapses to the lower bound.
#[derive(Clone, Copy, Debug)]
pub struct SampleGrid {
    domain: Domain,
    width: u32,
    height: u32,
}

impl SampleGrid {
    /// Creates a grid, rejecting zero dimensions and empty domains.
    pub fn new(domain: Domain, width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let extent = domain.extent();
        if extent.x <= 0.0 || extent.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "domain extent must be > 0 on both axes".into(),
            ));
        }
        Ok(Self {
            domain,
            width,
            height,
        })
    }

    /// Domain this grid samples.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// X coordinate of the sample in column `col`.
    pub fn x_at(&self, col: u32) -> f64 {
        axis_coord(self.domain.min.x, self.domain.max.x, self.width, col)
    }

    /// Y coordinate of the sample in row `row`.
    pub fn y_at(&self, row: u32) -> f64 {
        axis_coord(self.domain.min.y, self.domain.max.y, self.height, row)
    }

    /// Position of the sample at `(col, row)`.
    pub fn position(&self, col: u32, row: u32) -> DVec2 {
        DVec2::new(self.x_at(col), self.y_at(row))
    }

    /// All x coordinates, left to right.
    pub fn x_coords(&self) -> Vec<f64> {
        (0..self.width).map(|col| self.x_at(col)).collect()
    }

    /// All y coordinates, bottom row first.
    pub fn y_coords(&self) -> Vec<f64> {
        (0..self.height).map(|row| self.y_at(row)).collect()
    }

    /// Outer product of the coordinate axes: two `(height, width)` rasters
    /// holding the per-pixel x and y coordinates.
    pub fn mesh(&self) -> (Raster, Raster) {
        let xs = self.x_coords();
        let ys = self.y_coords();
        let mut grid_x = Raster::zeros(self.width, self.height);
        let mut grid_y = Raster::zeros(self.width, self.height);

        let w = self.width as usize;
        for (row, &y) in ys.iter().enumerate() {
            for (col, &x) in xs.iter().enumerate() {
                grid_x.data[row * w + col] = x;
                grid_y.data[row * w + col] = y;
            }
        }
        (grid_x, grid_y)
    }
}

fn axis_coord(min: f64, max: f64, n: u32, i: u32) -> f64 {
    if n <= 1 {
        return min;
    }
    min + f64::from(i) * ((max - min) / f64::from(n - 1))
}
