//! End-to-end rendering pipeline from scalar field to image file.
//!
//! [`render`] runs grid construction, field evaluation, normalization, and
//! quantization; [`render_to_file`] adds encoding and the file write. Every
//! failure, including persistence, is returned to the caller.
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::encode;
use crate::error::{Error, Result};
use crate::field::{evaluate, ScalarField};
use crate::grid::{Domain, SampleGrid};
use crate::quantize::{normalize, quantize, Gray16};

/// Configuration for rendering a scalar field into an image.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Region of the plane the grid samples.
    pub domain: Domain,
}

impl RenderConfig {
    /// Creates a config with the given pixel dimensions over the default
    /// `[-5, 5]` domain.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            domain: Domain::default(),
        }
    }

    /// Sets the sampling domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        self.sample_grid().map(|_| ())
    }

    /// Builds the sampling grid described by this configuration.
    pub fn sample_grid(&self) -> Result<SampleGrid> {
        SampleGrid::new(self.domain, self.width, self.height)
    }
}

/// Renders `field` into a quantized 16-bit pixel buffer.
///
/// Fails on invalid dimensions or domain, and on any non-finite field sample;
/// a non-finite value would otherwise poison the min/max rescale for the
/// whole image.
pub fn render<F>(config: &RenderConfig, field: &F) -> Result<Gray16>
where
    F: ScalarField + ?Sized,
{
    let grid = config.sample_grid()?;
    info!("Generating a {}x{} image.", config.width, config.height);

    let samples = evaluate(&grid, field);
    if let Some((col, row)) = samples.first_non_finite() {
        return Err(Error::NonFiniteSample {
            col,
            row,
            value: samples.value_at(col, row),
        });
    }

    let normalized = normalize(&samples);
    Ok(quantize(&normalized))
}

/// Renders `field` and writes the image to `path`.
///
/// The container format follows the file extension and must support 16-bit
/// grayscale. Write failures are returned, not swallowed; the caller decides
/// whether to retry, log, or abort.
pub fn render_to_file<F>(config: &RenderConfig, field: &F, path: impl AsRef<Path>) -> Result<()>
where
    F: ScalarField + ?Sized,
{
    let gray = render(config, field)?;
    encode::write_gray16(gray, path)
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::quantize::MAX_LEVEL;

    fn plane(p: DVec2) -> f64 {
        p.x + p.y
    }

    #[test]
    fn render_outputs_requested_dimensions() {
        let gray = render(&RenderConfig::new(7, 3), &plane).expect("render");
        assert_eq!(gray.width, 7);
        assert_eq!(gray.height, 3);
        assert_eq!(gray.data.len(), 21);
    }

    #[test]
    fn extremes_map_to_black_and_white() {
        let gray = render(&RenderConfig::new(4, 4), &plane).expect("render");

        // Field minimum at the (-5, -5) corner, maximum at (5, 5).
        assert_eq!(gray.pixel_at(0, 0), 0);
        assert!(gray.pixel_at(3, 3) >= MAX_LEVEL - 1);
        // The anti-diagonal sits at mid-range.
        let mid = gray.pixel_at(0, 3);
        assert!(mid == 32767 || mid == 32768);
        assert!(gray.data.iter().all(|&p| p <= MAX_LEVEL));
    }

    #[test]
    fn constant_field_renders_black() {
        let gray = render(&RenderConfig::new(8, 8), &|_p: DVec2| 5.0).expect("render");
        assert_eq!(gray.data.len(), 64);
        assert!(gray.data.iter().all(|&p| p == 0));
    }

    #[test]
    fn invalid_dimensions_are_rejected() {
        let err = RenderConfig::new(0, 8).validate().expect_err("zero width");
        assert!(matches!(err, Error::InvalidDimensions { .. }));

        let err = render(&RenderConfig::new(8, 0), &plane).expect_err("zero height");
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn non_finite_sample_is_reported_with_its_cell() {
        let singular = |p: DVec2| 1.0 / p.x;
        let config = RenderConfig::new(3, 3).with_domain(Domain::new(
            DVec2::new(-1.0, -1.0),
            DVec2::new(1.0, 1.0),
        ));

        let err = render(&config, &singular).expect_err("division by zero");
        match err {
            Error::NonFiniteSample { col, row, value } => {
                assert_eq!((col, row), (1, 0));
                assert!(!value.is_finite());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn render_to_file_round_trips_through_png() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("plane.png");
        render_to_file(&RenderConfig::new(4, 4), &plane, &path).expect("write");

        let reread = image::open(&path).expect("reopen");
        assert_eq!(reread.color(), image::ColorType::L16);
        let luma = reread.to_luma16();
        assert_eq!(luma.dimensions(), (4, 4));
        assert_eq!(luma.get_pixel(0, 0).0[0], 0);
        assert!(luma.get_pixel(3, 3).0[0] >= MAX_LEVEL - 1);
    }

    #[test]
    fn write_failure_is_returned_to_the_caller() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("plane.png");

        let err = render_to_file(&RenderConfig::new(4, 4), &plane, &path)
            .expect_err("directory does not exist");
        assert!(matches!(err, Error::Image(_) | Error::Io(_)));
        assert!(!err.to_string().is_empty());
    }
}
