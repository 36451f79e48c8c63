//! Global structural similarity between two images
//!
//! Unlike windowed SSIM this reduces each image to a single mean, deviation
//! and shared covariance over every pixel. The contrast term divides by the
//! sum of standard deviations and the stabilisers are sized for 16-bit data
//! while the gray levels are 8-bit; both are kept as-is because the search
//! was tuned against this exact landscape.

use crate::imaging::raster::ImageSampler;
use crate::io::configuration::{LUMA_WEIGHTS, SSIM_C1, SSIM_C2};
use crate::io::error::{Result, ensure_same_dimensions};

/// BT.709 luma of a pixel, truncated to an 8-bit gray level
pub fn luma(pixel: [u8; 4]) -> u8 {
    let [r, g, b, _] = pixel;
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wb.mul_add(
        f64::from(b),
        wr.mul_add(f64::from(r), wg * f64::from(g)),
    ) as u8
}

/// Gray levels of an image in row-major order
pub fn gray_levels<S: ImageSampler + ?Sized>(image: &S) -> Vec<u8> {
    let (width, height) = image.dimensions();
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| image.pixel(x, y).map_or(0, luma))
        .collect()
}

/// Whole-image first and second moments of two gray images
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalStatistics {
    /// Mean gray level of the first image
    pub mean_x: f64,
    /// Mean gray level of the second image
    pub mean_y: f64,
    /// Sample standard deviation of the first image
    pub std_x: f64,
    /// Sample standard deviation of the second image
    pub std_y: f64,
    /// Sample covariance between the images
    pub covariance: f64,
}

impl GlobalStatistics {
    /// Compute statistics over two equally sized gray buffers
    ///
    /// Deviation and covariance use the `n - 1` divisor; with fewer than two
    /// samples they are zero.
    pub fn from_gray(x: &[u8], y: &[u8]) -> Self {
        let n = x.len().min(y.len());
        if n == 0 {
            return Self {
                mean_x: 0.0,
                mean_y: 0.0,
                std_x: 0.0,
                std_y: 0.0,
                covariance: 0.0,
            };
        }

        let count = n as f64;
        let mean_x = x.iter().map(|&v| f64::from(v)).sum::<f64>() / count;
        let mean_y = y.iter().map(|&v| f64::from(v)).sum::<f64>() / count;

        let (mut sq_x, mut sq_y, mut cross) = (0.0, 0.0, 0.0);
        for (&vx, &vy) in x.iter().zip(y.iter()) {
            let dx = f64::from(vx) - mean_x;
            let dy = f64::from(vy) - mean_y;
            sq_x += dx * dx;
            sq_y += dy * dy;
            cross += dx * dy;
        }

        let (std_x, std_y, covariance) = if n < 2 {
            (0.0, 0.0, 0.0)
        } else {
            let dof = count - 1.0;
            ((sq_x / dof).sqrt(), (sq_y / dof).sqrt(), cross / dof)
        };

        Self {
            mean_x,
            mean_y,
            std_x,
            std_y,
            covariance,
        }
    }

    /// SSIM-style score; 1 for identical flat images
    pub fn structural_similarity(&self) -> f64 {
        let luminance = (2.0 * self.mean_x * self.mean_y + SSIM_C1)
            / (self.mean_x * self.mean_x + self.mean_y * self.mean_y + SSIM_C1);
        let structure = (2.0 * self.covariance + SSIM_C2) / (self.std_x + self.std_y + SSIM_C2);
        luminance * structure
    }
}

/// Dissimilarity `1 - ssim`, zero for identical flat images
///
/// The contrast term divides by `σx + σy`, so textured images compared with
/// themselves score slightly below zero. The raw value is returned so that
/// near-identical candidates stay ordered.
///
/// # Errors
///
/// Returns [`crate::SearchError::DimensionMismatch`] if the images differ in size
pub fn dissimilarity<A, B>(a: &A, b: &B) -> Result<f64>
where
    A: ImageSampler + ?Sized,
    B: ImageSampler + ?Sized,
{
    ensure_same_dimensions(a.dimensions(), b.dimensions())?;
    let stats = GlobalStatistics::from_gray(&gray_levels(a), &gray_levels(b));
    Ok(1.0 - stats.structural_similarity())
}

/// Map a dissimilarity onto a fitness; slightly above one when it is negative
pub fn fitness_from_dissimilarity(dissimilarity: f64) -> f64 {
    1.0 / (1.0 + dissimilarity)
}
