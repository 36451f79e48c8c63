//! Edge-preserving bilateral smoothing with spatial and range Gaussian weights
//!
//! Each output pixel is a weighted mean of its square neighbourhood. The
//! spatial weight depends only on the offset from the window centre and is
//! tabulated once per call; the range weight depends on the RGB distance to
//! the centre pixel and is computed per neighbour. Neighbours outside the
//! image are skipped, so border windows are simply smaller.

use ndarray::Array2;
use rayon::prelude::*;

use crate::imaging::raster::{ImageSampler, Raster};

/// Filter strength triple in the units the kernel consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BilateralParams {
    /// Side of the square neighbourhood in pixels
    pub diameter: u32,
    /// Standard deviation of the range (colour distance) Gaussian
    pub color_sigma: f64,
    /// Standard deviation of the spatial (pixel distance) Gaussian
    pub space_sigma: f64,
}

/// Gaussian falloff `exp(-d² / 2σ²)` for a squared distance
///
/// A zero sigma collapses to an indicator: full weight at distance zero and
/// nothing elsewhere.
pub fn gaussian(distance_sq: f64, sigma: f64) -> f64 {
    if sigma <= 0.0 {
        return if distance_sq <= 0.0 { 1.0 } else { 0.0 };
    }
    (-distance_sq / (2.0 * sigma * sigma)).exp()
}

/// Spatial weights for every offset in a `diameter × diameter` window
#[derive(Debug, Clone)]
pub struct SpatialKernel {
    diameter: u32,
    weights: Array2<f64>,
}

impl SpatialKernel {
    /// Tabulate spatial weights around the centre offset `diameter / 2`
    pub fn new(diameter: u32, space_sigma: f64) -> Self {
        let half = i64::from(diameter / 2);
        let side = diameter as usize;
        let weights = Array2::from_shape_fn((side, side), |(i, j)| {
            let di = i as i64 - half;
            let dj = j as i64 - half;
            gaussian((di * di + dj * dj) as f64, space_sigma)
        });

        Self { diameter, weights }
    }

    /// Window side length
    pub const fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Weight at window offset `(i, j)`; zero outside the window
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights.get((i, j)).copied().unwrap_or(0.0)
    }
}

/// Squared Euclidean distance between the RGB parts of two pixels
pub fn color_distance_sq(a: [u8; 4], b: [u8; 4]) -> f64 {
    a.iter()
        .zip(b.iter())
        .take(3)
        .map(|(&ca, &cb)| {
            let d = f64::from(ca) - f64::from(cb);
            d * d
        })
        .sum()
}

/// Apply the bilateral filter, producing a new raster of the same size
///
/// Rows are processed in parallel on the current rayon pool. Alpha is copied
/// from the source pixel unchanged.
pub fn bilateral_filter<S>(image: &S, params: BilateralParams) -> Raster
where
    S: ImageSampler + Sync + ?Sized,
{
    let (width, height) = image.dimensions();
    let kernel = SpatialKernel::new(params.diameter, params.space_sigma);
    let mut pixels = vec![[0_u8; 4]; width as usize * height as usize];

    if !pixels.is_empty() {
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, out) in row.iter_mut().enumerate() {
                    *out = filter_pixel(image, &kernel, params.color_sigma, x as u32, y as u32);
                }
            });
    }

    Raster::assemble(width, height, pixels)
}

fn filter_pixel<S>(image: &S, kernel: &SpatialKernel, color_sigma: f64, x: u32, y: u32) -> [u8; 4]
where
    S: ImageSampler + ?Sized,
{
    let Some(center) = image.pixel(x, y) else {
        return [0; 4];
    };

    let diameter = kernel.diameter() as usize;
    let half = i64::from(kernel.diameter() / 2);
    let mut sums = [0.0_f64; 3];
    let mut total_weight = 0.0;

    for i in 0..diameter {
        let Ok(nx) = u32::try_from(i64::from(x) + i as i64 - half) else {
            continue;
        };
        for j in 0..diameter {
            let Ok(ny) = u32::try_from(i64::from(y) + j as i64 - half) else {
                continue;
            };
            let Some(neighbor) = image.pixel(nx, ny) else {
                continue;
            };

            let weight = kernel.weight(i, j)
                * gaussian(color_distance_sq(center, neighbor), color_sigma);
            for (sum, &channel) in sums.iter_mut().zip(neighbor.iter()) {
                *sum += f64::from(channel) * weight;
            }
            total_weight += weight;
        }
    }

    if total_weight <= 0.0 || !total_weight.is_finite() {
        return center;
    }

    let [r, g, b] = sums.map(|sum| round_channel(sum / total_weight));
    [r, g, b, center[3]]
}

fn round_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
