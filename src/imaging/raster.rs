//! Immutable 8-bit RGBA pixel grid shared by the filter and the metric

use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

/// Read-only pixel access used by the filter kernel and the similarity metric
pub trait ImageSampler {
    /// Number of columns
    fn width(&self) -> u32;

    /// Number of rows
    fn height(&self) -> u32;

    /// RGBA channels at `(x, y)`, or `None` outside the grid
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;

    /// Dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// Row-major RGBA raster
///
/// Channels are stored at 8-bit precision regardless of the source encoding,
/// so every colour comparison downstream happens at 8-bit granularity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl Raster {
    /// Build a raster from row-major pixels
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Option<Self> {
        (pixels.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    // Callers guarantee `pixels.len() == width * height`
    pub(crate) const fn assemble(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Raster filled with a single colour
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Capture a decoded image at 16 bits per channel and reduce it to 8 bits
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let wide = image.to_rgba16();
        let (width, height) = wide.dimensions();
        let pixels = wide
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                [narrow(r), narrow(g), narrow(b), narrow(a)]
            })
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Pixels of row `y`
    pub fn row(&self, y: u32) -> &[[u8; 4]] {
        let start = y as usize * self.width as usize;
        self.pixels
            .get(start..start + self.width as usize)
            .unwrap_or(&[])
    }

    /// Convert into an `image` buffer for encoding
    pub fn to_rgba_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            Rgba(self.pixel(x, y).unwrap_or([0, 0, 0, 0]))
        })
    }
}

impl ImageSampler for Raster {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

// 16-bit to 8-bit by dropping the low byte
const fn narrow(value: u16) -> u8 {
    (value >> 8) as u8
}
