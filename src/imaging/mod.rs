/// Bilateral smoothing kernel and its spatial weight table
pub mod filter;
/// Read-only RGBA pixel grids
pub mod raster;
/// Global SSIM-style dissimilarity and the fitness mapping
pub mod similarity;
