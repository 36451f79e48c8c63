/// Command-line parsing and the run orchestration behind it
pub mod cli;
/// Default values and numeric constants
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Image decoding and raster export
pub mod image;
/// Logger installation and log-file mirroring
pub mod logging;
/// Generation progress display
pub mod progress;
