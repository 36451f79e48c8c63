//! Logger setup with optional mirroring into a log file

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::io::configuration::DEFAULT_LOG_FILTER;
use crate::io::error::{Result, SearchError};

/// Writer that copies every record to two sinks, flushing the mirror each time
pub struct TeeWriter<A, B> {
    primary: A,
    mirror: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    /// Combine a primary sink with a mirror
    pub const fn new(primary: A, mirror: B) -> Self {
        Self { primary, mirror }
    }

    /// Release both sinks
    pub fn into_inner(self) -> (A, B) {
        (self.primary, self.mirror)
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.primary.write_all(buf)?;
        self.mirror.write_all(buf)?;
        self.mirror.flush()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.primary.flush()?;
        self.mirror.flush()
    }
}

/// Install the global logger
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. With a log file,
/// records go to stderr and are appended to the file.
///
/// # Errors
///
/// Returns an error if:
/// - The log file cannot be opened for appending
/// - A global logger is already installed
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SearchError::FileSystem {
                path: path.to_path_buf(),
                operation: "open log file",
                source,
            })?;
        builder.target(Target::Pipe(Box::new(TeeWriter::new(io::stderr(), file))));
    }

    builder.try_init().map_err(|e| SearchError::Logging {
        reason: e.to_string(),
    })
}
