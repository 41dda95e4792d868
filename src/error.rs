//! Fatal error kinds for an overview run.
//!
//! A missing prototype or doc block is not an error: the extractor returns
//! `None` and the run carries on with a degraded entry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source directory could not be enumerated.
    #[error("failed to read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A matched function file could not be read as text.
    #[error("failed to read '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The assembled document could not be written.
    #[error("failed to write '{}'", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
