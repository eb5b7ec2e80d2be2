//! Errors that stop a netlist from being read at all.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible netlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A fatal netlist error.
#[derive(Debug, Error)]
pub enum Error {
    /// The netlist file could not be opened.
    #[error("cannot open netlist {}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading the netlist failed part way through.
    #[error("failed to read netlist at line {line}")]
    Read {
        /// Line that was being read.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
