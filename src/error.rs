use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The page could not be fetched: connection failure, non-2xx status, or timeout.
    #[error("failed to fetch opcode table from {url}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to read opcode table from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The page no longer has the table shape we know how to read.
    #[error("unrecognized page structure: {0}")]
    Parse(String),

    #[error("invalid hex value {input:?}")]
    InvalidHex {
        input: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("no opcode found matching {0}")]
    NotFound(String),

    #[error("failed to write output")]
    Output(#[from] io::Error),
}
