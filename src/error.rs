// src/error.rs

//! Error type shared by the table builder and the file generator.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    /// A colour name was inserted into the table twice.
    #[error("duplicate colour name '{name}' in colour table")]
    DuplicateColour { name: String },

    /// Creating, writing or flushing one of the output files failed.
    #[error("failed to write {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
