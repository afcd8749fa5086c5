use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("unable to decode metadata: {0}")]
    Decode(#[from] rmpv::decode::Error),

    #[error("malformed metadata document: {0}")]
    MalformedDocument(String),

    #[error("unable to parse metadata function {index}: {reason}")]
    InvalidFunction { index: usize, reason: String },

    #[error("function `{name}` collides with an earlier function on `{enumerant}`")]
    DuplicateFunction { name: String, enumerant: String },

    #[error("found unsupported data type {0}")]
    UnsupportedType(String),

    #[error("error creating output folder {}: {source}", .path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("unable to open {file} for writing: {source}")]
    WriteArtifact { file: String, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
