use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiniboxError {
    #[error("cannot stat '{}': {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open directory '{}': {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot remove '{}': {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("tree deeper than {} levels at '{}'", crate::MAX_DEPTH, .path.display())]
    TooDeep { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, MiniboxError>;
