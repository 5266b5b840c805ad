// src/error.rs
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    EntryStat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("console virtual terminal mode unavailable")]
    ConsoleMode,

    #[error("failed to start {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn directory_access(path: &Path, err: walkdir::Error) -> Self {
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
        Error::DirectoryAccess { path: path.to_path_buf(), source }
    }

    pub(crate) fn entry_stat(path: &Path, source: io::Error) -> Self {
        Error::EntryStat { path: path.to_path_buf(), source }
    }

    /// Fatal errors abort the whole invocation.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::EntryStat { .. } | Error::ConsoleMode)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
