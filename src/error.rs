use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to build one of the startup data sources.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File \"{}\" cannot be found.", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("{} does not put any letters in the bag", .path.display())]
    EmptyBag { path: PathBuf },
}

impl LoadError {
    /// Map an open/read failure, keeping "not found" distinct from other I/O errors.
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        if err.kind() == io::ErrorKind::NotFound {
            LoadError::Missing { path }
        } else {
            LoadError::Io { path, source: err }
        }
    }
}

/// Anything that ends the program early: a bad data source, or I/O on the console or socket.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
