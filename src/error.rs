use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading domains or writing verdicts.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn open_error_names_path() {
        let err = Error::Open {
            path: PathBuf::from("input.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };

        let display = err.to_string();
        assert!(display.contains("input.txt"), "got: {}", display);
        assert!(display.contains("no such file"), "got: {}", display);
    }

    #[test]
    fn io_error_converts() {
        let err: Error = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();

        assert!(matches!(err, Error::Io(_)));
    }
}
