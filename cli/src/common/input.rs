//! Reading height-list batches from a file or stdin.

use std::io::Read;
use std::path::PathBuf;

use thiserror::Error;

/// Path that selects stdin.
pub const STDIN: &str = "-";

/// A batch file could not be read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("<stdin>: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The text of a batch and the name to report it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub content: String,
    pub name: String,
}

/// Reads `path`, or stdin when it is [`STDIN`].
pub fn read_input(path: &str) -> Result<Batch, ReadError> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(ReadError::Stdin)?;
        return Ok(Batch {
            content,
            name: "<stdin>".to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ReadError::File {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(Batch {
        content,
        name: path.to_string(),
    })
}

pub fn is_stdin(path: &str) -> bool {
    path == STDIN
}
