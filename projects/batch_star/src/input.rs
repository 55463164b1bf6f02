use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Text(String),
}

#[derive(Debug, Error)]
pub enum ReadInputError {
    #[error("file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputSource {
    /// Blank lines are kept; the batch counts them.
    pub async fn read_lines(&self) -> Result<Vec<String>, ReadInputError> {
        let contents = match self {
            InputSource::Text(text) => return Ok(split_lines(text)),
            InputSource::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| match source.kind() {
                        ErrorKind::NotFound => ReadInputError::NotFound { path: path.clone() },
                        _ => ReadInputError::Read {
                            path: path.clone(),
                            source,
                        },
                    })?
            }
        };
        Ok(split_lines(&contents))
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}
