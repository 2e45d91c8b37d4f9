use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Project path does not exist: {0}")]
    RootNotFound(String),

    #[error("Failed to write archive {0}: {1}")]
    OutputError(String, String),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(String, String),

    #[error("Tokenizer Error: {0}")]
    TokenizerModelError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for ArchiveError {
    fn from(err: std::io::Error) -> Self {
        ArchiveError::IoError(err.to_string())
    }
}
