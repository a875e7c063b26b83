use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Stopwords,
    ToxicWords,
    Text,
    Report,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileKind::Stopwords => "stopword",
            FileKind::ToxicWords => "toxic word",
            FileKind::Text => "text",
            FileKind::Report => "report",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("{kind} file not found: {}", .path.display())]
    MissingFile {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {kind} file {}: {source}", .path.display())]
    Read {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {kind} file {}: {source}", .path.display())]
    Write {
        kind: FileKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AnalyzerError {
    /// Maps an open/read failure onto `MissingFile` or `Read`.
    pub fn from_read(kind: FileKind, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            AnalyzerError::MissingFile { kind, path, source }
        } else {
            AnalyzerError::Read { kind, path, source }
        }
    }

    pub fn is_missing_file(&self) -> bool {
        matches!(self, AnalyzerError::MissingFile { .. })
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
