use std::path::{Path, PathBuf};

/// Broad classification of a generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image is missing, unreadable or not decodable.
    SourceDecode,
    /// An output file or the output directory couldn't be written.
    OutputWrite,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open source image {}", .0.display())]
    SourceOpen(PathBuf, #[source] std::io::Error),
    #[error("failed to decode source image {}", .0.display())]
    SourceDecode(PathBuf, #[source] image::ImageError),
    #[error("failed to create output directory {}", .0.display())]
    OutputDir(PathBuf, #[source] std::io::Error),
    #[error("failed to write {}", .0.display())]
    OutputWrite(PathBuf, #[source] std::io::Error),
    #[error("failed to encode {}", .0.display())]
    Encode(PathBuf, #[source] image::ImageError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SourceOpen(..) | Error::SourceDecode(..) => ErrorKind::SourceDecode,
            Error::OutputDir(..) | Error::OutputWrite(..) | Error::Encode(..) => {
                ErrorKind::OutputWrite
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Error::SourceOpen(path, _)
            | Error::SourceDecode(path, _)
            | Error::OutputDir(path, _)
            | Error::OutputWrite(path, _)
            | Error::Encode(path, _) => path,
        }
    }
}
