// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Result of writing styled output to stdout or to a [`std::io::Write`] sink. The `Ok`
/// value is the number of bytes written, which includes the opening sequence, the
/// content, and the closing reset.
pub type AnsiFmtResult<T> = Result<T, AnsiFmtError>;

/// Building and rendering a sequence never fails. The only errors come from the output
/// destination. The destination's error is kept as the source and its message is shown
/// unchanged, along with how many bytes reached the destination before it failed.
#[non_exhaustive]
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnsiFmtError {
    #[error("{source}")]
    #[diagnostic(code(r3bl_ansi_fmt::io_error))]
    Io {
        bytes_written: usize,
        #[source]
        source: std::io::Error,
    },
}

impl AnsiFmtError {
    #[must_use]
    pub fn io(bytes_written: usize, source: std::io::Error) -> Self {
        AnsiFmtError::Io {
            bytes_written,
            source,
        }
    }

    /// The [`std::io::ErrorKind`] reported by the destination.
    #[must_use]
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            AnsiFmtError::Io { source, .. } => source.kind(),
        }
    }

    /// Bytes accepted by the destination before the failure.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        match self {
            AnsiFmtError::Io { bytes_written, .. } => *bytes_written,
        }
    }
}

/// An error with no bytes written.
impl From<std::io::Error> for AnsiFmtError {
    fn from(source: std::io::Error) -> Self { AnsiFmtError::io(0, source) }
}
