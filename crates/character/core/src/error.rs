//! Errors surfaced while a character attacks.

use std::io;

/// Failure raised while emitting an attack line.
///
/// Binding a variant to the wrong template or passing a null address cannot be
/// written in this crate, so the output stream is the only thing that can fail.
#[derive(Debug, thiserror::Error)]
pub enum AttackError {
    /// The output stream rejected the attack line.
    #[error("failed to write attack line: {0}")]
    Output(#[from] io::Error),
}

impl AttackError {
    /// Returns the underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Output(err) => err.kind(),
        }
    }
}
