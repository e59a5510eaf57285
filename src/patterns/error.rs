use thiserror::Error;

use crate::patterns::prototype::PrototypeKind;

/// A specialized result type for the pattern collaborators.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors raised by the pattern collaborators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A prototype lookup was made for a kind without registered prototype.
    #[error("no prototype registered for kind {0:?}")]
    UnknownPrototype(PrototypeKind),
}
