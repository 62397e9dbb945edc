//! Error types for the variable store.

use crate::value::VarType;

/// Errors raised by typed variable access.
///
/// Absence is never an error: a missing variable yields the caller's default.
/// The only failure is asking for a variable as a type it doesn't hold, which
/// is a programming error on the caller's side and is handed straight back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VarError {
    /// The stored value's runtime type is incompatible with the requested type.
    #[error("variable '{name}' is not of type '{requested}', but '{actual}'")]
    TypeMismatch {
        name: String,
        /// The type the caller asked for, e.g. "ushort".
        requested: &'static str,
        /// The storage kind `requested` reads from, e.g. `Short` for "ushort".
        expected: VarType,
        /// The storage kind actually held.
        actual: VarType,
    },
}

/// Result type alias for variable store operations.
pub type Result<T> = std::result::Result<T, VarError>;
