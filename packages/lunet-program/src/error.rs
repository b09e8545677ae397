//! Typed resolution failures.

use smol_str::SmolStr;
use thiserror::Error;

/// A failed name-resolution query.
///
/// Every variant is a static semantic fact about the queried snapshot: the
/// same query against the same environment always fails the same way. The
/// environment carries no source positions; the caller attaches those when it
/// turns one of these into a user-facing diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The caller handed us a malformed type tag. This is a defect in the
    /// caller, not a user-facing diagnostic, and should not be caught and
    /// continued from.
    #[error("bug: malformed type tag: {0}")]
    InvariantViolation(String),
    #[error("unknown class: `{0}`")]
    NotFoundClass(SmolStr),
    #[error("unknown constant: `{0}`")]
    NotFoundConst(SmolStr),
    #[error("unknown type: `{0}`")]
    UnknownType(SmolStr),
    #[error("undefined local variable: `{0}`")]
    UndefinedVariable(SmolStr),
    #[error("instance variable `{0}` referenced outside of a class")]
    OutOfContext(SmolStr),
    #[error("class `{class}` does not have an instance variable `{ivar}`")]
    UnknownMember { class: SmolStr, ivar: SmolStr },
    #[error("class `{class}` does not have a method `{method}`")]
    UnknownMethod { class: SmolStr, method: SmolStr },
}
