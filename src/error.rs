/// Parsing errors.
///
/// Defines all error types that can occur during tokenizing and parsing of
/// robot programs. Every parse error is fatal to the current parse; no partial
/// program is ever returned.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a parsed program is
/// executed, including failures reported by the robot itself.
pub mod runtime_error;

use thiserror::Error;

pub use parse_error::ParseError;
pub use runtime_error::{CapabilityError, RuntimeError};

/// Any failure of the one-call [`crate::run`] entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text was rejected by the tokenizer or parser.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program was aborted while executing.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
