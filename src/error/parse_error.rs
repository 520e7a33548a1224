use thiserror::Error;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Variants raised while tokens remain carry `near`, the text of up to five
/// unconsumed tokens starting at the offending one, so that messages point at
/// the place the parser gave up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The source contained no tokens at all.
    #[error("Error: Program is empty; expected at least one statement.")]
    EmptyProgram,
    /// Found a token where a different one was required.
    #[error("Error on line {line}: Expected {expected}, found '{found}'.\n   @ ...{near}...")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The next few unconsumed tokens.
        near:     String,
    },
    /// Reached the end of input in the middle of a production.
    #[error("Error on line {line}: Expected {expected}, but the program ended.")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The line of the last token in the program.
        line:     usize,
    },
    /// A statement started with a token that cannot start a statement.
    #[error("Error on line {line}: Invalid statement starting with '{found}'.\n   @ ...{near}...")]
    InvalidStatement {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
        /// The next few unconsumed tokens.
        near:  String,
    },
    /// A `{ }` block without any statement in it.
    #[error("Error on line {line}: Block must contain at least one statement.\n   @ ...{near}...")]
    EmptyBlock {
        /// The source line where the error occurred.
        line: usize,
        /// The next few unconsumed tokens.
        near: String,
    },
    /// A numeric-looking token that is not a valid literal, e.g. `007` or
    /// `-0`.
    #[error("Error on line {line}: Malformed number '{literal}'.\n   @ ...{near}...")]
    MalformedNumber {
        /// The offending literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The next few unconsumed tokens.
        near:    String,
    },
    /// A number literal too large to be represented as an `i64`.
    #[error("Error on line {line}: Literal {literal} is too large.")]
    LiteralTooLarge {
        /// The offending literal.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Text the tokenizer could not classify.
    #[error("Error on line {line}: Unexpected input '{text}'.")]
    UnexpectedCharacter {
        /// The offending text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A variable was read before any assignment to it had been parsed.
    #[error("Error on line {line}: Variable {name} must be assigned before it is used.\n   @ ...{near}...")]
    UndeclaredVariable {
        /// The name of the variable, including the leading `$`.
        name: String,
        /// The source line where the error occurred.
        line: usize,
        /// The next few unconsumed tokens.
        near: String,
    },
    /// Blocks, conditions, expressions or `elif` links nested deeper than
    /// the parser allows. Expressions reached through variable references
    /// count towards the depth of the reference.
    #[error("Error on line {line}: Nesting exceeds the limit of {limit} levels.\n   @ ...{near}...")]
    NestingTooDeep {
        /// The maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
        /// The next few unconsumed tokens.
        near:  String,
    },
}

impl ParseError {
    /// Gets the source line of the error, if it has one.
    /// ## Example
    /// ```
    /// use robotscript::error::ParseError;
    ///
    /// let err = ParseError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
    ///                                         line:    4, };
    ///
    /// assert_eq!(err.line_number(), Some(4));
    /// assert_eq!(ParseError::EmptyProgram.line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::EmptyProgram => None,
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::InvalidStatement { line, .. }
            | Self::EmptyBlock { line, .. }
            | Self::MalformedNumber { line, .. }
            | Self::LiteralTooLarge { line, .. }
            | Self::UnexpectedCharacter { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::NestingTooDeep { line, .. } => Some(*line),
        }
    }
}
