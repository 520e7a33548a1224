use std::{iter::Peekable, slice::Iter, str::FromStr};

use tracing::debug;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::{Token, tokenize}, parser::bindings::Bindings},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over a token slice.
///
/// Every production is selected by looking at the next token only; the parser
/// never backtracks. Variable references are resolved against the parser's own
/// [`Bindings`] while parsing, so each parser starts with an empty table and
/// independent parses never see each other's variables.
pub struct Parser<'t> {
    pub(in crate::interpreter::parser) tokens:    Peekable<Iter<'t, (Token, usize)>>,
    pub(in crate::interpreter::parser) bindings:  Bindings,
    pub(in crate::interpreter::parser) last_line: usize,
    /// Number of nested blocks, conditions, expressions and `elif` links
    /// currently open.
    pub(in crate::interpreter::parser) depth:     usize,
    /// Deepest level reached so far, counting the expressions behind
    /// variable references. Reset at the start of every assignment.
    pub(in crate::interpreter::parser) reach:     usize,
}

impl<'t> Parser<'t> {
    /// Creates a parser over `tokens` with a fresh binding table.
    #[must_use]
    pub fn new(tokens: &'t [(Token, usize)]) -> Self {
        Self { tokens:    tokens.iter().peekable(),
               bindings:  Bindings::new(),
               last_line: tokens.first().map_or(1, |(_, line)| *line),
               depth:     0,
               reach:     0, }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := statement+`
    ///
    /// # Errors
    /// - [`ParseError::EmptyProgram`] if there are no tokens at all.
    /// - Any error raised by a statement; trailing tokens that cannot start a
    ///   statement are reported as [`ParseError::InvalidStatement`].
    pub fn parse_program(mut self) -> ParseResult<Program> {
        if self.tokens.peek().is_none() {
            return Err(ParseError::EmptyProgram);
        }

        let mut statements = Vec::new();
        while self.tokens.peek().is_some() {
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(),
               variables = self.bindings.len(),
               "parsed program");

        Ok(Program { statements })
    }
}

/// Tokenizes and parses `source` into a [`Program`].
///
/// This is the entry point for parsing. Each call uses its own parser and
/// binding table.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found; no partial
/// program is returned.
///
/// # Example
/// ```
/// use robotscript::interpreter::parser::core::parse_program;
///
/// let program = parse_program("$x = add(2, 3); move($x);").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse_program("move($undeclared);").is_err());
/// assert!(parse_program("").is_err());
/// ```
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let tokens = tokenize(source)?;
    debug!(tokens = tokens.len(), "tokenized program");
    Parser::new(&tokens).parse_program()
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        parse_program(source)
    }
}
