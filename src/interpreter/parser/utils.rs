use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// How many upcoming tokens are quoted in an error message.
const CONTEXT_TOKENS: usize = 5;

/// Deepest allowed nesting of blocks, conditions, expressions and `elif`
/// links, including expressions reached through variable references.
pub const MAX_NESTING: usize = 256;

impl<'t> Parser<'t> {
    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> Option<&'t Token> {
        self.tokens.peek().copied().map(|(tok, _)| tok)
    }

    /// Returns the line of the next token, or of the last one if the input is
    /// exhausted.
    pub(in crate::interpreter::parser) fn peek_line(&mut self) -> usize {
        self.tokens.peek().map_or(self.last_line, |(_, line)| *line)
    }

    /// Consumes the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Option<&'t Token> {
        let (tok, line) = self.tokens.next()?;
        self.last_line = *line;
        Some(tok)
    }

    /// Consumes the next token if it equals `expected`.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes `expected` and returns its line, or fails naming `what` was
    /// required.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` or `UnexpectedEndOfInput` if the next token
    /// is not `expected`.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token,
                                                 what: &str)
                                                 -> ParseResult<usize> {
        let line = self.peek_line();
        if self.eat(expected) {
            return Ok(line);
        }
        Err(self.unexpected(what))
    }

    /// Runs `production` one nesting level deeper.
    ///
    /// # Errors
    /// Returns [`ParseError::NestingTooDeep`] instead of descending past
    /// [`MAX_NESTING`].
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    production: impl FnOnce(&mut Self)
                                                                            -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING {
            return Err(self.too_deep());
        }
        self.depth += 1;
        self.reach = self.reach.max(self.depth);
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Builds the error for nesting past [`MAX_NESTING`] at the current
    /// position.
    pub(in crate::interpreter::parser) fn too_deep(&mut self) -> ParseError {
        ParseError::NestingTooDeep { limit: MAX_NESTING,
                                     line:  self.peek_line(),
                                     near:  self.near(), }
    }

    /// The text of up to five unconsumed tokens, each preceded by a space.
    pub(in crate::interpreter::parser) fn near(&self) -> String {
        self.tokens
            .clone()
            .take(CONTEXT_TOKENS)
            .map(|(tok, _)| format!(" {tok}"))
            .collect()
    }

    /// Builds the error for a missing `expected` at the current position.
    pub(in crate::interpreter::parser) fn unexpected(&mut self, expected: &str) -> ParseError {
        match self.tokens.peek() {
            Some((tok, line)) => {
                let (found, line) = (tok.to_string(), *line);
                ParseError::UnexpectedToken { expected: expected.to_string(),
                                              found,
                                              line,
                                              near: self.near() }
            },
            None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                       line:     self.last_line, },
        }
    }
}
