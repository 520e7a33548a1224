use crate::{
    ast::{Alternative, Block, If, Statement, While},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Statements are parsed until the closing `}`. A block must hold at least
    /// one statement.
    ///
    /// Grammar: `block := "{" statement+ "}"`
    ///
    /// # Errors
    /// - `UnexpectedToken` if the opening `{` is missing.
    /// - [`ParseError::EmptyBlock`] for `{ }`.
    /// - `UnexpectedEndOfInput` if the input ends before `}`.
    /// - [`ParseError::NestingTooDeep`] if blocks nest too deeply.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.nested(Self::parse_block_node)
    }

    fn parse_block_node(&mut self) -> ParseResult<Block> {
        let line = self.expect(&Token::LBrace, "'{' to open a block")?;

        let mut statements = Vec::new();
        loop {
            match self.peek() {
                Some(Token::RBrace) => break,
                Some(_) => statements.push(self.parse_statement()?),
                None => return Err(self.unexpected("'}' to close the block")),
            }
        }

        if statements.is_empty() {
            return Err(ParseError::EmptyBlock { line: self.peek_line(),
                                                near: self.near(), });
        }
        self.expect(&Token::RBrace, "'}' to close the block")?;

        Ok(Block { statements, line })
    }

    /// Parses `loop { ... }`.
    ///
    /// Grammar: `loop := "loop" block`
    pub fn parse_loop(&mut self) -> ParseResult<Statement> {
        self.expect(&Token::Loop, "'loop'")?;
        Ok(Statement::Loop(self.parse_block()?))
    }

    /// Parses `while (cond) { ... }`.
    ///
    /// Grammar: `while := "while" "(" condition ")" block`
    pub fn parse_while(&mut self) -> ParseResult<Statement> {
        self.expect(&Token::While, "'while'")?;
        let condition = self.parse_guard()?;
        let body = self.parse_block()?;
        Ok(Statement::While(While { condition, body }))
    }

    /// Parses an `if` statement together with its whole `elif` / `else` chain.
    ///
    /// Syntax:
    /// ```text
    ///     if (cond) { ... }
    ///     elif (cond) { ... }
    ///     else { ... }
    /// ```
    /// Each `elif` becomes a nested [`If`] stored as the alternative of the
    /// branch before it, and the chain is parsed recursively, so a trailing
    /// `else` ends up attached to the last `elif`. Every `elif` counts as one
    /// more nesting level.
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis around a condition is missing.
    /// - Propagates errors from conditions and blocks.
    pub fn parse_if(&mut self) -> ParseResult<Statement> {
        self.expect(&Token::If, "'if'")?;
        Ok(Statement::If(self.parse_if_branch()?))
    }

    /// Parses one branch of an `if` chain, positioned after `if` or `elif`.
    fn parse_if_branch(&mut self) -> ParseResult<If> {
        let condition = self.parse_guard()?;
        let then_block = self.parse_block()?;

        let alternative = if self.eat(&Token::Elif) {
            Some(Alternative::Elif(Box::new(self.nested(Self::parse_if_branch)?)))
        } else if self.eat(&Token::Else) {
            Some(Alternative::Else(self.parse_block()?))
        } else {
            None
        };

        Ok(If { condition,
                then_block,
                alternative })
    }
}
