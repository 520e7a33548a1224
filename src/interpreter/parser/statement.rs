use std::rc::Rc;

use crate::{
    ast::{Action, Assignment, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - an action followed by `;`,
    /// - a `loop`, `if` or `while` statement,
    /// - an assignment followed by `;`.
    ///
    /// The construct is chosen from the first token alone.
    ///
    /// Grammar:
    /// ```text
    ///     statement := action ";" | loop | if | while | assignment ";"
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidStatement`] if the next token cannot start a
    /// statement, or any error from the chosen production.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let Some(tok) = self.peek() else {
            return Err(self.unexpected("a statement"));
        };

        match tok {
            tok if tok.is_action() => {
                let action = self.parse_action()?;
                self.expect(&Token::Semicolon, "';' after action")?;
                Ok(Statement::Action(action))
            },
            Token::Loop => self.parse_loop(),
            Token::If => self.parse_if(),
            Token::While => self.parse_while(),
            Token::Variable(_) => {
                let assignment = self.parse_assignment()?;
                self.expect(&Token::Semicolon, "';' after assignment")?;
                Ok(Statement::Assignment(assignment))
            },
            tok => Err(ParseError::InvalidStatement { found: tok.to_string(),
                                                      line:  self.peek_line(),
                                                      near:  self.near(), }),
        }
    }

    /// Parses an action.
    ///
    /// `move` and `wait` take an optional parenthesised repeat count.
    ///
    /// Grammar:
    /// ```text
    ///     action := "move" ["(" expression ")"] | "turnL" | "turnR"
    ///             | "turnAround" | "shieldOn" | "shieldOff" | "takeFuel"
    ///             | "wait" ["(" expression ")"]
    /// ```
    pub fn parse_action(&mut self) -> ParseResult<Action> {
        let Some(tok) = self.peek().filter(|tok| tok.is_action()) else {
            return Err(self.unexpected("an action"));
        };
        self.advance();

        Ok(match tok {
            Token::Move => Action::Move(self.parse_optional_argument()?),
            Token::Wait => Action::Wait(self.parse_optional_argument()?),
            Token::TurnL => Action::TurnLeft,
            Token::TurnR => Action::TurnRight,
            Token::TurnAround => Action::TurnAround,
            Token::ShieldOn => Action::ShieldOn,
            Token::ShieldOff => Action::ShieldOff,
            Token::TakeFuel => Action::TakeFuel,
            _ => unreachable!(),
        })
    }

    /// Parses an assignment and records it in the binding table.
    ///
    /// The right-hand side is parsed before the name is rebound, so
    /// `$x = add($x, 1)` refers to the previous value of `$x`.
    ///
    /// Grammar: `assignment := variable "=" expression`
    pub fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let line = self.peek_line();
        let name = match self.peek() {
            Some(Token::Variable(name)) => {
                self.advance();
                name.clone()
            },
            _ => return Err(self.unexpected("a variable name")),
        };

        self.expect(&Token::Assign, "'=' after variable name")?;
        let base = self.depth;
        self.reach = base;
        let value = Rc::new(self.parse_expression()?);
        self.bindings.bind(&name, Rc::clone(&value), self.reach - base);

        Ok(Assignment { name, value, line })
    }

    /// Parses an optional `"(" expression ")"` suffix.
    pub(in crate::interpreter::parser) fn parse_optional_argument(&mut self)
                                                                  -> ParseResult<Option<Expr>> {
        if !self.eat(&Token::LParen) {
            return Ok(None);
        }
        let argument = self.parse_expression()?;
        self.expect(&Token::RParen, "')' after argument")?;
        Ok(Some(argument))
    }
}
