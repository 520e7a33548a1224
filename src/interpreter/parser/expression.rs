use std::rc::Rc;

use crate::{
    ast::{ArithOp, Expr, Sensor},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, Parser},
            utils::MAX_NESTING,
        },
    },
    util::num::looks_numeric,
};

impl Parser<'_> {
    /// Parses an expression.
    ///
    /// Variable references are resolved here, against the assignments parsed
    /// so far. The resulting [`Expr::Variable`] shares the expression node of
    /// the latest assignment to that name; assignments parsed later do not
    /// affect it.
    ///
    /// Grammar:
    /// ```text
    ///     expression := number | sensor | operation | variable
    /// ```
    ///
    /// # Errors
    /// - [`ParseError::UndeclaredVariable`] for a variable never assigned
    ///   before this point.
    /// - [`ParseError::MalformedNumber`] for numbers with leading zeros or
    ///   `-0`.
    /// - `UnexpectedToken` if the next token cannot start an expression.
    /// - [`ParseError::NestingTooDeep`] if the expression nests too deeply.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_expression_node)
    }

    fn parse_expression_node(&mut self) -> ParseResult<Expr> {
        let Some(tok) = self.peek() else {
            return Err(self.unexpected("an expression"));
        };

        match tok {
            Token::Number(value) => {
                self.advance();
                Ok(Expr::Number(*value))
            },
            tok if tok.is_sensor() => self.parse_sensor(),
            Token::Add | Token::Sub | Token::Mul | Token::Div => self.parse_operation(),
            Token::Variable(name) => self.parse_variable_reference(name),
            Token::Word(text) if looks_numeric(text) => {
                Err(ParseError::MalformedNumber { literal: text.clone(),
                                                  line:    self.peek_line(),
                                                  near:    self.near(), })
            },
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parses a sensor reading.
    ///
    /// Grammar:
    /// ```text
    ///     sensor := "fuelLeft" | "oppLR" | "oppFB" | "numBarrels" | "wallDist"
    ///             | "barrelLR" ["(" expression ")"]
    ///             | "barrelFB" ["(" expression ")"]
    /// ```
    pub fn parse_sensor(&mut self) -> ParseResult<Expr> {
        let Some(tok) = self.peek().filter(|tok| tok.is_sensor()) else {
            return Err(self.unexpected("a sensor"));
        };
        self.advance();

        let sensor = match tok {
            Token::FuelLeft => Sensor::FuelLeft,
            Token::OppLR => Sensor::OppLR,
            Token::OppFB => Sensor::OppFB,
            Token::NumBarrels => Sensor::NumBarrels,
            Token::WallDist => Sensor::WallDist,
            Token::BarrelLR => Sensor::BarrelLR(self.parse_optional_argument()?.map(Box::new)),
            Token::BarrelFB => Sensor::BarrelFB(self.parse_optional_argument()?.map(Box::new)),
            _ => unreachable!(),
        };

        Ok(Expr::Sensor(sensor))
    }

    /// Parses an arithmetic operation.
    ///
    /// Grammar:
    /// ```text
    ///     operation := ("add" | "sub" | "mul" | "div") "(" expression "," expression ")"
    /// ```
    pub fn parse_operation(&mut self) -> ParseResult<Expr> {
        let line = self.peek_line();
        let op = match self.peek() {
            Some(Token::Add) => ArithOp::Add,
            Some(Token::Sub) => ArithOp::Sub,
            Some(Token::Mul) => ArithOp::Mul,
            Some(Token::Div) => ArithOp::Div,
            _ => return Err(self.unexpected("an arithmetic operator")),
        };
        self.advance();

        let (left, right) = self.parse_expression_pair()?;
        Ok(Expr::Arithmetic { op,
                              left: Box::new(left),
                              right: Box::new(right),
                              line })
    }

    /// Parses `"(" expression "," expression ")"`.
    pub(in crate::interpreter::parser) fn parse_expression_pair(&mut self)
                                                                -> ParseResult<(Expr, Expr)> {
        self.expect(&Token::LParen, "'(' before operands")?;
        let left = self.parse_expression()?;
        self.expect(&Token::Comma, "',' between operands")?;
        let right = self.parse_expression()?;
        self.expect(&Token::RParen, "')' after operands")?;
        Ok((left, right))
    }

    /// Resolves the variable `name` at the current token against the binding
    /// table.
    ///
    /// The bound expression counts as nested below the reference, so a long
    /// chain of self-referencing assignments is rejected once it gets too
    /// deep.
    fn parse_variable_reference(&mut self, name: &str) -> ParseResult<Expr> {
        let line = self.peek_line();
        let Some(binding) = self.bindings.resolve(name) else {
            return Err(ParseError::UndeclaredVariable { name: name.to_string(),
                                                        line,
                                                        near: self.near() });
        };
        let (bound, depth) = (Rc::clone(&binding.value), self.depth + binding.depth);

        if depth > MAX_NESTING {
            return Err(self.too_deep());
        }
        self.reach = self.reach.max(depth);
        self.advance();

        Ok(Expr::Variable { name: name.to_string(),
                            bound,
                            line })
    }
}
