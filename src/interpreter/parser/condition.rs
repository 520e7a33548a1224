use crate::{
    ast::{Condition, Relation},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a condition.
    ///
    /// Grammar:
    /// ```text
    ///     condition := ("lt" | "gt" | "eq") "(" expression "," expression ")"
    ///                | ("and" | "or") "(" condition "," condition ")"
    ///                | "not" "(" condition ")"
    /// ```
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the next token does not start a condition
    /// or a delimiter is missing.
    pub fn parse_condition(&mut self) -> ParseResult<Condition> {
        self.nested(Self::parse_condition_node)
    }

    fn parse_condition_node(&mut self) -> ParseResult<Condition> {
        let op = match self.peek() {
            Some(Token::Lt) => Relation::LessThan,
            Some(Token::Gt) => Relation::GreaterThan,
            Some(Token::Eq) => Relation::EqualTo,
            Some(Token::And) => {
                self.advance();
                let (left, right) = self.parse_condition_pair()?;
                return Ok(Condition::And(Box::new(left), Box::new(right)));
            },
            Some(Token::Or) => {
                self.advance();
                let (left, right) = self.parse_condition_pair()?;
                return Ok(Condition::Or(Box::new(left), Box::new(right)));
            },
            Some(Token::Not) => {
                self.advance();
                self.expect(&Token::LParen, "'(' after 'not'")?;
                let inner = self.parse_condition()?;
                self.expect(&Token::RParen, "')' after condition")?;
                return Ok(Condition::Not(Box::new(inner)));
            },
            _ => return Err(self.unexpected("a condition")),
        };
        self.advance();

        let (left, right) = self.parse_expression_pair()?;
        Ok(Condition::Compare { op,
                                left: Box::new(left),
                                right: Box::new(right) })
    }

    /// Parses a parenthesised condition as used by `if`, `elif` and `while`.
    ///
    /// Grammar: `guard := "(" condition ")"`
    pub(in crate::interpreter::parser) fn parse_guard(&mut self) -> ParseResult<Condition> {
        self.expect(&Token::LParen, "'(' before condition")?;
        let condition = self.parse_condition()?;
        self.expect(&Token::RParen, "')' after condition")?;
        Ok(condition)
    }

    /// Parses `"(" condition "," condition ")"`.
    fn parse_condition_pair(&mut self) -> ParseResult<(Condition, Condition)> {
        self.expect(&Token::LParen, "'(' before conditions")?;
        let left = self.parse_condition()?;
        self.expect(&Token::Comma, "',' between conditions")?;
        let right = self.parse_condition()?;
        self.expect(&Token::RParen, "')' after conditions")?;
        Ok((left, right))
    }
}
