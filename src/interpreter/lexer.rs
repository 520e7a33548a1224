use std::fmt;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::parser::core::ParseResult,
    util::num::looks_numeric,
};

/// Represents a lexical token in the source input.
///
/// Tokens are separated by whitespace, except that the punctuation characters
/// `{ } ( ) , ;` always form a token of their own, even when glued to their
/// neighbours. Anything else that is not a keyword, a number or a variable
/// name ends up as a [`Token::Word`] and is rejected by the parser wherever it
/// appears.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens without leading zeros, such as `42` or `-7`.
    #[regex(r"-?[1-9][0-9]*|0", parse_integer, priority = 3)]
    Number(i64),
    /// Variable names such as `$speed`.
    #[regex(r"\$[A-Za-z][A-Za-z0-9]*", |lex| lex.slice().to_string(), priority = 3)]
    Variable(String),

    /// `move`
    #[token("move")]
    Move,
    /// `turnL`
    #[token("turnL")]
    TurnL,
    /// `turnR`
    #[token("turnR")]
    TurnR,
    /// `turnAround`
    #[token("turnAround")]
    TurnAround,
    /// `shieldOn`
    #[token("shieldOn")]
    ShieldOn,
    /// `shieldOff`
    #[token("shieldOff")]
    ShieldOff,
    /// `takeFuel`
    #[token("takeFuel")]
    TakeFuel,
    /// `wait`
    #[token("wait")]
    Wait,

    /// `loop`
    #[token("loop")]
    Loop,
    /// `if`
    #[token("if")]
    If,
    /// `elif`
    #[token("elif")]
    Elif,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,

    /// `fuelLeft`
    #[token("fuelLeft")]
    FuelLeft,
    /// `oppLR`
    #[token("oppLR")]
    OppLR,
    /// `oppFB`
    #[token("oppFB")]
    OppFB,
    /// `numBarrels`
    #[token("numBarrels")]
    NumBarrels,
    /// `barrelLR`
    #[token("barrelLR")]
    BarrelLR,
    /// `barrelFB`
    #[token("barrelFB")]
    BarrelFB,
    /// `wallDist`
    #[token("wallDist")]
    WallDist,

    /// `add`
    #[token("add")]
    Add,
    /// `sub`
    #[token("sub")]
    Sub,
    /// `mul`
    #[token("mul")]
    Mul,
    /// `div`
    #[token("div")]
    Div,

    /// `lt`
    #[token("lt")]
    Lt,
    /// `gt`
    #[token("gt")]
    Gt,
    /// `eq`
    #[token("eq")]
    Eq,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,

    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=", priority = 3)]
    Assign,

    /// Any other run of non-whitespace, non-punctuation characters.
    #[regex(r"[^ \t\r\n\f\x0B{}(),;]+", |lex| lex.slice().to_string(), allow_greedy = true)]
    Word(String),

    /// Line breaks only advance the line counter. Never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds. Never emitted.
    #[regex(r"[ \t\r\f\x0B]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the keywords that start an action statement.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        matches!(self,
                 Self::Move
                 | Self::TurnL
                 | Self::TurnR
                 | Self::TurnAround
                 | Self::ShieldOn
                 | Self::ShieldOff
                 | Self::TakeFuel
                 | Self::Wait)
    }

    /// Returns `true` for the sensor keywords usable inside expressions.
    #[must_use]
    pub const fn is_sensor(&self) -> bool {
        matches!(self,
                 Self::FuelLeft
                 | Self::OppLR
                 | Self::OppFB
                 | Self::NumBarrels
                 | Self::BarrelLR
                 | Self::BarrelFB
                 | Self::WallDist)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Variable(name) | Self::Word(name) => return f.write_str(name),
            Self::Move => "move",
            Self::TurnL => "turnL",
            Self::TurnR => "turnR",
            Self::TurnAround => "turnAround",
            Self::ShieldOn => "shieldOn",
            Self::ShieldOff => "shieldOff",
            Self::TakeFuel => "takeFuel",
            Self::Wait => "wait",
            Self::Loop => "loop",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::While => "while",
            Self::FuelLeft => "fuelLeft",
            Self::OppLR => "oppLR",
            Self::OppFB => "oppFB",
            Self::NumBarrels => "numBarrels",
            Self::BarrelLR => "barrelLR",
            Self::BarrelFB => "barrelFB",
            Self::WallDist => "wallDist",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Eq => "eq",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Assign => "=",
            Self::NewLine | Self::Ignored => unreachable!(),
        };
        f.write_str(text)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the literal does not fit in an `i64`, which makes the
/// lexer report an error for the slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Splits source text into `(Token, line)` pairs.
///
/// Empty or whitespace-only input yields an empty vector; rejecting an empty
/// program is left to the parser.
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] for a number literal outside the
/// `i64` range.
///
/// # Example
/// ```
/// use robotscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("move(3);").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(tok, _)| tok).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Move, Token::LParen, Token::Number(3), Token::RParen, Token::Semicolon]);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                if looks_numeric(slice) {
                    return Err(ParseError::LiteralTooLarge { literal: slice.to_string(),
                                                             line:    lexer.extras.line, });
                }
                return Err(ParseError::UnexpectedCharacter { text: slice.to_string(),
                                                             line: lexer.extras.line, });
            },
        }
    }

    Ok(tokens)
}
