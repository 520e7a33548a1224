use std::{fmt, rc::Rc};

/// A whole robot program: the root of the tree.
///
/// A program always holds at least one statement; the parser rejects empty
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A non-empty sequence of statements between `{` and `}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// Represents a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A robot action terminated by `;`.
    Action(Action),
    /// `loop { ... }`, repeating its body forever.
    Loop(Block),
    /// An `if` with its `elif` / `else` chain.
    If(If),
    /// `while (cond) { ... }`.
    While(While),
    /// `$name = expr;`.
    Assignment(Assignment),
}

/// A single robot command.
///
/// `Move` and `Wait` optionally carry a repeat count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `move` or `move(n)`.
    Move(Option<Expr>),
    /// `turnL`
    TurnLeft,
    /// `turnR`
    TurnRight,
    /// `turnAround`
    TurnAround,
    /// `shieldOn`
    ShieldOn,
    /// `shieldOff`
    ShieldOff,
    /// `takeFuel`
    TakeFuel,
    /// `wait` or `wait(n)`.
    Wait(Option<Expr>),
}

/// Conditional statement.
///
/// An `elif` chain is represented as a right-leaning list: every `elif` is a
/// nested [`If`] stored as the alternative of the previous one, and a trailing
/// `else` belongs to the innermost link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    /// The condition guarding `then_block`.
    pub condition:   Condition,
    /// Executed when `condition` holds.
    pub then_block:  Block,
    /// What to do when `condition` does not hold.
    pub alternative: Option<Alternative>,
}

/// The remainder of an `if` chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// `elif (cond) { ... }` followed by the rest of the chain.
    Elif(Box<If>),
    /// `else { ... }`
    Else(Block),
}

/// `while (cond) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    /// Checked before every iteration.
    pub condition: Condition,
    /// The loop body.
    pub body:      Block,
}

/// Binds a variable name to an expression.
///
/// The expression is shared: every variable reference parsed while this
/// assignment is the latest one for `name` points at the same node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The variable name, including the leading `$`.
    pub name:  String,
    /// The assigned expression.
    pub value: Rc<Expr>,
    /// Line number in the source code.
    pub line:  usize,
}

/// A boolean-valued test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `lt`, `gt` or `eq` applied to two expressions.
    Compare {
        /// The comparison to perform.
        op:    Relation,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// `and(c1, c2)`
    And(Box<Self>, Box<Self>),
    /// `or(c1, c2)`
    Or(Box<Self>, Box<Self>),
    /// `not(c)`
    Not(Box<Self>),
}

/// A relational operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Relation {
    /// `lt`
    LessThan,
    /// `gt`
    GreaterThan,
    /// `eq`
    EqualTo,
}

/// An integer-valued expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number(i64),
    /// A sensor reading.
    Sensor(Sensor),
    /// `add`, `sub`, `mul` or `div` applied to two expressions.
    Arithmetic {
        /// The operator.
        op:    ArithOp,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A reference to a variable.
    Variable {
        /// The variable name, including the leading `$`.
        name:  String,
        /// The expression of the latest assignment to `name` at the point the
        /// reference was parsed.
        bound: Rc<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// A query about the state of the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sensor {
    /// `fuelLeft`
    FuelLeft,
    /// `oppLR`
    OppLR,
    /// `oppFB`
    OppFB,
    /// `numBarrels`
    NumBarrels,
    /// `wallDist`
    WallDist,
    /// `barrelLR`, or `barrelLR(n)` for the n-th barrel.
    BarrelLR(Option<Box<Expr>>),
    /// `barrelFB`, or `barrelFB(n)` for the n-th barrel.
    BarrelFB(Option<Box<Expr>>),
}

/// Represents an arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArithOp {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `mul`
    Mul,
    /// `div`, integer division truncating toward zero.
    Div,
}

const INDENT: &str = "    ";

impl fmt::Display for Program {
    /// Renders the program as canonical source text, one statement per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write_statement(f, statement, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let pad = INDENT.repeat(depth);
    match statement {
        Statement::Action(action) => writeln!(f, "{pad}{action};"),
        Statement::Assignment(assignment) => writeln!(f, "{pad}{assignment};"),
        Statement::Loop(body) => {
            write!(f, "{pad}loop ")?;
            write_block(f, body, depth)?;
            writeln!(f)
        },
        Statement::While(While { condition, body }) => {
            write!(f, "{pad}while ({condition}) ")?;
            write_block(f, body, depth)?;
            writeln!(f)
        },
        Statement::If(branch) => {
            write!(f, "{pad}if ")?;
            write_if_chain(f, branch, depth)?;
            writeln!(f)
        },
    }
}

fn write_if_chain(f: &mut fmt::Formatter<'_>, branch: &If, depth: usize) -> fmt::Result {
    write!(f, "({}) ", branch.condition)?;
    write_block(f, &branch.then_block, depth)?;
    match &branch.alternative {
        Some(Alternative::Elif(next)) => {
            write!(f, " elif ")?;
            write_if_chain(f, next, depth)
        },
        Some(Alternative::Else(block)) => {
            write!(f, " else ")?;
            write_block(f, block, depth)
        },
        None => Ok(()),
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    writeln!(f, "{{")?;
    for statement in &block.statements {
        write_statement(f, statement, depth + 1)?;
    }
    write!(f, "{}}}", INDENT.repeat(depth))
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move(None) => f.write_str("move"),
            Self::Move(Some(count)) => write!(f, "move({count})"),
            Self::TurnLeft => f.write_str("turnL"),
            Self::TurnRight => f.write_str("turnR"),
            Self::TurnAround => f.write_str("turnAround"),
            Self::ShieldOn => f.write_str("shieldOn"),
            Self::ShieldOff => f.write_str("shieldOff"),
            Self::TakeFuel => f.write_str("takeFuel"),
            Self::Wait(None) => f.write_str("wait"),
            Self::Wait(Some(count)) => write!(f, "wait({count})"),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { op, left, right } => write!(f, "{op}({left}, {right})"),
            Self::And(left, right) => write!(f, "and({left}, {right})"),
            Self::Or(left, right) => write!(f, "or({left}, {right})"),
            Self::Not(inner) => write!(f, "not({inner})"),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::LessThan => "lt",
            Self::GreaterThan => "gt",
            Self::EqualTo => "eq",
        };
        f.write_str(keyword)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Sensor(sensor) => write!(f, "{sensor}"),
            Self::Arithmetic { op, left, right, .. } => write!(f, "{op}({left}, {right})"),
            Self::Variable { name, .. } => f.write_str(name),
        }
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FuelLeft => f.write_str("fuelLeft"),
            Self::OppLR => f.write_str("oppLR"),
            Self::OppFB => f.write_str("oppFB"),
            Self::NumBarrels => f.write_str("numBarrels"),
            Self::WallDist => f.write_str("wallDist"),
            Self::BarrelLR(None) => f.write_str("barrelLR"),
            Self::BarrelLR(Some(index)) => write!(f, "barrelLR({index})"),
            Self::BarrelFB(None) => f.write_str("barrelFB"),
            Self::BarrelFB(Some(index)) => write!(f, "barrelFB({index})"),
        }
    }
}

impl fmt::Display for ArithOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        };
        f.write_str(keyword)
    }
}
