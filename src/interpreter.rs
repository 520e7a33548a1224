/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST against a [`robot::Robot`], performing actions,
/// reading sensors and computing integer and boolean results. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements, loops and `if` chains in program order.
/// - Evaluates conditions with short-circuiting `and` / `or`.
/// - Reports runtime errors such as division by zero or an exhausted step
///   budget.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens,
/// splitting on whitespace and around the punctuation characters
/// `{ } ( ) , ;`. Each token carries its source line.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a predictive recursive-descent parser with one procedure per
/// grammar production. It resolves variable references against its own
/// binding table while parsing.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with line and token context.
/// - Rejects variables used before they are assigned.
pub mod parser;
/// The capability interface between programs and the simulation.
///
/// Defines the [`robot::Robot`] trait that the world implements and the
/// evaluator drives.
pub mod robot;
