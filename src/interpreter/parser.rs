/// Binding table for variables.
///
/// Maps each variable name to the expression of the latest assignment parsed
/// so far, so that references can be resolved while parsing.
pub(crate) mod bindings;
/// Block-structured statements.
///
/// Parses `{ ... }` blocks and the statements that own one: `loop`, `while`
/// and `if` with its `elif` / `else` chain.
pub mod block;
/// Conditions.
///
/// Parses the relational tests `lt`, `gt`, `eq` and the combinators `and`,
/// `or`, `not`.
pub mod condition;
/// Core parsing logic and entry points.
///
/// Defines the [`core::Parser`] itself, the shared [`core::ParseResult`] type
/// and the top-level [`core::parse_program`] function.
pub mod core;
/// Expressions.
///
/// Parses number literals, sensors, arithmetic operators and variable
/// references.
pub mod expression;
/// Simple statements.
///
/// Dispatches on the first token of a statement and parses actions and
/// assignments.
pub mod statement;
/// Shared parser utilities.
///
/// Token lookahead, delimiter checks and construction of located errors.
pub mod utils;
