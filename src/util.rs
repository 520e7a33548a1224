/// Numeric helpers.
///
/// Small conversions and checks on integers and integer-shaped text that are
/// shared by the lexer, the parser and the evaluator.
pub mod num;
