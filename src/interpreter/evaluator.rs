/// Core evaluation logic.
///
/// Defines the evaluation [`core::Context`], its [`core::Options`] and the
/// step budget shared by all other evaluator modules.
pub mod core;

/// Statement execution.
///
/// Runs blocks, loops, conditionals and assignments.
pub mod statement;

/// Action execution.
///
/// Maps each action to its robot capability, repeating `move` and `wait` as
/// often as their argument says.
pub mod action;

/// Condition evaluation.
pub mod condition;

/// Expression evaluation.
///
/// Evaluates literals, sensors, arithmetic and variable references to
/// integers.
pub mod expression;
