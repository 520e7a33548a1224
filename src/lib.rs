//! # robotscript
//!
//! robotscript is the front end and evaluator for a small imperative language
//! that scripts a robot in a turn-based simulation. Programs are tokenized,
//! parsed into an abstract syntax tree and then executed against a
//! [`Robot`](interpreter::robot::Robot) provided by the simulation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed programs.
///
/// This module declares the node types of the syntax tree: programs, blocks,
/// statements, actions, conditions and expressions. The tree is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Models every construct of the language as a closed enum or struct.
/// - Renders any tree back to canonical source text via `Display`.
pub mod ast;
/// Provides error types for parsing and execution.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, evaluator,
///   robot).
/// - Attaches line numbers and the surrounding tokens for context.
pub mod error;
/// Orchestrates tokenizing, parsing and execution.
///
/// This module ties together the lexer, the parser, the evaluator and the
/// robot capability interface.
pub mod interpreter;
/// General numeric helpers.
pub mod util;

pub use crate::interpreter::{
    evaluator::core::{Context, Options, VariableResolution},
    parser::core::parse_program,
    robot::{Robot, RobotResult},
};
use crate::{ast::Program, error::Error};

/// Executes an already parsed program with the given options.
///
/// A fresh [`Context`] is used, so nothing carries over from earlier runs.
///
/// # Errors
/// Returns the [`error::RuntimeError`] that aborted execution.
pub fn execute(program: &Program,
               robot: &mut dyn Robot,
               options: Options)
               -> Result<(), error::RuntimeError> {
    Context::with_options(options).execute_program(program, robot)
}

/// Parses and executes `source` in one go.
///
/// Parsing completes before anything is executed, so a program with a syntax
/// error never moves the robot.
///
/// # Errors
/// Returns [`Error::Parse`] if the source is rejected, or [`Error::Runtime`]
/// if execution is aborted.
///
/// # Examples
/// ```
/// use robotscript::{Options, error::Error, run};
/// # use robotscript::{Robot, RobotResult};
/// # #[derive(Default)]
/// # struct Idle { waits: usize }
/// # impl Robot for Idle {
/// #     fn move_forward(&mut self) -> RobotResult<()> { Ok(()) }
/// #     fn turn_left(&mut self) -> RobotResult<()> { Ok(()) }
/// #     fn turn_right(&mut self) -> RobotResult<()> { Ok(()) }
/// #     fn turn_around(&mut self) -> RobotResult<()> { Ok(()) }
/// #     fn take_fuel(&mut self) -> RobotResult<()> { Ok(()) }
/// #     fn idle_wait(&mut self) -> RobotResult<()> { self.waits += 1; Ok(()) }
/// #     fn set_shield(&mut self, _on: bool) -> RobotResult<()> { Ok(()) }
/// #     fn fuel(&mut self) -> RobotResult<i64> { Ok(10) }
/// #     fn opponent_lr(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn opponent_fb(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn barrel_count(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn wall_distance(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn closest_barrel_lr(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn closest_barrel_fb(&mut self) -> RobotResult<i64> { Ok(0) }
/// #     fn barrel_lr(&mut self, _index: i64) -> RobotResult<i64> { Ok(0) }
/// #     fn barrel_fb(&mut self, _index: i64) -> RobotResult<i64> { Ok(0) }
/// # }
/// let mut robot = Idle::default();
///
/// // Waits while there is fuel left.
/// let source = "if (gt(fuelLeft, 5)) { wait(2); } else { wait; }";
/// assert!(run(source, &mut robot, Options::default()).is_ok());
/// assert_eq!(robot.waits, 2);
///
/// // Division by zero aborts execution.
/// let res = run("wait(div(5, 0));", &mut robot, Options::default());
/// assert!(matches!(res, Err(Error::Runtime(_))));
/// ```
pub fn run(source: &str, robot: &mut dyn Robot, options: Options) -> Result<(), Error> {
    let program = parse_program(source)?;
    execute(&program, robot, options)?;
    Ok(())
}
