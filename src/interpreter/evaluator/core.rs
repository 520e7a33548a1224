use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{ast::Program, error::RuntimeError, interpreter::robot::Robot};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How variable references obtain their value.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VariableResolution {
    /// A reference evaluates the expression it was bound to when it was
    /// parsed. Executing an assignment has no effect, and a reassignment only
    /// affects references parsed after it.
    #[default]
    ParseTime,
    /// Executing an assignment evaluates its expression and stores the
    /// integer; a reference reads the value stored by the most recently
    /// executed assignment to that name.
    Runtime,
}

/// Execution settings.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// How variable references are resolved.
    pub resolution: VariableResolution,
    /// Maximum number of steps before execution is aborted. A step is one
    /// robot action or one iteration of a `loop` or `while`. `None` means
    /// unlimited.
    pub step_limit: Option<u64>,
}

/// Stores the runtime evaluation state.
///
/// A `Context` holds the execution options, the number of steps taken so far
/// and, with [`VariableResolution::Runtime`], the current value of every
/// assigned variable. The robot is passed separately to every call.
///
/// ## Usage
///
/// Create one context per program run; the step counter is not reset between
/// runs.
pub struct Context {
    /// Settings the context was created with.
    pub options:   Options,
    steps:         u64,
    /// Values stored by executed assignments, keyed by variable name. Only
    /// filled with [`VariableResolution::Runtime`]; empty otherwise.
    pub variables: HashMap<String, i64>,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a context with default options: parse-time variable
    /// resolution and no step limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Creates a context with the given options.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self { options,
               steps: 0,
               variables: HashMap::new() }
    }

    /// Number of steps consumed so far.
    #[must_use]
    pub const fn steps_taken(&self) -> u64 {
        self.steps
    }

    /// Executes every statement of `program` in order.
    ///
    /// This is the main entry point for execution. It returns once the last
    /// statement has finished; a program containing a `loop` only returns
    /// through an error, e.g. a robot failure or an exhausted step budget.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; execution stops there.
    pub fn execute_program(&mut self, program: &Program, robot: &mut dyn Robot) -> EvalResult<()> {
        debug!(statements = program.statements.len(),
               resolution = ?self.options.resolution,
               step_limit = ?self.options.step_limit,
               "executing program");

        for statement in &program.statements {
            self.exec_statement(statement, robot)?;
        }

        debug!(steps = self.steps, "program finished");
        Ok(())
    }

    /// Charges one step against the step budget.
    ///
    /// # Errors
    /// Returns [`RuntimeError::StepLimitExceeded`] once the budget is spent.
    pub fn consume_step(&mut self) -> EvalResult<()> {
        self.steps += 1;
        if let Some(limit) = self.options.step_limit
           && self.steps > limit
        {
            warn!(limit, "step limit exceeded, aborting program");
            return Err(RuntimeError::StepLimitExceeded { limit });
        }
        Ok(())
    }
}
