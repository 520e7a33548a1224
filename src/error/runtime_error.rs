use thiserror::Error;

/// A failure reported by the robot while performing an action or answering a
/// sensor query.
///
/// These originate outside the interpreter; the evaluator only forwards them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    /// A barrel sensor was asked about a barrel that does not exist.
    #[error("Barrel index {index} is out of range.")]
    InvalidBarrelIndex {
        /// The requested barrel index.
        index: i64,
    },
    /// The robot stopped accepting commands, e.g. it ran out of fuel or the
    /// game ended.
    #[error("Robot halted: {reason}.")]
    Halted {
        /// Why the robot halted.
        reason: String,
    },
    /// Any other failure of the simulation.
    #[error("{0}")]
    Other(String),
}

/// Represents all errors that can occur while executing a program.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Integer division by zero in a `div` expression.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line of the `div` expression.
        line: usize,
    },
    /// Arithmetic overflowed the 64-bit integer range.
    #[error("Error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line of the arithmetic expression.
        line: usize,
    },
    /// A variable was read before any assignment to it had executed. Only
    /// raised with runtime variable resolution.
    #[error("Error on line {line}: Variable {name} has no value yet.")]
    UnboundVariable {
        /// The name of the variable, including the leading `$`.
        name: String,
        /// The source line of the variable reference.
        line: usize,
    },
    /// The configured step budget ran out.
    #[error("Error: Step limit of {limit} exceeded.")]
    StepLimitExceeded {
        /// The configured budget.
        limit: u64,
    },
    /// The robot refused an action or a sensor query.
    #[error("Error: {0}")]
    Capability(#[from] CapabilityError),
}
