use crate::{
    ast::{ArithOp, Expr, Sensor},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, VariableResolution},
        robot::Robot,
    },
};

impl Context {
    /// Evaluates an expression to an integer.
    ///
    /// The evaluator dispatches on the expression variant: literals yield
    /// themselves, sensors query the robot, arithmetic evaluates both operands
    /// left to right, and variables are resolved according to
    /// [`VariableResolution`].
    pub fn eval_expr(&mut self, expr: &Expr, robot: &mut dyn Robot) -> EvalResult<i64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Sensor(sensor) => self.eval_sensor(sensor, robot),
            Expr::Arithmetic { op,
                               left,
                               right,
                               line, } => {
                let left = self.eval_expr(left, robot)?;
                let right = self.eval_expr(right, robot)?;
                Self::eval_arithmetic(*op, left, right, *line)
            },
            Expr::Variable { name, bound, line } => match self.options.resolution {
                VariableResolution::ParseTime => self.eval_expr(bound, robot),
                VariableResolution::Runtime => {
                    self.variables
                        .get(name)
                        .copied()
                        .ok_or_else(|| RuntimeError::UnboundVariable { name: name.clone(),
                                                                       line: *line, })
                },
            },
        }
    }

    /// Reads a sensor.
    ///
    /// `barrelLR` and `barrelFB` without an argument refer to the closest
    /// barrel; with an argument, the index is evaluated first and passed to
    /// the robot as is.
    pub fn eval_sensor(&mut self, sensor: &Sensor, robot: &mut dyn Robot) -> EvalResult<i64> {
        let value = match sensor {
            Sensor::FuelLeft => robot.fuel()?,
            Sensor::OppLR => robot.opponent_lr()?,
            Sensor::OppFB => robot.opponent_fb()?,
            Sensor::NumBarrels => robot.barrel_count()?,
            Sensor::WallDist => robot.wall_distance()?,
            Sensor::BarrelLR(None) => robot.closest_barrel_lr()?,
            Sensor::BarrelFB(None) => robot.closest_barrel_fb()?,
            Sensor::BarrelLR(Some(index)) => {
                let index = self.eval_expr(index, robot)?;
                robot.barrel_lr(index)?
            },
            Sensor::BarrelFB(Some(index)) => {
                let index = self.eval_expr(index, robot)?;
                robot.barrel_fb(index)?
            },
        };
        Ok(value)
    }

    /// Applies an arithmetic operator to two integers.
    ///
    /// Division truncates toward zero. Overflow is reported instead of
    /// wrapping.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] if `op` is `Div` and `right` is 0.
    /// - [`RuntimeError::Overflow`] if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use robotscript::{ast::ArithOp, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_arithmetic(ArithOp::Div, -7, 2, 1), Ok(-3));
    /// assert_eq!(Context::eval_arithmetic(ArithOp::Div, 5, 0, 3),
    ///            Err(RuntimeError::DivisionByZero { line: 3 }));
    /// ```
    pub fn eval_arithmetic(op: ArithOp, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        let result = match op {
            ArithOp::Add => left.checked_add(right),
            ArithOp::Sub => left.checked_sub(right),
            ArithOp::Mul => left.checked_mul(right),
            ArithOp::Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                left.checked_div(right)
            },
        };
        result.ok_or(RuntimeError::Overflow { line })
    }
}
