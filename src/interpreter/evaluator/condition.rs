use crate::{
    ast::{Condition, Relation},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        robot::Robot,
    },
};

impl Context {
    /// Evaluates a condition to a boolean.
    ///
    /// Comparisons evaluate both operands, left first. `and` and `or`
    /// short-circuit: the right condition is not evaluated once the left one
    /// decides the outcome, so none of its sensors are read and none of its
    /// arithmetic can fail.
    pub fn eval_condition(&mut self,
                          condition: &Condition,
                          robot: &mut dyn Robot)
                          -> EvalResult<bool> {
        match condition {
            Condition::Compare { op, left, right } => {
                let left = self.eval_expr(left, robot)?;
                let right = self.eval_expr(right, robot)?;
                Ok(match op {
                       Relation::LessThan => left < right,
                       Relation::GreaterThan => left > right,
                       Relation::EqualTo => left == right,
                   })
            },
            Condition::And(left, right) => {
                Ok(self.eval_condition(left, robot)? && self.eval_condition(right, robot)?)
            },
            Condition::Or(left, right) => {
                Ok(self.eval_condition(left, robot)? || self.eval_condition(right, robot)?)
            },
            Condition::Not(inner) => Ok(!self.eval_condition(inner, robot)?),
        }
    }
}
