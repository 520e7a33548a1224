use tracing::trace;

use crate::{
    ast::{Action, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        robot::{Robot, RobotResult},
    },
    util::num::repeat_count,
};

impl Context {
    /// Executes an action.
    ///
    /// Every action maps to exactly one robot capability. `move(n)` and
    /// `wait(n)` evaluate `n` once and then invoke the capability `n` times;
    /// a count of zero or less does nothing. Every single invocation costs one
    /// step.
    ///
    /// # Example
    /// ```
    /// use robotscript::{
    ///     ast::{Action, Expr},
    ///     error::CapabilityError,
    ///     interpreter::{evaluator::core::Context, robot::{Robot, RobotResult}},
    /// };
    ///
    /// #[derive(Default)]
    /// struct Counter { moves: usize }
    ///
    /// impl Robot for Counter {
    ///     fn move_forward(&mut self) -> RobotResult<()> { self.moves += 1; Ok(()) }
    ///     fn turn_left(&mut self) -> RobotResult<()> { Ok(()) }
    ///     fn turn_right(&mut self) -> RobotResult<()> { Ok(()) }
    ///     fn turn_around(&mut self) -> RobotResult<()> { Ok(()) }
    ///     fn take_fuel(&mut self) -> RobotResult<()> { Ok(()) }
    ///     fn idle_wait(&mut self) -> RobotResult<()> { Ok(()) }
    ///     fn set_shield(&mut self, _on: bool) -> RobotResult<()> { Ok(()) }
    ///     fn fuel(&mut self) -> RobotResult<i64> { Ok(100) }
    ///     fn opponent_lr(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn opponent_fb(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn barrel_count(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn wall_distance(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn closest_barrel_lr(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn closest_barrel_fb(&mut self) -> RobotResult<i64> { Ok(0) }
    ///     fn barrel_lr(&mut self, index: i64) -> RobotResult<i64> {
    ///         Err(CapabilityError::InvalidBarrelIndex { index })
    ///     }
    ///     fn barrel_fb(&mut self, index: i64) -> RobotResult<i64> {
    ///         Err(CapabilityError::InvalidBarrelIndex { index })
    ///     }
    /// }
    ///
    /// let mut robot = Counter::default();
    /// let mut context = Context::new();
    ///
    /// context.exec_action(&Action::Move(Some(Expr::Number(3))), &mut robot).unwrap();
    /// context.exec_action(&Action::Move(Some(Expr::Number(-3))), &mut robot).unwrap();
    ///
    /// assert_eq!(robot.moves, 3);
    /// ```
    pub fn exec_action(&mut self, action: &Action, robot: &mut dyn Robot) -> EvalResult<()> {
        match action {
            Action::Move(count) => self.repeat(count.as_ref(), robot, |r| r.move_forward()),
            Action::Wait(count) => self.repeat(count.as_ref(), robot, |r| r.idle_wait()),
            Action::TurnLeft => self.act(robot, |r| r.turn_left()),
            Action::TurnRight => self.act(robot, |r| r.turn_right()),
            Action::TurnAround => self.act(robot, |r| r.turn_around()),
            Action::ShieldOn => self.act(robot, |r| r.set_shield(true)),
            Action::ShieldOff => self.act(robot, |r| r.set_shield(false)),
            Action::TakeFuel => self.act(robot, |r| r.take_fuel()),
        }
    }

    /// Invokes `capability` once, or as many times as `count` evaluates to.
    fn repeat(&mut self,
              count: Option<&Expr>,
              robot: &mut dyn Robot,
              capability: fn(&mut dyn Robot) -> RobotResult<()>)
              -> EvalResult<()> {
        let times = match count {
            Some(expr) => repeat_count(self.eval_expr(expr, robot)?),
            None => 1,
        };

        for _ in 0..times {
            self.act(robot, capability)?;
        }
        Ok(())
    }

    /// Charges a step and invokes a single robot capability.
    fn act(&mut self,
           robot: &mut dyn Robot,
           capability: fn(&mut dyn Robot) -> RobotResult<()>)
           -> EvalResult<()> {
        self.consume_step()?;
        trace!(step = self.steps_taken(), "robot action");
        capability(robot)?;
        Ok(())
    }
}
