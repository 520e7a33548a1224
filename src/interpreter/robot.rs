use crate::error::CapabilityError;

/// Result type returned by every robot capability.
pub type RobotResult<T> = Result<T, CapabilityError>;

/// The capabilities a program can use to act on and observe the world.
///
/// The simulation implements this trait for the robot a program controls.
/// Every action and sensor of the language maps to exactly one method. Any
/// error returned here aborts the running program and is reported unchanged,
/// which is also how a simulation stops a program that would otherwise run
/// forever.
///
/// Offsets are relative to the robot: left/right (`LR`) and front/back
/// (`FB`).
pub trait Robot {
    /// Moves one step forward.
    fn move_forward(&mut self) -> RobotResult<()>;
    /// Turns 90 degrees to the left.
    fn turn_left(&mut self) -> RobotResult<()>;
    /// Turns 90 degrees to the right.
    fn turn_right(&mut self) -> RobotResult<()>;
    /// Turns 180 degrees.
    fn turn_around(&mut self) -> RobotResult<()>;
    /// Picks up a fuel barrel at the current position.
    fn take_fuel(&mut self) -> RobotResult<()>;
    /// Does nothing for one tick.
    fn idle_wait(&mut self) -> RobotResult<()>;
    /// Raises or lowers the shield.
    fn set_shield(&mut self, on: bool) -> RobotResult<()>;

    /// Fuel remaining.
    fn fuel(&mut self) -> RobotResult<i64>;
    /// Left/right offset of the opponent.
    fn opponent_lr(&mut self) -> RobotResult<i64>;
    /// Front/back offset of the opponent.
    fn opponent_fb(&mut self) -> RobotResult<i64>;
    /// Number of barrels in the world.
    fn barrel_count(&mut self) -> RobotResult<i64>;
    /// Distance to the wall straight ahead.
    fn wall_distance(&mut self) -> RobotResult<i64>;
    /// Left/right offset of the closest barrel.
    fn closest_barrel_lr(&mut self) -> RobotResult<i64>;
    /// Front/back offset of the closest barrel.
    fn closest_barrel_fb(&mut self) -> RobotResult<i64>;
    /// Left/right offset of the barrel at `index`, ordered by distance.
    fn barrel_lr(&mut self, index: i64) -> RobotResult<i64>;
    /// Front/back offset of the barrel at `index`, ordered by distance.
    fn barrel_fb(&mut self, index: i64) -> RobotResult<i64>;
}
