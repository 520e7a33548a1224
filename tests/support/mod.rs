#![allow(dead_code)]

use robotscript::{Robot, RobotResult, error::CapabilityError};

/// Everything the recording robot was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Move,
    TurnLeft,
    TurnRight,
    TurnAround,
    TakeFuel,
    Wait,
    Shield(bool),
    Sense(&'static str),
}

/// A tiny deterministic world that records every capability call.
///
/// Moving forward uses one unit of fuel and brings the robot one step closer
/// to the wall. Barrels are listed closest first as `(lr, fb)` offsets.
#[derive(Debug, Default)]
pub struct RecordingRobot {
    pub calls:      Vec<Call>,
    pub fuel:       i64,
    pub opponent:   (i64, i64),
    pub barrels:    Vec<(i64, i64)>,
    pub wall:       i64,
    /// Number of actions accepted before the robot halts.
    pub halt_after: Option<usize>,
    actions:        usize,
}

impl RecordingRobot {
    pub fn new() -> Self {
        Self { fuel: 100,
               wall: 10,
               barrels: vec![(1, 2), (-3, 4)],
               opponent: (5, -6),
               ..Self::default() }
    }

    pub fn halting_after(actions: usize) -> Self {
        Self { halt_after: Some(actions),
               ..Self::new() }
    }

    /// The recorded calls without sensor reads.
    pub fn actions(&self) -> Vec<Call> {
        self.calls
            .iter()
            .filter(|call| !matches!(call, Call::Sense(_)))
            .cloned()
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn sensed(&self, sensor: &'static str) -> bool {
        self.calls.contains(&Call::Sense(sensor))
    }

    fn act(&mut self, call: Call) -> RobotResult<()> {
        if let Some(limit) = self.halt_after
           && self.actions >= limit
        {
            return Err(CapabilityError::Halted { reason: "out of turns".to_string() });
        }
        self.actions += 1;
        self.calls.push(call);
        Ok(())
    }

    fn sense(&mut self, sensor: &'static str, value: i64) -> RobotResult<i64> {
        self.calls.push(Call::Sense(sensor));
        Ok(value)
    }

    fn barrel(&mut self, sensor: &'static str, index: i64) -> RobotResult<(i64, i64)> {
        self.calls.push(Call::Sense(sensor));
        usize::try_from(index).ok()
                              .and_then(|i| self.barrels.get(i).copied())
                              .ok_or(CapabilityError::InvalidBarrelIndex { index })
    }
}

impl Robot for RecordingRobot {
    fn move_forward(&mut self) -> RobotResult<()> {
        self.act(Call::Move)?;
        self.fuel -= 1;
        self.wall = (self.wall - 1).max(0);
        Ok(())
    }

    fn turn_left(&mut self) -> RobotResult<()> {
        self.act(Call::TurnLeft)
    }

    fn turn_right(&mut self) -> RobotResult<()> {
        self.act(Call::TurnRight)
    }

    fn turn_around(&mut self) -> RobotResult<()> {
        self.act(Call::TurnAround)
    }

    fn take_fuel(&mut self) -> RobotResult<()> {
        self.act(Call::TakeFuel)
    }

    fn idle_wait(&mut self) -> RobotResult<()> {
        self.act(Call::Wait)
    }

    fn set_shield(&mut self, on: bool) -> RobotResult<()> {
        self.act(Call::Shield(on))
    }

    fn fuel(&mut self) -> RobotResult<i64> {
        self.sense("fuelLeft", self.fuel)
    }

    fn opponent_lr(&mut self) -> RobotResult<i64> {
        self.sense("oppLR", self.opponent.0)
    }

    fn opponent_fb(&mut self) -> RobotResult<i64> {
        self.sense("oppFB", self.opponent.1)
    }

    fn barrel_count(&mut self) -> RobotResult<i64> {
        let count = i64::try_from(self.barrels.len()).unwrap_or(i64::MAX);
        self.sense("numBarrels", count)
    }

    fn wall_distance(&mut self) -> RobotResult<i64> {
        self.sense("wallDist", self.wall)
    }

    fn closest_barrel_lr(&mut self) -> RobotResult<i64> {
        Ok(self.barrel("barrelLR", 0)?.0)
    }

    fn closest_barrel_fb(&mut self) -> RobotResult<i64> {
        Ok(self.barrel("barrelFB", 0)?.1)
    }

    fn barrel_lr(&mut self, index: i64) -> RobotResult<i64> {
        Ok(self.barrel("barrelLR", index)?.0)
    }

    fn barrel_fb(&mut self, index: i64) -> RobotResult<i64> {
        Ok(self.barrel("barrelFB", index)?.1)
    }
}
