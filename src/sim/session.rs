//! One simulation run: clock + body + history under a single owner
//!
//! The session is the unit of lifecycle: created on start, replaced on
//! restart, dropped on stop. `restart` rebuilds the body and resets the
//! clock and history in one call so a partial reset (fresh history against a
//! stale body, or vice versa) is not observable. The driving tick source
//! must be cancelled before restart; see [`crate::schedule::Driver`].

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::clock::{FrameClock, Tick};
use super::history::{EnergyHistory, EnergySample};
use crate::params::SimParams;

/// Owns all state for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    params: SimParams,
    seed: u64,
    pub body: Body,
    #[serde(skip)]
    clock: FrameClock,
    pub history: EnergyHistory,
    sim_time: f32,
}

impl Session {
    /// Start a run. `seed` feeds presentation-only randomness (ball color
    /// and x position); the physics is seed-independent.
    pub fn new(params: SimParams, seed: u64) -> Self {
        let params = params.clamped();
        log::info!(
            "run started: {} kg from {} m at {} m/s (seed {seed})",
            params.mass,
            params.initial_height,
            params.launch_speed
        );
        Self {
            params,
            seed,
            body: Body::new(&params),
            clock: FrameClock::new(),
            history: EnergyHistory::default(),
            sim_time: 0.0,
        }
    }

    /// Run one synchronous tick: clock -> body -> history.
    ///
    /// `timestamp` is seconds on the tick source's timebase. Returns the
    /// clock tick so drivers can observe dt and elapsed time.
    pub fn advance(&mut self, timestamp: f64) -> Tick {
        let tick = self.clock.tick(timestamp);
        self.body.step(tick.dt);
        self.sim_time += tick.dt;
        self.history.record(EnergySample {
            time: self.sim_time,
            potential: self.body.ledger.potential,
            kinetic: self.body.ledger.kinetic,
            heat: self.body.ledger.heat,
        });
        tick
    }

    /// Atomically begin a new run in place: new body, cleared clock and
    /// history, fresh presentation seed.
    pub fn restart(&mut self, params: SimParams, seed: u64) {
        let params = params.clamped();
        log::info!("run restarted (seed {seed})");
        self.body = Body::new(&params);
        self.clock.reset();
        self.history.reset();
        self.sim_time = 0.0;
        self.params = params;
        self.seed = seed;
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Integrated simulation time, the x-axis of the history
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }
}
