//! Tick sources and the driver loop
//!
//! The simulation is frame-driven: something must hand it a timestamp per
//! display refresh. That something is a [`TickSource`], an explicit
//! abstraction with start/stop/cancel semantics so the loop is decoupled
//! from any rendering technology. [`FixedStep`] is the deterministic source
//! for tests and headless runs; [`WallClock`] follows real time.

use std::time::Instant;

use crate::params::SimParams;
use crate::sim::Session;

/// A source of tick timestamps, in seconds on a single timebase
pub trait TickSource {
    /// The next timestamp, or None once exhausted or cancelled.
    fn next_timestamp(&mut self) -> Option<f64>;

    /// Stop producing timestamps. Idempotent.
    fn cancel(&mut self);
}

/// Deterministic source emitting `frames` evenly spaced timestamps
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f64,
    next: f64,
    remaining: u64,
    cancelled: bool,
}

impl FixedStep {
    /// Timestamps at `hz` per simulated second, starting at 0.
    pub fn new(hz: f64, frames: u64) -> Self {
        Self {
            dt: 1.0 / hz,
            next: 0.0,
            remaining: frames,
            cancelled: false,
        }
    }
}

impl TickSource for FixedStep {
    fn next_timestamp(&mut self) -> Option<f64> {
        if self.cancelled || self.remaining == 0 {
            return None;
        }
        let ts = self.next;
        self.next += self.dt;
        self.remaining -= 1;
        Some(ts)
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Wall-clock source; each call reports seconds since creation
#[derive(Debug, Clone)]
pub struct WallClock {
    origin: Instant,
    cancelled: bool,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            cancelled: false,
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn next_timestamp(&mut self) -> Option<f64> {
        if self.cancelled {
            return None;
        }
        Some(self.origin.elapsed().as_secs_f64())
    }

    fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// Pumps one session from one tick source
///
/// Owning the source here is what makes restart safe: `restart_with` cancels
/// the old source before the session is rebuilt, so no stale tick can land
/// on the replaced body.
#[derive(Debug)]
pub struct Driver<S: TickSource> {
    source: Option<S>,
}

impl<S: TickSource> Driver<S> {
    pub fn new() -> Self {
        Self { source: None }
    }

    pub fn start(&mut self, source: S) {
        self.source = Some(source);
    }

    /// Cancel and drop the current source, if any.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.cancel();
        }
    }

    pub fn running(&self) -> bool {
        self.source.is_some()
    }

    /// Deliver at most one tick. Returns false once the source is exhausted
    /// or the driver is stopped.
    pub fn tick(&mut self, session: &mut Session) -> bool {
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        match source.next_timestamp() {
            Some(ts) => {
                session.advance(ts);
                true
            }
            None => {
                self.source = None;
                false
            }
        }
    }

    /// Drain the source into the session, invoking `on_frame` after every
    /// tick. Returns the number of frames delivered.
    pub fn run(&mut self, session: &mut Session, mut on_frame: impl FnMut(&Session)) -> u64 {
        let mut frames = 0;
        while self.tick(session) {
            frames += 1;
            on_frame(session);
        }
        frames
    }

    /// Stop, restart the session, and install a new source, in that order.
    pub fn restart_with(
        &mut self,
        session: &mut Session,
        params: SimParams,
        seed: u64,
        source: S,
    ) {
        self.stop();
        session.restart(params, seed);
        self.start(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_emits_frames_then_stops() {
        let mut source = FixedStep::new(120.0, 3);
        assert_eq!(source.next_timestamp(), Some(0.0));
        let second = source.next_timestamp().unwrap();
        assert!((second - 1.0 / 120.0).abs() < 1e-12);
        assert!(source.next_timestamp().is_some());
        assert!(source.next_timestamp().is_none());
    }

    #[test]
    fn test_cancel_stops_source() {
        let mut source = FixedStep::new(120.0, 100);
        source.next_timestamp();
        source.cancel();
        assert!(source.next_timestamp().is_none());
    }

    #[test]
    fn test_driver_runs_to_exhaustion() {
        let mut session = Session::new(SimParams::default(), 0);
        let mut driver = Driver::new();
        driver.start(FixedStep::new(120.0, 50));

        let frames = driver.run(&mut session, |_| {});
        assert_eq!(frames, 50);
        assert!(!driver.running());
        assert_eq!(session.history.len(), 50);
    }

    #[test]
    fn test_stopped_driver_delivers_nothing() {
        let mut session = Session::new(SimParams::default(), 0);
        let mut driver = Driver::new();
        driver.start(FixedStep::new(120.0, 50));
        driver.tick(&mut session);
        driver.stop();

        assert!(!driver.tick(&mut session));
        assert_eq!(session.history.len(), 1);
    }

    #[test]
    fn test_restart_with_replaces_run() {
        let mut session = Session::new(SimParams::default(), 0);
        let mut driver = Driver::new();
        driver.start(FixedStep::new(120.0, 1000));
        for _ in 0..100 {
            driver.tick(&mut session);
        }
        let fallen = session.body.height;
        assert!(fallen < 20.0);

        driver.restart_with(
            &mut session,
            SimParams::default(),
            1,
            FixedStep::new(120.0, 1000),
        );
        assert!(driver.running());
        assert_eq!(session.body.height, 20.0);
        assert!(session.history.is_empty());

        // The fresh source starts its own timebase at zero
        driver.tick(&mut session);
        assert_eq!(session.sim_time(), 0.0);
    }

    #[test]
    fn test_wall_clock_monotone() {
        let mut source = WallClock::new();
        let a = source.next_timestamp().unwrap();
        let b = source.next_timestamp().unwrap();
        assert!(b >= a);
        source.cancel();
        assert!(source.next_timestamp().is_none());
    }
}
