//! Frame clock: timestamps in, bounded timesteps out
//!
//! Tick sources hand the clock a monotonic timestamp in seconds; the clock
//! turns successive timestamps into an integration step. A non-monotonic
//! source yields dt = 0 rather than a negative step, and a long frame gap is
//! capped at [`MAX_DT`](crate::consts::MAX_DT) so a stalled source cannot
//! tunnel the body through the ground.

use crate::consts::MAX_DT;

/// One clock tick: the integration step and wall time since the run began
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Clamped timestep in seconds, 0 <= dt <= MAX_DT
    pub dt: f32,
    /// Seconds since the first timestamp of the run
    pub elapsed: f32,
}

/// Converts animation-tick timestamps into bounded timesteps
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    start: Option<f64>,
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to `now` (seconds, same timebase across a run).
    ///
    /// The first tick of a run initializes both reference timestamps to
    /// `now` and yields dt = 0.
    pub fn tick(&mut self, now: f64) -> Tick {
        let start = *self.start.get_or_insert(now);
        let last = self.last.replace(now).unwrap_or(now);

        let raw = (now - last) as f32;
        let dt = if raw < 0.0 {
            log::warn!("non-monotonic timestamp ({now} < {last}), clamping dt to 0");
            0.0
        } else if raw > MAX_DT {
            log::warn!("frame gap {raw:.3}s exceeds cap, clamping dt to {MAX_DT}s");
            MAX_DT
        } else {
            raw
        };

        Tick {
            dt,
            elapsed: ((now - start).max(0.0)) as f32,
        }
    }

    /// Forget both reference timestamps; the next tick starts a new run.
    pub fn reset(&mut self) {
        self.start = None;
        self.last = None;
    }
}
