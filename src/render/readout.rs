//! Textual snapshot of the current simulation state

use std::fmt;

use crate::sim::Session;

/// Per-tick text overlay data, recomputed on demand
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub time: f32,
    pub mass: f32,
    /// Current speed, sign stripped
    pub speed: f32,
    pub height: f32,
    pub potential: f32,
    pub kinetic: f32,
    pub heat: f32,
    pub total: f32,
    pub initial_energy: f32,
}

/// Snapshot the session for a text overlay or log line.
pub fn readout(session: &Session) -> Readout {
    let body = &session.body;
    Readout {
        time: session.sim_time(),
        mass: body.mass,
        speed: body.speed(),
        height: body.height,
        potential: body.ledger.potential,
        kinetic: body.ledger.kinetic,
        heat: body.ledger.heat,
        total: body.ledger.total(),
        initial_energy: body.initial_energy,
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:6.2}s  m={:.1} kg  v={:5.2} m/s  h={:6.2} m  PE={:7.2} J  KE={:7.2} J  heat={:7.2} J  total={:7.2}/{:.2} J",
            self.time,
            self.mass,
            self.speed,
            self.height,
            self.potential,
            self.kinetic,
            self.heat,
            self.total,
            self.initial_energy,
        )
    }
}
