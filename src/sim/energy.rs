//! Energy ledger: derived mechanical energy plus the dissipation accumulator
//!
//! Potential and kinetic energy are pure functions of the body's state and
//! are recomputed every step; heat is the one owned quantity. The invariant
//! the ledger exists to preserve: potential + kinetic + heat stays equal to
//! the body's initial energy over the whole run.

use serde::{Deserialize, Serialize};

use crate::params::Accounting;

/// PE = m * g * h, floored at ground level
#[inline]
pub fn potential_energy(mass: f32, gravity: f32, height: f32) -> f32 {
    mass * gravity * height.max(0.0)
}

/// KE = 1/2 * m * v^2
#[inline]
pub fn kinetic_energy(mass: f32, velocity: f32) -> f32 {
    0.5 * mass * velocity * velocity
}

/// Per-body energy bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    mode: Accounting,
    /// Recomputed every step from height
    pub potential: f32,
    /// Recomputed every step from velocity
    pub kinetic: f32,
    /// Cumulative dissipated energy, monotone non-decreasing
    pub heat: f32,
}

impl Ledger {
    pub fn new(mode: Accounting, mass: f32, gravity: f32, height: f32, velocity: f32) -> Self {
        Self {
            mode,
            potential: potential_energy(mass, gravity, height),
            kinetic: kinetic_energy(mass, velocity),
            heat: 0.0,
        }
    }

    /// Recompute the derived terms from current body state.
    pub fn measure(&mut self, mass: f32, gravity: f32, height: f32, velocity: f32) {
        self.potential = potential_energy(mass, gravity, height);
        self.kinetic = kinetic_energy(mass, velocity);
    }

    /// Record friction work for this step. No-op under residual accounting.
    pub fn charge_friction(&mut self, joules: f32) {
        if self.mode == Accounting::Explicit {
            self.heat += joules.max(0.0);
        }
    }

    /// Record kinetic energy lost in a bounce. No-op under residual accounting.
    pub fn charge_collision(&mut self, joules: f32) {
        if self.mode == Accounting::Explicit {
            self.heat += joules.max(0.0);
        }
    }

    /// Residual accounting: heat is whatever is missing from the initial
    /// total, floored at its previous value to keep it monotone.
    pub fn settle(&mut self, initial_energy: f32) {
        if self.mode == Accounting::Residual {
            let residual = (initial_energy - self.potential - self.kinetic).max(0.0);
            self.heat = self.heat.max(residual);
        }
    }

    /// potential + kinetic + heat
    pub fn total(&self) -> f32 {
        self.potential + self.kinetic + self.heat
    }
}
