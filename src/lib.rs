//! Bounce Lab - a single-body bounce simulator with energy accounting
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, physics body, energy ledger, history)
//! - `render`: Pure shape/text generation from simulation state
//! - `schedule`: Tick sources and the driver loop
//! - `params`: Simulation parameters and physics model selection

pub mod params;
pub mod render;
pub mod schedule;
pub mod sim;

pub use params::{Accounting, DragLaw, Integrator, SimParams};
pub use sim::{Body, EnergyHistory, EnergySample, FrameClock, Session};

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep for deterministic/headless runs (120 Hz)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Upper bound on a single integration step (seconds). A frame gap longer
    /// than this (backgrounded tab, suspended process) would tunnel the body
    /// through the ground and spike the energy ledger.
    pub const MAX_DT: f32 = 0.1;

    /// Mass bounds (kg)
    pub const MIN_MASS: f32 = 0.1;
    pub const MAX_MASS: f32 = 10.0;

    /// Fraction of speed retained after a ground bounce
    pub const DEFAULT_RESTITUTION: f32 = 0.6;

    /// Ball display radius: max(MIN_BALL_RADIUS, mass * RADIUS_PER_KG) pixels
    pub const MIN_BALL_RADIUS: f32 = 5.0;
    pub const RADIUS_PER_KG: f32 = 2.0;

    /// Vertical world extent mapped onto the canvas (meters)
    pub const WORLD_HEIGHT: f32 = 200.0;

    /// History recorder bound; halving decimation kicks in past this
    pub const MAX_HISTORY_SAMPLES: usize = 4096;
}
