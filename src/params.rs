//! Simulation parameters and physics model selection
//!
//! Parameters arrive from an outer input layer (UI, config file) and are
//! normalized once with [`SimParams::clamped`] before a body is built. The
//! simulation itself never re-validates.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_RESTITUTION, MAX_MASS, MIN_MASS};

/// Position update policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Integrator {
    /// Trapezoidal position update from the average of pre/post velocities.
    /// Conserves mechanical energy exactly under constant gravity.
    #[default]
    SemiImplicit,
    /// Naive forward Euler. Kept for comparison runs; drifts energy.
    ForwardEuler,
}

/// How dissipated energy is tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Accounting {
    /// Heat accrues at each dissipative event (friction work, bounce loss).
    /// Traceable event-by-event, robust to integration error.
    #[default]
    Explicit,
    /// Heat is the residual initial_energy - (potential + kinetic), floored
    /// at its previous value so it stays monotone. Masks integration error
    /// as heat.
    Residual,
}

/// Drag force model applied by the friction coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragLaw {
    /// Force proportional to velocity (linear damping, coefficient in 1/s)
    #[default]
    Linear,
    /// Force proportional to velocity squared (aerodynamic, coefficient in 1/m)
    Quadratic,
}

/// Parameters for one simulation run, immutable once applied
///
/// Velocity sign convention: positive = upward. `launch_speed` is the
/// non-negative upward speed at launch; a body starting at rest uses 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Body mass in kg, clamped to [0.1, 10]
    pub mass: f32,
    /// Upward launch speed in m/s, >= 0
    pub launch_speed: f32,
    /// Height above ground at launch in m, >= 0
    pub initial_height: f32,
    /// Gravitational acceleration magnitude in m/s^2
    pub gravity: f32,
    /// Velocity-proportional damping rate, >= 0 (units depend on `drag_law`)
    pub friction: f32,
    /// Fraction of speed retained per ground bounce, in [0, 1]
    pub restitution: f32,
    pub integrator: Integrator,
    pub accounting: Accounting,
    pub drag_law: DragLaw,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            launch_speed: 0.0,
            initial_height: 20.0,
            gravity: 9.8,
            friction: 0.0,
            restitution: DEFAULT_RESTITUTION,
            integrator: Integrator::default(),
            accounting: Accounting::default(),
            drag_law: DragLaw::default(),
        }
    }
}

impl SimParams {
    /// Normalize raw input into the ranges the simulation assumes.
    pub fn clamped(self) -> Self {
        Self {
            mass: self.mass.clamp(MIN_MASS, MAX_MASS),
            launch_speed: self.launch_speed.max(0.0),
            initial_height: self.initial_height.max(0.0),
            gravity: self.gravity.abs(),
            friction: self.friction.max(0.0),
            restitution: self.restitution.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Load and normalize parameters from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        Ok(params.clamped())
    }
}

/// Errors from the parameter input edge
#[derive(Debug)]
pub enum ParamsError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "failed to read parameters: {e}"),
            ParamsError::Json(e) => write!(f, "failed to parse parameters: {e}"),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            ParamsError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Json(e)
    }
}
