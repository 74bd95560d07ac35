//! The physics body: a point mass bouncing on a ground plane
//!
//! Velocity is a signed scalar along the vertical axis, positive = upward.
//! Height is distance above the ground plane and never goes negative; ground
//! contact is resolved by clamping plus an inelastic velocity flip.

use serde::{Deserialize, Serialize};

use super::energy::{Ledger, kinetic_energy, potential_energy};
use crate::consts::{MIN_BALL_RADIUS, RADIUS_PER_KG};
use crate::params::{DragLaw, Integrator, SimParams};

/// A single simulated body, owned by the session and mutated only by
/// [`Body::step`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    // Constant for the body's lifetime
    pub mass: f32,
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    integrator: Integrator,
    drag_law: DragLaw,
    /// Normalization denominator for every energy display
    pub initial_energy: f32,

    // Mutated every step
    pub velocity: f32,
    pub height: f32,
    pub ledger: Ledger,
}

impl Body {
    /// Build a body from normalized parameters. Callers clamp first; the
    /// body does not re-validate.
    pub fn new(params: &SimParams) -> Self {
        let initial_energy = potential_energy(params.mass, params.gravity, params.initial_height)
            + kinetic_energy(params.mass, params.launch_speed);

        Self {
            mass: params.mass,
            gravity: params.gravity,
            friction: params.friction,
            restitution: params.restitution,
            integrator: params.integrator,
            drag_law: params.drag_law,
            initial_energy,
            velocity: params.launch_speed,
            height: params.initial_height,
            ledger: Ledger::new(
                params.accounting,
                params.mass,
                params.gravity,
                params.initial_height,
                params.launch_speed,
            ),
        }
    }

    /// Advance the body by one timestep.
    ///
    /// dt must already be clamped to [0, MAX_DT] by the frame clock;
    /// dt = 0 leaves every field unchanged.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let v0 = self.velocity;
        let drag_accel = match self.drag_law {
            DragLaw::Linear => -self.friction * v0,
            DragLaw::Quadratic => -self.friction * v0.abs() * v0,
        };

        self.velocity += (-self.gravity + drag_accel) * dt;

        let v_avg = match self.integrator {
            Integrator::SemiImplicit => 0.5 * (v0 + self.velocity),
            Integrator::ForwardEuler => v0,
        };
        self.height += v_avg * dt;

        // Friction work over this step is irreversibly lost
        self.ledger
            .charge_friction(self.mass * (drag_accel * v_avg).abs() * dt);
        self.ledger
            .measure(self.mass, self.gravity, self.height, self.velocity);

        // Ground collision: clamp, flip with restitution, bank the KE delta
        if self.height <= 0.0 {
            self.height = 0.0;
            let ke_before = kinetic_energy(self.mass, self.velocity);
            self.velocity *= -self.restitution;
            let ke_after = kinetic_energy(self.mass, self.velocity);
            self.ledger.charge_collision((ke_before - ke_after).max(0.0));
            self.ledger
                .measure(self.mass, self.gravity, self.height, self.velocity);
        }

        self.ledger.settle(self.initial_energy);
    }

    /// Display radius in pixels, floored so light bodies stay visible
    pub fn radius(&self) -> f32 {
        (self.mass * RADIUS_PER_KG).max(MIN_BALL_RADIUS)
    }

    /// Current speed, sign stripped
    pub fn speed(&self) -> f32 {
        self.velocity.abs()
    }

    pub fn airborne(&self) -> bool {
        self.height > 0.0
    }
}
