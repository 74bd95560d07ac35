//! Deterministic simulation module
//!
//! All physics and bookkeeping lives here. This module must be pure and
//! deterministic:
//! - Clamped timesteps only
//! - Seeded RNG only (and only for presentation state)
//! - No rendering or platform dependencies

pub mod body;
pub mod clock;
pub mod energy;
pub mod history;
pub mod session;

pub use body::Body;
pub use clock::{FrameClock, Tick};
pub use energy::{Ledger, kinetic_energy, potential_energy};
pub use history::{EnergyHistory, EnergySample};
pub use session::Session;
