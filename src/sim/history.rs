//! Append-only energy history for the time-series view
//!
//! The line chart redraws from the full ordered sequence every frame, so the
//! recorder preserves insertion order and never reorders or deduplicates.
//! Long runs are kept bounded by halving decimation: past the cap, every
//! second sample is dropped, so the chart still spans the whole run at half
//! resolution.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_HISTORY_SAMPLES;

/// One time-stamped energy measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    /// Simulation time in seconds, strictly increasing within a run
    pub time: f32,
    pub potential: f32,
    pub kinetic: f32,
    pub heat: f32,
}

/// Ordered, append-only sample store for one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyHistory {
    samples: Vec<EnergySample>,
    max_samples: Option<usize>,
}

impl Default for EnergyHistory {
    fn default() -> Self {
        Self::bounded(MAX_HISTORY_SAMPLES)
    }
}

impl EnergyHistory {
    /// Unbounded history; callers own the memory consequences.
    pub fn unbounded() -> Self {
        Self {
            samples: Vec::new(),
            max_samples: None,
        }
    }

    /// History that decimates itself once `max_samples` is reached.
    pub fn bounded(max_samples: usize) -> Self {
        Self {
            samples: Vec::new(),
            max_samples: Some(max_samples.max(2)),
        }
    }

    /// Append one sample. Amortized O(1).
    pub fn record(&mut self, sample: EnergySample) {
        if let Some(max) = self.max_samples {
            if self.samples.len() >= max {
                self.decimate();
            }
        }
        self.samples.push(sample);
    }

    /// Drop every second sample in place, keeping the first.
    fn decimate(&mut self) {
        let mut index = 0;
        self.samples.retain(|_| {
            let keep = index % 2 == 0;
            index += 1;
            keep
        });
    }

    /// Clear all samples; called exactly when a new run begins.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[EnergySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&EnergySample> {
        self.samples.last()
    }

    /// Time of the newest sample, the line chart's x-axis extent
    pub fn max_time(&self) -> f32 {
        self.latest().map(|s| s.time).unwrap_or(0.0)
    }
}
