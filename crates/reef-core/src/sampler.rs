//! Injectable source of health scores.

use rand::Rng;

use crate::rng::RngHandle;

/// Source of uniformly drawn health values.
///
/// Every random draw made by the engine goes through this trait, so a store
/// can be driven by a seeded [`RngHandle`] in production and by a
/// [`ScriptedSampler`] in tests.
pub trait HealthSampler {
    /// Draws a value in `low..=high`.
    fn sample_inclusive(&mut self, low: u8, high: u8) -> u8;
}

impl HealthSampler for RngHandle {
    fn sample_inclusive(&mut self, low: u8, high: u8) -> u8 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside the requested range are clamped into it. An empty script
/// always yields the lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSampler {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedSampler {
    /// Creates a sampler replaying `values` in order.
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Creates a sampler that always yields `value` (clamped per draw).
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws served so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl HealthSampler for ScriptedSampler {
    fn sample_inclusive(&mut self, low: u8, high: u8) -> u8 {
        if self.values.is_empty() {
            self.cursor += 1;
            return low;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(low, high.max(low))
    }
}
