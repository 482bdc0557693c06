#![deny(missing_docs)]
#![doc = "Core error, randomness and provenance types shared by the reef health engine."]

pub mod errors;
pub mod provenance;
pub mod rng;
pub mod sampler;

pub use errors::{ErrorInfo, ReefError};
pub use provenance::{SchemaVersion, SessionProvenance};
pub use rng::{derive_substream_seed, RngHandle};
pub use sampler::{HealthSampler, ScriptedSampler};

/// Lowest health score a sector can hold.
pub const HEALTH_MIN: u8 = 0;

/// Highest health score a sector can hold.
pub const HEALTH_MAX: u8 = 100;
