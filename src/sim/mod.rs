//! Pulse simulation engine.
//!
//! This module drives pulses through a wired [`Network`](crate::Network).
//!
//! ## Button Presses
//!
//! One press injects a low pulse into the entry module and runs until no
//! pulses remain. Pulses are handled strictly first-in first-out, and a
//! module's derived pulses are queued in its declared output order. The
//! order matters: conjunctions see their inputs change in exactly this
//! sequence.
//!
//! ## Campaigns
//!
//! A [`Campaign`] runs many presses on the same network:
//! - aggregate mode counts every low and high pulse over a fixed number of
//!   presses
//! - periodic mode records the first press on which each watched module
//!   fires and combines those presses with a least common multiple

mod campaign;
pub mod math;
mod scheduler;

pub use campaign::{
    derive_watched, solve, solve_with, AggregateReport, Campaign, CampaignConfig, PeriodicOutcome,
    Solution, Trigger, WatchedPeriod,
};
pub use scheduler::{Delivery, Scheduler};

/// Presses run by aggregate mode.
pub const DEFAULT_AGGREGATE_PRESSES: u64 = 1000;

/// Upper bound on presses in periodic mode.
pub const DEFAULT_PRESS_CEILING: u64 = 1_000_000_000;

/// Module whose first low pulse ends periodic mode.
pub const DEFAULT_TERMINAL: &str = "rx";
