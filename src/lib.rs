//! # Pulsenet Core
//!
//! A discrete-event simulator for pulse networks.
//!
//! This library provides:
//! - A small line-oriented DSL for describing module networks
//! - Wiring of named modules into an arena-backed graph
//! - Broadcast, flip-flop, conjunction and sink module models
//! - A FIFO pulse scheduler and press campaigns built on it
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the network description language
//! - [`network`] - Network graph representation and validation
//! - [`modules`] - Module models and the pulse transition rule
//! - [`sim`] - Press scheduling and campaign drivers
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! pulsenet network.txt
//! RUST_LOG=trace pulsenet --part 1 --presses 1 network.txt
//! ```
//!
//! ### Library
//!
//! ```
//! use pulsenet_core::{Campaign, CampaignConfig, Network};
//!
//! let network = Network::parse("broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a")?;
//! let mut campaign = Campaign::new(network, CampaignConfig::default())?;
//! assert_eq!(campaign.aggregate()?.product()?, 32_000_000);
//! # Ok::<(), pulsenet_core::PulseError>(())
//! ```
//!
//! ## Simulation Method
//!
//! Every press:
//!
//! 1. Queue a low pulse from the button to `broadcaster`
//! 2. Pop the oldest pulse, count it, and let the target module handle it
//! 3. Queue the module's derived pulse once per output, in declared order
//! 4. Repeat until the queue is empty
//!
//! Module state and pulse counts carry over from one press to the next.

pub mod dsl;
pub mod error;
pub mod modules;
pub mod network;
pub mod sim;

// Re-export main types for convenience
pub use error::{PulseError, Result};
pub use network::{Network, Pulse};
pub use sim::{solve, solve_with, Campaign, CampaignConfig, Scheduler, Solution};

/// Name of the module every button press sends to.
pub const ENTRY_MODULE: &str = "broadcaster";
