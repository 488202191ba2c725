//! Network graph representation and validation.
//!
//! This module provides the internal representation of a network after
//! parsing. The [`Network`] struct owns every module in a flat arena and
//! stores edges as [`ModuleId`] lists, so the cyclic graph never forms
//! ownership cycles.

mod graph;
mod types;
mod validate;

pub use graph::Network;
pub use types::*;
pub use validate::validate_network;
