//! Network validation.

use std::collections::VecDeque;

use crate::error::{PulseError, Result};
use crate::modules::ModuleState;

use super::Network;

/// Validate a network for simulation.
///
/// Checks:
/// - The entry module is a broadcaster
///
/// Logs a warning for modules the button can never reach and for
/// conjunctions without inputs (they would emit low on every pulse).
pub fn validate_network(network: &Network) -> Result<()> {
    let entry = network.module(network.entry());
    if !matches!(entry.state, ModuleState::Broadcast) {
        return Err(PulseError::InvalidTopology {
            message: format!(
                "entry module '{}' must be a broadcaster, found {}",
                entry.name,
                entry.state.kind_name()
            ),
        });
    }

    let mut reached = vec![false; network.len()];
    let mut queue = VecDeque::from([network.entry()]);
    reached[network.entry().0] = true;
    while let Some(id) = queue.pop_front() {
        for &next in &network.module(id).outputs {
            if !reached[next.0] {
                reached[next.0] = true;
                queue.push_back(next);
            }
        }
    }

    for module in network.modules() {
        if !reached[module.id.0] {
            log::warn!("module '{}' is unreachable from '{}'", module.name, entry.name);
        }
        if module.is_conjunction() && module.inputs.is_empty() {
            log::warn!("conjunction '{}' has no inputs", module.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_network() {
        let net = Network::parse("broadcaster -> a\n%a -> b\n&orphan -> a").unwrap();
        assert!(validate_network(&net).is_ok());
    }

    #[test]
    fn test_entry_must_broadcast() {
        let net = Network::parse("%broadcaster -> a").unwrap();
        let err = validate_network(&net).unwrap_err();
        assert!(matches!(err, PulseError::InvalidTopology { .. }));
    }
}
