//! Module models for pulse simulation.
//!
//! This module provides the four module kinds:
//! - Broadcast: forwards pulses unchanged
//! - Flip-flop: toggles on low pulses
//! - Conjunction: NAND over the last pulse of every input
//! - Sink: an undefined destination that absorbs everything
//!
//! Kind-specific state lives in [`ModuleState`]; [`Module::receive`] is the
//! single transition function over all kinds.

mod conjunction;
mod flip_flop;

pub use conjunction::Conjunction;
pub use flip_flop::FlipFlop;

use crate::dsl::ModuleKind;
use crate::network::{ModuleId, Pulse, PulseEvent};

/// Kind tag plus kind-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleState {
    Broadcast,
    FlipFlop(FlipFlop),
    Conjunction(Conjunction),
    Sink,
}

impl ModuleState {
    /// Fresh state for a declared kind. Conjunction memory is empty until
    /// [`Module::reset`] runs on the fully wired module.
    pub fn from_kind(kind: ModuleKind) -> Self {
        match kind {
            ModuleKind::Broadcast => ModuleState::Broadcast,
            ModuleKind::FlipFlop => ModuleState::FlipFlop(FlipFlop::new()),
            ModuleKind::Conjunction => ModuleState::Conjunction(Conjunction::default()),
        }
    }

    /// Short kind name for logs and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ModuleState::Broadcast => "broadcast",
            ModuleState::FlipFlop(_) => "flip-flop",
            ModuleState::Conjunction(_) => "conjunction",
            ModuleState::Sink => "sink",
        }
    }
}

/// A module in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Destinations in declared order
    pub outputs: Vec<ModuleId>,
    /// Sources in wiring order
    pub inputs: Vec<ModuleId>,
    pub state: ModuleState,
}

impl Module {
    /// Create a declared module with no edges yet.
    pub fn new(id: ModuleId, name: String, kind: ModuleKind) -> Self {
        Self {
            id,
            name,
            outputs: Vec::new(),
            inputs: Vec::new(),
            state: ModuleState::from_kind(kind),
        }
    }

    /// Create a sink for an undefined destination.
    pub fn sink(id: ModuleId, name: String) -> Self {
        Self {
            id,
            name,
            outputs: Vec::new(),
            inputs: Vec::new(),
            state: ModuleState::Sink,
        }
    }

    /// Apply one incoming pulse.
    ///
    /// Returns the pulse this module sends to every output, or `None` if the
    /// pulse was absorbed.
    pub fn receive(&mut self, sender: Option<ModuleId>, pulse: Pulse) -> Option<Pulse> {
        match &mut self.state {
            ModuleState::Broadcast => Some(pulse),
            ModuleState::FlipFlop(ff) => ff.receive(pulse),
            ModuleState::Conjunction(conj) => Some(conj.receive(sender, pulse)),
            ModuleState::Sink => None,
        }
    }

    /// Events carrying `pulse` from this module to each output, in order.
    pub fn fan_out(&self, pulse: Pulse) -> impl Iterator<Item = PulseEvent> + '_ {
        let sender = Some(self.id);
        self.outputs.iter().map(move |&target| PulseEvent {
            sender,
            target,
            pulse,
        })
    }

    /// Restore the initial kind state.
    ///
    /// Must run after `inputs` is complete: conjunction memory is rebuilt
    /// from it.
    pub fn reset(&mut self) {
        match &mut self.state {
            ModuleState::FlipFlop(ff) => ff.reset(),
            ModuleState::Conjunction(conj) => conj.init_memory(&self.inputs),
            ModuleState::Broadcast | ModuleState::Sink => {}
        }
    }

    /// The conjunction state, if this is a conjunction.
    pub fn as_conjunction(&self) -> Option<&Conjunction> {
        match &self.state {
            ModuleState::Conjunction(conj) => Some(conj),
            _ => None,
        }
    }

    /// Check if this is a conjunction.
    pub fn is_conjunction(&self) -> bool {
        matches!(self.state, ModuleState::Conjunction(_))
    }

    /// Check if this is a sink.
    pub fn is_sink(&self) -> bool {
        matches!(self.state, ModuleState::Sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wired(kind: ModuleKind, inputs: &[usize], outputs: &[usize]) -> Module {
        let mut module = Module::new(ModuleId(0), "m".to_string(), kind);
        module.inputs = inputs.iter().map(|&i| ModuleId(i)).collect();
        module.outputs = outputs.iter().map(|&i| ModuleId(i)).collect();
        module.reset();
        module
    }

    #[test]
    fn test_broadcast_forwards_unchanged() {
        let mut m = wired(ModuleKind::Broadcast, &[], &[1, 2]);
        assert_eq!(m.receive(None, Pulse::Low), Some(Pulse::Low));
        assert_eq!(m.receive(None, Pulse::High), Some(Pulse::High));
    }

    #[test]
    fn test_fan_out_keeps_declared_order() {
        let m = wired(ModuleKind::Broadcast, &[], &[3, 1, 2]);
        let targets: Vec<_> = m.fan_out(Pulse::High).map(|e| e.target.0).collect();
        assert_eq!(targets, vec![3, 1, 2]);
        assert!(m
            .fan_out(Pulse::High)
            .all(|e| e.sender == Some(ModuleId(0)) && e.pulse == Pulse::High));
    }

    #[test]
    fn test_flip_flop_emits_on_then_off() {
        let mut m = wired(ModuleKind::FlipFlop, &[5], &[1]);
        let emitted: Vec<_> = (0..2).filter_map(|_| m.receive(Some(ModuleId(5)), Pulse::Low)).collect();
        assert_eq!(emitted, vec![Pulse::High, Pulse::Low]);
        assert_eq!(m.state, ModuleState::FlipFlop(FlipFlop { on: false }));
    }

    #[test]
    fn test_conjunction_memory_matches_inputs() {
        let m = wired(ModuleKind::Conjunction, &[4, 7], &[1]);
        let conj = m.as_conjunction().unwrap();
        assert_eq!(conj.input_count(), 2);
        assert_eq!(conj.remembered(ModuleId(4)), Some(Pulse::Low));
        assert_eq!(conj.remembered(ModuleId(7)), Some(Pulse::Low));
    }

    #[test]
    fn test_sink_absorbs() {
        let mut m = Module::sink(ModuleId(3), "rx".to_string());
        assert_eq!(m.receive(Some(ModuleId(0)), Pulse::Low), None);
        assert!(m.is_sink());
    }
}
