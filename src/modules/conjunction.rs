//! Conjunction module state.

use std::collections::BTreeMap;

use crate::network::{ModuleId, Pulse};

/// A conjunction: remembers the most recent pulse from each input.
///
/// After updating its memory it sends low if every remembered pulse is
/// high, and high otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conjunction {
    memory: BTreeMap<ModuleId, Pulse>,
    /// Number of memory entries currently high
    high_inputs: usize,
}

impl Conjunction {
    /// Create a conjunction with one low entry per input.
    pub fn new(inputs: &[ModuleId]) -> Self {
        let mut conj = Self::default();
        conj.init_memory(inputs);
        conj
    }

    /// Rebuild memory with one low entry per input.
    pub fn init_memory(&mut self, inputs: &[ModuleId]) {
        self.memory = inputs.iter().map(|&id| (id, Pulse::Low)).collect();
        self.high_inputs = 0;
    }

    /// Apply an incoming pulse from `sender`.
    ///
    /// Pulses from modules that are not inputs are not remembered.
    pub fn receive(&mut self, sender: Option<ModuleId>, pulse: Pulse) -> Pulse {
        match sender.and_then(|id| self.memory.get_mut(&id)) {
            Some(slot) => {
                match (*slot, pulse) {
                    (Pulse::Low, Pulse::High) => self.high_inputs += 1,
                    (Pulse::High, Pulse::Low) => self.high_inputs -= 1,
                    _ => {}
                }
                *slot = pulse;
            }
            None => {
                log::warn!("conjunction received a pulse from non-input {:?}", sender);
            }
        }

        if self.is_saturated() {
            Pulse::Low
        } else {
            Pulse::High
        }
    }

    /// True when every remembered input is high.
    pub fn is_saturated(&self) -> bool {
        self.high_inputs == self.memory.len()
    }

    /// The remembered pulse for an input.
    pub fn remembered(&self, input: ModuleId) -> Option<Pulse> {
        self.memory.get(&input).copied()
    }

    /// Number of inputs tracked.
    pub fn input_count(&self) -> usize {
        self.memory.len()
    }

    /// Reset every remembered pulse to low.
    pub fn reset(&mut self) {
        for slot in self.memory.values_mut() {
            *slot = Pulse::Low;
        }
        self.high_inputs = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ModuleId = ModuleId(1);
    const B: ModuleId = ModuleId(2);

    #[test]
    fn test_all_high_emits_low_in_either_order() {
        for order in [[A, B], [B, A]] {
            let mut conj = Conjunction::new(&[A, B]);
            assert_eq!(conj.receive(Some(order[0]), Pulse::High), Pulse::High);
            assert_eq!(conj.receive(Some(order[1]), Pulse::High), Pulse::Low);
            assert!(conj.is_saturated());
        }
    }

    #[test]
    fn test_any_low_emits_high() {
        let mut conj = Conjunction::new(&[A, B]);
        conj.receive(Some(A), Pulse::High);
        conj.receive(Some(B), Pulse::High);
        assert_eq!(conj.receive(Some(A), Pulse::Low), Pulse::High);
        assert_eq!(conj.remembered(A), Some(Pulse::Low));
        assert_eq!(conj.remembered(B), Some(Pulse::High));
    }

    #[test]
    fn test_repeated_high_counts_once() {
        let mut conj = Conjunction::new(&[A, B]);
        conj.receive(Some(A), Pulse::High);
        assert_eq!(conj.receive(Some(A), Pulse::High), Pulse::High);
        assert!(!conj.is_saturated());
    }

    #[test]
    fn test_unknown_sender_is_not_remembered() {
        let mut conj = Conjunction::new(&[A]);
        assert_eq!(conj.receive(Some(ModuleId(9)), Pulse::High), Pulse::High);
        assert_eq!(conj.input_count(), 1);
        assert_eq!(conj.remembered(ModuleId(9)), None);
    }

    #[test]
    fn test_reset_restores_low_memory() {
        let mut conj = Conjunction::new(&[A]);
        assert_eq!(conj.receive(Some(A), Pulse::High), Pulse::Low);
        conj.reset();
        assert_eq!(conj.remembered(A), Some(Pulse::Low));
        assert!(!conj.is_saturated());
    }
}
