//! Flip-flop module state.

use crate::network::Pulse;

/// A flip-flop: on or off, initially off.
///
/// High pulses are ignored. A low pulse toggles the state and the new
/// state is sent on (on sends high, off sends low).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipFlop {
    pub on: bool,
}

impl FlipFlop {
    /// Create a new flip-flop in the off state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an incoming pulse.
    pub fn receive(&mut self, pulse: Pulse) -> Option<Pulse> {
        if pulse.is_high() {
            return None;
        }
        self.toggle();
        Some(Pulse::from(self.on))
    }

    /// Toggle the on/off state.
    pub fn toggle(&mut self) {
        self.on = !self.on;
    }

    /// Return to the off state.
    pub fn reset(&mut self) {
        self.on = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_is_absorbed() {
        let mut ff = FlipFlop::new();
        assert_eq!(ff.receive(Pulse::High), None);
        assert!(!ff.on);
    }

    #[test]
    fn test_two_lows_round_trip() {
        let mut ff = FlipFlop::new();
        assert_eq!(ff.receive(Pulse::Low), Some(Pulse::High));
        assert!(ff.on);
        assert_eq!(ff.receive(Pulse::Low), Some(Pulse::Low));
        assert!(!ff.on);
    }
}
