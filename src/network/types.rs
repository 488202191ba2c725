//! Core types for network representation.

use std::fmt;

/// A unique identifier for a module in the network.
///
/// Ids are arena indices assigned in definition order; sinks follow the
/// defined modules in order of first reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub usize);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "M{}", self.0)
    }
}

/// A pulse value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pulse {
    #[default]
    Low,
    High,
}

impl Pulse {
    /// Check if this is a high pulse.
    pub fn is_high(self) -> bool {
        self == Pulse::High
    }

    /// Check if this is a low pulse.
    pub fn is_low(self) -> bool {
        self == Pulse::Low
    }
}

impl From<bool> for Pulse {
    fn from(high: bool) -> Self {
        if high {
            Pulse::High
        } else {
            Pulse::Low
        }
    }
}

impl From<Pulse> for bool {
    fn from(pulse: Pulse) -> Self {
        pulse.is_high()
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pulse::Low => write!(f, "low"),
            Pulse::High => write!(f, "high"),
        }
    }
}

/// A pulse in flight: sender (none for the button), target and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseEvent {
    pub sender: Option<ModuleId>,
    pub target: ModuleId,
    pub pulse: Pulse,
}

impl PulseEvent {
    /// The synthetic event injected by one button press.
    pub fn button(entry: ModuleId) -> Self {
        Self {
            sender: None,
            target: entry,
            pulse: Pulse::Low,
        }
    }
}

/// Low/high pulse counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PulseTally {
    pub low: u64,
    pub high: u64,
}

impl PulseTally {
    /// Count one delivered pulse.
    pub fn record(&mut self, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }
    }

    /// Total number of pulses counted.
    pub fn total(&self) -> u64 {
        self.low + self.high
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: PulseTally) {
        self.low += other.low;
        self.high += other.high;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_bool_conversion() {
        assert_eq!(Pulse::from(true), Pulse::High);
        assert_eq!(Pulse::from(false), Pulse::Low);
        assert!(bool::from(Pulse::High));
        assert_eq!(Pulse::default(), Pulse::Low);
    }

    #[test]
    fn test_tally_record_and_merge() {
        let mut tally = PulseTally::default();
        tally.record(Pulse::Low);
        tally.record(Pulse::High);
        tally.record(Pulse::Low);
        assert_eq!(tally, PulseTally { low: 2, high: 1 });

        tally.merge(PulseTally { low: 1, high: 4 });
        assert_eq!(tally.total(), 8);
    }
}
