//! Event scheduler: one button press at a time.

use std::collections::VecDeque;

use crate::modules::Module;
use crate::network::{ModuleId, Network, Pulse, PulseEvent, PulseTally};

/// One processed event as seen by an observer.
///
/// `module` is the target after it handled the pulse; `emitted` is what it
/// sent to its outputs (`None` if the pulse was absorbed).
#[derive(Debug)]
pub struct Delivery<'a> {
    pub event: PulseEvent,
    pub module: &'a Module,
    pub emitted: Option<Pulse>,
}

/// Drives pulses through a network in FIFO order.
///
/// Tallies are cumulative across presses until [`Scheduler::reset`].
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// The network being simulated
    network: Network,
    /// Pending pulses, oldest first
    queue: VecDeque<PulseEvent>,
    /// Pulses delivered since the last reset
    tally: PulseTally,
    /// Pulses delivered to each module, indexed by id
    module_tallies: Vec<PulseTally>,
    /// Button presses since the last reset
    presses: u64,
}

impl Scheduler {
    /// Create a scheduler for the given network.
    pub fn new(network: Network) -> Self {
        let module_tallies = vec![PulseTally::default(); network.len()];
        Self {
            network,
            queue: VecDeque::new(),
            tally: PulseTally::default(),
            module_tallies,
            presses: 0,
        }
    }

    /// Press the button once and run until no pulses remain.
    ///
    /// Returns the pulses delivered during this press.
    pub fn press(&mut self) -> PulseTally {
        self.press_observed(|_| {})
    }

    /// Press the button once, reporting every processed event to `observer`.
    pub fn press_observed<F>(&mut self, mut observer: F) -> PulseTally
    where
        F: FnMut(&Delivery<'_>),
    {
        self.presses += 1;
        let mut press_tally = PulseTally::default();

        self.queue.push_back(PulseEvent::button(self.network.entry()));

        while let Some(event) = self.queue.pop_front() {
            press_tally.record(event.pulse);
            self.module_tallies[event.target.0].record(event.pulse);

            log::trace!(
                "{} -{}-> {}",
                event.sender.map_or("button", |id| self.network.name(id)),
                event.pulse,
                self.network.name(event.target)
            );

            let emitted = self
                .network
                .module_mut(event.target)
                .receive(event.sender, event.pulse);

            let module = self.network.module(event.target);
            observer(&Delivery {
                event,
                module,
                emitted,
            });

            // Derived pulses go to the back: breadth-first, outputs in declared order
            if let Some(pulse) = emitted {
                self.queue.extend(module.fan_out(pulse));
            }
        }

        self.tally.merge(press_tally);
        log::debug!(
            "press {}: {} low, {} high",
            self.presses,
            press_tally.low,
            press_tally.high
        );
        press_tally
    }

    /// Restore module state and clear all counters.
    pub fn reset(&mut self) {
        self.network.reset();
        self.queue.clear();
        self.tally = PulseTally::default();
        self.module_tallies.fill(PulseTally::default());
        self.presses = 0;
    }

    /// Pulses delivered since the last reset.
    pub fn tally(&self) -> PulseTally {
        self.tally
    }

    /// Pulses delivered to one module since the last reset.
    pub fn module_tally(&self, id: ModuleId) -> PulseTally {
        self.module_tallies[id.0]
    }

    /// Button presses since the last reset.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// Get a reference to the network.
    pub fn network(&self) -> &Network {
        &self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNTER: &str = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a";

    fn scheduler(input: &str) -> Scheduler {
        Scheduler::new(Network::parse(input).unwrap())
    }

    fn trace(scheduler: &mut Scheduler) -> Vec<(Option<ModuleId>, ModuleId, Pulse)> {
        let mut events = Vec::new();
        scheduler.press_observed(|d| events.push((d.event.sender, d.event.target, d.event.pulse)));
        events
    }

    #[test]
    fn test_single_press_counts() {
        let mut s = scheduler(COUNTER);
        assert_eq!(s.press(), PulseTally { low: 8, high: 4 });
        assert_eq!(s.presses(), 1);
    }

    #[test]
    fn test_single_press_order() {
        let mut s = scheduler(COUNTER);
        let net = s.network().clone();
        let id = |name: &str| net.find(name).unwrap();
        let expected = vec![
            (None, id("broadcaster"), Pulse::Low),
            (Some(id("broadcaster")), id("a"), Pulse::Low),
            (Some(id("broadcaster")), id("b"), Pulse::Low),
            (Some(id("broadcaster")), id("c"), Pulse::Low),
            (Some(id("a")), id("b"), Pulse::High),
            (Some(id("b")), id("c"), Pulse::High),
            (Some(id("c")), id("inv"), Pulse::High),
            (Some(id("inv")), id("a"), Pulse::Low),
            (Some(id("a")), id("b"), Pulse::Low),
            (Some(id("b")), id("c"), Pulse::Low),
            (Some(id("c")), id("inv"), Pulse::Low),
            (Some(id("inv")), id("a"), Pulse::High),
        ];
        assert_eq!(trace(&mut s), expected);
    }

    #[test]
    fn test_tallies_accumulate_across_presses() {
        let mut s = scheduler(COUNTER);
        let first = s.press();
        let second = s.press();
        let mut both = first;
        both.merge(second);
        assert_eq!(s.tally(), both);

        let inv = s.network().find("inv").unwrap();
        assert_eq!(s.module_tally(inv).total(), 4);
    }

    #[test]
    fn test_replay_without_conjunctions_is_identical() {
        let input = "broadcaster -> a, b\n%a -> b, out\n%b -> out";
        let mut first = scheduler(input);
        let mut second = scheduler(input);
        for _ in 0..4 {
            assert_eq!(trace(&mut first), trace(&mut second));
        }
    }

    #[test]
    fn test_reset_clears_state_and_counters() {
        let mut s = scheduler(COUNTER);
        let fresh = trace(&mut s);
        s.press();
        s.reset();
        assert_eq!(s.presses(), 0);
        assert_eq!(s.tally(), PulseTally::default());
        assert_eq!(trace(&mut s), fresh);
    }

    #[test]
    fn test_output_order_changes_counts() {
        // Only the order of p's outputs differs. When k fires before j, the
        // conjunction c sees both inputs high for one pulse and f toggles.
        let base = "broadcaster -> p\n&i -> x\n&j -> x\n&k -> y\n%x -> c\n%y -> c\n&c -> f\n%f -> out";
        let mut ijk = scheduler(&format!("%p -> i, j, k\n{base}"));
        let mut ikj = scheduler(&format!("%p -> i, k, j\n{base}"));

        assert_eq!(ijk.press(), PulseTally { low: 6, high: 8 });
        assert_eq!(ikj.press(), PulseTally { low: 7, high: 8 });
    }
}
