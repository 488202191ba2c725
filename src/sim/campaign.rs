//! Campaign driver: repeated button presses and what they add up to.

use std::collections::HashSet;

use crate::error::{PulseError, Result};
use crate::network::{validate_network, ModuleId, Network, Pulse, PulseTally};

use super::math::{lcm_all, product_all};
use super::scheduler::{Delivery, Scheduler};
use super::{DEFAULT_AGGREGATE_PRESSES, DEFAULT_PRESS_CEILING, DEFAULT_TERMINAL};

/// When a watched module counts as having fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The module sends a high pulse.
    EmitsHigh,
    /// The module is a conjunction whose memory is all high after
    /// handling a pulse, i.e. it is about to send low.
    MemorySaturated,
}

impl Trigger {
    fn fires(self, delivery: &Delivery<'_>) -> bool {
        match self {
            Trigger::EmitsHigh => delivery.emitted == Some(Pulse::High),
            Trigger::MemorySaturated => delivery
                .module
                .as_conjunction()
                .is_some_and(|conj| conj.is_saturated()),
        }
    }
}

/// Configuration for a campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    /// Presses run by aggregate mode.
    pub presses: u64,
    /// Upper bound on presses in periodic mode.
    pub press_ceiling: u64,
    /// Module whose first low output ends periodic mode early.
    pub terminal: String,
    /// Explicit watched modules; derived from the terminal when `None`.
    pub watched: Option<Vec<String>>,
    /// Trigger rule; defaults depend on how the watched set was chosen.
    pub trigger: Option<Trigger>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            presses: DEFAULT_AGGREGATE_PRESSES,
            press_ceiling: DEFAULT_PRESS_CEILING,
            terminal: DEFAULT_TERMINAL.to_string(),
            watched: None,
            trigger: None,
        }
    }
}

impl CampaignConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of presses for aggregate mode.
    pub fn with_presses(mut self, presses: u64) -> Self {
        self.presses = presses;
        self
    }

    /// Set the press ceiling for periodic mode.
    pub fn with_press_ceiling(mut self, press_ceiling: u64) -> Self {
        self.press_ceiling = press_ceiling;
        self
    }

    /// Set the terminal module name.
    pub fn with_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.terminal = terminal.into();
        self
    }

    /// Watch these modules instead of deriving them from the terminal.
    pub fn with_watched<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.watched = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Override the trigger rule.
    pub fn with_trigger(mut self, trigger: Trigger) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Check that the parameters make sense.
    pub fn validate(&self) -> Result<()> {
        if self.presses == 0 {
            return Err(PulseError::invalid_param("presses must be at least 1"));
        }
        if self.press_ceiling == 0 {
            return Err(PulseError::invalid_param("press ceiling must be at least 1"));
        }
        if self.terminal.is_empty() {
            return Err(PulseError::invalid_param("terminal module name is empty"));
        }
        if let Some(names) = &self.watched {
            if names.is_empty() {
                return Err(PulseError::invalid_param("watched module list is empty"));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
                return Err(PulseError::invalid_param(format!(
                    "module '{dup}' is watched twice"
                )));
            }
        }
        Ok(())
    }
}

/// Result of aggregate mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateReport {
    pub presses: u64,
    pub tally: PulseTally,
}

impl AggregateReport {
    /// Low pulses times high pulses.
    pub fn product(&self) -> Result<u64> {
        self.tally
            .low
            .checked_mul(self.tally.high)
            .ok_or_else(|| PulseError::overflow("low * high pulse product"))
    }
}

/// The press on which a watched module first fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedPeriod {
    pub name: String,
    pub press: u64,
}

/// Result of periodic-trigger mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodicOutcome {
    /// The terminal module sent a low pulse on this press.
    TerminalReached { presses: u64 },
    /// Every watched module fired; `lcm` combines their periods.
    Periods { periods: Vec<WatchedPeriod>, lcm: u64 },
}

impl PeriodicOutcome {
    /// Presses until the terminal first sends low.
    pub fn presses(&self) -> u64 {
        match self {
            PeriodicOutcome::TerminalReached { presses } => *presses,
            PeriodicOutcome::Periods { lcm, .. } => *lcm,
        }
    }

    /// Product of the raw periods, kept for diagnostics.
    pub fn period_product(&self) -> Option<u64> {
        match self {
            PeriodicOutcome::TerminalReached { .. } => None,
            PeriodicOutcome::Periods { periods, .. } => product_all(periods.iter().map(|p| p.press)),
        }
    }

    /// Least common multiple of the zero-based press indices, kept for
    /// diagnostics. A module that fires on the first press makes it 0.
    pub fn zero_based_lcm(&self) -> Option<u64> {
        match self {
            PeriodicOutcome::TerminalReached { .. } => None,
            PeriodicOutcome::Periods { periods, .. } => {
                lcm_all(periods.iter().map(|p| p.press - 1))
            }
        }
    }
}

/// Modules to watch for periodic mode.
///
/// The terminal must have exactly one predecessor and it must be a
/// conjunction; that conjunction's inputs are returned. `None` when the
/// network does not have this shape.
pub fn derive_watched(network: &Network, terminal: ModuleId) -> Option<Vec<ModuleId>> {
    let &[hub] = &network.module(terminal).inputs[..] else {
        return None;
    };
    let hub = network.module(hub);
    if !hub.is_conjunction() || hub.inputs.is_empty() {
        return None;
    }
    Some(hub.inputs.clone())
}

/// Runs button-press campaigns on one network.
pub struct Campaign {
    scheduler: Scheduler,
    config: CampaignConfig,
}

impl Campaign {
    /// Create a campaign for a network.
    pub fn new(network: Network, config: CampaignConfig) -> Result<Self> {
        config.validate()?;
        validate_network(&network)?;
        Ok(Self {
            scheduler: Scheduler::new(network),
            config,
        })
    }

    /// Press the button `config.presses` times and count every pulse.
    ///
    /// State carries over from press to press.
    pub fn aggregate(&mut self) -> Result<AggregateReport> {
        let mut tally = PulseTally::default();
        for _ in 0..self.config.presses {
            tally.merge(self.scheduler.press());
        }

        let report = AggregateReport {
            presses: self.config.presses,
            tally,
        };
        log::info!(
            "{} presses: {} low, {} high",
            report.presses,
            tally.low,
            tally.high
        );
        Ok(report)
    }

    /// Press until the terminal sends low or every watched module has
    /// fired once.
    ///
    /// A sink terminal sends nothing, so for a sink receiving low counts.
    pub fn find_periods(&mut self) -> Result<PeriodicOutcome> {
        let terminal = self.scheduler.network().find(&self.config.terminal);
        let (watched, trigger) = self.watch_plan(terminal)?;
        let mut periods: Vec<Option<u64>> = vec![None; watched.len()];

        for press in 1..=self.config.press_ceiling {
            let mut terminal_low = false;
            self.scheduler.press_observed(|delivery| {
                let target = delivery.event.target;
                if Some(target) == terminal && terminal_fires(delivery) {
                    terminal_low = true;
                }
                if let Some(slot) = watched.iter().position(|&id| id == target) {
                    if periods[slot].is_none() && trigger.fires(delivery) {
                        periods[slot] = Some(press);
                    }
                }
            });

            if terminal_low {
                log::info!("'{}' sent low on press {}", self.config.terminal, press);
                return Ok(PeriodicOutcome::TerminalReached { presses: press });
            }

            if !watched.is_empty() && periods.iter().all(Option::is_some) {
                return self.combine(&watched, &periods);
            }
        }

        Err(PulseError::PressCeilingExceeded {
            presses: self.config.press_ceiling,
            found: periods.iter().filter(|p| p.is_some()).count(),
            expected: watched.len(),
        })
    }

    /// Restore the network and clear counters.
    pub fn reset(&mut self) {
        self.scheduler.reset();
    }

    /// Get a reference to the scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Get the configuration.
    pub fn config(&self) -> &CampaignConfig {
        &self.config
    }

    fn watch_plan(&self, terminal: Option<ModuleId>) -> Result<(Vec<ModuleId>, Trigger)> {
        let network = self.scheduler.network();

        if let Some(names) = &self.config.watched {
            let ids = names
                .iter()
                .map(|name| network.require(name))
                .collect::<Result<Vec<_>>>()?;
            let trigger = self.config.trigger.unwrap_or(Trigger::MemorySaturated);
            check_trigger(network, &ids, trigger)?;
            return Ok((ids, trigger));
        }

        let terminal = terminal.ok_or_else(|| PulseError::module_not_found(&self.config.terminal))?;
        let trigger = self.config.trigger.unwrap_or(Trigger::EmitsHigh);
        match derive_watched(network, terminal) {
            Some(ids) => {
                check_trigger(network, &ids, trigger)?;
                log::debug!(
                    "watching {:?}",
                    ids.iter().map(|&id| network.name(id)).collect::<Vec<_>>()
                );
                Ok((ids, trigger))
            }
            None => {
                log::warn!(
                    "'{}' is not fed by a single conjunction; waiting for it to send low",
                    self.config.terminal
                );
                Ok((Vec::new(), trigger))
            }
        }
    }

    fn combine(&self, watched: &[ModuleId], periods: &[Option<u64>]) -> Result<PeriodicOutcome> {
        let network = self.scheduler.network();
        let periods: Vec<WatchedPeriod> = watched
            .iter()
            .zip(periods)
            .filter_map(|(&id, press)| {
                press.map(|press| WatchedPeriod {
                    name: network.name(id).to_string(),
                    press,
                })
            })
            .collect();

        let lcm = lcm_all(periods.iter().map(|p| p.press))
            .ok_or_else(|| PulseError::overflow("least common multiple of periods"))?;

        let outcome = PeriodicOutcome::Periods { periods, lcm };
        log::info!(
            "periods found, lcm {} (product {:?}, zero-based lcm {:?})",
            lcm,
            outcome.period_product(),
            outcome.zero_based_lcm()
        );
        Ok(outcome)
    }
}

fn terminal_fires(delivery: &Delivery<'_>) -> bool {
    if delivery.module.is_sink() {
        delivery.event.pulse.is_low()
    } else {
        delivery.emitted == Some(Pulse::Low)
    }
}

/// A saturation trigger only makes sense on conjunctions.
fn check_trigger(network: &Network, watched: &[ModuleId], trigger: Trigger) -> Result<()> {
    if trigger != Trigger::MemorySaturated {
        return Ok(());
    }
    match watched.iter().find(|&&id| !network.module(id).is_conjunction()) {
        Some(&id) => Err(PulseError::invalid_param(format!(
            "watched module '{}' is not a conjunction and can never saturate",
            network.name(id)
        ))),
        None => Ok(()),
    }
}

/// Results of both campaign modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    /// Low times high pulses over the aggregate presses
    pub part1: u64,
    /// Presses until the terminal sends low
    pub part2: u64,
}

/// Parse a network and run both modes with the default configuration.
pub fn solve(input: &str) -> Result<Solution> {
    solve_with(input, &CampaignConfig::default())
}

/// Parse a network and run both modes.
///
/// The network is reset between the modes.
pub fn solve_with(input: &str, config: &CampaignConfig) -> Result<Solution> {
    let network = Network::parse(input)?;
    let mut campaign = Campaign::new(network, config.clone())?;

    let part1 = campaign.aggregate()?.product()?;
    campaign.reset();
    let part2 = campaign.find_periods()?.presses();

    Ok(Solution { part1, part2 })
}
