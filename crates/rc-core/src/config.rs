//! Scenario configuration.
//!
//! Plain-data structs, typically filled in by the driver (or loaded from a
//! file with the `serde` feature) and passed to the transforms in
//! `rc-scenario`.  Every struct has a `validate` that rejects values the
//! transforms cannot honour; the defaults are always valid.

use crate::{CoreError, CoreResult, ScenarioRng};

/// The smallest number of disruption events a run may request.
pub const MIN_EVENT_EDGES: usize = 3;

// ── CongestionConfig ──────────────────────────────────────────────────────────

/// Rush-hour multiplier distribution: `Normal(mean, stdev)` clamped to
/// `[min_multiplier, max_multiplier]`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CongestionConfig {
    pub mean:           f64,
    pub stdev:          f64,
    /// Lower clamp.  At least 1.0 so congestion never shortens a route.
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl Default for CongestionConfig {
    fn default() -> Self {
        Self { mean: 2.0, stdev: 0.5, min_multiplier: 1.0, max_multiplier: 3.0 }
    }
}

impl CongestionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let all_finite = [self.mean, self.stdev, self.min_multiplier, self.max_multiplier]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(config_err("congestion parameters must be finite"));
        }
        if self.stdev < 0.0 {
            return Err(config_err(format!("congestion stdev {} is negative", self.stdev)));
        }
        if self.min_multiplier < 1.0 || self.min_multiplier > self.max_multiplier {
            return Err(config_err(format!(
                "congestion clamp [{}, {}] must satisfy 1.0 <= min <= max",
                self.min_multiplier, self.max_multiplier
            )));
        }
        Ok(())
    }

    /// Clamp a raw draw into the configured range.
    #[inline]
    pub fn clamp(&self, multiplier: f64) -> f64 {
        multiplier.clamp(self.min_multiplier, self.max_multiplier)
    }
}

// ── DisruptionConfig ──────────────────────────────────────────────────────────

/// How actions are assigned to the sampled event edges.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisruptionPolicy {
    /// The first sampled edge is the delay candidate; every other sampled
    /// edge is a blockage candidate.
    #[default]
    FirstDelayRestBlock,
    /// Each sampled edge independently becomes a delay candidate with
    /// probability `delay_probability`, otherwise a blockage candidate.
    Uniform { delay_probability: f64 },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisruptionConfig {
    /// Number of distinct undirected edges to put at risk.
    pub event_count:         usize,
    /// Chance that an at-risk edge's event actually fires.
    pub trigger_probability: f64,
    /// Duration multiplier for a triggered severe delay.
    pub severe_delay_factor: f64,
    pub policy:              DisruptionPolicy,
}

impl Default for DisruptionConfig {
    fn default() -> Self {
        Self {
            event_count:         MIN_EVENT_EDGES,
            trigger_probability: 0.2,
            severe_delay_factor: 10.0,
            policy:              DisruptionPolicy::FirstDelayRestBlock,
        }
    }
}

impl DisruptionConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.event_count < MIN_EVENT_EDGES {
            return Err(config_err(format!(
                "event_count {} is below the minimum of {MIN_EVENT_EDGES}",
                self.event_count
            )));
        }
        self.validate_draws()
    }

    /// Check only the fields that govern outcome draws, leaving
    /// `event_count` to whoever selects the event edges.
    pub fn validate_draws(&self) -> CoreResult<()> {
        check_probability("trigger_probability", self.trigger_probability)?;
        if !self.severe_delay_factor.is_finite() || self.severe_delay_factor < 1.0 {
            return Err(config_err(format!(
                "severe_delay_factor {} must be finite and >= 1.0",
                self.severe_delay_factor
            )));
        }
        if let DisruptionPolicy::Uniform { delay_probability } = self.policy {
            check_probability("delay_probability", delay_probability)?;
        }
        Ok(())
    }
}

// ── TrafficConfig ─────────────────────────────────────────────────────────────

/// Spread-traffic model: a fraction of routes gets a random delay in
/// `[min_delay, max_delay]`, and `blockages` of those are closed outright.
///
/// The multiplier distribution is `Normal((min+max)/2, (max-min)/6)`, which
/// keeps ~99.7 % of raw draws inside the range before clamping.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficConfig {
    pub min_delay:    f64,
    pub max_delay:    f64,
    /// Share of routes affected, in [0, 1].  0 = none, 1 = all.
    pub distribution: f64,
    /// Number of affected routes that become blockages.
    pub blockages:    usize,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self { min_delay: 1.0, max_delay: 1.0, distribution: 1.0, blockages: 0 }
    }
}

impl TrafficConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !self.min_delay.is_finite() || !self.max_delay.is_finite() {
            return Err(config_err("traffic delays must be finite"));
        }
        if self.min_delay < 1.0 || self.min_delay > self.max_delay {
            return Err(config_err(format!(
                "traffic delay range [{}, {}] must satisfy 1.0 <= min <= max",
                self.min_delay, self.max_delay
            )));
        }
        check_probability("distribution", self.distribution)
    }

    #[inline]
    pub fn mean(&self) -> f64 {
        (self.min_delay + self.max_delay) / 2.0
    }

    #[inline]
    pub fn stdev(&self) -> f64 {
        (self.max_delay - self.min_delay) / 6.0
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Top-level configuration for one scenario run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioConfig {
    /// Master RNG seed.  The same seed always produces identical scenarios.
    pub seed:       u64,
    pub congestion: CongestionConfig,
    pub disruption: DisruptionConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed:       42,
            congestion: CongestionConfig::default(),
            disruption: DisruptionConfig::default(),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> CoreResult<()> {
        self.congestion.validate()?;
        self.disruption.validate()
    }

    /// Construct the run's random source.
    pub fn make_rng(&self) -> ScenarioRng {
        ScenarioRng::new(self.seed)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config_err(msg: impl Into<String>) -> CoreError {
    CoreError::Config(msg.into())
}

fn check_probability(field: &str, p: f64) -> CoreResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(config_err(format!("{field} {p} must lie in [0, 1]")))
    }
}
