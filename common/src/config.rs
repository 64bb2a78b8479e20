//! Dashboard configuration.
//!
//! Every field has a default matching the observed behaviour of the mock
//! backend, and deserialization fills in whatever a partial JSON file leaves
//! out. The backend serves the effective configuration at `/api/config`.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionTargets};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub assessments: PageSizeConfig,
    pub examinees: PageSizeConfig,
    pub failures: FailurePolicy,
    pub latency: LatencyProfile,
    pub targets: ActionTargets,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            assessments: PageSizeConfig {
                offered: vec![10, 25, 50],
                default_size: 10,
            },
            examinees: PageSizeConfig {
                offered: vec![10, 25, 50, 100],
                default_size: 10,
            },
            failures: FailurePolicy::default(),
            latency: LatencyProfile::default(),
            targets: ActionTargets::default(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assessments.validate("assessments")?;
        self.examinees.validate("examinees")?;
        self.failures.validate()?;
        self.latency.validate()
    }
}

/// Page sizes a screen offers and the one it starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeConfig {
    pub offered: Vec<usize>,
    pub default_size: usize,
}

impl PageSizeConfig {
    fn validate(&self, screen: &'static str) -> Result<(), ConfigError> {
        if self.offered.is_empty() || self.offered.contains(&0) {
            return Err(ConfigError::EmptyPageSizes { screen });
        }
        if !self.offered.contains(&self.default_size) {
            return Err(ConfigError::DefaultPageSizeNotOffered {
                screen,
                size: self.default_size,
            });
        }
        Ok(())
    }
}

/// Probability that each kind of simulated request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailurePolicy {
    pub load: f64,
    pub sync: f64,
    pub examinee_action: f64,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self {
            load: 0.0,
            sync: 0.10,
            examinee_action: 0.15,
        }
    }
}

impl FailurePolicy {
    pub fn never() -> Self {
        Self {
            load: 0.0,
            sync: 0.0,
            examinee_action: 0.0,
        }
    }

    pub fn always() -> Self {
        Self {
            load: 1.0,
            sync: 1.0,
            examinee_action: 1.0,
        }
    }

    pub fn for_action(&self, action: Action) -> f64 {
        match action {
            Action::Sync => self.sync,
            Action::ResetTimer | Action::RestartSession | Action::SwitchToPaper => {
                self.examinee_action
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("load", self.load),
            ("sync", self.sync),
            ("examineeAction", self.examinee_action),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// Inclusive range a simulated round-trip is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    pub const fn between(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    pub const fn fixed(ms: u64) -> Self {
        Self::between(ms, ms)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let ms = if self.max_ms > self.min_ms {
            rng.gen_range(self.min_ms..=self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyProfile {
    pub fetch_assessments: LatencyRange,
    pub fetch_assessment: LatencyRange,
    pub fetch_submissions: LatencyRange,
    pub student_details: LatencyRange,
    pub sync: LatencyRange,
    pub examinee_action: LatencyRange,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            fetch_assessments: LatencyRange::between(300, 1000),
            fetch_assessment: LatencyRange::fixed(200),
            fetch_submissions: LatencyRange::fixed(500),
            student_details: LatencyRange::fixed(300),
            sync: LatencyRange::between(1500, 2500),
            examinee_action: LatencyRange::between(1000, 1500),
        }
    }
}

impl LatencyProfile {
    pub fn instant() -> Self {
        let zero = LatencyRange::fixed(0);
        Self {
            fetch_assessments: zero,
            fetch_assessment: zero,
            fetch_submissions: zero,
            student_details: zero,
            sync: zero,
            examinee_action: zero,
        }
    }

    pub fn for_action(&self, action: Action) -> LatencyRange {
        match action {
            Action::Sync => self.sync,
            Action::ResetTimer | Action::RestartSession | Action::SwitchToPaper => {
                self.examinee_action
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, range) in [
            ("fetchAssessments", self.fetch_assessments),
            ("fetchAssessment", self.fetch_assessment),
            ("fetchSubmissions", self.fetch_submissions),
            ("studentDetails", self.student_details),
            ("sync", self.sync),
            ("examineeAction", self.examinee_action),
        ] {
            if range.min_ms > range.max_ms {
                return Err(ConfigError::InvalidLatency {
                    name,
                    min_ms: range.min_ms,
                    max_ms: range.max_ms,
                });
            }
        }
        Ok(())
    }
}
