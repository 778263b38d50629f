use crate::parser::model::RunnerPlatform;
use serde::{Deserialize, Serialize};

/// GitHub Actions pricing per minute by runner type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerPricing {
    pub linux_per_min: f64,
    pub windows_per_min: f64,
    pub macos_per_min: f64,
}

impl Default for RunnerPricing {
    fn default() -> Self {
        Self {
            linux_per_min: 0.008,
            windows_per_min: 0.016,
            macos_per_min: 0.08,
        }
    }
}

impl RunnerPricing {
    pub fn rate(&self, platform: RunnerPlatform) -> f64 {
        match platform {
            RunnerPlatform::Linux => self.linux_per_min,
            RunnerPlatform::Windows => self.windows_per_min,
            RunnerPlatform::MacOs => self.macos_per_min,
        }
    }
}

/// Heuristic monthly cost model.
///
/// A job is assumed to run for `min(timeout, billed_minutes_cap)` minutes,
/// `runs_per_month` times a month, once per matrix combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModel {
    pub pricing: RunnerPricing,
    pub billed_minutes_cap: f64,
    pub runs_per_month: u32,
    /// Minutes assumed for jobs without a numeric `timeout-minutes`.
    pub default_timeout_minutes: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            pricing: RunnerPricing::default(),
            billed_minutes_cap: 15.0,
            runs_per_month: 100,
            default_timeout_minutes: 30.0,
        }
    }
}

impl CostModel {
    /// Minutes billed per run for a given timeout. Never negative.
    pub fn billed_minutes(&self, timeout_minutes: f64) -> f64 {
        timeout_minutes.min(self.billed_minutes_cap).max(0.0)
    }

    /// Estimated monthly cost of one job.
    pub fn estimate_job_cost(
        &self,
        platform: RunnerPlatform,
        timeout_minutes: f64,
        matrix_fanout: u64,
    ) -> f64 {
        self.pricing.rate(platform)
            * self.billed_minutes(timeout_minutes)
            * self.runs_per_month as f64
            * matrix_fanout as f64
    }
}

/// Estimate a job's monthly cost with the default pricing.
pub fn estimate_job_cost(platform: RunnerPlatform, timeout_minutes: f64, matrix_fanout: u64) -> f64 {
    CostModel::default().estimate_job_cost(platform, timeout_minutes, matrix_fanout)
}
