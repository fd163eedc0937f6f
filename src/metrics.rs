use std::sync::Mutex;
use sysinfo::System;
use thiserror::Error;

/// Errors raised while sampling host metrics.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("host metrics unavailable: {0}")]
    Unavailable(String),
    #[error("metrics sampler lock poisoned by an earlier panic")]
    Poisoned,
    #[error("metrics collection panicked: {0}")]
    Panicked(String),
}

/// One reading of host CPU and memory utilization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSnapshot {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_available: u64,
}

/// Source of host resource metrics for the detailed health report.
#[cfg_attr(test, mockall::automock)]
pub trait MetricsSource: Send + Sync {
    fn snapshot(&self) -> Result<HostSnapshot, MetricsError>;
}

/// Host metrics read through `sysinfo`.
///
/// CPU usage is the average over the interval since the previous sample, so
/// the sampler keeps its `System` across calls. The first reading after
/// construction is 0%.
pub struct SystemMetrics {
    system: Mutex<System>,
}

impl SystemMetrics {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_cpu_usage();
        Self {
            system: Mutex::new(system),
        }
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsSource for SystemMetrics {
    fn snapshot(&self) -> Result<HostSnapshot, MetricsError> {
        // A panic during an earlier refresh is reported once; the next poll reads normally.
        let mut system = match self.system.lock() {
            Ok(guard) => guard,
            Err(_) => {
                self.system.clear_poison();
                return Err(MetricsError::Poisoned);
            }
        };
        system.refresh_cpu_usage();
        system.refresh_memory();

        let cpu = f64::from(system.global_cpu_usage());
        if !cpu.is_finite() {
            return Err(MetricsError::Unavailable(format!(
                "cpu usage reading is not a number: {cpu}"
            )));
        }

        let total = system.total_memory();
        if total == 0 {
            return Err(MetricsError::Unavailable(
                "total memory reported as zero".to_string(),
            ));
        }
        let available = system.available_memory().min(total);
        let used = total - available;

        Ok(HostSnapshot {
            cpu_percent: cpu.clamp(0.0, 100.0),
            memory_percent: used as f64 / total as f64 * 100.0,
            memory_available: available,
        })
    }
}
