//! CPU and memory usage, per container and in total.
//!
//! The total memory is taken from `docker info` rather than summed from the
//! per-container limits: every container without a limit reports the whole host
//! memory, so the sum would count it once per container.

use crate::config::Config;
use crate::report::{CheckResult, Status, Thresholds};
use crate::stats::ContainerStats;

/// Running sums over all sampled containers.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Totals {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub memory_used: u64,
}

impl Totals {
    fn add(&mut self, sample: &ContainerStats) {
        self.cpu_percent += sample.cpu_percent;
        self.memory_percent += sample.memory_percent;
        self.memory_used += sample.memory_used;
    }
}

/// Evaluates the stats snapshot.
///
/// Emits per-container cpu and memory results when
/// [`Config::display_all_containers`] is set, followed by `Docker_CPU_Total` and,
/// when the host memory is known, `Docker_Memory_Total`.
pub fn container_metrics(
    samples: &[ContainerStats],
    host_memory: Option<u64>,
    config: &Config,
) -> Vec<CheckResult> {
    let mut results = Vec::with_capacity(samples.len() * 2 + 2);
    let mut totals = Totals::default();

    for sample in samples {
        if config.display_all_containers {
            results.push(cpu_result(
                format!("Container_CPU_{}", sample.name),
                sample.cpu_percent,
                &config.cpu,
                "Container currently utilising",
            ));
            results.push(container_memory(sample, &config.memory));
        }
        totals.add(sample);
    }
    log::debug!("container totals: {totals:?}");

    results.push(cpu_result(
        "Docker_CPU_Total".to_owned(),
        totals.cpu_percent,
        &config.cpu,
        "Docker containers currently utilising",
    ));

    match host_memory {
        Some(total) => results.push(total_memory(totals.memory_used, total, &config.memory)),
        None => log::warn!("host memory unknown, skipping Docker_Memory_Total"),
    }

    results
}

fn cpu_result(name: String, cpu: f64, thresholds: &Thresholds, subject: &str) -> CheckResult {
    CheckResult::new(
        thresholds.evaluate(cpu),
        name,
        format!("CPU_Usage%={cpu:.2};{};;", thresholds.perf_levels()),
        format!("{subject} {cpu:.2}% of cpu"),
    )
}

fn container_memory(sample: &ContainerStats, thresholds: &Thresholds) -> CheckResult {
    // docker occasionally reports a zero limit; one extra byte keeps the division
    // defined without visibly changing the percentage.
    let total = sample.memory_limit + 1;
    let used = sample.memory_used;
    let percent = percent_of(used, total);
    let (warn, crit) = thresholds.levels_for(total);

    CheckResult::new(
        thresholds.evaluate(percent),
        format!("Container_Memory_{}", sample.name),
        format!("Memory_Usage={used};{warn};{crit};0;{total}"),
        format!("Container currently utilising {used} of {total} = {percent:.2}% utilised"),
    )
}

fn total_memory(used: u64, host_memory: u64, thresholds: &Thresholds) -> CheckResult {
    let total = host_memory.max(1);
    let percent = percent_of(used, total);
    let (warn, crit) = thresholds.levels_for(total);

    CheckResult::new(
        thresholds.evaluate(percent),
        "Docker_Memory_Total",
        format!("Memory_Usage={used};{warn};{crit};0;{total}"),
        format!("Total memory usage is {used} of {total} or {percent:.2}%"),
    )
}

fn percent_of(used: u64, total: u64) -> f64 {
    100.0 / total as f64 * used as f64
}
