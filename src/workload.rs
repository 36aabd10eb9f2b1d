//! Random workload generation.
//!
//! Produces reproducible task sets for benchmarking policies against each
//! other. The same seed always yields the same registry.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScheduleError;
use crate::models::TaskRegistry;

/// Seeded generator of random task sets.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    bursts: RangeInclusive<i64>,
    priorities: RangeInclusive<i32>,
}

impl WorkloadGenerator {
    /// Creates a generator with bursts in `1..=20` and priorities in `1..=10`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            bursts: 1..=20,
            priorities: 1..=10,
        }
    }

    /// Sets the inclusive burst range. Empty ranges collapse to their start.
    pub fn with_bursts(mut self, bursts: RangeInclusive<i64>) -> Self {
        self.bursts = bursts;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priorities(mut self, priorities: RangeInclusive<i32>) -> Self {
        self.priorities = priorities;
        self
    }

    /// Generates `count` tasks named `T1..=Tcount` into a registry sized
    /// to hold exactly `count` tasks.
    pub fn generate(&self, count: usize) -> Result<TaskRegistry, ScheduleError> {
        self.generate_into(TaskRegistry::with_capacity(count), count)
    }

    /// Generates `count` tasks into an existing registry.
    pub fn generate_into(
        &self,
        mut registry: TaskRegistry,
        count: usize,
    ) -> Result<TaskRegistry, ScheduleError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        for i in 0..count {
            let burst = sample(&mut rng, &self.bursts);
            let priority = sample(&mut rng, &self.priorities);
            registry.register(format!("T{}", i + 1), priority, burst)?;
        }
        Ok(registry)
    }
}

fn sample<T>(rng: &mut StdRng, range: &RangeInclusive<T>) -> T
where
    T: rand::distr::uniform::SampleUniform + PartialOrd + Copy,
{
    if range.is_empty() {
        *range.start()
    } else {
        rng.random_range(*range.start()..=*range.end())
    }
}
