use serde::{Deserialize, Serialize};

use crate::models::{Policy, DEFAULT_CAPACITY};

/// Default Round-Robin quantum.
pub const DEFAULT_QUANTUM: i64 = 10;

/// Simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Dispatch policy to run.
    pub policy: Policy,
    /// Round-Robin time slice. Ignored by the other policies.
    pub quantum: i64,
    /// Maximum number of tasks accepted by the engine.
    pub capacity: usize,
}

impl SimulationConfig {
    /// Creates a configuration for the given policy with default limits.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            quantum: DEFAULT_QUANTUM,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the task capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(Policy::default())
    }
}
