//! Scheduling policy names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// One of the four supported dispatch policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First-Come-First-Served.
    #[default]
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive, 1-unit ticks).
    Srtf,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Policy {
    /// All policies, in CLI listing order.
    pub const ALL: [Policy; 4] = [Policy::Fcfs, Policy::Sjf, Policy::Srtf, Policy::RoundRobin];

    /// Canonical short name (`"fcfs"`, `"sjf"`, `"srtf"`, `"rr"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "rr",
        }
    }

    /// Whether a running task can be interrupted before completion.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Self::Srtf | Self::RoundRobin)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ScheduleError::UnknownPolicy(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("fcfs".parse::<Policy>().unwrap(), Policy::Fcfs);
        assert_eq!("sjf".parse::<Policy>().unwrap(), Policy::Sjf);
        assert_eq!("srtf".parse::<Policy>().unwrap(), Policy::Srtf);
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!(" RR ".parse::<Policy>().unwrap(), Policy::RoundRobin);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "xyz".parse::<Policy>().unwrap_err();
        assert_eq!(err, ScheduleError::UnknownPolicy("xyz".into()));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_display_round_trips() {
        for policy in Policy::ALL {
            assert_eq!(policy.to_string().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_preemptive() {
        assert!(!Policy::Fcfs.is_preemptive());
        assert!(!Policy::Sjf.is_preemptive());
        assert!(Policy::Srtf.is_preemptive());
        assert!(Policy::RoundRobin.is_preemptive());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Policy::RoundRobin).unwrap(), "\"rr\"");
        let p: Policy = serde_json::from_str("\"srtf\"").unwrap();
        assert_eq!(p, Policy::Srtf);
    }
}
