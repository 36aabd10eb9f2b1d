//! Task file loading.
//!
//! One task per line: `name priority burst`, whitespace-separated.
//! Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! # name priority burst
//! T1 4 20
//! T2 2 25
//! ```
//!
//! Parsing errors live in their own domain ([`LoadError`]); the engine
//! only ever sees a well-formed, in-capacity [`TaskRegistry`].

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::error::ScheduleError;
use crate::models::TaskRegistry;

/// Errors raised while reading a task file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read task file: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Registry(#[from] ScheduleError),
}

/// Reads and parses a task file.
pub fn load_file(path: impl AsRef<Path>, capacity: usize) -> Result<TaskRegistry, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "task file read");
    parse_tasks(&content, capacity)
}

/// Parses task records into a registry of the given capacity.
///
/// Negative bursts are accepted here and rejected by the engine's
/// precondition checks.
pub fn parse_tasks(input: &str, capacity: usize) -> Result<TaskRegistry, LoadError> {
    let mut registry = TaskRegistry::with_capacity(capacity);

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, priority, burst) = parse_record(line).map_err(|reason| LoadError::Malformed {
            line: idx + 1,
            reason,
        })?;
        registry.register(name, priority, burst)?;
    }

    Ok(registry)
}

fn parse_record(line: &str) -> Result<(&str, i32, i64), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, priority, burst] = fields.as_slice() else {
        return Err(format!(
            "expected 'name priority burst', found {} field(s)",
            fields.len()
        ));
    };

    let priority = priority
        .parse::<i32>()
        .map_err(|e| format!("invalid priority '{priority}': {e}"))?;
    let burst = burst
        .parse::<i64>()
        .map_err(|e| format!("invalid burst '{burst}': {e}"))?;

    Ok((*name, priority, burst))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_tasks() {
        let input = "# name priority burst\nT1 4 20\n\n  T2 2 25  \nT3\t3\t25\n";
        let registry = parse_tasks(input, 10).unwrap();

        assert_eq!(registry.len(), 3);
        let t2 = registry.get(1).unwrap();
        assert_eq!(t2.name, "T2");
        assert_eq!(t2.priority, 2);
        assert_eq!(t2.burst, 25);
        assert_eq!(registry.get(2).unwrap().name, "T3");
    }

    #[test]
    fn test_malformed_field_count() {
        let err = parse_tasks("T1 4 20\nT2 4\n", 10).unwrap_err();
        match err {
            LoadError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("2 field(s)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_number() {
        let err = parse_tasks("T1 high 20\n", 10).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 1, .. }));
        assert!(err.to_string().contains("invalid priority 'high'"));
    }

    #[test]
    fn test_negative_burst_parsed() {
        let registry = parse_tasks("T1 1 -5\n", 10).unwrap();
        assert_eq!(registry.get(0).unwrap().burst, -5);
    }

    #[test]
    fn test_capacity_exceeded() {
        let input: String = (0..4).map(|i| format!("T{i} 1 5\n")).collect();
        let err = parse_tasks(&input, 3).unwrap_err();
        match err {
            LoadError::Registry(e) => assert_eq!(e.kind(), ErrorKind::Capacity),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/nonexistent/tasks.txt", 10).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("cpu-sched-sim-{}.txt", std::process::id()));
        fs::write(&path, "A 1 5\nB 1 3\n").unwrap();
        let registry = load_file(&path, 10).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
