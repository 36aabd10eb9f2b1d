use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use cpu_sched_sim::config::{SimulationConfig, DEFAULT_QUANTUM};
use cpu_sched_sim::dispatching::{ChannelObserver, DispatchEngine, NoopObserver, ScheduleOutcome};
use cpu_sched_sim::error::{ErrorKind, ScheduleError};
use cpu_sched_sim::loader::{self, LoadError};
use cpu_sched_sim::metrics::ScheduleSummary;
use cpu_sched_sim::models::{Policy, TaskRegistry, DEFAULT_CAPACITY};
use cpu_sched_sim::workload::WorkloadGenerator;

const USAGE: &str = "Usage: cpu-sched-sim <task-file | --random N> <fcfs|sjf|srtf|rr> \
[--quantum N] [--capacity N] [--seed N] [--pace-ms N] [--json]";

const EXIT_USAGE: u8 = 1;
const EXIT_IO: u8 = 2;
const EXIT_CONFIG: u8 = 3;
const EXIT_PRECONDITION: u8 = 4;

enum Source {
    File(String),
    Random(usize),
}

struct Args {
    source: Source,
    policy: String,
    quantum: i64,
    capacity: usize,
    seed: u64,
    /// Wall-clock delay per simulated time unit in the slice reporter.
    pace_ms: u64,
    json: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut random = None;
    let mut quantum = DEFAULT_QUANTUM;
    let mut capacity = DEFAULT_CAPACITY;
    let mut seed = 0;
    let mut pace_ms = 0;
    let mut json = false;

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--quantum" => quantum = option_value(&mut argv, "--quantum")?,
            "--capacity" => capacity = option_value(&mut argv, "--capacity")?,
            "--seed" => seed = option_value(&mut argv, "--seed")?,
            "--pace-ms" => pace_ms = option_value(&mut argv, "--pace-ms")?,
            "--random" => random = Some(option_value(&mut argv, "--random")?),
            "--json" => json = true,
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
            _ => positional.push(arg),
        }
    }

    let (source, policy) = match (random, positional.as_slice()) {
        (Some(n), [policy]) => (Source::Random(n), policy.clone()),
        (None, [file, policy]) => (Source::File(file.clone()), policy.clone()),
        _ => return Err("expected a task file (or --random N) and an algorithm".into()),
    };

    Ok(Args {
        source,
        policy,
        quantum,
        capacity,
        seed,
        pace_ms,
        json,
    })
}

fn option_value<T: std::str::FromStr>(
    argv: &mut impl Iterator<Item = String>,
    name: &str,
) -> Result<T, String> {
    let raw = argv
        .next()
        .ok_or_else(|| format!("{name} requires a value"))?;
    raw.parse()
        .map_err(|_| format!("invalid value '{raw}' for {name}"))
}

fn exit_status(err: &ScheduleError) -> u8 {
    match err.kind() {
        ErrorKind::Configuration => EXIT_CONFIG,
        ErrorKind::Precondition | ErrorKind::Capacity => EXIT_PRECONDITION,
    }
}

fn exit_code(err: &ScheduleError) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn load(args: &Args) -> Result<TaskRegistry, LoadError> {
    match &args.source {
        Source::File(path) => loader::load_file(path, args.capacity),
        Source::Random(count) => Ok(WorkloadGenerator::new(args.seed)
            .generate_into(TaskRegistry::with_capacity(args.capacity), *count)?),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error if a subscriber is already set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Wall-clock time the reporter spends on a slice of `length` units.
fn pace(length: i64, pace_ms: u64) -> Duration {
    let units = u64::try_from(length).unwrap_or(0);
    Duration::from_millis(units.saturating_mul(pace_ms))
}

/// Runs with a reporter thread printing each slice as it is dispatched.
///
/// With `pace_ms > 0` the reporter sleeps for each slice's length, so the
/// output plays back at wall-clock speed. Dispatch never waits on it.
fn run_reported(
    engine: &DispatchEngine,
    registry: TaskRegistry,
    pace_ms: u64,
) -> Result<ScheduleOutcome, ScheduleError> {
    let (mut observer, events) = ChannelObserver::channel();
    let reporter = thread::spawn(move || {
        for event in events {
            println!(
                "Running task {} (tid: {}) for {} units at t={}",
                event.task_name, event.task_id, event.length, event.start
            );
            if pace_ms > 0 {
                thread::sleep(pace(event.length, pace_ms));
            }
        }
    });

    let outcome = engine.run_observed(registry, &mut observer);
    drop(observer);
    if reporter.join().is_err() {
        eprintln!("warning: slice reporter panicked");
    }
    outcome
}

fn print_summary(summary: &ScheduleSummary) {
    for task in &summary.tasks {
        println!(
            "Task {} (tid: {}) - Waiting time: {}, Turnaround time: {}, Response time: {}",
            task.name, task.id, task.waiting, task.turnaround, task.response
        );
    }
    println!("Average Waiting Time: {:.2}", summary.avg_waiting);
    println!("Average Turnaround Time: {:.2}", summary.avg_turnaround);
    println!("Average Response Time: {:.2}", summary.avg_response);
}

fn main() -> ExitCode {
    init_logging();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("error: {msg}");
            }
            eprintln!("{USAGE}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let policy: Policy = match args.policy.parse() {
        Ok(policy) => policy,
        Err(err) => {
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };

    let registry = match load(&args) {
        Ok(registry) => registry,
        Err(LoadError::Registry(err)) => {
            eprintln!("error: {err}");
            return exit_code(&err);
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_IO);
        }
    };

    let config = SimulationConfig::new(policy)
        .with_quantum(args.quantum)
        .with_capacity(args.capacity);
    let engine = DispatchEngine::new(config);

    let result = if args.json {
        engine.run_observed(registry, &mut NoopObserver)
    } else {
        run_reported(&engine, registry, args.pace_ms)
    };

    let summary = match result.and_then(|outcome| outcome.summary()) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("error: {err}");
            return exit_code(&err);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(EXIT_IO);
            }
        }
    } else {
        print_summary(&summary);
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_file_args() {
        let parsed = args(&["tasks.txt", "rr", "--quantum", "4", "--json"]).unwrap();
        assert!(matches!(parsed.source, Source::File(ref f) if f == "tasks.txt"));
        assert_eq!(parsed.policy, "rr");
        assert_eq!(parsed.quantum, 4);
        assert_eq!(parsed.capacity, DEFAULT_CAPACITY);
        assert_eq!(parsed.pace_ms, 0);
        assert!(parsed.json);
    }

    #[test]
    fn test_parse_random_args() {
        let parsed = args(&["--random", "6", "--seed", "9", "srtf"]).unwrap();
        assert!(matches!(parsed.source, Source::Random(6)));
        assert_eq!(parsed.seed, 9);
        assert_eq!(parsed.policy, "srtf");
    }

    #[test]
    fn test_parse_pace() {
        let parsed = args(&["tasks.txt", "fcfs", "--pace-ms", "5"]).unwrap();
        assert_eq!(parsed.pace_ms, 5);
        assert!(args(&["tasks.txt", "fcfs", "--pace-ms", "-1"]).is_err());
    }

    #[test]
    fn test_pace_duration() {
        assert_eq!(pace(4, 10), Duration::from_millis(40));
        assert_eq!(pace(0, 10), Duration::ZERO);
        assert_eq!(pace(i64::MAX, u64::MAX), Duration::from_millis(u64::MAX));
    }

    #[test]
    fn test_paced_report_matches_unpaced() {
        let registry = TaskRegistry::from_bursts(10, [("X", 3), ("Y", 2)]).unwrap();
        let engine = DispatchEngine::new(SimulationConfig::new(Policy::RoundRobin).with_quantum(2));
        let paced = run_reported(&engine, registry.clone(), 1).unwrap();
        let plain = engine.run(registry).unwrap();
        assert_eq!(paced, plain);
    }

    #[test]
    fn test_parse_errors() {
        assert!(args(&["tasks.txt"]).is_err());
        assert!(args(&["tasks.txt", "rr", "--quantum"]).is_err());
        assert!(args(&["tasks.txt", "rr", "--quantum", "x"]).is_err());
        assert!(args(&["tasks.txt", "rr", "--bogus"]).is_err());
    }

    #[test]
    fn test_exit_codes_distinct() {
        let config = exit_status(&ScheduleError::UnknownPolicy("xyz".into()));
        let precondition = exit_status(&ScheduleError::EmptyTaskList);
        let capacity = exit_status(&ScheduleError::CapacityExceeded {
            count: 11,
            capacity: 10,
        });
        assert_eq!(config, EXIT_CONFIG);
        assert_eq!(precondition, EXIT_PRECONDITION);
        assert_eq!(capacity, EXIT_PRECONDITION);
        assert_ne!(config, EXIT_IO);
    }
}
