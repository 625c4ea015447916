//! strpass - string passing micro-benchmarks
//!
//! Measures the relative runtime cost of different ways to pass and return
//! string-like values in Rust: owning strings behind a reference, borrowed
//! views, clone-on-write wrappers, freshly allocated owned strings, and a
//! refcounted third-party buffer type.
//!
//! The harness repeats every benchmark over many timed trials, keeps the
//! minimum duration per execution, and runs the benchmarks in mirrored order
//! each round so systematic bias cancels out. A checksum folded through every
//! loop keeps the measured work observable.

pub mod checksum;
pub mod corpus;
pub mod error;
pub mod report;
pub mod runner;
pub mod sink;
pub mod timer;
pub mod variants;

// Re-export commonly used types
pub use checksum::Checksum;
pub use corpus::Corpus;
pub use error::{BenchError, BenchResult};
pub use report::{Report, SuiteReport};
pub use runner::{run_rounds, Benchmark, Measurement, RunConfig, Tally};
pub use sink::Sink;
pub use timer::StopWatch;

/// Which benchmark suites a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteSelection {
    Arguments,
    Returns,
    All,
}

/// Run the selected suites and collect a report.
///
/// # Example
/// ```
/// use strpass::{run_suites, RunConfig, SuiteSelection};
///
/// let config = RunConfig {
///     rounds: 1,
///     trials: 2,
///     reps: 12,
/// };
/// let report = run_suites(&config, SuiteSelection::Returns).unwrap();
/// assert_eq!(report.suites.len(), 1);
/// ```
pub fn run_suites(config: &RunConfig, selection: SuiteSelection) -> BenchResult<Report> {
    config.validate()?;

    let corpus = Corpus::greetings();
    let mut suites = Vec::new();

    if matches!(selection, SuiteSelection::Arguments | SuiteSelection::All) {
        let benches = variants::argument_benchmarks(&corpus, config.trials, config.reps);
        let tallies = run_rounds(&benches, config.rounds);
        suites.push(SuiteReport::from_tallies(variants::ARGUMENT_SUITE, &tallies));
    }

    if matches!(selection, SuiteSelection::Returns | SuiteSelection::All) {
        let benches = variants::return_benchmarks(&corpus, config.trials, config.reps);
        let tallies = run_rounds(&benches, config.rounds);
        suites.push(SuiteReport::from_tallies(variants::RETURN_SUITE, &tallies));
    }

    Ok(Report::new(config, suites))
}

/// Convenience entry point: both suites with the given configuration.
pub fn run(config: &RunConfig) -> BenchResult<Report> {
    run_suites(config, SuiteSelection::All)
}
