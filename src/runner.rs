use std::time::Duration;

use crate::checksum::Checksum;
use crate::error::{BenchError, BenchResult};
use crate::sink::Sink;
use crate::timer::StopWatch;

pub const DEFAULT_ROUNDS: usize = 30;
pub const DEFAULT_TRIALS: usize = 300;
pub const DEFAULT_REPS: usize = 3_000;

/// Iteration counts for one harness run.
///
/// A run is `rounds` rounds; within a round every benchmark executes twice
/// (once in listed order, once in reverse). Each execution is `trials` timed
/// trials of `reps` string operations, and only the minimum trial duration
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub rounds: usize,
    pub trials: usize,
    pub reps: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            rounds: DEFAULT_ROUNDS,
            trials: DEFAULT_TRIALS,
            reps: DEFAULT_REPS,
        }
    }
}

impl RunConfig {
    /// Reduced iteration counts for smoke runs and CI.
    pub fn quick() -> Self {
        RunConfig {
            rounds: 2,
            trials: 20,
            reps: 200,
        }
    }

    pub fn validate(&self) -> BenchResult<()> {
        if self.rounds == 0 {
            return Err(BenchError::ZeroIteration { field: "rounds" });
        }
        if self.trials == 0 {
            return Err(BenchError::ZeroIteration { field: "trials" });
        }
        if self.reps == 0 {
            return Err(BenchError::ZeroIteration { field: "reps" });
        }
        Ok(())
    }
}

/// Result of one benchmark execution: the minimum trial duration and the
/// checksum that proves the loops ran.
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    pub min_elapsed: Duration,
    pub checksum: i32,
}

/// Driver for argument-passing benchmarks.
///
/// One sink lives for the whole execution, mirroring processing state that
/// persists across trials. Each trial times `reps` calls of `pass`; the sink
/// value is folded into the trial-level checksum outside the timed region.
pub fn measure_passes<F>(trials: usize, reps: usize, mut pass: F) -> Measurement
where
    F: FnMut(&mut Sink, usize),
{
    let mut sink = Sink::new();
    let mut folded = Checksum::new();
    let mut min_elapsed = Duration::MAX;

    for _ in 0..trials {
        let sw = StopWatch::start();
        for i in 0..reps {
            pass(&mut sink, i);
        }
        let elapsed = sw.elapsed();
        if elapsed < min_elapsed {
            min_elapsed = elapsed;
        }
        folded.fold(sink.value());
    }

    Measurement {
        min_elapsed,
        checksum: folded.value(),
    }
}

/// Driver for return-value benchmarks.
///
/// `first_byte` fetches the value the style under test returns and hands back
/// its first byte; the fold happens inside the timed region, once per rep.
pub fn measure_yields<F>(trials: usize, reps: usize, mut first_byte: F) -> Measurement
where
    F: FnMut(usize) -> u8,
{
    let mut folded = Checksum::new();
    let mut min_elapsed = Duration::MAX;

    for _ in 0..trials {
        let sw = StopWatch::start();
        for i in 0..reps {
            folded.fold(i32::from(first_byte(i)));
        }
        let elapsed = sw.elapsed();
        if elapsed < min_elapsed {
            min_elapsed = elapsed;
        }
    }

    Measurement {
        min_elapsed,
        checksum: folded.value(),
    }
}

/// A labelled benchmark ready to execute.
pub struct Benchmark<'a> {
    label: &'static str,
    run: Box<dyn Fn() -> Measurement + 'a>,
}

impl<'a> Benchmark<'a> {
    pub fn new<F>(label: &'static str, run: F) -> Self
    where
        F: Fn() -> Measurement + 'a,
    {
        Benchmark {
            label,
            run: Box::new(run),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn run(&self) -> Measurement {
        (self.run)()
    }
}

/// Accumulated result of one benchmark across all rounds.
#[derive(Debug, Clone)]
pub struct Tally {
    pub label: &'static str,
    pub total: Duration,
    checksum: Checksum,
}

impl Tally {
    fn new(label: &'static str) -> Self {
        Tally {
            label,
            total: Duration::ZERO,
            checksum: Checksum::new(),
        }
    }

    fn record(&mut self, measurement: &Measurement) {
        self.total += measurement.min_elapsed;
        self.checksum.fold(measurement.checksum);
    }

    pub fn checksum(&self) -> i32 {
        self.checksum.value()
    }
}

/// The outer statistical loop. Every round executes the benchmarks once in
/// listed order and once in reverse, so each benchmark sees early and late
/// positions equally often and ordering bias (cache warming, frequency
/// scaling) cancels out across the run.
pub fn run_rounds(benches: &[Benchmark<'_>], rounds: usize) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = benches.iter().map(|b| Tally::new(b.label())).collect();

    for _ in 0..rounds {
        for (tally, bench) in tallies.iter_mut().zip(benches) {
            tally.record(&bench.run());
        }
        for (tally, bench) in tallies.iter_mut().zip(benches).rev() {
            tally.record(&bench.run());
        }
    }

    tallies
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn validate_rejects_zero_fields() {
        let ok = RunConfig::quick();
        assert!(ok.validate().is_ok());

        let bad = RunConfig {
            trials: 0,
            ..RunConfig::quick()
        };
        match bad.validate() {
            Err(BenchError::ZeroIteration { field }) => assert_eq!(field, "trials"),
            other => panic!("expected ZeroIteration, got {other:?}"),
        }
    }

    #[test]
    fn measure_passes_runs_trials_times_reps_operations() {
        let mut calls = 0usize;
        measure_passes(4, 25, |sink, _| {
            calls += 1;
            sink.consume_str("Hello");
        });
        assert_eq!(calls, 100);
    }

    #[test]
    fn measure_passes_is_deterministic_for_a_fixed_sequence() {
        let run = || {
            measure_passes(3, 10, |sink, i| {
                sink.consume_str(*crate::corpus::pick(&crate::corpus::WORDS, i))
            })
        };
        assert_eq!(run().checksum, run().checksum);
    }

    #[test]
    fn measure_yields_folds_every_rep() {
        let mut calls = 0usize;
        let measurement = measure_yields(2, 50, |_| {
            calls += 1;
            b'H'
        });
        assert_eq!(calls, 100);
        assert!(measurement.checksum >= 15);
    }

    #[test]
    fn rounds_mirror_the_benchmark_order() {
        let log = RefCell::new(Vec::new());
        let trace = |label: &'static str| {
            let log = &log;
            Benchmark::new(label, move || {
                log.borrow_mut().push(label);
                Measurement {
                    min_elapsed: Duration::ZERO,
                    checksum: 127,
                }
            })
        };

        let benches = vec![trace("a"), trace("b"), trace("c")];
        let tallies = run_rounds(&benches, 1);

        assert_eq!(*log.borrow(), vec!["a", "b", "c", "c", "b", "a"]);
        assert_eq!(tallies.len(), 3);
        assert!(tallies.iter().all(|t| t.checksum() >= 15));
    }
}
