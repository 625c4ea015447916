use std::borrow::Cow;

use bytes::Bytes;

use crate::corpus::{pick, Corpus};
use crate::runner::{measure_passes, measure_yields, Benchmark};

pub const ARGUMENT_SUITE: &str = "Different argument types";
pub const RETURN_SUITE: &str = "Different return value types";

// Return seams. The declared return type is what each benchmark measures, so
// the functions must not be inlined into the timing loop.

#[inline(never)]
fn nth_string(pool: &[String; 6], i: usize) -> &String {
    pick(pool, i)
}

#[inline(never)]
fn nth_str(pool: &[String; 6], i: usize) -> &str {
    pick(pool, i).as_str()
}

#[inline(never)]
fn nth_cow(pool: &[String; 6], i: usize) -> Cow<'_, str> {
    Cow::Borrowed(pick(pool, i).as_str())
}

#[inline(never)]
fn nth_shared(pool: &[Bytes; 6], i: usize) -> Bytes {
    pick(pool, i).clone()
}

#[inline(never)]
fn nth_shared_ref(pool: &[Bytes; 6], i: usize) -> &Bytes {
    pick(pool, i)
}

/// Argument-passing styles, each exercised against the pool it reads from.
///
/// The `&String from [&str]` entry builds a temporary owned string per call
/// and passes a reference to it; that hidden allocation is the cost the
/// variant exists to expose. `Bytes from [&str]` is its zero-copy opposite.
pub fn argument_benchmarks<'a>(
    corpus: &'a Corpus,
    trials: usize,
    reps: usize,
) -> Vec<Benchmark<'a>> {
    vec![
        Benchmark::new("&String from [String]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_string_ref(pick(&corpus.owned, i))
            })
        }),
        Benchmark::new("&str from [String]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_str(pick(&corpus.owned, i).as_str())
            })
        }),
        Benchmark::new("Cow<str> from [String]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_cow(Cow::Borrowed(pick(&corpus.owned, i).as_str()))
            })
        }),
        Benchmark::new("Bytes from [String]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_shared(Bytes::copy_from_slice(pick(&corpus.owned, i).as_bytes()))
            })
        }),
        Benchmark::new("String from [Bytes]", move || {
            measure_passes(trials, reps, |sink, i| {
                let word = pick(&corpus.shared, i);
                sink.consume_owned(String::from_utf8_lossy(word).into_owned())
            })
        }),
        Benchmark::new("&String from [&str]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_string_ref(&String::from(*pick(&corpus.slices, i)))
            })
        }),
        Benchmark::new("String from [&str]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_owned(String::from(*pick(&corpus.slices, i)))
            })
        }),
        Benchmark::new("Bytes from [&str]", move || {
            measure_passes(trials, reps, |sink, i| {
                sink.consume_shared(Bytes::from_static(pick(&corpus.slices, i).as_bytes()))
            })
        }),
    ]
}

/// Return-value styles. The driver folds the first byte of whatever the seam
/// hands back, inside the timed region.
pub fn return_benchmarks<'a>(corpus: &'a Corpus, trials: usize, reps: usize) -> Vec<Benchmark<'a>> {
    vec![
        Benchmark::new("&String from [String]", move || {
            measure_yields(trials, reps, |i| nth_string(&corpus.owned, i).as_bytes()[0])
        }),
        Benchmark::new("&str from [String]", move || {
            measure_yields(trials, reps, |i| nth_str(&corpus.owned, i).as_bytes()[0])
        }),
        Benchmark::new("Cow<str> from [String]", move || {
            measure_yields(trials, reps, |i| nth_cow(&corpus.owned, i).as_bytes()[0])
        }),
        Benchmark::new("Bytes from [Bytes]", move || {
            measure_yields(trials, reps, |i| nth_shared(&corpus.shared, i)[0])
        }),
        Benchmark::new("&Bytes from [Bytes]", move || {
            measure_yields(trials, reps, |i| nth_shared_ref(&corpus.shared, i)[0])
        }),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn argument_suite_has_eight_unique_labels() {
        let corpus = Corpus::greetings();
        let benches = argument_benchmarks(&corpus, 1, 1);
        assert_eq!(benches.len(), 8);

        let labels: HashSet<_> = benches.iter().map(|b| b.label()).collect();
        assert_eq!(labels.len(), benches.len());
    }

    #[test]
    fn return_suite_has_five_unique_labels() {
        let corpus = Corpus::greetings();
        let benches = return_benchmarks(&corpus, 1, 1);
        assert_eq!(benches.len(), 5);

        let labels: HashSet<_> = benches.iter().map(|b| b.label()).collect();
        assert_eq!(labels.len(), benches.len());
    }

    #[test]
    fn return_seams_hand_back_the_same_first_bytes() {
        let corpus = Corpus::greetings();
        for i in 0..12 {
            let expected = pick(&corpus.slices, i).as_bytes()[0];
            assert_eq!(nth_string(&corpus.owned, i).as_bytes()[0], expected);
            assert_eq!(nth_str(&corpus.owned, i).as_bytes()[0], expected);
            assert_eq!(nth_cow(&corpus.owned, i).as_bytes()[0], expected);
            assert_eq!(nth_shared(&corpus.shared, i)[0], expected);
            assert_eq!(nth_shared_ref(&corpus.shared, i)[0], expected);
        }
    }
}
