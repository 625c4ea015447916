use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::error::{BenchError, BenchResult};
use crate::runner::{RunConfig, Tally};

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub total_seconds: f64,
    pub checksum: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub name: String,
    pub entries: Vec<ReportEntry>,
}

impl SuiteReport {
    pub fn from_tallies(name: &str, tallies: &[Tally]) -> Self {
        SuiteReport {
            name: name.to_string(),
            entries: tallies
                .iter()
                .map(|tally| ReportEntry {
                    label: tally.label.to_string(),
                    total_seconds: tally.total.as_secs_f64(),
                    checksum: tally.checksum(),
                })
                .collect(),
        }
    }
}

/// Everything one harness run produced, renderable as text or JSON.
///
/// The checksums are part of the report on purpose: equal checksums across
/// the variants of a suite are the evidence that every benchmark did the
/// same work.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub rounds: usize,
    pub trials: usize,
    pub reps: usize,
    pub suites: Vec<SuiteReport>,
}

impl Report {
    pub fn new(config: &RunConfig, suites: Vec<SuiteReport>) -> Self {
        Report {
            generated_at: Local::now().to_rfc3339(),
            rounds: config.rounds,
            trials: config.trials,
            reps: config.reps,
            suites,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for suite in &self.suites {
            out.push_str(&format!("\n*** {}:\n\n", suite.name));
            for entry in &suite.entries {
                out.push_str(&format!(
                    "{}: {:.6} s  (checksum {})\n",
                    entry.label, entry.total_seconds, entry.checksum
                ));
            }
        }
        out
    }

    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path, json: bool) -> BenchResult<()> {
        let body = if json {
            self.to_json()?
        } else {
            self.render_text()
        };
        fs::write(path, body).map_err(|source| BenchError::ReportIo {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::runner::{run_rounds, RunConfig};
    use crate::variants::{argument_benchmarks, ARGUMENT_SUITE};

    fn tiny_report() -> Report {
        let config = RunConfig {
            rounds: 1,
            trials: 2,
            reps: 12,
        };
        let corpus = Corpus::greetings();
        let benches = argument_benchmarks(&corpus, config.trials, config.reps);
        let tallies = run_rounds(&benches, config.rounds);
        Report::new(
            &config,
            vec![SuiteReport::from_tallies(ARGUMENT_SUITE, &tallies)],
        )
    }

    #[test]
    fn text_rendering_has_section_header_and_labels() {
        let report = tiny_report();
        let text = report.render_text();
        assert!(text.contains("*** Different argument types:"));
        assert!(text.contains("&String from [String]:"));
        assert!(text.contains("checksum"));
    }

    #[test]
    fn json_rendering_carries_the_run_configuration() {
        let report = tiny_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"rounds\": 1"));
        assert!(json.contains("\"total_seconds\""));
        assert!(json.contains("\"generated_at\""));
    }

    #[test]
    fn write_to_creates_the_file() {
        let report = tiny_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write_to(&path, true).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("\"suites\""));
    }

    #[test]
    fn write_to_surfaces_io_errors() {
        let report = tiny_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");
        match report.write_to(&path, false) {
            Err(BenchError::ReportIo { .. }) => {}
            other => panic!("expected ReportIo, got {other:?}"),
        }
    }
}
