use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;

use strpass::variants;
use strpass::{run_suites, BenchResult, Corpus, RunConfig, SuiteSelection};

/// strpass - string passing micro-benchmarks
#[derive(Parser)]
#[command(name = "strpass")]
#[command(author = "Arthur")]
#[command(version = "0.1.0")]
#[command(
    about = "Micro-benchmarks comparing string passing and returning styles in Rust",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suites (the default when no subcommand is given)
    Run {
        /// Outer rounds; each round runs every benchmark twice
        #[arg(long)]
        rounds: Option<usize>,

        /// Timed trials per benchmark execution
        #[arg(long)]
        trials: Option<usize>,

        /// String operations per trial
        #[arg(long)]
        reps: Option<usize>,

        /// Start from reduced iteration counts (explicit flags still win)
        #[arg(long)]
        quick: bool,

        /// Which suite to run
        #[arg(long, value_enum, default_value = "all")]
        suite: SuiteArg,

        /// Emit the report as JSON on stdout
        #[arg(long)]
        json: bool,

        /// Also write the report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the benchmark labels without running anything
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SuiteArg {
    Arguments,
    Returns,
    All,
}

impl From<SuiteArg> for SuiteSelection {
    fn from(arg: SuiteArg) -> Self {
        match arg {
            SuiteArg::Arguments => SuiteSelection::Arguments,
            SuiteArg::Returns => SuiteSelection::Returns,
            SuiteArg::All => SuiteSelection::All,
        }
    }
}

fn run_benchmarks(
    rounds: Option<usize>,
    trials: Option<usize>,
    reps: Option<usize>,
    quick: bool,
    suite: SuiteArg,
    json: bool,
    output: Option<PathBuf>,
) -> BenchResult<()> {
    let mut config = if quick {
        RunConfig::quick()
    } else {
        RunConfig::default()
    };
    if let Some(rounds) = rounds {
        config.rounds = rounds;
    }
    if let Some(trials) = trials {
        config.trials = trials;
    }
    if let Some(reps) = reps {
        config.reps = reps;
    }

    let report = run_suites(&config, suite.into())?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "{}",
            "strpass - string passing micro-benchmarks".bold()
        );
        println!(
            "{}",
            format!(
                "rounds: {}, trials: {}, reps: {}",
                config.rounds, config.trials, config.reps
            )
            .dimmed()
        );
        print!("{}", report.render_text());
    }

    if let Some(path) = output {
        report.write_to(&path, json)?;
        eprintln!("report written to {}", path.display());
    }

    Ok(())
}

fn list_benchmarks() -> BenchResult<()> {
    let corpus = Corpus::greetings();
    let suites = [
        (
            variants::ARGUMENT_SUITE,
            variants::argument_benchmarks(&corpus, 1, 1),
        ),
        (
            variants::RETURN_SUITE,
            variants::return_benchmarks(&corpus, 1, 1),
        ),
    ];

    for (name, benches) in &suites {
        println!("{}", format!("{name}:").cyan().bold());
        for bench in benches {
            println!("  {}", bench.label());
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run {
            rounds,
            trials,
            reps,
            quick,
            suite,
            json,
            output,
        }) => run_benchmarks(rounds, trials, reps, quick, suite, json, output),
        Some(Commands::List) => list_benchmarks(),
        None => run_benchmarks(None, None, None, false, SuiteArg::All, false, None),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }
}
