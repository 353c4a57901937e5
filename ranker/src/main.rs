mod config;
mod error;
mod input;
mod telemetry;

use std::fs::File;
use std::io::{stdin, stdout, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use topsis_ranking::{Decision, Evaluation, Matrix};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ranker",
    about = "Rank alternatives against weighted benefit and cost criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank alternatives read as CSV rows of criterion values
    Rank(RankArgs),
    /// Rank randomly generated alternatives
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
struct RankArgs {
    /// CSV file of alternatives, one row per alternative (defaults to stdin)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Print the evaluation as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Number of alternatives to generate
    #[arg(long, default_value_t = 5)]
    alternatives: usize,
    /// Seed for the generator (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Print the evaluation as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let mut decision = Decision::new(config.criteria()?);

    let json = match cli.command {
        Command::Rank(args) => {
            let saved = match args.input {
                Some(path) => {
                    let reader = BufReader::new(File::open(path)?);
                    input::load_alternatives(reader, &mut decision)?
                }
                None => input::load_alternatives(stdin().lock(), &mut decision)?,
            };
            info!(alternatives = saved, "loaded alternatives");
            args.json
        }
        Command::Demo(args) => {
            let mut rng = match args.seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };
            for _ in 0..args.alternatives {
                let values: Vec<f64> = (0..decision.criteria().len())
                    .map(|_| rng.gen_range(1..=10_u8) as f64 / 10.0)
                    .collect();
                decision.append_alternative(&values)?;
            }
            info!(alternatives = decision.len(), "generated alternatives");
            args.json
        }
    };

    let evaluation = decision.process()?;
    let mut out = stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &evaluation)?;
        writeln!(out)?;
    } else {
        render_evaluation(&mut out, &evaluation)?;
    }
    Ok(())
}

fn render_evaluation(out: &mut impl Write, evaluation: &Evaluation) -> std::io::Result<()> {
    writeln!(out, "Alternative values")?;
    render_matrix(&mut *out, evaluation, &evaluation.raw)?;

    writeln!(out, "\nNormalized values")?;
    render_matrix(&mut *out, evaluation, &evaluation.normalized)?;

    writeln!(out, "\nScores")?;
    for (alternative, score) in evaluation.alternatives.iter().zip(&evaluation.scores) {
        writeln!(out, "{alternative:<6}{:>10.4}", score.as_f64())?;
    }

    writeln!(out, "\nRanking")?;
    for entry in evaluation.ranking() {
        writeln!(
            out,
            "{:>3}. {:<6}{:>10.4}",
            entry.rank,
            entry.alternative,
            entry.score.as_f64()
        )?;
    }
    Ok(())
}

fn render_matrix(
    out: &mut impl Write,
    evaluation: &Evaluation,
    matrix: &Matrix,
) -> std::io::Result<()> {
    let widths: Vec<usize> = evaluation.criteria.iter().map(|c| c.len().max(8)).collect();
    write!(out, "{:<6}", "")?;
    for (criterion, &width) in evaluation.criteria.iter().zip(&widths) {
        write!(out, " {criterion:>width$}")?;
    }
    writeln!(out)?;
    for (alternative, row) in evaluation.alternatives.iter().zip(matrix.iter_rows()) {
        write!(out, "{alternative:<6}")?;
        for (value, &width) in row.iter().zip(&widths) {
            write!(out, " {value:>width$.4}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
