use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::alignment_mode::{AlignmentParams, GapModel};
use crate::config::RunConfig;
use crate::profile::{write_profile_file, DiagonalProfile};
use crate::{fasta, DiagonalScorer};
use crate::{DEFAULT_GAP_EXTEND, DEFAULT_GAP_OPEN, DEFAULT_GAP_PENALTY, DEFAULT_OUTPUT_NAME};

#[derive(Parser, Debug)]
#[command(name = "diagscore")]
#[command(version)]
#[command(about = "Diagonal-offset local alignment score profiles for repeat detection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flat gap penalty
    Constant(ConstantArgs),

    /// Affine gap penalty (open + extend)
    Affine(AffineArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// FASTA file holding the first sequence
    #[arg(short = 'a', long)]
    pub seq_a: PathBuf,
    /// FASTA file holding the second sequence
    #[arg(short = 'b', long)]
    pub seq_b: PathBuf,
    /// Exclude the main diagonal
    #[arg(short = 'd', long, default_value_t = false)]
    pub exclude_diagonal: bool,
    /// Print the whole score matrix to stdout
    #[arg(short = 'm', long, default_value_t = false)]
    pub matrix: bool,
    /// Profile output file, or a directory to write SW_PARSE.txt into
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_NAME)]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct ConstantArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Gap open and extend penalty
    #[arg(short = 'p', long, default_value_t = DEFAULT_GAP_PENALTY,
          value_parser = clap::value_parser!(i32).range(0..))]
    pub penalty: i32,
}

#[derive(Args, Debug)]
pub struct AffineArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Gap open penalty (`-o` is the output path, not the open penalty)
    #[arg(short = 'g', long, default_value_t = DEFAULT_GAP_OPEN,
          value_parser = clap::value_parser!(i32).range(0..))]
    pub open: i32,
    /// Gap extend penalty
    #[arg(short = 'e', long, default_value_t = DEFAULT_GAP_EXTEND,
          value_parser = clap::value_parser!(i32).range(0..))]
    pub extend: i32,
}

impl Commands {
    pub fn into_config(self) -> RunConfig {
        let (input, gap_model) = match self {
            Commands::Constant(args) => (args.input, GapModel::Constant { penalty: args.penalty }),
            Commands::Affine(args) => (
                args.input,
                GapModel::Affine {
                    open: args.open,
                    extend: args.extend,
                },
            ),
        };
        let params = AlignmentParams::new(gap_model).with_excluded_diagonal(input.exclude_diagonal);
        RunConfig::new(input.seq_a, input.seq_b, params)
            .with_matrix_dump(input.matrix)
            .with_output(input.out)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let config = cli.command.into_config();
    let stdout = io::stdout();
    let mut matrix_out = stdout.lock();
    execute(&config, &mut matrix_out)?;
    Ok(())
}

/// Reads both sequences, scores them, optionally dumps the matrix to
/// `matrix_out` and writes the profile to the configured destination.
pub fn execute<W: Write>(config: &RunConfig, matrix_out: &mut W) -> Result<DiagonalProfile> {
    let start_time = Instant::now();
    let scorer = DiagonalScorer::new(config.params)?;

    let seq_a = fasta::read_first_record(&config.seq_a)
        .with_context(|| format!("failed to load sequence A from {}", config.seq_a.display()))?;
    let seq_b = fasta::read_first_record(&config.seq_b)
        .with_context(|| format!("failed to load sequence B from {}", config.seq_b.display()))?;
    info!(
        "seqA: {} ({} bp), seqB: {} ({} bp)",
        seq_a.header(),
        seq_a.len(),
        seq_b.header(),
        seq_b.len()
    );

    let matrix = scorer.score_matrix(&seq_a, &seq_b);
    let profile = crate::diagonal_sums(&matrix);

    if config.dump_matrix {
        matrix
            .write_rows(matrix_out)
            .context("failed to write score matrix")?;
        matrix_out.flush()?;
    }

    let output = config.output_path();
    write_profile_file(&profile, &output)
        .with_context(|| format!("failed to write profile to {}", output.display()))?;

    info!("Running parameters:");
    info!("seqA: {}", config.seq_a.display());
    info!("seqB: {}", config.seq_b.display());
    info!("gap model: {}", config.params.gap_model);
    info!("diag: {}", config.params.exclude_diagonal);
    info!("matrix: {}", config.dump_matrix);
    info!("out: {}", output.display());
    if let Some((offset, score)) = profile.peak() {
        info!("peak offset {} (score {})", offset, score);
    }
    info!("Took {:?} to run.", start_time.elapsed());

    Ok(profile)
}
