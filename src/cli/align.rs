use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::align::engine::global_align;
use crate::align::result::PairwiseAlignment;
use crate::cli::OutputFormat;
use crate::core::types::GapPenalties;
use crate::parsing;
use crate::scoring::SubstitutionMatrix;

#[derive(Args)]
pub struct AlignArgs {
    /// Input file: two-line sequence pair, or FASTA (.fa/.fasta/.fna, optionally gzipped)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Gap opening penalty (conventionally negative)
    #[arg(long, allow_negative_numbers = true)]
    pub gap_open: i32,

    /// Gap extension penalty (conventionally negative)
    #[arg(long, allow_negative_numbers = true)]
    pub gap_extend: i32,

    /// Substitution matrix by name or BLOSUM number; repeat for one report per matrix
    #[arg(short, long = "matrix", default_values_t = vec![String::from("BLOSUM62")])]
    pub matrices: Vec<String>,

    /// Score for residue pairs the matrix does not cover
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub default_score: i32,
}

/// Execute the align subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be parsed or a requested matrix is
/// unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AlignArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (seq1, seq2) = parsing::read_sequence_pair(&args.input)?;

    if verbose {
        eprintln!("Sequence 1: {} residues, sequence 2: {} residues", seq1.len(), seq2.len());
    }

    let gaps = GapPenalties::new(args.gap_open, args.gap_extend);
    if gaps.open > 0 || gaps.extend > 0 {
        warn!(%gaps, "positive gap penalties reward gaps");
    }

    // Resolve every requested matrix before aligning so a typo in the second
    // name fails the run up front
    let matrices = args
        .matrices
        .iter()
        .map(|name| {
            SubstitutionMatrix::from_name(name)
                .map(|m| m.with_default(args.default_score))
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Unknown substitution matrix '{name}'. Available: {}",
                        available_names()
                    )
                })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let reports: Vec<(SubstitutionMatrix, PairwiseAlignment)> = matrices
        .into_iter()
        .map(|matrix| {
            let alignment = global_align(&seq1, &seq2, &matrix, gaps);
            (matrix, alignment)
        })
        .collect();

    match format {
        OutputFormat::Text => print_text_reports(&reports),
        OutputFormat::Json => print_json_reports(&args, gaps, &reports)?,
        OutputFormat::Tsv => print_tsv_reports(&reports),
    }

    Ok(())
}

fn available_names() -> String {
    SubstitutionMatrix::all()
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_text_reports(reports: &[(SubstitutionMatrix, PairwiseAlignment)]) {
    for (matrix, alignment) in reports {
        println!("\n--------------- {} ----------------------\n", matrix.name());
        println!("Aligned Sequence 1:  {}", alignment.aligned1);
        println!("Match Representation:{}", alignment.match_track);
        println!("Aligned Sequence 2:  {}", alignment.aligned2);
        println!("Alignment score: {}", alignment.score);
        println!("Identity value: {}", alignment.identity_display());
    }
}

fn print_json_reports(
    args: &AlignArgs,
    gaps: GapPenalties,
    reports: &[(SubstitutionMatrix, PairwiseAlignment)],
) -> anyhow::Result<()> {
    let alignments: Vec<serde_json::Value> = reports
        .iter()
        .map(|(matrix, alignment)| {
            serde_json::json!({
                "matrix": matrix.name(),
                "aligned1": alignment.aligned1,
                "match_track": alignment.match_track,
                "aligned2": alignment.aligned2,
                "score": alignment.score,
                "matches": alignment.matches,
                "length": alignment.length,
                "identity": alignment.identity,
            })
        })
        .collect();

    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "gap_open": gaps.open,
        "gap_extend": gaps.extend,
        "alignments": alignments,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_reports(reports: &[(SubstitutionMatrix, PairwiseAlignment)]) {
    println!("matrix\tscore\tmatches\tlength\tidentity\taligned1\taligned2");
    for (matrix, alignment) in reports {
        println!(
            "{}\t{}\t{}\t{}\t{:.1}\t{}\t{}",
            matrix.name(),
            alignment.score,
            alignment.matches,
            alignment.length,
            alignment.identity,
            alignment.aligned1,
            alignment.aligned2,
        );
    }
}
