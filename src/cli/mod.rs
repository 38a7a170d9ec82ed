//! Command-line interface for pairalign.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **align**: Globally align two sequences and print a report per matrix
//! - **matrices**: List the built-in substitution matrices
//!
//! ## Usage
//!
//! ```text
//! # Align the two sequences in a pair file under BLOSUM62
//! pairalign align pair.txt --gap-open -10 --gap-extend -1
//!
//! # One report per requested matrix
//! pairalign align pair.txt --gap-open -10 --gap-extend -1 --matrix 62 --matrix 45
//!
//! # FASTA input and JSON output for scripting
//! pairalign align pair.fa --gap-open -11 --gap-extend -1 --format json
//!
//! # What matrices are available?
//! pairalign matrices
//! ```

use clap::{Parser, Subcommand};

pub mod align;
pub mod matrices;

#[derive(Parser)]
#[command(name = "pairalign")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Global pairwise alignment with affine gaps and BLOSUM-style scoring")]
#[command(
    long_about = "pairalign computes an optimal end-to-end alignment of two sequences under an affine gap model (separate gap-open and gap-extend penalties) and a named substitution matrix.\n\nIt reports the aligned sequences, a match track, the alignment score, and percent identity - once per requested scoring matrix."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align the two sequences from an input file
    Align(align::AlignArgs),

    /// List built-in substitution matrices
    Matrices,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
