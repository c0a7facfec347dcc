//! Command-line interface for telomere-search.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Scan the ends of every contig in a FASTA file for telomeric repeats
//!
//! ## Usage
//!
//! ```text
//! # Scan the first/last 300 bp of each contig with the default motifs
//! telomere-search search assembly.fasta
//!
//! # Require 4 copies of the motif instead of a coverage fraction
//! telomere-search search assembly.fasta -m 4
//!
//! # Custom motifs (both are required)
//! telomere-search search assembly.fa.gz -f 'C{3}TA{2}' -r 'T{2}AG{3}'
//!
//! # JSON output for scripting
//! telomere-search search assembly.fasta --format json
//! ```

use clap::{Parser, Subcommand};

pub mod search;

#[derive(Parser)]
#[command(name = "telomere-search")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find telomeric repeats at the ends of assembled contigs")]
#[command(
    long_about = "telomere-search scans the start and end of each contig in a FASTA file for telomeric repeats (TTAGGG/CCCTAA by default, allowing slight variation).\n\nEach contig is reported as carrying telomeric repeats at both ends, the start only, the end only, or neither, based on either:\n- the fraction of each terminal window covered by repeats (--threshold), or\n- the number of repeat copies in each window (--min-copies)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify contigs by telomeric repeats at their ends
    Search(search::SearchArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Per-contig table followed by a cohort summary
    Text,
    /// Per-contig table only
    Tsv,
    /// Contigs and summary as a single JSON document
    Json,
}
