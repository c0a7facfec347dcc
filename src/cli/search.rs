use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::core::contig::{ContigClassification, EndClassification};
use crate::core::types::{Category, DecisionMode};
use crate::matching::cohort::CohortSummary;
use crate::matching::engine::{ClassificationEngine, SearchConfig, SearchOptions};
use crate::parsing;

#[derive(Args)]
pub struct SearchArgs {
    /// Input FASTA file (optionally gzip/bgzip compressed)
    /// Use '-' for stdin
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Scan the first/last N bp of each contig (default 300)
    #[arg(short = 'l', long = "length")]
    pub window_length: Option<usize>,

    /// Report a telomere if at least this fraction of the scanned bases are
    /// telomeric repeats (default 0.4). Cannot be used with --min-copies
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Report a telomere if at least N copies of the repeat are found.
    /// Cannot be used with --threshold
    #[arg(short, long)]
    pub min_copies: Option<usize>,

    /// Repeat pattern searched at the start of each contig
    /// (default C{2,4}T{1,2}A{1,3}); requires --reverse
    #[arg(short, long)]
    pub forward: Option<String>,

    /// Repeat pattern searched at the end of each contig
    /// (default T{1,3}A{1,2}G{2,4}); requires --forward
    #[arg(short, long)]
    pub reverse: Option<String>,
}

impl SearchArgs {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            window_length: self.window_length,
            threshold: self.threshold,
            min_copies: self.min_copies,
            forward: self.forward.clone(),
            reverse: self.reverse.clone(),
        }
    }
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the input cannot be
/// read, or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat) -> anyhow::Result<()> {
    // Configuration problems are fatal before any record is read
    let config =
        SearchConfig::from_options(&args.options()).context("Invalid search configuration")?;

    if args.input.as_os_str() != "-" && !parsing::fasta::is_fasta_file(&args.input) {
        warn!(
            "{} does not have a FASTA extension, reading it as FASTA anyway",
            args.input.display()
        );
    }

    let records = parsing::fasta::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?
        .map(|record| record.map_err(anyhow::Error::from));

    let engine = ClassificationEngine::new(config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            write_tsv_header(&mut out, engine.config().window_length)?;
            let summary = engine.run(records, |contig| Ok(write_tsv_row(&mut out, contig)?))?;

            if matches!(format, OutputFormat::Text) {
                writeln!(out)?;
                write_summary(&mut out, &args.input, &summary)?;
            }
        }
        OutputFormat::Json => {
            let mut contigs = Vec::new();
            let summary = engine.run(records, |contig| {
                contigs.push(contig.clone());
                Ok(())
            })?;

            let output = serde_json::json!({
                "input": args.input.display().to_string(),
                "records": contigs,
                "summary": summary,
            });
            serde_json::to_writer_pretty(&mut out, &output)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Python-style booleans, as in the historical report format
fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

fn match_list(call: &EndClassification) -> String {
    if call.matches.is_empty() {
        "-".to_string()
    } else {
        call.match_texts().collect::<Vec<_>>().join(",")
    }
}

/// Write the column header for per-contig rows
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tsv_header<W: Write>(out: &mut W, window_length: usize) -> io::Result<()> {
    writeln!(
        out,
        "Contig\tLength\tFirst {window_length} bp\tStart Repeats\tStart Repeats Count\tStart Repeats Length\tLast {window_length} bp\tEnd Repeats\tEnd Repeats Count\tEnd Repeats Length\tStart Telomere\tEnd Telomere"
    )
}

/// Write one tab-separated row for a classified contig
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_tsv_row<W: Write>(out: &mut W, contig: &ContigClassification) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        contig.id,
        contig.length,
        contig.start.window,
        match_list(&contig.start),
        contig.start.match_count(),
        contig.start.matched_length(),
        contig.end.window,
        match_list(&contig.end),
        contig.end.match_count(),
        contig.end.matched_length(),
        flag(contig.start.telomere_found),
        flag(contig.end.telomere_found),
    )
}

/// Write the cohort summary block: counts, listed ids, and run parameters
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary<W: Write>(
    out: &mut W,
    input: &Path,
    summary: &CohortSummary,
) -> io::Result<()> {
    let params = &summary.parameters;
    let criterion = match params.mode {
        DecisionMode::Threshold(_) => "passing threshold",
        DecisionMode::MinCopies(_) => "passing minimum copies",
    };

    writeln!(out, "Input filename: {}", input.display())?;
    writeln!(out)?;
    writeln!(
        out,
        "Number of sequences searched: {}",
        summary.total_sequences
    )?;

    for (category, label) in [
        (Category::Both, "at both ends"),
        (Category::StartOnly, "at start only"),
        (Category::EndOnly, "at end only"),
    ] {
        let ids = summary.ids(category);
        writeln!(out)?;
        writeln!(
            out,
            "Number of sequences with telomeric repeats {label} ({criterion}): {}",
            ids.len()
        )?;
        for id in ids {
            writeln!(out, "{id}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Parameters used:")?;
    writeln!(
        out,
        "Target sequences: {} and {}",
        params.forward_pattern, params.reverse_pattern
    )?;
    writeln!(out, "Window length: {}", params.window_length)?;
    writeln!(out, "{}", params.mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::SequenceRecord;

    fn engine() -> ClassificationEngine {
        let options = SearchOptions {
            window_length: Some(12),
            min_copies: Some(2),
            ..SearchOptions::default()
        };
        ClassificationEngine::new(SearchConfig::from_options(&options).unwrap())
    }

    #[test]
    fn test_tsv_row() {
        let contig = engine().classify(&SequenceRecord::new(
            "ctg7 telomere-to-telomere",
            "CCCTAACCCTAAACGTACGTTTAGGG",
        ));

        let mut out = Vec::new();
        write_tsv_row(&mut out, &contig).unwrap();
        let line = String::from_utf8(out).unwrap();
        let fields: Vec<&str> = line.trim_end().split('\t').collect();

        assert_eq!(
            fields,
            vec![
                "ctg7 telomere-to-telomere",
                "26",
                "CCCTAACCCTAA",
                "CCCTAA,CCCTAA",
                "2",
                "12",
                "GTACGTTTAGGG",
                "TTTAGGG",
                "1",
                "7",
                "True",
                "False",
            ]
        );
    }

    #[test]
    fn test_tsv_row_without_matches() {
        let contig = engine().classify(&SequenceRecord::new("plain", "ACGTACGT"));

        let mut out = Vec::new();
        write_tsv_row(&mut out, &contig).unwrap();
        let line = String::from_utf8(out).unwrap();

        assert_eq!(
            line,
            "plain\t8\tACGTACGT\t-\t0\t0\tACGTACGT\t-\t0\t0\tFalse\tFalse\n"
        );
    }

    #[test]
    fn test_tsv_header_mentions_window() {
        let mut out = Vec::new();
        write_tsv_header(&mut out, 200).unwrap();
        let header = String::from_utf8(out).unwrap();

        assert!(header.starts_with("Contig\tLength\tFirst 200 bp\t"));
        assert!(header.contains("\tLast 200 bp\t"));
        assert_eq!(header.trim_end().split('\t').count(), 12);
    }

    #[test]
    fn test_summary_lists_ids_by_category() {
        let records = vec![
            SequenceRecord::new("both", "CCCTAACCCTAATTAGGGTTAGGG"),
            SequenceRecord::new("neither", "ACGTACGTACGTACGTACGTACGT"),
            SequenceRecord::new("end", "ACGTACGTACGTTTAGGGTTAGGG"),
        ];
        let (_, summary) = engine().classify_all(&records);

        let mut out = Vec::new();
        write_summary(&mut out, Path::new("assembly.fa"), &summary).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Input filename: assembly.fa\n"));
        assert!(text.contains("Number of sequences searched: 3\n"));
        assert!(text.contains(
            "telomeric repeats at both ends (passing minimum copies): 1\nboth\n"
        ));
        assert!(text.contains("at start only (passing minimum copies): 0\n"));
        assert!(text.contains("at end only (passing minimum copies): 1\nend\n"));
        assert!(!text.contains("neither"));
        assert!(text.contains("Target sequences: C{2,4}T{1,2}A{1,3} and T{1,3}A{1,2}G{2,4}\n"));
        assert!(text.contains("Window length: 12\n"));
        assert!(text.ends_with("Minimum copies: 2\n"));
    }
}
