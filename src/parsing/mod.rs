//! Input readers.
//!
//! - **FASTA files**: Stream sequence records from plain or gzip/bgzip FASTA, or stdin
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use telomere_search::parsing::fasta;
//!
//! for record in fasta::open(Path::new("assembly.fa")).unwrap() {
//!     let record = record.unwrap();
//!     println!("{}: {} bp", record.id, record.bases.len());
//! }
//! ```

pub mod fasta;
