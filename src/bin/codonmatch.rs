use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use codonmatch::evaluate::{evaluate_with, EvaluateOpts};
use codonmatch::model::Sequence;
use codonmatch::seqio::{self, InputFormat};
use codonmatch::{codons, report, score};

/// codonmatch CLI
#[derive(Parser)]
#[command(name = "codonmatch")]
#[command(version)]
#[command(about = "Find which candidate DNA sequences best resemble a sample", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a sample against candidates read from a file
    Match {
        /// Segment file (.txt) or FASTA/FASTQ (optionally gzipped); first record is the sample
        file: PathBuf,
        /// Input format (default: detect from extension)
        #[arg(long, value_enum, default_value_t = FormatChoice::Auto)]
        input_format: FormatChoice,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputChoice::Text)]
        format: OutputChoice,
        /// Also list the best-scoring candidate(s) (text output)
        #[arg(long)]
        best: bool,
        /// Scoring threads (0 = all cores; default: 1)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Score one sample against one candidate and show the best offset
    Score {
        sample: String,
        candidate: String,
    },

    /// Print the 64-entry codon table
    Codons,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatChoice { Auto, Segments, Fastx }

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputChoice { Text, Tsv, Csv, Json }

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Match { file, input_format, format, best, threads } => {
            cmd_match(file, input_format, format, best, threads)
        }
        Commands::Score { sample, candidate } => cmd_score(&sample, &candidate),
        Commands::Codons => {
            cmd_codons();
            Ok(())
        }
    }
}

fn cmd_match(file: PathBuf, input_format: FormatChoice, format: OutputChoice, best: bool, threads: Option<usize>) -> Result<()> {
    let fmt = match input_format {
        FormatChoice::Auto => None,
        FormatChoice::Segments => Some(InputFormat::Segments),
        FormatChoice::Fastx => Some(InputFormat::Fastx),
    };
    let input = seqio::read_input(&file, fmt)?;
    info!(
        "match: file={} | sample={} ({} nt) | candidates={}",
        file.display(),
        input.sample_id,
        input.sample.len(),
        input.candidates.len()
    );

    let opts = EvaluateOpts { threads };
    let rep = evaluate_with(&input.sample, &input.candidates, &opts)
        .with_context(|| format!("evaluate {}", file.display()))?;

    match format {
        OutputChoice::Text => {
            print!("{}", report::render_text(&rep));
            if best {
                print!("{}", report::render_best(&report::best_matches(&rep)));
            }
        }
        OutputChoice::Tsv => report::write_table(&rep, &input.candidate_ids, std::io::stdout(), b'\t')?,
        OutputChoice::Csv => report::write_table(&rep, &input.candidate_ids, std::io::stdout(), b',')?,
        OutputChoice::Json => println!("{}", report::render_json(&input.sample_id, &input.candidate_ids, &rep)?),
    }
    Ok(())
}

fn cmd_score(sample: &str, candidate: &str) -> Result<()> {
    let s: Sequence = sample.parse().context("sample")?;
    let c: Sequence = candidate.parse().context("candidate")?;
    let aln = score::best_alignment(&s, &c)?;

    println!("score: {}", aln.score);
    println!("offset: {}", aln.offset);
    println!("codons: {}", s.usable_codons());
    println!("sample protein: {}", codons::translate_to_string(&s));
    println!("candidate protein: {}", codons::translate_to_string(&c));
    Ok(())
}

fn cmd_codons() {
    for (codon, aa) in codons::codon_table() {
        println!("{codon}\t{}\t{}", aa.three_letter(), aa.one_letter());
    }
}
