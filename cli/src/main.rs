//! corpusprep CLI - corpus preparation tool

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use corpusprep::error::display_chain;
use corpusprep::{
    clean, collect_snippets, detect_format_from_path, read_jsonl, write_jsonl, AutoParser,
    BatchProcessor, DocumentParser, DocumentProcessor, ExtractMode, PageSelection,
    ProcessOptions, Record, Tagger,
};

#[derive(Parser)]
#[command(name = "corpusprep")]
#[command(version)]
#[command(about = "Turn documents into cleaned JSONL corpora for LLM training", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, clean, and write records from PDFs or page dumps
    #[command(alias = "process")]
    Pdf {
        /// Input documents (PDF or JSON page dump)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Category label attached to every record
        #[arg(short, long, env = "CORPUSPREP_CATEGORY")]
        category: String,

        /// Output JSONL file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// What to extract from each page
        #[arg(long, value_enum, default_value = "full")]
        mode: Mode,

        /// Cleaned text must be longer than this many characters
        #[arg(long, default_value = "30")]
        min_len: usize,
    },

    /// Build records from a tldr pages checkout
    Tldr {
        /// Root of the tldr checkout (contains pages/ and pages.ja/)
        #[arg(long, value_name = "DIR", default_value = "./tldr")]
        root: PathBuf,

        /// Platforms to collect
        #[arg(long = "platform", value_name = "NAME", default_values_t = default_platforms())]
        platforms: Vec<String>,

        /// Output JSONL file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Add a Tags line to every record of a JSONL file
    Tag {
        /// Input JSONL file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output JSONL file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the cleaned form of a text file
    Clean {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show document information and what processing would emit
    Info {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Text and tables
    Full,
    /// Page text only
    Text,
    /// Tables only
    Tables,
}

impl From<Mode> for ExtractMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Full => ExtractMode::Full,
            Mode::Text => ExtractMode::TextOnly,
            Mode::Tables => ExtractMode::TablesOnly,
        }
    }
}

fn default_platforms() -> Vec<String> {
    corpusprep::snippet::DEFAULT_PLATFORMS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pdf {
            inputs,
            category,
            output,
            pages,
            mode,
            min_len,
        } => cmd_pdf(
            &inputs,
            &category,
            output.as_deref(),
            pages.as_deref(),
            mode,
            min_len,
        ),
        Commands::Tldr {
            root,
            platforms,
            output,
        } => cmd_tldr(&root, &platforms, output.as_deref()),
        Commands::Tag { input, output } => cmd_tag(&input, output.as_deref()),
        Commands::Clean { input } => cmd_clean(&input),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), display_chain(e.as_ref()));
        std::process::exit(1);
    }
}

fn parse_pages(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

/// Write records to a file, or to stdout when no path is given.
fn write_records(records: &[Record], output: Option<&Path>) -> Result<usize, Box<dyn std::error::Error>> {
    let count = match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let count = write_jsonl(records, File::create(path)?)?;
            eprintln!("{} {} records to {}", "Saved".green(), count, path.display());
            count
        }
        None => write_jsonl(records, io::stdout().lock())?,
    };
    Ok(count)
}

fn cmd_pdf(
    inputs: &[PathBuf],
    category: &str,
    output: Option<&Path>,
    pages: Option<&str>,
    mode: Mode,
    min_len: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ProcessOptions::new(category)
        .with_pages(parse_pages(pages)?)
        .with_extract_mode(mode.into())
        .with_min_content_len(min_len);

    let parser = AutoParser::new();
    let batch = BatchProcessor::new(&parser, DocumentProcessor::new(options));

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let report = batch.run_with(inputs, |path, _| {
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    for failure in &report.failures {
        eprintln!(
            "{} {}: {}",
            "Skipped".yellow().bold(),
            failure.document.display(),
            failure.error.display_chain()
        );
    }

    write_records(&report.records, output)?;

    eprintln!(
        "{} {}/{} documents, {} records ({} text, {} tables), {} skipped units",
        "Done!".green().bold(),
        report.succeeded,
        inputs.len(),
        report.record_count(),
        report.stats.text_records,
        report.stats.table_records,
        report.stats.skipped()
    );

    Ok(())
}

fn cmd_tldr(
    root: &Path,
    platforms: &[String],
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = collect_snippets(root, platforms)?;
    write_records(&records, output)?;
    eprintln!(
        "{} {} command pages ({})",
        "Done!".green().bold(),
        records.len(),
        platforms.join("/")
    );
    Ok(())
}

fn cmd_tag(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let records = read_jsonl(File::open(input)?)?;
    let tagged = Tagger::default().apply_all(&records);
    write_records(&tagged, output)?;
    Ok(())
}

fn cmd_clean(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    println!("{}", clean(&text));
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let parser = AutoParser::new();
    let backend = parser.open(input)?;
    let page_count = backend.page_count();

    let processor = DocumentProcessor::new(ProcessOptions::new("info"));
    let stats = processor
        .process_backend(&input.display().to_string(), backend.as_ref())?
        .stats;

    if json {
        let value = serde_json::json!({
            "file": input.display().to_string(),
            "format": format.to_string(),
            "pages": page_count,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Pages".bold(), page_count);

    println!();
    println!("{}", "Record Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Text records".bold(), stats.text_records);
    println!("{}: {}", "Table records".bold(), stats.table_records);
    println!("{}: {}", "Noise pages".bold(), stats.noise_pages);
    println!("{}: {}", "Short texts".bold(), stats.short_texts);
    println!("{}: {}", "Rejected tables".bold(), stats.rejected_tables);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "corpusprep".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document to JSONL corpus preparation tool");
    println!();
    println!("License: MIT");
}
