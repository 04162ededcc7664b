// Tue Aug 25 2026 - Alex

use anyhow::Context;
use cheat_search::{
    config::SearchConfig,
    display::{DisplaySampler, SampleOutput, DISPLAY_CAP},
    memory::{DumpMemory, RegionKind, RegionSelector},
    search::{encode_search_value, ComparisonPredicate, ElementWidth, NumericBase, SearchEngine},
};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Iterative cheat search over big-endian memory dump snapshots", long_about = None)]
struct Args {
    /// Raw dumps of the same memory region, oldest first. The search is
    /// initialized on the first dump and refined once per following dump.
    #[arg(required = true)]
    snapshots: Vec<PathBuf>,

    /// Console-visible base address of the dumps, in hex
    #[arg(long, default_value = "80000000")]
    base: String,

    /// Element width: byte, short, int, float
    #[arg(short, long)]
    width: Option<ElementWidth>,

    /// Comparison predicate: unknown, equal, not-equal, greater-than, less-than
    #[arg(short, long)]
    predicate: Option<ComparisonPredicate>,

    /// Search value literal; omit to compare each value against its previous one
    #[arg(short, long)]
    value: Option<String>,

    /// Numeral system for integer values: decimal, hexadecimal, octal
    #[arg(long)]
    numeric_base: Option<NumericBase>,

    /// Lower scan bound as a console-visible hex address
    #[arg(long)]
    range_start: Option<String>,

    /// Upper scan bound as a console-visible hex address
    #[arg(long)]
    range_end: Option<String>,

    /// Session settings as JSON; command-line flags override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write all matches (up to the display cap) as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rows to print
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Print the sampled rows as JSON instead of a table
    #[arg(long)]
    json: bool,

    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    setup_logging(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn setup_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };

    let width = args.width.unwrap_or(config.width);
    let predicate = args.predicate.unwrap_or(config.predicate);
    let numeric_base = args.numeric_base.unwrap_or(config.numeric_base);
    let value_text = args.value.clone().or_else(|| config.value.clone());

    let base = parse_hex(&args.base).context("invalid base address")?;
    let memory = Arc::new(
        DumpMemory::open(&args.snapshots, base).context("failed to load snapshots")?,
    );

    let mut selector = RegionSelector::new(memory.clone());
    let region = selector
        .resolve(RegionKind::Main)
        .context("memory region is invalid")?;

    println!(
        "{} Loaded {} snapshot(s), region {}",
        "[*]".blue(),
        memory.snapshot_count(),
        region
    );

    let bounds = scan_bounds(&args, &config, base)?;

    let mut engine = SearchEngine::new(memory.clone());
    engine
        .initialize(RegionKind::Main, width, bounds)
        .context("failed to initialize search")?;
    println!(
        "{} Initialized {} search: {} candidates",
        "[+]".green(),
        width,
        engine.candidate_count()
    );

    let encoded = match &value_text {
        Some(text) => Some(
            encode_search_value(text, width, numeric_base).context("incorrect search value")?,
        ),
        None => None,
    };

    if memory.snapshot_count() == 1 {
        // Single snapshot: one pass against it, the offline equivalent of
        // Initialize followed by an immediate Next Search.
        if encoded.is_some() {
            engine.refine(predicate, encoded)?;
            println!(
                "{} {} pass: {} candidates",
                "[+]".green(),
                predicate,
                engine.candidate_count()
            );
        }
    } else {
        let mut pass = 0;
        while memory.advance() {
            pass += 1;
            engine.refine(predicate, encoded)?;
            println!(
                "{} Pass {} ({}): {} candidates",
                "[+]".green(),
                pass,
                predicate,
                engine.candidate_count()
            );
        }
    }

    let sampler = DisplaySampler::new(memory.clone());
    let output = sampler.sample(&engine, 0, args.limit);

    let summary = output.summary();
    if !summary.is_empty() {
        println!("{} {}", "[*]".blue(), summary.cyan().bold());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_rows(&output, width);
    }

    if let Some(path) = &args.output {
        let all = sampler.sample(&engine, 0, DISPLAY_CAP);
        save_matches(&all, path)
            .with_context(|| format!("failed to save matches to {}", path.display()))?;
        println!("{} Matches saved to: {}", "[+]".green(), path.display());
    }

    Ok(())
}

fn parse_hex(text: &str) -> anyhow::Result<u32> {
    let digits = text.trim().trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16).with_context(|| format!("`{}` is not a hex address", text))
}

/// Turns the console-visible range flags (or config bounds) into the
/// region-relative bounds the engine takes. The engine clamps anything
/// malformed back to the full region.
fn scan_bounds(args: &Args, config: &SearchConfig, base: u32) -> anyhow::Result<Option<(u32, u32)>> {
    let absolute = match (&args.range_start, &args.range_end) {
        (None, None) => config.bounds,
        (start, end) => {
            let start = match start {
                Some(text) => parse_hex(text).context("invalid range start")?,
                None => base,
            };
            let end = match end {
                Some(text) => parse_hex(text).context("invalid range end")?,
                None => u32::MAX,
            };
            Some((start, end))
        }
    };

    Ok(absolute.map(|(start, end)| (start.wrapping_sub(base), end.saturating_sub(base))))
}

fn print_rows(output: &SampleOutput, width: ElementWidth) {
    if output.rows.is_empty() {
        return;
    }

    println!();
    if width.size() == 4 {
        println!("  {:<10} {:<10} {:<12} {}", "Address", "Hex", "Decimal", "Float");
    } else {
        println!("  {:<10} {:<10} {:<12}", "Address", "Hex", "Decimal");
    }

    for row in &output.rows {
        if width.size() == 4 {
            println!(
                "  {:<10} {:<10} {:<12} {}",
                row.address_text().cyan(),
                row.hex,
                row.decimal,
                row.float
            );
        } else {
            println!(
                "  {:<10} {:<10} {:<12}",
                row.address_text().cyan(),
                row.hex,
                row.decimal
            );
        }
    }
}

fn save_matches(output: &SampleOutput, path: &PathBuf) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(output)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}
