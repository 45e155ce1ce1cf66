use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{info, warn};

use hermann_mauguin::{
    Dimension, HermannMauguin, HermannMauguin1D, HermannMauguin3D, StandardSymbols, SymbolSource,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "hermann-mauguin")]
#[command(about = "Parse, check and abbreviate Hermann-Mauguin symmetry symbols")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use for `check` (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a symbol given in long or underscore notation
    Parse {
        /// Symbol, e.g. "F 4_1/d -3 2/m"
        symbol: String,

        /// Spatial dimension (1, 2 or 3)
        #[arg(short, long, default_value = "3")]
        dimension: usize,
    },
    /// Describe the table symbol with the given number
    Lookup {
        /// Group number (1-based)
        index: usize,

        /// Spatial dimension (1, 2 or 3)
        #[arg(short, long, default_value = "3")]
        dimension: usize,
    },
    /// List every table symbol with its short form
    Table {
        /// Spatial dimension (1, 2 or 3)
        #[arg(short, long, default_value = "3")]
        dimension: usize,
    },
    /// Verify that every table symbol survives a parse/long-form round trip
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    match cli.command {
        Commands::Parse { symbol, dimension } => parse_symbol(&symbol, dimension),
        Commands::Lookup { index, dimension } => {
            let dimension = Dimension::from_rank(dimension)?;
            let source = StandardSymbols;
            let notation = source.lookup(dimension, index)?;
            info!("{} symbol #{} is '{}'", dimension, index, notation);
            parse_symbol(notation, dimension.rank())
        }
        Commands::Table { dimension } => print_table(Dimension::from_rank(dimension)?),
        Commands::Check => run_check(),
    }
}

fn parse_symbol(symbol: &str, dimension: usize) -> Result<()> {
    match Dimension::from_rank(dimension)? {
        Dimension::_1D => describe(&parse_as::<1>(symbol)?),
        Dimension::_2D => describe(&parse_as::<2>(symbol)?),
        Dimension::_3D => {
            let parsed: HermannMauguin3D = parse_as(symbol)?;
            describe(&parsed);
            println!("crystal system: {:?}", parsed.crystal_system());
        }
    }
    Ok(())
}

fn parse_as<const N: usize>(symbol: &str) -> Result<HermannMauguin<N>> {
    HermannMauguin::<N>::parse(symbol).with_context(|| format!("cannot read '{}'", symbol))
}

fn describe<const N: usize>(symbol: &HermannMauguin<N>) {
    let kind = if symbol.is_point_group() {
        "point group"
    } else {
        "space group"
    };
    println!("long form:      {}", symbol);
    println!("short form:     {:#}", symbol);
    println!("ascii:          {}", symbol.long_form_ascii());
    println!("kind:           {} ({})", kind, symbol.dimension());
    println!("axis orders:    {:?}", symbol.axis_orders());
    if let Some(index) = symbol.table_index() {
        println!("table index:    {}", index);
    }
}

fn print_table(dimension: Dimension) -> Result<()> {
    let source = StandardSymbols;
    for index in 1..=source.len(dimension) {
        let notation = source.lookup(dimension, index)?;
        let short = match dimension {
            Dimension::_1D => HermannMauguin1D::parse(notation).map(|s| s.short_form()),
            Dimension::_2D => Ok(notation.replace(' ', "")),
            Dimension::_3D => HermannMauguin3D::parse(notation).map(|s| s.short_form()),
        }?;
        println!("{:>4}  {:<22}{}", index, notation, short);
    }
    Ok(())
}

// Long form of the parsed table entry, or a description of what went wrong.
fn round_trip<const N: usize>(index: usize) -> Option<String> {
    let dimension = Dimension::from_rank(N).ok()?;
    let source = StandardSymbols;
    let notation = source.lookup(dimension, index).ok()?;
    match HermannMauguin::<N>::from_index(index) {
        Ok(symbol) if symbol.long_form() == notation => None,
        Ok(symbol) => Some(format!(
            "{} #{}: '{}' renders as '{}'",
            dimension,
            index,
            notation,
            symbol.long_form()
        )),
        Err(e) => Some(format!("{} #{}: {}", dimension, index, e)),
    }
}

fn run_check() -> Result<()> {
    let space_groups = StandardSymbols.len(Dimension::_3D);
    let line_groups = StandardSymbols.len(Dimension::_1D);
    info!(
        "Checking {} space groups and {} line groups",
        space_groups, line_groups
    );

    #[cfg(feature = "parallel")]
    let mut failures: Vec<String> = (1..=space_groups)
        .into_par_iter()
        .filter_map(round_trip::<3>)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let mut failures: Vec<String> = (1..=space_groups).filter_map(round_trip::<3>).collect();

    failures.extend((1..=line_groups).filter_map(round_trip::<1>));

    for failure in &failures {
        warn!("{}", failure);
    }
    if !failures.is_empty() {
        bail!("{} table symbols failed the round trip", failures.len());
    }
    println!("all {} symbols round-trip", space_groups + line_groups);
    Ok(())
}
