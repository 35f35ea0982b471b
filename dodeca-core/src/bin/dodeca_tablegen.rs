//! Dodeca table generator CLI
//!
//! Generates, validates and prints the renderer's lookup tables.
//!
//! Usage:
//!     dodeca-tablegen                          # all standard tables as C
//!     dodeca-tablegen --table vertices --table edges
//!     dodeca-tablegen --json --output tables.json
//!     dodeca-tablegen --config names.json --table successors

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dodeca_core::{
    CLiteralEmitter, EmitConfig, JsonEmitter, TableEmitter, TableError, TableKind, TableSet,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dodeca-tablegen")]
#[command(about = "Generate hue wheel and dodecahedron lookup tables")]
#[command(version)]
struct Args {
    /// Tables to emit, in order (default: all standard tables)
    #[arg(short, long = "table", value_enum)]
    tables: Vec<TableArg>,

    /// Output as JSON instead of C array literals
    #[arg(long)]
    json: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to a JSON emitter config (type and table names, indentation)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum TableArg {
    HueConstant,
    HueBright,
    Vertices,
    Edges,
    Successors,
    /// Every standard table (successors excluded)
    All,
}

impl TableArg {
    fn kinds(self) -> &'static [TableKind] {
        match self {
            TableArg::HueConstant => &[TableKind::HueConstant],
            TableArg::HueBright => &[TableKind::HueBright],
            TableArg::Vertices => &[TableKind::Vertices],
            TableArg::Edges => &[TableKind::Edges],
            TableArg::Successors => &[TableKind::Successors],
            TableArg::All => &TableKind::STANDARD,
        }
    }
}

fn selected_kinds(args: &[TableArg]) -> Vec<TableKind> {
    if args.is_empty() {
        return TableKind::STANDARD.to_vec();
    }
    let mut kinds: Vec<TableKind> = Vec::new();
    for kind in args.iter().flat_map(|a| a.kinds()) {
        if !kinds.contains(kind) {
            kinds.push(*kind);
        }
    }
    kinds
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they never mix with emitted tables on stdout
    let default_filter = if args.verbose {
        "dodeca_core=debug,dodeca_tablegen=debug"
    } else {
        "dodeca_core=info,dodeca_tablegen=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&args) {
        tracing::error!(code = e.error_code(), category = ?e.category(), "{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TableError> {
    let config = match &args.config {
        Some(path) => EmitConfig::from_json_file(path)?,
        None => EmitConfig::default(),
    };
    let kinds = selected_kinds(&args.tables);

    let tables = TableSet::generate()?;

    let emitter: Box<dyn TableEmitter> = if args.json {
        Box::new(JsonEmitter::new(config))
    } else {
        Box::new(CLiteralEmitter::new(config))
    };

    // Render fully before touching the output so a failure leaves no file
    let mut buf = Vec::new();
    emitter.emit(&tables, &kinds, &mut buf)?;

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            out.write_all(&buf)?;
            out.flush()?;
            tracing::info!(path = %path.display(), format = emitter.name(), "wrote tables");
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(&buf)?;
            out.flush()?;
        }
    }
    Ok(())
}
