use std::io::{self, BufRead, BufWriter, Write};
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use looksay_rs::{Query, Strategy, DIRECT_DRIVE_LIMIT, USAGE};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Stack reserved for the direct drive, which recurses once per stage.
const DIRECT_DRIVE_STACK: usize = 512 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Direct,
    Queue,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> &'static [Strategy] {
        match self {
            StrategyArg::Direct => &[Strategy::Direct],
            StrategyArg::Queue => &[Strategy::Queue],
            StrategyArg::Both => &Strategy::ALL,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "looksay")]
#[command(about = "Streams terms of the look-and-say sequence")]
struct Cli {
    /// Query tokens `N [M1 M2 ...]` or `0 M`; read from stdin when absent.
    query: Vec<String>,

    /// Which drive(s) to run.
    #[arg(long, value_enum, default_value_t = StrategyArg::Both)]
    strategy: StrategyArg,

    /// Terms at or above this index skip the direct drive.
    #[arg(long, env = "LOOKSAY_DIRECT_LIMIT", default_value_t = DIRECT_DRIVE_LIMIT)]
    direct_limit: usize,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    println!("{USAGE}");
    let line = if cli.query.is_empty() {
        read_line()?
    } else {
        cli.query.join(" ")
    };
    let query = Query::parse(&line).with_context(|| format!("parse query {line:?}"))?;

    for &strategy in cli.strategy.strategies() {
        if !strategy.permits(query.term(), cli.direct_limit) {
            warn!(
                term = query.term(),
                limit = cli.direct_limit,
                "skipping direct drive"
            );
            continue;
        }
        println!("<{}>", strategy.label());
        run(strategy, query.clone())?;
    }
    Ok(())
}

fn run(strategy: Strategy, query: Query) -> Result<()> {
    let execute = move || -> Result<()> {
        let out = BufWriter::new(io::stdout().lock());
        let (mut out, stats) = query
            .execute(strategy, out)
            .with_context(|| format!("run {}", strategy.label()))?;
        out.flush()?;
        info!(
            stages = stats.stages,
            events = stats.events,
            peak_events = stats.peak_events,
            halted_early = stats.halted_early,
            "{} finished",
            strategy.label()
        );
        Ok(())
    };

    match strategy {
        Strategy::Queue => execute(),
        Strategy::Direct => thread::Builder::new()
            .name("direct-drive".into())
            .stack_size(DIRECT_DRIVE_STACK)
            .spawn(execute)
            .context("spawn direct drive thread")?
            .join()
            .map_err(|_| anyhow!("direct drive thread panicked"))?,
    }
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read query from stdin")?;
    Ok(line)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
