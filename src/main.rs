use std::io;

use anyhow::{Context, Result, bail};
use tracing::info;

use gambit_core::{Position, divide};
use gambit_play::{Session, SessionConfig};

fn main() -> Result<()> {
    // Replies go to stdout; logs must not interleave with them.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => run_session(),
        Some("perft") => run_perft(&args[1..]),
        Some(other) => bail!("unknown subcommand: {other}"),
    }
}

fn run_session() -> Result<()> {
    info!("gambit starting");
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    Session::new(SessionConfig::default()).run(stdin.lock(), &mut stdout)?;
    Ok(())
}

/// `gambit perft <depth> [fen]`: per-move leaf counts, then the total.
fn run_perft(args: &[String]) -> Result<()> {
    let depth: usize = args
        .first()
        .context("perft requires a depth")?
        .parse()
        .context("perft depth must be a number")?;
    let pos: Position = match args.get(1..).filter(|rest| !rest.is_empty()) {
        Some(rest) => rest.join(" ").parse()?,
        None => Position::starting_position(),
    };

    let results = divide(&pos, depth);
    let total: u64 = results.iter().map(|(_, n)| n).sum();
    for (mv, nodes) in &results {
        println!("{mv}: {nodes}");
    }
    println!("\nnodes {total}");
    Ok(())
}
