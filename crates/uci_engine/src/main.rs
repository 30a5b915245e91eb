use adaptive_engine::{AdaptiveEngine, EngineConfig, EngineError, Perspective, MAX_DEPTH};
use anyhow::Context;
use chess_core::{set_position_from_uci, Color, Position, RulesAdapter};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// UCI front end for the adaptive engine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML engine config
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured search depth
    #[arg(long)]
    depth: Option<u8>,
    /// Seed for reproducible move ordering
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    // stdout is the UCI channel, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut engine = AdaptiveEngine::with_config(config).context("building engine")?;
    info!(depth = engine.config().depth, "engine ready");

    // UCI engines communicate via stdin/stdout.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut pos = Position::startpos();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, rest)) = parts.split_first() else {
            continue;
        };

        match cmd {
            "uci" => {
                writeln!(stdout, "id name {}", engine.name())?;
                writeln!(stdout, "id author {}", engine.author())?;
                writeln!(
                    stdout,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    engine.config().depth
                )?;
                writeln!(stdout, "option name ExplorationRate type string default 0.1")?;
                writeln!(
                    stdout,
                    "option name Strategy type combo default capture_extended var capture_extended var fixed_depth"
                )?;
                writeln!(
                    stdout,
                    "option name Perspective type combo default fixed var fixed var side_to_move"
                )?;
                writeln!(stdout, "uciok")?;
                stdout.flush()?;
            }
            "isready" => {
                writeln!(stdout, "readyok")?;
                stdout.flush()?;
            }
            "setoption" => {
                // setoption name <name> value <value>
                let name = field_after(rest, "name");
                let value = field_after(rest, "value");
                match (name, value) {
                    (Some(name), Some(value)) if engine.set_option(name, value) => {
                        info!(name, value, "option set");
                    }
                    _ => warn!(line = %line, "ignored setoption"),
                }
            }
            "ucinewgame" => {
                pos = Position::startpos();
                engine.new_game();
            }
            "position" => {
                match set_position_from_uci(&mut pos, rest) {
                    Ok(()) => debug!(fen = %pos.fen(), ply = pos.ply(), "position set"),
                    Err(e) => warn!(error = %e, line = %line, "ignored position command"),
                }
            }
            "go" => {
                // Time controls are ignored; the engine searches to its configured depth
                if pos.side_to_move() == Color::White
                    && engine.config().perspective == Perspective::Fixed
                {
                    warn!("fixed perspective misjudges captures for White; consider Perspective side_to_move");
                }
                let reply = match engine.choose_move(&mut pos) {
                    Ok(mv) => pos.notation(&mv),
                    Err(EngineError::NoLegalMoves) => "0000".to_string(),
                    Err(e) => return Err(e).context("move selection failed"),
                };
                if let Some(report) = engine.last_search() {
                    writeln!(
                        stdout,
                        "info depth {} score cp {} nodes {}",
                        report.depth, report.score, report.nodes
                    )?;
                }
                writeln!(stdout, "bestmove {reply}")?;
                stdout.flush()?;
            }
            "quit" => break,
            _ => warn!(command = cmd, "unknown command"),
        }
    }

    Ok(())
}

fn field_after<'a>(parts: &[&'a str], key: &str) -> Option<&'a str> {
    let idx = parts.iter().position(|&p| p == key)?;
    parts.get(idx + 1).copied()
}
