use anyhow::Context;
use clap::{Parser, Subcommand};
use quad_cli::config::CliConfig;
use quad_cli::render::{render_board, render_status, render_walls, render_with_marks};
use quad_cli::script::{parse_script, run_script};
use quad_core::Coord;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quad-cli")]
#[command(about = "Four-team chess on a walled board")]
struct Cli {
    /// Configuration file (defaults to quad.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log engine decisions (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the starting board and its walls
    Show,
    /// Print the targets of the piece on a cell
    Targets {
        /// Column
        x: i32,
        /// Row
        y: i32,
    },
    /// Play a move script, printing events as JSON lines
    Play {
        /// Script file with one "x,y x,y" move per line
        script: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let mut game = config.new_game().context("setting up the board")?;

    match cli.command {
        Commands::Show => {
            print!("{}", render_board(&game));
            print!("{}", render_walls(&game));
            print!("{}", render_status(&game));
        }
        Commands::Targets { x, y } => {
            let at = Coord::new(x, y);
            let piece = game
                .piece_at(at)
                .with_context(|| format!("no piece on {}", at))?;
            println!("{}", piece);
            let targets = game.legal_targets(piece.id);
            print!("{}", render_with_marks(&game, &targets));
            let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
            println!("targets: {}", list.join(" "));
        }
        Commands::Play { script } => {
            let text = std::fs::read_to_string(&script)
                .with_context(|| format!("reading {}", script.display()))?;
            let moves = parse_script(&text)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let summary = run_script(&mut game, &moves, &mut out)?;
            out.flush()?;
            tracing::info!(
                played = summary.played,
                rejected = summary.rejected,
                skipped = summary.skipped,
                "script finished"
            );
            eprint!("{}", render_board(&game));
            eprint!("{}", render_status(&game));
        }
    }
    Ok(())
}
