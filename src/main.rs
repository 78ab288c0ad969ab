use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use instant_insanity::core::{Orientation, PuzzleConfig, DEFAULT_STORAGE_KEY};
use instant_insanity::render::{render_state, GlyphStyle};
use instant_insanity::session::Session;
use instant_insanity::solver::solve;
use instant_insanity::storage::FileStorage;

/// Play the Instant Insanity cube puzzle from the terminal.
#[derive(Parser, Debug)]
#[command(name = "insanity", version)]
struct Cli {
    /// Directory holding the saved puzzle.
    #[arg(long, default_value = ".insanity")]
    state_dir: PathBuf,

    /// Storage key of the saved puzzle.
    #[arg(long, default_value = DEFAULT_STORAGE_KEY)]
    key: String,

    /// Draw faces as letters instead of suit glyphs.
    #[arg(long)]
    letters: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the cubes and goals.
    Show,
    /// Click a face: rotate CUBE (1-based) by the face at ORIENTATION.
    Click {
        cube: usize,
        orientation: Orientation,
    },
    /// Apply seeded random clicks.
    Scramble {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 20)]
        clicks: usize,
    },
    /// Find clicks that solve the puzzle.
    Solve {
        /// Apply the solution instead of only printing it.
        #[arg(long)]
        apply: bool,
    },
    /// Forget the saved puzzle and start over.
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let style = if cli.letters {
        GlyphStyle::Letters
    } else {
        GlyphStyle::Glyphs
    };

    let storage = FileStorage::new(&cli.state_dir);
    let config = PuzzleConfig::classic().with_storage_key(cli.key);
    let mut session = Session::open(storage, config);

    match cli.command {
        Command::Show => {}
        Command::Click { cube, orientation } => {
            let index = cube
                .checked_sub(1)
                .context("cubes are numbered from 1")?;
            session
                .click(index, orientation)
                .with_context(|| format!("failed to click cube {cube} {orientation}"))?;
        }
        Command::Scramble { seed, clicks } => {
            session
                .scramble(seed, clicks)
                .context("failed to scramble")?;
        }
        Command::Solve { apply } => {
            let solution = solve(session.state()).context("no solution exists")?;
            if solution.is_empty() {
                println!("already solved");
            }
            for click in solution.clicks() {
                println!("{click}");
                if apply {
                    session.apply(click).with_context(|| format!("failed to apply {click}"))?;
                }
            }
            if !apply {
                return Ok(());
            }
        }
        Command::Reset => {
            session.reset().context("failed to reset")?;
        }
    }

    print!("{}", render_state(session.state(), style));
    Ok(())
}
