//! Laser Routing Puzzle Solver
//!
//! Reads a `.bff` level, searches for a block placement that lights every
//! target, and writes the answer to `<level>_solution.txt`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use lazor::{persistence, simulator, visualization, Level};

/// Solves laser routing puzzles described in `.bff` files.
#[derive(Parser)]
#[command(name = "lazor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a level and save the answer beside it.
    Solve {
        /// Path to the `.bff` level file.
        level: PathBuf,
        /// Print the answer without writing a solution file.
        #[arg(long)]
        no_save: bool,
        /// Draw the solved board with its beam paths.
        #[arg(long)]
        show: bool,
    },
    /// Draw a level's beam paths before any block is placed.
    Show {
        /// Path to the `.bff` level file.
        level: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solve {
            level,
            no_save,
            show,
        } => run_solve(&level, !no_save, show),
        Command::Show { level } => run_show(&level),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Solves a level, prints the outcome, and optionally saves it.
fn run_solve(path: &Path, save: bool, show: bool) -> lazor::Result<()> {
    let level = Level::load(path)?;
    log::info!(
        "loaded {}: {}x{} board, {} blocks to place, {} lasers, {} targets",
        path.display(),
        level.board.width(),
        level.board.height(),
        level.inventory.total(),
        level.lasers.len(),
        level.targets.len()
    );

    let answer = level.solve();
    print!("{}", report(&level, answer.as_ref(), show));

    if save {
        let written = persistence::save(path, answer.as_ref())?;
        println!("Wrote {}", written.display());
    }
    Ok(())
}

/// Renders the level as loaded.
fn run_show(path: &Path) -> lazor::Result<()> {
    let level = Level::load(path)?;
    let visited = simulator::simulate(&level.lasers, &level.board);
    println!(
        "{}",
        visualization::render(&level.board, &level.lasers, &level.targets, &visited)
    );
    Ok(())
}

/// Text shown for a search outcome.
fn report(level: &Level, answer: Option<&lazor::Board>, show: bool) -> String {
    let Some(board) = answer else {
        log::info!("search space exhausted");
        return persistence::format_answer(None);
    };

    let mut output = String::from("Solution:\n");
    output.push_str(&board.to_string());
    if show {
        let visited = simulator::simulate(&level.lasers, board);
        output.push('\n');
        output.push_str(&visualization::render(
            board,
            &level.lasers,
            &level.targets,
            &visited,
        ));
        output.push('\n');
    }
    output
}
