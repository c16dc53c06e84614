//! # CLI Behavior
//!
//! This is the interactive client for shelf. It is the only place that knows
//! about terminal I/O, exit codes, and output formatting.
//!
//! ## Flow
//!
//! 1. `shelf` opens both stores in the data directory.
//! 2. The login gate offers Login or Register. A failed login exits with
//!    status 1; registration repeats until it succeeds.
//! 3. The book menu runs until the user picks Exit or input ends.
//!
//! `shelf paths` prints where the data lives without opening anything.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `console`: Prompt/read over any `BufRead`/`Write` pair
//! - `session`: Login gate and book menu
//! - `print`: Message and book formatting

mod console;
mod print;
mod session;
pub mod setup;

use console::Console;
use setup::{Cli, Commands};
use shelf::error::Result;
use shelf::init::{paths_for, resolve_data_dir, ShelfContext};
use std::io::{self, IsTerminal};
use tracing::info;

/// Exit status for a refused login.
pub const EXIT_DENIED: i32 = 1;

pub fn run(cli: Cli) -> Result<i32> {
    let data_dir = resolve_data_dir(cli.data_dir)?;

    if let Some(Commands::Paths) = cli.command {
        let paths = paths_for(data_dir);
        println!("data:  {}", paths.data_dir.display());
        println!("users: {}", paths.users_file.display());
        println!("books: {}", paths.books_file.display());
        return Ok(0);
    }

    let mut ctx = ShelfContext::open(data_dir)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && io::stdout().is_terminal();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), interactive);

    if !session::authenticate(&mut console, &mut ctx.credentials)? {
        console.line("Exiting the application.")?;
        return Ok(EXIT_DENIED);
    }
    info!("user authenticated");

    session::run_menu(&mut console, &mut ctx.catalog)?;
    Ok(0)
}
