//! rawline REPL binary.

use std::process;
use std::thread;

use anyhow::Result;
use clap::Parser;
use crossterm::terminal;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook::iterator::Signals;

use rawline::{Editor, EditorConfig, KeyMap, ReadOutcome};

#[derive(Parser, Debug)]
#[command(
    name = "rawline",
    about = "Emacs-style line editing for your terminal",
    version,
    long_version = long_version()
)]
struct Cli {
    /// Prompt shown before the editable line
    #[arg(long, default_value = ">> ")]
    prompt: String,

    /// Disable auto-closing of (, [ and {
    #[arg(long)]
    no_pairing: bool,

    /// Auto-close < as well
    #[arg(long)]
    angle_pairs: bool,

    /// Print the active key bindings and exit
    #[arg(long)]
    bindings: bool,

    /// Print the active key bindings as JSON and exit
    #[arg(long, conflicts_with = "bindings")]
    bindings_json: bool,
}

/// Version with build metadata, e.g. `0.1.0 (abc1234 2025-01-01)`.
/// Official builds omit the git hash (see build.rs).
fn long_version() -> String {
    let version = env!("CARGO_PKG_VERSION");
    let date = env!("RAWLINE_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{version} ({sha} {date})"),
        None => format!("{version} ({date})"),
    }
}

/// Restore the terminal before dying on a termination signal.
///
/// Raw mode suppresses the usual Ctrl-C path, so the signals handled
/// here arrive from outside the session (kill, hangup).
fn install_signal_cleanup() -> Result<()> {
    let mut signals = Signals::new([SIGHUP, SIGINT, SIGTERM])?;
    thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            let _ = terminal::disable_raw_mode();
            process::exit(128 + signal);
        }
    });
    Ok(())
}

fn print_bindings(keymap: &KeyMap) {
    let width = keymap
        .bindings()
        .iter()
        .map(|binding| binding.notation.len())
        .max()
        .unwrap_or(0);
    println!("Key Bindings:");
    println!("=============");
    for binding in keymap.bindings() {
        let description = binding.description.as_deref().unwrap_or("");
        println!("{:width$}  {}", binding.notation, description);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.bindings || cli.bindings_json {
        let keymap = KeyMap::standard()?;
        if cli.bindings_json {
            println!("{}", serde_json::to_string_pretty(keymap.bindings())?);
        } else {
            print_bindings(&keymap);
        }
        return Ok(());
    }

    install_signal_cleanup()?;

    let config = EditorConfig {
        prompt: cli.prompt,
        pairing: !cli.no_pairing,
        angle_pairs: cli.angle_pairs,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(config)?;

    println!("rawline REPL (press Ctrl-D on an empty line to exit)");
    loop {
        match editor.read_line()? {
            ReadOutcome::Line(text) => println!("You entered: '{text}'"),
            ReadOutcome::Eof => break,
        }
    }
    Ok(())
}
