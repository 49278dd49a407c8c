use std::io::Read as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use pericope::Pericope;

#[derive(Parser)]
#[command(
    name = "pericope",
    about = "Recognize, normalize, and substitute Bible references"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-render a reference in canonical form
    Normalize {
        /// Text to read; stdin when omitted
        text: Option<String>,
    },
    /// List the canonical verse ids a reference covers
    Parse {
        /// Text to read; stdin when omitted
        text: Option<String>,
        /// Emit a JSON summary instead of one id per line
        #[arg(long)]
        json: bool,
    },
    /// Replace each reference in the text with a {{verse-id}} placeholder
    #[command(alias = "substitute")]
    Sub {
        /// Text to read; stdin when omitted
        text: Option<String>,
    },
    /// Restore references from {{verse-id}} placeholders
    #[command(alias = "reverse")]
    Rsub {
        /// Text to read; stdin when omitted
        text: Option<String>,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Normalize { text } => {
            let input = read_input(text)?;
            let pericope: Pericope = input.parse()?;
            println!("{pericope}");
        },
        Commands::Parse { text, json } => {
            let input = read_input(text)?;
            let pericope: Pericope = input.parse()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pericope)?);
            } else {
                for verse in pericope.verses() {
                    println!("{}", verse.id_string());
                }
            }
        },
        Commands::Sub { text } => {
            let input = read_input(text)?;
            println!("{}", pericope::sub(&input));
        },
        Commands::Rsub { text } => {
            let input = read_input(text)?;
            println!("{}", pericope::rsub(&input));
        },
    }
    Ok(())
}

/// The positional argument when given, otherwise all of stdin.
fn read_input(arg: Option<String>) -> std::io::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim_end().to_string())
        },
    }
}
