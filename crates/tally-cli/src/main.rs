//! Command-line front end for the tally calculators
//!
//! Runs a single operation and prints its result, or starts an
//! interactive session that keeps an operation history.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;
mod repl;

use command::{ArithOp, Command, Session};
use tally::{CalcContext, Value};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Arithmetic with history, and rectangle geometry", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add two values
    Add(Operands),
    /// Subtract Y from X
    Sub(Operands),
    /// Multiply two numbers
    Mul(Operands),
    /// Divide X by Y
    Div(Operands),
    /// Area of a rectangle
    Area {
        #[arg(allow_negative_numbers = true)]
        length: f64,
        #[arg(allow_negative_numbers = true)]
        width: f64,
    },
    /// Perimeter of a rectangle
    Perimeter {
        #[arg(allow_negative_numbers = true)]
        length: f64,
        #[arg(allow_negative_numbers = true)]
        width: f64,
    },
    /// Start an interactive session
    Repl {
        /// Keep at most this many history entries
        #[arg(long)]
        history_capacity: Option<usize>,
    },
}

/// Two operands, each read as an integer, a float, or else text.
#[derive(Args)]
struct Operands {
    #[arg(allow_negative_numbers = true)]
    x: String,
    #[arg(allow_negative_numbers = true)]
    y: String,
}

impl Operands {
    fn into_command(self, op: ArithOp) -> Command {
        Command::Arith {
            op,
            x: Value::parse_lenient(&self.x),
            y: Value::parse_lenient(&self.y),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let ctx = CalcContext {
        trace: cli.verbose,
        ..Default::default()
    };

    let command = match cli.command {
        Commands::Add(args) => args.into_command(ArithOp::Add),
        Commands::Sub(args) => args.into_command(ArithOp::Sub),
        Commands::Mul(args) => args.into_command(ArithOp::Mul),
        Commands::Div(args) => args.into_command(ArithOp::Div),
        Commands::Area { length, width } => Command::Area { length, width },
        Commands::Perimeter { length, width } => Command::Perimeter { length, width },
        Commands::Repl { history_capacity } => {
            let ctx = CalcContext {
                history_capacity,
                ..ctx
            };
            repl::run(ctx, cli.json)?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    let reply = Session::new(ctx).execute(command);
    if let Some(output) = reply.render(cli.json) {
        if reply.is_failure() {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
    }

    Ok(if reply.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
