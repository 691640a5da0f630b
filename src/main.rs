// ttc: interactive lexer and syntax tree printer

use std::io;

use clap::Parser as _;
use crossterm::tty::IsTty;
use tracing_subscriber::EnvFilter;

use ttc::ui::{App, Mode};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the tokens of each line instead of its syntax tree
    #[arg(short, long)]
    tokens: bool,

    /// Process a single expression and exit instead of prompting
    #[arg(short = 'x', long)]
    expression: Option<String>,

    /// Never color the output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only program output.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut stdout = io::stdout();
    let mode = if args.tokens { Mode::Tokens } else { Mode::Tree };
    let app = App::new(mode, !args.no_color && stdout.is_tty());

    match args.expression {
        Some(expression) => app.evaluate(&expression, &mut stdout)?,
        None => app.run(io::stdin().lock(), &mut stdout)?,
    }

    Ok(())
}
