use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use argsplit::config::{ColorMode, OutputFormat, Settings};
use argsplit::{logging, report, ArgsError, Arguments};

/// Classify command-line tokens into flags, options and positional arguments.
#[derive(Debug, Parser)]
#[command(name = "argsplit", version)]
struct Cli {
    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// When to color the text report
    #[arg(long, value_enum)]
    color: Option<ColorMode>,

    /// Print the command name without leading directories
    #[arg(long)]
    strip: bool,

    /// Settings file (default: <config dir>/argsplit/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Exit with status 2 if any token is not accepted
    #[arg(long)]
    strict: bool,

    /// Flag or option name the classified program understands (repeatable)
    #[arg(long = "accept", value_name = "NAME")]
    accept: Vec<String>,

    /// Number of positional arguments the classified program takes
    #[arg(long, value_name = "N")]
    max_positional: Option<usize>,

    /// Invocation to classify; the first token is the command name
    #[arg(last = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

impl Cli {
    /// CLI flags override the settings file.
    fn apply(&self, settings: &mut Settings) {
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(color) = self.color {
            settings.color = color;
        }
        settings.strip_command |= self.strip;
        settings.strict |= self.strict;
    }
}

fn main() -> ExitCode {
    logging::init_tracing("warn");

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
    .context("loading settings")?;
    cli.apply(&mut settings);

    let args = Arguments::from_invocation(cli.tokens.iter().map(String::as_str))?;
    print!("{}", report::render(&args, &settings)?);

    if !settings.strict {
        return Ok(ExitCode::SUCCESS);
    }

    let tracked = args.track();
    tracked.has_any(&cli.accept);
    let limit = cli.max_positional.unwrap_or(usize::MAX);
    for index in 0..args.positional().len().min(limit) {
        tracked.get(index);
    }

    match tracked.verify() {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(ArgsError::Unconsumed { tokens }) => {
            tracing::info!(?tokens, "strict check failed");
            let color = settings.color.enabled_on_stderr();
            eprintln!("Error: {}", report::render_unconsumed(&tokens, color));
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
