use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};
use zcalc::calculator::{
    Calculator, KeyInput, copy_to_clipboard, evaluate, format_result, normalize_expression,
    parse_keys,
};
use zcalc::config::Config;

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "A keypad calculator for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (defaults to ~/.config/zcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Copy successful results to the clipboard
    #[arg(long, global = true)]
    copy: bool,

    /// Print the display state as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a whole expression, e.g. "2 + 3 x 4"
    Eval { expression: String },
    /// Press a sequence of keys, e.g. "2+3*4=" ('<' is backspace, 'c' is reset)
    Keys { sequence: String },
    /// Read key sequences from stdin, one line at a time (default)
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = init_tracing();
    let config = Config::load(cli.config.as_deref())?;
    apply_log_level(&filter, &config.log_level)?;

    let copy = cli.copy || config.copy_result;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Eval { expression } => run_eval(&expression, &config, copy),
        Command::Keys { sequence } => run_keys(&sequence, &config, copy, cli.json),
        Command::Repl => run_repl(&config, copy, cli.json),
    }
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the subscriber before the config is read, so config loading can log.
///
/// Starts from `RUST_LOG`, or `warn` until the configured level is known.
fn init_tracing() -> FilterHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Switch to the configured level, unless `RUST_LOG` is set.
fn apply_log_level(handle: &FilterHandle, level: &str) -> Result<()> {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return Ok(());
    }
    handle
        .reload(EnvFilter::new(level))
        .context("Failed to apply log level")
}

fn run_eval(expression: &str, config: &Config, copy: bool) -> Result<()> {
    let Some(normalized) = normalize_expression(expression) else {
        anyhow::bail!("Not a calculator expression: {expression:?}");
    };

    let value = evaluate(&normalized).with_context(|| format!("Failed to evaluate {normalized:?}"))?;
    let text = format_result(value, config.max_decimals);
    println!("{text}");

    if copy {
        copy_result(&text);
    }
    Ok(())
}

fn run_keys(sequence: &str, config: &Config, copy: bool, json: bool) -> Result<()> {
    let keys = parse_keys(sequence)?;
    let mut calc = Calculator::new(config);
    press_all(&mut calc, &keys, copy);
    print_display(&calc, json)?;

    if calc.display().is_error {
        anyhow::bail!("{}", calc.result_display_text());
    }
    Ok(())
}

fn run_repl(config: &Config, copy: bool, json: bool) -> Result<()> {
    let mut calc = Calculator::new(config);
    let stdin = std::io::stdin();

    print_display(&calc, json)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let line = line.trim();

        if matches!(line, "quit" | "exit" | "q") {
            break;
        }

        let keys = match KeyInput::from_name(line) {
            Some(key) => vec![key],
            None => match parse_keys(line) {
                Ok(keys) => keys,
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            },
        };

        press_all(&mut calc, &keys, copy);
        print_display(&calc, json)?;
    }
    Ok(())
}

fn press_all(calc: &mut Calculator, keys: &[KeyInput], copy: bool) {
    for &key in keys {
        if let Some(Ok(_)) = calc.on_key(key)
            && copy
        {
            copy_result(calc.result_display_text());
        }
    }
}

fn copy_result(text: &str) {
    if let Err(e) = copy_to_clipboard(text) {
        warn!("{e}");
    }
}

fn print_display(calc: &Calculator, json: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if json {
        let state = serde_json::to_string(&calc.display()).context("Failed to encode display")?;
        writeln!(out, "{state}")?;
    } else {
        writeln!(out, "{}", calc.current_display_text())?;
        writeln!(out, "= {}", calc.result_display_text())?;
    }
    Ok(())
}
