//! gerber-sim - run a DFA or NFA description over an input string and print the verdict
//! and trace.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use gerber::{Kind, ParseMode, SymbolMode, simulate_text};
use tracing::{Level, info};

mod config;
mod logging;
mod render;

use crate::config::{AutomatonFile, Labels, LogConfig, SimConfig};
use crate::logging::LogFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum Symbols {
    /// One character per step
    Chars,
    /// Longest match against the alphabet
    Alphabet,
}

impl From<Symbols> for SymbolMode {
    fn from(symbols: Symbols) -> Self {
        match symbols {
            Symbols::Chars => SymbolMode::Chars,
            Symbols::Alphabet => SymbolMode::Alphabet,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gerber-sim",
    about = "Simulate a DFA or NFA over an input string and print the path taken",
    version
)]
struct Cli {
    /// JSON automaton file, fields given as flags override it
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Automaton kind: DFA or NFA
    #[arg(short, long)]
    kind: Option<Kind>,

    /// Comma separated states
    #[arg(long)]
    states: Option<String>,

    /// Comma separated alphabet
    #[arg(long)]
    alphabet: Option<String>,

    /// Start state
    #[arg(long)]
    start: Option<String>,

    /// Comma separated accept states
    #[arg(long)]
    accept: Option<String>,

    /// Transition rules, `from,symbol->to1,to2;...`
    #[arg(short, long)]
    rules: Option<String>,

    /// Input string
    #[arg(short, long)]
    input: Option<String>,

    /// Report malformed rules and undeclared labels instead of ignoring them
    #[arg(long)]
    strict: bool,

    /// How the input is split into symbols
    #[arg(long, value_enum, default_value_t = Symbols::Chars)]
    symbols: Symbols,

    /// Print the transition table before the result
    #[arg(long)]
    table: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Log level for rule parsing, overrides --log-level
    #[arg(long, value_name = "LEVEL")]
    log_rules: Option<Level>,

    /// Log level for the DFA simulator, overrides --log-level
    #[arg(long, value_name = "LEVEL")]
    log_dfa: Option<Level>,

    /// Log level for the NFA simulator, overrides --log-level
    #[arg(long, value_name = "LEVEL")]
    log_nfa: Option<Level>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

impl Cli {
    fn overrides(&self) -> AutomatonFile {
        AutomatonFile {
            kind: self.kind,
            states: self.states.clone().map(Labels::Text),
            alphabet: self.alphabet.clone().map(Labels::Text),
            start: self.start.clone(),
            accept: self.accept.clone().map(Labels::Text),
            transitions: self.rules.clone(),
            input: self.input.clone(),
        }
    }

    fn log_config(&self) -> LogConfig {
        LogConfig {
            global: self.log_level,
            rules: self.log_rules,
            dfa: self.log_dfa,
            nfa: self.log_nfa,
        }
    }

    /// The automaton file, if any, with the flags laid over it.
    fn load(&self) -> Result<SimConfig, String> {
        let file = match &self.file {
            Some(path) => AutomatonFile::read(path)?,
            None => AutomatonFile::default(),
        };
        SimConfig::try_from(file.overlay(self.overrides()))
    }
}

fn main() {
    let cli = Cli::parse();

    logging::init(&cli.log_config(), cli.log_format);

    if let Err(e) = run(&cli) {
        eprintln!("❌ {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let config = cli.load()?;

    let mode = if cli.strict {
        ParseMode::Strict
    } else {
        ParseMode::Permissive
    };
    info!(kind = %config.kind, ?mode, input = %config.input, "simulating");

    let (table, run) = simulate_text(
        &config.automaton,
        &config.transitions,
        config.kind,
        &config.input,
        mode,
        cli.symbols.into(),
    )
    .map_err(|e| e.to_string())?;

    if cli.json {
        let out = serde_json::to_string_pretty(&run).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if cli.table {
        println!("{}", render::table(&table, &config.automaton));
    }
    println!("{}", render::result(&run));
    Ok(())
}
