//! fleetcmd CLI entry point.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use fleetcmd_foundation::GameState;
use fleetcmd_runtime::serialize::{load_from_file, save_to_file};
use fleetcmd_runtime::{
    BatchReport, Console, ConsoleConfig, FileStore, KeyValueStore, MemoryStore, Repl, run_batch,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FLEETCMD_LOG";

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    state: Option<PathBuf>,
    write_demo: Option<PathBuf>,
    history_dir: Option<PathBuf>,
    history_size: Option<usize>,
    no_history: bool,
    batch_mode: bool,
    accept_warnings: bool,
    no_color: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_logging();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-y" | "--yes" => config.accept_warnings = true,
            "--no-color" => config.no_color = true,
            "--no-history" => config.no_history = true,
            "--demo" => config.state = None,
            "--state" => config.state = Some(value(&mut args, "--state")?.into()),
            "--write-demo" => config.write_demo = Some(value(&mut args, "--write-demo")?.into()),
            "--history-dir" => {
                config.history_dir = Some(value(&mut args, "--history-dir")?.into());
            }
            "--history-size" => {
                let raw = value(&mut args, "--history-size")?;
                config.history_size = Some(
                    raw.parse()
                        .map_err(|_| format!("invalid --history-size value: {raw}"))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => {
                config.files.push(PathBuf::from(path));
                config.batch_mode = true;
            }
        }
    }

    Ok(config)
}

fn value(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    args.next()
        .ok_or_else(|| format!("{flag} requires a value").into())
}

fn run(args: Vec<String>) -> Result<bool, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(true);
    }

    if cli.show_version {
        println!("fleetcmd {}", env!("CARGO_PKG_VERSION"));
        return Ok(true);
    }

    if let Some(path) = &cli.write_demo {
        save_to_file(&GameState::demo(), path)?;
        println!("wrote demo snapshot to {}", path.display());
        return Ok(true);
    }

    let state = match &cli.state {
        Some(path) => load_from_file(path)?,
        None => GameState::demo(),
    };
    debug!(player = state.player(), "snapshot loaded");

    let mut config = ConsoleConfig::default().with_color(!cli.no_color && !cli.batch_mode);
    if let Some(size) = cli.history_size {
        config = config.with_history_size(size);
    }

    if cli.no_history {
        return start(&cli, config, MemoryStore::new(), state);
    }
    let dir = cli.history_dir.clone().unwrap_or_else(default_history_dir);
    start(&cli, config, FileStore::new(dir), state)
}

fn start<S: KeyValueStore>(
    cli: &CliConfig,
    config: ConsoleConfig,
    store: S,
    state: GameState,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut console = Console::new(config, store);

    if !cli.batch_mode {
        Repl::new(console, state)?.run()?;
        return Ok(true);
    }

    let mut clean = true;
    if cli.files.is_empty() {
        let report = run_batch(
            &mut console,
            &state,
            io::stdin().lock(),
            io::stdout().lock(),
            cli.accept_warnings,
        )?;
        clean &= print_report("<stdin>", &report);
    }
    for path in &cli.files {
        let file = File::open(path)
            .map_err(|e| format!("failed to open '{}': {e}", path.display()))?;
        let report = run_batch(
            &mut console,
            &state,
            BufReader::new(file),
            io::stdout().lock(),
            cli.accept_warnings,
        )?;
        clean &= print_report(&path.display().to_string(), &report);
    }
    Ok(clean)
}

fn print_report(source: &str, report: &BatchReport) -> bool {
    for problem in &report.rejected {
        eprintln!(
            "{source}:{}: {}: {}",
            problem.line, problem.input, problem.reason
        );
    }
    for problem in &report.held {
        eprintln!(
            "{source}:{}: {}: held, needs confirmation (use --yes): {}",
            problem.line, problem.input, problem.reason
        );
    }
    report.is_clean()
}

fn default_history_dir() -> PathBuf {
    env::var_os("FLEETCMD_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".fleetcmd")))
        .unwrap_or_else(|| PathBuf::from(".fleetcmd"))
}

fn print_help() {
    println!(
        "\x1b[1mfleetcmd\x1b[0m - Fleet order console

\x1b[1mUSAGE:\x1b[0m
    fleetcmd [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Command files to submit in batch mode, one command per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -b, --batch           Submit commands from stdin (or FILES) and exit
    -y, --yes             In batch mode, send commands that carry warnings
    --state PATH          Load a game-state snapshot (MessagePack)
    --demo                Use the built-in demo map (default)
    --write-demo PATH     Write the demo snapshot to PATH and exit
    --history-dir DIR     Directory for command history (default ~/.fleetcmd)
    --history-size N      Number of commands to remember (default 100)
    --no-history          Keep history in memory only
    --no-color            Disable ANSI colours

\x1b[1mENVIRONMENT:\x1b[0m
    FLEETCMD_LOG          Log filter, e.g. debug or fleetcmd_parser=trace
    FLEETCMD_HOME         Default history directory

\x1b[1mEXAMPLES:\x1b[0m
    fleetcmd                          Start the interactive console
    fleetcmd --state turn12.msgpack   Command against a saved snapshot
    echo F1W2 | fleetcmd -b           Validate and emit one order
    fleetcmd -y orders.txt            Submit a file of orders

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help                Show the order reference
    :history             List sent commands
    :state               Summarize the snapshot
    :check <input>       Show context, problems and suggestions
    Tab                  Complete the current input
    Ctrl+D               Exit"
    );
}
