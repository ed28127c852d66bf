use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};

use tetrad::catalog::{FileSource, PuzzleProvider, Tier, generate_catalog, write_catalog};
use tetrad::config::{ConfigFile, GeneratorConfig};
use tetrad::session::{Game, MoveError, SessionView, format_elapsed};
use tetrad::{Operation, find_targets};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Tetrad - four-number arithmetic puzzles
#[derive(Parser, Debug)]
#[command(name = "tetrad")]
#[command(about = "Generate and play puzzles: combine four numbers to reach a target")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the puzzle catalog for a number pool
    Generate {
        /// Where to write the catalog JSON
        #[arg(short, long, default_value = "puzzles.json")]
        output: PathBuf,

        /// JSON file with generator settings; flags below override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Smallest pool number
        #[arg(long)]
        pool_min: Option<u32>,

        /// Largest pool number
        #[arg(long)]
        pool_max: Option<u32>,

        /// Numbers per puzzle
        #[arg(long)]
        size: Option<usize>,

        /// Largest target kept
        #[arg(long)]
        ceiling: Option<u32>,

        /// Classify combinations on one thread
        #[arg(long)]
        sequential: bool,
    },
    /// List the targets a set of numbers can reach
    Reach {
        /// Starting numbers
        #[arg(required = true)]
        numbers: Vec<u32>,

        /// Largest target kept
        #[arg(long, default_value = "150")]
        ceiling: u32,
    },
    /// Play puzzles from a generated catalog
    Play {
        /// Catalog JSON written by `generate`
        #[arg(short, long, default_value = "puzzles.json")]
        catalog: PathBuf,

        /// Starting difficulty
        #[arg(short, long, default_value = "medium")]
        tier: Tier,
    },
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    match args.command {
        Command::Generate {
            output,
            config,
            pool_min,
            pool_max,
            size,
            ceiling,
            sequential,
        } => {
            let base = match config {
                Some(path) => GeneratorConfig::from_file(&path)
                    .with_context(|| format!("Invalid config file {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            let overrides = ConfigFile {
                pool_min,
                pool_max,
                combination_size: size,
                ceiling,
                parallel: sequential.then_some(false),
                ..ConfigFile::default()
            };
            let config = base.merge(overrides).context("Invalid generator settings")?;
            run_generate(&config, &output)
        }
        Command::Reach { numbers, ceiling } => run_reach(&numbers, ceiling),
        Command::Play { catalog, tier } => run_play(catalog, tier),
    }
}

fn run_generate(config: &GeneratorConfig, output: &Path) -> Result<()> {
    let catalog = generate_catalog(config).context("Puzzle generation failed")?;
    write_catalog(output, &catalog)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Easy: {}", catalog.easy.len());
    println!("Medium: {}", catalog.medium.len());
    println!("Hard: {}", catalog.hard.len());
    println!("Puzzles saved to {}", output.display());
    Ok(())
}

fn run_reach(numbers: &[u32], ceiling: u32) -> Result<()> {
    let targets = find_targets(numbers, ceiling).context("Search failed")?;
    let tier = tetrad::catalog::TierThresholds::default().tier_for(targets.len());

    match tier {
        Some(tier) => println!("{:?}: {} targets ({})", numbers, targets.len(), tier),
        None => println!("{:?}: no targets up to {}", numbers, ceiling),
    }
    let listed: Vec<String> = targets.iter().map(u32::to_string).collect();
    if !listed.is_empty() {
        println!("{}", listed.join(" "));
    }
    Ok(())
}

const PLAY_HELP: &str = "\
Commands:
  1-4        select a number (again to deselect)
  + - * /    choose an operation
  r          reset the board
  n          next puzzle (counts as a skip unless solved)
  e, m, h    switch difficulty
  ?          show this help
  q          quit";

fn run_play(catalog: PathBuf, tier: Tier) -> Result<()> {
    let provider = Arc::new(PuzzleProvider::new(FileSource::new(&catalog)));
    provider
        .load_catalog()
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    provider
        .ensure_tiers_populated()
        .context("Catalog cannot serve every difficulty")?;

    let mut game = Game::start(provider, tier).context("Failed to start a game")?;
    info!("Playing {} puzzles from {}", tier, catalog.display());

    println!("{}", PLAY_HELP);
    println!("{}", render(&game, &game.view()));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if matches!(input, "q" | "quit") {
            break;
        }

        let outcome = apply_input(&mut game, input)?;
        match outcome {
            Ok(view) => {
                println!("{}", render(&game, &view));
                if view.solved {
                    println!(
                        "Solved in {}! Press n for the next puzzle.",
                        format_elapsed(game.session().elapsed())
                    );
                }
            }
            Err(message) => println!("{}", message),
        }
        io::stdout().flush().context("Failed to flush output")?;
    }

    println!("Final score: {}-{}", game.wins(), game.skips());
    Ok(())
}

/// Outer error is fatal; inner error is a refused move to report and ignore.
fn apply_input(game: &mut Game, input: &str) -> Result<std::result::Result<SessionView, String>> {
    if input == "?" || input == "help" {
        return Ok(Err(PLAY_HELP.to_string()));
    }
    if let Ok(position) = input.parse::<usize>() {
        if position == 0 {
            return Ok(Err("Numbers are counted from 1".to_string()));
        }
        return Ok(game.select_slot(position - 1).map_err(describe));
    }
    if let Ok(operation) = input.parse::<Operation>() {
        return Ok(game.select_operation(operation).map_err(describe));
    }
    match input {
        "r" | "reset" => Ok(Ok(game.reset())),
        "n" | "next" | "skip" => Ok(Ok(game.skip().context("No puzzle to deal")?)),
        _ => match input.parse::<Tier>() {
            Ok(tier) => Ok(Ok(game
                .change_tier(tier)
                .with_context(|| format!("No {} puzzles to deal", tier))?)),
            Err(_) => {
                warn!("Unrecognized input: {}", input);
                Ok(Err(format!("Unknown command '{}', ? for help", input)))
            }
        },
    }
}

fn describe(error: MoveError) -> String {
    format!("Not allowed: {}", error)
}

fn render(game: &Game, view: &SessionView) -> String {
    let slots: Vec<String> = view
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| match &slot.display {
            Some(text) if view.selected_slot == Some(i) => format!("{}:[{}]", i + 1, text),
            Some(text) => format!("{}: {} ", i + 1, text),
            None => format!("{}:  . ", i + 1),
        })
        .collect();
    let pending = view
        .pending_operation
        .map(|op| format!("  {}", op))
        .unwrap_or_default();

    format!(
        "[{}] target {:>3} | {}{} | {} {}-{}",
        game.tier(),
        view.target,
        slots.join(" "),
        pending,
        format_elapsed(game.session().elapsed()),
        game.wins(),
        game.skips()
    )
}
