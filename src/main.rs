use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use escape_puzzle::{GameState, SearchConfig, Solver, SolverConfig, Strategy, TurnRecord};

/// Which strategies to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Scripted,
    Search,
    Both,
}

impl StrategyArg {
    fn strategies(self) -> Vec<Strategy> {
        match self {
            StrategyArg::Scripted => vec![Strategy::Scripted],
            StrategyArg::Search => vec![Strategy::Search],
            StrategyArg::Both => vec![Strategy::Scripted, Strategy::Search],
        }
    }
}

/// Solve the red/yellow escape puzzle and print every move.
#[derive(Parser)]
#[command(name = "escape", about = "Solve the 3x3 red/yellow escape puzzle")]
struct Cli {
    /// Strategy to run
    #[arg(long, value_enum, default_value = "both")]
    strategy: StrategyArg,

    /// Stop after this many moves
    #[arg(long, default_value_t = 20)]
    max_moves: u32,

    /// Search depth for red's decisions
    #[arg(long, default_value_t = 4)]
    red_depth: u32,

    /// Search depth for yellow's decisions
    #[arg(long, default_value_t = 3)]
    yellow_depth: u32,

    /// Pause between moves, in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let search = SearchConfig::default()
        .with_red_depth(cli.red_depth)
        .with_yellow_depth(cli.yellow_depth);
    let delay = Duration::from_millis(cli.delay_ms);

    let mut all_escaped = true;
    for strategy in cli.strategy.strategies() {
        let config = SolverConfig::default()
            .with_strategy(strategy)
            .with_max_moves(cli.max_moves)
            .with_search(search.clone());
        all_escaped &= run(config, delay)?;
    }

    if !all_escaped {
        std::process::exit(1);
    }
    Ok(())
}

/// Play one game, printing as it goes. Returns whether red escaped.
fn run(config: SolverConfig, delay: Duration) -> Result<bool> {
    let strategy = config.strategy;
    let solver = Solver::new(config).with_context(|| format!("configuring {strategy} solver"))?;

    println!("=== {strategy} strategy ===");
    println!("Initial state:");
    println!("{}", solver.state().board());

    let report = solver.solve_with(|state: &GameState, record: &TurnRecord| {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        print_turn(state, record);
    });

    if report.is_success() {
        println!("\n🎉 Red has escaped!");
    } else {
        println!("\n❌ Could not solve the puzzle ({:?}).", report.outcome);
    }
    println!("\nSummary: {} moves in total.\n", report.move_count());

    Ok(report.is_success())
}

fn print_turn(state: &GameState, record: &TurnRecord) {
    match record.score {
        Some(score) => println!("\nMove {}: {} (score {score})", record.number, record.mv),
        None => println!("\nMove {}: {}", record.number, record.mv),
    }
    println!("{}", state.board());
    if !state.is_won() {
        println!("Next turn: {}", record.next_phase);
    }
}
