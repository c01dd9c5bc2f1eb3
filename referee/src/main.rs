use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use referee::play_game;
use scotland_yard::{GameConfig, Outcome, StationGraph};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the JSON file defining the stations of the board
    #[arg(long, default_value = "data/stations.json")]
    stations: PathBuf,

    /// Path to the game config JSON file
    #[arg(short, long, default_value = "data/game.json")]
    config: PathBuf,

    /// How many games to play
    #[arg(short, long, default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between two rounds, in milliseconds
    #[arg(short, long, default_value_t = 0)]
    delay_ms: u64,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct Tally {
    seekers_wins: usize,
    evader_wins: usize,
    capture_turns: usize,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let graph = StationGraph::load(&args.stations)?;
    let config = GameConfig::load(&args.config)?;
    info!(
        stations = graph.len(),
        detectives = config.num_detectives,
        max_turns = config.max_turns,
        "Loaded board"
    );

    let pacing = Duration::from_millis(args.delay_ms);
    let mut tally = Tally::default();
    for game_idx in 0..args.num_games {
        let summary = play_game(&graph, &config, &mut rng, pacing)?;
        let travel_log: Vec<String> = summary
            .travel_log
            .iter()
            .map(|id| id.to_string())
            .collect();
        match summary.outcome {
            Outcome::SeekersWin => {
                info!(game_idx, turns = summary.turns, "Detectives win");
                tally.seekers_wins += 1;
                tally.capture_turns += summary.turns as usize;
            }
            Outcome::EvaderWins => {
                info!(game_idx, turns = summary.turns, "Mr. X wins");
                tally.evader_wins += 1;
            }
        }
        info!(game_idx, travel_log = %travel_log.join(" → "), "Mr. X's route");
    }

    let avg_capture = if tally.seekers_wins > 0 {
        format!(
            " (caught after {:.1} rounds on average)",
            tally.capture_turns as f32 / tally.seekers_wins as f32
        )
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} wins by the detectives{}\n- {} wins by Mr. X",
        tally.seekers_wins, avg_capture, tally.evader_wins
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
