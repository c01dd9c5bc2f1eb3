use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scotland_yard::{
    visualize_positions, GameConfig, GameSession, Outcome, PlayerAction, RandomPolicy,
    RoundOutcome, RoundReport, StationGraph, StationId,
};
use tracing::{debug, info, trace};

/// How a single game went.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    /// The number of rounds played.
    pub turns: u32,
    pub travel_log: Vec<StationId>,
}

/// Plays one game with randomly moving players, logging every move.
///
/// `pacing` is slept between rounds. Returns an error only if the board and
/// config do not fit together.
pub fn play_game(
    graph: &StationGraph,
    config: &GameConfig,
    rng: &mut StdRng,
    pacing: Duration,
) -> anyhow::Result<GameSummary> {
    let mut session = GameSession::new(graph.clone(), config)?;
    session.initialize(rng)?;
    debug!(max_turns = session.max_turns(), "Game started");
    for player in session.players() {
        debug!(
            player = player.name(),
            color = %player.color(),
            station = %player.station(),
            tickets = %player.wallet(),
            "Placed"
        );
    }

    let mut policy = RandomPolicy::new(StdRng::seed_from_u64(rng.gen()));
    let outcome = loop {
        if let Some(outcome) = session.outcome() {
            break outcome;
        }
        let report = session.advance(&mut policy)?;
        log_round(&session, &report);
        trace!(
            "\n{}",
            visualize_positions(session.graph(), session.players())
        );
        if !session.is_terminal() && !pacing.is_zero() {
            std::thread::sleep(pacing);
        }
    };

    let travel_log = session
        .evader()
        .and_then(|evader| evader.travel_log())
        .unwrap_or(&[])
        .to_vec();
    let summary = GameSummary {
        outcome,
        turns: session.turn(),
        travel_log,
    };
    Ok(summary)
}

fn log_round(session: &GameSession, report: &RoundReport) {
    let turn = session.turn();
    for action in &report.actions {
        match *action {
            PlayerAction::Moved { player_idx, mv } => {
                let player = &session.players()[player_idx];
                debug!(
                    turn,
                    player = player.name(),
                    station = %mv.destination,
                    ticket = %mv.ticket,
                    "Moved"
                );
            }
            PlayerAction::Skipped { player_idx } => {
                let player = &session.players()[player_idx];
                debug!(
                    turn,
                    player = player.name(),
                    station = %player.station(),
                    "No legal move, skipped"
                );
            }
        }
    }
    if let RoundOutcome::Captured { player_idx } = report.outcome {
        let player = &session.players()[player_idx];
        info!(
            turn,
            player = player.name(),
            station = %player.station(),
            "Mr. X was caught"
        );
    }
}
