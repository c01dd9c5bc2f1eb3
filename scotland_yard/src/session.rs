use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    play_round, Color, GameConfig, MalformedGraph, MovePolicy, Player, RoundOutcome, RoundReport,
    SessionError, StationGraph, StationId, TicketWallet,
};

/// Who won the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A detective caught Mr. X.
    SeekersWin,
    /// Mr. X stayed free for the maximum number of rounds.
    EvaderWins,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    /// Once reached, the state never changes again.
    Terminal(Outcome),
}

/// One game, from placing the players until somebody wins.
///
/// The players are kept in turn order: the evader first, then the seekers.
#[derive(Clone, Debug)]
pub struct GameSession {
    graph: StationGraph,
    players: Vec<Player>,
    start_stations: Vec<StationId>,
    num_detectives: usize,
    evader_tickets: TicketWallet,
    detective_tickets: TicketWallet,
    max_turns: u32,
    turn: u32,
    state: SessionState,
}

impl GameSession {
    /// Creates a session that still needs to be [initialized](Self::initialize).
    ///
    /// Fails if the start pool is empty or names a station that is not on the graph,
    /// or if the game would be over before the first round.
    pub fn new(graph: StationGraph, config: &GameConfig) -> Result<Self, MalformedGraph> {
        if config.max_turns == 0 {
            return Err(MalformedGraph::ZeroTurnLimit);
        }
        if config.start_stations.is_empty() {
            return Err(MalformedGraph::InvalidStartPool { id: None });
        }
        if let Some(&id) = config
            .start_stations
            .iter()
            .find(|&&id| !graph.contains(id))
        {
            return Err(MalformedGraph::InvalidStartPool { id: Some(id) });
        }

        Ok(Self {
            graph,
            players: Vec::new(),
            start_stations: config.start_stations.clone(),
            num_detectives: config.num_detectives,
            evader_tickets: config.evader_tickets,
            detective_tickets: config.detective_tickets,
            max_turns: config.max_turns,
            turn: 0,
            state: SessionState::NotStarted,
        })
    }

    /// Creates a session that is already in progress, with the players
    /// wherever they are.
    ///
    /// Panics unless `players[0]` is the only evader and `max_turns` is positive.
    pub fn with_players(graph: StationGraph, players: Vec<Player>, max_turns: u32) -> Self {
        assert!(max_turns > 0, "The game must last at least one round");
        assert!(
            players.first().is_some_and(Player::is_evader)
                && players.iter().skip(1).all(|p| !p.is_evader()),
            "The evader must be the first and only evader in the list of players"
        );
        Self {
            graph,
            players,
            start_stations: Vec::new(),
            num_detectives: 0,
            evader_tickets: TicketWallet::new(),
            detective_tickets: TicketWallet::new(),
            max_turns,
            turn: 0,
            state: SessionState::InProgress,
        }
    }

    /// Places Mr. X and the detectives on randomly drawn start stations.
    ///
    /// Every player is drawn from the whole pool, so players may share a station.
    pub fn initialize<R: Rng>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }

        // Can't fail, the pool was checked to be non-empty in new()
        let draw = |rng: &mut R| *self.start_stations.choose(rng).unwrap();

        let mut players = Vec::with_capacity(self.num_detectives + 1);
        players.push(Player::evader("Mr. X", draw(rng), self.evader_tickets));
        for idx in 0..self.num_detectives {
            players.push(Player::seeker(
                format!("Detective {}", idx + 1),
                Color::DETECTIVES[idx % Color::DETECTIVES.len()],
                draw(rng),
                self.detective_tickets,
            ));
        }

        self.players = players;
        self.turn = 0;
        self.state = SessionState::InProgress;
        Ok(())
    }

    /// Plays one round and updates the state.
    ///
    /// After the game has ended, this returns an error and changes nothing.
    pub fn advance(&mut self, policy: &mut impl MovePolicy) -> Result<RoundReport, SessionError> {
        match self.state {
            SessionState::NotStarted => return Err(SessionError::NotStarted),
            SessionState::Terminal(_) => return Err(SessionError::SessionFinished),
            SessionState::InProgress => {}
        }

        let report = play_round(&self.graph, &mut self.players, policy);
        self.turn += 1;
        if let RoundOutcome::Captured { .. } = report.outcome {
            self.state = SessionState::Terminal(Outcome::SeekersWin);
        } else if self.turn >= self.max_turns {
            self.state = SessionState::Terminal(Outcome::EvaderWins);
        }
        Ok(report)
    }

    /// Plays rounds until the game is over.
    pub fn play_to_end(&mut self, policy: &mut impl MovePolicy) -> Result<Outcome, SessionError> {
        loop {
            self.advance(policy)?;
            if let SessionState::Terminal(outcome) = self.state {
                return Ok(outcome);
            }
        }
    }

    pub fn graph(&self) -> &StationGraph {
        &self.graph
    }

    /// The evader first, then the seekers. Empty before initialization.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn evader(&self) -> Option<&Player> {
        self.players.first()
    }

    pub fn seekers(&self) -> &[Player] {
        self.players.get(1..).unwrap_or(&[])
    }

    /// The number of rounds played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}
