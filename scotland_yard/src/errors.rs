use crate::{Mode, StationId, Ticket};

/// The error type for [`StationGraph::new()`](crate::StationGraph::new) and for
/// setting up a [`GameSession`](crate::GameSession) on a graph.
#[derive(Debug, PartialEq, Eq)]
pub enum MalformedGraph {
    InvalidRecords { reason: String },
    EmptyGraph,
    DuplicateStation { id: StationId },
    DanglingEdge { from: StationId, mode: Mode, to: StationId },
    InvalidStartPool { id: Option<StationId> },
    ZeroTurnLimit,
}

impl std::error::Error for MalformedGraph {}

impl std::fmt::Display for MalformedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedGraph::InvalidRecords { reason } =>
                write!(f, "Station records could not be read: {}", reason),
            MalformedGraph::EmptyGraph =>
                write!(f, "The station records do not contain a single station"),
            MalformedGraph::DuplicateStation { id } =>
                write!(f, "Station {} is defined more than once", id),
            MalformedGraph::DanglingEdge { from, mode, to } =>
                write!(f, "Station {} has a {} link to station {}, which does not exist", from, mode, to),
            MalformedGraph::InvalidStartPool { id: None } =>
                write!(f, "The pool of start stations is empty"),
            MalformedGraph::InvalidStartPool { id: Some(id) } =>
                write!(f, "Start station {} does not exist on the board", id),
            MalformedGraph::ZeroTurnLimit =>
                write!(f, "The game must last at least one round"),
        }
    }
}

/// The error type for [`Player::make_move()`](crate::Player::make_move).
#[derive(Debug, PartialEq, Eq)]
pub struct InsufficientTickets {
    pub ticket: Ticket,
}

impl std::error::Error for InsufficientTickets {}

impl std::fmt::Display for InsufficientTickets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tried to move with a {} ticket, but none are left", self.ticket)
    }
}

/// The error type for the lifecycle operations of a [`GameSession`](crate::GameSession).
#[derive(Debug, PartialEq, Eq)]
pub enum SessionError {
    NotStarted,
    AlreadyStarted,
    SessionFinished,
}

impl std::error::Error for SessionError {}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::NotStarted => write!(f, "The session has not been initialized yet"),
            SessionError::AlreadyStarted => write!(f, "The session has already been initialized"),
            SessionError::SessionFinished => write!(f, "The game is already over"),
        }
    }
}
