use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{InsufficientTickets, Mode, StationGraph, StationId, Ticket, TicketWallet};

/// Ride to `destination`, paying with `ticket`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub destination: StationId,
    pub ticket: Ticket,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.destination, self.ticket)
    }
}

/// Display color of a player's pawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    White,
}

impl Color {
    /// Colors handed out to the detectives, in order.
    pub const DETECTIVES: [Color; 6] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::White,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::White => "white",
        };
        write!(f, "{}", name)
    }
}

/// What distinguishes the evader from the seekers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    /// Mr. X. Remembers every station moved to, in order.
    Evader { travel_log: Vec<StationId> },
    /// A detective. Tickets used by detectives are handed to the evader.
    Seeker,
}

/// Side effect of a seeker's move that has to be applied to the evader's wallet.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TicketTransfer {
    pub ticket: Ticket,
    pub amount: u32,
}

/// A player, i.e. either the evader or one of the seekers.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    color: Color,
    station: StationId,
    wallet: TicketWallet,
    role: Role,
}

impl Player {
    pub fn evader(name: impl Into<String>, station: StationId, wallet: TicketWallet) -> Self {
        Self {
            name: name.into(),
            color: Color::Black,
            station,
            wallet,
            role: Role::Evader {
                travel_log: Vec::new(),
            },
        }
    }

    pub fn seeker(
        name: impl Into<String>,
        color: Color,
        station: StationId,
        wallet: TicketWallet,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            station,
            wallet,
            role: Role::Seeker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn station(&self) -> StationId {
        self.station
    }

    pub fn wallet(&self) -> &TicketWallet {
        &self.wallet
    }

    pub fn is_evader(&self) -> bool {
        matches!(self.role, Role::Evader { .. })
    }

    /// The stations the evader has moved to, oldest first. `None` for seekers.
    pub fn travel_log(&self) -> Option<&[StationId]> {
        match &self.role {
            Role::Evader { travel_log } => Some(travel_log),
            Role::Seeker => None,
        }
    }

    /// All moves the player can afford from its current station.
    ///
    /// Empty if the player's station is not on the graph, or if the player
    /// has no ticket for any link leaving it.
    pub fn possible_moves(&self, graph: &StationGraph) -> BTreeSet<Move> {
        let mut moves = BTreeSet::new();
        for mode in Mode::ALL {
            let ticket = mode.ticket();
            if !self.wallet.has(ticket) {
                continue;
            }
            moves.extend(
                graph
                    .neighbors(self.station, mode)
                    .iter()
                    .map(|&destination| Move {
                        destination,
                        ticket,
                    }),
            );
        }
        moves
    }

    /// Pays for the move and relocates the player.
    ///
    /// This does not check that the destination is adjacent, callers are
    /// expected to pick from [`Self::possible_moves()`]. For a seeker, the
    /// returned transfer must be credited to the evader.
    pub fn make_move(&mut self, mv: Move) -> Result<Option<TicketTransfer>, InsufficientTickets> {
        self.wallet.spend(mv.ticket)?;
        match &mut self.role {
            Role::Evader { travel_log } => {
                travel_log.push(mv.destination);
                self.station = mv.destination;
                Ok(None)
            }
            Role::Seeker => {
                self.station = mv.destination;
                Ok(Some(TicketTransfer {
                    ticket: mv.ticket,
                    amount: 1,
                }))
            }
        }
    }

    pub fn receive(&mut self, transfer: TicketTransfer) {
        self.wallet.credit(transfer.ticket, transfer.amount);
    }
}
