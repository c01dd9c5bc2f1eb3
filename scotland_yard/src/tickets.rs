use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::InsufficientTickets;

const NUM_TICKET_KINDS: usize = 5;

/// A kind of transit link between two stations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Mode {
    Taxi,
    Bus,
    Underground,
}

/// A kind of ticket that a player can hold.
///
/// The first three kinds pay for a ride on the [mode](Mode) of the same name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    /// Only held by the evader. Carried in the wallet, but no move is ever
    /// offered for it.
    Black,
    /// Only held by the evader. Carried in the wallet, but no move is ever
    /// offered for it.
    Double,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Taxi, Mode::Bus, Mode::Underground];

    /// The ticket that pays for a ride on this mode.
    pub fn ticket(self) -> Ticket {
        match self {
            Mode::Taxi => Ticket::Taxi,
            Mode::Bus => Ticket::Bus,
            Mode::Underground => Ticket::Underground,
        }
    }
}

impl Ticket {
    pub const ALL: [Ticket; NUM_TICKET_KINDS] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Black,
        Ticket::Double,
    ];
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ticket())
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "taxi",
            Ticket::Bus => "bus",
            Ticket::Underground => "underground",
            Ticket::Black => "black",
            Ticket::Double => "double",
        };
        write!(f, "{}", name)
    }
}

/// The remaining tickets of a single player.
///
/// Serialized as a map from ticket kind to count, e.g.
/// `{"taxi": 10, "bus": 8, "underground": 4}`. Missing kinds count as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Ticket, u32>", into = "BTreeMap<Ticket, u32>")]
pub struct TicketWallet {
    counts: [u32; NUM_TICKET_KINDS],
}

impl TicketWallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to set the count for one ticket kind.
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket as usize] = count;
        self
    }

    pub fn count(&self, ticket: Ticket) -> u32 {
        self.counts[ticket as usize]
    }

    pub fn has(&self, ticket: Ticket) -> bool {
        self.count(ticket) > 0
    }

    /// Uses up one ticket of the given kind.
    ///
    /// Leaves the wallet untouched if there is no such ticket.
    pub fn spend(&mut self, ticket: Ticket) -> Result<(), InsufficientTickets> {
        match self.counts[ticket as usize].checked_sub(1) {
            Some(remaining) => {
                self.counts[ticket as usize] = remaining;
                Ok(())
            }
            None => Err(InsufficientTickets { ticket }),
        }
    }

    /// Adds tickets of the given kind. The count stops at `u32::MAX`.
    pub fn credit(&mut self, ticket: Ticket, amount: u32) {
        self.counts[ticket as usize] = self.counts[ticket as usize].saturating_add(amount);
    }

    /// All ticket kinds together with their counts, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL.into_iter().map(|ticket| (ticket, self.count(ticket)))
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

impl From<BTreeMap<Ticket, u32>> for TicketWallet {
    fn from(map: BTreeMap<Ticket, u32>) -> Self {
        map.into_iter()
            .fold(TicketWallet::new(), |wallet, (ticket, count)| {
                wallet.with(ticket, count)
            })
    }
}

impl From<TicketWallet> for BTreeMap<Ticket, u32> {
    fn from(wallet: TicketWallet) -> Self {
        wallet.iter().filter(|&(_, count)| count > 0).collect()
    }
}

impl std::fmt::Display for TicketWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (ticket, count) in self.iter().filter(|&(_, count)| count > 0) {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{} {}", count, ticket)?;
        }
        if first {
            write!(f, "no tickets")?;
        }
        Ok(())
    }
}
