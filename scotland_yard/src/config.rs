use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{StationId, Ticket, TicketWallet};

/// The number of rounds after which the evader wins.
pub const MAX_TURNS: u32 = 24;

/// Rules that vary between boards and game variants.
///
/// Read from a JSON file, every field can be omitted to get the default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_turns: u32,
    pub num_detectives: usize,
    /// The stations that players are randomly placed on when the game starts.
    ///
    /// Players may end up sharing a start station.
    pub start_stations: Vec<StationId>,
    pub evader_tickets: TicketWallet,
    pub detective_tickets: TicketWallet,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_turns: MAX_TURNS,
            num_detectives: 5,
            start_stations: Vec::new(),
            evader_tickets: TicketWallet::new()
                .with(Ticket::Taxi, 4)
                .with(Ticket::Bus, 3)
                .with(Ticket::Underground, 3)
                .with(Ticket::Black, 5)
                .with(Ticket::Double, 2),
            detective_tickets: TicketWallet::new()
                .with(Ticket::Taxi, 10)
                .with(Ticket::Bus, 8)
                .with(Ticket::Underground, 4),
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_use_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"num_detectives": 3, "start_stations": [13, 26]}"#).unwrap();
        assert_eq!(config.num_detectives, 3);
        assert_eq!(config.start_stations, vec![StationId(13), StationId(26)]);
        assert_eq!(config.max_turns, 24);
        assert_eq!(config.evader_tickets.count(Ticket::Black), 5);
        assert_eq!(config.detective_tickets.count(Ticket::Black), 0);
    }

    #[test]
    fn ticket_allocations_are_replaced_as_a_whole() {
        let config: GameConfig =
            serde_json::from_str(r#"{"detective_tickets": {"taxi": 1}}"#).unwrap();
        assert_eq!(config.detective_tickets, TicketWallet::new().with(Ticket::Taxi, 1));
        assert_eq!(config.evader_tickets, GameConfig::default().evader_tickets);
    }
}
