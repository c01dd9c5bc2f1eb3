use crate::{Move, MovePolicy, Player, StationGraph};

/// What one player did during a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Moved { player_idx: usize, mv: Move },
    /// The player had no legal move.
    Skipped { player_idx: usize },
}

/// Summarizes how a round ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed,
    /// The seeker at `player_idx` moved onto the evader's station.
    /// Players after it did not act.
    Captured { player_idx: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// In the order the players acted.
    pub actions: Vec<PlayerAction>,
    pub outcome: RoundOutcome,
}

/// Plays one round: every player, in order, makes at most one move.
///
/// `players[0]` must be the evader, all others seekers. Tickets used by the
/// seekers are credited to the evader. The round stops as soon as a seeker
/// lands on the evader's station.
///
/// Panics if the policy returns a move that is not legal.
pub fn play_round(
    graph: &StationGraph,
    players: &mut [Player],
    policy: &mut impl MovePolicy,
) -> RoundReport {
    debug_assert!(players.first().is_some_and(Player::is_evader));

    let mut actions = Vec::with_capacity(players.len());
    for player_idx in 0..players.len() {
        let moves: Vec<Move> = players[player_idx]
            .possible_moves(graph)
            .into_iter()
            .collect();
        if moves.is_empty() {
            actions.push(PlayerAction::Skipped { player_idx });
            continue;
        }

        let mv = policy.choose(&players[player_idx], &moves);
        assert!(
            moves.binary_search(&mv).is_ok(),
            "Policy chose {} for {}, which is not a legal move",
            mv,
            players[player_idx].name()
        );
        let transfer = match players[player_idx].make_move(mv) {
            Ok(transfer) => transfer,
            // Can't happen, legal moves are always affordable
            Err(err) => panic!("{}: {}", players[player_idx].name(), err),
        };
        if let Some(transfer) = transfer {
            players[0].receive(transfer);
        }
        actions.push(PlayerAction::Moved { player_idx, mv });

        let mover = &players[player_idx];
        if !mover.is_evader() && mover.station() == players[0].station() {
            return RoundReport {
                actions,
                outcome: RoundOutcome::Captured { player_idx },
            };
        }
    }

    RoundReport {
        actions,
        outcome: RoundOutcome::Completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_boards::{three_station_line, two_stations};
    use crate::{Color, FirstMovePolicy, StationId, Ticket, TicketWallet};

    fn mv(destination: u16, ticket: Ticket) -> Move {
        Move {
            destination: StationId(destination),
            ticket,
        }
    }

    #[test]
    fn evader_moves_then_seeker_misses() {
        let graph = three_station_line();
        let mut players = vec![
            Player::evader(
                "Mr. X",
                StationId(1),
                TicketWallet::new().with(Ticket::Taxi, 1),
            ),
            Player::seeker(
                "Detective 1",
                Color::Red,
                StationId(2),
                TicketWallet::new().with(Ticket::Bus, 1),
            ),
        ];

        let report = play_round(&graph, &mut players, &mut FirstMovePolicy);

        assert_eq!(
            report,
            RoundReport {
                actions: vec![
                    PlayerAction::Moved {
                        player_idx: 0,
                        mv: mv(2, Ticket::Taxi)
                    },
                    PlayerAction::Moved {
                        player_idx: 1,
                        mv: mv(3, Ticket::Bus)
                    },
                ],
                outcome: RoundOutcome::Completed,
            }
        );
        assert_eq!(players[0].station(), StationId(2));
        assert_eq!(players[1].station(), StationId(3));
        assert_eq!(players[0].wallet().count(Ticket::Taxi), 0);
        assert_eq!(players[0].wallet().count(Ticket::Bus), 1);
        assert_eq!(players[1].wallet().count(Ticket::Bus), 0);
        assert_eq!(players[0].travel_log(), Some(&[StationId(2)][..]));
    }

    #[test]
    fn capture_ends_round_before_later_seekers() {
        let graph = two_stations();
        let mut players = vec![
            Player::evader("Mr. X", StationId(1), TicketWallet::new()),
            Player::seeker(
                "Detective 1",
                Color::Red,
                StationId(2),
                TicketWallet::new().with(Ticket::Taxi, 1),
            ),
            Player::seeker(
                "Detective 2",
                Color::Blue,
                StationId(2),
                TicketWallet::new().with(Ticket::Taxi, 1),
            ),
        ];

        let report = play_round(&graph, &mut players, &mut FirstMovePolicy);

        assert_eq!(report.outcome, RoundOutcome::Captured { player_idx: 1 });
        assert_eq!(
            report.actions,
            vec![
                PlayerAction::Skipped { player_idx: 0 },
                PlayerAction::Moved {
                    player_idx: 1,
                    mv: mv(1, Ticket::Taxi)
                },
            ]
        );
        assert_eq!(players[2].station(), StationId(2));
        assert_eq!(players[2].wallet().count(Ticket::Taxi), 1);
        // The capturing seeker's ticket still goes to the evader
        assert_eq!(players[0].wallet().count(Ticket::Taxi), 1);
    }

    #[test]
    fn evader_stepping_onto_seeker_is_not_a_capture() {
        let graph = two_stations();
        let mut players = vec![
            Player::evader(
                "Mr. X",
                StationId(1),
                TicketWallet::new().with(Ticket::Taxi, 1),
            ),
            Player::seeker("Detective 1", Color::Red, StationId(2), TicketWallet::new()),
        ];

        let report = play_round(&graph, &mut players, &mut FirstMovePolicy);

        assert_eq!(report.outcome, RoundOutcome::Completed);
        assert_eq!(players[0].station(), players[1].station());
    }

    #[test]
    fn players_without_tickets_are_skipped() {
        let graph = three_station_line();
        let mut players = vec![
            Player::evader(
                "Mr. X",
                StationId(1),
                TicketWallet::new().with(Ticket::Bus, 3).with(Ticket::Black, 5),
            ),
            Player::seeker(
                "Detective 1",
                Color::Red,
                StationId(3),
                TicketWallet::new().with(Ticket::Taxi, 2),
            ),
        ];

        let report = play_round(&graph, &mut players, &mut FirstMovePolicy);

        assert_eq!(
            report,
            RoundReport {
                actions: vec![
                    PlayerAction::Skipped { player_idx: 0 },
                    PlayerAction::Skipped { player_idx: 1 },
                ],
                outcome: RoundOutcome::Completed,
            }
        );
        assert_eq!(players[0].travel_log(), Some(&[][..]));
        assert_eq!(players[1].wallet().count(Ticket::Taxi), 2);
    }

    #[test]
    #[should_panic(expected = "not a legal move")]
    fn illegal_policy_choice_panics() {
        let graph = three_station_line();
        let mut players = vec![Player::evader(
            "Mr. X",
            StationId(1),
            TicketWallet::new().with(Ticket::Taxi, 1),
        )];
        let mut cheat = |_: &Player, _: &[Move]| mv(3, Ticket::Taxi);
        play_round(&graph, &mut players, &mut cheat);
    }
}
