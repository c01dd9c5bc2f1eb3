use quickcheck::{Arbitrary, Gen};

use crate::{StationId, StationKind, StationRecord, Ticket, TicketWallet};

/// The records of a small, valid board.
#[derive(Clone, Debug)]
pub struct BoardInput {
    // Nonempty, ids are 1..=records.len()
    pub records: Vec<StationRecord>,
}

fn arbitrary_neighbors(g: &mut Gen, num_stations: u16) -> Vec<StationId> {
    // Up to three links, duplicates allowed
    let len = usize::arbitrary(g) % 4;
    (0..len)
        .map(|_| StationId(1 + u16::arbitrary(g) % num_stations))
        .collect()
}

impl Arbitrary for BoardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_stations = 2 + u16::arbitrary(g) % 9;
        let mut records = Vec::with_capacity(num_stations as usize);
        for id in 1..=num_stations {
            let kind = *g
                .choose(&[StationKind::Taxi, StationKind::Bus, StationKind::Underground])
                .unwrap();
            let black_station = bool::arbitrary(g);
            let taxi = arbitrary_neighbors(g, num_stations);
            let bus = arbitrary_neighbors(g, num_stations);
            let underground = arbitrary_neighbors(g, num_stations);
            let gui_coordinates = (i32::from(u8::arbitrary(g)), i32::from(u8::arbitrary(g)));
            records.push(StationRecord {
                id: StationId(id),
                kind,
                black_station,
                taxi,
                bus,
                underground,
                gui_coordinates,
            });
        }
        BoardInput { records }
    }
}

/// A few tickets of every kind, including none at all.
#[derive(Clone, Debug)]
pub struct WalletInput(pub TicketWallet);

impl Arbitrary for WalletInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let wallet = Ticket::ALL
            .into_iter()
            .fold(TicketWallet::new(), |wallet, ticket| {
                wallet.with(ticket, u32::from(u8::arbitrary(g) % 6))
            });
        WalletInput(wallet)
    }
}
