//! Small hand-written boards for unit tests.

use crate::{StationGraph, StationId, StationKind, StationRecord};

fn station(id: u16, taxi: &[u16], bus: &[u16]) -> StationRecord {
    StationRecord {
        id: StationId(id),
        kind: if bus.is_empty() {
            StationKind::Taxi
        } else {
            StationKind::Bus
        },
        black_station: false,
        taxi: taxi.iter().copied().map(StationId).collect(),
        bus: bus.iter().copied().map(StationId).collect(),
        underground: Vec::new(),
        gui_coordinates: (100 * id as i32, 100),
    }
}

/// 1 and 2 are linked by taxi, 2 and 3 by bus.
pub fn three_station_line() -> StationGraph {
    StationGraph::new(vec![
        station(1, &[2], &[]),
        station(2, &[1], &[3]),
        station(3, &[], &[2]),
    ])
    .unwrap()
}

/// 1 and 2 are linked by taxi.
pub fn two_stations() -> StationGraph {
    StationGraph::new(vec![station(1, &[2], &[]), station(2, &[1], &[])]).unwrap()
}
