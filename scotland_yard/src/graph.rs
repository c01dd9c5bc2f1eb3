use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{MalformedGraph, Mode};

/// Identifies a station on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u16);

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a station by the best transit mode serving it.
///
/// Purely informational, the links of a station determine where players can go.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationKind {
    Taxi,
    Bus,
    Underground,
}

/// One entry of a station definition file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub id: StationId,
    pub kind: StationKind,
    /// Whether the evader's black ticket may be used to reach this station.
    pub black_station: bool,
    pub taxi: Vec<StationId>,
    pub bus: Vec<StationId>,
    pub underground: Vec<StationId>,
    /// Pixel position on the map image. Not used by the game rules.
    pub gui_coordinates: (i32, i32),
}

/// A single node of the [`StationGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct Station {
    pub kind: StationKind,
    pub black_station: bool,
    pub gui_coordinates: (i32, i32),
    /// Indexed by [`Mode`]. Duplicates are kept as they appear in the record.
    neighbors: [Vec<StationId>; 3],
}

impl Station {
    pub fn neighbors(&self, mode: Mode) -> &[StationId] {
        &self.neighbors[mode as usize]
    }
}

/// The transit network that the game is played on.
///
/// Every neighbor of every station is itself a station of the graph.
/// The graph cannot be changed after it has been built.
#[derive(Clone, Debug)]
pub struct StationGraph {
    stations: BTreeMap<StationId, Station>,
}

impl StationGraph {
    /// Builds the graph, rejecting duplicate stations and links to stations
    /// that are not defined.
    pub fn new(records: Vec<StationRecord>) -> Result<Self, MalformedGraph> {
        if records.is_empty() {
            return Err(MalformedGraph::EmptyGraph);
        }

        let mut stations = BTreeMap::new();
        for record in records {
            match stations.entry(record.id) {
                Entry::Occupied(_) => {
                    return Err(MalformedGraph::DuplicateStation { id: record.id });
                }
                Entry::Vacant(entry) => {
                    entry.insert(Station {
                        kind: record.kind,
                        black_station: record.black_station,
                        gui_coordinates: record.gui_coordinates,
                        neighbors: [record.taxi, record.bus, record.underground],
                    });
                }
            }
        }

        for (&from, station) in &stations {
            for mode in Mode::ALL {
                if let Some(&to) = station
                    .neighbors(mode)
                    .iter()
                    .find(|&&to| !stations.contains_key(&to))
                {
                    return Err(MalformedGraph::DanglingEdge { from, mode, to });
                }
            }
        }

        Ok(Self { stations })
    }

    /// Parses a JSON array of [`StationRecord`]s and builds the graph from it.
    pub fn from_json(json: &str) -> Result<Self, MalformedGraph> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|err| MalformedGraph::InvalidRecords {
                reason: err.to_string(),
            })?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read station file '{}'", path.display()))?;
        let graph = Self::from_json(&json)
            .with_context(|| format!("Invalid station file '{}'", path.display()))?;
        Ok(graph)
    }

    pub fn get(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// The stations reachable from `id` with one ride on `mode`.
    ///
    /// Empty if the station does not exist.
    pub fn neighbors(&self, id: StationId, mode: Mode) -> &[StationId] {
        self.get(id).map(|s| s.neighbors(mode)).unwrap_or(&[])
    }

    /// The neighbors of `id` for every mode.
    ///
    /// Empty if the station does not exist.
    pub fn all_modes(&self, id: StationId) -> BTreeMap<Mode, &[StationId]> {
        match self.get(id) {
            Some(station) => Mode::ALL
                .into_iter()
                .map(|mode| (mode, station.neighbors(mode)))
                .collect(),
            None => BTreeMap::new(),
        }
    }

    /// All stations in ascending order of their ids.
    pub fn iter(&self) -> impl Iterator<Item = (StationId, &Station)> {
        self.stations.iter().map(|(&id, station)| (id, station))
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
