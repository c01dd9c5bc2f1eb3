use crate::{Player, StationGraph};

const GRID_WIDTH: usize = 48;
const GRID_HEIGHT: usize = 16;

/// Draws the board as a small character grid, scaled from the stations'
/// GUI coordinates.
///
/// Stations are drawn as `·`, Mr. X as `X` and detectives by their number.
/// A cell holding more than one player is drawn as `+`.
pub fn visualize_positions(graph: &StationGraph, players: &[Player]) -> String {
    let (x_min, x_max, y_min, y_max) = graph.iter().fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(x_min, x_max, y_min, y_max), (_, station)| {
            let (x, y) = station.gui_coordinates;
            (x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y))
        },
    );
    let scale = |value: i32, min: i32, max: i32, cells: usize| -> usize {
        if max <= min {
            return 0;
        }
        let offset = i64::from(value) - i64::from(min);
        let range = i64::from(max) - i64::from(min);
        (offset * (cells as i64 - 1) / range) as usize
    };
    let cell_of = |(x, y): (i32, i32)| {
        (
            scale(y, y_min, y_max, GRID_HEIGHT),
            scale(x, x_min, x_max, GRID_WIDTH),
        )
    };

    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];
    for (_, station) in graph.iter() {
        let (row, col) = cell_of(station.gui_coordinates);
        grid[row][col] = '·';
    }
    for (idx, player) in players.iter().enumerate() {
        let Some(station) = graph.get(player.station()) else {
            continue;
        };
        let (row, col) = cell_of(station.gui_coordinates);
        let marker = if player.is_evader() {
            'X'
        } else {
            char::from_digit(idx as u32 % 10, 10).unwrap_or('?')
        };
        grid[row][col] = match grid[row][col] {
            ' ' | '·' => marker,
            _ => '+',
        };
    }

    let mut result = String::from("╭");
    for _ in 0..GRID_WIDTH {
        result.push('─');
    }
    result += "╮\n";
    for row in grid {
        result.push('│');
        result.extend(row);
        result += "│\n";
    }
    result.push('╰');
    for _ in 0..GRID_WIDTH {
        result.push('─');
    }
    result.push('╯');
    result
}
