//! Room growth
//!
//! Rooms are grown by a randomized flood fill from a seed tile:
//! - candidates are evaluated in FIFO order
//! - a candidate is kept with probability `adjacent / 3`, where `adjacent` is
//!   the number of already-kept tiles around it, so concave spots fill in
//!   before spikes grow out
//! - the first two tiles are always kept
//!
//! Candidates are checked against the committed grid only, which keeps a
//! one-tile gap between the new room and everything built before it.

use std::collections::VecDeque;

use hashbrown::HashSet;
use log::{debug, trace};

use super::coord::Coord;
use super::grid::Grid;
use super::map::Dungeon;
use super::topology::RoomId;
use crate::rng::RandomSource;

/// Smallest room the grower will commit
pub const MIN_ROOM_TILES: usize = 2;

/// Tiles accepted regardless of the roll
const UNCONDITIONAL_TILES: usize = 2;

/// Denominator of the `adjacent / 3` acceptance curve
const ADJACENCY_DIVISOR: f32 = 3.0;

/// Grow a room at `seed` with at most `target_size` tiles and commit it.
pub fn grow_room<R: RandomSource>(
    dungeon: &mut Dungeon,
    seed: Coord,
    target_size: i32,
    rng: &mut R,
) -> Option<RoomId> {
    if !dungeon.grid.is_buildable(seed) {
        trace!("room seed {seed} is not buildable");
        return None;
    }

    let tiles = grow_tiles(&dungeon.grid, seed, target_size, rng);
    if tiles.len() < MIN_ROOM_TILES {
        debug!("room at {seed} only reached {} tile(s), discarded", tiles.len());
        return None;
    }

    let count = tiles.len();
    let id = dungeon.add_room(tiles);
    debug!("room {} grown at {seed}: {count}/{target_size} tiles", id.index());
    Some(id)
}

/// Run the flood fill without touching the grid
fn grow_tiles<R: RandomSource>(
    grid: &Grid,
    seed: Coord,
    target_size: i32,
    rng: &mut R,
) -> Vec<Coord> {
    let mut frontier = VecDeque::from([seed]);
    let mut tiles = Vec::new();
    let mut accepted = HashSet::new();

    for _ in 0..target_size.max(0) {
        let Some(next) = next_candidate(grid, &mut frontier, &accepted) else {
            break;
        };

        let adjacent = next.neighbours().filter(|n| accepted.contains(n)).count();
        let roll = rng.unit();
        if roll <= adjacent as f32 / ADJACENCY_DIVISOR || tiles.len() < UNCONDITIONAL_TILES {
            tiles.push(next);
            accepted.insert(next);
            frontier.extend(next.neighbours());
        }
    }

    tiles
}

/// Pop candidates until one is buildable and not yet part of the room
fn next_candidate(
    grid: &Grid,
    frontier: &mut VecDeque<Coord>,
    accepted: &HashSet<Coord>,
) -> Option<Coord> {
    while let Some(c) = frontier.pop_front() {
        if grid.is_buildable(c) && !accepted.contains(&c) {
            return Some(c);
        }
    }
    None
}
