//! Level generation driver
//!
//! Scatters room seeds over a jittered lattice, then fires corridors from
//! random points in random directions. Failed attempts are simply skipped;
//! the core never retries on its own.

use log::info;
use serde::Serialize;

use super::coord::{Coord, Direction};
use super::map::Dungeon;
use crate::options::GeneratorOptions;
use crate::rng::RandomSource;

/// Summary of one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    pub width: i32,
    pub height: i32,
    pub room_attempts: usize,
    pub rooms: usize,
    pub room_tiles: usize,
    pub corridor_attempts: usize,
    pub corridors: usize,
    pub corridor_tiles: usize,
    pub intersections: usize,
    pub entrances: usize,
}

impl GenerationStats {
    /// Tally what is currently in `dungeon`
    pub fn collect(dungeon: &Dungeon, room_attempts: usize, corridor_attempts: usize) -> Self {
        Self {
            width: dungeon.width(),
            height: dungeon.height(),
            room_attempts,
            rooms: dungeon.rooms().len(),
            room_tiles: dungeon.rooms().iter().map(|r| r.len()).sum(),
            corridor_attempts,
            corridors: dungeon.corridors().len(),
            corridor_tiles: dungeon.corridors().iter().map(|c| c.len()).sum(),
            intersections: dungeon.intersections().len(),
            entrances: dungeon.rooms().iter().map(|r| r.entrances().len()).sum(),
        }
    }
}

/// Generate rooms, then corridors, into `dungeon`
pub fn generate_rooms_and_corridors<R: RandomSource>(
    dungeon: &mut Dungeon,
    options: &GeneratorOptions,
    rng: &mut R,
) -> GenerationStats {
    let room_attempts = place_rooms(dungeon, options, rng);
    let corridor_attempts = place_corridors(dungeon, options, rng);

    let stats = GenerationStats::collect(dungeon, room_attempts, corridor_attempts);
    info!(
        "generated {}x{} dungeon: {}/{} rooms, {}/{} corridors, {} intersections",
        stats.width,
        stats.height,
        stats.rooms,
        stats.room_attempts,
        stats.corridors,
        stats.corridor_attempts,
        stats.intersections
    );
    stats
}

/// One room attempt per lattice point; returns the number of attempts
fn place_rooms<R: RandomSource>(
    dungeon: &mut Dungeon,
    options: &GeneratorOptions,
    rng: &mut R,
) -> usize {
    let spacing = options.room_spacing.max(1);
    let start = spacing / 2;
    let jitter = options.room_jitter.max(0);
    let mut attempts = 0;

    for x in (start..dungeon.width()).step_by(spacing as usize) {
        for y in (start..dungeon.height()).step_by(spacing as usize) {
            let offset = Coord::new(rng.range(-jitter, jitter), rng.range(-jitter, jitter));
            let size = rng.range(options.min_room_size, options.max_room_size);
            attempts += 1;
            dungeon.generate_room(Coord::new(x, y) + offset, size, rng);
        }
    }
    attempts
}

fn place_corridors<R: RandomSource>(
    dungeon: &mut Dungeon,
    options: &GeneratorOptions,
    rng: &mut R,
) -> usize {
    let attempts = options.corridor_attempts.max(0) as usize;
    for _ in 0..attempts {
        let seed = Coord::new(rng.range(0, dungeon.width()), rng.range(0, dungeon.height()));
        let direction = Direction::ALL[rng.range(0, 4) as usize];
        dungeon.generate_path(seed, direction, rng);
    }
    attempts
}
