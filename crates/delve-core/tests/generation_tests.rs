//! Whole-dungeon invariants
//!
//! These run the full driver or hand-built scenarios and check the spatial
//! rules every generated layout must obey.

use delve_core::dungeon::{
    generate_rooms_and_corridors, Connections, Coord, Direction, Dungeon, Tile,
};
use delve_core::{GameRng, GeneratorOptions, ScriptedRng};
use proptest::prelude::*;

fn options(width: i32, height: i32, corridors: i32) -> GeneratorOptions {
    GeneratorOptions {
        width,
        height,
        seed: None,
        room_spacing: 10,
        room_jitter: 4,
        min_room_size: 10,
        max_room_size: 30,
        corridor_attempts: corridors,
    }
}

fn generated(seed: u64) -> Dungeon {
    let opts = options(60, 45, 150);
    let mut dungeon = Dungeon::new(opts.width, opts.height);
    generate_rooms_and_corridors(&mut dungeon, &opts, &mut GameRng::new(seed));
    dungeon
}

/// Rooms never share a Moore neighbourhood with another room
fn assert_rooms_separated(dungeon: &Dungeon) {
    for room in dungeon.rooms() {
        for &tile in room.tiles() {
            for n in tile.neighbours() {
                if let Tile::Room(other) = dungeon.tile_at(n) {
                    assert_eq!(other, room.id(), "rooms touch at {tile} / {n}");
                }
            }
        }
    }
}

/// Every object's tiles point back at it, and nothing else is occupied
fn assert_grid_consistent(dungeon: &Dungeon) {
    let mut owned = 0;
    for room in dungeon.rooms() {
        for &tile in room.tiles() {
            assert_eq!(dungeon.tile_at(tile), Tile::Room(room.id()));
        }
        owned += room.len();
    }
    for corridor in dungeon.corridors() {
        for &tile in corridor.tiles() {
            assert_eq!(dungeon.tile_at(tile), Tile::Corridor(corridor.id()));
        }
        owned += corridor.len();
    }
    for inter in dungeon.intersections() {
        assert_eq!(
            dungeon.tile_at(inter.position()),
            Tile::Intersection(inter.id())
        );
        assert!(!inter.connections().is_empty());
        owned += 1;
    }
    assert_eq!(owned, dungeon.grid().occupied_count());
}

/// Both ends of every corridor lead into an intersection or a recorded room entrance
fn assert_corridor_ends_attached(dungeon: &Dungeon) {
    for corridor in dungeon.corridors() {
        let (Some(&first), Some(&last)) = (corridor.tiles().first(), corridor.tiles().last())
        else {
            continue;
        };
        for end in [first, last] {
            let attached = Direction::ALL.into_iter().any(|d| {
                let contact = end + d;
                match dungeon.tile_at(contact) {
                    Tile::Intersection(_) => true,
                    Tile::Room(id) => dungeon.room(id).is_some_and(|room| {
                        room.entrances()
                            .iter()
                            .any(|e| e.tile == contact && e.direction == d.reverse())
                    }),
                    _ => false,
                }
            });
            assert!(attached, "corridor {:?} end {end} is not attached", corridor.id());
        }
    }
}

#[test]
fn test_generated_dungeon_invariants() {
    for seed in [1, 2, 3, 42, 1000] {
        let dungeon = generated(seed);
        assert!(!dungeon.rooms().is_empty());
        assert_rooms_separated(&dungeon);
        assert_grid_consistent(&dungeon);
        assert_corridor_ends_attached(&dungeon);

        for room in dungeon.rooms() {
            assert!(room.len() >= 2 && room.len() <= 30);
            for entrance in room.entrances() {
                assert!(room.contains(entrance.tile));
            }
        }
    }
}

#[test]
fn test_room_growth_scenario() {
    let mut dungeon = Dungeon::new(10, 10);
    let mut rng = ScriptedRng::constant(0.0);
    let seed = Coord::new(5, 5);

    let room = dungeon
        .generate_room(seed, 5, &mut rng)
        .cloned()
        .expect("room should grow");

    assert_eq!(room.len(), 5);
    for &tile in room.tiles() {
        assert!(tile.manhattan(seed) <= 3);
    }
    let mut sorted = room.tiles().to_vec();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), 5);
}

#[test]
fn test_corridor_off_grid_scenario() {
    let mut dungeon = Dungeon::new(3, 3);
    let before = dungeon.grid().clone();
    let mut rng = ScriptedRng::constant(0.0);

    assert!(
        dungeon
            .generate_path(Coord::new(0, 0), Direction::East, &mut rng)
            .is_none()
    );
    assert_eq!(dungeon.grid(), &before);
}

#[test]
fn test_intersection_formation_scenario() {
    // Small rooms on all four sides of an open middle
    let mut dungeon = Dungeon::new(12, 12);
    let mut rng = ScriptedRng::constant(0.0);
    let west = dungeon
        .generate_room(Coord::new(1, 5), 2, &mut rng)
        .map(|r| r.id())
        .expect("west room");
    let north = dungeon
        .generate_room(Coord::new(5, 10), 2, &mut rng)
        .map(|r| r.id())
        .expect("north room");
    let south = dungeon
        .generate_room(Coord::new(5, 1), 2, &mut rng)
        .map(|r| r.id())
        .expect("south room");
    assert_eq!(dungeon.tile_at(Coord::new(1, 6)), Tile::Room(west));
    assert_eq!(dungeon.tile_at(Coord::new(5, 11)), Tile::Room(north));
    assert_eq!(dungeon.tile_at(Coord::new(5, 2)), Tile::Room(south));

    let east = dungeon
        .generate_room(Coord::new(10, 5), 2, &mut rng)
        .map(|r| r.id())
        .expect("east room");
    assert_eq!(dungeon.tile_at(Coord::new(10, 6)), Tile::Room(east));

    // First corridor runs west to east along y = 5
    let first = dungeon
        .generate_path(Coord::new(0, 5), Direction::East, &mut rng)
        .map(|c| c.id())
        .expect("first corridor");
    assert!(dungeon.corridor(first).expect("first").contains(Coord::new(5, 5)));
    let first_len = dungeon.corridor(first).expect("first").len();

    // Second corridor drops south from the north room onto the first one
    let second = dungeon
        .generate_path(Coord::new(5, 11), Direction::South, &mut rng)
        .map(|c| c.id())
        .expect("second corridor");
    assert_eq!(
        dungeon.corridor(second).expect("second").tiles(),
        &[
            Coord::new(5, 9),
            Coord::new(5, 8),
            Coord::new(5, 7),
            Coord::new(5, 6),
        ]
    );

    let Tile::Intersection(id) = dungeon.tile_at(Coord::new(5, 5)) else {
        panic!("crossing should be an intersection");
    };
    let first = dungeon.corridor(first).expect("first");
    assert!(!first.contains(Coord::new(5, 5)));
    assert_eq!(first.len(), first_len - 1);

    let connections = dungeon.intersection(id).expect("intersection").connections();
    assert_eq!(
        connections,
        Connections::NORTH | Connections::EAST | Connections::WEST
    );

    let north_room = dungeon.room(north).expect("north");
    assert_eq!(north_room.entrances().len(), 1);
    assert_eq!(north_room.entrances()[0].direction, Direction::South);
    assert_grid_consistent(&dungeon);
    assert_corridor_ends_attached(&dungeon);
}

#[test]
fn test_admission_monotonicity() {
    let mut dungeon = Dungeon::new(30, 30);
    let mut rng = GameRng::new(11);
    let probe = Coord::new(15, 15);
    assert!(dungeon.grid().is_buildable(probe));

    let mut blocked = false;
    for seed in [Coord::new(15, 13), Coord::new(14, 17), Coord::new(5, 5)] {
        dungeon.generate_room(seed, 15, &mut rng);
        let buildable = dungeon.grid().is_buildable(probe);
        let touched = dungeon.grid().occupied(probe)
            || probe.neighbours().any(|n| dungeon.grid().occupied(n));
        assert_eq!(buildable, !touched);
        if blocked {
            assert!(!buildable, "admission must never come back");
        }
        blocked |= !buildable;
    }
}

proptest! {
    #[test]
    fn prop_rooms_never_touch(seed in any::<u64>()) {
        let opts = options(40, 40, 0);
        let mut dungeon = Dungeon::new(opts.width, opts.height);
        generate_rooms_and_corridors(&mut dungeon, &opts, &mut GameRng::new(seed));
        assert_rooms_separated(&dungeon);
        for room in dungeon.rooms() {
            prop_assert!(room.len() >= 2);
            prop_assert!(room.len() <= 30);
        }
    }

    #[test]
    fn prop_corridor_is_atomic(
        seed in any::<u64>(),
        x in -2i32..42,
        y in -2i32..42,
        dir in 0usize..4,
    ) {
        let opts = options(40, 40, 20);
        let mut dungeon = Dungeon::new(opts.width, opts.height);
        let mut rng = GameRng::new(seed);
        generate_rooms_and_corridors(&mut dungeon, &opts, &mut rng);

        let before = dungeon.clone();
        let result = dungeon
            .generate_path(Coord::new(x, y), Direction::ALL[dir], &mut rng)
            .map(|c| (c.id(), c.len()));

        match result {
            None => {
                prop_assert_eq!(dungeon.grid(), before.grid());
                prop_assert_eq!(dungeon.rooms(), before.rooms());
                prop_assert_eq!(dungeon.intersections(), before.intersections());
            }
            Some((id, len)) => {
                let corridor = dungeon.corridor(id).expect("registered");
                prop_assert_eq!(corridor.len(), len);
                for &tile in corridor.tiles() {
                    prop_assert!(!before.grid().occupied(tile));
                    prop_assert_eq!(dungeon.tile_at(tile), Tile::Corridor(id));
                }
            }
        }
        assert_grid_consistent(&dungeon);
    }
}
