//! Topology merging at corridor ends
//!
//! Each end of a traced corridor touches an existing structure. What happens
//! depends on what is there:
//! - a room records an entrance
//! - an intersection gains a connection
//! - a corridor is split: the touched cell becomes a new intersection

use log::trace;

use super::coord::{Coord, Direction};
use super::map::Dungeon;
use super::topology::{CorridorId, Entrance, IntersectionId, Tile};

/// Register a corridor end at `point`.
///
/// `incoming` points from `point` toward the corridor that arrived there.
pub fn resolve_contact(dungeon: &mut Dungeon, point: Coord, incoming: Direction) {
    match dungeon.grid.get(point) {
        Tile::Empty => {
            trace!("contact at empty cell {point} ignored");
        }
        Tile::Room(id) => {
            dungeon.rooms[id.index()].entrances.push(Entrance {
                tile: point,
                direction: incoming,
            });
            trace!("room {} entrance at {point} from {incoming}", id.index());
        }
        Tile::Intersection(id) => {
            dungeon.intersections[id.index()].connect(incoming);
            trace!("intersection {} connects {incoming}", id.index());
        }
        Tile::Corridor(id) => {
            split_corridor(dungeon, id, point, incoming);
        }
    }
}

/// Turn one cell of corridor `k` into an intersection
fn split_corridor(
    dungeon: &mut Dungeon,
    k: CorridorId,
    point: Coord,
    incoming: Direction,
) -> IntersectionId {
    dungeon.corridors[k.index()].remove_tile(point);
    let (id, previous) = dungeon.add_intersection(point);
    debug_assert_eq!(previous, Tile::Corridor(k));

    let along: Vec<Direction> = dungeon.corridors[k.index()]
        .tiles()
        .iter()
        .filter_map(|&t| Direction::from_offset(t - point))
        .collect();

    let inter = &mut dungeon.intersections[id.index()];
    inter.connect(incoming);
    for d in along {
        inter.connect(d);
    }

    for d in Direction::ALL {
        if let Tile::Intersection(neighbour) = dungeon.grid.get(point + d) {
            dungeon.intersections[id.index()].connect(d);
            dungeon.intersections[neighbour.index()].connect(d.reverse());
        }
    }

    trace!(
        "corridor {} split at {point} into intersection {}",
        k.index(),
        id.index()
    );
    id
}
