use std::collections::HashSet;

use arena_core::{Coords, WorldMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A route found by [`find_path`]: every cell after the start, up to and
/// including the goal, each one orthogonal step from the previous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPath {
    cells: Vec<Coords>,
}

impl GridPath {
    pub fn new(cells: Vec<Coords>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Coords] {
        &self.cells
    }

    /// The route without its final cell, for goals that must be reached but not entered.
    pub fn approach(&self) -> &[Coords] {
        match self.cells.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn into_cells(self) -> Vec<Coords> {
        self.cells
    }
}

#[derive(Debug, Clone, Copy)]
struct SearchNode {
    cell: Coords,
    parent: Option<usize>,
    f: u32,
}

/// A* over the four orthogonal neighbours, restricted to walkable cells of `world`.
///
/// Scoring quirks kept on purpose, since they decide which of several routes is
/// returned:
/// - `g` is the Manhattan distance from `start`, not the accumulated step count.
/// - The open list is stably re-sorted by `f` before every pop, so the earliest
///   inserted node wins ties.
/// - A closed cell is never reopened.
/// - A candidate is dropped if the open list already holds the same cell at an
///   equal or lower `f`; a strictly better duplicate is added next to the old entry.
///
/// Returns `None` when the goal cannot be reached through what has been observed so
/// far. `start == goal` yields an empty route.
pub fn find_path(world: &WorldMap, start: Coords, goal: Coords) -> Option<GridPath> {
    let mut nodes = vec![SearchNode {
        cell: start,
        parent: None,
        f: 0,
    }];
    let mut open: Vec<usize> = vec![0];
    let mut closed: HashSet<Coords> = HashSet::new();

    while !open.is_empty() {
        // `sort_by_key` is stable.
        open.sort_by_key(|&idx| nodes[idx].f);
        let current = open.remove(0);
        let cell = nodes[current].cell;
        closed.insert(cell);

        if cell == goal {
            return Some(reconstruct(&nodes, current, start));
        }

        for next in cell.neighbors() {
            if !world.is_walkable(next) || closed.contains(&next) {
                continue;
            }

            let g = start.manhattan(next);
            let h = next.manhattan(goal);
            let f = g + h;

            let dominated = open
                .iter()
                .any(|&idx| nodes[idx].cell == next && nodes[idx].f <= f);
            if dominated {
                continue;
            }

            nodes.push(SearchNode {
                cell: next,
                parent: Some(current),
                f,
            });
            open.push(nodes.len() - 1);
        }
    }

    None
}

fn reconstruct(nodes: &[SearchNode], goal_idx: usize, start: Coords) -> GridPath {
    let mut cells = Vec::new();
    let mut cursor = Some(goal_idx);
    while let Some(idx) = cursor {
        let node = nodes[idx];
        if node.cell == start {
            break;
        }
        cells.push(node.cell);
        cursor = node.parent;
    }
    cells.reverse();
    GridPath::new(cells)
}
