//! Breadth-first shortest-path search over alternating bishop moves.
//!
//! Nodes are (board, side to move) pairs packed into one `u64`: the 40-bit
//! board key with the mover in bit 40. The visited map stores each node's
//! parent node, `None` for the start. Boards are only rebuilt from keys when
//! a node is expanded and when the final path is walked back.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, info};

use crate::board_state::board::Board;
use crate::board_state::board_types::Color;
use crate::move_generation::move_generator::{BishopMoveGenerator, MoveGenerator};
use crate::search::search_errors::{SearchError, SearchResult};

const MOVER_SHIFT: u32 = 40;
const BOARD_KEY_MASK: u64 = (1 << MOVER_SHIFT) - 1;

/// Pack a board and the side to move into a visited-map key.
#[inline]
pub fn node_key(board: &Board, mover: Color) -> u64 {
    board.to_key() | ((mover.index() as u64) << MOVER_SHIFT)
}

#[inline]
fn split_node_key(node: u64) -> (Board, Color) {
    let mover = if node >> MOVER_SHIFT == 0 {
        Color::White
    } else {
        Color::Black
    };
    (Board::from_key(node & BOARD_KEY_MASK), mover)
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Side to move at the start board.
    pub first_mover: Color,
    /// Give up after this many plies. `None` searches the whole state space.
    pub max_depth: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            first_mover: Color::White,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Plies in the returned path.
    pub depth: usize,
    /// Nodes recorded in the visited map when the search stopped.
    pub visited: usize,
    /// Nodes whose successors were generated.
    pub expanded: usize,
}

#[derive(Debug, Clone)]
pub struct ShortestPath {
    /// Start board first, goal board last.
    pub boards: Vec<Board>,
    pub stats: SearchStats,
}

impl ShortestPath {
    #[inline]
    pub fn plies(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }
}

/// Shortest alternating line from `start` to `goal`, white moving first.
pub fn find_shortest_path(start: &Board, goal: &Board) -> SearchResult<Vec<Board>> {
    search_shortest_path(&BishopMoveGenerator, start, goal, SearchConfig::default())
        .map(|path| path.boards)
}

/// Breadth-first search from `start` until a node holding `goal` is generated.
///
/// The goal matches on board occupancy alone, whichever side is to move. The
/// first node that produces it ends the search, so the path is shortest.
pub fn search_shortest_path<G: MoveGenerator>(
    generator: &G,
    start: &Board,
    goal: &Board,
    config: SearchConfig,
) -> SearchResult<ShortestPath> {
    let goal_key = goal.to_key();
    if start.to_key() == goal_key {
        return Ok(ShortestPath {
            boards: vec![*start],
            stats: SearchStats {
                depth: 0,
                visited: 1,
                expanded: 0,
            },
        });
    }

    let start_node = node_key(start, config.first_mover);
    let mut parents = HashMap::<u64, Option<u64>>::new();
    parents.insert(start_node, None);

    let mut frontier = vec![start_node];
    let mut depth = 0usize;
    let mut expanded = 0usize;

    while !frontier.is_empty() {
        if let Some(max_depth) = config.max_depth {
            if depth >= max_depth {
                return Err(SearchError::DepthLimitReached { max_depth });
            }
        }

        let mut next_frontier = Vec::with_capacity(frontier.len() * 2);
        for &node in &frontier {
            let (board, mover) = split_node_key(node);
            let next_mover = mover.opposite();
            expanded += 1;

            for child in generator.next_boards(&board, mover) {
                let child_node = node_key(&child, next_mover);
                let Entry::Vacant(slot) = parents.entry(child_node) else {
                    continue;
                };
                slot.insert(Some(node));

                if child.to_key() == goal_key {
                    let stats = SearchStats {
                        depth: depth + 1,
                        visited: parents.len(),
                        expanded,
                    };
                    info!(
                        "goal reached in {} plies: {} nodes visited, {} expanded",
                        stats.depth, stats.visited, stats.expanded
                    );
                    let boards = reconstruct_path(&parents, child_node)?;
                    return Ok(ShortestPath { boards, stats });
                }

                next_frontier.push(child_node);
            }
        }

        debug!(
            "depth {depth}: expanded {} nodes, next frontier {}, visited {}",
            frontier.len(),
            next_frontier.len(),
            parents.len()
        );

        frontier = next_frontier;
        depth += 1;
    }

    Err(SearchError::Exhausted {
        depth,
        visited: parents.len(),
    })
}

fn reconstruct_path(parents: &HashMap<u64, Option<u64>>, end: u64) -> SearchResult<Vec<Board>> {
    let mut boards = Vec::new();
    let mut node = end;

    loop {
        boards.push(split_node_key(node).0);
        match parents.get(&node) {
            Some(Some(parent)) => node = *parent,
            Some(None) => break,
            None => return Err(SearchError::BrokenParentChain { key: node }),
        }
    }

    boards.reverse();
    Ok(boards)
}
