//! Bounded traversal over the region hierarchy.
//!
//! Region links come from bulk data and are not guaranteed to form a tree,
//! so every walk carries a visited-set and a depth bound. On corrupt cyclic
//! data a walk returns an incomplete but finite result.

use std::collections::{HashSet, VecDeque};

use anatomy_types::Region;
use tracing::debug;

use crate::store::RegionStore;

/// Which links a walk follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Follow `parent_id`.
    Up,
    /// Follow `child_ids`, in declared order.
    Down,
}

/// Outcome of a bounded walk.
#[derive(Debug, Clone, Default)]
pub struct Walk<'a> {
    /// Regions reached, in breadth-first order, excluding the start.
    pub regions: Vec<&'a Region>,
    /// The depth bound stopped the walk before it was exhausted.
    pub truncated: bool,
    /// A link pointed back at an already visited region.
    pub revisited: bool,
}

/// Walks from `start` in `direction`, at most `max_depth` links deep.
///
/// Links that do not resolve in the store are skipped. Each region is
/// reported at most once, at the depth it was first reached.
pub fn bounded_walk<'a>(
    store: &'a RegionStore,
    start: &'a Region,
    direction: Direction,
    max_depth: usize,
) -> Walk<'a> {
    let mut walk = Walk::default();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&Region, usize)> = VecDeque::new();

    visited.insert(start.id.as_str());
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        let mut neighbors = neighbors(store, current, direction).peekable();
        if depth >= max_depth {
            if neighbors.peek().is_some() {
                walk.truncated = true;
            }
            continue;
        }

        for next in neighbors {
            if visited.insert(next.id.as_str()) {
                walk.regions.push(next);
                queue.push_back((next, depth + 1));
            } else {
                walk.revisited = true;
            }
        }
    }

    if walk.truncated || walk.revisited {
        debug!(
            start = %start.id,
            ?direction,
            max_depth,
            truncated = walk.truncated,
            revisited = walk.revisited,
            "bounded walk stopped early"
        );
    }

    walk
}

fn neighbors<'a>(
    store: &'a RegionStore,
    region: &'a Region,
    direction: Direction,
) -> Box<dyn Iterator<Item = &'a Region> + 'a> {
    match direction {
        Direction::Up => Box::new(
            region
                .parent_id
                .as_deref()
                .and_then(|id| store.get(id))
                .into_iter(),
        ),
        Direction::Down => Box::new(region.child_ids.iter().filter_map(|id| store.get(id))),
    }
}
