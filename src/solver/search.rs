//! Backtracking search over cube orientations.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{Click, Cube, FaceValue, GameState, Orientation};
use crate::rules::{rotate, validate};

/// Every orientation of `cube` reachable by clicks, each with a shortest
/// click path from the current one.
///
/// The first entry is the cube itself with an empty path. A well-formed
/// cube always yields the 24 rigid rotations, even when some of them show
/// identical values.
#[must_use]
pub fn reachable_orientations(cube: &Cube) -> Vec<(Cube, Vec<Orientation>)> {
    let mut seen: FxHashSet<Vec<Orientation>> = FxHashSet::default();
    let mut out = Vec::new();
    let mut queue = VecDeque::new();

    seen.insert(orientations_of(cube));
    queue.push_back((cube.clone(), Vec::new()));

    while let Some((current, path)) = queue.pop_front() {
        for clicked in Orientation::ALL {
            let mut next = current.clone();
            rotate(&mut next, clicked);
            if seen.insert(orientations_of(&next)) {
                let mut next_path = path.clone();
                next_path.push(clicked);
                queue.push_back((next, next_path));
            }
        }

        out.push((current, path));
    }

    out
}

fn orientations_of(cube: &Cube) -> Vec<Orientation> {
    cube.faces().iter().map(|f| f.orientation).collect()
}

/// A solving assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Click path per cube, in cube order.
    pub paths: Vec<Vec<Orientation>>,

    /// The validated state after all paths are applied.
    pub state: GameState,
}

impl Solution {
    /// All clicks, cube by cube.
    #[must_use]
    pub fn clicks(&self) -> Vec<Click> {
        self.paths
            .iter()
            .enumerate()
            .flat_map(|(cube, path)| path.iter().map(move |&clicked| Click::new(cube, clicked)))
            .collect()
    }

    /// Total number of clicks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.iter().map(Vec::len).sum()
    }

    /// Check if the puzzle is already solved as given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Find orientations for every cube that make all goals hold.
///
/// Returns `None` if the cubes are malformed or no assignment exists.
/// Among the candidates for each cube, shorter click paths are tried first.
#[must_use]
pub fn solve(state: &GameState) -> Option<Solution> {
    if !state.is_well_formed() {
        return None;
    }

    let goals: Vec<Orientation> = state.goals.iter().map(|g| g.orientation).collect();
    let candidates: Vec<_> = state.cubes.iter().map(reachable_orientations).collect();

    let mut used: FxHashMap<Orientation, FxHashSet<FaceValue>> = FxHashMap::default();
    let mut chosen = Vec::with_capacity(candidates.len());

    if !assign(&candidates, &goals, &mut used, &mut chosen) {
        return None;
    }

    let mut solved = state.clone();
    let mut paths = Vec::with_capacity(chosen.len());
    for (cube, &pick) in chosen.iter().enumerate() {
        let (oriented, path) = &candidates[cube][pick];
        solved.cubes[cube] = oriented.clone();
        paths.push(path.clone());
    }
    validate(&solved.cubes, &mut solved.goals);

    Some(Solution {
        paths,
        state: solved,
    })
}

fn assign(
    candidates: &[Vec<(Cube, Vec<Orientation>)>],
    goals: &[Orientation],
    used: &mut FxHashMap<Orientation, FxHashSet<FaceValue>>,
    chosen: &mut Vec<usize>,
) -> bool {
    let depth = chosen.len();
    let Some(options) = candidates.get(depth) else {
        return true;
    };

    for (pick, (cube, _)) in options.iter().enumerate() {
        let Some(values) = goals
            .iter()
            .map(|&g| cube.value_at(g).map(|v| (g, v)))
            .collect::<Option<Vec<_>>>()
        else {
            continue;
        };

        let clashes = values
            .iter()
            .any(|(g, v)| used.get(g).is_some_and(|set| set.contains(v)));
        if clashes {
            continue;
        }

        for &(g, v) in &values {
            used.entry(g).or_default().insert(v);
        }
        chosen.push(pick);

        if assign(candidates, goals, used, chosen) {
            return true;
        }

        chosen.pop();
        for (g, v) in &values {
            if let Some(set) = used.get_mut(g) {
                set.remove(v);
            }
        }
    }

    false
}
