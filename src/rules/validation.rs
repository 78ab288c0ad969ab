//! Goal validation.
//!
//! A goal holds when no two cubes show the same value at the goal's
//! orientation. Validation always runs over every cube and every goal; the
//! data is tiny and a full pass can never go stale.

use rustc_hash::FxHashSet;

use crate::core::{Cube, Goal, Orientation, Validity};

/// Check a single orientation across all cubes.
///
/// Collects the faces at `orientation` and compares their count with the
/// number of distinct values among them. Cubes missing the orientation (or
/// carrying it twice) are not rejected; only the matched faces are compared.
#[must_use]
pub fn goal_validity(cubes: &[Cube], orientation: Orientation) -> Validity {
    let mut matched = 0usize;
    let mut distinct = FxHashSet::default();

    for face in cubes
        .iter()
        .flat_map(Cube::faces)
        .filter(|f| f.orientation == orientation)
    {
        matched += 1;
        distinct.insert(face.value);
    }

    (matched == distinct.len()).into()
}

/// Recompute every goal's validity from the cubes.
pub fn validate(cubes: &[Cube], goals: &mut [Goal]) {
    for goal in goals.iter_mut() {
        goal.valid = goal_validity(cubes, goal.orientation);
    }
}

/// Check if every goal holds.
#[must_use]
pub fn is_solved(goals: &[Goal]) -> bool {
    goals.iter().all(|g| g.valid.is_valid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Face, FaceValue, PuzzleConfig};
    use crate::core::Orientation::{Back, Down, Front, Left, Right, Up};

    fn cube(up: FaceValue, front: FaceValue, down: FaceValue, back: FaceValue) -> Cube {
        Cube::from_pairs([
            (Up, up),
            (Front, front),
            (Down, down),
            (Back, back),
            (Left, FaceValue::A),
            (Right, FaceValue::A),
        ])
    }

    #[test]
    fn test_distinct_values_are_valid() {
        use crate::core::FaceValue::*;
        let cubes = vec![cube(A, B, C, D), cube(B, C, D, A), cube(C, D, A, B), cube(D, A, B, C)];

        for o in [Up, Front, Down, Back] {
            assert_eq!(goal_validity(&cubes, o), Validity::Valid);
        }
        // Every cube shows A on its sides.
        assert_eq!(goal_validity(&cubes, Left), Validity::Invalid);
    }

    #[test]
    fn test_repeat_is_invalid() {
        use crate::core::FaceValue::*;
        let cubes = vec![cube(A, B, C, D), cube(A, C, D, B)];

        assert_eq!(goal_validity(&cubes, Up), Validity::Invalid);
        assert_eq!(goal_validity(&cubes, Front), Validity::Valid);
    }

    #[test]
    fn test_classic_initial_goals() {
        let mut state = PuzzleConfig::classic().initial_state();
        validate(&state.cubes, &mut state.goals);

        // Up faces are A, A, D, C.
        assert_eq!(state.goal(Up).unwrap().valid, Validity::Invalid);
        assert!(!is_solved(&state.goals));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut state = PuzzleConfig::classic().initial_state();
        validate(&state.cubes, &mut state.goals);
        let first = state.goals.clone();
        validate(&state.cubes, &mut state.goals);

        assert_eq!(first, state.goals);
    }

    #[test]
    fn test_malformed_cube_does_not_panic() {
        // Second cube has no up face and two down faces.
        let broken = Cube::new([
            Face::new(Down, FaceValue::B),
            Face::new(Down, FaceValue::C),
            Face::new(Front, FaceValue::C),
            Face::new(Back, FaceValue::D),
            Face::new(Left, FaceValue::A),
            Face::new(Right, FaceValue::B),
        ]);
        let cubes = vec![cube(FaceValue::A, FaceValue::A, FaceValue::A, FaceValue::A), broken];

        // Only one up face matched: nothing to repeat.
        assert_eq!(goal_validity(&cubes, Up), Validity::Valid);
        // Three down faces: A, B, C are distinct.
        assert_eq!(goal_validity(&cubes, Down), Validity::Valid);
    }

    #[test]
    fn test_no_cubes() {
        assert_eq!(goal_validity(&[], Up), Validity::Valid);
        assert!(is_solved(&[]));
    }
}
