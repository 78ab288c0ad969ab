//! Cube rotation.
//!
//! Clicking a face rotates its whole cube. The rotation is selected by the
//! clicked face's orientation and applied to all six faces:
//!
//! | clicked \ current | up    | back  | down  | front | left  | right |
//! |-------------------|-------|-------|-------|-------|-------|-------|
//! | up                | front | up    | back  | down  | left  | right |
//! | back              | up    | back  | down  | front | left  | right |
//! | down              | back  | down  | front | up    | left  | right |
//! | front             | up    | back  | down  | front | left  | right |
//! | left              | up    | left  | down  | right | front | back  |
//! | right             | up    | right | down  | left  | back  | front |
//!
//! Up and down turn the cube about the left-right axis; left and right turn
//! it about the up-down axis. Front and back leave the cube unchanged.

use crate::core::{Cube, Orientation};

/// Where a face at `current` ends up after a click on `clicked`.
///
/// Every row is a bijection on the six orientations.
#[must_use]
pub const fn rotation(clicked: Orientation, current: Orientation) -> Orientation {
    use crate::core::Orientation::{Back, Down, Front, Left, Right, Up};

    match clicked {
        Up => match current {
            Up => Front,
            Back => Up,
            Down => Back,
            Front => Down,
            Left => Left,
            Right => Right,
        },
        Down => match current {
            Up => Back,
            Back => Down,
            Down => Front,
            Front => Up,
            Left => Left,
            Right => Right,
        },
        Left => match current {
            Up => Up,
            Back => Left,
            Down => Down,
            Front => Right,
            Left => Front,
            Right => Back,
        },
        Right => match current {
            Up => Up,
            Back => Right,
            Down => Down,
            Front => Left,
            Left => Back,
            Right => Front,
        },
        // TODO: decide whether front/back clicks should spin about the
        // front-back axis; the table keeps them as no-ops.
        Front | Back => current,
    }
}

/// Rotate `cube` as if the face at `clicked` were clicked.
pub fn rotate(cube: &mut Cube, clicked: Orientation) {
    for face in cube.faces_mut() {
        face.orientation = rotation(clicked, face.orientation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FaceValue;
    use crate::core::Orientation::{Back, Down, Front, Left, Right, Up};

    fn labeled() -> Cube {
        Cube::from_pairs([
            (Up, FaceValue::A),
            (Down, FaceValue::B),
            (Front, FaceValue::C),
            (Back, FaceValue::D),
            (Left, FaceValue::A),
            (Right, FaceValue::B),
        ])
    }

    #[test]
    fn test_rows_are_bijections() {
        for clicked in Orientation::ALL {
            let mut hit = [false; 6];
            for current in Orientation::ALL {
                hit[rotation(clicked, current).index()] = true;
            }
            assert!(hit.iter().all(|&h| h), "row {clicked} is not a permutation");
        }
    }

    #[test]
    fn test_front_and_back_are_identity() {
        for clicked in [Front, Back] {
            for current in Orientation::ALL {
                assert_eq!(rotation(clicked, current), current);
            }
        }
    }

    #[test]
    fn test_up_row() {
        assert_eq!(rotation(Up, Up), Front);
        assert_eq!(rotation(Up, Back), Up);
        assert_eq!(rotation(Up, Down), Back);
        assert_eq!(rotation(Up, Front), Down);
        assert_eq!(rotation(Up, Left), Left);
        assert_eq!(rotation(Up, Right), Right);
    }

    #[test]
    fn test_down_row() {
        assert_eq!(rotation(Down, Up), Back);
        assert_eq!(rotation(Down, Back), Down);
        assert_eq!(rotation(Down, Down), Front);
        assert_eq!(rotation(Down, Front), Up);
        assert_eq!(rotation(Down, Left), Left);
        assert_eq!(rotation(Down, Right), Right);
    }

    #[test]
    fn test_left_row() {
        assert_eq!(rotation(Left, Up), Up);
        assert_eq!(rotation(Left, Back), Left);
        assert_eq!(rotation(Left, Down), Down);
        assert_eq!(rotation(Left, Front), Right);
        assert_eq!(rotation(Left, Left), Front);
        assert_eq!(rotation(Left, Right), Back);
    }

    #[test]
    fn test_right_row() {
        assert_eq!(rotation(Right, Up), Up);
        assert_eq!(rotation(Right, Back), Right);
        assert_eq!(rotation(Right, Down), Down);
        assert_eq!(rotation(Right, Front), Left);
        assert_eq!(rotation(Right, Left), Back);
        assert_eq!(rotation(Right, Right), Front);
    }

    #[test]
    fn test_up_and_down_are_inverse() {
        for current in Orientation::ALL {
            assert_eq!(rotation(Down, rotation(Up, current)), current);
        }
    }

    #[test]
    fn test_left_and_right_are_inverse() {
        for current in Orientation::ALL {
            assert_eq!(rotation(Right, rotation(Left, current)), current);
        }
    }

    #[test]
    fn test_four_quarter_turns_return_home() {
        for clicked in [Up, Down, Left, Right] {
            let mut cube = labeled();
            for _ in 0..4 {
                rotate(&mut cube, clicked);
            }
            assert_eq!(cube, labeled());
        }
    }

    #[test]
    fn test_rotate_moves_values() {
        let mut cube = labeled();
        rotate(&mut cube, Up);

        // The old up face now sits at front, the old back face on top.
        assert_eq!(cube.value_at(Front), Some(FaceValue::A));
        assert_eq!(cube.value_at(Up), Some(FaceValue::D));
        assert!(cube.is_well_formed());
    }

    #[test]
    fn test_rotate_keeps_cube_well_formed() {
        for clicked in Orientation::ALL {
            let mut cube = labeled();
            rotate(&mut cube, clicked);
            assert!(cube.is_well_formed());
        }
    }
}
