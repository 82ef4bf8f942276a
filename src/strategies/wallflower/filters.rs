//! Safety filters. Each one takes the surviving candidates and returns them
//! with any moves it considers fatal taken out.

use super::{board::Board, candidates::Candidates};
use crate::fightsnake::types::{Coord, Direction};

/// Self-collision checks run in this order, first match per segment wins.
const NEIGHBOUR_PRIORITY: [Direction; 4] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::Down,
];

/// Don't turn back onto our own neck.
pub fn avoid_neck(
    head: Coord,
    neck: Coord,
    candidates: Candidates,
) -> Candidates {
    match Direction::between(head, neck) {
        Some(direction) => candidates.without(direction),
        None => candidates,
    }
}

pub fn avoid_walls(
    head: Coord,
    board: &Board,
    candidates: Candidates,
) -> Candidates {
    let mut candidates = candidates;

    if head.x == board.max_x() {
        candidates = candidates.without(Direction::Right);
    } else if head.x == 0 {
        candidates = candidates.without(Direction::Left);
    }

    if head.y == board.max_y() {
        candidates = candidates.without(Direction::Up);
    } else if head.y == 0 {
        candidates = candidates.without(Direction::Down);
    }

    candidates
}

/// Treats every segment behind the head as solid, the tail included even
/// though it usually moves out of the way.
pub fn avoid_self<'a>(
    head: Coord,
    backbone: impl IntoIterator<Item = &'a Coord>,
    candidates: Candidates,
) -> Candidates {
    backbone.into_iter().fold(candidates, |candidates, vertebra| {
        NEIGHBOUR_PRIORITY
            .iter()
            .find(|d| head.neighbour(**d) == *vertebra)
            .map_or(candidates, |d| candidates.without(*d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fightsnake::types::Direction::{Down, Left, Right, Up};

    fn set(directions: &[Direction]) -> Candidates {
        directions.iter().copied().collect()
    }

    fn six_by_six() -> Board {
        Board::new(6, 6).unwrap()
    }

    mod neck {
        use super::*;

        fn neck(x: i64, y: i64) -> Candidates {
            avoid_neck(Coord::new(5, 5), Coord::new(x, y), Candidates::ALL)
        }

        #[test]
        fn coincident_neck_removes_nothing() {
            assert_eq!(neck(5, 5), Candidates::ALL);
        }

        #[test]
        fn neck_left() {
            assert_eq!(neck(4, 5), set(&[Up, Down, Right]));
        }

        #[test]
        fn neck_right() {
            assert_eq!(neck(6, 5), set(&[Up, Down, Left]));
        }

        #[test]
        fn neck_above() {
            assert_eq!(neck(5, 6), set(&[Down, Left, Right]));
        }

        #[test]
        fn neck_below() {
            assert_eq!(neck(5, 4), set(&[Up, Left, Right]));
        }

        #[test]
        fn removes_exactly_one_for_any_adjacent_neck() {
            let head = Coord::new(3, 7);
            for d in Direction::iter() {
                let result =
                    avoid_neck(head, head.neighbour(*d), Candidates::ALL);
                assert_eq!(result.len(), 3);
                assert!(!result.contains(*d));
            }
        }

        #[test]
        fn diagonal_neck_resolves_on_x_first() {
            assert_eq!(neck(6, 4), Candidates::ALL.without(Right));
        }

        #[test]
        fn already_removed_direction_is_fine() {
            let start = Candidates::ALL.without(Left);
            let result = avoid_neck(Coord::new(5, 5), Coord::new(4, 5), start);
            assert_eq!(result, start);
        }
    }

    mod walls {
        use super::*;

        fn walls(x: i64, y: i64) -> Candidates {
            avoid_walls(Coord::new(x, y), &six_by_six(), Candidates::ALL)
        }

        #[test]
        fn right_wall() {
            assert_eq!(walls(5, 3), set(&[Up, Down, Left]));
        }

        #[test]
        fn left_wall() {
            assert_eq!(walls(0, 3), set(&[Up, Down, Right]));
        }

        #[test]
        fn top_wall() {
            assert_eq!(walls(3, 5), set(&[Down, Left, Right]));
        }

        #[test]
        fn bottom_wall() {
            assert_eq!(walls(3, 0), set(&[Up, Left, Right]));
        }

        #[test]
        fn top_right_corner() {
            assert_eq!(walls(5, 5), set(&[Down, Left]));
        }

        #[test]
        fn bottom_right_corner() {
            assert_eq!(walls(5, 0), set(&[Up, Left]));
        }

        #[test]
        fn top_left_corner() {
            assert_eq!(walls(0, 5), set(&[Down, Right]));
        }

        #[test]
        fn bottom_left_corner() {
            assert_eq!(walls(0, 0), set(&[Up, Right]));
        }

        #[test]
        fn interior_is_untouched() {
            for x in 1..5 {
                for y in 1..5 {
                    assert_eq!(walls(x, y), Candidates::ALL, "at ({x}, {y})");
                }
            }
        }

        #[test]
        fn single_column_board_only_checks_the_far_edge() {
            let board = Board::new(1, 6).unwrap();
            let result =
                avoid_walls(Coord::new(0, 3), &board, Candidates::ALL);
            assert_eq!(result, Candidates::ALL.without(Right));
        }
    }

    mod body {
        use super::*;

        fn body(points: &[(i64, i64)]) -> Candidates {
            let backbone: Vec<_> =
                points.iter().map(|&(x, y)| Coord::new(x, y)).collect();
            avoid_self(Coord::new(3, 3), &backbone, Candidates::ALL)
        }

        #[test]
        fn segment_to_the_right() {
            assert_eq!(
                body(&[(4, 3), (5, 3)]),
                Candidates::ALL.without(Right)
            );
        }

        #[test]
        fn each_adjacent_segment_removes_its_direction() {
            let head = Coord::new(3, 3);
            for d in Direction::iter() {
                let backbone = [head.neighbour(*d)];
                assert_eq!(
                    avoid_self(head, &backbone, Candidates::ALL),
                    Candidates::ALL.without(*d)
                );
            }
        }

        #[test]
        fn distant_and_diagonal_segments_are_ignored() {
            let far = [(5, 3), (3, 1), (4, 4), (2, 2), (1, 3), (3, 5)];
            assert_eq!(body(&far), Candidates::ALL);
        }

        #[test]
        fn coiled_body_blocks_several_moves() {
            // (3,3) wrapped by its own body on every side
            let coil = [
                (3, 2),
                (4, 2),
                (4, 3),
                (4, 4),
                (3, 4),
                (2, 4),
                (2, 3),
            ];
            assert_eq!(body(&coil), Candidates::NONE);
        }

        #[test]
        fn tail_counts_as_an_obstacle() {
            assert_eq!(body(&[(3, 2), (2, 2), (2, 3)]), set(&[Up, Right]));
        }

        #[test]
        fn segment_on_the_head_is_ignored() {
            assert_eq!(body(&[(3, 3), (3, 3)]), Candidates::ALL);
        }
    }
}
