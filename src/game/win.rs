/// Bit-index strides of the four line directions: vertical, diagonal up-left
/// to down-right, horizontal, diagonal down-left to up-right.
pub const DIRECTIONS: [u32; 4] = [1, 6, 7, 8];

/// Check whether a single player's bitboard holds four in a row.
///
/// ANDing the board with copies of itself shifted by `d`, `2d` and `3d` leaves
/// a bit set only where four consecutive cells spaced `d` apart are all
/// occupied. The sentinel row keeps vertical and diagonal runs from wrapping
/// into the next column.
pub fn has_four(bits: u64) -> bool {
    DIRECTIONS.iter().any(|&d| {
        bits & (bits >> d) & (bits >> (2 * d)) & (bits >> (3 * d)) != 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::position::cell_index;

    fn board(cells: &[(usize, usize)]) -> u64 {
        cells
            .iter()
            .fold(0, |bits, &(row, col)| bits | 1 << cell_index(row, col))
    }

    #[test]
    fn test_empty_board_has_no_four() {
        assert!(!has_four(0));
    }

    #[test]
    fn test_vertical_four() {
        assert!(has_four(board(&[(0, 3), (1, 3), (2, 3), (3, 3)])));
        assert!(has_four(board(&[(2, 6), (3, 6), (4, 6), (5, 6)])));
    }

    #[test]
    fn test_horizontal_four() {
        assert!(has_four(board(&[(0, 0), (0, 1), (0, 2), (0, 3)])));
        assert!(has_four(board(&[(5, 3), (5, 4), (5, 5), (5, 6)])));
    }

    #[test]
    fn test_diagonal_up_four() {
        assert!(has_four(board(&[(0, 0), (1, 1), (2, 2), (3, 3)])));
    }

    #[test]
    fn test_diagonal_down_four() {
        assert!(has_four(board(&[(3, 3), (2, 4), (1, 5), (0, 6)])));
    }

    #[test]
    fn test_three_with_gap_is_not_four() {
        assert!(!has_four(board(&[(0, 0), (0, 1), (0, 3), (0, 4)])));
        assert!(!has_four(board(&[(0, 2), (1, 2), (3, 2), (4, 2)])));
        assert!(!has_four(board(&[(0, 0), (1, 1), (3, 3), (4, 4)])));
    }

    #[test]
    fn test_three_in_a_row_is_not_four() {
        assert!(!has_four(board(&[(0, 0), (0, 1), (0, 2)])));
        assert!(!has_four(board(&[(0, 5), (1, 5), (2, 5)])));
    }

    #[test]
    fn test_column_runs_do_not_wrap() {
        // Top three cells of column 0 plus the bottom cell of column 1 are
        // adjacent bit indices only through the sentinel, which is never set.
        assert!(!has_four(board(&[(3, 0), (4, 0), (5, 0), (0, 1)])));
        assert!(!has_four(board(&[(4, 0), (5, 0), (0, 1), (1, 1)])));
    }
}
