//! Board output for external renderers.

use crate::game::{Cell, GameState, COLS, ROWS};

/// Board as rows of cells, top row first.
pub fn grid(state: &GameState) -> [[Cell; COLS]; ROWS] {
    let mut rows = [[Cell::Empty; COLS]; ROWS];
    for (i, row) in rows.iter_mut().enumerate() {
        let board_row = ROWS - 1 - i;
        for (col, cell) in row.iter_mut().enumerate() {
            *cell = state.occupant(board_row, col);
        }
    }
    rows
}

pub fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '*',
        Cell::Red => 'X',
        Cell::Blue => 'O',
    }
}

/// Plain text board, top row first, with 1-based column numbers underneath.
pub fn to_text(state: &GameState) -> String {
    let mut lines: Vec<String> = grid(state)
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| symbol(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    lines.push(
        (1..=COLS)
            .map(|col| col.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_puts_bottom_row_last() {
        let mut state = GameState::initial();
        state.apply(0).unwrap();
        state.apply(0).unwrap();

        let rows = grid(&state);
        assert_eq!(rows[ROWS - 1][0], Cell::Red);
        assert_eq!(rows[ROWS - 2][0], Cell::Blue);
        assert_eq!(rows[0][0], Cell::Empty);
    }

    #[test]
    fn test_to_text() {
        let mut state = GameState::initial();
        state.apply(3).unwrap();
        state.apply(4).unwrap();

        let expected = "\
* * * * * * *
* * * * * * *
* * * * * * *
* * * * * * *
* * * * * * *
* * * X O * *
1 2 3 4 5 6 7";
        assert_eq!(to_text(&state), expected);
    }
}
