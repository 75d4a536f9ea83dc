//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Cell under the keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

/// Moves cursor based on arrow keys, staying inside rows of the given lengths.
pub fn move_cursor(cursor: Cursor, key: KeyCode, row_lengths: &[usize]) -> Cursor {
    if row_lengths.is_empty() {
        return Cursor::default();
    }

    let (row, col) = match key {
        KeyCode::Up => (cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => ((cursor.row + 1).min(row_lengths.len() - 1), cursor.col),
        KeyCode::Left => (cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => (cursor.row, cursor.col + 1),
        _ => (cursor.row, cursor.col),
    };

    let row = row.min(row_lengths.len() - 1);
    let col = col.min(row_lengths[row].saturating_sub(1));
    Cursor { row, col }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [usize; 3] = [3, 3, 3];

    #[test]
    fn test_arrows_move_one_cell() {
        let start = Cursor { row: 1, col: 1 };
        assert_eq!(move_cursor(start, KeyCode::Up, &GRID), Cursor { row: 0, col: 1 });
        assert_eq!(move_cursor(start, KeyCode::Down, &GRID), Cursor { row: 2, col: 1 });
        assert_eq!(move_cursor(start, KeyCode::Left, &GRID), Cursor { row: 1, col: 0 });
        assert_eq!(move_cursor(start, KeyCode::Right, &GRID), Cursor { row: 1, col: 2 });
    }

    #[test]
    fn test_edges_clamp() {
        let corner = Cursor { row: 2, col: 2 };
        assert_eq!(move_cursor(corner, KeyCode::Down, &GRID), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right, &GRID), corner);
        assert_eq!(move_cursor(Cursor::default(), KeyCode::Up, &GRID), Cursor::default());
    }

    #[test]
    fn test_ragged_rows_clamp_column() {
        let cursor = Cursor { row: 0, col: 4 };
        assert_eq!(move_cursor(cursor, KeyCode::Down, &[5, 2]), Cursor { row: 1, col: 1 });
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(move_cursor(Cursor { row: 3, col: 3 }, KeyCode::Up, &[]), Cursor::default());
    }
}
