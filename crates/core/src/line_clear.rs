//! Line-clear module - full-row detection and gravity shift
//!
//! Works directly on the sparse [`LockedCells`] map. Rows are found from a
//! single bottom-to-top scan of the map as it stood before any removal, so
//! clearing one row can never change which other rows count as full.

use arrayvec::ArrayVec;

use crate::board::LockedCells;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Row indices cleared in one pass, bottom row first
pub type ClearedRows = ArrayVec<i8, { BOARD_HEIGHT as usize }>;

/// Check if every column of `row` holds a locked block
pub fn is_row_full(locked: &LockedCells, row: i8) -> bool {
    (0..BOARD_WIDTH as i8).all(|x| locked.contains_key(&(x, row)))
}

/// Full visible rows, scanned from the bottom (row 19) to the top (row 0)
pub fn find_full_rows(locked: &LockedCells) -> ClearedRows {
    let mut rows = ClearedRows::new();
    for row in (0..BOARD_HEIGHT as i8).rev() {
        if is_row_full(locked, row) {
            rows.push(row);
        }
    }
    rows
}

/// Remove every full row and shift the blocks above it down
///
/// Each surviving block moves down by the number of cleared rows beneath
/// it; blocks below every cleared row stay put. Returns the number of rows
/// cleared.
pub fn clear_full_rows(locked: &mut LockedCells) -> usize {
    let cleared = find_full_rows(locked);
    if cleared.is_empty() {
        return 0;
    }

    let shifted: LockedCells = locked
        .drain()
        .filter(|((_, y), _)| !cleared.contains(y))
        .map(|((x, y), color)| {
            let drop = cleared.iter().filter(|&&row| row > y).count() as i8;
            ((x, y + drop), color)
        })
        .collect();
    *locked = shifted;

    cleared.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn fill_row(locked: &mut LockedCells, row: i8, color: Color) {
        for x in 0..BOARD_WIDTH as i8 {
            locked.insert((x, row), color);
        }
    }

    #[test]
    fn test_no_full_rows_leaves_map_unchanged() {
        let mut locked = LockedCells::new();
        for x in 0..9 {
            locked.insert((x, 19), Color::RED);
        }
        locked.insert((4, -2), Color::BLUE);
        let before = locked.clone();

        assert_eq!(clear_full_rows(&mut locked), 0);
        assert_eq!(locked, before);
    }

    #[test]
    fn test_single_row_shifts_everything_above() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, Color::RED);
        locked.insert((2, 18), Color::BLUE);
        locked.insert((7, 10), Color::GREEN);

        assert_eq!(clear_full_rows(&mut locked), 1);
        assert_eq!(locked.len(), 2);
        assert_eq!(locked.get(&(2, 19)), Some(&Color::BLUE));
        assert_eq!(locked.get(&(7, 11)), Some(&Color::GREEN));
    }

    #[test]
    fn test_blocks_below_cleared_row_stay() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 10, Color::RED);
        locked.insert((0, 19), Color::CYAN);
        locked.insert((0, 9), Color::BLUE);

        assert_eq!(clear_full_rows(&mut locked), 1);
        assert_eq!(locked.get(&(0, 19)), Some(&Color::CYAN));
        assert_eq!(locked.get(&(0, 10)), Some(&Color::BLUE));
        assert_eq!(locked.len(), 2);
    }

    #[test]
    fn test_four_adjacent_rows() {
        let mut locked = LockedCells::new();
        for row in 16..20 {
            fill_row(&mut locked, row, Color::CYAN);
        }
        locked.insert((3, 15), Color::YELLOW);

        assert_eq!(clear_full_rows(&mut locked), 4);
        assert_eq!(locked.len(), 1);
        assert_eq!(locked.get(&(3, 19)), Some(&Color::YELLOW));
    }

    #[test]
    fn test_split_rows_keep_relative_order() {
        // Rows 19 and 17 full, 18 and 16 partial.
        let mut locked = LockedCells::new();
        fill_row(&mut locked, 19, Color::RED);
        fill_row(&mut locked, 17, Color::RED);
        locked.insert((1, 18), Color::BLUE);
        locked.insert((2, 16), Color::GREEN);
        locked.insert((3, -1), Color::ORANGE);

        assert_eq!(find_full_rows(&locked).as_slice(), &[19, 17]);
        assert_eq!(clear_full_rows(&mut locked), 2);

        assert_eq!(locked.get(&(1, 19)), Some(&Color::BLUE));
        assert_eq!(locked.get(&(2, 18)), Some(&Color::GREEN));
        assert_eq!(locked.get(&(3, 1)), Some(&Color::ORANGE));
        assert_eq!(locked.len(), 3);
    }

    #[test]
    fn test_spawn_buffer_rows_are_never_full() {
        let mut locked = LockedCells::new();
        fill_row(&mut locked, -1, Color::RED);
        assert_eq!(clear_full_rows(&mut locked), 0);
        assert_eq!(locked.len(), BOARD_WIDTH as usize);
    }
}
