use crate::{BOARD_SIZE, GomokuColor, GomokuCoord, GomokuMove};

/// The dense 15x15 grid of cell colors. Never stored; always recomputed from
/// the authoritative move log, so persisted state stays a single blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GomokuBoard {
    cells: Vec<GomokuColor>,
}

impl GomokuBoard {
    pub fn new() -> Self {
        GomokuBoard {
            cells: vec![GomokuColor::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Folds every stone of the log onto an empty grid, in log order. A later
    /// stone at the same coordinates overwrites the earlier one; the projector
    /// performs no occupancy validation. Stones outside the grid are ignored.
    /// Pure and idempotent: the same log always yields the same board.
    pub fn from_moves(moves: &[GomokuMove]) -> Self {
        let mut board = GomokuBoard::new();
        for mv in moves {
            for stone in &mv.stones {
                if let Some(cell) = stone.pos.try_get_mut(&mut board.cells) {
                    *cell = stone.color;
                }
            }
        }
        board
    }

    pub fn get(&self, pos: GomokuCoord) -> Option<GomokuColor> {
        pos.try_get(&self.cells).copied()
    }

    fn cell(&self, x: i32, y: i32) -> GomokuColor {
        self.get(GomokuCoord::new(x, y))
            .unwrap_or(GomokuColor::Empty)
    }

    /// Row-major integer view for the broadcast payload.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        let size = BOARD_SIZE as i32;
        (0..size)
            .map(|y| (0..size).map(|x| self.cell(x, y).value()).collect())
            .collect()
    }

    /// Scans for an exact run of five same-colored stones along rows, columns
    /// and both diagonal families. Returns the winning color, or `Empty` when
    /// no axis holds a winning run. Overlines (six or more in a row) do not
    /// count. The first axis with a winner short-circuits the scan; in a
    /// legally played game at most one axis can win at a time, so the order
    /// only matters for speed.
    pub fn find_five_in_a_row(&self) -> GomokuColor {
        let size = BOARD_SIZE as i32;

        for y in 0..size {
            let winner = scan_line((0..size).map(|x| self.cell(x, y)));
            if winner != GomokuColor::Empty {
                return winner;
            }
        }

        for x in 0..size {
            let winner = scan_line((0..size).map(|y| self.cell(x, y)));
            if winner != GomokuColor::Empty {
                return winner;
            }
        }

        // Diagonals running bottom-left to top-right: x + y is constant.
        for k in 0..(2 * size - 1) {
            let winner = scan_line(
                (0..size)
                    .filter(move |x| k - x >= 0 && k - x < size)
                    .map(|x| self.cell(x, k - x)),
            );
            if winner != GomokuColor::Empty {
                return winner;
            }
        }

        // Diagonals running top-left to bottom-right: y - x is constant.
        for k in (1 - size)..size {
            let winner = scan_line(
                (0..size)
                    .filter(move |x| x + k >= 0 && x + k < size)
                    .map(|x| self.cell(x, x + k)),
            );
            if winner != GomokuColor::Empty {
                return winner;
            }
        }

        GomokuColor::Empty
    }
}

impl Default for GomokuBoard {
    fn default() -> Self {
        GomokuBoard::new()
    }
}

/// Run-length scan of a single axis. Runs longer than five are capped at an
/// invalid length so they can never register as exactly five again.
fn scan_line(line: impl IntoIterator<Item = GomokuColor>) -> GomokuColor {
    let mut run_color = GomokuColor::Empty;
    let mut run_len = 0usize;
    for cell in line {
        match cell {
            GomokuColor::Empty => {
                if run_len == 5 {
                    return run_color;
                }
                run_color = GomokuColor::Empty;
                run_len = 0;
            }
            color if color == run_color => {
                run_len += 1;
                if run_len > 5 {
                    run_len = 6;
                }
            }
            color => {
                if run_len == 5 {
                    return run_color;
                }
                run_color = color;
                run_len = 1;
            }
        }
    }
    if run_len == 5 {
        run_color
    } else {
        GomokuColor::Empty
    }
}

/// UI hint for the color of the next stone: black on an empty log, otherwise
/// the alternation of the most recently placed stone's own color. Not
/// authoritative; the engine does not validate submitted stone colors against
/// it.
pub fn next_stone_color(moves: &[GomokuMove]) -> GomokuColor {
    moves
        .iter()
        .rev()
        .find_map(|mv| mv.stones.last())
        .map_or(GomokuColor::Black, |stone| stone.color.next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GomokuStone;

    fn place(x: i32, y: i32, color: GomokuColor) -> GomokuMove {
        GomokuMove {
            stones: vec![GomokuStone::new(x, y, color)],
            press_clock: false,
        }
    }

    fn row_of(color: GomokuColor, y: i32, x0: i32, len: i32) -> Vec<GomokuMove> {
        (0..len).map(|i| place(x0 + i, y, color)).collect()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = GomokuBoard::new();
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let moves = vec![
            place(7, 7, GomokuColor::Black),
            place(7, 8, GomokuColor::White),
            place(8, 7, GomokuColor::Black),
        ];
        let first = GomokuBoard::from_moves(&moves);
        let second = GomokuBoard::from_moves(&moves);
        assert_eq!(first, second);
        assert_eq!(
            first.get(GomokuCoord::new(7, 7)),
            Some(GomokuColor::Black)
        );
        assert_eq!(
            first.get(GomokuCoord::new(7, 8)),
            Some(GomokuColor::White)
        );
    }

    #[test]
    fn test_later_stone_overwrites_earlier_one() {
        let moves = vec![
            place(3, 3, GomokuColor::Black),
            place(3, 3, GomokuColor::White),
        ];
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.get(GomokuCoord::new(3, 3)), Some(GomokuColor::White));
    }

    #[test]
    fn test_out_of_range_stones_are_ignored() {
        let moves = vec![
            place(-1, 0, GomokuColor::Black),
            place(0, 15, GomokuColor::Black),
            place(20, 20, GomokuColor::White),
        ];
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board, GomokuBoard::new());
    }

    #[test]
    fn test_five_in_a_row_horizontal() {
        let board = GomokuBoard::from_moves(&row_of(GomokuColor::Black, 0, 0, 5));
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Black);
    }

    #[test]
    fn test_five_in_a_row_at_right_edge() {
        let board = GomokuBoard::from_moves(&row_of(GomokuColor::White, 14, 10, 5));
        assert_eq!(board.find_five_in_a_row(), GomokuColor::White);
    }

    #[test]
    fn test_four_in_a_row_is_not_a_win() {
        let board = GomokuBoard::from_moves(&row_of(GomokuColor::Black, 7, 2, 4));
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_overline_is_not_a_win() {
        let board = GomokuBoard::from_moves(&row_of(GomokuColor::Black, 7, 2, 6));
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_overline_followed_by_other_color_is_not_a_win() {
        let mut moves = row_of(GomokuColor::Black, 7, 2, 6);
        moves.push(place(8, 7, GomokuColor::White));
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_five_in_a_row_vertical() {
        let moves: Vec<_> = (3..8).map(|y| place(4, y, GomokuColor::White)).collect();
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::White);
    }

    #[test]
    fn test_five_in_a_row_diagonal_down_right() {
        let moves: Vec<_> = (0..5).map(|i| place(2 + i, 3 + i, GomokuColor::Black)).collect();
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Black);
    }

    #[test]
    fn test_five_in_a_row_diagonal_up_right() {
        let moves: Vec<_> = (0..5).map(|i| place(2 + i, 10 - i, GomokuColor::White)).collect();
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::White);
    }

    #[test]
    fn test_diagonal_overline_is_not_a_win() {
        let moves: Vec<_> = (0..6).map(|i| place(2 + i, 3 + i, GomokuColor::Black)).collect();
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_run_interrupted_by_other_color() {
        let mut moves = row_of(GomokuColor::Black, 5, 0, 4);
        moves.push(place(4, 5, GomokuColor::White));
        moves.extend(row_of(GomokuColor::Black, 5, 5, 4));
        let board = GomokuBoard::from_moves(&moves);
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Empty);
    }

    #[test]
    fn test_run_ending_at_line_end_wins() {
        // Run touches the end of the row; the terminating check must fire.
        let board = GomokuBoard::from_moves(&row_of(GomokuColor::Black, 3, 10, 5));
        assert_eq!(board.find_five_in_a_row(), GomokuColor::Black);
    }

    #[test]
    fn test_next_stone_color_alternates() {
        assert_eq!(next_stone_color(&[]), GomokuColor::Black);
        let mut moves = vec![place(7, 7, GomokuColor::Black)];
        assert_eq!(next_stone_color(&moves), GomokuColor::White);
        moves.push(place(7, 8, GomokuColor::White));
        assert_eq!(next_stone_color(&moves), GomokuColor::Black);
    }

    #[test]
    fn test_next_stone_color_skips_stoneless_moves() {
        let moves = vec![
            place(7, 7, GomokuColor::Black),
            GomokuMove {
                stones: Vec::new(),
                press_clock: false,
            },
        ];
        assert_eq!(next_stone_color(&moves), GomokuColor::White);
    }

    #[test]
    fn test_to_matrix_encoding() {
        let moves = vec![
            place(0, 0, GomokuColor::Black),
            place(1, 0, GomokuColor::White),
        ];
        let matrix = GomokuBoard::from_moves(&moves).to_matrix();
        assert_eq!(matrix.len(), BOARD_SIZE);
        assert!(matrix.iter().all(|row| row.len() == BOARD_SIZE));
        assert_eq!(matrix[0][0], 1);
        assert_eq!(matrix[0][1], 2);
        assert_eq!(matrix[1][0], 0);
    }
}
