//! Text rendering of engine state: the stone grid and the turn label.

use reversi_engine::{Board, Cell, Game, Player};

pub const BLACK_STONE: char = '●';
pub const WHITE_STONE: char = '○';
pub const EMPTY_CELL: char = '·';

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_CELL,
        Cell::Black => BLACK_STONE,
        Cell::White => WHITE_STONE,
    }
}

/// The label naming the player to move.
pub fn turn_label(player: Player) -> String {
    format!("{}'s turn", player)
}

/// Draw the grid with column letters across the top and row numbers down the side.
pub fn board(board: &Board) -> String {
    let mut out = String::from("  A B C D E F G H");
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("\n{}", row + 1));
        for &cell in cells.iter() {
            out.push(' ');
            out.push(glyph(cell));
        }
    }
    out
}

/// Everything the player sees after a change: turn label above the board.
pub fn frame(game: &Game) -> String {
    format!("{}\n{}", turn_label(game.current_turn()), board(game.board()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_the_turn() {
        assert_eq!(turn_label(Player::Black), "Black's turn");
        assert_eq!(turn_label(Player::White), "White's turn");
    }

    #[test]
    fn draws_opening_position() {
        let text = board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "  A B C D E F G H");
        assert_eq!(lines[4], "4 · · · ○ ● · · ·");
        assert_eq!(lines[5], "5 · · · ● ○ · · ·");
    }

    #[test]
    fn frame_starts_with_label() {
        let text = frame(&Game::new());
        assert!(text.starts_with("Black's turn\n  A B"));
    }
}
