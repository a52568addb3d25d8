//! Text diagram of the board

use chess_core::{sq, Position};

/// Draw the position as an 8x8 grid of FEN letters, `.` for empty squares.
pub fn render_board(pos: &Position, flipped: bool) -> String {
    let mut out = String::from("  +-----------------+\n");

    for rank in 0..8 {
        let display_rank = if flipped { rank } else { 7 - rank };
        out.push_str(&format!("{} |", display_rank + 1));

        for file in 0..8 {
            let display_file = if flipped { 7 - file } else { file };
            let symbol = sq(display_file, display_rank)
                .and_then(|square| pos.piece_at(square))
                .map_or('.', |piece| piece.symbol());
            out.push(' ');
            out.push(symbol);
        }

        out.push_str(" |\n");
    }

    out.push_str("  +-----------------+\n");
    let files = if flipped { "h g f e d c b a" } else { "a b c d e f g h" };
    out.push_str(&format!("    {files}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position() {
        let text = render_board(&Position::startpos(), false);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[5], "4 | . . . . . . . . |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
        assert_eq!(lines[10], "    a b c d e f g h");
    }

    #[test]
    fn test_flipped_board() {
        let text = render_board(&Position::startpos(), true);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "1 | R N B K Q B N R |");
        assert_eq!(lines[8], "8 | r n b k q b n r |");
        assert_eq!(lines[10], "    h g f e d c b a");
    }
}
