//! Standard chess rules, backed by `cozy-chess`

use std::fmt;

use cozy_chess::{Board, File, Move, Piece as CozyPiece, Square};

use crate::error::GameError;
use crate::explain::MoveFacts;
use crate::rules::RulesEngine;
use crate::types::*;
use crate::uci::UciMove;

/// A legal chess position reachable from the standard start.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        Board::from_fen(fen.trim(), false)
            .map(|board| Self { board })
            .map_err(|e| GameError::InvalidFen {
                fen: fen.to_string(),
                reason: format!("{e:?}"),
            })
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        let square = Square::try_index(sq as usize)?;
        let kind = self.board.piece_on(square)?;
        let color = self.board.color_on(square)?;
        Some(Piece {
            color: color_from(color),
            kind: kind_from(kind),
        })
    }

    /// Square the king lands on if `mv` is a castle, encoded by cozy-chess
    /// as the king capturing its own rook.
    fn castle_target(&self, mv: Move) -> Option<(Square, CastleSide)> {
        let stm = self.board.side_to_move();
        if self.board.king(stm) != mv.from || !self.board.colors(stm).has(mv.to) {
            return None;
        }
        let (file, side) = if (mv.to.file() as u8) > (mv.from.file() as u8) {
            (File::G, CastleSide::Kingside)
        } else {
            (File::C, CastleSide::Queenside)
        };
        Some((Square::new(file, mv.from.rank()), side))
    }

    /// Whether the side to move can actually take en passant. cozy-chess
    /// records the en passant file after every double push.
    fn can_capture_en_passant(&self) -> bool {
        let Some(file) = self.board.en_passant() else {
            return false;
        };
        self.legal_moves().into_iter().any(|mv| {
            self.board.piece_on(mv.from) == Some(CozyPiece::Pawn)
                && mv.from.file() != mv.to.file()
                && mv.to.file() == file
                && self.board.piece_on(mv.to).is_none()
        })
    }
}

impl RulesEngine for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            moves.extend(piece_moves);
            false
        });
        moves
    }

    fn to_uci(&self, mv: Move) -> UciMove {
        let to = self.castle_target(mv).map_or(mv.to, |(king_to, _)| king_to);
        UciMove {
            from: mv.from as u8,
            to: to as u8,
            promo: mv.promotion.map(kind_from),
        }
    }

    fn inspect(&self, mv: Move) -> Option<MoveFacts> {
        let mover = self.board.side_to_move();
        if self.board.color_on(mv.from) != Some(mover) {
            return None;
        }
        let piece = kind_from(self.board.piece_on(mv.from)?);
        let castle = self.castle_target(mv);

        let mut en_passant = false;
        let captured = match castle {
            Some(_) => None,
            None => match self.board.piece_on(mv.to) {
                Some(victim) => Some(kind_from(victim)),
                None if piece == PieceKind::Pawn && mv.from.file() != mv.to.file() => {
                    en_passant = true;
                    Some(PieceKind::Pawn)
                }
                None => None,
            },
        };

        Some(MoveFacts {
            mover: color_from(mover),
            piece,
            from: mv.from as u8,
            to: castle.map_or(mv.to, |(king_to, _)| king_to) as u8,
            captured,
            en_passant,
            castle: castle.map(|(_, side)| side),
            promotion: mv.promotion.map(kind_from),
            fullmove_number: self.fullmove_number(),
        })
    }

    fn play(&mut self, mv: Move) {
        self.board.play_unchecked(mv);
    }

    fn side_to_move(&self) -> Color {
        color_from(self.board.side_to_move())
    }

    fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    fn fullmove_number(&self) -> u32 {
        self.board.fullmove_number() as u32
    }

    /// Bare kings plus at most one minor piece, or bishops that all stand
    /// on one square color.
    fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let mating =
            b.pieces(CozyPiece::Pawn) | b.pieces(CozyPiece::Rook) | b.pieces(CozyPiece::Queen);
        if !mating.is_empty() {
            return false;
        }

        let knights = b.pieces(CozyPiece::Knight);
        let bishops = b.pieces(CozyPiece::Bishop);
        if (knights | bishops).len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let dark = bishops
            .into_iter()
            .filter(|&sq| is_dark_square(sq as u8))
            .count();
        dark == 0 || dark == bishops.len() as usize
    }

    /// Same key for positions that are identical under the repetition rule:
    /// an en passant file only counts when the capture is legal.
    fn position_key(&self) -> u64 {
        if self.can_capture_en_passant() {
            self.board.hash()
        } else {
            self.board.hash_without_ep()
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

fn color_from(color: cozy_chess::Color) -> Color {
    match color {
        cozy_chess::Color::White => Color::White,
        cozy_chess::Color::Black => Color::Black,
    }
}

fn kind_from(piece: CozyPiece) -> PieceKind {
    match piece {
        CozyPiece::Pawn => PieceKind::Pawn,
        CozyPiece::Knight => PieceKind::Knight,
        CozyPiece::Bishop => PieceKind::Bishop,
        CozyPiece::Rook => PieceKind::Rook,
        CozyPiece::Queen => PieceKind::Queen,
        CozyPiece::King => PieceKind::King,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
