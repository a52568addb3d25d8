//! Plain-language explanations for played moves
//!
//! An explanation is a pure function of the facts gathered before the move
//! ([`MoveFacts`]) and the check state it produced ([`CheckState`]). Exactly
//! one [`Motif`] is chosen per move, by fixed priority:
//!
//! checkmate > check > capture > castle > promotion > center control >
//! development > quiet move

use crate::types::*;

/// Moves up to and including this full-move number count as the opening.
pub const OPENING_MOVES: u32 = 10;

/// Structural facts about a move, taken from the position it is played in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveFacts {
    pub mover: Color,
    pub piece: PieceKind,
    pub from: u8,
    /// Destination of the moving piece (the king's square when castling).
    pub to: u8,
    pub captured: Option<PieceKind>,
    pub en_passant: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
    /// Full-move number the move was played on.
    pub fullmove_number: u32,
}

/// What the move did to the opponent's king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckState {
    None,
    Check,
    Checkmate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Motif {
    Checkmate,
    Check,
    Capture,
    Castle,
    Promotion,
    CenterControl,
    Development,
    Quiet,
}

/// Pick the single highest-priority motif that applies.
pub fn classify(facts: &MoveFacts, check: CheckState) -> Motif {
    match check {
        CheckState::Checkmate => return Motif::Checkmate,
        CheckState::Check => return Motif::Check,
        CheckState::None => {}
    }
    if facts.captured.is_some() {
        Motif::Capture
    } else if facts.castle.is_some() {
        Motif::Castle
    } else if facts.promotion.is_some() {
        Motif::Promotion
    } else if controls_center(facts) {
        Motif::CenterControl
    } else if is_development(facts) {
        Motif::Development
    } else {
        Motif::Quiet
    }
}

pub fn explain(facts: &MoveFacts, check: CheckState) -> String {
    let piece = capitalize(facts.piece.name());
    let to = sq_to_coord(facts.to);

    match classify(facts, check) {
        Motif::Checkmate => format!(
            "{piece} to {to} is checkmate. {} wins the game.",
            facts.mover
        ),
        Motif::Check => format!(
            "{piece} to {to} gives check, forcing the {} king to respond.",
            facts.mover.other().name().to_lowercase()
        ),
        Motif::Capture => explain_capture(facts, &piece, &to),
        Motif::Castle => {
            let side = match facts.castle {
                Some(CastleSide::Queenside) => "queenside",
                _ => "kingside",
            };
            format!(
                "{} castles {side}, tucking the king away and bringing the rook into play.",
                facts.mover
            )
        }
        Motif::Promotion => {
            let promo = facts.promotion.unwrap_or(PieceKind::Queen).name();
            format!("Pawn reaches {to} and promotes to a {promo}.")
        }
        Motif::CenterControl => {
            if is_central(facts.to) {
                format!("{piece} {} to {to}, staking a claim in the center.", verb(facts.piece))
            } else {
                format!("{piece} {} to {to}, adding pressure on the center.", verb(facts.piece))
            }
        }
        Motif::Development => {
            format!("{piece} develops to {to}, bringing another piece into the game.")
        }
        Motif::Quiet => match facts.piece {
            PieceKind::Pawn => format!("Pawn advances to {to}."),
            PieceKind::King => format!("King steps to {to}."),
            _ => format!("{piece} repositions to {to}."),
        },
    }
}

fn explain_capture(facts: &MoveFacts, piece: &str, to: &str) -> String {
    let captured = facts.captured.unwrap_or(PieceKind::Pawn);
    if facts.en_passant {
        return format!("Pawn captures the pawn en passant, landing on {to}.");
    }
    let gain = captured.value() as i64 - facts.piece.value() as i64;
    if gain > 0 {
        format!("{piece} captures the {} on {to}, winning material.", captured.name())
    } else if gain == 0 {
        format!("{piece} takes the {} on {to}, an even trade.", captured.name())
    } else {
        format!("{piece} captures the {} on {to}.", captured.name())
    }
}

fn verb(piece: PieceKind) -> &'static str {
    if piece == PieceKind::Pawn {
        "advances"
    } else {
        "moves"
    }
}

/// d4, e4, d5 and e5.
pub fn is_central(sq: u8) -> bool {
    (3..=4).contains(&file_of(sq)) && (3..=4).contains(&rank_of(sq))
}

/// The c3-f6 block.
pub fn is_extended_center(sq: u8) -> bool {
    (2..=5).contains(&file_of(sq)) && (2..=5).contains(&rank_of(sq))
}

/// Chebyshev distance to the board's midpoint, doubled to stay integral.
fn center_distance(sq: u8) -> i8 {
    let df = (2 * file_of(sq) - 7).abs();
    let dr = (2 * rank_of(sq) - 7).abs();
    df.max(dr)
}

fn controls_center(facts: &MoveFacts) -> bool {
    if facts.piece == PieceKind::King {
        return false;
    }
    is_central(facts.to)
        || (is_extended_center(facts.to) && center_distance(facts.to) < center_distance(facts.from))
}

fn is_development(facts: &MoveFacts) -> bool {
    let home_rank = match facts.mover {
        Color::White => 0,
        Color::Black => 7,
    };
    matches!(facts.piece, PieceKind::Knight | PieceKind::Bishop)
        && facts.fullmove_number <= OPENING_MOVES
        && rank_of(facts.from) == home_rank
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod explain_tests;
