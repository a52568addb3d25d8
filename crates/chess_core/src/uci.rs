use std::fmt;
use std::str::FromStr;

use crate::error::UciParseError;
use crate::types::*;

/// A move in UCI long algebraic notation, independent of any position.
///
/// Castling is written as the king's two-square move (`e1g1`), never as
/// king-takes-rook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UciMove {
    pub from: u8, // 0..63
    pub to: u8,   // 0..63
    pub promo: Option<PieceKind>,
}

impl UciMove {
    pub fn new(from: u8, to: u8) -> Self {
        Self {
            from,
            to,
            promo: None,
        }
    }
}

impl fmt::Display for UciMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", sq_to_coord(self.from), sq_to_coord(self.to))?;
        if let Some(ch) = self.promo.and_then(PieceKind::promotion_char) {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl FromStr for UciMove {
    type Err = UciParseError;

    /// Syntax only: whether the move is playable is up to the position.
    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        // Work on chars so arbitrary user input never splits a code point.
        let chars: Vec<char> = txt.chars().collect();
        if !(4..=5).contains(&chars.len()) {
            return Err(UciParseError::Length(chars.len()));
        }

        let square = |pair: &[char]| {
            let coord: String = pair.iter().collect();
            coord_to_sq(&coord).ok_or(UciParseError::Square(coord))
        };
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;

        let promo = match chars.get(4) {
            Some(&c) => Some(PieceKind::from_promotion_char(c).ok_or(UciParseError::Promotion(c))?),
            None => None,
        };

        if from == to {
            return Err(UciParseError::NullMove);
        }

        Ok(Self { from, to, promo })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv: UciMove = "e2e4".parse().unwrap();
        assert_eq!(mv, UciMove::new(coord_to_sq("e2").unwrap(), coord_to_sq("e4").unwrap()));

        let promo: UciMove = "e7e8Q".parse().unwrap();
        assert_eq!(promo.promo, Some(PieceKind::Queen));
        assert_eq!(promo.to_string(), "e7e8q");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!("zz99".parse::<UciMove>(), Err(UciParseError::Square("zz".to_string())));
        assert_eq!("e2".parse::<UciMove>(), Err(UciParseError::Length(2)));
        assert_eq!("e2e4e5".parse::<UciMove>(), Err(UciParseError::Length(6)));
        assert_eq!("e7e8k".parse::<UciMove>(), Err(UciParseError::Promotion('k')));
        assert_eq!("e2e2".parse::<UciMove>(), Err(UciParseError::NullMove));
        assert_eq!("0000".parse::<UciMove>(), Err(UciParseError::Square("00".to_string())));
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert!("é2é4".parse::<UciMove>().is_err());
        assert!("♞♞♞♞".parse::<UciMove>().is_err());
    }
}
