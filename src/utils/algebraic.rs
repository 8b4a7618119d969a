//! Conversions between board locations and coordinate notation.
//!
//! Squares are written as file letter plus rank digit (`e4`), and moves as
//! two squares back to back (`e2e4`). Row 0 is rank 1 and column 0 is file a.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{in_bounds, BoardLocation, Move};

/// Convert coordinate notation (for example: "e4") to a `(row, col)` location.
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert a `(row, col)` location to coordinate notation (for example: "e4").
pub fn location_to_algebraic(location: BoardLocation) -> ChessResult<String> {
    if !in_bounds(location) {
        return Err(ChessErrors::InvalidFileOrRank(location));
    }
    let file_char = char::from(b'a' + location.1 as u8);
    let rank_char = char::from(b'1' + location.0 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a move such as "e2e4". A trailing promotion letter is accepted only
/// as `q`, since every promotion is to a queen.
pub fn parse_move(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    let invalid = || ChessErrors::InvalidAlgebraicString(text.to_owned());

    let squares = match text.len() {
        4 => text,
        5 if text.ends_with(|c: char| c == 'q' || c == 'Q') => &text[..4],
        _ => return Err(invalid()),
    };
    if !squares.is_ascii() {
        return Err(invalid());
    }

    let from = algebraic_to_location(&squares[..2])?;
    let to = algebraic_to_location(&squares[2..])?;
    Ok(Move::new(from, to))
}

impl FromStr for Move {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (
            location_to_algebraic(self.from),
            location_to_algebraic(self.to),
        ) {
            (Ok(from), Ok(to)) => write!(f, "{from}{to}"),
            _ => write!(f, "{:?}->{:?}", self.from, self.to),
        }
    }
}
