//! Captured-piece model and glyph rendering shared by `client` and `cli`.
//!
//! This crate owns the closed set of capturable piece codes and the pure
//! render model behind the captured-pieces display. Unknown codes are
//! rejected where pieces enter the system (`TryFrom<char>`, `FromStr`,
//! serde), so rendering itself never has to handle them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label for the row listing Black's pieces taken by White.
pub const CAPTURED_BY_WHITE: &str = "Captured by White:";
/// Label for the row listing White's pieces taken by Black.
pub const CAPTURED_BY_BLACK: &str = "Captured by Black:";
/// Placeholder shown for a side that has captured nothing.
pub const NONE_SENTINEL: &str = "None";

/// Error returned when a character is outside the capturable piece set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PieceError {
    #[error("unknown piece code: {0:?}")]
    UnknownCode(char),
}

/// Owner of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

/// A capturable piece, identified on the wire by a single FEN-style letter.
///
/// Lowercase letters are Black's pieces, uppercase are White's. Kings are
/// never captured and have no code here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum PieceCode {
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
}

impl PieceCode {
    /// Every capturable code, Black's first.
    pub const ALL: [PieceCode; 10] = [
        Self::BlackPawn,
        Self::BlackKnight,
        Self::BlackBishop,
        Self::BlackRook,
        Self::BlackQueen,
        Self::WhitePawn,
        Self::WhiteKnight,
        Self::WhiteBishop,
        Self::WhiteRook,
        Self::WhiteQueen,
    ];

    /// The single-letter wire code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::BlackPawn => 'p',
            Self::BlackKnight => 'n',
            Self::BlackBishop => 'b',
            Self::BlackRook => 'r',
            Self::BlackQueen => 'q',
            Self::WhitePawn => 'P',
            Self::WhiteKnight => 'N',
            Self::WhiteBishop => 'B',
            Self::WhiteRook => 'R',
            Self::WhiteQueen => 'Q',
        }
    }

    /// The display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::BlackPawn => '♟',
            Self::BlackKnight => '♞',
            Self::BlackBishop => '♝',
            Self::BlackRook => '♜',
            Self::BlackQueen => '♛',
            Self::WhitePawn => '♙',
            Self::WhiteKnight => '♘',
            Self::WhiteBishop => '♗',
            Self::WhiteRook => '♖',
            Self::WhiteQueen => '♕',
        }
    }

    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::BlackPawn | Self::BlackKnight | Self::BlackBishop | Self::BlackRook | Self::BlackQueen => {
                Side::Black
            }
            Self::WhitePawn | Self::WhiteKnight | Self::WhiteBishop | Self::WhiteRook | Self::WhiteQueen => {
                Side::White
            }
        }
    }
}

impl TryFrom<char> for PieceCode {
    type Error = PieceError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'p' => Ok(Self::BlackPawn),
            'n' => Ok(Self::BlackKnight),
            'b' => Ok(Self::BlackBishop),
            'r' => Ok(Self::BlackRook),
            'q' => Ok(Self::BlackQueen),
            'P' => Ok(Self::WhitePawn),
            'N' => Ok(Self::WhiteKnight),
            'B' => Ok(Self::WhiteBishop),
            'R' => Ok(Self::WhiteRook),
            'Q' => Ok(Self::WhiteQueen),
            other => Err(PieceError::UnknownCode(other)),
        }
    }
}

impl From<PieceCode> for char {
    fn from(value: PieceCode) -> Self {
        value.code()
    }
}

impl fmt::Display for PieceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Ordered pieces one side has lost. Only ever appended to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapturedCollection(Vec<PieceCode>);

impl CapturedCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, piece: PieceCode) {
        self.0.push(piece);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PieceCode] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PieceCode> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<PieceCode>> for CapturedCollection {
    fn from(value: Vec<PieceCode>) -> Self {
        Self(value)
    }
}

impl FromIterator<PieceCode> for CapturedCollection {
    fn from_iter<I: IntoIterator<Item = PieceCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Parses a compact code string such as `"pq"`, `"p,q"` or `"p q"`.
impl FromStr for CapturedCollection {
    type Err = PieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(PieceCode::try_from)
            .collect()
    }
}

/// Both captured collections of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedPieces {
    /// White's pieces that Black has taken.
    pub captured_white: CapturedCollection,
    /// Black's pieces that White has taken.
    pub captured_black: CapturedCollection,
}

impl CapturedPieces {
    /// Append a taken piece to the collection of its owner.
    pub fn record(&mut self, piece: PieceCode) {
        match piece.side() {
            Side::White => self.captured_white.push(piece),
            Side::Black => self.captured_black.push(piece),
        }
    }

    #[must_use]
    pub fn rows(&self) -> [CapturedRow; 2] {
        render_captured(self.captured_white.as_slice(), self.captured_black.as_slice())
    }
}

// =============================================================================
// RENDER MODEL
// =============================================================================

/// One rendered glyph, keyed by its position in the source collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphCell {
    pub key: usize,
    pub glyph: char,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowContent {
    /// Nothing captured; shown as [`NONE_SENTINEL`].
    Empty,
    Glyphs(Vec<GlyphCell>),
}

/// A labeled row of the captured-pieces display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRow {
    pub label: &'static str,
    pub content: RowContent,
}

impl CapturedRow {
    /// The row body as shown to the user: the glyphs in order, or `None`.
    #[must_use]
    pub fn body(&self) -> String {
        match &self.content {
            RowContent::Empty => NONE_SENTINEL.to_owned(),
            RowContent::Glyphs(cells) => cells.iter().map(|cell| cell.glyph).collect(),
        }
    }

    /// Plain-text rendering, e.g. `Captured by White: ♟♛`.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{} {}", self.label, self.body())
    }
}

/// Render one collection under `label`.
#[must_use]
pub fn render_row(label: &'static str, pieces: &[PieceCode]) -> CapturedRow {
    let content = if pieces.is_empty() {
        RowContent::Empty
    } else {
        RowContent::Glyphs(
            pieces
                .iter()
                .enumerate()
                .map(|(key, piece)| GlyphCell { key, glyph: piece.glyph() })
                .collect(),
        )
    };
    CapturedRow { label, content }
}

/// Render both rows: Black's losses under White's label first, then White's.
#[must_use]
pub fn render_captured(captured_white: &[PieceCode], captured_black: &[PieceCode]) -> [CapturedRow; 2] {
    [render_row(CAPTURED_BY_WHITE, captured_black), render_row(CAPTURED_BY_BLACK, captured_white)]
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
