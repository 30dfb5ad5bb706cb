use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{EngineError, Result};

#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Red,
    Wild,
}

impl Color {
    /// The four colors a player can own or select. `Wild` is only ever a card face.
    pub const PLAYABLE: [Color; 4] = [Color::Blue, Color::Green, Color::Yellow, Color::Red];

    pub fn is_wild(self) -> bool {
        self == Color::Wild
    }
}

/// Card faces ordered by rank. Everything up to [`CardKind::Rotate`] is a plain
/// card for compatibility purposes; the ranks above it are matched individually.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumString,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum CardKind {
    #[strum(serialize = "0")]
    Number0 = 0,
    #[strum(serialize = "1")]
    Number1,
    #[strum(serialize = "2")]
    Number2,
    #[strum(serialize = "3")]
    Number3,
    #[strum(serialize = "4")]
    Number4,
    #[strum(serialize = "5")]
    Number5,
    #[strum(serialize = "6")]
    Number6,
    #[strum(serialize = "7")]
    Number7,
    #[strum(serialize = "8")]
    Number8,
    #[strum(serialize = "9")]
    Number9,
    Block,
    Rotate,
    #[strum(to_string = "Add Two", serialize = "Add2")]
    Add2,
    #[strum(to_string = "Color Select", serialize = "ColorSelect")]
    ColorSelect,
    #[strum(to_string = "Add Four", serialize = "AddFour")]
    AddFour,
}

impl CardKind {
    /// Highest rank that compares like a plain card.
    pub const LAST_PLAIN_RANK: u8 = CardKind::Rotate as u8;

    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn is_wild(self) -> bool {
        matches!(self, CardKind::ColorSelect | CardKind::AddFour)
    }

    pub fn number(self) -> Option<u8> {
        match self {
            CardKind::Number0
            | CardKind::Number1
            | CardKind::Number2
            | CardKind::Number3
            | CardKind::Number4
            | CardKind::Number5
            | CardKind::Number6
            | CardKind::Number7
            | CardKind::Number8
            | CardKind::Number9 => Some(self.rank()),
            CardKind::Block
            | CardKind::Rotate
            | CardKind::Add2
            | CardKind::ColorSelect
            | CardKind::AddFour => None,
        }
    }

    pub fn from_number(number: u8) -> Option<CardKind> {
        use strum::IntoEnumIterator;

        CardKind::iter().find(|kind| kind.number() == Some(number))
    }
}

/// An immutable card. The face color is `Wild` exactly when the kind is a wild kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    color: Color,
    kind: CardKind,
}

impl Card {
    pub fn new(color: Color, kind: CardKind) -> Result<Self> {
        if color.is_wild() != kind.is_wild() {
            return Err(EngineError::InvalidCard { color, kind });
        }

        Ok(Self { color, kind })
    }

    /// Callers guarantee the color/kind pairing.
    pub(crate) fn new_unchecked(color: Color, kind: CardKind) -> Self {
        debug_assert_eq!(color.is_wild(), kind.is_wild());
        Self { color, kind }
    }

    /// Shorthand for the two wild kinds, which only ever come in `Wild`.
    pub fn wild(kind: CardKind) -> Result<Self> {
        Self::new(Color::Wild, kind)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn rank(&self) -> u8 {
        self.kind.rank()
    }

    pub fn is_wild(&self) -> bool {
        self.kind.is_wild()
    }

    pub fn number(&self) -> Option<u8> {
        self.kind.number()
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
