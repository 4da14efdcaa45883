use core::fmt;

/// Enum for the four suits of a standard deck.
///
/// The declaration order is the canonical deck order used by
/// [`Deck::reset`](crate::core::Deck::reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds
    Diamonds,
    /// Clubs
    Clubs,
    /// Hearts
    Hearts,
    /// Spades
    Spades,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{c}")
    }
}

/// The lowest card rank, the Ace.
pub const ACE_RANK: u8 = 1;
/// The highest card rank, the King.
pub const KING_RANK: u8 = 13;

/// One playing card.
///
/// Ranks run 1 (Ace) through 13 (King). Gameplay compares cards by rank
/// alone; the suit only matters for uniqueness within a deck, which is why
/// equality covers both fields while the guessing rules read `rank`
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// Rank of the card, 1..=13 with 1 the Ace
    pub rank: u8,
    /// Suit of the card
    pub suit: Suit,
}

impl Card {
    /// Create a new card. Ranks outside 1..=13 are never produced by the
    /// deck; constructing one by hand is a caller bug.
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Aces are rank 1 and get special treatment from the ace rule.
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE_RANK
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            r => write!(f, "{}{}", r, self.suit),
        }
    }
}
