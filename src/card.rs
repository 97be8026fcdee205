//! Card types.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Threat category (the deck's suits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Spoofing.
    Spoofing,
    /// Tampering.
    Tampering,
    /// Repudiation.
    Repudiation,
    /// Information Disclosure.
    InformationDisclosure,
    /// Denial of Service.
    DenialOfService,
    /// Elevation of Privilege.
    ElevationOfPrivilege,
    /// Privacy.
    Privacy,
}

impl Category {
    /// All categories, in code order `S T R I D E P`.
    pub const ALL: [Self; 7] = [
        Self::Spoofing,
        Self::Tampering,
        Self::Repudiation,
        Self::InformationDisclosure,
        Self::DenialOfService,
        Self::ElevationOfPrivilege,
        Self::Privacy,
    ];

    /// Returns the one-letter category code used in card ids.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spoofing => 'S',
            Self::Tampering => 'T',
            Self::Repudiation => 'R',
            Self::InformationDisclosure => 'I',
            Self::DenialOfService => 'D',
            Self::ElevationOfPrivilege => 'E',
            Self::Privacy => 'P',
        }
    }

    /// Returns the display name, which is also the card image prefix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spoofing => "Spoofing",
            Self::Tampering => "Tampering",
            Self::Repudiation => "Repudiation",
            Self::InformationDisclosure => "Information Disclosure",
            Self::DenialOfService => "Denial of Service",
            Self::ElevationOfPrivilege => "Elevation of Privilege",
            Self::Privacy => "Privacy",
        }
    }

    /// Looks a category up by its code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

/// Card rank, ordered from `2` up to `A`.
///
/// Face ranks use the German symbols printed on the cards: `B` (Bube),
/// `D` (Dame), `K` (König) and `A` (Ass).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack (`B`).
    Jack,
    /// Queen (`D`).
    Queen,
    /// King (`K`).
    King,
    /// Ace (`A`).
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "B",
            Self::Queen => "D",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns the sort value (2 through 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Looks a rank up by its symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.symbol() == symbol)
    }
}

/// A playing card.
///
/// Two cards are equal exactly when their ids match, since the id is the
/// category code followed by the rank symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The category of the card.
    pub category: Category,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(category: Category, rank: Rank) -> Self {
        Self { category, rank }
    }

    /// Returns the compound id, e.g. `S10` or `EA`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}{}", self.category.code(), self.rank.symbol())
    }

    /// Returns the category code.
    #[must_use]
    pub const fn category_code(&self) -> char {
        self.category.code()
    }

    /// Returns the category display name.
    #[must_use]
    pub const fn category_name(&self) -> &'static str {
        self.category.name()
    }

    /// Returns the rank symbol.
    #[must_use]
    pub const fn rank_symbol(&self) -> &'static str {
        self.rank.symbol()
    }

    /// Returns the human readable name, e.g. `Spoofing 10`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.category.name(), self.rank.symbol())
    }

    /// Returns the image asset filename, e.g. `Spoofing_10.jpg`.
    #[must_use]
    pub fn filename(&self) -> String {
        format!("{}_{}.jpg", self.category.name(), self.rank.symbol())
    }
}
