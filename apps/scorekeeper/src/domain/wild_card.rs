//! The wild-card rank: one rank is designated special per round.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum WildCard {
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
}

impl WildCard {
    /// The fixed per-game progression: one entry per round.
    pub const SEQUENCE: [WildCard; 11] = [
        WildCard::Three,
        WildCard::Four,
        WildCard::Five,
        WildCard::Six,
        WildCard::Seven,
        WildCard::Eight,
        WildCard::Nine,
        WildCard::Ten,
        WildCard::Jack,
        WildCard::Queen,
        WildCard::King,
    ];

    /// Display label as it appears on the physical card.
    pub fn label(self) -> &'static str {
        match self {
            WildCard::Three => "3",
            WildCard::Four => "4",
            WildCard::Five => "5",
            WildCard::Six => "6",
            WildCard::Seven => "7",
            WildCard::Eight => "8",
            WildCard::Nine => "9",
            WildCard::Ten => "10",
            WildCard::Jack => "J",
            WildCard::Queen => "Q",
            WildCard::King => "K",
        }
    }

    /// Kings are the last wild card; finishing their round ends the game.
    pub fn is_final(self) -> bool {
        self == WildCard::King
    }
}

impl fmt::Display for WildCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
