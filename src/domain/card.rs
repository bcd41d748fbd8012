use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::RandomSource;

/// Ранг карты. Масти в игре нет, сравнивается только ранг.
///
/// Дискриминант совпадает с игровой стоимостью карты: `Two = 2` … `Ten = 10`,
/// туз является старшей картой со стоимостью 11.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Ace,
}

impl Rank {
    /// Полный набор рангов в порядке возрастания стоимости.
    pub const ALL: [Rank; 10] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Ace,
    ];

    /// Игровая стоимость карты (2..=11).
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Позиция ранга в `Rank::ALL`.
    pub const fn index(self) -> usize {
        (self as usize) - 2
    }

    /// Равновероятно вытянуть ранг (с возвращением).
    pub fn draw<R: RandomSource>(rng: &mut R) -> Rank {
        let idx = rng.index_below(Rank::ALL.len());
        Rank::ALL[idx % Rank::ALL.len()]
    }
}

/// Карта, которую получает сторона в раунде.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank) -> Self {
        Self { rank }
    }

    pub const fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl From<Rank> for Card {
    fn from(rank: Rank) -> Self {
        Card::new(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ace => write!(f, "A"),
            r => write!(f, "{}", r.value()),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// Парсинг строки вида "A", "10", "7" (а также "T" для десятки).
impl FromStr for Rank {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.trim() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" | "t" => Rank::Ten,
            "A" | "a" => Rank::Ace,
            other => return Err(format!("Invalid rank: {other}")),
        };
        Ok(rank)
    }
}

impl FromStr for Card {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rank>().map(Card::new)
    }
}
