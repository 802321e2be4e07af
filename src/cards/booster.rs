use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::card::Card;
use crate::utilities::string_manipulators::replace_special_characters;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoosterName {
    pub raw: String,
    pub cleaned: String,
}

impl BoosterName {
    pub fn new(raw: String) -> Result<Self, String> {
        let raw = raw.trim().to_string();
        if raw.is_empty() {
            return Err("Booster name cannot be empty".to_string());
        }
        let cleaned = replace_special_characters(&raw);
        Ok(BoosterName { raw, cleaned })
    }
}

// Excel compares sheet names without regard to case.
impl PartialEq for BoosterName {
    fn eq(&self, other: &Self) -> bool {
        self.cleaned.eq_ignore_ascii_case(&other.cleaned)
    }
}

impl Eq for BoosterName {}

impl fmt::Display for BoosterName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cleaned)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booster {
    pub name: BoosterName,
    pub cards: Vec<Card>,
}

/// Cards grouped by booster, boosters kept in the order they were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoosterCollection {
    boosters: Vec<Booster>,
}

impl BoosterCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, booster_name: &BoosterName, card: Card) {
        match self.boosters.iter_mut().find(|b| &b.name == booster_name) {
            Some(booster) => booster.cards.push(card),
            None => self.boosters.push(Booster {
                name: booster_name.clone(),
                cards: vec![card],
            }),
        }
    }

    pub fn get(&self, booster_name: &str) -> Option<&Booster> {
        self.boosters
            .iter()
            .find(|b| b.name.cleaned.eq_ignore_ascii_case(booster_name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booster> {
        self.boosters.iter()
    }

    pub fn len(&self) -> usize {
        self.boosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boosters.is_empty()
    }

    pub fn card_count(&self) -> usize {
        self.boosters.iter().map(|b| b.cards.len()).sum()
    }
}
