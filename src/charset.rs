//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character classes

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// 视觉上容易混淆的字符
pub const AMBIGUOUS: &str = "il1Lo0O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    #[serde(rename = "digits")]
    Digit,
    Special,
}

impl CharacterClass {
    /// Fixed order in which classes contribute required characters.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn chars(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Pool for this class. The special pool is never filtered.
    pub fn pool(&self, exclude_ambiguous: bool) -> Vec<char> {
        let chars = self.chars().chars();
        if exclude_ambiguous && *self != CharacterClass::Special {
            chars.filter(|c| !is_ambiguous(*c)).collect()
        } else {
            chars.collect()
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Class of `c`, if it belongs to one of the four pools.
    pub fn classify(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special",
        };
        write!(f, "{}", name)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// Concatenation of the pools of `classes`, duplicates kept.
pub fn combined_pool(classes: &[CharacterClass], exclude_ambiguous: bool) -> Vec<char> {
    classes
        .iter()
        .flat_map(|class| class.pool(exclude_ambiguous))
        .collect()
}
