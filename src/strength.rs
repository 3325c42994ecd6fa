//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-06
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password strength analysis

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::charset::CharacterClass;

const DIGIT_RUNS: [&str; 9] = ["012", "123", "234", "345", "456", "567", "678", "789", "890"];

const KEYBOARD_RUNS: [&str; 20] = [
    "qwe", "wer", "ert", "rty", "tyu", "yui", "uio", "iop", "asd", "sdf", "dfg", "fgh", "ghj",
    "hjk", "jkl", "zxc", "xcv", "cvb", "vbn", "bnm",
];

pub const COMMON_PASSWORDS: [&str; 6] = ["password", "123456", "qwerty", "admin", "login", "welcome"];

pub const FEEDBACK_TOO_SHORT: &str = "Too short";
pub const FEEDBACK_CHAR_TYPES: &str = "Use different character types";
pub const FEEDBACK_REPEATED: &str = "Too many repeated characters";
pub const FEEDBACK_SEQUENCES: &str = "Avoid simple sequences";
pub const FEEDBACK_COMMON: &str = "Avoid common passwords";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Strength {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
    Excellent,
}

impl Strength {
    pub fn from_score(score: u32) -> Self {
        match score {
            10.. => Strength::Excellent,
            8..=9 => Strength::VeryStrong,
            6..=7 => Strength::Strong,
            4..=5 => Strength::Medium,
            2..=3 => Strength::Weak,
            _ => Strength::VeryWeak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
            Strength::Excellent => "Excellent",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u32,
    pub strength: Strength,
    pub feedback: Vec<String>,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub unique_chars: usize,
}

impl StrengthReport {
    pub fn composition(&self) -> Vec<&'static str> {
        [
            (self.has_lowercase, "lowercase"),
            (self.has_uppercase, "uppercase"),
            (self.has_digits, "digits"),
            (self.has_special, "special"),
        ]
        .into_iter()
        .filter_map(|(present, name)| present.then_some(name))
        .collect()
    }
}

fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_alphabet_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        w.iter().all(|c| c.is_ascii_lowercase())
            && w[1] as u32 == w[0] as u32 + 1
            && w[2] as u32 == w[1] as u32 + 1
    })
}

/// Repeated characters, digit or alphabet runs, or keyboard rows.
/// `lowered` must already be lower-cased.
pub fn has_simple_sequence(lowered: &str) -> bool {
    let chars: Vec<char> = lowered.chars().collect();
    has_repeated_run(&chars)
        || DIGIT_RUNS.iter().any(|run| lowered.contains(run))
        || has_alphabet_run(&chars)
        || KEYBOARD_RUNS.iter().any(|run| lowered.contains(run))
}

pub fn contains_common_password(lowered: &str) -> bool {
    COMMON_PASSWORDS.iter().any(|common| lowered.contains(common))
}

/// 评估密码强度
pub fn analyze(password: &str) -> StrengthReport {
    let mut score: i32 = 0;
    let mut feedback = Vec::new();
    let length = password.chars().count();

    if length >= 16 {
        score += 3;
    } else if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push(FEEDBACK_TOO_SHORT.to_string());
    }

    let has_lowercase = password.chars().any(char::is_lowercase);
    let has_uppercase = password.chars().any(char::is_uppercase);
    let has_digits = password.chars().any(char::is_numeric);
    let has_special = password.chars().any(|c| CharacterClass::Special.contains(c));

    let char_types = [has_lowercase, has_uppercase, has_digits, has_special]
        .iter()
        .filter(|present| **present)
        .count() as i32;
    score += char_types;
    if char_types < 3 {
        feedback.push(FEEDBACK_CHAR_TYPES.to_string());
    }

    // 比例阈值 0.8 / 0.6 用整数比较
    let unique_chars = password.chars().collect::<HashSet<_>>().len();
    if unique_chars * 5 >= length * 4 {
        score += 2;
    } else if unique_chars * 5 >= length * 3 {
        score += 1;
    } else {
        feedback.push(FEEDBACK_REPEATED.to_string());
    }

    // 命中常见密码时不再叠加序列扣分
    let lowered = password.to_lowercase();
    let common = contains_common_password(&lowered);
    if !common && has_simple_sequence(&lowered) {
        score -= 2;
        feedback.push(FEEDBACK_SEQUENCES.to_string());
    }

    if common {
        score -= 3;
        feedback.push(FEEDBACK_COMMON.to_string());
    }

    let score = score.max(0) as u32;
    StrengthReport {
        score,
        strength: Strength::from_score(score),
        feedback,
        length,
        has_lowercase,
        has_uppercase,
        has_digits,
        has_special,
        unique_chars,
    }
}
