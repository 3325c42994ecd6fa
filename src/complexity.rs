//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// Complexity levels

use crate::error::{PassgenError, Result};
use crate::passgen::{self, GenerationConstraints};

pub const MIN_LEVEL: u32 = 1;
pub const MAX_LEVEL: u32 = 10;

// (length, special, exclude ambiguous, min upper, min lower, min digits, min special)
const PROFILES: [(usize, bool, bool, usize, usize, usize, usize); 10] = [
    (9, false, true, 0, 2, 0, 0),
    (10, false, true, 1, 2, 1, 0),
    (13, true, true, 1, 2, 1, 0),
    (14, true, false, 1, 2, 1, 1),
    (17, true, false, 2, 2, 2, 1),
    (18, true, false, 2, 2, 2, 1),
    (20, true, false, 2, 3, 2, 2),
    (22, true, false, 2, 3, 2, 2),
    (24, true, false, 3, 4, 3, 3),
    (28, true, false, 3, 4, 3, 3),
];

const NAMES: [&str; 10] = [
    "Very Simple - lowercase only",
    "Simple - letters and digits",
    "Basic - all types, no ambiguous",
    "Medium - all character types",
    "Good - all character types",
    "Strong - all types, more requirements",
    "Very Strong - increased length",
    "Excellent - high requirements",
    "Maximum - very long and complex",
    "Extreme - maximum protection",
];

fn check_level(level: u32) -> Result<usize> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(PassgenError::InvalidLevel(level));
    }
    Ok((level - 1) as usize)
}

/// Constraints for complexity `level` (1-10).
///
/// Level 1 is lowercase only; uppercase and digits join at level 2.
pub fn resolve(level: u32) -> Result<GenerationConstraints> {
    let index = check_level(level)?;
    let (length, special, exclude_ambiguous, min_upper, min_lower, min_digits, min_special) =
        PROFILES[index];
    let letters_and_digits = level >= 2;

    Ok(GenerationConstraints {
        length,
        include_lowercase: true,
        include_uppercase: letters_and_digits,
        include_numbers: letters_and_digits,
        include_special: special,
        min_lowercase: min_lower,
        min_uppercase: min_upper,
        min_numbers: min_digits,
        min_special,
        exclude_ambiguous,
    })
}

pub fn generate_by_complexity(level: u32) -> Result<String> {
    passgen::generate_password(&resolve(level)?)
}

pub fn describe(level: u32) -> Result<String> {
    let index = check_level(level)?;
    Ok(format!("{} ({} chars)", NAMES[index], PROFILES[index].0))
}
