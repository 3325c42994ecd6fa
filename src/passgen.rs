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
// Constrained password generator

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::charset::{self, CharacterClass};
use crate::error::{PassgenError, Result};

pub const MIN_PASSWORD_LENGTH: usize = 4;

/// 随机密码生成约束
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConstraints {
    pub length: usize,
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_special: bool,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_numbers: usize,
    pub min_special: usize,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConstraints {
    fn default() -> Self {
        Self {
            length: 12,
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_special: true,
            min_lowercase: 1,
            min_uppercase: 1,
            min_numbers: 1,
            min_special: 1,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationConstraints {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Digit => self.include_numbers,
            CharacterClass::Special => self.include_special,
        }
    }

    /// Configured minimum; zero for a disabled class.
    pub fn minimum(&self, class: CharacterClass) -> usize {
        if !self.is_enabled(class) {
            return 0;
        }
        match class {
            CharacterClass::Lowercase => self.min_lowercase,
            CharacterClass::Uppercase => self.min_uppercase,
            CharacterClass::Digit => self.min_numbers,
            CharacterClass::Special => self.min_special,
        }
    }

    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    pub fn required_count(&self) -> usize {
        CharacterClass::ALL.iter().map(|class| self.minimum(*class)).sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_PASSWORD_LENGTH {
            return Err(PassgenError::InvalidConstraints(format!(
                "Password length must be at least {}, got {}",
                MIN_PASSWORD_LENGTH, self.length
            )));
        }
        if self.enabled_classes().is_empty() {
            return Err(PassgenError::InvalidConstraints(
                "At least one character set must be included".to_string(),
            ));
        }
        let required = self.required_count();
        if required > self.length {
            return Err(PassgenError::InvalidConstraints(format!(
                "Minimum character counts ({}) exceed password length ({})",
                required, self.length
            )));
        }
        Ok(())
    }
}

/// 生成满足各类字符最小数量要求的随机密码
pub fn generate_password(constraints: &GenerationConstraints) -> Result<String> {
    constraints.validate()?;

    let mut rng = OsRng;
    let mut password_chars = Vec::with_capacity(constraints.length);
    let mut all_chars = Vec::new();

    for class in constraints.enabled_classes() {
        let pool = class.pool(constraints.exclude_ambiguous);
        if pool.is_empty() {
            return Err(PassgenError::InvalidConstraints(format!(
                "{} character set is empty after removing ambiguous characters",
                class
            )));
        }
        for _ in 0..constraints.minimum(class) {
            if let Some(c) = pool.choose(&mut rng) {
                password_chars.push(*c);
            }
        }
        all_chars.extend(pool);
    }

    debug!(
        "Generating {} chars: {} required, pool of {}",
        constraints.length,
        password_chars.len(),
        all_chars.len()
    );

    // 剩余位置从合并字符池中抽取
    for _ in password_chars.len()..constraints.length {
        if let Some(c) = all_chars.choose(&mut rng) {
            password_chars.push(*c);
        }
    }

    // 打乱顺序，避免必选字符位置可预测
    password_chars.shuffle(&mut rng);

    Ok(password_chars.into_iter().collect())
}

/// Ambiguous characters present in `password`, in order of appearance.
pub fn check_confusing_chars(password: &str) -> Vec<char> {
    password.chars().filter(|c| charset::is_ambiguous(*c)).collect()
}
