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
// Memorable password generators

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::wordsource::WordSource;

/// Letter to digit substitutions, tried in this order.
pub const LEET_SUBSTITUTIONS: [(char, &str); 6] = [
    ('a', "4"),
    ('e', "3"),
    ('i', "1"),
    ('o', "0"),
    ('s', "5"),
    ('t', "7"),
];

pub const PLAIN_SEPARATORS: [&str; 3] = ["", "-", "_"];
pub const DECORATED_SEPARATORS: [&str; 4] = [".", "!", "@", "#"];

/// Characters used to pad complex passwords up to their minimum length.
pub const PADDING_CHARS: [char; 8] = ['!', '@', '#', '$', '%', '^', '&', '*'];

// 单词大小写方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordCase {
    #[default]
    Keep,
    Capitalize,
    Uppercase,
    Lowercase,
    RandomCase,
}

impl WordCase {
    pub fn apply<R: Rng>(&self, word: &str, rng: &mut R) -> String {
        match self {
            WordCase::Keep => word.to_string(),
            WordCase::Capitalize => capitalize(word),
            WordCase::Uppercase => word.to_uppercase(),
            WordCase::Lowercase => word.to_lowercase(),
            WordCase::RandomCase => word
                .chars()
                .map(|c| {
                    if rng.gen_bool(0.5) {
                        c.to_uppercase().collect::<String>()
                    } else {
                        c.to_lowercase().collect::<String>()
                    }
                })
                .collect(),
        }
    }
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Replaces every occurrence (either case) of the first substitutable
/// letter found in `word`. At most one letter is substituted.
pub fn apply_leet(word: &str) -> String {
    let lower = word.to_lowercase();
    for (letter, digit) in LEET_SUBSTITUTIONS {
        if lower.contains(letter) {
            return word
                .replace(letter, digit)
                .replace(letter.to_ascii_uppercase(), digit);
        }
    }
    word.to_string()
}

// 记忆密码生成选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorablePasswordOptions {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
    pub include_numbers: bool,
    pub word_min_length: usize,
    pub word_max_length: usize,
}

impl Default for MemorablePasswordOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            capitalize: true,
            include_numbers: true,
            word_min_length: 3,
            word_max_length: 8,
        }
    }
}

/// 生成记忆密码（基于单词列表）
pub fn generate_memorable_password(words: &WordSource, options: &MemorablePasswordOptions) -> String {
    let mut rng = OsRng;
    let selected: Vec<String> = (0..options.word_count)
        .map(|_| words.next_word(options.word_min_length, options.word_max_length))
        .map(|word| if options.capitalize { capitalize(&word) } else { word })
        .collect();

    let mut password = selected.join(&options.separator);
    if options.include_numbers {
        password.push_str(&format!("{:03}", rng.gen_range(0..1000)));
    }
    password
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexPasswordOptions {
    pub word_count: usize,
    pub include_special: bool,
    pub include_numbers: bool,
    pub transform_words: bool,
    pub min_length: usize,
}

impl Default for ComplexPasswordOptions {
    fn default() -> Self {
        Self {
            word_count: 3,
            include_special: true,
            include_numbers: true,
            transform_words: true,
            min_length: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberPosition {
    Start,
    Middle,
    End,
}

fn transform_word<R: Rng>(word: &str, rng: &mut R) -> String {
    let word = match rng.gen_range(0..4) {
        0 => capitalize(word),
        1 => word.to_uppercase(),
        2 => word.to_lowercase(),
        _ => {
            if word.chars().count() > 4 {
                capitalize(word)
            } else {
                word.to_uppercase()
            }
        }
    };
    if rng.gen_range(0..3) == 0 {
        apply_leet(&word)
    } else {
        word
    }
}

/// Byte offset of the `index`-th character, or the end of `s`.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(i, _)| i)
}

/// 生成复杂记忆密码：大小写变换、字母替换、随机分隔符与数字
pub fn generate_complex_memorable_password(words: &WordSource, options: &ComplexPasswordOptions) -> String {
    let mut rng = OsRng;
    let parts: Vec<String> = (0..options.word_count)
        .map(|_| {
            let word = words.next_word(4, 8);
            if options.transform_words {
                transform_word(&word, &mut rng)
            } else {
                word
            }
        })
        .collect();

    let mut password = String::new();
    for (i, word) in parts.iter().enumerate() {
        password.push_str(word);
        if i + 1 < parts.len() {
            let pool: &[&str] = if options.include_special && rng.gen_bool(0.5) {
                &DECORATED_SEPARATORS
            } else {
                &PLAIN_SEPARATORS
            };
            password.push_str(pool.choose(&mut rng).copied().unwrap_or_default());
        }
    }

    if options.include_numbers {
        let number = format!("{:02}", rng.gen_range(0..=99));
        let position = [NumberPosition::Start, NumberPosition::Middle, NumberPosition::End]
            .choose(&mut rng)
            .copied()
            .unwrap_or(NumberPosition::End);
        match position {
            NumberPosition::Start => password.insert_str(0, &number),
            NumberPosition::End => password.push_str(&number),
            NumberPosition::Middle => {
                let mid = byte_offset(&password, password.chars().count() / 2);
                password.insert_str(mid, &number);
            }
        }
    }

    // 长度不足时插入特殊字符，每次加一位
    if options.include_special {
        let mut length = password.chars().count();
        while length < options.min_length {
            let c = PADDING_CHARS.choose(&mut rng).copied().unwrap_or('!');
            let at = byte_offset(&password, rng.gen_range(0..=length));
            password.insert(at, c);
            length += 1;
        }
    }

    debug!("Complex memorable password from {} words", parts.len());
    password
}
