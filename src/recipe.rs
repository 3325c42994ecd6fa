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
// Password recipes

use log::debug;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use crate::charset::{self, CharacterClass};
use crate::error::{PassgenError, Result};
use crate::memorable::WordCase;
use crate::wordsource::WordSource;

pub const DEFAULT_SEPARATORS: [&str; 6] = ["-", "_", ".", "!", "@", "#"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordComponent {
    pub min_length: usize,
    pub max_length: usize,
    pub case: WordCase,
    /// Applied in order, each over the whole word.
    pub replacements: Vec<(String, String)>,
}

impl Default for WordComponent {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 10,
            case: WordCase::Keep,
            replacements: Vec::new(),
        }
    }
}

/// One step of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeComponent {
    Literal(String),
    Word(WordComponent),
    RandomChars {
        length: usize,
        classes: Vec<CharacterClass>,
    },
    Number {
        min: u64,
        max: u64,
        padding: usize,
    },
    Separator(Vec<String>),
}

impl RecipeComponent {
    fn validate(&self) -> Result<()> {
        match self {
            RecipeComponent::Number { min, max, .. } if min > max => {
                Err(PassgenError::InvalidConstraints(format!(
                    "Number component minimum {} is greater than maximum {}",
                    min, max
                )))
            }
            RecipeComponent::Separator(options) if options.is_empty() => Err(
                PassgenError::InvalidConstraints("Separator component has no options".to_string()),
            ),
            _ => Ok(()),
        }
    }

    fn render<R: Rng>(&self, words: &WordSource, rng: &mut R) -> String {
        match self {
            RecipeComponent::Literal(text) => text.clone(),
            RecipeComponent::Word(config) => {
                let word = words.next_word(config.min_length, config.max_length);
                let mut word = config.case.apply(&word, rng);
                for (old, new) in &config.replacements {
                    word = word.replace(old.as_str(), new);
                }
                word
            }
            RecipeComponent::RandomChars { length, classes } => {
                let pool = charset::combined_pool(classes, false);
                if pool.is_empty() {
                    return String::new();
                }
                (0..*length)
                    .filter_map(|_| pool.choose(&mut *rng).copied())
                    .collect()
            }
            RecipeComponent::Number { min, max, padding } => {
                let number = rng.gen_range(*min..=*max);
                if *padding > 0 {
                    format!("{:0width$}", number, width = *padding)
                } else {
                    number.to_string()
                }
            }
            RecipeComponent::Separator(options) => {
                options.choose(rng).cloned().unwrap_or_default()
            }
        }
    }
}

/// 按顺序拼接各组件生成的片段
pub fn build_password(words: &WordSource, recipe: &[RecipeComponent]) -> Result<String> {
    for component in recipe {
        component.validate()?;
    }

    let mut rng = OsRng;
    let password: String = recipe
        .iter()
        .map(|component| component.render(words, &mut rng))
        .collect();
    debug!("Built password from {} components", recipe.len());
    Ok(password)
}

#[derive(Debug, Deserialize)]
struct RawText {
    #[serde(default)]
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct WordConfig {
    min_length: usize,
    max_length: usize,
    capitalize: bool,
    uppercase: bool,
    lowercase: bool,
    random_case: bool,
    replacements: Vec<(String, String)>,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 10,
            capitalize: false,
            uppercase: false,
            lowercase: false,
            random_case: false,
            replacements: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RandomCharsConfig {
    length: usize,
    types: Vec<CharacterClass>,
}

impl Default for RandomCharsConfig {
    fn default() -> Self {
        Self {
            length: 4,
            types: vec![
                CharacterClass::Lowercase,
                CharacterClass::Uppercase,
                CharacterClass::Digit,
            ],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct NumberConfig {
    min: u64,
    max: u64,
    padding: usize,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self { min: 0, max: 9999, padding: 0 }
    }
}

#[derive(Debug, Deserialize)]
struct Configured<T: Default> {
    #[serde(default)]
    config: T,
}

#[derive(Debug, Deserialize)]
struct RawSeparator {
    #[serde(default = "default_separators")]
    options: Vec<String>,
}

fn default_separators() -> Vec<String> {
    DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect()
}

impl From<WordConfig> for WordComponent {
    fn from(config: WordConfig) -> Self {
        // 多个标志同时设置时按此顺序取第一个
        let case = if config.capitalize {
            WordCase::Capitalize
        } else if config.uppercase {
            WordCase::Uppercase
        } else if config.lowercase {
            WordCase::Lowercase
        } else if config.random_case {
            WordCase::RandomCase
        } else {
            WordCase::Keep
        };
        Self {
            min_length: config.min_length,
            max_length: config.max_length,
            case,
            replacements: config.replacements,
        }
    }
}

fn parse_component(index: usize, item: Value) -> Result<RecipeComponent> {
    let tag = match item.get("type") {
        None => "text".to_string(),
        Some(Value::String(tag)) => tag.clone(),
        Some(other) => {
            return Err(PassgenError::InvalidRecipe(format!(
                "component {}: type must be a string, got {}",
                index, other
            )));
        }
    };
    let invalid =
        |e: serde_json::Error| PassgenError::InvalidRecipe(format!("component {} ({}): {}", index, tag, e));

    match tag.as_str() {
        "text" => {
            let raw: RawText = serde_json::from_value(item).map_err(invalid)?;
            Ok(RecipeComponent::Literal(raw.value))
        }
        "word" => {
            let raw: Configured<WordConfig> = serde_json::from_value(item).map_err(invalid)?;
            Ok(RecipeComponent::Word(raw.config.into()))
        }
        "random_chars" => {
            let raw: Configured<RandomCharsConfig> = serde_json::from_value(item).map_err(invalid)?;
            Ok(RecipeComponent::RandomChars {
                length: raw.config.length,
                classes: raw.config.types,
            })
        }
        "number" => {
            let raw: Configured<NumberConfig> = serde_json::from_value(item).map_err(invalid)?;
            Ok(RecipeComponent::Number {
                min: raw.config.min,
                max: raw.config.max,
                padding: raw.config.padding,
            })
        }
        "separator" => {
            let raw: RawSeparator = serde_json::from_value(item).map_err(invalid)?;
            Ok(RecipeComponent::Separator(raw.options))
        }
        other => Err(PassgenError::UnknownComponentType(other.to_string())),
    }
}

/// Parses a JSON array of components such as
/// `[{"type": "word", "config": {"capitalize": true}}, {"type": "number"}]`.
pub fn parse_recipe(json: &str) -> Result<Vec<RecipeComponent>> {
    let items: Vec<Value> =
        serde_json::from_str(json).map_err(|e| PassgenError::InvalidRecipe(e.to_string()))?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_component(index, item))
        .collect()
}
