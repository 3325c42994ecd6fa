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
// Error types

use thiserror::Error;

/// Failures reported by the password builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassgenError {
    /// Length, class selection or minimum counts cannot be satisfied.
    #[error("Invalid constraints: {0}")]
    InvalidConstraints(String),

    #[error("Complexity must be 1-10, got {0}")]
    InvalidLevel(u32),

    /// A recipe component carried a `type` tag we do not know.
    #[error("Unknown component type: '{0}'")]
    UnknownComponentType(String),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

pub type Result<T> = std::result::Result<T, PassgenError>;
