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
// A password generator and strength checker written in Rust.

pub mod charset;
pub mod complexity;
pub mod configtool;
pub mod error;
pub mod memorable;
pub mod output;
pub mod passgen;
pub mod recipe;
pub mod strength;
pub mod wordsource;

pub use error::PassgenError;
