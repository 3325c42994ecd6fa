//  ____  ____     __        __      ____
// |  _ \|  _ \ __ \ \      / /__   / ___| ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \  | |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_)  | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/  \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-07
// Version : 0.1.0
// License : Mulan PSL v2
//
// Saving generated passwords

use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Writes `passwords` to `path` under a timestamped header, replacing any
/// previous content. A single password is written bare, several as a
/// numbered list.
pub fn save_passwords(path: &Path, passwords: &[String]) -> io::Result<()> {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    let mut file = fs::File::create(path)?;
    match passwords {
        [password] => {
            writeln!(file, "Generated password ({}):", timestamp)?;
            writeln!(file, "{}", password)?;
        }
        _ => {
            writeln!(file, "Generated passwords ({}):", timestamp)?;
            writeln!(file, "{}", "=".repeat(40))?;
            for (i, password) in passwords.iter().enumerate() {
                writeln!(file, "{}. {}", i + 1, password)?;
            }
        }
    }
    file.flush()
}
