use anyhow::{Context, Result};
use std::path::PathBuf;

use rpawogen::configtool::ConfigFile;
use rpawogen::output::save_passwords;
use rpawogen::strength;

use crate::OutputArgs;

pub mod config;
pub mod level;
pub mod password_gen;
pub mod recipe;
pub mod testpass;

/// Runs `generate` `count` times and prints each result with its strength.
pub fn generate_and_report<F>(config: &ConfigFile, output: &OutputArgs, mut generate: F) -> Result<Vec<String>>
where
    F: FnMut() -> Result<String>,
{
    let count = output.count.max(1);
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate()?);
    }

    if let [password] = passwords.as_slice() {
        let report = strength::analyze(password);
        println!("Generated password: {}", password);
        println!("Password strength: {} (score: {})", report.strength, report.score);
    } else {
        println!("Generated passwords:");
        for (i, password) in passwords.iter().enumerate() {
            let report = strength::analyze(password);
            println!("{:2}. {} | {} ({} points)", i + 1, password, report.strength, report.score);
        }
    }

    if let Some(path) = save_target(config, output) {
        save_passwords(&path, &passwords)
            .with_context(|| format!("Failed to save passwords to {}", path.display()))?;
        println!("{} password(s) saved to '{}'", passwords.len(), path.display());
    }
    Ok(passwords)
}

fn save_target(config: &ConfigFile, output: &OutputArgs) -> Option<PathBuf> {
    match &output.output {
        Some(path) => Some(path.clone()),
        None if output.save => Some(config.output_file.clone()),
        None => None,
    }
}
