use anyhow::Result;

use rpawogen::complexity::{self, MAX_LEVEL, MIN_LEVEL};
use rpawogen::configtool::ConfigFile;
use rpawogen::strength;

use crate::commands::generate_and_report;
use crate::LevelArgs;

pub fn generate_by_level(config: &ConfigFile, args: LevelArgs) -> Result<()> {
    if args.list {
        for level in MIN_LEVEL..=MAX_LEVEL {
            println!("{:2}. {}", level, complexity::describe(level)?);
        }
        return Ok(());
    }

    let level = args.level.unwrap_or(config.complexity);
    println!("Selected level: {}", complexity::describe(level)?);
    let passwords = generate_and_report(config, &args.output, || {
        Ok(complexity::generate_by_complexity(level)?)
    })?;

    for password in &passwords {
        let report = strength::analyze(password);
        println!("   {}: {}", password, report.composition().join(", "));
    }
    Ok(())
}
