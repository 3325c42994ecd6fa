use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

use rpawogen::configtool::ConfigFile;
use rpawogen::recipe;
use rpawogen::wordsource::WordSource;

use crate::commands::generate_and_report;
use crate::RecipeArgs;

pub fn build_from_recipe(config: &ConfigFile, args: RecipeArgs) -> Result<()> {
    let json = if args.file == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read recipe from stdin")?;
        input
    } else {
        fs::read_to_string(&args.file).with_context(|| format!("Failed to read recipe {}", args.file))?
    };

    let components = recipe::parse_recipe(&json)?;
    println!("Creating password from {} components...", components.len());

    let words = WordSource::from_dictionary_option(config.dictionary.clone());
    generate_and_report(config, &args.output, || {
        Ok(recipe::build_password(&words, &components)?)
    })?;
    Ok(())
}
