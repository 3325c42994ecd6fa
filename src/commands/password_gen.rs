use anyhow::Result;

use rpawogen::configtool::ConfigFile;
use rpawogen::memorable::{self, ComplexPasswordOptions, MemorablePasswordOptions};
use rpawogen::passgen::{self, GenerationConstraints};
use rpawogen::wordsource::WordSource;

use crate::commands::generate_and_report;
use crate::{ComplexArgs, GenArgs, MemorableArgs};

pub fn generate_random(config: &ConfigFile, args: GenArgs) -> Result<()> {
    let constraints = GenerationConstraints {
        length: args.length.unwrap_or(config.length),
        include_uppercase: !args.no_uppercase,
        include_lowercase: !args.no_lowercase,
        include_numbers: !args.no_numbers,
        include_special: !args.no_special,
        min_uppercase: args.min_uppercase,
        min_lowercase: args.min_lowercase,
        min_numbers: args.min_numbers,
        min_special: args.min_special,
        exclude_ambiguous: args.avoid_confusion || config.exclude_ambiguous,
    };
    generate_and_report(config, &args.output, || {
        Ok(passgen::generate_password(&constraints)?)
    })?;
    Ok(())
}

pub fn generate_memorable(config: &ConfigFile, args: MemorableArgs) -> Result<()> {
    let words = WordSource::from_dictionary_option(config.dictionary.clone());
    let options = MemorablePasswordOptions {
        word_count: args.words.unwrap_or(config.word_count),
        separator: args.separator.unwrap_or_else(|| config.separator.clone()),
        capitalize: !args.no_capitalize,
        include_numbers: !args.no_numbers,
        word_min_length: args.min_word_length,
        word_max_length: args.max_word_length,
    };
    generate_and_report(config, &args.output, || {
        Ok(memorable::generate_memorable_password(&words, &options))
    })?;
    Ok(())
}

pub fn generate_complex(config: &ConfigFile, args: ComplexArgs) -> Result<()> {
    let words = WordSource::from_dictionary_option(config.dictionary.clone());
    let options = ComplexPasswordOptions {
        word_count: args.words.unwrap_or(config.complex_word_count),
        include_special: !args.no_special,
        include_numbers: !args.no_numbers,
        transform_words: !args.no_transform,
        min_length: args.min_length.unwrap_or(config.complex_min_length),
    };
    generate_and_report(config, &args.output, || {
        Ok(memorable::generate_complex_memorable_password(&words, &options))
    })?;
    Ok(())
}
