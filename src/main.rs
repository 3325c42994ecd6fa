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

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rpawogen::configtool;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A password generator and strength checker written in Rust", long_about = None)]
struct Cli {
    /// Word list file (one word per line) used for memorable passwords
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random passwords with per-class minimums
    Gen(GenArgs),

    /// Generate passwords from dictionary words
    Memorable(MemorableArgs),

    /// Generate word passwords with case changes, substitutions and symbols
    Complex(ComplexArgs),

    /// Generate passwords from a complexity level (1-10)
    Level(LevelArgs),

    /// Build passwords from a JSON recipe file
    Recipe(RecipeArgs),

    /// Test password strength and properties
    Testpass(TestpassArgs),

    /// Show or initialize the configuration file
    Config {
        /// Write the default configuration file
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Save the passwords to the configured output file
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Save the passwords to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    #[arg(long, default_value_t = 1)]
    pub min_uppercase: usize,

    #[arg(long, default_value_t = 1)]
    pub min_lowercase: usize,

    #[arg(long, default_value_t = 1)]
    pub min_numbers: usize,

    #[arg(long, default_value_t = 1)]
    pub min_special: usize,

    /// Avoid visually confusing characters (i, l, 1, L, o, 0, O)
    #[arg(short = 'c', long, default_value_t = false)]
    pub avoid_confusion: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct MemorableArgs {
    /// Number of words
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Separator placed between words
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Keep words in lowercase
    #[arg(long, default_value_t = false)]
    pub no_capitalize: bool,

    /// Do not append a three digit number
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    #[arg(long, default_value_t = 3)]
    pub min_word_length: usize,

    #[arg(long, default_value_t = 8)]
    pub max_word_length: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ComplexArgs {
    /// Number of words
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Only use plain separators and no symbol padding
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    /// Do not insert a two digit number
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Keep words as drawn (no case changes or substitutions)
    #[arg(long, default_value_t = false)]
    pub no_transform: bool,

    /// Minimum password length
    #[arg(short, long)]
    pub min_length: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct LevelArgs {
    /// Complexity level from 1 to 10
    pub level: Option<u32>,

    /// List all levels
    #[arg(long, default_value_t = false)]
    pub list: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RecipeArgs {
    /// Recipe file, or "-" to read from standard input
    pub file: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct TestpassArgs {
    /// Password to test, prompted for when omitted
    pub password: Option<String>,

    /// Report visually confusing characters
    #[arg(short = 'c', long, default_value_t = false)]
    pub check_confusion: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut config = configtool::load_config()?;
    if cli.dictionary.is_some() {
        config.dictionary = cli.dictionary;
    }

    match cli.command {
        Command::Gen(args) => commands::password_gen::generate_random(&config, args),
        Command::Memorable(args) => commands::password_gen::generate_memorable(&config, args),
        Command::Complex(args) => commands::password_gen::generate_complex(&config, args),
        Command::Level(args) => commands::level::generate_by_level(&config, args),
        Command::Recipe(args) => commands::recipe::build_from_recipe(&config, args),
        Command::Testpass(args) => commands::testpass::test_password(args),
        Command::Config { init } => commands::config::show_config(&config, init),
    }
}
