use clap::{ArgAction, Parser};
use locale_gen::types::*;
use std::path::PathBuf;

/// Generate per-language JSON dictionaries from CSV name tables
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arg {
    #[arg(long, default_value = env!("CARGO_MANIFEST_DIR"))]
    /// Project root holding `data` and `locales`
    pub root: PathBuf,
    #[arg(long)]
    /// Directory of the CSV tables [default: <ROOT>/data]
    pub data_dir: Option<PathBuf>,
    #[arg(long)]
    /// Directory of the generated dictionaries [default: <ROOT>/locales]
    pub locales_dir: Option<PathBuf>,
    #[arg(short, long = "lang", value_parser = parse_language)]
    /// Only generate the given language code (can be repeated)
    pub languages: Vec<&'static Language>,
    #[arg(long, action = ArgAction::SetTrue)]
    /// Also generate berry firmnesses, colors, egg groups, evolution triggers and pokedexes
    pub extended: bool,
    #[arg(long, action = ArgAction::SetTrue)]
    /// Create missing language directories before writing
    pub create_dirs: bool,
    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Log failed files and continue with the next one
    pub keep_going: bool,
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "quiet")]
    /// Print every generated file
    pub verbose: bool,
    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Only print warnings and errors
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Print backtrace on error
    pub backtrace: bool,
}

fn parse_language(code: &str) -> Result<&'static Language, String> {
    LANGUAGE_BY_CODE.get(code).copied().ok_or_else(|| {
        let mut codes: Vec<_> = LANGUAGES.iter().map(|l| l.code).collect();
        codes.sort();
        format!("unknown language code, expected one of: {}", codes.join(", "))
    })
}

impl Arg {
    pub fn to_config(&self) -> Config {
        let mut config = Config::new(&self.root);
        if let Some(data_dir) = &self.data_dir {
            config.data_dir = data_dir.clone();
        }
        if let Some(locales_dir) = &self.locales_dir {
            config.locales_dir = locales_dir.clone();
        }
        if !self.languages.is_empty() {
            config.languages = self.languages.clone();
        }
        config.extended = self.extended;
        config.create_dirs = self.create_dirs;
        config.keep_going = self.keep_going;
        config
    }
}

pub fn parse_args() -> Arg {
    Arg::parse()
}
