use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a matching localization row becomes an output value
pub enum Projection {
    /// The `name` cell, written as a JSON string
    Name,
    /// The `name` and `description` cells, written as a JSON object
    Prose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// An entity category with its own origin and localization table pair.
pub struct Namespace {
    /// Origin table name, also used as the output file stem.
    pub origin: &'static str,
    /// Localization table name.
    pub local: &'static str,
    /// Column of the localization table that refers to the origin `id`.
    pub fk: &'static str,
    pub projection: Projection,
}

impl Namespace {
    pub const fn new(origin: &'static str, local: &'static str, fk: &'static str) -> Self {
        Self {
            origin,
            local,
            fk,
            projection: Projection::Name,
        }
    }

    pub const fn prose(origin: &'static str, local: &'static str, fk: &'static str) -> Self {
        Self {
            origin,
            local,
            fk,
            projection: Projection::Prose,
        }
    }
}

/// Namespaces generated on every run, in output order.
pub const NAMESPACES: &[Namespace] = &[
    Namespace::new("abilities", "ability_names", "ability_id"),
    Namespace::new("generations", "generation_names", "generation_id"),
    Namespace::new("items", "item_names", "item_id"),
    Namespace::new("item_pockets", "item_pocket_names", "item_pocket_id"),
    Namespace::new("languages", "language_names", "language_id"),
    Namespace::new("locations", "location_names", "location_id"),
    Namespace::new(
        "pokemon_species",
        "pokemon_species_names",
        "pokemon_species_id",
    ),
    Namespace::new("regions", "region_names", "region_id"),
    Namespace::new("stats", "stat_names", "stat_id"),
    Namespace::new("types", "type_names", "type_id"),
    Namespace::new("versions", "version_names", "version_id"),
];

/// Namespaces appended to [NAMESPACES] when `--extended` is given.
pub const EXTENDED_NAMESPACES: &[Namespace] = &[
    Namespace::new("berry_firmnesses", "berry_firmness_names", "firmness_id"),
    Namespace::new("pokemon_colors", "pokemon_color_names", "pokemon_color_id"),
    Namespace::new("egg_groups", "egg_group_prose", "egg_group_id"),
    Namespace::new(
        "evolution_triggers",
        "evolution_trigger_prose",
        "evolution_trigger_id",
    ),
    Namespace::prose("pokedexes", "pokedex_prose", "pokedex_id"),
];

/// Returns the namespaces of a run in output order.
pub fn namespaces(extended: bool) -> impl Iterator<Item = &'static Namespace> {
    let extra: &'static [Namespace] = if extended { EXTENDED_NAMESPACES } else { &[] };
    NAMESPACES.iter().chain(extra.iter())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A supported output language
pub struct Language {
    /// Code used in output paths, e.g. `zh-Hant`.
    pub code: &'static str,
    /// Value of `local_language_id` in the localization tables.
    pub id: u32,
}

impl Language {
    pub const fn new(code: &'static str, id: u32) -> Self {
        Self { code, id }
    }
}

pub const LANGUAGES: &[Language] = &[
    Language::new("ja", 1),
    Language::new("kr", 3),
    Language::new("zh-Hant", 4),
    Language::new("fr", 5),
    Language::new("de", 6),
    Language::new("es", 7),
    Language::new("it", 8),
    Language::new("en", 9),
    Language::new("cs", 10),
    Language::new("zh-Hans", 12),
];

lazy_static::lazy_static! {
    /// Language descriptors keyed by their code.
    pub static ref LANGUAGE_BY_CODE: HashMap<&'static str, &'static Language> =
        LANGUAGES.iter().map(|lang| (lang.code, lang)).collect();
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
/// A localized value in an output dictionary
pub enum LocalizedValue {
    Name(String),
    Prose { name: String, description: String },
}

impl LocalizedValue {
    /// Returns the display name regardless of projection.
    pub fn name(&self) -> &str {
        match self {
            LocalizedValue::Name(name) => name,
            LocalizedValue::Prose { name, .. } => name,
        }
    }
}

/// Identifier to localized value, in origin table order.
pub type Mapping = IndexMap<String, LocalizedValue>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// One origin record joined with its localization for a single language.
pub struct JoinedRow {
    pub id: String,
    pub identifier: String,
    /// `None` when no localization row matched.
    pub name: Option<LocalizedValue>,
}

#[derive(Clone, Debug)]
/// Settings of a generation run
pub struct Config {
    /// Directory holding `<table>.csv` files.
    pub data_dir: PathBuf,
    /// Directory holding one sub directory per language code.
    pub locales_dir: PathBuf,
    pub languages: Vec<&'static Language>,
    /// Also generate [EXTENDED_NAMESPACES].
    pub extended: bool,
    /// Create missing `locales/<code>` directories before writing.
    pub create_dirs: bool,
    /// Log a failed unit and continue instead of aborting.
    pub keep_going: bool,
}

impl Config {
    /// Default settings for a project root: `data/` in, `locales/` out,
    /// all languages, default namespaces, abort on first error.
    pub fn new<P: AsRef<Path> + ?Sized>(root: &P) -> Self {
        let root = root.as_ref();
        Self {
            data_dir: root.join("data"),
            locales_dir: root.join("locales"),
            languages: LANGUAGES.iter().collect(),
            extended: false,
            create_dirs: false,
            keep_going: false,
        }
    }
}
