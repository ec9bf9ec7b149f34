//! Runs the generation batch: every language, then every namespace.
use crate::join::{collect_mapping, join};
use crate::output_scripts::json::JsonDumper;
use crate::types::*;
use crate::utils::counter::Counter;
use crate::utils::files;
use crate::utils::table::open_table;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info};

/// Builds the dictionary of one namespace for one language.
pub fn build_mapping<P: AsRef<Path> + ?Sized>(
    data_dir: &P,
    namespace: &Namespace,
    language: &Language,
) -> Result<Mapping> {
    let origin = open_table(data_dir, namespace.origin)?;
    let local = open_table(data_dir, namespace.local)?;
    collect_mapping(join(origin, local, namespace, language))
}

/// Generates one namespace for one language into `out`.
///
/// Nothing is written if either table cannot be loaded. Returns the number of
/// entries written.
pub fn generate_unit<P: AsRef<Path> + ?Sized, O: AsRef<Path> + ?Sized>(
    data_dir: &P,
    namespace: &Namespace,
    language: &Language,
    out: &O,
) -> Result<usize> {
    let mapping = build_mapping(data_dir, namespace, language)?;
    JsonDumper::dump_to_file(&mapping, out)?;
    Ok(mapping.len())
}

/// Generates `locales/<code>/<origin>.json` for every configured language and
/// namespace, one unit at a time.
///
/// Unless [Config::keep_going] is set, the first failure aborts the run and
/// files written before it are left in place.
pub fn generate(config: &Config) -> Result<Counter> {
    let mut counter = Counter::new();
    for language in config.languages.iter() {
        info!("Processing language: {} ({})", language.code, language.id);
        if config.create_dirs {
            files::make_sure_dir_exists(&config.locales_dir.join(language.code))?;
        }
        for namespace in namespaces(config.extended) {
            debug!("Processing namespace: {}", namespace.origin);
            let out = files::locale_path(&config.locales_dir, language.code, namespace.origin);
            let re = generate_unit(&config.data_dir, namespace, language, &out)
                .with_context(|| {
                    format!(
                        "Failed to generate {} for language {}",
                        namespace.origin, language.code
                    )
                });
            match re {
                Ok(entries) => {
                    debug!("Created {} ({} entries)", out.display(), entries);
                    counter.inc_written(entries);
                }
                Err(e) if config.keep_going => {
                    error!("{:#}", e);
                    counter.inc_failed();
                }
                Err(e) => return Err(e),
            }
        }
    }
    info!("Localization generation complete. {}", counter);
    Ok(counter)
}
