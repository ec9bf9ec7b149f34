//! Locale dictionary output.
//!
//! Dictionaries are written as a single JSON object indented by four spaces,
//! keys in insertion order, non-ASCII text left unescaped and no trailing
//! newline:
//! ```text
//! {
//!     "stench": "Stench",
//!     "drizzle": "Drizzle"
//! }
//! ```
use crate::types::Mapping;
use crate::utils::files;
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// A dumper for locale dictionaries.
pub struct JsonDumper {}

impl JsonDumper {
    /// Serializes the dictionary to UTF-8 JSON.
    pub fn dump(mapping: &Mapping) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        mapping.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Creates or truncates `path` and writes the dictionary into it.
    ///
    /// The parent directory must already exist.
    pub fn dump_to_file<P: AsRef<Path> + ?Sized>(mapping: &Mapping, path: &P) -> Result<()> {
        let data = Self::dump(mapping)?;
        let mut f = files::write_file(path)?;
        f.write_all(&data)?;
        f.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocalizedValue;

    fn mapping(entries: &[(&str, &str)]) -> Mapping {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), LocalizedValue::Name(v.to_string())))
            .collect()
    }

    #[test]
    fn test_dump_layout() {
        let map = mapping(&[("stench", "Stench"), ("drizzle", "Drizzle")]);
        let out = String::from_utf8(JsonDumper::dump(&map).unwrap()).unwrap();
        assert_eq!(
            out,
            "{\n    \"stench\": \"Stench\",\n    \"drizzle\": \"Drizzle\"\n}"
        );
    }

    #[test]
    fn test_dump_empty() {
        let out = JsonDumper::dump(&Mapping::new()).unwrap();
        assert_eq!(out, b"{}");
    }

    #[test]
    fn test_dump_keeps_non_ascii() {
        let map = mapping(&[("stench", "あくしゅう"), ("drizzle", "Crachin é")]);
        let out = String::from_utf8(JsonDumper::dump(&map).unwrap()).unwrap();
        assert!(out.contains("\"あくしゅう\""));
        assert!(out.contains("\"Crachin é\""));
        assert!(!out.contains("\\u"));
    }

    #[test]
    fn test_dump_escapes_quotes() {
        let map = mapping(&[("farfetchd", "Farfetch\"d")]);
        let out = String::from_utf8(JsonDumper::dump(&map).unwrap()).unwrap();
        assert!(out.contains(r#""Farfetch\"d""#));
    }

    #[test]
    fn test_dump_prose_nested() {
        let mut map = Mapping::new();
        map.insert(
            "kanto".into(),
            LocalizedValue::Prose {
                name: "Kanto".into(),
                description: "Red".into(),
            },
        );
        let out = String::from_utf8(JsonDumper::dump(&map).unwrap()).unwrap();
        assert_eq!(
            out,
            "{\n    \"kanto\": {\n        \"name\": \"Kanto\",\n        \"description\": \"Red\"\n    }\n}"
        );
    }

    #[test]
    fn test_round_trip() {
        let map = mapping(&[("pikachu", "ピカチュウ"), ("eevee", "伊布")]);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokemon_species.json");
        JsonDumper::dump_to_file(&map, &path).unwrap();
        let parsed: indexmap::IndexMap<String, String> =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let expected: Vec<_> = map
            .iter()
            .map(|(k, v)| (k.clone(), v.name().to_string()))
            .collect();
        assert_eq!(parsed.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.json");
        std::fs::write(&path, "x".repeat(64)).unwrap();
        JsonDumper::dump_to_file(&Mapping::new(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    }

    #[test]
    fn test_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en").join("types.json");
        let err = JsonDumper::dump_to_file(&Mapping::new(), &path).unwrap_err();
        assert!(err.downcast_ref::<std::io::Error>().is_some());
        assert!(!path.exists());
    }
}
