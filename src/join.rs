//! Joins an origin table with its localization table for one language.
use crate::types::*;
use crate::utils::table::{Record, Records, Table};
use anyhow::Result;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

const LANGUAGE_COLUMN: &str = "local_language_id";

/// Lazily yields one [JoinedRow] per origin record, in origin order.
pub struct JoinedRows {
    origin: Records,
    /// Localization rows not indexed yet; consumed on the first origin record.
    local: Option<Records>,
    localized: HashMap<String, Record>,
    fk: &'static str,
    lang_id: String,
    projection: Projection,
}

/// Joins `origin` with `local` for the given language.
///
/// Both tables are already open. The localization rows are read when the
/// first origin record is joined and indexed by foreign key, keeping only rows
/// of `language`. When several rows share a key the first one in file order
/// wins.
pub fn join(
    origin: Table,
    local: Table,
    namespace: &Namespace,
    language: &Language,
) -> JoinedRows {
    JoinedRows {
        origin: origin.records(),
        local: Some(local.records()),
        localized: HashMap::new(),
        fk: namespace.fk,
        lang_id: language.id.to_string(),
        projection: namespace.projection,
    }
}

fn project(record: &Record, projection: Projection) -> Result<LocalizedValue> {
    Ok(match projection {
        Projection::Name => LocalizedValue::Name(record.get("name")?.to_string()),
        Projection::Prose => LocalizedValue::Prose {
            name: record.get("name")?.to_string(),
            description: record.get("description")?.to_string(),
        },
    })
}

impl JoinedRows {
    fn index_localized(&mut self) -> Result<()> {
        let Some(local) = self.local.take() else {
            return Ok(());
        };
        for record in local {
            let record = record?;
            // Both join columns are read on every row.
            let key = record.get(self.fk)?;
            if record.get(LANGUAGE_COLUMN)? != self.lang_id {
                continue;
            }
            if let Entry::Vacant(e) = self.localized.entry(key.to_string()) {
                e.insert(record);
            }
        }
        Ok(())
    }

    fn join_row(&mut self, record: Record) -> Result<JoinedRow> {
        self.index_localized()?;
        let id = record.get("id")?.to_string();
        let identifier = record.get("identifier")?.to_string();
        let name = match self.localized.get(&id) {
            Some(local) => Some(project(local, self.projection)?),
            None => None,
        };
        Ok(JoinedRow {
            id,
            identifier,
            name,
        })
    }
}

impl Iterator for JoinedRows {
    type Item = Result<JoinedRow>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.origin.next()?;
        Some(record.and_then(|record| self.join_row(record)))
    }
}

/// Folds joined rows into a dictionary.
///
/// Rows without a localization are dropped. A repeated identifier overwrites
/// the earlier value but keeps its position.
pub fn collect_mapping<I: IntoIterator<Item = Result<JoinedRow>>>(rows: I) -> Result<Mapping> {
    let mut map = Mapping::new();
    for row in rows {
        let row = row?;
        if let Some(name) = row.name {
            map.insert(row.identifier, name);
        }
    }
    Ok(map)
}
