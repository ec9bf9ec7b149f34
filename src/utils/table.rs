//! CSV table loading.
//!
//! A table is a `<name>.csv` file with a header row. Rows are exposed lazily
//! in file order as records keyed by header; every cell stays a string.
use super::files;
use anyhow::Result;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug)]
struct Columns {
    table: String,
    index: HashMap<String, usize>,
}

/// An opened CSV table. The file is closed when the table or its
/// [Records] iterator is dropped.
pub struct Table {
    reader: csv::Reader<File>,
    columns: Rc<Columns>,
}

/// Opens `<data_dir>/<name>.csv` and reads its header row.
///
/// Fails with [std::io::ErrorKind::NotFound] naming the full path if the file
/// does not exist.
pub fn open_table<P: AsRef<Path> + ?Sized>(data_dir: &P, name: &str) -> Result<Table> {
    let path = files::table_path(data_dir, name);
    files::ensure_file_exists(&path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(&path)?;
    let mut index = HashMap::new();
    for (i, header) in reader.headers()?.iter().enumerate() {
        // Keep the last duplicate header, like a dict built from the header row.
        index.insert(header.to_string(), i);
    }
    Ok(Table {
        reader,
        columns: Rc::new(Columns {
            table: name.to_string(),
            index,
        }),
    })
}

impl Table {
    /// Consumes the table into a lazy iterator over its rows.
    pub fn records(self) -> Records {
        Records {
            inner: self.reader.into_records(),
            columns: self.columns,
        }
    }
}

/// Rows of a [Table] in file order.
pub struct Records {
    inner: csv::StringRecordsIntoIter<File>,
    columns: Rc<Columns>,
}

impl Iterator for Records {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.inner.next()?;
        Some(
            row.map(|row| Record {
                row,
                columns: self.columns.clone(),
            })
            .map_err(anyhow::Error::from),
        )
    }
}

/// A single row, addressed by column header.
#[derive(Debug, Clone)]
pub struct Record {
    row: csv::StringRecord,
    columns: Rc<Columns>,
}

impl Record {
    /// Returns the cell under `column`.
    ///
    /// Fails if the table has no such column or the row is too short to have it.
    pub fn get(&self, column: &str) -> Result<&str> {
        self.columns
            .index
            .get(column)
            .and_then(|&i| self.row.get(i))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Column {} not found in table {} (line {})",
                    column,
                    self.columns.table,
                    self.row.position().map_or(0, |p| p.line()),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn write_table(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(format!("{}.csv", name)), content).unwrap();
    }

    #[test]
    fn test_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write_table(
            dir.path(),
            "abilities",
            "id,identifier,generation_id\n1,stench,3\n2,drizzle,3\n",
        );
        let table = open_table(dir.path(), "abilities").unwrap();
        let rows: Vec<_> = table.records().collect::<Result<_>>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("identifier").unwrap(), "stench");
        assert_eq!(rows[1].get("id").unwrap(), "2");
        assert_eq!(rows[1].get("generation_id").unwrap(), "3");
    }

    #[test]
    fn test_cells_are_not_trimmed_or_coerced() {
        let dir = tempfile::tempdir().unwrap();
        write_table(
            dir.path(),
            "ability_names",
            "ability_id,local_language_id,name\n01,9,\"Stench, the\"\n",
        );
        let rows: Vec<_> = open_table(dir.path(), "ability_names")
            .unwrap()
            .records()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows[0].get("ability_id").unwrap(), "01");
        assert_eq!(rows[0].get("name").unwrap(), "Stench, the");
    }

    #[test]
    fn test_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_table(dir.path(), "abilities")
            .err()
            .expect("opening a missing table should fail");
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        let expected = dir.path().join("abilities.csv");
        assert!(err.to_string().contains(&expected.display().to_string()));
    }

    #[test]
    fn test_missing_column_fails_on_access() {
        let dir = tempfile::tempdir().unwrap();
        write_table(dir.path(), "types", "id,identifier\n1,normal\n2\n");
        let rows: Vec<_> = open_table(dir.path(), "types")
            .unwrap()
            .records()
            .collect::<Result<_>>()
            .unwrap();
        assert!(rows[0].get("name").is_err());
        let err = rows[1].get("identifier").unwrap_err();
        assert!(err.to_string().contains("identifier"));
        assert!(err.to_string().contains("types"));
    }
}
