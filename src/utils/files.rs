use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the path of a CSV table inside the data directory.
pub fn table_path<P: AsRef<Path> + ?Sized>(data_dir: &P, name: &str) -> PathBuf {
    data_dir.as_ref().join(format!("{}.csv", name))
}

/// Returns `locales/<code>/<origin>.json`.
pub fn locale_path<P: AsRef<Path> + ?Sized>(locales_dir: &P, code: &str, origin: &str) -> PathBuf {
    locales_dir.as_ref().join(code).join(format!("{}.json", origin))
}

/// Fails with [io::ErrorKind::NotFound] naming the path if it is not a file.
pub fn ensure_file_exists<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<()> {
    let path = f.as_ref();
    if path.is_file() {
        return Ok(());
    }
    Err(io::Error::new(
        io::ErrorKind::NotFound,
        format!("File {} does not exist.", path.display()),
    ))
}

/// Creates or truncates the file. Parent directories are not created.
pub fn write_file<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<Box<dyn Write>> {
    Ok(Box::new(io::BufWriter::new(fs::File::create(f)?)))
}

pub fn make_sure_dir_exists<F: AsRef<Path> + ?Sized>(f: &F) -> io::Result<()> {
    let path = f.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
