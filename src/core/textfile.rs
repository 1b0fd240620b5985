use crate::utils::error::{Result, UtilError};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};

/// Creates the file (truncating any existing content) and writes `text`.
/// The handle is dropped on every exit path, success or failure.
pub fn write_initial(path: &str, text: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Returns the full contents of the file, or `NotFound` if it does not exist.
pub fn read_all(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| UtilError::from_io(path, e))
}

/// Appends `text` to the file, creating it if absent.
pub fn append(path: &str, text: &str) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}

/// Removes the file permanently, or fails with `NotFound` if it is absent.
pub fn delete_file(path: &str) -> Result<()> {
    fs::remove_file(path).map_err(|e| UtilError::from_io(path, e))
}

/// Lazy iterator over the file's trimmed lines. Reads happen as the caller
/// advances the iterator; it cannot be restarted once consumed.
pub fn read_lines(path: &str) -> Result<impl Iterator<Item = Result<String>>> {
    let file = File::open(path).map_err(|e| UtilError::from_io(path, e))?;
    let reader = BufReader::new(file);

    Ok(reader.lines().map(|line| -> Result<String> {
        let line = line?;
        Ok(line.trim().to_string())
    }))
}
