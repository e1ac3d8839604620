//! Item input sources.
//!
//! Ticker lines come from, in order of preference:
//! - a file named on the command line
//! - piped stdin
//! - `[[items]]` in the config file

use crate::model::error::InputError;
use crate::model::ItemSpec;
use std::io::{BufRead, BufReader, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Split text into one item per non-blank line.
///
/// Trailing whitespace (including `\r`) is dropped; leading whitespace is
/// kept so indentation survives.
pub fn parse_lines<R: Read>(reader: R) -> Result<Vec<ItemSpec>, InputError> {
    let mut items = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let text = line.trim_end();
        if text.trim_start().is_empty() {
            continue;
        }
        items.push(ItemSpec::text(text));
    }
    Ok(items)
}

/// Read items from a file.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist and
/// `InputError::Io` for other read failures.
pub fn read_file(path: &Path) -> Result<Vec<ItemSpec>, InputError> {
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => InputError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io(e),
    })?;
    let items = parse_lines(file)?;
    debug!(path = %path.display(), count = items.len(), "read items from file");
    Ok(items)
}

/// Pick the item list from the available sources.
///
/// # Logic:
/// 1. If a file path is provided: read it
/// 2. If stdin is piped: read it to the end
/// 3. Else: use the configured items
///
/// # Errors
///
/// Returns `InputError::NoInput` when the chosen source yields no items.
pub fn resolve_items(
    file: Option<PathBuf>,
    configured: Vec<ItemSpec>,
) -> Result<Vec<ItemSpec>, InputError> {
    let stdin = std::io::stdin();
    let piped = !stdin.is_terminal();
    resolve_items_from(file, piped.then_some(stdin), configured)
}

/// [`resolve_items`] with an explicit stdin reader, `None` when stdin is a
/// terminal.
pub fn resolve_items_from<R: Read>(
    file: Option<PathBuf>,
    stdin: Option<R>,
    configured: Vec<ItemSpec>,
) -> Result<Vec<ItemSpec>, InputError> {
    let items = match (file, stdin) {
        (Some(path), _) => read_file(&path)?,
        (None, Some(reader)) => {
            let items = parse_lines(reader)?;
            // an empty pipe falls back to the config
            if items.is_empty() {
                configured
            } else {
                info!(count = items.len(), "read items from stdin");
                items
            }
        }
        (None, None) => configured,
    };

    if items.is_empty() {
        return Err(InputError::NoInput);
    }
    Ok(items)
}
