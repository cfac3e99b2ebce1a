//! Loads the reference record table from disk.
//!
//! Each file in the data directory holds one category, named by its stem
//! (`spell.csv` holds spells). Rows are `name,page,source` with a single
//! header row. Load problems are logged and skipped, never fatal: a file
//! that fails to read drops that file, a malformed row drops that row, and
//! an empty result disables the reference commands via registry gating.

use grimoire_core::{Category, Record, RecordStore};
use std::fs;
use std::path::Path;

/// Read every data file under `data_dir` into a store.
pub fn load_store(data_dir: &Path) -> RecordStore {
    let entries = match fs::read_dir(data_dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "Failed to read data dir {}: {e}; disabling reference functionality",
                data_dir.display()
            );
            return RecordStore::default();
        }
    };

    let mut records = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str());
        let Some(category) = stem.and_then(Category::from_label) else {
            log::warn!("Skipping data file {}: unknown category", path.display());
            continue;
        };
        log::info!("Loading data file '{}'", path.display());
        match fs::read_to_string(&path) {
            Ok(contents) => records.extend(parse_rows(&contents, category)),
            Err(e) => log::warn!("Failed to read data file {}: {e}", path.display()),
        }
    }

    if records.is_empty() {
        log::warn!("No records loaded; disabling reference functionality");
    }
    RecordStore::new(records)
}

/// Parse `name,page,source` rows, skipping the header row and logging past
/// malformed lines.
fn parse_rows(contents: &str, category: Category) -> Vec<Record> {
    contents
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.splitn(3, ',').map(str::trim);
            match (fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(page), Some(source)) if !name.is_empty() => Some(Record {
                    name: name.to_string(),
                    category,
                    page: page.to_string(),
                    source: source.to_string(),
                }),
                _ => {
                    log::warn!("Skipping malformed {category} row: {line}");
                    None
                }
            }
        })
        .collect()
}
