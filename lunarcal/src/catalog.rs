use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use lc_events::EventCatalog;
use tracing::info;

/// Load an event catalogue from `path`: CSV when the extension is `.csv`,
/// JSON otherwise.
pub fn load(path: &Path) -> Result<EventCatalog> {
    let file = File::open(path)
        .with_context(|| format!("failed to open event catalogue {}", path.display()))?;
    let reader = BufReader::new(file);
    let catalog = if is_csv(path) {
        EventCatalog::from_csv_reader(reader)
    } else {
        EventCatalog::from_reader(reader)
    }
    .with_context(|| format!("failed to read event catalogue {}", path.display()))?;
    info!(path = %path.display(), events = catalog.len(), "event catalogue loaded");
    Ok(catalog)
}

/// Write `catalog` to `path` as JSON.
pub fn save_json(catalog: &EventCatalog, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    catalog
        .write_json(BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), events = catalog.len(), "event catalogue written");
    Ok(())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
