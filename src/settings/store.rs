//! Reading and writing settings files

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::{SyncError, SyncResult};

use super::document::{RuleLists, SettingsDocument};

/// Read and parse one settings document
///
/// Returns `None` for a missing, unreadable, or malformed file. Callers
/// treat that identically to a file with no permission rules; load never
/// surfaces these failures to the operator.
pub fn read_document(path: &Path) -> Option<SettingsDocument> {
    if !path.exists() {
        return None;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!("Cannot open settings file {}: {}", path.display(), err);
            return None;
        }
    };

    match serde_json::from_reader(BufReader::new(file)) {
        Ok(doc) => Some(doc),
        Err(err) => {
            tracing::debug!("Ignoring malformed settings file {}: {}", path.display(), err);
            None
        }
    }
}

/// Read just the rule lists from a settings file, defaulting to empty
pub fn read_rules(path: &Path) -> RuleLists {
    read_document(path)
        .and_then(|doc| doc.permissions)
        .unwrap_or_default()
}

/// Write rule lists into the settings file at `path`
///
/// The permission section replaces whatever the existing document carries;
/// every other top-level field is preserved. Parent directories and the file
/// itself are created when absent. A malformed existing document is treated
/// as empty and overwritten.
pub fn write_rules(path: &Path, rules: &RuleLists) -> SyncResult<()> {
    let mut doc = read_document(path).unwrap_or_default();
    doc.permissions = Some(rules.clone());
    write_document(path, &doc)
}

fn write_document(path: &Path, doc: &SettingsDocument) -> SyncResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SyncError::WriteSettings {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| SyncError::WriteSettings {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer.write_all(b"\n").map_err(io_write_err(path))?;
    writer.flush().map_err(io_write_err(path))?;

    tracing::info!(
        "Wrote {} allow / {} deny rules to {}",
        doc.rules().allow.len(),
        doc.rules().deny.len(),
        path.display()
    );
    Ok(())
}

fn io_write_err(path: &Path) -> impl FnOnce(std::io::Error) -> SyncError + '_ {
    move |source| SyncError::WriteSettings {
        path: path.to_path_buf(),
        source,
    }
}
