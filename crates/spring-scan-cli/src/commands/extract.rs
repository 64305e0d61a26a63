//! Extract command implementation: one staged file by original path.

use anyhow::Result;
use spring_scan_core::{extract_from_store, Role, UploadStore};
use std::path::Path;

/// Runs the extract command.
///
/// Prints the extraction as JSON, which is the shape the persistence layer
/// consumes. A lookup miss or failure prints the empty result; neither is
/// an error here.
pub fn run(original_path: &Path, role: Role, uploads_root: &Path) -> Result<()> {
    let store = UploadStore::new(uploads_root);
    let extraction = extract_from_store(&store, original_path, role);

    if extraction.is_empty() {
        tracing::warn!(
            "no staged content for {} under {}",
            original_path.display(),
            uploads_root.display()
        );
    }

    let json = serde_json::to_string_pretty(&extraction)?;
    println!("{json}");
    Ok(())
}
