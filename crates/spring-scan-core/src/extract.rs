//! File extraction orchestration.

use std::path::Path;

use crate::analyzer::analyzer_for;
use crate::declarations::{extract_class_name, extract_dependencies, extract_package_name};
use crate::role::Role;
use crate::segment::segment;
use crate::store::ContentLookup;
use crate::types::{Declarations, FileExtraction};

/// Extracts declarations and method records from one file's text.
///
/// Declarations are parsed once, the file is segmented once, and the role's
/// analyzer runs over every block. Blocks without a recognizable signature
/// are dropped; method order follows source order. Pure function of its
/// inputs - calling it twice yields structurally identical output.
#[must_use]
pub fn extract_file(text: &str, role: Role) -> FileExtraction {
    let declarations = Declarations {
        package_name: extract_package_name(text),
        class_name: extract_class_name(text),
        dependencies: extract_dependencies(text),
    };

    let analyzer = analyzer_for(role);
    let methods = segment(text)
        .iter()
        .filter_map(|block| analyzer.analyze(block))
        .collect();

    FileExtraction {
        declarations,
        methods,
    }
}

/// Looks a file up through the store and extracts it.
///
/// Store trouble is non-fatal at this layer: a miss and a failed lookup
/// (unreadable root, permissions) are both logged and answered with the
/// empty sentinel, so one bad file never aborts a batch.
#[must_use]
pub fn extract_from_store(
    store: &dyn ContentLookup,
    original_path: &Path,
    role: Role,
) -> FileExtraction {
    match store.lookup(original_path) {
        Ok(Some(text)) => extract_file(&text, role),
        Ok(None) => {
            tracing::warn!("file not found in store: {}", original_path.display());
            FileExtraction::empty()
        }
        Err(e) => {
            tracing::warn!("store lookup failed for {}: {e}", original_path.display());
            FileExtraction::empty()
        }
    }
}
