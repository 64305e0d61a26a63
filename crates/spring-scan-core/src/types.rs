//! Core types for extraction results.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::role::Role;

/// Top-level declaration facts for one source file.
///
/// Fields are empty (`""` / `[]`) when the corresponding declaration is
/// absent from the source, never `None` - downstream storage treats all
/// three as required columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declarations {
    /// Dotted package name from the `package` statement.
    pub package_name: String,
    /// Name of the first `class` declaration.
    pub class_name: String,
    /// Import paths in source order. Duplicates are kept as written.
    pub dependencies: Vec<String>,
}

impl Declarations {
    /// Returns true if nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.package_name.is_empty() && self.class_name.is_empty() && self.dependencies.is_empty()
    }
}

/// The extracted facts about a single method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodRecord {
    /// Method name.
    pub name: String,
    /// Declared return type, as written.
    pub return_type: Option<String>,
    /// Parameter list between the parentheses, trimmed.
    pub parameters: Option<String>,
    /// HTTP verb for controller methods (`"GET"`, ..., or `"OTHER"`).
    /// Always `None` for service/exception roles.
    pub http_method: Option<String>,
    /// Route path from the mapping annotation, if one carried a quoted string.
    pub path: Option<String>,
    /// Exception class name from a throw or or-else-throw pattern.
    pub error_code: Option<String>,
    /// Message text for the thrown exception: string literal plus any
    /// trailing concatenated expression, trimmed.
    pub error_message: Option<String>,
    /// The raw method block verbatim: annotations, signature, and body.
    pub full_method: String,
}

/// Result of extracting one file: declarations plus methods in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExtraction {
    /// Package/class/import facts.
    pub declarations: Declarations,
    /// One record per analyzable method, in source order.
    pub methods: Vec<MethodRecord>,
}

impl FileExtraction {
    /// The lookup-miss sentinel: all declarations empty, no methods.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if this is (structurally) the empty sentinel.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.methods.is_empty()
    }
}

/// Extraction result for one file within a scan, with its provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path relative to the scan root.
    pub file: PathBuf,
    /// Role the file was analyzed as.
    pub role: Role,
    /// The extraction itself.
    pub extraction: FileExtraction,
}

/// Aggregated result of scanning a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanReport {
    /// Per-file results, sorted by path.
    pub files: Vec<FileReport>,
    /// Number of files scanned (including ones that yielded no methods).
    pub files_scanned: usize,
}

impl ScanReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of method records across all files.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.files.iter().map(|f| f.extraction.methods.len()).sum()
    }
}
