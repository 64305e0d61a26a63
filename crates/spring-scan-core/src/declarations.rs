//! Declaration extraction: package, class name, and imports.
//!
//! Each extractor is a single pass with one named pattern, kept as a
//! separate function so the heuristic stays visible and testable on its own.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static PACKAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"package\s+([\w.]+);").unwrap());
#[allow(clippy::unwrap_used)]
static CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"class\s+(\w+)").unwrap());
#[allow(clippy::unwrap_used)]
static IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"import\s+([\w.]+);").unwrap());

/// First `package <dotted.name>;` in the file, or `""` if none.
#[must_use]
pub fn extract_package_name(text: &str) -> String {
    PACKAGE
        .captures(text)
        .map(|c| c[1].to_owned())
        .unwrap_or_default()
}

/// First `class <Identifier>` in the file, or `""` if none.
#[must_use]
pub fn extract_class_name(text: &str) -> String {
    CLASS
        .captures(text)
        .map(|c| c[1].to_owned())
        .unwrap_or_default()
}

/// Every `import <dotted.name>;` in source order, keyword and `;` stripped.
///
/// Duplicate imports are returned as many times as they occur.
#[must_use]
pub fn extract_dependencies(text: &str) -> Vec<String> {
    IMPORT
        .captures_iter(text)
        .map(|c| c[1].to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SRC: &str = r"
package com.example.shop;

import java.util.List;
import org.springframework.web.bind.annotation.RestController;
import java.util.List;

public class OrderController {
}
";

    #[test]
    fn extracts_package_name() {
        assert_eq!(extract_package_name(SRC), "com.example.shop");
    }

    #[test]
    fn missing_package_is_empty_string() {
        assert_eq!(extract_package_name("public class A {}"), "");
    }

    #[test]
    fn extracts_class_name() {
        assert_eq!(extract_class_name(SRC), "OrderController");
    }

    #[test]
    fn missing_class_is_empty_string() {
        assert_eq!(extract_class_name("package com.x;"), "");
    }

    #[test]
    fn imports_keep_source_order_and_duplicates() {
        assert_eq!(
            extract_dependencies(SRC),
            vec![
                "java.util.List",
                "org.springframework.web.bind.annotation.RestController",
                "java.util.List",
            ]
        );
    }

    #[test]
    fn no_imports_is_empty_vec() {
        assert!(extract_dependencies("package com.x;\nclass A {}").is_empty());
    }
}
