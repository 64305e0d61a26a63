//! # spring-scan-core
//!
//! Structural extraction of Spring-style Java source files.
//!
//! Given the raw text of one class file and its architectural role
//! (controller, service, or exception), this crate recovers:
//!
//! - package name, class name, and import list ([`declarations`])
//! - a segmentation of the file into raw method blocks via line-oriented
//!   brace-depth tracking ([`segment`])
//! - per-method metadata: signature, HTTP route binding for controllers,
//!   thrown-exception signature for services/exceptions ([`analyzer`])
//!
//! The extraction is heuristic by design: a line-based state machine plus
//! named regex patterns, not a grammar. It reproduces the observable
//! behavior of that approach faithfully, quirks included.
//!
//! ## Example
//!
//! ```
//! use spring_scan_core::{extract_file, Role};
//!
//! let source = r#"
//! package com.example.demo;
//! import java.util.List;
//! public class UserService {
//!     public User findUser(Long id) {
//!         return repository.findById(id)
//!             .orElseThrow(() -> new UserNotFoundException("no user: " + id));
//!     }
//! }
//! "#;
//!
//! let result = extract_file(source, Role::Service);
//! assert_eq!(result.declarations.class_name, "UserService");
//! assert_eq!(result.methods[0].name, "findUser");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
pub mod declarations;
pub mod extract;
pub mod role;
pub mod segment;
pub mod store;
mod types;

pub use analyzer::{
    analyzer_for, ControllerAnalyzer, ExceptionAnalyzer, RoleAnalyzer, ServiceAnalyzer,
};
pub use config::{ConfigError, RoleRule, ScanConfig};
pub use declarations::{extract_class_name, extract_dependencies, extract_package_name};
pub use extract::{extract_file, extract_from_store};
pub use role::{Role, RoleResolver, UnknownRole};
pub use segment::segment;
pub use store::{ContentLookup, UploadStore};
pub use types::{Declarations, FileExtraction, FileReport, MethodRecord, ScanReport};
