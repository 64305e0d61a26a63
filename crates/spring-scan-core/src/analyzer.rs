//! Role analyzers: per-method interpretation of raw method blocks.
//!
//! Each role gets its own analyzer behind the [`RoleAnalyzer`] trait.
//! Controllers are read for HTTP route bindings; services and exceptions
//! are read for thrown-exception signatures. All of it is named regex
//! patterns over the block text - heuristics, not grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::role::Role;
use crate::types::MethodRecord;

/// Analyzes one raw method block into a [`MethodRecord`].
///
/// Returns `None` when the block has no recognizable method signature
/// (a non-public helper, an initializer, noise) - such blocks are
/// excluded from results, not reported as errors.
pub trait RoleAnalyzer: Send + Sync {
    /// Extract a method record from one raw block, or `None` if the block
    /// is not analyzable for this role.
    fn analyze(&self, method: &str) -> Option<MethodRecord>;
}

/// Selects the analyzer for a role.
///
/// Total over [`Role`]: rejecting unknown role labels happens earlier, in
/// [`Role::from_str`](std::str::FromStr), where it fails the call.
#[must_use]
pub fn analyzer_for(role: Role) -> &'static dyn RoleAnalyzer {
    match role {
        Role::Controller => &ControllerAnalyzer,
        Role::Service => &ServiceAnalyzer,
        Role::Exception => &ExceptionAnalyzer,
    }
}

/// Mapping annotations recognized on controller methods.
const MAPPINGS: &[(&str, &str)] = &[
    ("@GetMapping", "GET"),
    ("@PostMapping", "POST"),
    ("@PutMapping", "PUT"),
    ("@DeleteMapping", "DELETE"),
    ("@PatchMapping", "PATCH"),
];

#[allow(clippy::unwrap_used)] // patterns are compile-time constants
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#"["']([^"']+)["']"#).unwrap());
#[allow(clippy::unwrap_used)]
static REQUEST_METHOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"method\s*=\s*RequestMethod\.(\w+)").unwrap());
#[allow(clippy::unwrap_used)]
static VISIBILITY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:public|private|protected)").unwrap());

/// Controller signature: broader return-type capture than the shared one,
/// so generic and array types (`ResponseEntity<List<User>>`) survive.
#[allow(clippy::unwrap_used)]
static CONTROLLER_SIGNATURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:public|private|protected)\s+(?:static\s+)?([^(]+?)\s+(\w+)\s*\((.*?)\)")
        .unwrap()
});

/// Shared service/exception signature: public methods only.
#[allow(clippy::unwrap_used)]
static PUBLIC_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"public\s+([\w<>\[\]]+)\s+(\w+)\s*\((.*?)\)").unwrap());

/// Direct throw: `throw new NotFound("gone" + id)`.
#[allow(clippy::unwrap_used)]
static DIRECT_THROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"throw\s+new\s+(\w+)\("([^"]+)"\s*\+?\s*([^)]+)?\)"#).unwrap());

/// Or-else-throw: `orElseThrow(() -> new NotFound("gone" + id))`.
#[allow(clippy::unwrap_used)]
static OR_ELSE_THROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"orElseThrow\s*\(\s*\(\s*\)\s*->\s*new\s+(\w+)\("([^"]+)"\s*\+?\s*([^)]+)?\)"#)
        .unwrap()
});

/// Extracts HTTP route bindings and method signatures from controller blocks.
pub struct ControllerAnalyzer;

impl RoleAnalyzer for ControllerAnalyzer {
    fn analyze(&self, method: &str) -> Option<MethodRecord> {
        let mut http_method = "OTHER".to_owned();
        let mut path = None;

        // Annotation lines sit above the declaration; scanning stops at the
        // first visibility-modifier line, which is the declaration itself.
        for raw_line in method.lines() {
            let line = raw_line.trim();

            for (annotation, verb) in MAPPINGS {
                if line.starts_with(annotation) {
                    http_method = (*verb).to_owned();
                    if let Some(c) = QUOTED.captures(line) {
                        path = Some(c[1].to_owned());
                    }
                    break;
                }
            }

            if line.starts_with("@RequestMapping") {
                if let Some(c) = REQUEST_METHOD.captures(line) {
                    http_method = c[1].to_owned();
                }
                if let Some(c) = QUOTED.captures(line) {
                    path = Some(c[1].to_owned());
                }
            }

            if VISIBILITY.is_match(line) {
                break;
            }
        }

        let c = CONTROLLER_SIGNATURE.captures(method)?;
        Some(MethodRecord {
            name: c[2].to_owned(),
            return_type: Some(c[1].trim().to_owned()),
            parameters: Some(c[3].trim().to_owned()),
            http_method: Some(http_method),
            path,
            error_code: None,
            error_message: None,
            full_method: method.to_owned(),
        })
    }
}

/// Extracts business-method signatures and thrown-exception facts.
pub struct ServiceAnalyzer;

impl RoleAnalyzer for ServiceAnalyzer {
    fn analyze(&self, method: &str) -> Option<MethodRecord> {
        analyze_throwing(method)
    }
}

/// Same extraction as [`ServiceAnalyzer`]; a separate type keeps the
/// exception role distinct in selector and reports.
pub struct ExceptionAnalyzer;

impl RoleAnalyzer for ExceptionAnalyzer {
    fn analyze(&self, method: &str) -> Option<MethodRecord> {
        analyze_throwing(method)
    }
}

/// Shared service/exception analysis: public signature plus throw patterns.
fn analyze_throwing(method: &str) -> Option<MethodRecord> {
    let c = PUBLIC_SIGNATURE.captures(method)?;
    let (error_code, error_message) = throw_signature(method);

    Some(MethodRecord {
        name: c[2].to_owned(),
        return_type: Some(c[1].to_owned()),
        parameters: Some(c[3].trim().to_owned()),
        http_method: None,
        path: None,
        error_code,
        error_message,
        full_method: method.to_owned(),
    })
}

/// Finds the thrown-exception signature of a method body, if any.
///
/// Checks the direct-throw pattern first, then the or-else-throw pattern.
/// When both are present the or-else-throw match overwrites the direct one.
/// That precedence mirrors the observed behavior and is pinned by test.
fn throw_signature(method: &str) -> (Option<String>, Option<String>) {
    let mut error_code = None;
    let mut error_message = None;

    if let Some(c) = DIRECT_THROW.captures(method) {
        error_code = Some(c[1].to_owned());
        error_message = Some(join_message(&c));
    }

    if let Some(c) = OR_ELSE_THROW.captures(method) {
        error_code = Some(c[1].to_owned());
        error_message = Some(join_message(&c));
    }

    (error_code, error_message)
}

/// Message = string literal + trimmed trailing expression, concatenated.
fn join_message(c: &regex::Captures<'_>) -> String {
    let literal = &c[2];
    match c.get(3) {
        Some(expr) => format!("{literal}{}", expr.as_str().trim()),
        None => literal.to_owned(),
    }
}
