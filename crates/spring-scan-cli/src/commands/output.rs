//! Shared output formatting for scan results.

use anyhow::Result;
use spring_scan_core::{MethodRecord, ScanReport};

use crate::OutputFormat;

/// Print a scan report in the specified format.
pub fn print(report: &ScanReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &ScanReport) {
    for file in &report.files {
        let decls = &file.extraction.declarations;
        println!(
            "\x1b[1m{}\x1b[0m [{}] {}.{}",
            file.file.display(),
            file.role,
            decls.package_name,
            decls.class_name,
        );
        if !decls.dependencies.is_empty() {
            println!("  imports: {}", decls.dependencies.len());
        }
        for method in &file.extraction.methods {
            println!("  {}", describe(method));
        }
        println!();
    }

    println!(
        "Extracted {} method(s) from {} file(s)",
        report.method_count(),
        report.files_scanned
    );
}

fn describe(method: &MethodRecord) -> String {
    let signature = format!(
        "{} {}({})",
        method.return_type.as_deref().unwrap_or("?"),
        method.name,
        method.parameters.as_deref().unwrap_or(""),
    );
    if let Some(verb) = &method.http_method {
        let path = method.path.as_deref().unwrap_or("-");
        return format!("{verb} {path} -> {signature}");
    }
    if let Some(code) = &method.error_code {
        let message = method.error_message.as_deref().unwrap_or("");
        return format!("{signature} throws {code}(\"{message}\")");
    }
    signature
}

fn print_json(report: &ScanReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &ScanReport) {
    for file in &report.files {
        for method in &file.extraction.methods {
            println!(
                "{}:{}: [{}] {}",
                file.file.display(),
                method.name,
                file.role,
                describe(method),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(http: Option<&str>, path: Option<&str>, code: Option<&str>) -> MethodRecord {
        MethodRecord {
            name: "f".into(),
            return_type: Some("User".into()),
            parameters: Some("Long id".into()),
            http_method: http.map(Into::into),
            path: path.map(Into::into),
            error_code: code.map(Into::into),
            error_message: code.map(|_| "gone".into()),
            full_method: String::new(),
        }
    }

    #[test]
    fn describes_controller_methods_with_route() {
        let line = describe(&record(Some("GET"), Some("/users/{id}"), None));
        assert_eq!(line, "GET /users/{id} -> User f(Long id)");
    }

    #[test]
    fn describes_service_methods_with_throw() {
        let line = describe(&record(None, None, Some("NotFound")));
        assert_eq!(line, "User f(Long id) throws NotFound(\"gone\")");
    }

    #[test]
    fn describes_plain_methods_as_signature() {
        let line = describe(&record(None, None, None));
        assert_eq!(line, "User f(Long id)");
    }
}
