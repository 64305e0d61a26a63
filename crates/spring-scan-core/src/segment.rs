//! Method segmentation via line-oriented brace-depth tracking.
//!
//! This is intentionally not a parser. The segmenter walks the file line by
//! line with a two-state machine (idle / accumulating) and an integer brace
//! depth, which is exactly as much structure as the extraction needs and
//! exactly as fragile as the heuristics downstream expect.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line that starts a method declaration:
/// `public static ResponseEntity<User> createUser(`.
static METHOD_START: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)] // pattern is a compile-time constant
    Regex::new(r"^(?:public|private|protected)\s+(?:static\s+)?[\w<>\[\]]+\s+\w+\s*\(").unwrap()
});

/// Splits file text into raw method blocks, in source order.
///
/// A block starts at an annotation line (`@...`) or a visibility-modifier
/// method declaration, and ends on the first line where the brace depth
/// returns to zero after having opened. Each block keeps its annotations,
/// signature, and body verbatim (lines trimmed, joined with `\n`).
///
/// Class declarations, `private final`/`public final` fields, and
/// `@RequiredArgsConstructor` never start a block.
///
/// Known limitation: a block whose braces never close is dropped silently,
/// so unbalanced input yields fewer blocks rather than an error.
#[must_use]
pub fn segment(text: &str) -> Vec<String> {
    let mut methods = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut in_method = false;
    let mut started = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        // Class and field declarations never open a method block.
        if line.contains("class ")
            || line.contains("private final")
            || line.contains("public final")
            || line.starts_with("@RequiredArgsConstructor")
        {
            continue;
        }

        // Block start: annotation or method declaration line.
        if line.starts_with('@') || METHOD_START.is_match(line) {
            if !started {
                started = true;
                current.clear();
            }
            current.push_str(line);
            current.push('\n');

            if line.contains('{') {
                in_method = true;
                depth += count(line, '{');
                depth -= count(line, '}');
            }
            continue;
        }

        if started {
            current.push_str(line);
            current.push('\n');

            if line.contains('{') {
                in_method = true;
                depth += count(line, '{');
            }
            if line.contains('}') {
                depth -= count(line, '}');
            }

            // Depth back to zero: the block is complete.
            if in_method && depth == 0 {
                methods.push(current.trim().to_owned());
                current.clear();
                in_method = false;
                started = false;
            }
        }
    }

    // A dangling accumulation (unbalanced braces) is never emitted.
    methods
}

#[allow(clippy::cast_possible_wrap)]
fn count(line: &str, ch: char) -> i32 {
    line.chars().filter(|&c| c == ch).count() as i32
}
