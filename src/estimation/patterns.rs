//! Built-in estimate patterns and pattern compilation.

use regex::Regex;

/// The canonical pattern set, in precedence order.
///
/// Explicit `Estimate:`/`Time:`/`Effort:` prefixes outrank the bracketed
/// shorthand forms. Each pattern captures exactly one run of digits, the
/// hour count, and accepts any of the unit spellings `h`, `hr`, `hrs`,
/// `hour`, `hours`.
pub const DEFAULT_PATTERNS: [&str; 5] = [
    r"(?i)\bestimated?\s*:\s*(\d+)\s*h(?:(?:ou)?rs?)?\b",
    r"(?i)\btime\s*:\s*(\d+)\s*h(?:(?:ou)?rs?)?\b",
    r"(?i)\beffort\s*:\s*(\d+)\s*h(?:(?:ou)?rs?)?\b",
    r"(?i)\[(\d+)\s*h\]",
    r"(?i)\[(\d+)\s*h(?:ou)?rs?\]",
];

/// Compile pattern strings in configured order.
///
/// Patterns that fail to compile are dropped with a warning rather than
/// failing the whole set; the estimator keeps working with whatever
/// remains.
pub fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        match Regex::new(pattern) {
            Ok(regex) => compiled.push(regex),
            Err(e) => {
                tracing::warn!("skipping invalid estimate pattern {:?}: {}", pattern, e);
            }
        }
    }

    compiled
}
