//! POST-body parameter parsing.
//!
//! Render requests accept a plain-text body of `key=value` pairs separated
//! by `;`, one or more pairs per line. The parsed map is merged into the
//! render-request descriptor before the engine is invoked.

use std::collections::HashMap;

/// Parse a request body of `key=value` pairs.
///
/// Pairs are separated by `;` within each line. Tokens without a `=` and
/// empty tokens between separators are skipped. When a key repeats, the
/// last occurrence wins. The value is everything after the first `=`.
pub fn parse_parameter_lines(body: &str) -> HashMap<String, String> {
    let mut parameters = HashMap::new();
    for line in body.lines() {
        for token in line.split(';') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if let Some((key, value)) = token.split_once('=') {
                parameters.insert(key.to_string(), value.to_string());
            }
        }
    }
    parameters
}
