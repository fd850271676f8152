//! Function identifiers derived from native tool names.

/// Turn a native tool name into a function identifier.
///
/// Dots and hyphens become underscores, every other character outside
/// ASCII alphanumerics and underscore is removed. The result may be empty.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .filter_map(|c| match c {
            '.' | '-' => Some('_'),
            c if c.is_ascii_alphanumeric() || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}
