//! Placeholder substitution for `[name]` style patterns.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unknown placeholder '[{0}]' in pattern")]
    UnknownPlaceholder(String),

    #[error("Unterminated placeholder at byte {0} in pattern")]
    Unterminated(usize),
}

/// Replaces every `[name]` in `pattern` with the value mapped to `name`.
///
/// The pattern is scanned once from left to right, so a value that itself
/// contains brackets is copied verbatim rather than expanded again.
pub fn render(pattern: &str, values: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);

        let after = &rest[open + 1..];
        let close = after
            .find(']')
            .ok_or(TemplateError::Unterminated(pattern.len() - rest.len() + open))?;
        let name = &after[..close];

        let value = values
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
        out.push_str(value);

        rest = &after[close + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
