// ABOUTME: Literal {{key}} token substitution over serialized manifest text
// ABOUTME: Escapes replacement values so they stay valid inside JSON string literals

use std::collections::HashMap;

use super::error::{Encoding, Result, TemplateError};

pub const OPEN_DELIMITER: &str = "{{";
pub const CLOSE_DELIMITER: &str = "}}";

/// Replace every `{{ key }}` token in `text` with the escaped value of `key`.
///
/// Token content is trimmed before lookup. An empty or unknown key is written
/// back exactly as it appeared when `allow_unresolved` is set, otherwise the
/// whole call fails with [`TemplateError::UnresolvedVariable`]. An opening
/// delimiter with no closing delimiter after it is left as plain text.
pub fn substitute(
    text: &str,
    params: &HashMap<String, String>,
    allow_unresolved: bool,
) -> Result<String> {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN_DELIMITER) {
        let after_open = &rest[start + OPEN_DELIMITER.len()..];
        let Some(end) = after_open.find(CLOSE_DELIMITER) else {
            break;
        };

        output.push_str(&rest[..start]);

        let tag = &after_open[..end];
        let key = tag.trim();
        match params.get(key).filter(|_| !key.is_empty()) {
            Some(value) => output.push_str(&escape_value(value)?),
            None if allow_unresolved => {
                output.push_str(OPEN_DELIMITER);
                output.push_str(tag);
                output.push_str(CLOSE_DELIMITER);
            }
            None => {
                return Err(TemplateError::UnresolvedVariable {
                    token: format!("{}{}{}", OPEN_DELIMITER, tag, CLOSE_DELIMITER),
                })
            }
        }

        rest = &after_open[end + CLOSE_DELIMITER.len()..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Escape a value for embedding between the quotes of a JSON string.
fn escape_value(value: &str) -> Result<String> {
    let quoted =
        serde_json::to_string(value).map_err(|e| TemplateError::serialize(Encoding::Json, e))?;
    Ok(quoted[1..quoted.len() - 1].to_string())
}
