// ABOUTME: Handlebars helper functions available to ApplicationSet template authors
// ABOUTME: Implements Sprig-named string, encoding and predicate helpers with empty-on-missing semantics

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use handlebars::{
    handlebars_helper, Context, Handlebars, Helper, HelperResult, JsonValue, Output,
    RenderContext, RenderErrorReason,
};

/// Text form of a helper argument. Missing values render as the empty string.
fn text(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn param_text(h: &Helper, index: usize) -> String {
    h.param(index).map(|p| text(p.value())).unwrap_or_default()
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&param_text(h, 0).to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&param_text(h, 0).to_lowercase())?;
    Ok(())
}

/// Title case helper - uppercases the first letter of every word
pub fn title_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = param_text(h, 0);
    let mut titled = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start && c.is_alphanumeric() {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = c.is_whitespace();
    }
    out.write(&titled)?;
    Ok(())
}

pub fn trim_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(param_text(h, 0).trim())?;
    Ok(())
}

/// `trimPrefix PREFIX VALUE`
pub fn trim_prefix_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let prefix = param_text(h, 0);
    let input = param_text(h, 1);
    out.write(input.strip_prefix(prefix.as_str()).unwrap_or(&input))?;
    Ok(())
}

/// `trimSuffix SUFFIX VALUE`
pub fn trim_suffix_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let suffix = param_text(h, 0);
    let input = param_text(h, 1);
    out.write(input.strip_suffix(suffix.as_str()).unwrap_or(&input))?;
    Ok(())
}

/// `replace OLD NEW VALUE`
pub fn replace_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let from = param_text(h, 0);
    let to = param_text(h, 1);
    let input = param_text(h, 2);
    if from.is_empty() {
        out.write(&input)?;
    } else {
        out.write(&input.replace(from.as_str(), &to))?;
    }
    Ok(())
}

/// `trunc LENGTH VALUE` - a negative length keeps the tail instead of the head
pub fn trunc_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let length = h
        .param(0)
        .and_then(|v| v.value().as_i64())
        .ok_or_else(|| RenderErrorReason::Other("trunc requires an integer length".to_string()))?;
    let input = param_text(h, 1);
    let count = input.chars().count();
    let limit = length.unsigned_abs() as usize;

    let truncated: String = if limit >= count {
        input
    } else if length < 0 {
        input.chars().skip(count - limit).collect()
    } else {
        input.chars().take(limit).collect()
    };
    out.write(&truncated)?;
    Ok(())
}

/// `default FALLBACK VALUE` - writes FALLBACK when VALUE is empty or missing
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let fallback = param_text(h, 0);
    let value = param_text(h, 1);

    let result = if value.is_empty() { fallback } else { value };
    out.write(&result)?;
    Ok(())
}

/// Wraps the value in double quotes, escaping it as a JSON string
pub fn quote_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let quoted = serde_json::to_string(&param_text(h, 0))
        .map_err(|e| RenderErrorReason::Other(format!("quote failed: {}", e)))?;
    out.write(&quoted)?;
    Ok(())
}

pub fn squote_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&format!("'{}'", param_text(h, 0)))?;
    Ok(())
}

/// Base64 encode helper
pub fn b64enc_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let encoded = BASE64.encode(param_text(h, 0).as_bytes());
    out.write(&encoded)?;
    Ok(())
}

/// Base64 decode helper
pub fn b64dec_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let decoded_bytes = BASE64
        .decode(param_text(h, 0))
        .map_err(|e| RenderErrorReason::Other(format!("Base64 decode error: {}", e)))?;

    let decoded_str = String::from_utf8(decoded_bytes)
        .map_err(|e| RenderErrorReason::Other(format!("UTF-8 decode error: {}", e)))?;

    out.write(&decoded_str)?;
    Ok(())
}

/// `join SEPARATOR LIST`
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let separator = param_text(h, 0);

    let joined = match h.param(1).map(|v| v.value()) {
        Some(JsonValue::Array(items)) => items.iter().map(text).collect::<Vec<_>>().join(&separator),
        Some(other) => text(other),
        None => String::new(),
    };
    out.write(&joined)?;
    Ok(())
}

pub fn to_json_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).map(|v| v.value().clone()).unwrap_or(JsonValue::Null);
    let json = serde_json::to_string(&value)
        .map_err(|e| RenderErrorReason::Other(format!("toJson failed: {}", e)))?;
    out.write(&json)?;
    Ok(())
}

// Predicates return real booleans so they work inside `{{#if (...)}}`.
handlebars_helper!(contains_helper: |substr: Json, value: Json| text(value).contains(text(substr).as_str()));
handlebars_helper!(has_prefix_helper: |prefix: Json, value: Json| text(value).starts_with(text(prefix).as_str()));
handlebars_helper!(has_suffix_helper: |suffix: Json, value: Json| text(value).ends_with(text(suffix).as_str()));

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("title", Box::new(title_helper));
    handlebars.register_helper("trim", Box::new(trim_helper));
    handlebars.register_helper("trimPrefix", Box::new(trim_prefix_helper));
    handlebars.register_helper("trimSuffix", Box::new(trim_suffix_helper));
    handlebars.register_helper("replace", Box::new(replace_helper));
    handlebars.register_helper("trunc", Box::new(trunc_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("quote", Box::new(quote_helper));
    handlebars.register_helper("squote", Box::new(squote_helper));
    handlebars.register_helper("b64enc", Box::new(b64enc_helper));
    handlebars.register_helper("b64dec", Box::new(b64dec_helper));
    handlebars.register_helper("join", Box::new(join_helper));
    handlebars.register_helper("toJson", Box::new(to_json_helper));
    handlebars.register_helper("contains", Box::new(contains_helper));
    handlebars.register_helper("hasPrefix", Box::new(has_prefix_helper));
    handlebars.register_helper("hasSuffix", Box::new(has_suffix_helper));
}
