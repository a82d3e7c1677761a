use explorer_stacks_api::TokenMetadata;
use serde_json::Value;

/// Best image URL in a metadata document.
///
/// Looks at the cached thumbnail, then the cached image, then the original
/// image, and takes the first non-empty one. Returns `None` unless that value
/// is a string.
pub fn token_image_url(metadata: &TokenMetadata) -> Option<String> {
    [
        &metadata.cached_thumbnail_image,
        &metadata.cached_image,
        &metadata.image,
    ]
    .into_iter()
    .flatten()
    .find(|value| is_truthy(value))
    .and_then(|value| value.as_str().map(str::to_string))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
