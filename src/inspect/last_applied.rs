// ABOUTME: Best-effort lookup of generator type names in the last-applied-configuration annotation
// ABOUTME: Every failure is logged as a warning and yields no name

use serde_json::Value;
use tracing::{debug, warn};

use crate::model::{ObjectMeta, LAST_APPLIED_CONFIG_ANNOTATION};

/// Name of the generator at `index` in the cached `spec.generators` list.
///
/// The cached manifest is whatever was last applied with kubectl, so the entry
/// at `index` may not correspond to the live generator at the same position.
pub fn recover_generator_name(metadata: &ObjectMeta, index: usize) -> Option<String> {
    let config = metadata
        .annotation(LAST_APPLIED_CONFIG_ANNOTATION)
        .unwrap_or_default();

    let values: Value = match serde_json::from_str(config) {
        Ok(values) => values,
        Err(e) => {
            warn!(
                "couldn't unmarshal {}: {:?} ({})",
                LAST_APPLIED_CONFIG_ANNOTATION, config, e
            );
            return None;
        }
    };

    let Some(spec) = values.get("spec").and_then(Value::as_object) else {
        warn!(
            "couldn't get spec from {} annotation",
            LAST_APPLIED_CONFIG_ANNOTATION
        );
        return None;
    };

    let Some(generators) = spec.get("generators").and_then(Value::as_array) else {
        warn!(
            "couldn't get generators from {} annotation",
            LAST_APPLIED_CONFIG_ANNOTATION
        );
        return None;
    };

    let Some(generator) = generators.get(index) else {
        warn!(
            "index {} out of range {} for generator in {}",
            index,
            generators.len(),
            LAST_APPLIED_CONFIG_ANNOTATION
        );
        return None;
    };

    let Some(generator) = generator.as_object() else {
        warn!(
            "couldn't get generator from {} annotation",
            LAST_APPLIED_CONFIG_ANNOTATION
        );
        return None;
    };

    let name = generator.keys().next().cloned();
    if name.is_none() {
        debug!("generator {} in {} has no keys", index, LAST_APPLIED_CONFIG_ANNOTATION);
    }
    name
}
