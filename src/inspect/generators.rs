// ABOUTME: Detection of ApplicationSet generators with no recognized type
// ABOUTME: Collects recoverable generator names and reports them as warnings

use std::collections::BTreeSet;
use tracing::warn;

use super::last_applied::recover_generator_name;
use crate::model::ApplicationSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidGenerators {
    /// At least one top-level generator has no recognized type.
    pub any_invalid: bool,
    /// Names recovered for those generators, sorted and deduplicated.
    pub names: BTreeSet<String>,
}

impl InvalidGenerators {
    /// Human-readable report for the set, `None` when every generator is recognized.
    pub fn summary(&self, set_name: &str) -> Option<String> {
        if !self.names.is_empty() {
            let names: Vec<&str> = self.names.iter().map(String::as_str).collect();
            Some(format!(
                "ApplicationSet {} contains unrecognized generators: {}",
                set_name,
                names.join(", ")
            ))
        } else if self.any_invalid {
            Some(format!(
                "ApplicationSet {} contains unrecognized generators",
                set_name
            ))
        } else {
            None
        }
    }
}

/// Find top-level generators with no recognized type and try to name them.
pub fn find_invalid_generators(set: &ApplicationSet) -> InvalidGenerators {
    let mut result = InvalidGenerators::default();

    for (index, generator) in set.spec.generators.iter().enumerate() {
        if generator.is_recognized() {
            continue;
        }

        result.any_invalid = true;
        if let Some(name) = recover_generator_name(&set.metadata, index) {
            result.names.insert(name);
        }
    }

    result
}

/// Like [`find_invalid_generators`], also logging a warning when any are found.
pub fn check_invalid_generators(set: &ApplicationSet) -> InvalidGenerators {
    let result = find_invalid_generators(set);
    if let Some(message) = result.summary(set.name()) {
        warn!("{}", message);
    }
    result
}
