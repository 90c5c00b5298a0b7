// ABOUTME: Diagnostics for ApplicationSet generator definitions
// ABOUTME: Detects unrecognized generators and recovers their names from cached manifests

pub mod generators;
pub mod last_applied;

pub use generators::{check_invalid_generators, find_invalid_generators, InvalidGenerators};
pub use last_applied::recover_generator_name;
