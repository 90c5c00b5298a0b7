// ABOUTME: Main library module for appset-render
// ABOUTME: Exports the manifest model, template rendering and generator inspection APIs

pub mod cli;
pub mod inspect;
pub mod model;
pub mod template;

// Re-export commonly used types
pub use inspect::{check_invalid_generators, find_invalid_generators, InvalidGenerators};
pub use model::{Application, ApplicationSet, Generator, ObjectMeta, SyncPolicy, TemplateOptions};
pub use template::{Renderer, TemplateError, TemplateRenderer, RESOURCES_FINALIZER};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
