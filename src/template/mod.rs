// ABOUTME: Template rendering module for ApplicationSet Application templates
// ABOUTME: Provides literal substitution, Handlebars evaluation and the rendering pipeline

pub mod engine;
pub mod error;
pub mod helpers;
pub mod renderer;
pub mod substitute;

pub use engine::TemplateEngine;
pub use error::{Encoding, Result, TemplateError};
pub use renderer::{
    apply_finalizer_policy, RenderStrategy, Renderer, TemplateRenderer, RESOURCES_FINALIZER,
};
pub use substitute::substitute;
