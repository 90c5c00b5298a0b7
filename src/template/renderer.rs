// ABOUTME: Renders Application templates by round-tripping them through text
// ABOUTME: Dispatches to literal substitution or Handlebars and applies the finalizer policy

use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

use super::engine::TemplateEngine;
use super::error::{Encoding, Result, TemplateError};
use super::substitute::substitute;
use crate::model::{Application, SyncPolicy, TemplateOptions};

/// Finalizer that makes Argo CD cascade-delete an Application's resources.
pub const RESOURCES_FINALIZER: &str = "resources-finalizer.argocd.argoproj.io";

/// How parameters are substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// `{{key}}` replacement over JSON text with escaped values.
    Substitution,
    /// Full Handlebars evaluation over YAML text, values unescaped.
    Handlebars,
}

impl RenderStrategy {
    pub fn from_options(options: Option<&TemplateOptions>) -> Self {
        match options {
            Some(options) if options.gotemplate_enabled => RenderStrategy::Handlebars,
            _ => RenderStrategy::Substitution,
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            RenderStrategy::Substitution => Encoding::Json,
            RenderStrategy::Handlebars => Encoding::Yaml,
        }
    }
}

pub trait Renderer {
    /// Substitute `params` into `template` and return the materialized Application.
    ///
    /// With no parameters the template itself is returned borrowed; otherwise
    /// the result is a fresh copy and `template` is left untouched.
    fn render_template_params<'a>(
        &self,
        template: Option<&'a Application>,
        sync_policy: Option<&SyncPolicy>,
        template_options: Option<&TemplateOptions>,
        params: &HashMap<String, String>,
    ) -> Result<Cow<'a, Application>>;
}

#[derive(Clone, Default)]
pub struct TemplateRenderer {
    engine: TemplateEngine,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Access the Handlebars engine, e.g. to register extra helpers
    pub fn engine_mut(&mut self) -> &mut TemplateEngine {
        &mut self.engine
    }

    fn render_with(
        &self,
        strategy: RenderStrategy,
        template: &Application,
        params: &HashMap<String, String>,
    ) -> Result<Application> {
        let encoding = strategy.encoding();

        match strategy {
            RenderStrategy::Substitution => {
                let text = serde_json::to_string(template)
                    .map_err(|e| TemplateError::serialize(encoding, e))?;
                let replaced = substitute(&text, params, true)?;
                serde_json::from_str(&replaced).map_err(|e| TemplateError::deserialize(encoding, e))
            }
            RenderStrategy::Handlebars => {
                let text = serde_yaml::to_string(template)
                    .map_err(|e| TemplateError::serialize(encoding, e))?;
                let replaced = self.engine.evaluate(&text, params)?;
                serde_yaml::from_str(&replaced).map_err(|e| TemplateError::deserialize(encoding, e))
            }
        }
    }
}

impl Renderer for TemplateRenderer {
    fn render_template_params<'a>(
        &self,
        template: Option<&'a Application>,
        sync_policy: Option<&SyncPolicy>,
        template_options: Option<&TemplateOptions>,
        params: &HashMap<String, String>,
    ) -> Result<Cow<'a, Application>> {
        let template = template.ok_or(TemplateError::EmptyTemplate)?;

        if params.is_empty() {
            return Ok(Cow::Borrowed(template));
        }

        let strategy = RenderStrategy::from_options(template_options);
        debug!(
            "Rendering template '{}' with {} parameters ({:?} over {})",
            template.metadata.name,
            params.len(),
            strategy,
            strategy.encoding()
        );

        let mut rendered = self.render_with(strategy, template, params)?;
        apply_finalizer_policy(&mut rendered, sync_policy);

        Ok(Cow::Owned(rendered))
    }
}

/// Add [`RESOURCES_FINALIZER`] when the Application has no finalizers and
/// resources are not meant to be preserved on deletion. Existing finalizers
/// are never touched.
pub fn apply_finalizer_policy(application: &mut Application, sync_policy: Option<&SyncPolicy>) {
    let preserve = sync_policy.is_some_and(|policy| policy.preserve_resources_on_deletion);

    if !preserve && application.metadata.finalizers.is_empty() {
        application.metadata.finalizers = vec![RESOURCES_FINALIZER.to_string()];
    }
}
