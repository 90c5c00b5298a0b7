// ABOUTME: ApplicationSet manifest structures and loading functionality
// ABOUTME: Defines the set spec, its Application template and the rendering policy flags

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::application::{Application, ApplicationSpec, API_VERSION};
use super::error::{ModelError, Result};
use super::generator::Generator;
use super::meta::ObjectMeta;

fn default_api_version() -> String {
    API_VERSION.to_string()
}

fn default_kind() -> String {
    "ApplicationSet".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSet {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ApplicationSetSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSetSpec {
    #[serde(default)]
    pub go_template: bool,
    #[serde(default)]
    pub generators: Vec<Generator>,
    #[serde(default)]
    pub template: ApplicationSetTemplate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync_policy: Option<SyncPolicy>,
}

/// The Application-shaped template each generated Application is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSetTemplate {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: ApplicationSpec,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPolicy {
    /// Keep the generated Application's resources when the Application is deleted.
    #[serde(default)]
    pub preserve_resources_on_deletion: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateOptions {
    /// Render with the templating language instead of literal `{{key}}` substitution.
    #[serde(rename = "goTemplate", default)]
    pub gotemplate_enabled: bool,
}

impl ApplicationSet {
    /// Parse an ApplicationSet from a YAML manifest file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ModelError::IoError)?;
        Self::from_yaml(&content)
    }

    /// Parse an ApplicationSet from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let set: ApplicationSet = serde_yaml::from_str(content).map_err(ModelError::YamlError)?;

        if set.kind != "ApplicationSet" {
            return Err(ModelError::UnexpectedKind {
                expected: "ApplicationSet".to_string(),
                found: set.kind,
            });
        }

        if set.metadata.name.trim().is_empty() {
            return Err(ModelError::MissingField("metadata.name".to_string()));
        }

        Ok(set)
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}

impl ApplicationSetSpec {
    pub fn template_options(&self) -> TemplateOptions {
        TemplateOptions {
            gotemplate_enabled: self.go_template,
        }
    }
}

impl ApplicationSetTemplate {
    pub fn to_application(&self) -> Application {
        Application {
            metadata: self.metadata.clone(),
            spec: self.spec.clone(),
            ..Application::default()
        }
    }
}
