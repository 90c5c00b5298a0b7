// ABOUTME: Command implementations for the appset-render CLI
// ABOUTME: Handles the render and check commands over ApplicationSet manifests

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::config::{Config, OutputFormat};
use crate::inspect::check_invalid_generators;
use crate::model::{Application, ApplicationSet};
use crate::template::{Renderer, TemplateRenderer};

/// Render the Application template of an ApplicationSet
pub async fn render_application_set(
    appset_path: PathBuf,
    format: OutputFormat,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let set = load_application_set(&appset_path).await?;
    info!("Loaded ApplicationSet: {}", set.name());

    check_invalid_generators(&set);

    let template = set.spec.template.to_application();
    let template_options = set.spec.template_options();
    let renderer = TemplateRenderer::new();
    let rendered = renderer
        .render_template_params(
            Some(&template),
            set.spec.sync_policy.as_ref(),
            Some(&template_options),
            &config.params,
        )
        .with_context(|| format!("Failed to render ApplicationSet '{}'", set.name()))?;

    info!(
        "Rendered Application '{}' with {} parameters",
        rendered.metadata.name,
        config.params.len()
    );

    let content = format_application(&rendered, format)?;
    match output {
        Some(path) => {
            fs::write(&path, content)
                .await
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!("Application written to: {}", path.display());
        }
        None => print!("{}", content),
    }

    Ok(())
}

/// Report unrecognized generators in an ApplicationSet
pub async fn check_application_set(appset_path: PathBuf) -> Result<()> {
    let set = load_application_set(&appset_path).await?;
    let result = check_invalid_generators(&set);

    match result.summary(set.name()) {
        Some(message) => Err(anyhow::anyhow!(message)),
        None => {
            println!(
                "✓ ApplicationSet '{}': all {} generators recognized",
                set.name(),
                set.spec.generators.len()
            );
            Ok(())
        }
    }
}

/// Read a flat YAML map of template parameters
pub async fn load_params_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read parameters file '{}'", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("Parameters file '{}' must be a map of strings", path.display()))
}

async fn load_application_set(path: &Path) -> Result<ApplicationSet> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read ApplicationSet '{}'", path.display()))?;
    ApplicationSet::from_yaml(&content)
        .with_context(|| format!("Failed to parse ApplicationSet '{}'", path.display()))
}

fn format_application(application: &Application, format: OutputFormat) -> Result<String> {
    let content = match format {
        OutputFormat::Yaml => serde_yaml::to_string(application)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(application)?;
            json.push('\n');
            json
        }
    };
    Ok(content)
}
