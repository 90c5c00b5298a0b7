// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides ApplicationSet manifest builders and temporary test environments

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

use appset_render::model::ApplicationSet;

pub struct TestAppSetBuilder {
    name: String,
    go_template: bool,
    preserve_resources: Option<bool>,
    generators: Vec<String>,
    last_applied: Option<String>,
    app_name: String,
    path: String,
    server: String,
    namespace: String,
    finalizers: Vec<String>,
}

impl TestAppSetBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            go_template: false,
            preserve_resources: None,
            generators: Vec::new(),
            last_applied: None,
            app_name: "{{cluster}}-guestbook".to_string(),
            path: "applicationset/examples/guestbook/{{cluster}}".to_string(),
            server: "{{url}}".to_string(),
            namespace: "guestbook".to_string(),
            finalizers: Vec::new(),
        }
    }

    pub fn with_go_template(mut self) -> Self {
        self.go_template = true;
        self
    }

    pub fn with_preserve_resources(mut self, preserve: bool) -> Self {
        self.preserve_resources = Some(preserve);
        self
    }

    /// Add a generator as a single-line YAML flow mapping, e.g. `git: {}`
    pub fn with_generator(mut self, generator: &str) -> Self {
        self.generators.push(generator.to_string());
        self
    }

    pub fn with_last_applied(mut self, json: &str) -> Self {
        self.last_applied = Some(json.to_string());
        self
    }

    pub fn with_app_name(mut self, name: &str) -> Self {
        self.app_name = name.to_string();
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = path.to_string();
        self
    }

    pub fn with_server(mut self, server: &str) -> Self {
        self.server = server.to_string();
        self
    }

    pub fn with_finalizer(mut self, finalizer: &str) -> Self {
        self.finalizers.push(finalizer.to_string());
        self
    }

    pub fn build(&self) -> ApplicationSet {
        ApplicationSet::from_yaml(&self.generate_yaml()).expect("builder produced invalid YAML")
    }

    pub async fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.generate_yaml()).await?;
        Ok(())
    }

    pub fn generate_yaml(&self) -> String {
        let mut yaml = format!(
            "apiVersion: argoproj.io/v1alpha1\nkind: ApplicationSet\nmetadata:\n  name: {}\n",
            self.name
        );

        if let Some(ref json) = self.last_applied {
            yaml.push_str("  annotations:\n");
            yaml.push_str(&format!(
                "    kubectl.kubernetes.io/last-applied-configuration: '{}'\n",
                json
            ));
        }

        yaml.push_str("spec:\n");
        yaml.push_str(&format!("  goTemplate: {}\n", self.go_template));

        if let Some(preserve) = self.preserve_resources {
            yaml.push_str("  syncPolicy:\n");
            yaml.push_str(&format!("    preserveResourcesOnDeletion: {}\n", preserve));
        }

        if self.generators.is_empty() {
            yaml.push_str("  generators: []\n");
        } else {
            yaml.push_str("  generators:\n");
            for generator in &self.generators {
                yaml.push_str(&format!("    - {}\n", generator));
            }
        }

        yaml.push_str("  template:\n    metadata:\n");
        yaml.push_str(&format!("      name: '{}'\n", self.app_name));
        if !self.finalizers.is_empty() {
            yaml.push_str("      finalizers:\n");
            for finalizer in &self.finalizers {
                yaml.push_str(&format!("        - {}\n", finalizer));
            }
        }

        yaml.push_str("    spec:\n      project: default\n      source:\n");
        yaml.push_str("        repoURL: https://github.com/argoproj/argo-cd.git\n");
        yaml.push_str("        targetRevision: HEAD\n");
        yaml.push_str(&format!("        path: '{}'\n", self.path));
        yaml.push_str("      destination:\n");
        yaml.push_str(&format!("        server: '{}'\n", self.server));
        yaml.push_str(&format!("        namespace: '{}'\n", self.namespace));

        yaml
    }
}

pub fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.path().join(name)
    }

    pub async fn create_appset_file(&self, name: &str, builder: &TestAppSetBuilder) -> PathBuf {
        let path = self.file(&format!("{}.yaml", name));
        builder
            .write_to_file(&path)
            .await
            .expect("Failed to write ApplicationSet file");
        path
    }

    pub async fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.file(name);
        fs::write(&path, content)
            .await
            .expect("Failed to write test file");
        path
    }
}
