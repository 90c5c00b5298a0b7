// ABOUTME: Polymorphic ApplicationSet generator definitions
// ABOUTME: Maps the one-populated-key wire shape onto a tagged union with an explicit unrecognized state

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry of `spec.generators`.
///
/// On the wire a generator is a record with one populated key naming its
/// type. A record where none of the known keys is populated (for example a
/// generator type this crate does not know about, whose key is dropped on
/// decode) becomes [`Generator::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeneratorSlots", into = "GeneratorSlots")]
pub enum Generator {
    List(ListGenerator),
    Clusters(ClusterGenerator),
    Git(GitGenerator),
    ScmProvider(GeneratorConfig),
    ClusterDecisionResource(GeneratorConfig),
    PullRequest(GeneratorConfig),
    Matrix(MatrixGenerator),
    Merge(MergeGenerator),
    Unrecognized,
}

impl Generator {
    /// Wire name of the active variant, `None` when unrecognized.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Generator::List(_) => Some("list"),
            Generator::Clusters(_) => Some("clusters"),
            Generator::Git(_) => Some("git"),
            Generator::ScmProvider(_) => Some("scmProvider"),
            Generator::ClusterDecisionResource(_) => Some("clusterDecisionResource"),
            Generator::PullRequest(_) => Some("pullRequest"),
            Generator::Matrix(_) => Some("matrix"),
            Generator::Merge(_) => Some("merge"),
            Generator::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        self.kind().is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListGenerator {
    pub elements: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterGenerator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Value>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub values: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GitGenerator {
    #[serde(rename = "repoURL")]
    pub repo_url: String,
    pub revision: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<GitPathEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<GitPathEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitPathEntry {
    pub path: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exclude: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixGenerator {
    pub generators: Vec<Generator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeGenerator {
    pub merge_keys: Vec<String>,
    pub generators: Vec<Generator>,
}

/// Untyped body for generator kinds whose fields are passed through as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorConfig(pub Map<String, Value>);

/// Wire representation: every known kind as an optional slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratorSlots {
    #[serde(skip_serializing_if = "Option::is_none")]
    list: Option<ListGenerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clusters: Option<ClusterGenerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    git: Option<GitGenerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scm_provider: Option<GeneratorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cluster_decision_resource: Option<GeneratorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request: Option<GeneratorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<MatrixGenerator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    merge: Option<MergeGenerator>,
}

impl From<GeneratorSlots> for Generator {
    fn from(slots: GeneratorSlots) -> Self {
        // First populated slot wins, in declaration order.
        if let Some(list) = slots.list {
            Generator::List(list)
        } else if let Some(clusters) = slots.clusters {
            Generator::Clusters(clusters)
        } else if let Some(git) = slots.git {
            Generator::Git(git)
        } else if let Some(config) = slots.scm_provider {
            Generator::ScmProvider(config)
        } else if let Some(config) = slots.cluster_decision_resource {
            Generator::ClusterDecisionResource(config)
        } else if let Some(config) = slots.pull_request {
            Generator::PullRequest(config)
        } else if let Some(matrix) = slots.matrix {
            Generator::Matrix(matrix)
        } else if let Some(merge) = slots.merge {
            Generator::Merge(merge)
        } else {
            Generator::Unrecognized
        }
    }
}

impl From<Generator> for GeneratorSlots {
    fn from(generator: Generator) -> Self {
        let mut slots = GeneratorSlots::default();
        match generator {
            Generator::List(list) => slots.list = Some(list),
            Generator::Clusters(clusters) => slots.clusters = Some(clusters),
            Generator::Git(git) => slots.git = Some(git),
            Generator::ScmProvider(config) => slots.scm_provider = Some(config),
            Generator::ClusterDecisionResource(config) => {
                slots.cluster_decision_resource = Some(config)
            }
            Generator::PullRequest(config) => slots.pull_request = Some(config),
            Generator::Matrix(matrix) => slots.matrix = Some(matrix),
            Generator::Merge(merge) => slots.merge = Some(merge),
            Generator::Unrecognized => {}
        }
        slots
    }
}
