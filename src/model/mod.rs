// ABOUTME: Data model for Argo CD Applications, ApplicationSets and generators
// ABOUTME: Exports manifest types, loaders and the polymorphic generator union

pub mod application;
pub mod application_set;
pub mod error;
pub mod generator;
pub mod meta;

pub use application::{
    Application, ApplicationDestination, ApplicationSource, ApplicationSpec, AppSyncPolicy,
    HelmParameter, HelmSource, SyncPolicyAutomated,
};
pub use application_set::{
    ApplicationSet, ApplicationSetSpec, ApplicationSetTemplate, SyncPolicy, TemplateOptions,
};
pub use error::{ModelError, Result};
pub use generator::{
    GitGenerator, GitPathEntry, Generator, GeneratorConfig, ClusterGenerator, ListGenerator,
    MatrixGenerator, MergeGenerator,
};
pub use meta::{ObjectMeta, LAST_APPLIED_CONFIG_ANNOTATION};
