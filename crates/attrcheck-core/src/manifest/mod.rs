use std::path::{Path, PathBuf};

use kit::indexmap::IndexMap;
use kit::types::config::ConfigReader;
use kit::types::diagnostics::{Diagnostic, Diagnostics};
use kit::types::expression::ExpressionParseError;

use crate::validation::kinds::ResourceKind;
use crate::validation::ConfigValidator;

mod definition;

pub use definition::ValidatorDefinition;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("validator manifest malformatted: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("validator manifest malformatted: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unable to read validator manifest {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid path expression in validators of {kind} '{name}': {source}")]
    InvalidExpression { kind: ResourceKind, name: String, source: ExpressionParseError },
    #[error("no validators declared for {kind} '{name}'")]
    UnknownType { kind: ResourceKind, name: String },
}

impl From<ManifestError> for Diagnostic {
    fn from(err: ManifestError) -> Self {
        diagnosed_error!("Invalid Validator Manifest", "{}", err)
    }
}

/// Declarative list of config validators per configurable type.
///
/// ```yaml
/// provider:
///   - at_least_one_of: [endpoint, region]
/// resources:
///   example_instance:
///     - exactly_one_of: [image, template]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorManifest {
    pub provider: Vec<ValidatorDefinition>,
    pub resources: IndexMap<String, Vec<ValidatorDefinition>>,
    pub data_sources: IndexMap<String, Vec<ValidatorDefinition>>,
    pub ephemeral_resources: IndexMap<String, Vec<ValidatorDefinition>>,
    pub list_resources: IndexMap<String, Vec<ValidatorDefinition>>,
    pub actions: IndexMap<String, Vec<ValidatorDefinition>>,
}

impl ValidatorManifest {
    /// Definitions are written as single-key maps (`- conflicting: [a, b]`)
    /// rather than YAML tags, at every nesting level.
    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        let deserializer = serde_yml::Deserializer::from_str(content);
        Ok(serde_yml::with::singleton_map_recursive::deserialize(deserializer)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a manifest from disk. Files ending in `.json` are read as JSON,
    /// anything else as YAML.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ManifestError::Io { path: path.to_path_buf(), source })?;
        log::debug!("loading validator manifest from {}", path.display());
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_yaml_str(&content),
        }
    }

    fn definitions(&self, kind: ResourceKind, name: &str) -> Option<&[ValidatorDefinition]> {
        let by_name = match kind {
            ResourceKind::Provider => return Some(&self.provider),
            ResourceKind::Resource => &self.resources,
            ResourceKind::DataSource => &self.data_sources,
            ResourceKind::EphemeralResource => &self.ephemeral_resources,
            ResourceKind::ListResource => &self.list_resources,
            ResourceKind::Action => &self.actions,
        };
        by_name.get(name).map(|defs| defs.as_slice())
    }

    /// Build the validators declared for `name`. The provider has a single
    /// set of validators, so `name` is ignored for it.
    pub fn validators(
        &self,
        kind: ResourceKind,
        name: &str,
    ) -> Result<Vec<Box<dyn ConfigValidator>>, ManifestError> {
        let Some(definitions) = self.definitions(kind, name) else {
            return Err(ManifestError::UnknownType { kind, name: name.to_string() });
        };
        log::debug!("building {} validator(s) for {} '{}'", definitions.len(), kind, name);
        definition::build_all(definitions).map_err(|source| ManifestError::InvalidExpression {
            kind,
            name: name.to_string(),
            source,
        })
    }

    /// Run every validator declared for `name` against `config`, through the
    /// adapter of `kind`.
    pub fn validate(
        &self,
        kind: ResourceKind,
        name: &str,
        config: &dyn ConfigReader,
    ) -> Result<Diagnostics, ManifestError> {
        let mut diagnostics = Diagnostics::new();
        for validator in self.validators(kind, name)? {
            diagnostics.append(kind.validate(validator.as_ref(), config));
        }
        Ok(diagnostics)
    }
}
