use super::app_name::{AppName, VersionTag};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Federated app manifest as published by a build or deploy step
///
/// ```json
/// {
///   "name": "shell",
///   "host": "shell",
///   "version": "1.1",
///   "remotes": { "cart": "1.0" },
///   "shared": { "react": { "singleton": true, "requiredVersion": "^18.0.0" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FederatedAppManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remotes: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<SharedDeclarations>,
}

/// The `shared` section: either a list or a map of declarations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharedDeclarations {
    List(Vec<SharedListEntry>),
    Map(BTreeMap<String, SharedSpec>),
}

/// One element of a list-form `shared` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharedListEntry {
    /// Bare dependency name, no version pinned
    Name(String),
    Map(BTreeMap<String, SharedSpec>),
}

/// Version declaration of a single shared dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharedSpec {
    Version(String),
    Module(SharedModule),
}

/// Object form of a shared dependency (`{ singleton, requiredVersion }`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedModule {
    #[serde(default)]
    pub singleton: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_version: Option<String>,
}

impl SharedSpec {
    fn version(&self) -> &str {
        match self {
            SharedSpec::Version(version) => version,
            SharedSpec::Module(module) => module.required_version.as_deref().unwrap_or(""),
        }
    }

    fn singleton(&self) -> bool {
        matches!(self, SharedSpec::Module(module) if module.singleton)
    }
}

/// A remote declared by a manifest
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteDeclaration {
    pub name: AppName,
    pub version: VersionTag,
}

/// A shared dependency declared by a manifest, flattened from any form
#[derive(Debug, Clone, PartialEq)]
pub struct SharedEntry {
    pub name: AppName,
    pub version: VersionTag,
    pub singleton: bool,
}

/// Manifest whose names and versions passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedManifest {
    pub name: AppName,
    /// `None` when the manifest omits `host` or sends an empty string
    pub host: Option<AppName>,
    pub version: VersionTag,
    pub remotes: Vec<RemoteDeclaration>,
    pub shared: Vec<SharedEntry>,
}

impl ValidatedManifest {
    /// Host stored on newly created nodes (`""` when absent)
    pub fn host_or_empty(&self) -> &str {
        self.host.as_ref().map(AppName::as_str).unwrap_or("")
    }

    /// Host that must be linked to this app, if it is not the app itself
    pub fn foreign_host(&self) -> Option<&AppName> {
        self.host.as_ref().filter(|host| **host != self.name)
    }

    pub fn is_host(&self) -> bool {
        self.host.as_ref() == Some(&self.name)
    }
}

impl FederatedAppManifest {
    /// Validates every name and version and flattens `shared`
    ///
    /// # Errors
    /// Returns `AtlasError::InvalidManifest` for the first invalid field.
    pub fn validate(&self) -> Result<ValidatedManifest> {
        let name = AppName::new(self.name.clone())?;

        let host = match self.host.as_deref() {
            None | Some("") => None,
            Some(host) => Some(AppName::new(host)?),
        };

        let version = VersionTag::new(self.version.clone().unwrap_or_default())?;

        let remotes = self
            .remotes
            .iter()
            .flatten()
            .map(|(remote, version)| {
                Ok(RemoteDeclaration {
                    name: AppName::new(remote.clone())?,
                    version: VersionTag::new(version.clone())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let shared = self
            .shared_specs()
            .into_iter()
            .map(|(dependency, spec)| {
                Ok(SharedEntry {
                    name: AppName::new(dependency)?,
                    version: VersionTag::new(spec.map(SharedSpec::version).unwrap_or(""))?,
                    singleton: spec.is_some_and(SharedSpec::singleton),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ValidatedManifest {
            name,
            host,
            version,
            remotes,
            shared,
        })
    }

    fn shared_specs(&self) -> Vec<(&str, Option<&SharedSpec>)> {
        match &self.shared {
            None => Vec::new(),
            Some(SharedDeclarations::Map(map)) => map
                .iter()
                .map(|(name, spec)| (name.as_str(), Some(spec)))
                .collect(),
            Some(SharedDeclarations::List(entries)) => entries
                .iter()
                .flat_map(|entry| match entry {
                    SharedListEntry::Name(name) => vec![(name.as_str(), None)],
                    SharedListEntry::Map(map) => map
                        .iter()
                        .map(|(name, spec)| (name.as_str(), Some(spec)))
                        .collect(),
                })
                .collect(),
        }
    }
}
