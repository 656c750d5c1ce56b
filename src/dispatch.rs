//! API version resolution and operation dispatch.
//!
//! Every operation group (`namespaces`, `event_hubs`, ...) exists at one or
//! more API versions. On each access, the [`Dispatcher`] resolves which
//! version to use, looks up the operation table and model set registered for
//! it, and hands back a [`Binding`] that ties the two together with a
//! version-scoped codec. Nothing here performs I/O.

use std::{fmt, io, sync::Arc};

use tracing::debug;

use crate::{
    ClientConfiguration,
    codec::{Deserializer, Serializer},
    models::ModelSet,
    operations::{OperationDef, OperationTable},
};

mod catalog;
mod profile;
mod registry;

pub use catalog::*;
pub use profile::*;
pub use registry::*;

/// The version used for any operation group with no explicit version and no
/// profile entry.
pub const DEFAULT_API_VERSION: &str = "2017-04-01";

/// An error encountered while resolving or binding an operation group.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The resolved version is not available for the group, or not
    /// available at all.
    #[error("{}", unsupported_message(.version, .group))]
    UnsupportedVersion {
        /// The requested version.
        version: String,
        /// The operation group, if resolution was for a specific group.
        group: Option<String>,
    },
    /// The operation group is not in the catalog.
    #[error("Unknown operation group: {0}")]
    UnknownOperationGroup(String),
    /// The operation group has no operation with that name at the bound
    /// version.
    #[error("Operation group {group} has no operation {operation:?} in API version {api_version}")]
    UnknownOperation {
        /// The operation group.
        group: &'static str,
        /// The bound version.
        api_version: &'static str,
        /// The requested operation.
        operation: String,
    },
    /// The operation was called with a type that doesn't match its declared
    /// request or response model.
    #[error("Operation {operation} expects {expected}, not {found}")]
    UnexpectedModel {
        /// The operation name.
        operation: &'static str,
        /// What the operation declares.
        expected: String,
        /// What the caller supplied.
        found: String,
    },
    /// The catalog lists a (group, version) pair the registry has no
    /// implementation for.
    #[error("No implementation registered for {group} at API version {version}")]
    MissingImplementation {
        /// The operation group.
        group: String,
        /// The API version.
        version: String,
    },
}

fn unsupported_message(version: &str, group: &Option<String>) -> String {
    match group {
        Some(group) => format!("API version {version} is not available for operation group {group}"),
        None => format!("API version {version} is not available"),
    }
}

/// An error encountered while reading a catalog or profile.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read file")]
    Io(#[from] io::Error),
    /// The file contents are invalid.
    #[error("Invalid YAML")]
    Invalid(#[from] serde_yaml::Error),
}

/// Resolves the API version for an operation group.
///
/// Resolution is a pure function of the inputs held here:
///
/// 1. the explicit API version, if one was given;
/// 2. the profile's pin for the group, then the profile's wildcard;
/// 3. the default version.
///
/// The result must be listed for the group in the catalog. There is no
/// nearest-version fallback.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    catalog: ApiVersionCatalog,
    profile: ApiProfile,
    api_version: Option<String>,
    default_api_version: String,
}

impl VersionResolver {
    /// A resolver over `catalog` with the default profile, no explicit
    /// version, and [`DEFAULT_API_VERSION`] as the default.
    pub fn new(catalog: ApiVersionCatalog) -> Self {
        Self {
            catalog,
            profile: ApiProfile::default_profile(),
            api_version: None,
            default_api_version: DEFAULT_API_VERSION.to_owned(),
        }
    }

    /// Use the given profile.
    pub fn with_profile(self, profile: ApiProfile) -> Self {
        Self { profile, ..self }
    }

    /// Force every group to the given version.
    pub fn with_api_version(self, api_version: Option<String>) -> Self {
        Self {
            api_version,
            ..self
        }
    }

    /// Replace the default version.
    pub fn with_default_api_version(self, version: impl Into<String>) -> Self {
        Self {
            default_api_version: version.into(),
            ..self
        }
    }

    /// The catalog.
    pub fn catalog(&self) -> &ApiVersionCatalog {
        &self.catalog
    }

    /// The profile.
    pub fn profile(&self) -> &ApiProfile {
        &self.profile
    }

    /// The explicit version, if any.
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Resolve the version to use for `group`.
    pub fn get_api_version(&self, group: &str) -> Result<&str, DispatchError> {
        let Some(versions) = self.catalog.versions(group) else {
            return Err(DispatchError::UnknownOperationGroup(group.to_owned()));
        };

        let resolved = self
            .api_version
            .as_deref()
            .or_else(|| self.profile.version_for(group))
            .unwrap_or(&self.default_api_version);

        if versions.contains(resolved) {
            Ok(resolved)
        } else {
            Err(DispatchError::UnsupportedVersion {
                version: resolved.to_owned(),
                group: Some(group.to_owned()),
            })
        }
    }
}

/// Resolves versions and binds operation groups to their implementation.
///
/// Immutable after construction and cheap to clone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    resolver: Arc<VersionResolver>,
    registry: Arc<OperationRegistry>,
    config: Arc<ClientConfiguration>,
}

impl Dispatcher {
    /// Create a dispatcher. Fails if the resolver's catalog lists a (group,
    /// version) pair that the registry has no table or model set for.
    pub fn new(
        resolver: VersionResolver,
        registry: Arc<OperationRegistry>,
        config: Arc<ClientConfiguration>,
    ) -> Result<Self, DispatchError> {
        for (group, versions) in resolver.catalog().iter() {
            for version in versions {
                if registry.get(group, version).is_none() || registry.models(version).is_none() {
                    return Err(DispatchError::MissingImplementation {
                        group: group.to_owned(),
                        version: version.clone(),
                    });
                }
            }
        }

        Ok(Self {
            resolver: Arc::new(resolver),
            registry,
            config,
        })
    }

    /// The resolver.
    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    /// The catalog.
    pub fn catalog(&self) -> &ApiVersionCatalog {
        self.resolver.catalog()
    }

    /// The shared client configuration.
    pub fn config(&self) -> &Arc<ClientConfiguration> {
        &self.config
    }

    /// Resolve the API version for an operation group.
    pub fn get_api_version(&self, group: &str) -> Result<&str, DispatchError> {
        self.resolver.get_api_version(group)
    }

    /// Resolve the version for `group` and bind its operation table and
    /// codec. A fresh binding is returned on every call.
    pub fn bind(&self, group: &str) -> Result<Binding, DispatchError> {
        let api_version = self.get_api_version(group)?;

        let missing = || DispatchError::MissingImplementation {
            group: group.to_owned(),
            version: api_version.to_owned(),
        };
        let table = self.registry.get(group, api_version).ok_or_else(missing)?;
        let models = self.registry.models(api_version).ok_or_else(missing)?;

        debug!(group, api_version, "bound operation group");

        Ok(Binding {
            table,
            config: self.config.clone(),
            serializer: Serializer::new(models),
            deserializer: Deserializer::new(models),
        })
    }

    /// The models of an API version.
    pub fn list_models(&self, api_version: &str) -> Result<&'static ModelSet, DispatchError> {
        let unsupported = || DispatchError::UnsupportedVersion {
            version: api_version.to_owned(),
            group: None,
        };

        if !self.catalog().has_version(api_version) {
            return Err(unsupported());
        }

        self.registry.models(api_version).ok_or_else(unsupported)
    }
}

/// An operation group bound to one API version: its operation table, the
/// shared client configuration, and a codec over that version's models.
#[derive(Clone)]
pub struct Binding {
    table: &'static OperationTable,
    config: Arc<ClientConfiguration>,
    serializer: Serializer,
    deserializer: Deserializer,
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("group", &self.table.group)
            .field("api_version", &self.table.api_version)
            .finish_non_exhaustive()
    }
}

fn describe(model: Option<&str>, pageable: bool) -> String {
    match (model, pageable) {
        (None, _) => "no body".to_owned(),
        (Some(m), false) => m.to_owned(),
        (Some(m), true) => format!("pages of {m}"),
    }
}

impl Binding {
    /// The operation group.
    pub fn group(&self) -> &'static str {
        self.table.group
    }

    /// The bound API version.
    pub fn api_version(&self) -> &'static str {
        self.table.api_version
    }

    /// The operation table.
    pub fn table(&self) -> &'static OperationTable {
        self.table
    }

    /// The shared client configuration.
    pub fn config(&self) -> &ClientConfiguration {
        &self.config
    }

    /// The serializer for request bodies.
    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    /// The deserializer for response bodies.
    pub fn deserializer(&self) -> &Deserializer {
        &self.deserializer
    }

    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Result<&'static OperationDef, DispatchError> {
        self.table
            .get(name)
            .ok_or_else(|| DispatchError::UnknownOperation {
                group: self.table.group,
                api_version: self.table.api_version,
                operation: name.to_owned(),
            })
    }

    /// Look up an operation and check that the caller's request and response
    /// models match what it declares.
    pub(crate) fn checked_operation(
        &self,
        name: &str,
        request: Option<&str>,
        response: Option<&str>,
        pageable: bool,
    ) -> Result<&'static OperationDef, DispatchError> {
        let op = self.operation(name)?;

        if op.request_model != request {
            return Err(DispatchError::UnexpectedModel {
                operation: op.name,
                expected: describe(op.request_model, false),
                found: describe(request, false),
            });
        }

        if op.response_model != response || op.pageable != pageable {
            return Err(DispatchError::UnexpectedModel {
                operation: op.name,
                expected: describe(op.response_model, op.pageable),
                found: describe(response, pageable),
            });
        }

        Ok(op)
    }
}
