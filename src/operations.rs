//! Operation tables, one per (operation group, API version).
//!
//! A table lists what a group can do at one version: the operation name, its
//! HTTP verb and path template, and the models it sends and receives. Tables
//! are plain static data; [`crate::OperationRegistry`] indexes them.

use std::fmt;

/// The `clusters` operation group.
pub const CLUSTERS: &str = "clusters";
/// The `configuration` operation group.
pub const CONFIGURATION: &str = "configuration";
/// The `consumer_groups` operation group.
pub const CONSUMER_GROUPS: &str = "consumer_groups";
/// The `disaster_recovery_configs` operation group.
pub const DISASTER_RECOVERY_CONFIGS: &str = "disaster_recovery_configs";
/// The `event_hubs` operation group.
pub const EVENT_HUBS: &str = "event_hubs";
/// The `namespaces` operation group.
pub const NAMESPACES: &str = "namespaces";
/// The `operations` operation group.
pub const OPERATIONS: &str = "operations";
/// The `regions` operation group.
pub const REGIONS: &str = "regions";

// Path macros are in textual scope for the table modules declared below.

/// Prefix a path with the provider root of the current subscription.
macro_rules! subscription_path {
    ($suffix:literal) => {
        concat!(
            "/subscriptions/{subscriptionId}/providers/Microsoft.EventHub",
            $suffix
        )
    };
}

/// Prefix a path with the provider root of a resource group.
macro_rules! resource_group_path {
    ($suffix:literal) => {
        concat!(
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}",
            "/providers/Microsoft.EventHub",
            $suffix
        )
    };
}

/// Prefix a path with a namespace's resource path.
macro_rules! namespace_path {
    ($suffix:literal) => {
        concat!(
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}",
            "/providers/Microsoft.EventHub/namespaces/{namespaceName}",
            $suffix
        )
    };
}

pub mod clusters;
pub mod configuration;
pub mod consumer_groups;
pub mod disaster_recovery_configs;
pub mod event_hubs;
pub mod namespaces;
pub mod operations;
pub mod regions;

/// The HTTP verb of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Verb {
    Get,
    Put,
    Patch,
    Post,
    Delete,
}

impl Verb {
    /// The corresponding [`http::Method`].
    pub fn method(self) -> http::Method {
        match self {
            Verb::Get => http::Method::GET,
            Verb::Put => http::Method::PUT,
            Verb::Patch => http::Method::PATCH,
            Verb::Post => http::Method::POST,
            Verb::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verb::Get => "GET",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        })
    }
}

/// A single operation of an operation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDef {
    /// The operation name, e.g. `list_by_resource_group`.
    pub name: &'static str,
    /// The HTTP verb.
    pub verb: Verb,
    /// The path template, with `{param}` placeholders.
    pub path: &'static str,
    /// The model sent as the request body, if any.
    pub request_model: Option<&'static str>,
    /// The model returned on success, if any. For pageable operations this
    /// is the item model.
    pub response_model: Option<&'static str>,
    /// Whether the response is a `{value, nextLink}` page.
    pub pageable: bool,
}

impl OperationDef {
    const fn new(name: &'static str, verb: Verb, path: &'static str) -> Self {
        Self {
            name,
            verb,
            path,
            request_model: None,
            response_model: None,
            pageable: false,
        }
    }

    /// A `GET` operation.
    pub const fn get(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Get, path)
    }

    /// A `PUT` operation.
    pub const fn put(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Put, path)
    }

    /// A `PATCH` operation.
    pub const fn patch(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Patch, path)
    }

    /// A `POST` operation.
    pub const fn post(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Post, path)
    }

    /// A `DELETE` operation.
    pub const fn delete(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Verb::Delete, path)
    }

    /// Set the request body model.
    pub const fn body(self, model: &'static str) -> Self {
        Self {
            request_model: Some(model),
            ..self
        }
    }

    /// Set the response model.
    pub const fn returns(self, model: &'static str) -> Self {
        Self {
            response_model: Some(model),
            ..self
        }
    }

    /// Mark the operation as pageable, returning pages of `model`.
    pub const fn paged(self, model: &'static str) -> Self {
        Self {
            response_model: Some(model),
            pageable: true,
            ..self
        }
    }

    /// The names of the `{param}` placeholders in the path template, in
    /// order.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> + use<> {
        let path: &'static str = self.path;
        path.split('{')
            .skip(1)
            .filter_map(|s| s.split_once('}').map(|(name, _)| name))
    }
}

/// The operations of one group at one API version.
#[derive(Debug)]
pub struct OperationTable {
    /// The operation group.
    pub group: &'static str,
    /// The API version.
    pub api_version: &'static str,
    /// The operations.
    pub operations: &'static [OperationDef],
}

impl OperationTable {
    /// Look up an operation by name.
    pub fn get(&self, name: &str) -> Option<&'static OperationDef> {
        let operations: &'static [OperationDef] = self.operations;
        operations.iter().find(|op| op.name == name)
    }

    /// The names of all operations in the table.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let operations: &'static [OperationDef] = self.operations;
        operations.iter().map(|op| op.name)
    }
}

/// Every operation table shipped with this crate.
pub fn builtin() -> impl Iterator<Item = &'static OperationTable> {
    [
        &clusters::V2018_01_01_PREVIEW,
        &configuration::V2018_01_01_PREVIEW,
        &consumer_groups::V2015_08_01,
        &consumer_groups::V2017_04_01,
        &consumer_groups::V2018_01_01_PREVIEW,
        &disaster_recovery_configs::V2017_04_01,
        &disaster_recovery_configs::V2018_01_01_PREVIEW,
        &event_hubs::V2015_08_01,
        &event_hubs::V2017_04_01,
        &event_hubs::V2018_01_01_PREVIEW,
        &namespaces::V2015_08_01,
        &namespaces::V2017_04_01,
        &namespaces::V2018_01_01_PREVIEW,
        &operations::V2015_08_01,
        &operations::V2017_04_01,
        &operations::V2018_01_01_PREVIEW,
        &regions::V2017_04_01,
        &regions::V2018_01_01_PREVIEW,
    ]
    .into_iter()
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;

    use super::*;
    use crate::models::ModelSet;

    #[test]
    fn path_params() {
        let op = namespaces::V2017_04_01.get("get_authorization_rule").unwrap();
        let params: Vec<_> = op.path_params().collect();
        assert_eq!(
            params,
            vec![
                "subscriptionId",
                "resourceGroupName",
                "namespaceName",
                "authorizationRuleName"
            ]
        );
    }

    #[test]
    fn operation_names_unique() {
        for table in builtin() {
            let names: BTreeSet<_> = table.names().collect();
            assert_eq!(
                names.len(),
                table.operations.len(),
                "duplicate operation in {}@{}",
                table.group,
                table.api_version
            );
        }
    }

    // Every model an operation references must exist at the table's version.
    #[test]
    fn models_exist_at_version() {
        for table in builtin() {
            let models = ModelSet::for_version(table.api_version).unwrap();
            for op in table.operations {
                for model in op.request_model.iter().chain(op.response_model.iter()) {
                    assert!(
                        models.contains(model),
                        "{}@{}::{} references unknown model {model}",
                        table.group,
                        table.api_version,
                        op.name
                    );
                }
            }
        }
    }

    #[test]
    fn verbs() {
        assert_eq!(Verb::Patch.method(), http::Method::PATCH);
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }
}
