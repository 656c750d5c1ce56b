use std::{
    collections::BTreeMap,
    sync::{Arc, OnceLock},
};

use crate::{
    models::{self, ModelSet},
    operations::{self, OperationTable},
};

use super::ApiVersionCatalog;

/// Maps (operation group, API version) to an operation table, and API
/// version to a model set. Lookups are by exact key.
#[derive(Debug, Default, Clone)]
pub struct OperationRegistry {
    tables: BTreeMap<&'static str, BTreeMap<&'static str, &'static OperationTable>>,
    models: BTreeMap<&'static str, &'static ModelSet>,
}

impl OperationRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of every operation table and model set shipped with this
    /// crate. Built once per process.
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<OperationRegistry>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let mut registry = OperationRegistry::new();
                for set in models::builtin() {
                    registry.register_models(set);
                }

                for table in operations::builtin() {
                    registry.register(table);
                }

                Arc::new(registry)
            })
            .clone()
    }

    /// Register an operation table, replacing any table previously
    /// registered for the same group and version.
    pub fn register(&mut self, table: &'static OperationTable) -> &mut Self {
        self.tables
            .entry(table.group)
            .or_default()
            .insert(table.api_version, table);
        self
    }

    /// Register the model set of an API version.
    pub fn register_models(&mut self, models: &'static ModelSet) -> &mut Self {
        self.models.insert(models.api_version(), models);
        self
    }

    /// The table for a group at a version.
    pub fn get(&self, group: &str, api_version: &str) -> Option<&'static OperationTable> {
        self.tables.get(group)?.get(api_version).copied()
    }

    /// The model set of a version.
    pub fn models(&self, api_version: &str) -> Option<&'static ModelSet> {
        self.models.get(api_version).copied()
    }

    /// The catalog of every registered (group, version) pair.
    pub fn catalog(&self) -> ApiVersionCatalog {
        self.tables
            .iter()
            .flat_map(|(group, versions)| versions.keys().map(move |v| (*group, *v)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::operations::{CLUSTERS, EVENT_HUBS, event_hubs};

    #[test]
    fn builtin_catalog() {
        let catalog = OperationRegistry::builtin().catalog();

        assert_eq!(catalog.groups().count(), 8);
        assert!(catalog.contains(EVENT_HUBS, "2015-08-01"));
        assert!(catalog.contains(EVENT_HUBS, "2017-04-01"));
        assert!(catalog.contains(EVENT_HUBS, "2018-01-01-preview"));

        let clusters: Vec<_> = catalog
            .versions(CLUSTERS)
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(clusters, vec!["2018-01-01-preview"]);
        assert!(!catalog.contains("regions", "2015-08-01"));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(Arc::ptr_eq(
            &OperationRegistry::builtin(),
            &OperationRegistry::builtin()
        ));
    }

    #[test]
    fn register_replaces() {
        static REPLACEMENT: OperationTable = OperationTable {
            group: EVENT_HUBS,
            api_version: "2017-04-01",
            operations: &[],
        };

        let mut registry = OperationRegistry::new();
        registry.register(&event_hubs::V2017_04_01);
        registry.register(&REPLACEMENT);

        let table = registry.get(EVENT_HUBS, "2017-04-01").unwrap();
        assert!(std::ptr::eq(table, &REPLACEMENT));
        assert!(registry.get(EVENT_HUBS, "2015-08-01").is_none());
        assert!(registry.models("2017-04-01").is_none());
    }
}
