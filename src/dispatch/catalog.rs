use std::{
    collections::{BTreeMap, BTreeSet},
    fs::File,
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::LoadError;

/// The API versions each operation group is available at.
///
/// Serialized as a plain mapping:
///
/// ```yaml
/// event_hubs: ["2015-08-01", "2017-04-01"]
/// namespaces: ["2017-04-01"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiVersionCatalog(BTreeMap<String, BTreeSet<String>>);

impl ApiVersionCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from YAML.
    pub fn from_yaml(s: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Read a catalog from a YAML file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }

    /// Add a version to a group.
    pub fn insert(&mut self, group: impl Into<String>, version: impl Into<String>) {
        self.0
            .entry(group.into())
            .or_default()
            .insert(version.into());
    }

    /// The versions registered for a group, or `None` if the group is
    /// unknown.
    pub fn versions(&self, group: &str) -> Option<&BTreeSet<String>> {
        self.0.get(group)
    }

    /// Whether the group is available at the version.
    pub fn contains(&self, group: &str, version: &str) -> bool {
        self.versions(group).is_some_and(|v| v.contains(version))
    }

    /// Whether any group is available at the version.
    pub fn has_version(&self, version: &str) -> bool {
        self.0.values().any(|v| v.contains(version))
    }

    /// Iterate over the operation groups.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over every (group, versions) entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.0.iter().map(|(g, v)| (g.as_str(), v))
    }

    /// Every distinct version in the catalog.
    pub fn all_versions(&self) -> BTreeSet<&str> {
        self.0.values().flatten().map(String::as_str).collect()
    }
}

impl<G: Into<String>, V: Into<String>> FromIterator<(G, V)> for ApiVersionCatalog {
    fn from_iter<I: IntoIterator<Item = (G, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (group, version) in iter {
            catalog.insert(group, version);
        }

        catalog
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_yaml() -> anyhow::Result<()> {
        let catalog = ApiVersionCatalog::from_yaml(
            r#"
event_hubs: ["2015-08-01", "2017-04-01"]
regions:
  - "2017-04-01"
"#,
        )?;

        assert!(catalog.contains("event_hubs", "2015-08-01"));
        assert!(!catalog.contains("regions", "2015-08-01"));
        assert!(catalog.versions("clusters").is_none());
        assert_eq!(
            catalog.all_versions().into_iter().collect::<Vec<_>>(),
            vec!["2015-08-01", "2017-04-01"]
        );

        Ok(())
    }

    #[test]
    fn from_iter() {
        let catalog: ApiVersionCatalog = [
            ("namespaces", "2017-04-01"),
            ("namespaces", "2015-08-01"),
            ("namespaces", "2017-04-01"),
        ]
        .into_iter()
        .collect();

        let versions: Vec<_> = catalog
            .versions("namespaces")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(versions, vec!["2015-08-01", "2017-04-01"]);
    }
}
