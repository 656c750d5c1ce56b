use std::{collections::BTreeMap, fmt, fs::File, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{DEFAULT_API_VERSION, LoadError};

/// A named set of API version pins.
///
/// A profile can pin individual operation groups, and may carry a wildcard
/// `default` that applies to every group it doesn't pin.
///
/// ```yaml
/// name: hybrid
/// default: "2017-04-01"
/// operation_groups:
///   event_hubs: "2015-08-01"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProfile {
    /// The profile name.
    pub name: String,
    /// The version for groups without a pin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Per-group pins.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub operation_groups: BTreeMap<String, String>,
}

impl Default for ApiProfile {
    fn default() -> Self {
        Self::default_profile()
    }
}

impl ApiProfile {
    /// An empty profile with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            operation_groups: BTreeMap::new(),
        }
    }

    /// The `default` profile: no pins, so every group resolves to the
    /// client's default version.
    pub fn default_profile() -> Self {
        Self::new("default")
    }

    /// The `latest` profile: every group resolves to
    /// [`DEFAULT_API_VERSION`].
    pub fn latest() -> Self {
        Self::new("latest").with_default(DEFAULT_API_VERSION)
    }

    /// A profile pinning every group to `version`.
    pub fn pinned(version: impl Into<String>) -> Self {
        let version = version.into();
        Self::new(version.clone()).with_default(version)
    }

    /// Set the wildcard version.
    pub fn with_default(self, version: impl Into<String>) -> Self {
        Self {
            default: Some(version.into()),
            ..self
        }
    }

    /// Pin a single operation group.
    pub fn with_group(mut self, group: impl Into<String>, version: impl Into<String>) -> Self {
        self.operation_groups.insert(group.into(), version.into());
        self
    }

    /// The version this profile selects for a group: its pin if present,
    /// otherwise the wildcard.
    pub fn version_for(&self, group: &str) -> Option<&str> {
        self.operation_groups
            .get(group)
            .or(self.default.as_ref())
            .map(String::as_str)
    }

    /// Parse a profile from YAML.
    pub fn from_yaml(s: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Read a profile from a YAML file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Ok(serde_yaml::from_reader(file)?)
    }
}

/// Indicates that the profile name was unrecognized.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown profile: {0}")]
pub struct UnknownProfile(String);

/// The profiles shipped with the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownProfile {
    /// See [`ApiProfile::default_profile`].
    Default,
    /// See [`ApiProfile::latest`].
    Latest,
}

impl KnownProfile {
    /// The profile's pins.
    pub fn profile(self) -> ApiProfile {
        match self {
            KnownProfile::Default => ApiProfile::default_profile(),
            KnownProfile::Latest => ApiProfile::latest(),
        }
    }
}

impl fmt::Display for KnownProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KnownProfile::Default => "default",
            KnownProfile::Latest => "latest",
        })
    }
}

impl FromStr for KnownProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(KnownProfile::Default),
            "latest" => Ok(KnownProfile::Latest),
            _ => Err(UnknownProfile(s.to_owned())),
        }
    }
}

impl From<KnownProfile> for ApiProfile {
    fn from(value: KnownProfile) -> Self {
        value.profile()
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn pin_beats_wildcard() {
        let profile = ApiProfile::latest().with_group("event_hubs", "2015-08-01");

        assert_eq!(profile.version_for("event_hubs"), Some("2015-08-01"));
        assert_eq!(profile.version_for("namespaces"), Some(DEFAULT_API_VERSION));
        assert_eq!(ApiProfile::default_profile().version_for("namespaces"), None);
    }

    #[test]
    fn from_yaml() -> anyhow::Result<()> {
        let profile = ApiProfile::from_yaml(
            r#"
name: hybrid
operation_groups:
  clusters: "2018-01-01-preview"
"#,
        )?;

        assert_eq!(profile.name, "hybrid");
        assert_eq!(profile.default, None);
        assert_eq!(profile.version_for("clusters"), Some("2018-01-01-preview"));

        Ok(())
    }

    #[test]
    fn known_profiles() {
        assert_eq!("latest".parse::<KnownProfile>().unwrap(), KnownProfile::Latest);
        assert_eq!(KnownProfile::Default.to_string(), "default");
        assert_matches!("2019-01-01".parse::<KnownProfile>(), Err(UnknownProfile(_)));
        assert_eq!(ApiProfile::from(KnownProfile::Latest), ApiProfile::latest());
    }
}
