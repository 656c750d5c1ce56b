use std::{
    collections::BTreeMap,
    env, fmt,
    fs::File,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{
    ClientBuilder,
    dispatch::{
        ApiProfile, ApiVersionCatalog, KnownProfile, LoadError, OperationRegistry,
        VersionResolver,
    },
};

const DEFAULT_BASE_URL: &str = "https://management.azure.com";

/// An error encountered while loading or resolving a configuration context.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The config file could not be read.
    #[error("Failed to load config file")]
    Io(#[from] io::Error),
    /// The config file is not valid YAML, or has the wrong shape.
    #[error("Invalid configuration")]
    Invalid(#[from] serde_yaml::Error),
    /// The config file has no context with this name.
    #[error("Context '{0}' not found")]
    ContextNotFound(String),
    /// The access token is not ASCII, so it can't be sent in a header.
    #[error("Access token contains invalid characters")]
    InvalidAccessToken,
    /// Neither the context nor the environment supplied a token.
    #[error("No access token found")]
    NoAccessToken,
    /// Neither the context nor the environment supplied a subscription.
    #[error("No subscription ID found")]
    NoSubscriptionId,
    /// The base URL could not be parsed.
    #[error("Invalid base URL")]
    InvalidUrl(#[from] url::ParseError),
    /// The named profile is neither built in nor a readable profile file.
    #[error("Failed to load API profile {0:?}")]
    InvalidProfile(String, #[source] LoadError),
    /// The catalog file could not be read.
    #[error("Failed to load API version catalog")]
    InvalidCatalog(#[source] LoadError),
}

/// A fully resolved configuration context for talking to the management
/// endpoint.
#[derive(Clone, Serialize)]
pub struct Settings {
    /// The name of the context.
    pub name: String,
    /// The management endpoint.
    pub base_url: Url,
    /// The subscription that operations act on.
    pub subscription_id: String,
    /// The bearer token to use for authentication.
    #[serde(skip)]
    pub access_token: String,
    /// Pin every operation group to this API version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    /// The API profile: `default`, `latest`, or the path to a profile file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_profile: Option<String>,
    /// The path to an API version catalog that narrows the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// The user-agent used on requests. Intended for internal use.
    #[serde(skip)]
    pub user_agent: String,
    /// The config file this context was loaded from, or the canonical one if
    /// no config file exists.
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("name", &self.name)
            .field("base_url", &self.base_url.as_str())
            .field("subscription_id", &self.subscription_id)
            .field("access_token", &"********")
            .field("api_version", &self.api_version)
            .field("api_profile", &self.api_profile)
            .field("catalog", &self.catalog)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// A context stored in the config file.
#[derive(Debug, Default, Clone, Deserialize)]
struct ConfigContext {
    subscription_id: Option<String>,
    access_token: Option<String>,
    base_url: Option<String>,
    api_version: Option<String>,
    api_profile: Option<String>,
    catalog: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct Config {
    #[serde(default)]
    contexts: BTreeMap<String, ConfigContext>,
}

impl Settings {
    /// Load the current context from the configuration file (usually
    /// ~/.config/eventhub-mgmt.yaml). If no configuration file is present,
    /// then the configuration will be loaded solely from the environment.
    ///
    /// If `EVENTHUB_MGMT_CONTEXT` is set, that will be used to select the
    /// context. Otherwise the context `default` will be used.
    ///
    /// The following environment variables override the corresponding
    /// values in the config file:
    ///
    /// | Environment Variable            | Config Value      |
    /// |---------------------------------|-------------------|
    /// | `EVENTHUB_MGMT_ACCESS_TOKEN`    | `access_token`    |
    /// | `EVENTHUB_MGMT_SUBSCRIPTION_ID` | `subscription_id` |
    /// | `EVENTHUB_MGMT_BASE_URL`        | `base_url`        |
    /// | `EVENTHUB_MGMT_API_VERSION`     | `api_version`     |
    /// | `EVENTHUB_MGMT_API_PROFILE`     | `api_profile`     |
    pub fn from_default_env() -> Result<Self, Error> {
        Self::from_env(&Self::default_context_name())
    }

    /// The name of the context [`Settings::from_default_env`] would load.
    pub fn default_context_name() -> String {
        env::var("EVENTHUB_MGMT_CONTEXT").unwrap_or_else(|_| "default".to_owned())
    }

    /// The config file contexts are read from. The file may not exist yet.
    pub fn config_path() -> Result<PathBuf, Error> {
        find_config()
    }

    /// Load the given context from the configuration file, with environment
    /// overrides. See [`Settings::from_default_env`].
    pub fn from_env(name: &str) -> Result<Self, Error> {
        let (context, config_path) = env_context(name)?;
        Self::from_raw(context, name.to_owned(), config_path)
    }

    /// Modifies the user-agent to have a different prefix. Intended for
    /// internal use.
    #[doc(hidden)]
    pub fn with_ua_product(self, ua_product: &str) -> Self {
        Self {
            user_agent: make_ua(Some(ua_product)),
            ..self
        }
    }

    /// Load the given context (or 'default') from the configuration file.
    /// Does not read any environment variables.
    ///
    /// Usually, you will want to use [Settings::from_env] instead.
    pub fn load(name: Option<&str>) -> Result<Self, Error> {
        let file = find_config()?;
        Self::read(&file, name)
    }

    /// Iterate through all contexts in the configuration file. Does not read
    /// any environment variables.
    pub fn load_all() -> Result<impl Iterator<Item = Self>, Error> {
        let path = find_config()?;
        Self::read_all(path)
    }

    /// Load the given context (or 'default') from the given file. Does not
    /// read any environment variables.
    pub fn read(path: impl AsRef<Path>, name: Option<&str>) -> Result<Self, Error> {
        let path = path.as_ref();
        let name = name.unwrap_or("default").to_owned();
        let context = read_context(path, &name)?;
        Self::from_raw(context, name, path.to_owned())
    }

    /// Read all contexts from the given file. Does not read any environment
    /// variables.
    pub fn read_all(path: impl AsRef<Path>) -> Result<impl Iterator<Item = Self>, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let config: Config = serde_yaml::from_reader(file)?;

        let contexts: Result<Vec<_>, Error> = config
            .contexts
            .into_iter()
            .map(|(name, raw)| Settings::from_raw(raw, name, path.to_owned()))
            .collect();

        Ok(contexts?.into_iter())
    }

    fn from_raw(raw: ConfigContext, name: String, path: PathBuf) -> Result<Self, Error> {
        let ConfigContext {
            subscription_id,
            access_token,
            base_url,
            api_version,
            api_profile,
            catalog,
        } = raw;

        let base_url = Url::parse(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let access_token = access_token.ok_or(Error::NoAccessToken)?;
        if !access_token.is_ascii() {
            return Err(Error::InvalidAccessToken);
        }

        let subscription_id = subscription_id
            .filter(|s| !s.is_empty())
            .ok_or(Error::NoSubscriptionId)?;

        let catalog = catalog.map(|c| relative_to_config(&path, c));

        Ok(Self {
            name,
            base_url,
            subscription_id,
            access_token,
            api_version,
            api_profile,
            catalog,
            user_agent: make_ua(None),
            config_path: path,
        })
    }

    /// Resolve the configured API profile. `default` and `latest` name the
    /// built-in profiles; anything else is read as a profile file.
    pub fn api_profile(&self) -> Result<ApiProfile, Error> {
        resolve_profile(self.api_profile.as_deref())
    }

    /// Read the configured catalog, if any.
    pub fn catalog(&self) -> Result<Option<ApiVersionCatalog>, Error> {
        read_catalog(self.catalog.as_deref())
    }

    /// The version selection of this context.
    pub fn versions(&self) -> VersionSettings {
        VersionSettings {
            api_version: self.api_version.clone(),
            api_profile: self.api_profile.clone(),
            catalog: self.catalog.clone(),
        }
    }

    /// A [`ClientBuilder`] preconfigured from these settings.
    pub fn client_builder(&self) -> Result<ClientBuilder, Error> {
        let mut builder = ClientBuilder::new(
            StaticToken::new(&self.access_token),
            &self.subscription_id,
        )
        .base_url(self.base_url.clone())
        .user_agent(&self.user_agent)
        .profile(self.api_profile()?);

        if let Some(version) = &self.api_version {
            builder = builder.api_version(version);
        }

        if let Some(catalog) = self.catalog()? {
            builder = builder.catalog(catalog);
        }

        Ok(builder)
    }
}

/// The parts of a context that decide which API version each operation
/// group binds to. Unlike [`Settings`], these load without credentials.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VersionSettings {
    /// Pin every operation group to this API version.
    pub api_version: Option<String>,
    /// The API profile: `default`, `latest`, or the path to a profile file.
    pub api_profile: Option<String>,
    /// The path to an API version catalog that narrows the built-in one.
    pub catalog: Option<PathBuf>,
}

impl VersionSettings {
    /// Load the version selection of a context, with the same environment
    /// overrides as [`Settings::from_env`]. A missing config file yields
    /// the environment alone.
    pub fn from_env(name: &str) -> Result<Self, Error> {
        let (context, config_path) = env_context(name)?;
        Ok(Self::from_raw(context, &config_path))
    }

    /// Only the `EVENTHUB_MGMT_API_VERSION` and `EVENTHUB_MGMT_API_PROFILE`
    /// environment variables.
    pub fn from_env_vars() -> Self {
        let context = with_env_overrides(ConfigContext::default());
        Self {
            api_version: context.api_version,
            api_profile: context.api_profile,
            catalog: None,
        }
    }

    /// Load the version selection of the given context (or 'default') from
    /// the given file. Does not read any environment variables.
    pub fn read(path: impl AsRef<Path>, name: Option<&str>) -> Result<Self, Error> {
        let path = path.as_ref();
        let context = read_context(path, name.unwrap_or("default"))?;
        Ok(Self::from_raw(context, path))
    }

    fn from_raw(raw: ConfigContext, path: &Path) -> Self {
        Self {
            api_version: raw.api_version,
            api_profile: raw.api_profile,
            catalog: raw.catalog.map(|c| relative_to_config(path, c)),
        }
    }

    /// Resolve the configured API profile. See [`Settings::api_profile`].
    pub fn api_profile(&self) -> Result<ApiProfile, Error> {
        resolve_profile(self.api_profile.as_deref())
    }

    /// Read the configured catalog, if any.
    pub fn catalog(&self) -> Result<Option<ApiVersionCatalog>, Error> {
        read_catalog(self.catalog.as_deref())
    }

    /// A resolver that picks the same versions a client built from these
    /// settings over `registry` would.
    pub fn resolver(&self, registry: &OperationRegistry) -> Result<VersionResolver, Error> {
        let catalog = self.catalog()?.unwrap_or_else(|| registry.catalog());
        Ok(VersionResolver::new(catalog)
            .with_profile(self.api_profile()?)
            .with_api_version(self.api_version.clone()))
    }
}

fn resolve_profile(name: Option<&str>) -> Result<ApiProfile, Error> {
    let Some(name) = name else {
        return Ok(ApiProfile::default_profile());
    };

    if let Ok(known) = name.parse::<KnownProfile>() {
        return Ok(known.profile());
    }

    ApiProfile::read(name).map_err(|e| Error::InvalidProfile(name.to_owned(), e))
}

fn read_catalog(path: Option<&Path>) -> Result<Option<ApiVersionCatalog>, Error> {
    path.map(|path| ApiVersionCatalog::read(path).map_err(Error::InvalidCatalog))
        .transpose()
}

// Relative catalog paths are relative to the config file.
fn relative_to_config(config_path: &Path, catalog: PathBuf) -> PathBuf {
    match config_path.parent() {
        Some(dir) if catalog.is_relative() => dir.join(catalog),
        _ => catalog,
    }
}

/// An error returned by a [`TokenCredential`].
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct CredentialError(pub String);

/// Supplies bearer tokens for outgoing requests.
///
/// Acquiring tokens is left to the caller; implement this for whatever
/// source of tokens you have. Closures returning a token work too.
pub trait TokenCredential: Send + Sync {
    /// Return a token valid for the management endpoint.
    fn token(&self) -> Result<String, CredentialError>;
}

impl<F> TokenCredential for F
where
    F: Fn() -> Result<String, CredentialError> + Send + Sync,
{
    fn token(&self) -> Result<String, CredentialError> {
        self()
    }
}

/// A fixed bearer token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(********)")
    }
}

impl TokenCredential for StaticToken {
    fn token(&self) -> Result<String, CredentialError> {
        Ok(self.0.clone())
    }
}

/// Connection settings shared by every operation handle of a client.
#[derive(Clone)]
pub struct ClientConfiguration {
    /// The source of bearer tokens.
    pub credential: Arc<dyn TokenCredential>,
    /// The subscription that operations act on.
    pub subscription_id: String,
    /// The management endpoint.
    pub base_url: Url,
    /// The user-agent sent on every request.
    pub user_agent: String,
}

impl ClientConfiguration {
    /// A configuration against the public management endpoint.
    pub fn new(credential: Arc<dyn TokenCredential>, subscription_id: impl Into<String>) -> Self {
        Self {
            credential,
            subscription_id: subscription_id.into(),
            base_url: default_base_url(),
            user_agent: make_ua(None),
        }
    }
}

impl fmt::Debug for ClientConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfiguration")
            .field("subscription_id", &self.subscription_id)
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

pub(crate) fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL should be valid")
}

fn find_config() -> Result<PathBuf, Error> {
    let Some(home) = env::home_dir() else {
        return Err(Error::Io(io::Error::other(
            "No $HOME found for the current user",
        )));
    };

    let canonical = home.join(".config/eventhub-mgmt.yaml");
    if canonical.exists() {
        return Ok(canonical);
    }

    // Try some fallback paths, and if that doesn't work, return the error from
    // the canonical location.
    for fallback in [
        ".config/eventhub-mgmt.yml",
        ".eventhub-mgmt/config.yaml",
        ".eventhub-mgmt/config.yml",
    ] {
        let path = home.join(fallback);
        if path.exists() {
            return Ok(path);
        }
    }

    Ok(canonical)
}

/// Read a context from the config file, if there is one, and apply the
/// environment overrides on top.
fn env_context(name: &str) -> Result<(ConfigContext, PathBuf), Error> {
    let config_path = find_config()?;
    let context = match read_context(&config_path, name) {
        Ok(c) => c,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no config file found");
            Default::default()
        }
        Err(e) => return Err(e),
    };

    Ok((with_env_overrides(context), config_path))
}

fn with_env_overrides(context: ConfigContext) -> ConfigContext {
    let var = |key: &str| env::var(key).ok();
    ConfigContext {
        subscription_id: var("EVENTHUB_MGMT_SUBSCRIPTION_ID").or(context.subscription_id),
        access_token: var("EVENTHUB_MGMT_ACCESS_TOKEN").or(context.access_token),
        base_url: var("EVENTHUB_MGMT_BASE_URL").or(context.base_url),
        api_version: var("EVENTHUB_MGMT_API_VERSION").or(context.api_version),
        api_profile: var("EVENTHUB_MGMT_API_PROFILE").or(context.api_profile),
        catalog: context.catalog,
    }
}

fn read_context(p: &Path, name: &str) -> Result<ConfigContext, Error> {
    let file = File::open(p)?;
    let mut config: Config = serde_yaml::from_reader(file).map_err(Error::Invalid)?;
    let Some(context) = config.contexts.remove(name) else {
        return Err(Error::ContextNotFound(name.to_string()));
    };

    debug!(path = %p.display(), context = name, "loaded config file");

    Ok(context)
}

pub(crate) fn make_ua(product: Option<&str>) -> String {
    format!(
        "{}/{}",
        product.unwrap_or("eventhub-mgmt"),
        env!("EHM_VERSION")
    )
}

#[cfg(test)]
mod test {
    use std::io::Write as _;

    use assert_matches::assert_matches;

    use super::*;

    fn write_config(contents: &str) -> anyhow::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(contents.as_bytes())?;
        Ok(file)
    }

    const CONFIG: &str = r#"
contexts:
  default:
    subscription_id: 00000000-0000-0000-0000-000000000000
    access_token: secret
  preview:
    subscription_id: 11111111-1111-1111-1111-111111111111
    access_token: other-secret
    base_url: http://localhost:8080
    api_version: "2018-01-01-preview"
    api_profile: latest
"#;

    #[test]
    fn read_default() -> anyhow::Result<()> {
        let file = write_config(CONFIG)?;
        let settings = Settings::read(file.path(), None)?;

        assert_eq!(settings.name, "default");
        assert_eq!(settings.base_url.as_str(), "https://management.azure.com/");
        assert_eq!(settings.access_token, "secret");
        assert_eq!(settings.api_version, None);
        assert_eq!(settings.api_profile()?, ApiProfile::default_profile());

        Ok(())
    }

    #[test]
    fn read_named() -> anyhow::Result<()> {
        let file = write_config(CONFIG)?;
        let settings = Settings::read(file.path(), Some("preview"))?;

        assert_eq!(settings.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(settings.api_version.as_deref(), Some("2018-01-01-preview"));
        assert_eq!(settings.api_profile()?, ApiProfile::latest());

        Ok(())
    }

    #[test]
    fn read_all() -> anyhow::Result<()> {
        let file = write_config(CONFIG)?;
        let names: Vec<_> = Settings::read_all(file.path())?.map(|s| s.name).collect();
        assert_eq!(names, vec!["default", "preview"]);

        Ok(())
    }

    #[test]
    fn missing_context() -> anyhow::Result<()> {
        let file = write_config(CONFIG)?;
        assert_matches!(
            Settings::read(file.path(), Some("prod")),
            Err(Error::ContextNotFound(name)) if name == "prod"
        );

        Ok(())
    }

    #[test]
    fn missing_token() -> anyhow::Result<()> {
        let file = write_config("contexts:\n  default:\n    subscription_id: abc\n")?;
        assert_matches!(Settings::read(file.path(), None), Err(Error::NoAccessToken));

        Ok(())
    }

    #[test]
    fn token_is_masked() -> anyhow::Result<()> {
        let file = write_config(CONFIG)?;
        let settings = Settings::read(file.path(), None)?;

        let debug = format!("{settings:?}");
        assert!(!debug.contains("secret"));

        let json = serde_json::to_string(&settings)?;
        assert!(!json.contains("secret"));

        Ok(())
    }

    #[test]
    fn profile_and_catalog_files() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(
            dir.path().join("catalog.yaml"),
            "event_hubs: [\"2015-08-01\"]\n",
        )?;

        let profile_path = dir.path().join("profile.yaml");
        std::fs::write(
            &profile_path,
            "name: old\ndefault: \"2015-08-01\"\n",
        )?;

        let config_path = dir.path().join("config.yaml");
        std::fs::write(
            &config_path,
            format!(
                "contexts:\n  default:\n    subscription_id: abc\n    access_token: t\n    catalog: catalog.yaml\n    api_profile: {}\n",
                profile_path.display()
            ),
        )?;

        let settings = Settings::read(&config_path, None)?;
        assert_eq!(settings.api_profile()?.name, "old");

        let catalog = settings.catalog()?.unwrap();
        assert!(catalog.contains("event_hubs", "2015-08-01"));
        assert!(catalog.versions("namespaces").is_none());

        Ok(())
    }

    #[test]
    fn versions_without_credentials() -> anyhow::Result<()> {
        let file = write_config(
            "contexts:\n  default:\n    api_version: \"2015-08-01\"\n  preview:\n    api_profile: latest\n",
        )?;

        assert_matches!(
            Settings::read(file.path(), None),
            Err(Error::NoAccessToken)
        );

        let registry = OperationRegistry::builtin();
        let versions = VersionSettings::read(file.path(), None)?;
        assert_eq!(versions.api_version.as_deref(), Some("2015-08-01"));
        let resolver = versions.resolver(&registry)?;
        assert_eq!(resolver.get_api_version("event_hubs")?, "2015-08-01");

        let preview = VersionSettings::read(file.path(), Some("preview"))?;
        assert_eq!(preview.api_profile()?.name, "latest");
        assert_eq!(
            preview.resolver(&registry)?.get_api_version("namespaces")?,
            "2017-04-01"
        );

        let settings = Settings::read(write_config(CONFIG)?.path(), Some("preview"))?;
        assert_eq!(
            settings.versions().api_version.as_deref(),
            Some("2018-01-01-preview")
        );

        Ok(())
    }

    #[test]
    fn closure_credential() {
        let credential = || Ok::<_, CredentialError>("from-closure".to_owned());
        let config = ClientConfiguration::new(Arc::new(credential), "sub");
        assert_eq!(config.credential.token().unwrap(), "from-closure");
        assert!(!format!("{config:?}").contains("from-closure"));
    }
}
